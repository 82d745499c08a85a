//! Parallel batch processing with progress tracking.
//!
//! Centralizes the counters and the rayon loop used when a command is given a
//! whole directory of inputs instead of a single file.

use crate::logger::Logger;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Counters and state for parallel operations
pub struct ParallelState {
    /// Number of items processed so far
    pub processed: Arc<AtomicUsize>,
    /// Number of successful items
    pub successful: Arc<AtomicUsize>,
    /// List of failures with descriptions
    pub failures: Arc<Mutex<Vec<(String, String)>>>,
}

impl ParallelState {
    /// Create a new parallel state for tracking progress
    pub fn new() -> Self {
        ParallelState {
            processed: Arc::new(AtomicUsize::new(0)),
            successful: Arc::new(AtomicUsize::new(0)),
            failures: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Increment the processed counter and return the new value
    pub fn increment_processed(&self) -> usize {
        self.processed.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Increment the successful counter
    pub fn increment_successful(&self) {
        self.successful.fetch_add(1, Ordering::SeqCst);
    }

    /// Add a failure to the failures list
    pub fn add_failure(&self, name: String, error: String) {
        self.failures.lock().unwrap().push((name, error));
    }

    /// Get the current count of successful items
    pub fn get_successful(&self) -> usize {
        self.successful.load(Ordering::SeqCst)
    }

    /// Get all failures as a vector
    pub fn get_failures(&self) -> Vec<(String, String)> {
        self.failures.lock().unwrap().clone()
    }

    /// Get the number of failures
    pub fn get_failure_count(&self) -> usize {
        self.failures.lock().unwrap().len()
    }

    /// Report completion and log failures
    pub fn report_completion_with_failures(&self, total: usize, operation: &str) {
        Logger::parallel_complete(
            self.get_successful(),
            self.get_failure_count(),
            total,
            operation,
        );
        let failures = self.get_failures();
        if !failures.is_empty() {
            Logger::parallel_failures(&failures);
        }
    }
}

impl Default for ParallelState {
    fn default() -> Self {
        Self::new()
    }
}

/// Process a batch of files in parallel with progress tracking.
///
/// Each file is handed to `process_fn`; failures are collected per file name
/// and reported at the end instead of aborting the batch.
pub fn process_files_parallel<F>(
    file_paths: &[std::path::PathBuf],
    process_fn: F,
    progress_message: &str,
    operation_name: &str,
) -> ParallelState
where
    F: Fn(&std::path::Path) -> Result<(), Box<dyn std::error::Error>> + Send + Sync,
{
    use rayon::prelude::*;

    let total = file_paths.len();
    let state = ParallelState::new();

    file_paths.par_iter().for_each(|file_path| {
        let result = process_fn(file_path);
        let count = state.increment_processed();

        match result {
            Ok(()) => state.increment_successful(),
            Err(e) => {
                let file_name = file_path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string();
                state.add_failure(file_name, e.to_string());
            }
        }

        Logger::parallel_progress(count, total, progress_message);
    });

    state.report_completion_with_failures(total, operation_name);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parallel_state_creation() {
        let state = ParallelState::new();
        assert_eq!(state.get_successful(), 0);
        assert_eq!(state.get_failure_count(), 0);
    }

    #[test]
    fn test_parallel_state_increment() {
        let state = ParallelState::new();
        assert_eq!(state.increment_processed(), 1);
        assert_eq!(state.increment_processed(), 2);
    }

    #[test]
    fn test_parallel_state_failures() {
        let state = ParallelState::new();
        state.add_failure("file1.txt".to_string(), "error occurred".to_string());
        state.add_failure("file2.txt".to_string(), "another error".to_string());
        assert_eq!(state.get_failure_count(), 2);
        assert_eq!(state.get_failures().len(), 2);
    }

    #[test]
    fn test_process_files_parallel_mixed_results() {
        let files: Vec<PathBuf> = vec![
            PathBuf::from("ok.md"),
            PathBuf::from("bad.md"),
            PathBuf::from("also_ok.md"),
        ];

        let state = process_files_parallel(
            &files,
            |path| {
                if path.file_stem().unwrap() == "bad" {
                    Err("simulated failure".into())
                } else {
                    Ok(())
                }
            },
            "Testing",
            "test run",
        );

        assert_eq!(state.get_successful(), 2);
        assert_eq!(state.get_failure_count(), 1);
        assert_eq!(state.get_failures()[0].0, "bad.md");
    }
}
