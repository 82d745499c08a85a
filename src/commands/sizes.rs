//! Directory file-size report.
//!
//! Walks a directory tree, collects every regular file with its size, and
//! prints the largest (or smallest) entries as a table.

use crate::logger::Logger;
use crate::utils::format_size;
use std::error::Error;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collect `(size, path)` pairs for every regular file under
/// `dir`, sorted by size.
///
/// Files whose metadata cannot be read are skipped with a warning.
pub fn collect_files_by_size(
    dir: &Path,
    ascending: bool,
) -> Result<Vec<(u64, PathBuf)>, Box<dyn Error>> {
    if !dir.is_dir() {
        return Err(format!("Not a directory: {}", dir.display()).into());
    }

    let mut files: Vec<(u64, PathBuf)> = Vec::new();

    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        match entry.metadata() {
            Ok(metadata) => files.push((metadata.len(), entry.path().to_path_buf())),
            Err(e) => {
                Logger::warning(&format!(
                    "Skipping {}: {}",
                    entry.path().display(),
                    e
                ));
            }
        }
    }

    if ascending {
        files.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    } else {
        files.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    }

    Ok(files)
}

/// Scan `dir` and print up to `count` entries sized-sorted.
pub fn run(dir: &Path, count: usize, ascending: bool) -> Result<(), Box<dyn Error>> {
    Logger::info(&format!("Scanning directory: {}", dir.display()));

    let files = collect_files_by_size(dir, ascending)?;

    Logger::success(&format!("Found {} files", files.len()));
    Logger::separator();

    for (size, path) in files.iter().take(count) {
        println!("{:<15} {}", format_size(*size), path.display());
    }

    if files.len() > count {
        Logger::separator();
        Logger::detail(&format!("... and {} more files", files.len() - count));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, len: usize) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, vec![b'x'; len]).unwrap();
        path
    }

    #[test]
    fn test_collect_sorted_descending() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "small.txt", 10);
        write_file(temp_dir.path(), "big.txt", 1000);
        write_file(temp_dir.path(), "medium.txt", 100);

        let files = collect_files_by_size(temp_dir.path(), false).unwrap();
        let sizes: Vec<u64> = files.iter().map(|(s, _)| *s).collect();
        assert_eq!(sizes, vec![1000, 100, 10]);
    }

    #[test]
    fn test_collect_sorted_ascending() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "small.txt", 10);
        write_file(temp_dir.path(), "big.txt", 1000);

        let files = collect_files_by_size(temp_dir.path(), true).unwrap();
        let sizes: Vec<u64> = files.iter().map(|(s, _)| *s).collect();
        assert_eq!(sizes, vec![10, 1000]);
    }

    #[test]
    fn test_collect_recurses_into_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        let sub = temp_dir.path().join("nested").join("deeper");
        fs::create_dir_all(&sub).unwrap();
        write_file(temp_dir.path(), "top.txt", 5);
        let nested = write_file(&sub, "nested.txt", 50);

        let files = collect_files_by_size(temp_dir.path(), false).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].1, nested);
    }

    #[test]
    fn test_collect_skips_directories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("empty_dir")).unwrap();
        write_file(temp_dir.path(), "only.txt", 1);

        let files = collect_files_by_size(temp_dir.path(), false).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_collect_missing_directory_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does_not_exist");
        assert!(collect_files_by_size(&missing, false).is_err());
    }

    #[test]
    fn test_run_with_count_limit() {
        let temp_dir = TempDir::new().unwrap();
        for i in 0..5 {
            write_file(temp_dir.path(), &format!("file{}.txt", i), (i + 1) * 10);
        }
        run(temp_dir.path(), 3, false).unwrap();
    }
}
