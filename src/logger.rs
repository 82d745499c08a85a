//! Console output for utilikit commands.
//!
//! Provides consistent, colored output with different message levels:
//! - INFO: general information (blue)
//! - SUCCESS: successful operations (green)
//! - WARNING: non-critical issues (yellow)
//! - ERROR: critical errors (red)

use colored::*;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

// Global mutex for synchronized output in multi-threaded contexts
static OUTPUT_LOCK: Mutex<()> = Mutex::new(());

/// Static logger used by every subcommand.
pub struct Logger;

#[allow(dead_code)]
impl Logger {
    /// Print application header
    pub fn header(version: &str) {
        println!("{}", "═".repeat(80).bright_blue());
        println!(
            "  {} {}",
            "utilikit".bright_white().bold(),
            format!("v{}", version).bright_blue()
        );
        println!("  {}", "File, Document & Data Utilities".bright_black());
        println!("{}", "═".repeat(80).bright_blue());
    }

    /// Print a general information message
    pub fn info(message: &str) {
        let _lock = OUTPUT_LOCK.lock().unwrap();
        println!("  {} {}", "●".bright_blue(), message);
    }

    /// Print a success message
    pub fn success(message: &str) {
        let _lock = OUTPUT_LOCK.lock().unwrap();
        println!("  {} {}", "✓".bright_green(), message.bright_white());
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        let _lock = OUTPUT_LOCK.lock().unwrap();
        println!("  {} {}", "⚠".bright_yellow(), message.yellow());
    }

    /// Print an error message to stderr
    pub fn error(message: &str) {
        let _lock = OUTPUT_LOCK.lock().unwrap();
        eprintln!("  {} {}", "✗".bright_red(), message.red());
    }

    /// Print a sub-item message (indented)
    pub fn detail(message: &str) {
        let _lock = OUTPUT_LOCK.lock().unwrap();
        println!("    · {}", message.bright_black());
    }

    /// Print a section separator
    pub fn separator() {
        let _lock = OUTPUT_LOCK.lock().unwrap();
        println!("{}", "  ─".repeat(40).bright_black());
    }

    /// Print file operation message
    pub fn file_operation(operation: &str, path: &Path) {
        Self::detail(&format!("{}: {}", operation, path.display()));
    }

    /// Print conversion message
    pub fn conversion(from: &str, to: &str) {
        Self::detail(&format!(
            "Converting: {} → {}",
            from.bright_blue(),
            to.bright_green()
        ));
    }

    /// Print statistics message
    pub fn stats(label: &str, value: &str) {
        let _lock = OUTPUT_LOCK.lock().unwrap();
        println!("    {} {}", label.bright_white(), value.bright_cyan());
    }

    /// Print a progress update for parallel operations (thread-safe)
    pub fn parallel_progress(current: usize, total: usize, message: &str) {
        let _lock = OUTPUT_LOCK.lock().unwrap();
        let percentage = (current as f64 / total as f64 * 100.0) as u8;
        let bar_width = 30;
        let filled = (bar_width as f64 * current as f64 / total as f64) as usize;
        let bar = format!(
            "[{}{}]",
            "█".repeat(filled).bright_green(),
            "░".repeat(bar_width - filled).bright_black()
        );
        print!(
            "\r  {} {}/{} ({}%) {}",
            bar,
            current.to_string().bright_cyan(),
            total.to_string().bright_white(),
            percentage.to_string().bright_yellow(),
            message.bright_black()
        );
        io::stdout().flush().unwrap();
        if current == total {
            println!(); // New line after completion
        }
    }

    /// Print parallel operation completion summary
    pub fn parallel_complete(successful: usize, failed: usize, total: usize, operation: &str) {
        let _lock = OUTPUT_LOCK.lock().unwrap();
        println!(
            "\n  {} Completed {} operations:",
            "✓".bright_green(),
            operation
        );
        println!(
            "    {} {} successful",
            "✓".bright_green(),
            successful.to_string().bright_green()
        );
        if failed > 0 {
            println!(
                "    {} {} failed",
                "✗".bright_red(),
                failed.to_string().bright_red()
            );
        }
        println!(
            "    {} {} total",
            "●".bright_blue(),
            total.to_string().bright_white()
        );
    }

    /// Print detailed failure list with error messages
    pub fn parallel_failures(failures: &[(String, String)]) {
        if failures.is_empty() {
            return;
        }

        let _lock = OUTPUT_LOCK.lock().unwrap();
        println!("\n  {} Failed items:", "✗".bright_red().bold());
        for (i, (file, error)) in failures.iter().enumerate() {
            println!(
                "    {}. {} {}",
                (i + 1).to_string().bright_red(),
                file.bright_white(),
                "→".bright_black()
            );
            println!("       {}", error.red());
        }
    }
}
