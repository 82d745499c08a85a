//! # Utilikit Library
//!
//! A toolbox of small file, document and data utilities. This library
//! provides:
//! - Recursive directory scans sorted by file size
//! - Markdown conversion to themed HTML and A4 PDF, with syntax-highlighted
//!   code blocks and rendered mermaid diagrams
//! - XML validation against XSD schemas through libxml2
//! - Image color inversion
//! - Empirical CDF and density curves of sampled distributions, plotted to PNG

pub mod cli;
pub mod commands;
pub mod logger;
pub mod parallel_processing;
pub mod rendering;
pub mod stats;
pub mod utils;

// Re-export commonly used items
pub use logger::Logger;
pub use parallel_processing::{process_files_parallel, ParallelState};
pub use utils::{escape_html, format_size, minify_html};
