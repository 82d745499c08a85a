//! Markdown conversion command.
//!
//! Runs the conversion pipeline (highlight fences, render mermaid diagrams,
//! convert to HTML, wrap in a themed document) and writes HTML or, through
//! headless Chromium, PDF. A directory input converts every `.md` file under
//! it in parallel.

use crate::logger::Logger;
use crate::parallel_processing::process_files_parallel;
use crate::rendering::document::{build_document, markdown_to_html, title_from_path, Theme};
use crate::rendering::highlight::CodeHighlighter;
use crate::rendering::mermaid::MermaidRenderer;
use crate::rendering::pdf::html_to_pdf;
use crate::utils::{format_size, minify_html};
use clap::ValueEnum;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Target output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Pdf,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Pdf => "pdf",
        }
    }
}

/// Settings shared by single-file and batch conversion.
pub struct ConvertOptions {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub theme: Theme,
    pub style: String,
    pub online: bool,
    pub minify: bool,
    pub standalone: bool,
    pub embed: bool,
    pub toc: bool,
}

/// Default output path: the input with its extension swapped for the format's.
pub fn output_path(input: &Path, format: OutputFormat) -> PathBuf {
    input.with_extension(format.extension())
}

/// Print the available code highlighting styles.
pub fn list_styles() {
    Logger::info("Available code styles:");
    for style in CodeHighlighter::available_styles() {
        Logger::detail(&style);
    }
}

/// Collect every `.md` file under `dir`, sorted for stable batch order.
fn collect_markdown_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("md"))
                .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Convert a single Markdown file to the requested format.
pub fn convert_file(input: &Path, output: Option<&Path>, opts: &ConvertOptions) -> Result<(), Box<dyn Error>> {
    let content = fs::read_to_string(input)
        .map_err(|e| format!("Failed to read {}: {}", input.display(), e))?;

    let destination = match output {
        Some(path) => path.to_path_buf(),
        None => output_path(input, opts.format),
    };

    Logger::file_operation("Converting", input);
    Logger::conversion("markdown", opts.format.extension());

    // Scratch dir for rendered diagrams and the intermediate HTML
    let temp_dir = TempDir::new()?;

    let highlighter = CodeHighlighter::new(&opts.style);
    let highlighted = highlighter.process_code_blocks(&content);

    let mut mermaid = MermaidRenderer::new(temp_dir.path(), opts.online, opts.embed);
    let with_diagrams = mermaid.replace_diagrams(&highlighted);

    let body = markdown_to_html(&with_diagrams, opts.toc);
    let title = title_from_path(input);
    let mut document = build_document(&title, &body, opts.theme, opts.standalone);

    if opts.minify {
        document = minify_html(&document);
    }

    match opts.format {
        OutputFormat::Html => {
            fs::write(&destination, &document)?;
        }
        OutputFormat::Pdf => {
            let html_file = temp_dir.path().join("document.html");
            fs::write(&html_file, &document)?;
            html_to_pdf(&html_file, &destination)?;
        }
    }

    let size = fs::metadata(&destination)?.len();
    Logger::success(&format!("Saved {}", destination.display()));
    Logger::stats("Output size", &format_size(size));

    Ok(())
}

/// Convert a file, or every `.md` file under a directory in parallel.
pub fn run(input: &Path, opts: &ConvertOptions) -> Result<(), Box<dyn Error>> {
    if !input.is_dir() {
        return convert_file(input, opts.output.as_deref(), opts);
    }

    if opts.output.is_some() {
        Logger::warning("--output is ignored for directory input");
    }

    let files = collect_markdown_files(input);
    if files.is_empty() {
        return Err(format!("No .md files found under {}", input.display()).into());
    }

    Logger::info(&format!(
        "Converting {} markdown files in {}",
        files.len(),
        input.display()
    ));

    let state = process_files_parallel(
        &files,
        |path| convert_file(path, None, opts),
        "Converting",
        "conversion",
    );

    if state.get_failure_count() > 0 {
        return Err(format!("{} files failed to convert", state.get_failure_count()).into());
    }

    Ok(())
}
