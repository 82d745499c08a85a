use crate::commands::convert::OutputFormat;
use crate::rendering::document::Theme;
use crate::rendering::highlight::DEFAULT_STYLE;
use crate::stats::plot::PlotKind;
use crate::stats::Distribution;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "utilikit",
    version,
    about = "A toolbox for file reports, markdown conversion, XML validation, image inversion, and distribution plots.",
    long_about = r#"Utilikit bundles five small file, document and data utilities behind one CLI:

- Scan a directory tree and list files by size
- Convert markdown to themed HTML or A4 PDF with syntax highlighting and mermaid diagrams
- Validate an XML document against an XSD schema (libxml2)
- Produce the color negative of an image
- Plot empirical CDF and density curves of sampled distributions

CONVERSION FEATURES:
- Fenced code blocks highlighted with selectable color styles
- Mermaid diagrams rendered locally through headless Chromium, or online via kroki.io
- Four document themes (default, dark, github, minimal), optional table of contents
- PDF output on A4 paper with 20mm margins and printed backgrounds
- Batch mode: point it at a directory and every .md file is converted in parallel"#,
    after_help = r#"EXAMPLES:

FILE SIZES:
    utilikit sizes .                              # Largest files under the current directory
    utilikit sizes /var/log 20                    # Top 20 largest files
    utilikit sizes data/ 20 --asc                 # 20 smallest files

MARKDOWN CONVERSION:
    utilikit convert README.md                    # README.html next to the input
    utilikit convert notes.md --format pdf        # A4 PDF via headless Chromium
    utilikit convert docs/ --format pdf           # Convert every .md under docs/ in parallel
    utilikit convert guide.md --theme dark --toc   # Dark theme with a table of contents
    utilikit convert guide.md --online             # Render mermaid diagrams via kroki.io
    utilikit convert --list-styles                # Show available code highlighting styles

XML VALIDATION:
    utilikit validate order.xml order.xsd         # Valid or invalid verdict
    utilikit validate order.xml order.xsd -v      # Include line/column per schema error

IMAGE INVERSION:
    utilikit invert -p photo.png                  # Writes photo_neg.png

DISTRIBUTION PLOTS:
    utilikit stats                                # Normal CDF, scales 1 2 3, stat_plot.png
    utilikit stats --dist uniform --kind pd       # Uniform density estimate
    utilikit stats --scales 0.5,1,2 --size 5000   # Compare three scales

NOTES:
- Converted files and negatives are written next to their inputs unless --output is given
- Invalid XML documents exit with a non-zero status
- Local mermaid rendering needs a Chromium/Chrome binary on PATH"#
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List files under a directory, sorted by size.
    ///
    /// Walks the whole tree, reads every file's size and prints a table with
    /// human-readable sizes. Files it cannot stat are skipped with a warning.
    #[command(about = "List files under a directory sorted by size")]
    Sizes {
        /// Directory to scan
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Maximum number of rows to print
        #[arg(value_name = "COUNT", default_value_t = 10)]
        count: usize,

        /// Sort smallest first instead of largest first
        #[arg(long)]
        asc: bool,
    },

    /// Convert markdown to themed HTML or PDF.
    ///
    /// The pipeline highlights fenced code blocks, renders mermaid diagrams
    /// (headless Chromium locally, or kroki.io with --online), converts the
    /// markdown and wraps it in a themed standalone document. PDF output is
    /// printed on A4 paper with 20mm margins. When INPUT is a directory,
    /// every .md file under it is converted in parallel.
    #[command(
        about = "Convert markdown to themed HTML or PDF",
        long_about = r#"Convert a markdown file, or every .md file under a directory, to HTML or PDF.

PIPELINE:
1. Fenced code blocks are syntax-highlighted (pick a style with --style)
2. Mermaid fences become rendered diagrams:
   - default: headless Chromium screenshots a local mermaid.js page
   - --online: kroki.io returns an SVG (no browser needed)
   A diagram that fails to render falls back to a plain code block.
3. Markdown is converted with tables, footnotes, strikethrough and task lists
4. The body is wrapped in a themed document (--theme), optionally minified

OUTPUT:
  HTML is written next to the input with the extension swapped, or to --output.
  PDF is printed through headless Chromium: A4, 20mm margins, backgrounds on.

BATCH MODE:
  A directory input converts all .md files in parallel; failures are collected
  and reported per file instead of aborting the batch."#
    )]
    Convert {
        /// Markdown file, or a directory of .md files
        #[arg(value_name = "INPUT", required_unless_present = "list_styles")]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// Output path (single-file input only; default swaps the extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Document theme
        #[arg(long, value_enum, default_value_t = Theme::Default)]
        theme: Theme,

        /// Code highlighting style
        #[arg(long, value_name = "STYLE", default_value = DEFAULT_STYLE)]
        style: String,

        /// Render mermaid diagrams via kroki.io instead of a local browser
        #[arg(long)]
        online: bool,

        /// Minify the generated HTML
        #[arg(long)]
        minify: bool,

        /// Emit only the document body, without <html>/<head> and CSS
        #[arg(long)]
        no_standalone: bool,

        /// Link rendered diagrams by file path instead of embedding them
        #[arg(long)]
        no_embed: bool,

        /// Prepend a table of contents built from the headings
        #[arg(long)]
        toc: bool,

        /// List the available code highlighting styles and exit
        #[arg(long)]
        list_styles: bool,
    },

    /// Validate an XML document against an XSD schema.
    #[command(about = "Validate an XML document against an XSD schema")]
    Validate {
        /// XML document to validate
        #[arg(value_name = "XML")]
        xml: PathBuf,

        /// XSD schema to validate against
        #[arg(value_name = "XSD")]
        xsd: PathBuf,

        /// Print line and column for every schema error
        #[arg(short, long)]
        verbose: bool,
    },

    /// Invert the colors of an image.
    ///
    /// Every RGB channel is complemented; the negative is saved next to the
    /// source as <name>_neg.<ext>.
    #[command(about = "Save the color negative of an image")]
    Invert {
        /// Image to invert
        #[arg(short, long, value_name = "FILE")]
        path: PathBuf,
    },

    /// Plot empirical CDF or density curves of a sampled distribution.
    ///
    /// Draws samples at each scale, computes linearly interpolated quantiles
    /// over a probability grid, and plots one series per scale. The density
    /// estimate is the numerical derivative of the quantile curve.
    #[command(about = "Plot empirical CDF or density curves of sampled distributions")]
    Stats {
        /// Distribution to sample
        #[arg(long, value_enum, default_value_t = Distribution::Normal)]
        dist: Distribution,

        /// Number of samples per scale
        #[arg(long, default_value_t = 1000)]
        size: usize,

        /// Distribution scales to compare, comma-separated
        #[arg(long, value_delimiter = ',', default_value = "1,2,3")]
        scales: Vec<f64>,

        /// Probability grid step for the quantile curve
        #[arg(long, default_value_t = 0.01)]
        step: f64,

        /// Curve kind: cumulative distribution or probability density
        #[arg(long, value_enum, default_value_t = PlotKind::Cdf)]
        kind: PlotKind,

        /// Output PNG path
        #[arg(short, long, value_name = "FILE", default_value = "stat_plot.png")]
        output: PathBuf,
    },
}
