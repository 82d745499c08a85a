//! PDF rasterization through headless Chromium.

use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::Browser;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

// A4 dimensions and 20 mm margins, in inches as Chromium expects.
const A4_WIDTH_IN: f64 = 8.27;
const A4_HEIGHT_IN: f64 = 11.69;
const MARGIN_IN: f64 = 0.79;

// Embedded fonts and inlined diagrams may still be settling after the page
// load event fires; mirror the converter's fixed wait before printing.
const SETTLE_WAIT: Duration = Duration::from_secs(2);

/// Print a local HTML file to a PDF at `output`.
pub fn html_to_pdf(html_file: &Path, output: &Path) -> Result<(), Box<dyn Error>> {
    let browser = Browser::default()?;
    let tab = browser.new_tab()?;

    tab.navigate_to(&format!("file://{}", html_file.display()))?;
    tab.wait_until_navigated()?;
    thread::sleep(SETTLE_WAIT);

    let pdf_data = tab.print_to_pdf(Some(PrintToPdfOptions {
        print_background: Some(true),
        paper_width: Some(A4_WIDTH_IN),
        paper_height: Some(A4_HEIGHT_IN),
        margin_top: Some(MARGIN_IN),
        margin_bottom: Some(MARGIN_IN),
        margin_left: Some(MARGIN_IN),
        margin_right: Some(MARGIN_IN),
        ..Default::default()
    }))?;

    fs::write(output, pdf_data)?;
    Ok(())
}
