//! Mermaid diagram rendering.
//!
//! Diagram fences are rendered to an image in one of two ways:
//! - online: the kroki.io service returns an SVG for the base64url-encoded
//!   diagram source;
//! - local: a small HTML shim loading mermaid.js is opened in headless
//!   Chromium and the rendered diagram element is screenshotted to PNG.
//!
//! The rendered image is then inlined into the document (SVG as markup, PNG
//! as a base64 data URI) or linked by `file://` URL when embedding is off.

use crate::logger::Logger;
use crate::utils::escape_html;
use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine as _;
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::Browser;
use regex::{Captures, Regex};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

const KROKI_URL: &str = "https://kroki.io/mermaid/svg";

// mermaid.js renders asynchronously after page load; there is no readiness
// signal from the shim, so we wait a fixed interval before screenshotting.
const RENDER_WAIT: Duration = Duration::from_secs(2);

const SHIM_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <script src="https://cdn.jsdelivr.net/npm/mermaid/dist/mermaid.min.js"></script>
    <script>mermaid.initialize({ startOnLoad: true });</script>
    <style>
        body { background: white; }
        .mermaid { text-align: center; }
    </style>
</head>
<body>
    <div class="mermaid">
    {diagram}
    </div>
</body>
</html>
"#;

/// Renders mermaid fences found in a Markdown document.
pub struct MermaidRenderer<'a> {
    temp_dir: &'a Path,
    online: bool,
    embed: bool,
    counter: usize,
}

impl<'a> MermaidRenderer<'a> {
    pub fn new(temp_dir: &'a Path, online: bool, embed: bool) -> Self {
        MermaidRenderer {
            temp_dir,
            online,
            embed,
            counter: 0,
        }
    }

    /// Replace every mermaid fence with a rendered diagram fragment.
    ///
    /// A fence whose diagram fails to render degrades to an escaped
    /// `<pre><code>` block instead of aborting the conversion.
    pub fn replace_diagrams(&mut self, content: &str) -> String {
        let fence_re = Regex::new(r"(?s)```mermaid\n(.*?)\n```").unwrap();

        fence_re
            .replace_all(content, |caps: &Captures| {
                let diagram = &caps[1];
                let rendered = if self.online {
                    self.render_online(diagram)
                } else {
                    self.render_local(diagram)
                };

                match rendered {
                    Ok(image_path) => self.format_for_html(&image_path),
                    Err(e) => {
                        Logger::warning(&format!("Mermaid rendering failed: {}", e));
                        format!("<pre><code>{}</code></pre>", escape_html(diagram))
                    }
                }
            })
            .into_owned()
    }

    /// Render a diagram through kroki.io, saving the returned SVG.
    fn render_online(&mut self, diagram: &str) -> Result<PathBuf, Box<dyn Error>> {
        let encoded = URL_SAFE.encode(diagram.as_bytes());
        let url = format!("{}/{}", KROKI_URL, encoded);

        let response = reqwest::blocking::get(&url)?;
        if !response.status().is_success() {
            return Err(format!("kroki.io returned status {}", response.status()).into());
        }

        let svg_path = self.temp_dir.join(format!("mermaid_{}.svg", self.counter));
        fs::write(&svg_path, response.text()?)?;
        self.counter += 1;
        Ok(svg_path)
    }

    /// Render a diagram locally by screenshotting a mermaid.js page.
    fn render_local(&mut self, diagram: &str) -> Result<PathBuf, Box<dyn Error>> {
        let html_path = self.temp_dir.join(format!("mermaid_{}.html", self.counter));
        fs::write(&html_path, SHIM_TEMPLATE.replace("{diagram}", diagram))?;

        let png_path = self.temp_dir.join(format!("mermaid_{}.png", self.counter));

        let browser = Browser::default()?;
        let tab = browser.new_tab()?;
        tab.navigate_to(&format!("file://{}", html_path.display()))?;
        tab.wait_until_navigated()?;
        thread::sleep(RENDER_WAIT);

        let element = tab.wait_for_element(".mermaid")?;
        let png_data = element.capture_screenshot(CaptureScreenshotFormatOption::Png)?;
        fs::write(&png_path, png_data)?;

        self.counter += 1;
        Ok(png_path)
    }

    /// Wrap a rendered diagram image in the fragment inserted into the page.
    fn format_for_html(&self, image_path: &Path) -> String {
        if self.embed {
            if image_path.extension().is_some_and(|e| e == "svg") {
                // Inline the SVG markup directly
                match fs::read_to_string(image_path) {
                    Ok(svg) => format!("<div class=\"mermaid-diagram\">{}</div>", svg),
                    Err(_) => self.file_link(image_path),
                }
            } else {
                // PNG goes in as a base64 data URI
                match fs::read(image_path) {
                    Ok(data) => format!(
                        "<div class=\"mermaid-diagram\"><img src=\"data:image/png;base64,{}\" alt=\"Mermaid Diagram\"/></div>",
                        STANDARD.encode(data)
                    ),
                    Err(_) => self.file_link(image_path),
                }
            }
        } else {
            self.file_link(image_path)
        }
    }

    fn file_link(&self, image_path: &Path) -> String {
        format!(
            "<div class=\"mermaid-diagram\"><img src=\"file://{}\" alt=\"Mermaid Diagram\"/></div>",
            image_path.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_for_html_inlines_svg() {
        let temp_dir = TempDir::new().unwrap();
        let svg_path = temp_dir.path().join("d.svg");
        fs::write(&svg_path, "<svg><rect/></svg>").unwrap();

        let renderer = MermaidRenderer::new(temp_dir.path(), false, true);
        let html = renderer.format_for_html(&svg_path);
        assert_eq!(
            html,
            "<div class=\"mermaid-diagram\"><svg><rect/></svg></div>"
        );
    }

    #[test]
    fn test_format_for_html_embeds_png_as_base64() {
        let temp_dir = TempDir::new().unwrap();
        let png_path = temp_dir.path().join("d.png");
        fs::write(&png_path, [0x89, 0x50, 0x4E, 0x47]).unwrap();

        let renderer = MermaidRenderer::new(temp_dir.path(), false, true);
        let html = renderer.format_for_html(&png_path);
        assert!(html.contains("data:image/png;base64,"));
        assert!(html.contains(&STANDARD.encode([0x89u8, 0x50, 0x4E, 0x47])));
    }

    #[test]
    fn test_format_for_html_file_link_when_not_embedding() {
        let temp_dir = TempDir::new().unwrap();
        let png_path = temp_dir.path().join("d.png");
        fs::write(&png_path, b"png").unwrap();

        let renderer = MermaidRenderer::new(temp_dir.path(), false, false);
        let html = renderer.format_for_html(&png_path);
        assert!(html.starts_with("<div class=\"mermaid-diagram\"><img src=\"file://"));
        assert!(!html.contains("base64"));
    }

    #[test]
    fn test_diagram_source_is_base64url_encoded() {
        // The kroki URL scheme uses url-safe base64 of the raw diagram text
        let encoded = URL_SAFE.encode("graph TD;A-->B;".as_bytes());
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
    }
}
