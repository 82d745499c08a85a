//! Shared helpers for formatting and HTML post-processing.

use regex::Regex;

/// Formats a byte count as a human-readable size.
///
/// Uses 1024-based units from bytes up to terabytes, with two decimal places
/// for anything above bytes.
///
/// # Examples
/// ```
/// use utilikit::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(1536), "1.50 KB");
/// ```
pub fn format_size(size_bytes: u64) -> String {
    if size_bytes == 0 {
        return "0 B".to_string();
    }

    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut size = size_bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} B", size_bytes)
    } else {
        format!("{:.2} {}", size, UNITS[unit])
    }
}

/// Escapes the five HTML special characters.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Minifies an HTML document.
///
/// Strips comments, collapses whitespace between tags, and removes leading
/// indentation. This is a blunt text pass, not an HTML-aware minifier.
pub fn minify_html(html: &str) -> String {
    let comments = Regex::new(r"(?s)<!--.*?-->").unwrap();
    let between_tags = Regex::new(r">\s+<").unwrap();
    let leading = Regex::new(r"(?m)^\s+").unwrap();

    let out = comments.replace_all(html, "");
    let out = between_tags.replace_all(&out, "><");
    let out = leading.replace_all(&out, "");
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_zero() {
        assert_eq!(format_size(0), "0 B");
    }

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(1), "1 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_kilobytes() {
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
    }

    #[test]
    fn test_format_size_larger_units() {
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5.00 GB");
        assert_eq!(format_size(2 * 1024_u64.pow(4)), "2.00 TB");
    }

    #[test]
    fn test_format_size_caps_at_terabytes() {
        // 5000 TB still renders in TB
        let size = 5000 * 1024_u64.pow(4);
        assert_eq!(format_size(size), "5000.00 TB");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_minify_html_strips_comments() {
        let html = "<p>keep</p><!-- drop\nme --><p>this</p>";
        assert_eq!(minify_html(html), "<p>keep</p><p>this</p>");
    }

    #[test]
    fn test_minify_html_collapses_between_tags() {
        let html = "<div>\n    <p>text</p>\n</div>";
        assert_eq!(minify_html(html), "<div><p>text</p></div>");
    }

    #[test]
    fn test_minify_html_trims_result() {
        let html = "   \n<p>x</p>\n   ";
        assert_eq!(minify_html(html), "<p>x</p>");
    }
}
