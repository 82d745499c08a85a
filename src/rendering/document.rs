//! Markdown rendering and HTML document assembly.
//!
//! The Markdown body is rendered with pulldown-cmark (tables, footnotes,
//! strikethrough and task lists enabled). The body is then wrapped in a
//! standalone HTML document carrying one of the built-in CSS themes; the
//! non-minimal themes layer their rules on top of the default theme.

use crate::utils::escape_html;
use clap::ValueEnum;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::collections::HashMap;
use std::path::Path;

/// Built-in document themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Default,
    Dark,
    Github,
    Minimal,
}

const DEFAULT_CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    line-height: 1.7;
    color: #2c3e50;
    background: white;
    padding: 40px;
    max-width: 1200px;
    margin: 0 auto;
}

h1 {
    color: #2c3e50;
    font-size: 2.5em;
    margin-bottom: 20px;
    padding-bottom: 10px;
    border-bottom: 3px solid #3498db;
    page-break-after: avoid;
}

h2 {
    color: #34495e;
    font-size: 2em;
    margin-top: 40px;
    margin-bottom: 20px;
    padding-bottom: 8px;
    border-bottom: 2px solid #ecf0f1;
    page-break-after: avoid;
}

h3 {
    color: #34495e;
    font-size: 1.5em;
    margin-top: 30px;
    margin-bottom: 15px;
    page-break-after: avoid;
}

p { margin-bottom: 15px; text-align: justify; }
ul, ol { margin-bottom: 20px; padding-left: 30px; }
li { margin-bottom: 8px; }

code {
    background: #f8f9fa;
    padding: 2px 6px;
    border-radius: 4px;
    font-family: 'JetBrains Mono', 'Consolas', 'Monaco', monospace;
    font-size: 0.9em;
    color: #e74c3c;
}

pre {
    background: #2c3e50;
    color: #ecf0f1;
    padding: 20px;
    border-radius: 8px;
    overflow-x: auto;
    margin: 20px 0;
    box-shadow: 0 2px 10px rgba(0,0,0,0.1);
    page-break-inside: avoid;
    font-family: 'JetBrains Mono', 'Consolas', 'Monaco', monospace;
    font-size: 0.9em;
    line-height: 1.5;
}

pre code {
    background: none;
    color: #ecf0f1;
    padding: 0;
}

.highlight {
    border-radius: 8px;
    margin: 20px 0;
    box-shadow: 0 2px 10px rgba(0,0,0,0.1);
    overflow: hidden;
    page-break-inside: avoid;
}

.highlight pre {
    margin: 0 !important;
    padding: 20px;
    overflow-x: auto;
    font-size: 0.9em;
    line-height: 1.5;
    border: none !important;
}

blockquote {
    border-left: 4px solid #3498db;
    margin: 20px 0;
    font-style: italic;
    color: #7f8c8d;
    background: #ecf0f1;
    padding: 15px 20px;
    border-radius: 0 8px 8px 0;
}

table {
    width: 100%;
    border-collapse: collapse;
    margin: 20px 0;
    box-shadow: 0 2px 10px rgba(0,0,0,0.05);
    page-break-inside: avoid;
}

th {
    background: #3498db;
    color: white;
    padding: 12px;
    text-align: left;
    font-weight: 600;
}

td {
    padding: 12px;
    border-bottom: 1px solid #ecf0f1;
}

tr:nth-child(even) { background: #f8f9fa; }

strong { font-weight: 600; color: #2c3e50; }

img {
    max-width: 100%;
    height: auto;
    display: block;
    margin: 20px auto;
    border-radius: 8px;
    box-shadow: 0 2px 10px rgba(0,0,0,0.1);
}

.mermaid-diagram {
    text-align: center;
    margin: 20px 0;
}

.mermaid-diagram svg {
    max-width: 100%;
    height: auto;
}

.toc {
    background: #f8f9fa;
    border-radius: 8px;
    padding: 20px 30px;
    margin-bottom: 30px;
}

.toc ul { margin-bottom: 0; }

@media print {
    body { padding: 20px; }
    h1, h2, h3, h4 { page-break-after: avoid; }
    pre, table, img, .highlight { page-break-inside: avoid; }
}
"#;

const DARK_CSS: &str = r#"
body {
    font-family: 'Inter', sans-serif;
    line-height: 1.7;
    color: #e0e0e0;
    background: #1a1a1a;
    padding: 40px;
    max-width: 1200px;
    margin: 0 auto;
}

h1, h2, h3, h4 { color: #ffffff; }
h1 { border-bottom-color: #4a9eff; }
h2 { border-bottom-color: #333; }

code { background: #2d2d2d; color: #f92672; }
pre { background: #2d2d2d; color: #f8f8f2; }

blockquote {
    background: #2d2d2d;
    border-left-color: #4a9eff;
    color: #b0b0b0;
}

table { background: #2d2d2d; }
th { background: #4a9eff; }
td { border-bottom-color: #333; }
tr:nth-child(even) { background: #252525; }

.toc { background: #2d2d2d; }

.mermaid-diagram {
    background: white;
    padding: 20px;
    border-radius: 8px;
    margin: 20px 0;
}
"#;

const GITHUB_CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif;
    line-height: 1.5;
    color: #24292e;
    background: #ffffff;
    padding: 32px;
    max-width: 980px;
    margin: 0 auto;
}

h1 {
    padding-bottom: 0.3em;
    font-size: 2em;
    border-bottom: 1px solid #eaecef;
}

h2 {
    padding-bottom: 0.3em;
    font-size: 1.5em;
    border-bottom: 1px solid #eaecef;
}

code {
    padding: 0.2em 0.4em;
    margin: 0;
    font-size: 85%;
    background-color: rgba(27,31,35,0.05);
    border-radius: 3px;
}

pre {
    padding: 16px;
    overflow: auto;
    font-size: 85%;
    line-height: 1.45;
    background-color: #f6f8fa;
    border-radius: 6px;
}

blockquote {
    padding: 0 1em;
    color: #6a737d;
    border-left: 0.25em solid #dfe2e5;
}
"#;

const MINIMAL_CSS: &str = r#"
body {
    font-family: Georgia, serif;
    line-height: 1.8;
    color: #333;
    background: #fff;
    padding: 2em;
    max-width: 700px;
    margin: 0 auto;
}

h1, h2, h3, h4 {
    font-family: Helvetica, Arial, sans-serif;
    margin-top: 2em;
}

h1 { font-size: 2em; }

code {
    font-family: Consolas, Monaco, monospace;
    background: #f4f4f4;
    padding: 2px 4px;
}

pre {
    background: #f4f4f4;
    padding: 1em;
    overflow-x: auto;
}

blockquote {
    margin-left: 0;
    padding-left: 1em;
    border-left: 3px solid #ddd;
    color: #666;
}
"#;

impl Theme {
    /// CSS for the theme. Non-minimal themes extend the default stylesheet.
    pub fn css(self) -> String {
        match self {
            Theme::Default => DEFAULT_CSS.to_string(),
            Theme::Minimal => MINIMAL_CSS.to_string(),
            Theme::Dark => format!("{}\n{}", DEFAULT_CSS, DARK_CSS),
            Theme::Github => format!("{}\n{}", DEFAULT_CSS, GITHUB_CSS),
        }
    }
}

/// One entry of the generated table of contents.
#[derive(Debug, Clone, PartialEq)]
pub struct TocEntry {
    pub level: u32,
    pub title: String,
    pub slug: String,
}

/// Turn a heading title into an anchor id.
pub fn slugify(text: &str) -> String {
    let mut slug = String::new();
    let mut last_dash = true; // suppress a leading dash
    for c in text.chars() {
        if c.is_alphanumeric() {
            for lowered in c.to_lowercase() {
                slug.push(lowered);
            }
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// Render Markdown to an HTML body.
///
/// When `include_toc` is set, headings are assigned slug ids and a `<nav>`
/// listing them is prepended to the body.
pub fn markdown_to_html(content: &str, include_toc: bool) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut events: Vec<Event> = Parser::new_ext(content, options).collect();

    let mut toc: Vec<TocEntry> = Vec::new();
    if include_toc {
        let mut used: HashMap<String, usize> = HashMap::new();
        let mut assigned: Vec<(usize, String)> = Vec::new();

        for i in 0..events.len() {
            let level = match &events[i] {
                Event::Start(Tag::Heading { level, .. }) => *level as u32,
                _ => continue,
            };

            // Collect the heading's literal text up to the closing tag
            let mut title = String::new();
            for event in events.iter().skip(i + 1) {
                match event {
                    Event::Text(t) | Event::Code(t) => title.push_str(t),
                    Event::End(TagEnd::Heading(_)) => break,
                    _ => {}
                }
            }

            let mut slug = slugify(&title);
            if slug.is_empty() {
                slug = "section".to_string();
            }
            let seen = used.entry(slug.clone()).or_insert(0);
            if *seen > 0 {
                slug = format!("{}-{}", slug, seen);
            }
            *seen += 1;

            toc.push(TocEntry {
                level,
                title,
                slug: slug.clone(),
            });
            assigned.push((i, slug));
        }

        for (i, slug) in assigned {
            if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
                *id = Some(CowStr::from(slug));
            }
        }
    }

    let mut body = String::new();
    html::push_html(&mut body, events.into_iter());

    if include_toc && !toc.is_empty() {
        let mut nav = String::from("<nav class=\"toc\">\n<ul>\n");
        for entry in &toc {
            nav.push_str(&format!(
                "<li class=\"toc-level-{}\"><a href=\"#{}\">{}</a></li>\n",
                entry.level,
                entry.slug,
                escape_html(&entry.title)
            ));
        }
        nav.push_str("</ul>\n</nav>\n");
        body = format!("{}{}", nav, body);
    }

    body
}

/// Derive a document title from the input file name.
///
/// Underscores become spaces and each word is capitalized.
pub fn title_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Document".to_string());

    stem.replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wrap a rendered body in a full standalone HTML document.
pub fn build_document(title: &str, body: &str, theme: Theme, standalone: bool) -> String {
    if !standalone {
        return body.to_string();
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>
{}
    </style>
</head>
<body>
    {}
</body>
</html>"#,
        escape_html(title),
        theme.css(),
        body
    )
}
