//! Syntax highlighting for fenced code blocks.
//!
//! Runs as a regex pass over the raw Markdown, before the Markdown renderer
//! sees it: fenced code blocks are replaced with highlighted HTML fragments
//! that pass through the renderer untouched. Mermaid fences are stashed
//! behind placeholders so the highlighter never touches them.

use crate::utils::escape_html;
use regex::{Captures, Regex};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Syntect theme used when the requested style is unknown.
pub const DEFAULT_STYLE: &str = "base16-ocean.dark";

/// Highlighter over syntect's bundled syntax and theme sets.
pub struct CodeHighlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl CodeHighlighter {
    /// Create a highlighter for the named style.
    ///
    /// Unknown style names fall back to [`DEFAULT_STYLE`] with a warning,
    /// matching the converter's permissive CLI behavior.
    pub fn new(style: &str) -> Self {
        let theme_set = ThemeSet::load_defaults();
        let theme = match theme_set.themes.get(style) {
            Some(theme) => theme.clone(),
            None => {
                crate::logger::Logger::warning(&format!(
                    "Unknown highlight style '{}', using '{}'",
                    style, DEFAULT_STYLE
                ));
                theme_set.themes[DEFAULT_STYLE].clone()
            }
        };

        CodeHighlighter {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
        }
    }

    /// Names of all bundled highlight styles, sorted.
    pub fn available_styles() -> Vec<String> {
        ThemeSet::load_defaults().themes.keys().cloned().collect()
    }

    /// Highlight a single code block, returning an HTML fragment.
    ///
    /// Falls back to an escaped `<pre><code>` block when highlighting fails.
    pub fn highlight(&self, code: &str, language: Option<&str>) -> String {
        let syntax = language
            .and_then(|lang| self.syntax_set.find_syntax_by_token(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        match highlighted_html_for_string(code, &self.syntax_set, syntax, &self.theme) {
            Ok(html) => format!("<div class=\"highlight\">\n{}</div>", html),
            Err(_) => format!(
                "<pre class=\"highlight\"><code>{}</code></pre>",
                escape_html(code)
            ),
        }
    }

    /// Replace all fenced code blocks in a Markdown document with
    /// highlighted HTML, leaving mermaid fences intact.
    pub fn process_code_blocks(&self, content: &str) -> String {
        let mermaid_re = Regex::new(r"(?s)```mermaid\n(.*?)\n```").unwrap();
        let lang_re = Regex::new(r"(?s)```(\w+)\n(.*?)\n```").unwrap();
        let bare_re = Regex::new(r"(?s)```\n(.*?)\n```").unwrap();

        // Stash mermaid blocks behind placeholders
        let mut mermaid_blocks: Vec<String> = Vec::new();
        let with_placeholders = mermaid_re.replace_all(content, |caps: &Captures| {
            mermaid_blocks.push(caps[0].to_string());
            format!("<<<MERMAID_BLOCK_{}>>>", mermaid_blocks.len() - 1)
        });

        // Fences with a language tag
        let highlighted = lang_re.replace_all(&with_placeholders, |caps: &Captures| {
            self.highlight(&caps[2], Some(&caps[1]))
        });

        // Bare fences
        let mut highlighted = bare_re
            .replace_all(&highlighted, |caps: &Captures| self.highlight(&caps[1], None))
            .into_owned();

        // Restore mermaid blocks
        for (i, block) in mermaid_blocks.iter().enumerate() {
            highlighted = highlighted.replace(&format!("<<<MERMAID_BLOCK_{}>>>", i), block);
        }

        highlighted
    }
}
