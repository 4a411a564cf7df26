//! Markdown rendering with pulldown-cmark.

use std::fmt::Write;

use pulldown_cmark::{Options, Parser, html};

use crate::stylesheet::{HtmlStyle, stylesheet};

/// Parser options: tables and smart punctuation. Fenced code blocks are
/// part of CommonMark and need no flag.
fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_SMART_PUNCTUATION
}

/// Render markdown to an HTML fragment.
pub fn render_body(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, parser_options());
    let mut body = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut body, parser);
    body
}

/// Render markdown to a standalone HTML page with the given stylesheet
/// embedded in its head.
pub fn render_html(markdown: &str, style: HtmlStyle) -> String {
    let body = render_body(markdown);
    let css = stylesheet(style);
    tracing::debug!(style = %style, body_len = body.len(), "Rendered HTML document");

    let mut page = String::with_capacity(body.len() + css.len() + 128);
    page.push_str("<!DOCTYPE html><html><head><meta charset='utf-8'>");
    let _ = write!(page, "<style>{css}</style>");
    page.push_str("</head><body>");
    page.push_str(&body);
    page.push_str("</body></html>");
    page
}
