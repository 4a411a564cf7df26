//! Markdown to styled HTML documents.
//!
//! General documents (guides, write-ups, study notes) take this path instead
//! of the résumé transpiler. Markdown is rendered with pulldown-cmark and
//! wrapped in a standalone HTML page carrying one of the built-in
//! stylesheets, ready for an HTML-to-PDF engine.
//!
//! # Example
//!
//! ```
//! use md2pdf_html::{HtmlStyle, render_html};
//!
//! let html = render_html("# Notes\n\n| a | b |\n|---|---|\n| 1 | 2 |", HtmlStyle::Notes);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("<table>"));
//! ```

mod render;
mod stylesheet;

pub use render::{render_body, render_html};
pub use stylesheet::{HtmlStyle, stylesheet};
