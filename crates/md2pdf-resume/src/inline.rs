//! Inline markdown to LaTeX formatting.

use std::sync::LazyLock;

use regex::Regex;

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.+?)\]\((.+?)\)").unwrap());

/// Typographic characters and their LaTeX spelling.
const SYMBOLS: &[(&str, &str)] = &[
    ("→", r"$\rightarrow$"),
    ("—", "---"),
    ("–", "--"),
    ("\u{201c}", "``"),
    ("\u{201d}", "''"),
];

/// Escape LaTeX special characters that appear literally in résumé text.
///
/// Only `&`, `%`, `#` and `_` are escaped. Markdown markers (`*`, `[`, `]`)
/// are left alone so [`format_inline`] can still recognize them.
///
/// # Examples
///
/// ```
/// use md2pdf_resume::escape_tex;
///
/// assert_eq!(escape_tex("R&D at 100%"), r"R\&D at 100\%");
/// ```
pub fn escape_tex(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' | '%' | '#' | '_' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Convert inline markdown to LaTeX.
///
/// Escaping runs first so that the commands produced by substitution are
/// never escaped themselves. Bold is matched before italic, otherwise
/// `**x**` would be read as two nested single-asterisk spans. Unbalanced
/// markers are passed through unchanged.
///
/// # Examples
///
/// ```
/// use md2pdf_resume::format_inline;
///
/// assert_eq!(format_inline("**a&b**"), r"\textbf{a\&b}");
/// assert_eq!(
///     format_inline("[site](https://example.com)"),
///     r"\href{https://example.com}{site}"
/// );
/// ```
pub fn format_inline(text: &str) -> String {
    let escaped = escape_tex(text);
    let bold = BOLD_RE.replace_all(&escaped, r"\textbf{${1}}");
    let italic = ITALIC_RE.replace_all(&bold, r"\textit{${1}}");
    let linked = LINK_RE.replace_all(&italic, r"\href{${2}}{${1}}");
    replace_symbols(&linked)
}

fn replace_symbols(text: &str) -> String {
    SYMBOLS
        .iter()
        .fold(text.to_owned(), |acc, (from, to)| acc.replace(from, to))
}
