//! Output styles and their detection from file names.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Output style of a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Résumé typeset through the LaTeX template.
    Resume,
    /// Guide or write-up rendered through HTML.
    Doc,
    /// Study notes rendered through HTML with larger type.
    Notes,
}

impl Style {
    pub const ALL: [Self; 3] = [Self::Resume, Self::Doc, Self::Notes];

    pub fn name(self) -> &'static str {
        match self {
            Self::Resume => "resume",
            Self::Doc => "doc",
            Self::Notes => "notes",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown style name.
#[derive(Debug, thiserror::Error)]
#[error("unknown style '{0}', expected one of: resume, doc, notes")]
pub struct UnknownStyle(String);

impl FromStr for Style {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStyle(s.to_owned()))
    }
}

/// File name fragments used to guess a style.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StylePatterns {
    /// Fragments that select [`Style::Resume`].
    pub resume_patterns: Vec<String>,
    /// Fragments that select [`Style::Notes`].
    pub notes_patterns: Vec<String>,
}

impl Default for StylePatterns {
    fn default() -> Self {
        Self {
            resume_patterns: vec!["resume".to_owned(), "cv".to_owned()],
            notes_patterns: vec!["note".to_owned(), "study".to_owned(), "learn".to_owned()],
        }
    }
}

impl StylePatterns {
    /// Guess the style of a file from its name.
    ///
    /// The lower-cased name is checked for resume fragments first, then
    /// notes fragments; anything else is a [`Style::Doc`].
    ///
    /// # Examples
    ///
    /// ```
    /// use md2pdf_config::{Style, StylePatterns};
    ///
    /// let patterns = StylePatterns::default();
    /// assert_eq!(patterns.guess("Jane-CV.md"), Style::Resume);
    /// assert_eq!(patterns.guess("rust-study.md"), Style::Notes);
    /// assert_eq!(patterns.guess("design.md"), Style::Doc);
    /// ```
    pub fn guess(&self, file_name: &str) -> Style {
        let name = file_name.to_lowercase();
        let matches = |patterns: &[String]| patterns.iter().any(|p| name.contains(p.as_str()));

        if matches(&self.resume_patterns) {
            Style::Resume
        } else if matches(&self.notes_patterns) {
            Style::Notes
        } else {
            Style::Doc
        }
    }
}
