//! Built-in stylesheets for HTML documents.

use std::fmt;

/// Rules shared by every profile.
const BASE_CSS: &str = r#"
body { font-family: "Helvetica Neue", Helvetica, Arial, sans-serif; color: #1a1a1a; }
strong { color: #111; }
a { color: #2563eb; text-decoration: none; }
hr { border: none; border-top: 0.5pt solid #e2e8f0; }
table { width: 100%; border-collapse: collapse; }
th, td { border: 0.5pt solid #e2e8f0; text-align: left; }
th { background: #f8fafc; font-weight: 600; }
code { background: #f1f5f9; padding: 1pt 3pt; border-radius: 2pt; font-size: 0.9em; }
pre { background: #f8fafc; border: 0.5pt solid #e2e8f0; border-radius: 3pt; padding: 8pt; }
pre code { background: none; padding: 0; }
"#;

const DOC_CSS: &str = r"
@page { size: A4; margin: 2cm 2.2cm; }
body { font-size: 10.5pt; line-height: 1.5; }
h1 { font-size: 22pt; margin: 0 0 6pt 0; color: #111; border-bottom: 2pt solid #2563eb; padding-bottom: 6pt; }
h2 { font-size: 14pt; color: #2563eb; border-bottom: 0.75pt solid #cbd5e1; padding-bottom: 3pt; margin-top: 18pt; margin-bottom: 8pt; }
h3 { font-size: 12pt; margin: 14pt 0 4pt 0; color: #111; }
h4 { font-size: 11pt; margin: 10pt 0 3pt 0; color: #374151; font-style: italic; }
p { margin: 4pt 0; } li { margin: 2pt 0; }
ul, ol { margin: 4pt 0; padding-left: 20pt; }
hr { margin: 12pt 0; }
table { font-size: 10pt; margin: 8pt 0; } th, td { padding: 4pt 8pt; }
";

const NOTES_CSS: &str = r"
@page { size: A4; margin: 2.2cm 2.5cm; }
body { font-size: 11.5pt; line-height: 1.6; }
h1 { font-size: 24pt; margin: 0 0 8pt 0; color: #111; border-bottom: 2.5pt solid #2563eb; padding-bottom: 8pt; }
h2 { font-size: 16pt; color: #2563eb; border-bottom: 1pt solid #cbd5e1; padding-bottom: 4pt; margin-top: 22pt; margin-bottom: 10pt; }
h3 { font-size: 13pt; margin: 16pt 0 6pt 0; color: #111; }
h4 { font-size: 12pt; margin: 12pt 0 4pt 0; color: #374151; font-style: italic; }
p { margin: 6pt 0; } li { margin: 3pt 0; }
ul, ol { margin: 6pt 0; padding-left: 22pt; }
hr { margin: 14pt 0; }
table { font-size: 10.5pt; margin: 10pt 0; } th, td { padding: 5pt 10pt; }
";

/// Stylesheet profile for HTML output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HtmlStyle {
    /// Compact layout for guides and write-ups.
    Doc,
    /// Roomier layout with larger type for study notes.
    Notes,
}

impl HtmlStyle {
    /// Profile name as used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Doc => "doc",
            Self::Notes => "notes",
        }
    }
}

impl fmt::Display for HtmlStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full CSS for a profile: the shared base rules followed by the profile's own.
pub fn stylesheet(style: HtmlStyle) -> String {
    let profile = match style {
        HtmlStyle::Doc => DOC_CSS,
        HtmlStyle::Notes => NOTES_CSS,
    };
    let mut css = String::with_capacity(BASE_CSS.len() + profile.len());
    css.push_str(BASE_CSS);
    css.push_str(profile);
    css
}
