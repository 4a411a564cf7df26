//! Line-oriented résumé markdown to LaTeX conversion.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::cursor::LineCursor;
use crate::heading::{Meta, parse_entry_heading, parse_meta};
use crate::inline::{escape_tex, format_inline};
use crate::state::ParseState;
use crate::template::ResumeTemplate;

/// Matches a formatted flat bullet that starts with a bold `Label:`.
/// The colon may sit inside or right after the bold span.
static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\\textbf\{([^{}]+?)(?::\}|\}:)\s*(.*)$").unwrap());

/// Kind of a trimmed input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineKind<'a> {
    Blank,
    Title(&'a str),
    Section(&'a str),
    Entry,
    SubHeader(&'a str),
    Bullet(&'a str),
    Other,
}

impl<'a> LineKind<'a> {
    fn classify(line: &'a str) -> Self {
        if line.is_empty() || line.starts_with("---") {
            return Self::Blank;
        }
        if let Some(rest) = heading_text(line, 4) {
            return Self::SubHeader(rest);
        }
        if heading_text(line, 3).is_some() {
            return Self::Entry;
        }
        if let Some(rest) = heading_text(line, 2) {
            return Self::Section(rest);
        }
        if let Some(rest) = heading_text(line, 1) {
            return Self::Title(rest);
        }
        if let Some(rest) = line.strip_prefix("- ") {
            return Self::Bullet(rest);
        }
        Self::Other
    }
}

/// Text of an ATX heading of exactly `level`, or `None`.
///
/// The marker must be followed by a space and then a character other than
/// `#`, so `##` alone or `### #tag` do not count.
fn heading_text(line: &str, level: usize) -> Option<&str> {
    let rest = line.strip_prefix(&"#".repeat(level)[..])?.strip_prefix(' ')?;
    match rest.chars().next() {
        Some(c) if c != '#' => Some(rest.trim()),
        _ => None,
    }
}

/// Converts résumé markdown into the body of a LaTeX document.
///
/// Each call to [`convert`](Self::convert) owns its own cursor, list state
/// and output buffer; a converter only holds the template.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResumeConverter {
    template: ResumeTemplate,
}

impl ResumeConverter {
    /// Create a converter using the default template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different template.
    #[must_use]
    pub fn with_template(mut self, template: ResumeTemplate) -> Self {
        self.template = template;
        self
    }

    /// Convert markdown into a complete LaTeX document.
    pub fn convert(&self, markdown: &str) -> String {
        let body = self.convert_body(markdown);
        self.template.assemble(&body)
    }

    /// Convert markdown into body lines, without preamble or trailer.
    ///
    /// All list environments opened in the body are closed before it ends.
    pub fn convert_body(&self, markdown: &str) -> Vec<String> {
        let mut pass = Pass {
            cursor: LineCursor::new(markdown),
            state: ParseState::new(),
            out: Vec::new(),
        };
        pass.run();
        tracing::debug!(lines = pass.out.len(), "Converted resume body");
        pass.out
    }
}

/// Convert résumé markdown to a LaTeX document with the default template.
///
/// # Examples
///
/// ```
/// let tex = md2pdf_resume::convert("## Skills\n- **Languages:** Go, Rust");
///
/// assert!(tex.contains(r"\item[$\circ$]\small{\textbf{Languages}{: Go, Rust}}\vspace{-5pt}"));
/// assert!(!tex.contains(r"\resumeItemListStart"));
/// ```
pub fn convert(markdown: &str) -> String {
    ResumeConverter::new().convert(markdown)
}

/// State of a single conversion.
struct Pass<'a> {
    cursor: LineCursor<'a>,
    state: ParseState,
    out: Vec<String>,
}

impl Pass<'_> {
    fn run(&mut self) {
        while let Some(line) = self.cursor.current() {
            match LineKind::classify(line) {
                LineKind::Blank => self.cursor.advance(),
                LineKind::Title(name) => self.title(name),
                LineKind::Section(title) => self.section(title),
                LineKind::Entry => self.entry(line),
                LineKind::SubHeader(label) => self.sub_header(label),
                LineKind::Bullet(text) => self.bullet(text),
                LineKind::Other => {
                    tracing::debug!(
                        line = self.cursor.position() + 1,
                        "Skipping unrecognized line"
                    );
                    self.cursor.advance();
                }
            }
        }
        self.state.close_sub_list(&mut self.out);
    }

    fn emit(&mut self, line: impl Into<String>) {
        self.out.push(line.into());
    }

    /// `# Name` followed by the contact line.
    fn title(&mut self, name: &str) {
        let name = escape_tex(name);
        self.cursor.advance();
        let contact = match self.cursor.peek_non_blank() {
            Some(index) => {
                self.cursor.advance_to(index + 1);
                self.cursor.line(index).map(format_inline).unwrap_or_default()
            }
            None => String::new(),
        };

        self.emit(r"\begin{tabular*}{\textwidth}{l@{\extracolsep{\fill}}r}");
        self.emit(format!(r"  \textbf{{\Large {name}}} & \\"));
        self.emit(format!("  {contact}"));
        self.emit(r"\end{tabular*}");
        self.emit(r"\vspace{2mm}");
    }

    fn section(&mut self, title: &str) {
        self.state.close_sub_list(&mut self.out);
        self.emit(format!(r"\section{{{}}}", escape_tex(title)));
        self.state.enter_section(title, &mut self.out);
        self.cursor.advance();
    }

    /// `### Primary — Secondary` with an optional metadata line.
    fn entry(&mut self, line: &str) {
        self.state.close_items(&mut self.out);
        self.state.open_sub_list(&mut self.out);

        let heading = parse_entry_heading(line);
        let company = escape_tex(&heading.primary);
        let mut role = escape_tex(&heading.secondary);
        self.cursor.advance();

        let meta = self.take_meta();
        if !meta.extra.is_empty() {
            let extra = escape_tex(&meta.extra);
            role = if role.is_empty() {
                extra
            } else {
                format!("{role} | {extra}")
            };
        }
        let location = escape_tex(&meta.location);
        let dates = escape_tex(&meta.dates);

        let has_sub_header = self
            .cursor
            .peek_non_blank()
            .and_then(|index| self.cursor.line(index))
            .is_some_and(|next| next.starts_with("####"));

        if self.state.is_education_section() {
            let when = if dates.is_empty() { &location } else { &dates };
            self.emit(format!(r"    \resumeSubheading{{{company}}}{{}}"));
            self.emit(format!("      {{{when}}}{{}}"));
        } else if has_sub_header {
            // Inline tabular without the macro's trailing -5pt, so the
            // sub-header below keeps its spacing.
            self.emit(r"    \vspace{-1pt}\item");
            self.emit(r"      \begin{tabular*}{0.97\textwidth}{l@{\extracolsep{\fill}}r}");
            self.emit(format!(r"        \textbf{{{company}}} & {location} \\"));
            self.emit(format!(
                r"        \textit{{\small {role}}} & \textit{{\small {dates}}} \\"
            ));
            self.emit(r"      \end{tabular*}\vspace{2pt}");
        } else {
            self.emit(format!(r"    \resumeSubheading{{{company}}}{{{location}}}"));
            self.emit(format!("      {{{role}}}{{{dates}}}"));
        }
    }

    /// Consume the metadata line after an entry heading, if there is one.
    fn take_meta(&mut self) -> Meta {
        let Some(index) = self.cursor.peek_non_blank() else {
            return Meta::default();
        };
        match self.cursor.line(index) {
            Some(next) if next.starts_with("**") => {
                self.cursor.advance_to(index + 1);
                parse_meta(next)
            }
            _ => Meta::default(),
        }
    }

    fn sub_header(&mut self, label: &str) {
        self.state.close_items(&mut self.out);
        self.emit(format!(r"    {{\small {}}}", escape_tex(label)));
        self.emit(r"    \vspace{-8pt}");
        self.cursor.advance();
    }

    fn bullet(&mut self, text: &str) {
        let text = format_inline(text.trim());

        if self.state.is_flat_section() {
            self.state.open_sub_list(&mut self.out);
            let mut item = String::from(r"    \item[$\circ$]\small{");
            if let Some(caps) = LABEL_RE.captures(&text) {
                let _ = write!(item, r"\textbf{{{}}}{{: {}}}", &caps[1], &caps[2]);
            } else {
                item.push_str(&text);
            }
            item.push_str(r"}\vspace{-5pt}");
            self.emit(item);
        } else {
            self.state.open_items(&mut self.out);
            self.emit(format!(r"      \item\small{{{text}}}"));
        }
        self.cursor.advance();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn body(markdown: &str) -> Vec<String> {
        ResumeConverter::new().convert_body(markdown)
    }

    fn count(lines: &[String], needle: &str) -> usize {
        lines.iter().filter(|line| line.contains(needle)).count()
    }

    /// Check list directives are balanced and correctly nested.
    fn assert_balanced(lines: &[String]) {
        let mut stack = Vec::new();
        for line in lines {
            let trimmed = line.trim();
            match trimmed {
                r"\resumeSubHeadingListStart" => stack.push("sub"),
                r"\resumeItemListStart" => {
                    assert_eq!(stack.last(), Some(&"sub"), "item list outside sub-list");
                    stack.push("item");
                }
                r"\resumeItemListEnd" => assert_eq!(stack.pop(), Some("item")),
                r"\resumeSubHeadingListEnd" => assert_eq!(stack.pop(), Some("sub")),
                _ => {}
            }
        }
        assert!(stack.is_empty(), "unclosed lists: {stack:?}");
    }

    #[test]
    fn test_classify() {
        assert_eq!(LineKind::classify(""), LineKind::Blank);
        assert_eq!(LineKind::classify("---"), LineKind::Blank);
        assert_eq!(LineKind::classify("# Jane"), LineKind::Title("Jane"));
        assert_eq!(LineKind::classify("## Skills"), LineKind::Section("Skills"));
        assert_eq!(LineKind::classify("### Acme"), LineKind::Entry);
        assert_eq!(LineKind::classify("#### Team"), LineKind::SubHeader("Team"));
        assert_eq!(LineKind::classify("- item"), LineKind::Bullet("item"));
        assert_eq!(LineKind::classify("##### deep"), LineKind::Other);
        assert_eq!(LineKind::classify("#nospace"), LineKind::Other);
        assert_eq!(LineKind::classify("-no space"), LineKind::Other);
        assert_eq!(LineKind::classify("plain"), LineKind::Other);
    }

    #[test]
    fn test_end_to_end_experience() {
        let tex = convert(
            "# Jane Doe\n\nJane@example.com\n\n## Experience\n\n### Acme — Engineer\n**Remote | 2020–2022**\n- Built *X*\n",
        );
        let start = tex.find(r"\begin{document}").unwrap();
        assert_eq!(
            &tex[start..],
            r"\begin{document}

\begin{tabular*}{\textwidth}{l@{\extracolsep{\fill}}r}
  \textbf{\Large Jane Doe} & \\
  Jane@example.com
\end{tabular*}
\vspace{2mm}
\section{Experience}
  \resumeSubHeadingListStart
    \resumeSubheading{Acme}{Remote}
      {Engineer}{2020--2022}
    \resumeItemListStart
      \item\small{Built \textit{X}}
    \resumeItemListEnd
  \resumeSubHeadingListEnd
\end{document}"
        );
    }

    #[test]
    fn test_end_to_end_skills_flat() {
        let lines = body("## Skills\n- **Languages:** Go, Rust");
        assert_eq!(
            lines,
            vec![
                r"\section{Skills}",
                r"  \resumeSubHeadingListStart",
                r"    \item[$\circ$]\small{\textbf{Languages}{: Go, Rust}}\vspace{-5pt}",
                r"  \resumeSubHeadingListEnd",
            ]
        );
    }

    #[test]
    fn test_end_to_end_education_compact() {
        let lines = body("## Education\n### University of Foo\n**2018–2022**");
        assert_eq!(
            lines,
            vec![
                r"\section{Education}",
                r"  \resumeSubHeadingListStart",
                r"    \resumeSubheading{University of Foo}{}",
                r"      {2018--2022}{}",
                r"  \resumeSubHeadingListEnd",
            ]
        );
    }

    #[test]
    fn test_education_falls_back_to_location() {
        let lines = body("## Education\n### Foo U\n**Paris |**");
        assert_eq!(count(&lines, r"\resumeSubheading{Foo U}{}"), 1);
        assert!(lines.contains(&"      {Paris}{}".to_owned()));
    }

    #[test]
    fn test_flat_label_after_bold() {
        let lines = body("## Skills & Tools\n- **Cloud**: AWS");
        assert!(lines.contains(
            &r"    \item[$\circ$]\small{\textbf{Cloud}{: AWS}}\vspace{-5pt}".to_owned()
        ));
    }

    #[test]
    fn test_flat_plain_bullet() {
        let lines = body("## Co-curricular\n- Chess club captain");
        assert!(
            lines.contains(&r"    \item[$\circ$]\small{Chess club captain}\vspace{-5pt}".to_owned())
        );
        assert_eq!(count(&lines, r"\resumeItemListStart"), 0);
    }

    #[test]
    fn test_bold_without_colon_is_plain_flat_bullet() {
        let lines = body("## Skills\n- **Go** and Rust: daily");
        assert!(lines.contains(
            &r"    \item[$\circ$]\small{\textbf{Go} and Rust: daily}\vspace{-5pt}".to_owned()
        ));
    }

    #[test]
    fn test_missing_meta_does_not_skip_content() {
        let lines = body("## Experience\n### Acme — Engineer\n\n- Shipped it");
        assert_eq!(
            lines,
            vec![
                r"\section{Experience}",
                r"  \resumeSubHeadingListStart",
                r"    \resumeSubheading{Acme}{}",
                r"      {Engineer}{}",
                r"    \resumeItemListStart",
                r"      \item\small{Shipped it}",
                r"    \resumeItemListEnd",
                r"  \resumeSubHeadingListEnd",
            ]
        );
    }

    #[test]
    fn test_meta_after_blank_lines_is_consumed() {
        let lines = body("## Experience\n### Acme\n\n\n**NYC | 2021**\n- x");
        assert!(lines.contains(&r"    \resumeSubheading{Acme}{NYC}".to_owned()));
        assert_eq!(count(&lines, "NYC | 2021"), 0);
    }

    #[test]
    fn test_meta_extra_folds_into_role() {
        let lines = body("## Experience\n### Acme — Engineer\n**NYC | 2021** | *Contract*");
        assert!(lines.contains(&"      {Engineer | Contract}{2021}".to_owned()));

        let lines = body("## Experience\n### Acme\n**2021** | *R&D*");
        assert!(lines.contains(&r"      {R\&D}{2021}".to_owned()));
    }

    #[test]
    fn test_sub_header_changes_entry_layout() {
        let lines = body(
            "## Experience\n### Acme — Engineer\n**Remote | 2020**\n\n#### Platform\n- Did things",
        );
        assert_eq!(
            lines,
            vec![
                r"\section{Experience}",
                r"  \resumeSubHeadingListStart",
                r"    \vspace{-1pt}\item",
                r"      \begin{tabular*}{0.97\textwidth}{l@{\extracolsep{\fill}}r}",
                r"        \textbf{Acme} & Remote \\",
                r"        \textit{\small Engineer} & \textit{\small 2020} \\",
                r"      \end{tabular*}\vspace{2pt}",
                r"    {\small Platform}",
                r"    \vspace{-8pt}",
                r"    \resumeItemListStart",
                r"      \item\small{Did things}",
                r"    \resumeItemListEnd",
                r"  \resumeSubHeadingListEnd",
            ]
        );
    }

    #[test]
    fn test_sub_header_closes_item_list() {
        let lines = body("## Experience\n### Acme\n#### A\n- one\n#### B\n- two");
        assert_eq!(count(&lines, r"\resumeItemListStart"), 2);
        assert_eq!(count(&lines, r"\resumeItemListEnd"), 2);
        assert_balanced(&lines);
    }

    #[test]
    fn test_new_entry_closes_item_list() {
        let lines = body("## Experience\n### A\n- one\n### B\n- two");
        assert_eq!(count(&lines, r"\resumeItemListStart"), 2);
        assert_eq!(count(&lines, r"\resumeSubHeadingListStart"), 1);
        assert_balanced(&lines);
    }

    #[test]
    fn test_missing_contact_line() {
        let lines = body("# Solo");
        assert_eq!(lines[1], r"  \textbf{\Large Solo} & \\");
        assert_eq!(lines[2], "  ");
    }

    #[test]
    fn test_title_escapes_but_does_not_format() {
        let lines = body("# Jane *Q* O_Doe\ncontact **me**");
        assert_eq!(lines[1], r"  \textbf{\Large Jane *Q* O\_Doe} & \\");
        assert_eq!(lines[2], r"  contact \textbf{me}");
    }

    #[test]
    fn test_section_title_is_escaped() {
        let lines = body("## R&D");
        assert_eq!(lines[0], r"\section{R\&D}");
    }

    #[test]
    fn test_unrecognized_lines_are_skipped() {
        let lines = body("## Summary\nSome prose here.\n---\n* not a bullet");
        assert_eq!(
            lines,
            vec![
                r"\section{Summary}",
                r"  \resumeSubHeadingListStart",
                r"  \resumeSubHeadingListEnd",
            ]
        );
    }

    #[test]
    fn test_bullet_before_any_section_stays_in_a_list() {
        let lines = body("- orphan");
        assert_eq!(
            lines,
            vec![
                r"  \resumeSubHeadingListStart",
                r"    \resumeItemListStart",
                r"      \item\small{orphan}",
                r"    \resumeItemListEnd",
                r"  \resumeSubHeadingListEnd",
            ]
        );
    }

    #[test]
    fn test_balance_on_assorted_inputs() {
        let inputs = [
            "",
            "# Name",
            "## A\n- x",
            "## A\n### B\n- x\n## Skills\n- **L:** y\n## C\n### D\n#### E\n- z",
            "### Entry only\n- bullet\n#### Sub\n- bullet",
            "## Skills\n- a\n### Weird entry\n- b\n## Education\n### U\n- c",
            "- a\n## B\n- c\n\n\n---\n## D",
        ];
        for input in inputs {
            assert_balanced(&body(input));
        }
    }

    #[test]
    fn test_empty_document() {
        let tex = convert("");
        assert!(tex.ends_with("\\begin{document}\n\n\\end{document}"));
    }

    #[test]
    fn test_custom_template() {
        let converter = ResumeConverter::new().with_template(ResumeTemplate {
            preamble: "%start",
            trailer: "%end",
        });
        assert_eq!(
            converter.convert("## A"),
            "%start\n\\section{A}\n  \\resumeSubHeadingListStart\n  \\resumeSubHeadingListEnd\n%end"
        );
    }
}
