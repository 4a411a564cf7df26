//! Parsers for entry headings and metadata lines.

use std::sync::LazyLock;

use regex::Regex;

/// Separators between the primary and secondary part of an entry heading,
/// in priority order.
const ENTRY_SEPARATORS: &[&str] = &[" — ", " -- ", r" \textemdash ", "—"];

static META_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*(.+?)\*\*(?:\s*\|\s*\*(.+?)\*)?").unwrap());

/// Parsed `### Primary — Secondary` heading.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryHeading {
    /// Organization or name.
    pub primary: String,
    /// Role or title; empty when the heading has no separator.
    pub secondary: String,
}

/// Parsed `**Location | Dates** | *Extra*` line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Meta {
    pub location: String,
    pub dates: String,
    pub extra: String,
}

/// Parse an entry heading into its primary and secondary parts.
///
/// Leading `#` markers are stripped. The first separator from the priority
/// list that occurs in the text wins.
///
/// # Examples
///
/// ```
/// use md2pdf_resume::parse_entry_heading;
///
/// let heading = parse_entry_heading("### Acme — Engineer");
/// assert_eq!(heading.primary, "Acme");
/// assert_eq!(heading.secondary, "Engineer");
/// ```
pub fn parse_entry_heading(line: &str) -> EntryHeading {
    let text = line.trim_start_matches('#').trim();
    for sep in ENTRY_SEPARATORS {
        if let Some((primary, secondary)) = text.split_once(sep) {
            return EntryHeading {
                primary: primary.trim().to_owned(),
                secondary: secondary.trim().to_owned(),
            };
        }
    }
    EntryHeading {
        primary: text.to_owned(),
        secondary: String::new(),
    }
}

/// Parse a metadata line following an entry heading.
///
/// A bold span containing a pipe splits into location and dates; a bold span
/// without one is taken as the dates alone. An italic span after a trailing
/// pipe becomes `extra`. Lines that do not start with a bold span yield an
/// empty [`Meta`].
///
/// En-dashes in location and dates are rewritten to LaTeX `--`.
pub fn parse_meta(line: &str) -> Meta {
    let Some(caps) = META_RE.captures(line.trim()) else {
        return Meta::default();
    };

    let bold = caps[1].trim();
    let extra = caps
        .get(2)
        .map(|m| m.as_str().trim().to_owned())
        .unwrap_or_default();

    let (location, dates) = match bold.split_once('|') {
        Some((location, dates)) => (location.trim(), dates.trim()),
        None => ("", bold),
    };

    Meta {
        location: normalize_dashes(location),
        dates: normalize_dashes(dates),
        extra,
    }
}

fn normalize_dashes(text: &str) -> String {
    text.replace('–', "--")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(line: &str) -> (String, String) {
        let heading = parse_entry_heading(line);
        (heading.primary, heading.secondary)
    }

    #[test]
    fn test_entry_separators_agree() {
        let expected = ("A".to_owned(), "B".to_owned());
        assert_eq!(split("### A — B"), expected);
        assert_eq!(split("### A -- B"), expected);
        assert_eq!(split("### A—B"), expected);
        assert_eq!(split(r"### A \textemdash B"), expected);
    }

    #[test]
    fn test_entry_without_separator() {
        assert_eq!(
            split("###   University of Foo  "),
            ("University of Foo".to_owned(), String::new())
        );
    }

    #[test]
    fn test_entry_separator_priority() {
        // " — " is tried before " -- ", so the spaced em-dash wins
        assert_eq!(
            split("### A -- B — C"),
            ("A -- B".to_owned(), "C".to_owned())
        );
    }

    #[test]
    fn test_entry_splits_on_first_occurrence() {
        assert_eq!(
            split("### A — B — C"),
            ("A".to_owned(), "B — C".to_owned())
        );
    }

    #[test]
    fn test_meta_location_and_dates() {
        let meta = parse_meta("**Remote | 2020–2022**");
        assert_eq!(
            meta,
            Meta {
                location: "Remote".to_owned(),
                dates: "2020--2022".to_owned(),
                extra: String::new(),
            }
        );
    }

    #[test]
    fn test_meta_dates_only() {
        let meta = parse_meta("**2018–2022**");
        assert_eq!(meta.location, "");
        assert_eq!(meta.dates, "2018--2022");
    }

    #[test]
    fn test_meta_with_extra() {
        let meta = parse_meta("  **Berlin | 2019** | *Part-time*  ");
        assert_eq!(meta.location, "Berlin");
        assert_eq!(meta.dates, "2019");
        assert_eq!(meta.extra, "Part-time");
    }

    #[test]
    fn test_meta_splits_on_first_pipe() {
        let meta = parse_meta("**A | B | C**");
        assert_eq!(meta.location, "A");
        assert_eq!(meta.dates, "B | C");
    }

    #[test]
    fn test_meta_non_matching_is_empty() {
        assert_eq!(parse_meta("just text"), Meta::default());
        assert_eq!(parse_meta("**unclosed"), Meta::default());
    }
}
