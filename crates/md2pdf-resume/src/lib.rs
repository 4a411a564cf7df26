//! Résumé markdown to LaTeX transpiler.
//!
//! Converts a small, line-oriented markdown dialect into a LaTeX document
//! built on a fixed résumé template:
//!
//! ```text
//! # Jane Doe                      name header
//! jane@example.com | github.com   contact line
//! ## Experience                   section
//! ### Acme — Engineer             entry (primary — secondary)
//! **Remote | 2020–2022**          optional metadata line
//! #### Platform team              sub-header
//! - Built *X*                     bullet
//! ```
//!
//! Sections whose title contains `education` use a compact entry layout;
//! sections containing `skill` or `co-curricular` render bullets flat.
//!
//! # Example
//!
//! ```
//! let tex = md2pdf_resume::convert("# Jane Doe\n\njane@example.com\n");
//!
//! assert!(tex.contains(r"\textbf{\Large Jane Doe}"));
//! assert!(tex.ends_with(r"\end{document}"));
//! ```

mod convert;
mod cursor;
mod heading;
mod inline;
mod state;
mod template;

pub use convert::{ResumeConverter, convert};
pub use cursor::LineCursor;
pub use heading::{EntryHeading, Meta, parse_entry_heading, parse_meta};
pub use inline::{escape_tex, format_inline};
pub use state::{ListState, ParseState};
pub use template::ResumeTemplate;
