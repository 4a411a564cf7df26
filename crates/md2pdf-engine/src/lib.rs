//! External PDF engines for md2pdf.
//!
//! The converters in this workspace only produce text (LaTeX or HTML).
//! Turning that text into a PDF is delegated to an external program
//! behind the [`PdfEngine`] trait:
//!
//! - [`Tectonic`]: compiles LaTeX sources
//! - [`WeasyPrint`]: renders standalone HTML pages
//!
//! Engine output is captured. A non-zero exit becomes
//! [`EngineError::Failed`] carrying the engine's diagnostics.

mod command;
mod error;

use std::ffi::OsStr;
use std::path::Path;

pub use command::ExternalCommand;
pub use error::EngineError;

/// A program that turns an intermediate source file into a PDF.
pub trait PdfEngine {
    /// Short name used in log messages.
    fn name(&self) -> &str;

    /// Compile `source` into the PDF at `output`.
    fn compile(&self, source: &Path, output: &Path) -> Result<(), EngineError>;
}

/// LaTeX engine.
///
/// Runs `<program> <args>... --outdir <output dir> <source>`. Tectonic names
/// the PDF after the source file, so callers should keep the source stem
/// equal to the output stem.
#[derive(Clone, Debug)]
pub struct Tectonic {
    command: ExternalCommand,
}

impl Tectonic {
    pub fn new(command: ExternalCommand) -> Self {
        Self { command }
    }
}

impl Default for Tectonic {
    fn default() -> Self {
        Self::new(ExternalCommand::new("tectonic"))
    }
}

impl PdfEngine for Tectonic {
    fn name(&self) -> &str {
        "tectonic"
    }

    fn compile(&self, source: &Path, output: &Path) -> Result<(), EngineError> {
        let out_dir = match output.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        self.command.run([
            OsStr::new("--outdir"),
            out_dir.as_os_str(),
            source.as_os_str(),
        ])
    }
}

/// HTML-to-PDF engine.
///
/// Runs `<program> <args>... <source> <output>`.
#[derive(Clone, Debug)]
pub struct WeasyPrint {
    command: ExternalCommand,
}

impl WeasyPrint {
    pub fn new(command: ExternalCommand) -> Self {
        Self { command }
    }
}

impl Default for WeasyPrint {
    fn default() -> Self {
        Self::new(ExternalCommand::new("weasyprint"))
    }
}

impl PdfEngine for WeasyPrint {
    fn name(&self) -> &str {
        "weasyprint"
    }

    fn compile(&self, source: &Path, output: &Path) -> Result<(), EngineError> {
        self.command.run([source.as_os_str(), output.as_os_str()])
    }
}
