//! CLI error types.

use std::path::PathBuf;

use md2pdf_config::ConfigError;
use md2pdf_engine::EngineError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The PDF engine failed; the generated source stays on disk.
    #[error("{source}\nGenerated file kept at: {}", intermediate.display())]
    Engine {
        source: EngineError,
        intermediate: PathBuf,
    },

    #[error("{0}")]
    Validation(String),
}
