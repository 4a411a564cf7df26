//! Engine error types.

/// Error returned when running an external engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The program could not be started (missing binary, permissions).
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran but exited unsuccessfully.
    #[error("{program} exited with {}:\n{stderr}", exit_status(.code))]
    Failed {
        program: String,
        /// Exit code, `None` if terminated by a signal.
        code: Option<i32>,
        /// Captured diagnostics (stderr, or stdout when stderr is empty).
        stderr: String,
    },
}

#[allow(clippy::ref_option)]
fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_owned(),
    }
}
