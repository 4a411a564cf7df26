//! Running external programs with captured output.

use std::ffi::OsStr;
use std::process::{Command, Stdio};

use crate::error::EngineError;

/// An external program plus fixed leading arguments.
#[derive(Clone, Debug)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
}

impl ExternalCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Arguments placed before the per-call arguments.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the program with the fixed arguments followed by `extra`.
    ///
    /// Stdin is closed; stdout and stderr are captured. On failure the
    /// error carries stderr, or stdout if the program wrote nothing to
    /// stderr.
    pub fn run<I, S>(&self, extra: I) -> Result<(), EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        tracing::info!(program = %self.program, "Running engine");

        let output = Command::new(&self.program)
            .args(&self.args)
            .args(extra)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| EngineError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if output.status.success() {
            tracing::info!(program = %self.program, "Engine finished");
            return Ok(());
        }

        let stderr = if output.stderr.is_empty() {
            String::from_utf8_lossy(&output.stdout).into_owned()
        } else {
            String::from_utf8_lossy(&output.stderr).into_owned()
        };
        tracing::warn!(
            program = %self.program,
            code = ?output.status.code(),
            "Engine failed"
        );
        Err(EngineError::Failed {
            program: self.program.clone(),
            code: output.status.code(),
            stderr,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_run_success() {
        ExternalCommand::new("true").run::<_, &str>([]).unwrap();
    }

    #[test]
    fn test_run_failure_captures_stderr() {
        let cmd = ExternalCommand::new("sh").with_args(["-c", "echo 'bad input' >&2; exit 3"]);
        let err = cmd.run::<_, &str>([]).unwrap_err();
        match err {
            EngineError::Failed { program, code, stderr } => {
                assert_eq!(program, "sh");
                assert_eq!(code, Some(3));
                assert_eq!(stderr.trim(), "bad input");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_run_failure_falls_back_to_stdout() {
        let cmd = ExternalCommand::new("sh").with_args(["-c", "echo 'on stdout'; exit 1"]);
        let err = cmd.run::<_, &str>([]).unwrap_err();
        assert!(err.to_string().contains("on stdout"));
        assert!(err.to_string().contains("status 1"));
    }

    #[test]
    fn test_run_missing_program() {
        let err = ExternalCommand::new("md2pdf-definitely-missing")
            .run::<_, &str>([])
            .unwrap_err();
        assert!(matches!(err, EngineError::Spawn { .. }));
        assert!(err.to_string().contains("md2pdf-definitely-missing"));
    }
}
