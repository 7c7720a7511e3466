//! CLI-level errors (wraps application errors)

use std::path::PathBuf;

use thiserror::Error;

use crate::application::ScriptError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Script(#[from] ScriptError),

    #[error("cannot open script {path}: {source}")]
    ScriptNotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ScriptNotReadable { .. } => crate::exitcode::NOINPUT,
            CliError::Script(e) => match e {
                ScriptError::InvalidCount(_) => crate::exitcode::DATAERR,
                ScriptError::Io(_) => crate::exitcode::IOERR,
            },
        }
    }
}
