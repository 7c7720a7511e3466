//! Application-level errors (script execution)

use thiserror::Error;

/// Script errors abort a whole run. Individual command failures are
/// not errors at this level: they become `unsuccessful` lines in the
/// protocol output and execution continues.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("invalid command count: {0:?}")]
    InvalidCount(String),

    #[error("script I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for script execution.
pub type ScriptResult<T> = Result<T, ScriptError>;
