//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::record::RecordId;

/// Domain errors represent business rule violations raised by the tree.
/// They are all recoverable: the interpreter reports them as a failed
/// command and carries on with the rest of the script.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid name (letters and spaces only): {0:?}")]
    InvalidName(String),

    #[error("id already in roster: {0}")]
    DuplicateId(RecordId),

    #[error("id not in roster: {0}")]
    IdNotFound(RecordId),

    #[error("in-order position out of range: {0}")]
    PositionOutOfRange(usize),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
