//! Application layer: script execution against the roster tree
//!
//! This layer orchestrates domain logic; all I/O goes through the
//! reader/writer handles its callers pass in.

pub mod error;
pub mod interpreter;

pub use error::{ScriptError, ScriptResult};
pub use interpreter::Interpreter;
