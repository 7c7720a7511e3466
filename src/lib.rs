//! rostree: an ordered roster of (name, id) records on an AVL tree,
//! driven by line-oriented batch command scripts.
//!
//! The crate is split into three layers. `domain` holds the tree and
//! the command grammar, `application` runs whole scripts against a
//! tree, and `cli` wires both to the terminal.

pub mod application;
pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{Interpreter, ScriptError, ScriptResult};
pub use domain::{AvlTree, Command, CommandParser, DomainError, ParseError, Record, RecordId};
