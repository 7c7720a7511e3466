//! Domain layer: the roster tree and its command grammar
//!
//! This layer is independent of external concerns (no I/O, no CLI, no script handling).

pub mod command;
pub mod error;
pub mod record;
pub mod tree;

pub use command::{Command, CommandParser, ParseError, ParseResult};
pub use error::{DomainError, DomainResult};
pub use record::{format_id, is_valid_name, Record, RecordId, ID_WIDTH};
pub use tree::AvlTree;
