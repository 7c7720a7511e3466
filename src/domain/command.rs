//! Line-oriented command grammar for roster scripts
//!
//! One line is one command. Ids are exactly eight decimal digits
//! (leading zeros allowed), names sit between double quotes, and any
//! trailing text after a complete command makes the line malformed.

use regex::Regex;
use thiserror::Error;

use crate::domain::record::RecordId;

/// A fully parsed roster command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert { name: String, id: RecordId },
    Remove { id: RecordId },
    RemoveInorder { position: usize },
    SearchId { id: RecordId },
    SearchName { name: String },
    PrintInorder,
    PrintPreorder,
    PrintPostorder,
    PrintLevelCount,
}

/// Why a line failed to parse. The interpreter reports every variant
/// the same way; the distinction only feeds diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command line")]
    Empty,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("malformed command line: {0}")]
    Malformed(String),
}

/// Result type for command parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parser for the roster command grammar. The per-command regexes are
/// compiled once up front and reused for every line.
pub struct CommandParser {
    insert_regex: Regex,
    remove_regex: Regex,
    remove_inorder_regex: Regex,
    search_name_regex: Regex,
    search_id_regex: Regex,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser {
    pub fn new() -> Self {
        Self {
            insert_regex: Regex::new(r#"^insert\s+"([^"]*)"\s+([0-9]{8})$"#).unwrap(),
            remove_regex: Regex::new(r"^remove\s+([0-9]{8})$").unwrap(),
            remove_inorder_regex: Regex::new(r"^removeInorder\s+([0-9]+)$").unwrap(),
            search_name_regex: Regex::new(r#"^search\s+"([^"]*)"$"#).unwrap(),
            search_id_regex: Regex::new(r"^search\s+([0-9]{8})$").unwrap(),
        }
    }

    /// Parse one script line. Surrounding whitespace is ignored; the
    /// command word itself is case-sensitive.
    pub fn parse(&self, line: &str) -> ParseResult<Command> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::Empty);
        }

        let word = line.split_whitespace().next().unwrap_or(line);
        match word {
            "insert" => self.parse_insert(line),
            "remove" => self.parse_remove(line),
            "removeInorder" => self.parse_remove_inorder(line),
            "search" => self.parse_search(line),
            "printInorder" => Self::bare(line, word, Command::PrintInorder),
            "printPreorder" => Self::bare(line, word, Command::PrintPreorder),
            "printPostorder" => Self::bare(line, word, Command::PrintPostorder),
            "printLevelCount" => Self::bare(line, word, Command::PrintLevelCount),
            _ => Err(ParseError::UnknownCommand(word.to_string())),
        }
    }

    fn parse_insert(&self, line: &str) -> ParseResult<Command> {
        let caps = self
            .insert_regex
            .captures(line)
            .ok_or_else(|| ParseError::Malformed(line.to_string()))?;
        Ok(Command::Insert {
            name: caps[1].to_string(),
            id: Self::parse_id(&caps[2])?,
        })
    }

    fn parse_remove(&self, line: &str) -> ParseResult<Command> {
        let caps = self
            .remove_regex
            .captures(line)
            .ok_or_else(|| ParseError::Malformed(line.to_string()))?;
        Ok(Command::Remove {
            id: Self::parse_id(&caps[1])?,
        })
    }

    fn parse_remove_inorder(&self, line: &str) -> ParseResult<Command> {
        let caps = self
            .remove_inorder_regex
            .captures(line)
            .ok_or_else(|| ParseError::Malformed(line.to_string()))?;
        let position = caps[1]
            .parse::<usize>()
            .map_err(|_| ParseError::Malformed(line.to_string()))?;
        Ok(Command::RemoveInorder { position })
    }

    /// `search` is overloaded: a quoted argument searches by name, a
    /// bare eight-digit argument searches by id.
    fn parse_search(&self, line: &str) -> ParseResult<Command> {
        if let Some(caps) = self.search_name_regex.captures(line) {
            return Ok(Command::SearchName {
                name: caps[1].to_string(),
            });
        }
        if let Some(caps) = self.search_id_regex.captures(line) {
            return Ok(Command::SearchId {
                id: Self::parse_id(&caps[1])?,
            });
        }
        Err(ParseError::Malformed(line.to_string()))
    }

    fn bare(line: &str, word: &str, command: Command) -> ParseResult<Command> {
        if line == word {
            Ok(command)
        } else {
            Err(ParseError::Malformed(line.to_string()))
        }
    }

    /// Eight decimal digits always fit a `u32`, but the conversion is
    /// still checked rather than assumed.
    fn parse_id(digits: &str) -> ParseResult<RecordId> {
        digits
            .parse::<RecordId>()
            .map_err(|_| ParseError::Malformed(digits.to_string()))
    }
}
