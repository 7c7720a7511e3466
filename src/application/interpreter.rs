//! Script interpreter
//!
//! Executes count-prefixed command scripts against a single roster
//! tree and renders the textual protocol output.

use std::io::{BufRead, Write};

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::error::{ScriptError, ScriptResult};
use crate::domain::command::{Command, CommandParser};
use crate::domain::error::DomainResult;
use crate::domain::record::{format_id, Record};
use crate::domain::tree::AvlTree;

const SUCCESSFUL: &str = "successful";
const UNSUCCESSFUL: &str = "unsuccessful";

/// One interpreter session: a tree plus the shared command parser.
/// All state is confined here, so independent sessions never interact.
pub struct Interpreter {
    tree: AvlTree,
    parser: CommandParser,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            tree: AvlTree::new(),
            parser: CommandParser::new(),
        }
    }

    /// Read-only view of the underlying tree.
    pub fn tree(&self) -> &AvlTree {
        &self.tree
    }

    /// Run a whole script. The first line declares how many of the
    /// following lines are commands; lines beyond that count are
    /// ignored, and a script that ends early just stops there.
    #[instrument(level = "debug", skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, writer: &mut W) -> ScriptResult<()> {
        let mut lines = reader.lines();
        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(ScriptError::InvalidCount(String::new())),
        };
        let count: usize = header
            .trim()
            .parse()
            .map_err(|_| ScriptError::InvalidCount(header.clone()))?;
        debug!("run: {} commands declared", count);

        for executed in 0..count {
            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    debug!("run: script ended after {} of {} commands", executed, count);
                    break;
                }
            };
            for output in self.execute(&line) {
                writeln!(writer, "{}", output)?;
            }
        }
        Ok(())
    }

    /// Execute a single command line and return its protocol output.
    /// Lines that fail to parse produce one `unsuccessful` line, same
    /// as commands that are rejected by the tree.
    #[instrument(level = "debug", skip(self))]
    pub fn execute(&mut self, line: &str) -> Vec<String> {
        let command = match self.parser.parse(line) {
            Ok(command) => command,
            Err(err) => {
                debug!("execute: rejected line: {}", err);
                return vec![UNSUCCESSFUL.to_string()];
            }
        };
        self.apply(command)
    }

    fn apply(&mut self, command: Command) -> Vec<String> {
        match command {
            Command::Insert { name, id } => report("insert", self.tree.insert(&name, id)),
            Command::Remove { id } => report("remove", self.tree.remove(id)),
            Command::RemoveInorder { position } => {
                report("removeInorder", self.tree.remove_inorder(position))
            }
            Command::SearchId { id } => vec![self
                .tree
                .search_id(id)
                .map(str::to_string)
                .unwrap_or_else(|| UNSUCCESSFUL.to_string())],
            Command::SearchName { name } => self.search_name(&name),
            Command::PrintInorder => vec![self.names(self.tree.iter())],
            Command::PrintPreorder => vec![self.names(self.tree.iter_preorder())],
            Command::PrintPostorder => vec![self.names(self.tree.iter_postorder())],
            Command::PrintLevelCount => vec![self.tree.height().to_string()],
        }
    }

    /// One id per output line, padded to the fixed field width. An
    /// empty result set and an invalid name both report `unsuccessful`.
    fn search_name(&self, name: &str) -> Vec<String> {
        match self.tree.search_name(name) {
            Ok(ids) if ids.is_empty() => vec![UNSUCCESSFUL.to_string()],
            Ok(ids) => ids.into_iter().map(format_id).collect(),
            Err(err) => {
                debug!("search_name: rejected: {}", err);
                vec![UNSUCCESSFUL.to_string()]
            }
        }
    }

    /// Comma-separated names in traversal order; the empty tree yields
    /// an empty string, which prints as a blank line.
    fn names<'a>(&self, records: impl Iterator<Item = &'a Record>) -> String {
        records.map(|record| record.name.as_str()).join(", ")
    }
}

fn report(command: &str, result: DomainResult<()>) -> Vec<String> {
    match result {
        Ok(()) => vec![SUCCESSFUL.to_string()],
        Err(err) => {
            debug!("{}: {}", command, err);
            vec![UNSUCCESSFUL.to_string()]
        }
    }
}
