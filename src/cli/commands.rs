//! Command dispatch: wire CLI arguments to the interpreter

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use tracing::{debug, instrument};

use crate::application::Interpreter;
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};

/// Run the script named on the command line, or read one from stdin
/// when no path was given. Protocol output goes to stdout.
#[instrument(level = "debug", skip_all)]
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.script {
        Some(path) => {
            debug!("script: {:?}", path);
            let file = File::open(path).map_err(|source| CliError::ScriptNotReadable {
                path: path.clone(),
                source,
            })?;
            run_script(BufReader::new(file))
        }
        None => {
            debug!("script: <stdin>");
            run_script(io::stdin().lock())
        }
    }
}

fn run_script(reader: impl BufRead) -> CliResult<()> {
    let mut interpreter = Interpreter::new();
    let mut writer = io::stdout().lock();
    interpreter.run(reader, &mut writer)?;
    Ok(())
}
