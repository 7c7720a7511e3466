//! Integration tests for CLI dispatch and exit code mapping

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use rostree::cli::commands::execute_command;
use rostree::cli::{Cli, CliError};
use rostree::util::testing;
use rostree::{exitcode, ScriptError};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn cli_for(script: PathBuf) -> Cli {
    Cli {
        script: Some(script),
        debug: 0,
        generator: None,
    }
}

// ============================================================
// Script File Handling
// ============================================================

#[test]
fn given_valid_script_file_when_executing_then_succeeds() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("roster.txt");
    fs::write(&script, "2\ninsert \"Ada\" 00000001\nprintLevelCount\n").unwrap();

    let result = execute_command(&cli_for(script));

    assert!(result.is_ok(), "valid script should run: {:?}", result);
}

#[test]
fn given_missing_script_file_when_executing_then_not_readable_error() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("no-such-script.txt");

    let err = execute_command(&cli_for(script.clone())).unwrap_err();

    match &err {
        CliError::ScriptNotReadable { path, .. } => assert_eq!(path, &script),
        other => panic!("expected ScriptNotReadable, got {:?}", other),
    }
    assert_eq!(err.exit_code(), exitcode::NOINPUT);
}

#[test]
fn given_script_with_bad_header_when_executing_then_data_error() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("roster.txt");
    fs::write(&script, "lots\ninsert \"Ada\" 00000001\n").unwrap();

    let err = execute_command(&cli_for(script)).unwrap_err();

    assert!(matches!(
        err,
        CliError::Script(ScriptError::InvalidCount(ref header)) if header == "lots"
    ));
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

// ============================================================
// Exit Codes and Messages
// ============================================================

#[test]
fn given_io_failure_when_mapping_then_ioerr_exit_code() {
    let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
    let err = CliError::Script(ScriptError::Io(io_err));

    assert_eq!(err.exit_code(), exitcode::IOERR);
}

#[test]
fn given_errors_when_displayed_then_messages_name_the_cause() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("no-such-script.txt");

    let err = execute_command(&cli_for(script.clone())).unwrap_err();
    assert!(
        err.to_string().contains("no-such-script.txt"),
        "message should name the file: {}",
        err
    );

    let err = CliError::Script(ScriptError::InvalidCount("first".to_string()));
    assert!(err.to_string().contains("invalid command count"));
    assert!(err.to_string().contains("first"));
}
