//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

/// Ordered roster store: AVL-backed name/id records driven by batch command scripts
#[derive(Parser, Debug)]
#[command(name = "rostree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command script to run (reads stdin when omitted)
    pub script: Option<PathBuf>,

    /// Enable debug logging, repeat for more detail (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,
}
