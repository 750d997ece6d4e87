//! Command-line interface for the terminal front end.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe with time travel, in the terminal
#[derive(Parser, Debug)]
#[command(name = "rewind_tui")]
#[command(about = "Tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File that receives log output (the screen belongs to the game)
    #[arg(long, default_value = "rewind_tui.log")]
    pub log_file: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
