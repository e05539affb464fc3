//! Command-line interface for noughts.

use clap::Parser;

/// Noughts - terminal tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Terminal tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File to write logs to (the TUI owns the terminal, so logs
    /// cannot go to stdout)
    #[arg(long, default_value = "noughts.log")]
    pub log_file: std::path::PathBuf,

    /// Milliseconds the computer "thinks" before replying
    #[arg(long, default_value = "500")]
    pub ai_delay_ms: u64,
}
