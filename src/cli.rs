//! Command-line interface for noughts.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - terminal tic-tac-toe against a random opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against a random opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// CSV file receiving one record per completed game
    #[arg(long, default_value = "logs/game_results.csv")]
    pub results_file: PathBuf,

    /// Append-only event log file
    #[arg(long, default_value = "logs/game.log")]
    pub log_file: PathBuf,
}
