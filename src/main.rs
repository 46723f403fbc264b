//! Noughts - terminal tic-tac-toe
//!
//! The human plays X and moves first; a random opponent plays O.

mod cli;

use anyhow::Result;
use clap::Parser;
use noughts::{Game, GameRecorder, HumanPlayer, Mark, RandomPlayer};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    initialize_tracing();

    let cli = cli::Cli::parse();
    info!(
        results_file = %cli.results_file.display(),
        log_file = %cli.log_file.display(),
        "starting noughts"
    );

    let human = HumanPlayer::new("Player 1", Mark::X, std::io::stdin().lock(), std::io::stdout());
    let bot = RandomPlayer::new("Bot", Mark::O);

    let mut game = Game::new(Box::new(human), Box::new(bot));
    let mut recorder = GameRecorder::new(cli.results_file, cli.log_file);

    let outcome = game.run(&mut std::io::stdout(), &mut recorder)?;
    info!(?outcome, total_moves = *game.total_moves(), "game recorded");

    Ok(())
}

/// Initializes tracing to stderr so diagnostics never mix into the board
/// output on stdout.
#[instrument]
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
