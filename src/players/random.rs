//! Automated player that picks uniformly among legal moves.

use super::Player;
use crate::board::{Board, Mark};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Automated player choosing uniformly at random among empty squares.
pub struct RandomPlayer {
    name: String,
    mark: Mark,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a new random player with an entropy-seeded generator.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a random player with a fixed seed, for deterministic tests.
    pub fn seeded(name: impl Into<String>, mark: Mark, seed: u64) -> Self {
        Self {
            name: name.into(),
            mark,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn propose_move(&mut self, board: &Board) -> Result<Option<(usize, usize)>> {
        let moves = board.available_moves();
        let choice = moves.choose(&mut self.rng).copied();
        debug!(player = %self.name, choice = ?choice, "random player proposed");
        Ok(choice.map(|coord| (coord.row(), coord.col())))
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
