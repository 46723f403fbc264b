//! Participant trait and implementations.

mod human;
mod random;

pub use human::HumanPlayer;
pub use random::RandomPlayer;

use crate::board::{Board, Mark};
use anyhow::Result;

/// A participant that can propose moves.
///
/// The proposal is raw (row, col) input: range and occupancy validation is
/// the controller's responsibility, so an interactive participant's bad
/// coordinates surface through the same retry path as any other invalid
/// move.
pub trait Player {
    /// Proposes a move against the current board, or `None` when the
    /// participant has no legal destination.
    ///
    /// Blocking on external input is a plain blocking call.
    fn propose_move(&mut self, board: &Board) -> Result<Option<(usize, usize)>>;

    /// Returns the mark this participant plays.
    fn mark(&self) -> Mark;

    /// Returns the participant's display name.
    fn name(&self) -> &str;
}
