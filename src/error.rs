//! Error types for move validation.

use derive_more::{Display, Error};

/// Errors raised while validating a proposed move.
///
/// All variants are recoverable: the round is abandoned, the board and turn
/// index are left untouched, and the same participant is asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Row or column falls outside 0-2.
    #[display("coordinates out of range: row and column must be between 0 and 2")]
    OutOfRange,
    /// The target square already holds a mark.
    #[display("that square is already occupied")]
    CellOccupied,
    /// The participant had no empty square to propose.
    #[display("no legal moves remain")]
    NoLegalMove,
}
