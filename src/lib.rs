//! Tic-tac-toe on a fixed 3x3 board: one interactive participant against a
//! uniformly random opponent.
//!
//! The library holds the game core (board model, win/draw evaluation, and
//! the turn-based state machine) plus the thin boundary collaborators it
//! drives: move sources, a text renderer, and append-only result/event
//! sinks. The binary in `main.rs` wires these together.

#![warn(missing_docs)]

pub mod board;
pub mod display;
pub mod error;
pub mod game;
pub mod players;
pub mod record;

pub use board::{Board, Coord, Mark, Outcome, Square};
pub use error::MoveError;
pub use game::{Game, MoveRecord, Round};
pub use players::{HumanPlayer, Player, RandomPlayer};
pub use record::GameRecorder;
