//! Game controller: turn order, move validation, terminal detection.

use crate::board::{Board, Coord, Mark, Outcome, Square};
use crate::display;
use crate::error::MoveError;
use crate::players::Player;
use crate::record::GameRecorder;
use anyhow::Result;
use derive_getters::Getters;
use derive_new::new;
use std::io::Write;
use tracing::{debug, info, warn};

/// One applied move: who played where, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new, Getters)]
pub struct MoveRecord {
    /// Mark that made the move.
    mark: Mark,
    /// Square the mark was placed on.
    coord: Coord,
}

/// Result of driving one round of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Round {
    /// A move was applied and the game continues with the other participant.
    Continued,
    /// A move was applied and ended the game.
    Finished(Outcome),
    /// The proposal was rejected; board and turn index are unchanged and the
    /// same participant retries.
    Rejected(MoveError),
}

/// The game state machine.
///
/// Owns the board, both participants in turn order, the turn index, the
/// evaluated outcome, and the ordered move history. Created once per game
/// session and discarded after the outcome is recorded.
#[derive(Getters)]
pub struct Game {
    /// Current board.
    board: Board,
    /// Participants in turn order; index 0 moves first.
    players: [Box<dyn Player>; 2],
    /// Index of the participant to move.
    current: usize,
    /// Evaluated outcome; `Undecided` while in progress.
    outcome: Outcome,
    /// Applied moves in order.
    history: Vec<MoveRecord>,
    /// Count of applied moves (rejected proposals are not counted).
    total_moves: usize,
}

impl Game {
    /// Creates a new game. The first participant moves first.
    pub fn new(first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        Self {
            board: Board::new(),
            players: [first, second],
            current: 0,
            outcome: Outcome::Undecided,
            history: Vec::new(),
            total_moves: 0,
        }
    }

    /// Returns how many moves the given mark has made.
    pub fn moves_for(&self, mark: Mark) -> usize {
        self.history.iter().filter(|m| *m.mark() == mark).count()
    }

    /// Plays one round: asks the active participant for a move, validates
    /// it, and applies it.
    ///
    /// Rejections ([`MoveError`]) leave the board, history, and turn index
    /// untouched and are reported as [`Round::Rejected`] so the caller can
    /// re-prompt the same participant. Once the game is terminal, no further
    /// moves are accepted and the stored outcome is returned.
    ///
    /// # Errors
    ///
    /// Only participant I/O failures (for example a closed input stream)
    /// are fatal.
    pub fn play_round(&mut self) -> Result<Round> {
        if self.outcome != Outcome::Undecided {
            return Ok(Round::Finished(self.outcome));
        }

        let player = &mut self.players[self.current];
        let mark = player.mark();
        let proposed = player.propose_move(&self.board)?;

        let Some((row, col)) = proposed else {
            warn!(player = %mark, "no legal move proposed");
            return Ok(Round::Rejected(MoveError::NoLegalMove));
        };

        let coord = match Coord::new(row, col) {
            Ok(coord) => coord,
            Err(err) => {
                warn!(player = %mark, row, col, "move out of range");
                return Ok(Round::Rejected(err));
            }
        };
        if self.board.get(coord) != Square::Empty {
            warn!(player = %mark, %coord, "square already occupied");
            return Ok(Round::Rejected(MoveError::CellOccupied));
        }

        self.board.place(coord, mark);
        self.history.push(MoveRecord::new(mark, coord));
        self.total_moves += 1;
        debug!(player = %mark, %coord, total_moves = self.total_moves, "move applied");

        self.outcome = self.board.evaluate();
        match self.outcome {
            Outcome::Undecided => {
                self.current = (self.current + 1) % 2;
                Ok(Round::Continued)
            }
            outcome => {
                info!(?outcome, total_moves = self.total_moves, "game finished");
                Ok(Round::Finished(outcome))
            }
        }
    }

    /// Drives rounds to a terminal state.
    ///
    /// Renders the board and announces the turn before each proposal,
    /// reports rejected moves and retries the same participant, and on
    /// terminal renders the final board, announces the outcome, and hands
    /// outcome plus move counts to the recorder.
    pub fn run(&mut self, out: &mut dyn Write, recorder: &mut GameRecorder) -> Result<Outcome> {
        info!(
            first = self.players[0].name(),
            second = self.players[1].name(),
            "starting game"
        );

        let outcome = loop {
            display::render(&self.board, out)?;
            writeln!(out, "Player {}'s turn:", self.players[self.current].mark())?;

            match self.play_round()? {
                Round::Continued => {}
                Round::Finished(outcome) => break outcome,
                Round::Rejected(err) => {
                    writeln!(out, "Invalid move. {err}. Try again.")?;
                }
            }
        };

        display::render(&self.board, out)?;
        let announcement = match outcome {
            Outcome::WonBy(mark) => format!("Player {mark} wins!"),
            _ => "It's a draw!".to_string(),
        };
        writeln!(out, "{announcement}")?;

        recorder.log_event(&announcement)?;
        recorder.record_result(
            outcome,
            self.total_moves,
            self.moves_for(Mark::X),
            self.moves_for(Mark::O),
        )?;

        Ok(outcome)
    }
}
