//! Core domain types for the 3x3 board.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Board side length. The game is fixed at 3x3.
pub const SIZE: usize = 3;

/// A player's mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a mark.
    Taken(Mark),
}

/// A validated (row, column) pair.
///
/// Construction is the single bounds check: once a `Coord` exists, both
/// components are known to be in 0-2 and board access is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Creates a coordinate, rejecting rows or columns outside the board.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= SIZE || col >= SIZE {
            return Err(MoveError::OutOfRange);
        }
        Ok(Self { row, col })
    }

    /// Returns the row (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the column (0-2).
    pub fn col(self) -> usize {
        self.col
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Evaluated state of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No completed line and at least one empty square.
    Undecided,
    /// A line of three identical marks exists.
    WonBy(Mark),
    /// Board is full with no completed line.
    Draw,
}

/// The 3x3 grid of squares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; SIZE]; SIZE],
}

/// The 8 winning lines as (row, col) triples: rows, then columns, then
/// diagonals. Evaluation order is fixed so tests are deterministic.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

impl Board {
    /// Creates a new board with all 9 squares empty.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; SIZE]; SIZE],
        }
    }

    /// Returns the square at a validated coordinate.
    pub fn get(&self, coord: Coord) -> Square {
        self.squares[coord.row()][coord.col()]
    }

    /// Returns all squares, row-major.
    pub fn squares(&self) -> &[[Square; SIZE]; SIZE] {
        &self.squares
    }

    /// Reports whether the square at (row, col) holds a mark.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if row or column is outside 0-2.
    pub fn is_occupied(&self, row: usize, col: usize) -> Result<bool, MoveError> {
        let coord = Coord::new(row, col)?;
        Ok(self.get(coord) != Square::Empty)
    }

    /// Marks the square at `coord`.
    ///
    /// Precondition: the square is empty. The caller validates via
    /// [`Board::is_occupied`]; placement itself does not re-check, which is
    /// the controller's contract (see [`crate::game::Game::play_round`]).
    #[instrument(skip(self))]
    pub fn place(&mut self, coord: Coord, mark: Mark) {
        self.squares[coord.row()][coord.col()] = Square::Taken(mark);
    }

    /// Returns the empty squares in row-major order.
    pub fn available_moves(&self) -> Vec<Coord> {
        let mut moves = Vec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.squares[row][col] == Square::Empty {
                    // In-range by construction of the loop bounds.
                    if let Ok(coord) = Coord::new(row, col) {
                        moves.push(coord);
                    }
                }
            }
        }
        moves
    }

    /// Reports whether no empty square remains.
    pub fn is_full(&self) -> bool {
        self.squares
            .iter()
            .flatten()
            .all(|square| *square != Square::Empty)
    }

    /// Evaluates the board: win, draw, or still undecided.
    ///
    /// Lines are checked rows first, then columns, then diagonals, first
    /// match wins. Under alternating play at most one mark can complete a
    /// line, so the order only matters for determinism.
    #[instrument(skip(self))]
    pub fn evaluate(&self) -> Outcome {
        for [a, b, c] in LINES {
            let square = self.squares[a.0][a.1];
            if square != Square::Empty
                && square == self.squares[b.0][b.1]
                && square == self.squares[c.0][c.1]
            {
                if let Square::Taken(mark) = square {
                    return Outcome::WonBy(mark);
                }
            }
        }

        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Undecided
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
