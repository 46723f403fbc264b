//! Board rendering for text output.

use crate::board::{Board, Mark, SIZE, Square};
use std::io::Write;

/// Renders the board as a 3x3 grid with ` | ` between columns and a dashed
/// rule between rows. Empty squares render as a space.
pub fn render(board: &Board, out: &mut dyn Write) -> std::io::Result<()> {
    for (row, squares) in board.squares().iter().enumerate() {
        for (col, square) in squares.iter().enumerate() {
            let symbol = match square {
                Square::Empty => " ",
                Square::Taken(Mark::X) => "X",
                Square::Taken(Mark::O) => "O",
            };
            write!(out, "{symbol}")?;
            if col < SIZE - 1 {
                write!(out, " | ")?;
            }
        }
        writeln!(out)?;
        if row < SIZE - 1 {
            writeln!(out, "{}", "-".repeat(9))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;

    #[test]
    fn renders_marks_and_rules() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0).unwrap(), Mark::X);
        board.place(Coord::new(1, 1).unwrap(), Mark::O);

        let mut buf = Vec::new();
        render(&board, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            "X |   |  \n---------\n  | O |  \n---------\n  |   |  \n"
        );
    }
}
