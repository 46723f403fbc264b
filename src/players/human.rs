//! Interactive player that reads coordinates from a text source.

use super::Player;
use crate::board::{Board, Mark};
use anyhow::{Result, bail};
use std::io::{BufRead, Write};

/// Interactive player reading row/column values from a buffered source.
///
/// Non-numeric input is re-prompted here at the boundary; out-of-range
/// numbers are passed through for the controller to reject.
pub struct HumanPlayer<R, W> {
    name: String,
    mark: Mark,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new interactive player.
    pub fn new(name: impl Into<String>, mark: Mark, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            mark,
            input,
            output,
        }
    }

    /// Prompts until a line parses as a number.
    fn read_value(&mut self, prompt: &str) -> Result<usize> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input closed before a move was entered");
            }
            match line.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Please enter a number.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn propose_move(&mut self, _board: &Board) -> Result<Option<(usize, usize)>> {
        let row = self.read_value("Enter the row (0, 1, 2): ")?;
        let col = self.read_value("Enter the column (0, 1, 2): ")?;
        Ok(Some((row, col)))
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
