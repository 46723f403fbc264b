//! Result sink and event log for completed games.

use crate::board::Outcome;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Appends game records and events to configured files.
///
/// Paths are explicit startup configuration rather than ambient process
/// state. Both sinks are append-only; files and parent directories are
/// created on first write.
#[derive(Debug, Clone)]
pub struct GameRecorder {
    results_path: PathBuf,
    log_path: PathBuf,
}

impl GameRecorder {
    /// Creates a recorder writing results and events to the given paths.
    pub fn new(results_path: impl Into<PathBuf>, log_path: impl Into<PathBuf>) -> Self {
        Self {
            results_path: results_path.into(),
            log_path: log_path.into(),
        }
    }

    /// Appends one CSV record for a completed game:
    /// `timestamp,outcome,total_moves,moves_x,moves_o`, with the timestamp
    /// formatted as `YYYY-MM-DD HH:MM:SS`.
    #[instrument(skip(self))]
    pub fn record_result(
        &mut self,
        outcome: Outcome,
        total_moves: usize,
        moves_x: usize,
        moves_o: usize,
    ) -> Result<()> {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let winner = match outcome {
            Outcome::WonBy(mark) => mark.to_string(),
            _ => "Draw".to_string(),
        };

        let mut file = open_append(&self.results_path)
            .with_context(|| format!("opening results file {}", self.results_path.display()))?;
        writeln!(file, "{timestamp},{winner},{total_moves},{moves_x},{moves_o}")
            .context("writing game record")?;

        debug!(path = %self.results_path.display(), %winner, "game record written");
        Ok(())
    }

    /// Appends one timestamped informational line to the event log.
    #[instrument(skip(self))]
    pub fn log_event(&mut self, message: &str) -> Result<()> {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut file = open_append(&self.log_path)
            .with_context(|| format!("opening event log {}", self.log_path.display()))?;
        writeln!(file, "{timestamp} INFO {message}").context("writing event log entry")?;
        Ok(())
    }
}

/// Opens a file for appending, creating it and its parent directory if
/// needed.
fn open_append(path: &PathBuf) -> Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(Into::into)
}
