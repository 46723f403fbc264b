//! End-to-end test of the driver loop: rendering, announcement, recording.

use anyhow::Result;
use noughts::{Board, Game, GameRecorder, Mark, Outcome, Player};

struct ScriptedPlayer {
    mark: Mark,
    moves: Vec<Option<(usize, usize)>>,
    next: usize,
}

impl Player for ScriptedPlayer {
    fn propose_move(&mut self, _board: &Board) -> Result<Option<(usize, usize)>> {
        let proposed = self.moves[self.next];
        self.next += 1;
        Ok(proposed)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn scripted(mark: Mark, moves: Vec<Option<(usize, usize)>>) -> Box<dyn Player> {
    Box::new(ScriptedPlayer {
        mark,
        moves,
        next: 0,
    })
}

#[test]
fn run_announces_winner_and_records_result() {
    let dir = tempfile::tempdir().unwrap();
    let results = dir.path().join("results.csv");
    let log = dir.path().join("events.log");
    let mut recorder = GameRecorder::new(&results, &log);

    // X wins the left column; O's second proposal is first rejected as
    // occupied, then retried.
    let mut game = Game::new(
        scripted(Mark::X, vec![Some((0, 0)), Some((1, 0)), Some((2, 0))]),
        scripted(Mark::O, vec![Some((0, 1)), Some((0, 1)), Some((0, 2))]),
    );

    let mut out = Vec::new();
    let outcome = game.run(&mut out, &mut recorder).unwrap();
    assert_eq!(outcome, Outcome::WonBy(Mark::X));

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Player X's turn:"));
    assert!(text.contains("Player O's turn:"));
    assert!(text.contains("Invalid move. that square is already occupied. Try again."));
    assert!(text.contains("Player X wins!"));
    // Final board shows the completed left column.
    assert!(text.contains("X | O | O"));

    let csv = std::fs::read_to_string(&results).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(",X,5,3,2"));

    let events = std::fs::read_to_string(&log).unwrap();
    assert!(events.contains("Player X wins!"));
}

#[test]
fn run_announces_draw() {
    let dir = tempfile::tempdir().unwrap();
    let results = dir.path().join("results.csv");
    let log = dir.path().join("events.log");
    let mut recorder = GameRecorder::new(&results, &log);

    // X O X / X O O / O X X: full board, no line.
    let mut game = Game::new(
        scripted(
            Mark::X,
            vec![
                Some((0, 0)),
                Some((0, 2)),
                Some((1, 0)),
                Some((2, 1)),
                Some((2, 2)),
            ],
        ),
        scripted(
            Mark::O,
            vec![Some((0, 1)), Some((1, 1)), Some((1, 2)), Some((2, 0))],
        ),
    );

    let mut out = Vec::new();
    let outcome = game.run(&mut out, &mut recorder).unwrap();
    assert_eq!(outcome, Outcome::Draw);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("It's a draw!"));

    let csv = std::fs::read_to_string(&results).unwrap();
    assert!(csv.lines().next().unwrap().ends_with(",Draw,9,5,4"));

    let events = std::fs::read_to_string(&log).unwrap();
    assert!(events.contains("It's a draw!"));
}

#[test]
fn run_with_random_opponent_reaches_a_terminal_state() {
    use noughts::RandomPlayer;

    let dir = tempfile::tempdir().unwrap();
    let mut recorder = GameRecorder::new(
        dir.path().join("results.csv"),
        dir.path().join("events.log"),
    );

    // Two random players always finish within 9 applied moves.
    let mut game = Game::new(
        Box::new(RandomPlayer::seeded("Bot X", Mark::X, 1)),
        Box::new(RandomPlayer::seeded("Bot O", Mark::O, 2)),
    );

    let mut out = Vec::new();
    let outcome = game.run(&mut out, &mut recorder).unwrap();
    assert_ne!(outcome, Outcome::Undecided);
    assert!(*game.total_moves() <= 9);
    assert!(game.moves_for(Mark::X).abs_diff(game.moves_for(Mark::O)) <= 1);
}
