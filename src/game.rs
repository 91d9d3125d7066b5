use alloc::vec::Vec;
use core::fmt;

use crate::{
    board::Board,
    common::{BoardError, GuessResult, Status},
    ship::ShipKind,
};

/// One line of game output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Result of a processed guess line.
    Guess(GuessResult),
    /// Emitted right after the last ship sinks.
    GameOver,
    /// A placement or fleet error ended the run.
    Fatal(BoardError),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Guess(res) => write!(f, "{}", res),
            Event::GameOver => write!(f, "all ships sunk: game over"),
            Event::Fatal(err) => write!(f, "ERROR: {}", err),
        }
    }
}

/// How a run ended, as recorded in the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Outcome {
    Pending,
    Fatal,
    Victory,
    InputExhausted,
}

/// Counters collected while a game runs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSummary {
    pub guesses: usize,
    pub hits: usize,
    pub misses: usize,
    pub repeats: usize,
    pub illegal: usize,
    pub sunk: Vec<ShipKind>,
    pub outcome: Outcome,
}

impl GameSummary {
    fn new() -> Self {
        Self {
            guesses: 0,
            hits: 0,
            misses: 0,
            repeats: 0,
            illegal: 0,
            sunk: Vec::new(),
            outcome: Outcome::Pending,
        }
    }

    fn record(&mut self, result: GuessResult) {
        self.guesses += 1;
        match result {
            GuessResult::Illegal => self.illegal += 1,
            GuessResult::Miss => self.misses += 1,
            GuessResult::MissAgain | GuessResult::HitAgain => self.repeats += 1,
            GuessResult::Hit => self.hits += 1,
            GuessResult::Sunk(kind) | GuessResult::AllSunk(kind) => {
                self.hits += 1;
                self.sunk.push(kind);
            }
        }
    }

    fn finish(&mut self, status: &Status) {
        self.outcome = match status {
            Status::Continue => Outcome::Pending,
            Status::Fatal(_) => Outcome::Fatal,
            Status::Victory => Outcome::Victory,
            Status::InputExhausted => Outcome::InputExhausted,
        };
    }
}

/// Drives a [`Board`] through a placement source and then a guess source.
///
/// Terminal conditions come back as a [`Status`]; nothing in here exits the
/// process, the caller decides what to do with the result.
pub struct GameEngine {
    board: Board,
    summary: GameSummary,
}

impl GameEngine {
    /// Create a new engine with an empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            summary: GameSummary::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn summary(&self) -> &GameSummary {
        &self.summary
    }

    /// Place every line, then check the fleet. Blank lines are not skipped;
    /// they fail as malformed placements.
    pub fn run_placements<I, S>(&mut self, lines: I) -> Status
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let status = self.place_all(lines);
        self.summary.finish(&status);
        status
    }

    fn place_all<I, S>(&mut self, lines: I) -> Status
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            if let Err(err) = self.board.place_ship(line.as_ref()) {
                log::debug!("placement rejected: {}", err);
                return Status::Fatal(err);
            }
        }
        match self.board.validate_fleet() {
            Ok(()) => Status::Continue,
            Err(err) => Status::Fatal(err),
        }
    }

    /// Resolve guesses in order, skipping blank lines, until the input runs
    /// out or the last ship sinks. Every produced event goes to `sink`.
    pub fn run_guesses<I, S, F>(&mut self, lines: I, mut sink: F) -> Status
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&Event),
    {
        let mut status = Status::InputExhausted;
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            let result = self.board.apply_guess(line);
            self.summary.record(result);
            sink(&Event::Guess(result));
            if result.is_final() {
                sink(&Event::GameOver);
                status = Status::Victory;
                break;
            }
        }
        self.summary.finish(&status);
        status
    }

    /// Run both phases. A fatal placement error is reported through `sink`
    /// and the guess source is never read.
    pub fn run<P, G, S, T, F>(&mut self, placements: P, guesses: G, mut sink: F) -> Status
    where
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
        G: IntoIterator<Item = T>,
        T: AsRef<str>,
        F: FnMut(&Event),
    {
        match self.run_placements(placements) {
            Status::Fatal(err) => {
                sink(&Event::Fatal(err.clone()));
                Status::Fatal(err)
            }
            _ => self.run_guesses(guesses, sink),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec;

    const FLEET: [&str; 5] = [
        "A 0 0 0 4",
        "B 2 0 5 0",
        "S 2 2 2 4",
        "D 7 7 9 7",
        "P 9 0 9 1",
    ];

    #[test]
    fn summary_counts_each_result_kind() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.run_placements(FLEET), Status::Continue);
        let status = engine.run_guesses(["9 0", "9 0", "5 5", "5 5", "9 1", "12 0"], |_| {});
        assert_eq!(status, Status::InputExhausted);
        let summary = engine.summary();
        assert_eq!(summary.guesses, 6);
        assert_eq!(summary.hits, 2);
        assert_eq!(summary.misses, 1);
        assert_eq!(summary.repeats, 2);
        assert_eq!(summary.illegal, 1);
        assert_eq!(summary.sunk, vec![ShipKind::Patrol]);
        assert_eq!(summary.outcome, Outcome::InputExhausted);
    }

    #[test]
    fn fatal_event_is_prefixed() {
        let mut engine = GameEngine::new();
        let mut out: Vec<String> = Vec::new();
        let status = engine.run(["P 0 0 5 0"], ["0 0"], |e| out.push(e.to_string()));
        assert!(matches!(status, Status::Fatal(_)));
        assert_eq!(out, vec!["ERROR: incorrect ship size: P 0 0 5 0"]);
        assert_eq!(engine.summary().outcome, Outcome::Fatal);
        assert_eq!(engine.summary().guesses, 0);
    }
}
