//! Round results and running scores.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Outcome, Round};

/// Who took a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    EngineWins,
    HumanWins,
    Draw,
}

impl RoundResult {
    /// Resolve a recorded round.
    #[must_use]
    pub fn of(round: &Round) -> Self {
        match round.engine.versus(round.human) {
            Outcome::Win => RoundResult::EngineWins,
            Outcome::Lose => RoundResult::HumanWins,
            Outcome::Draw => RoundResult::Draw,
        }
    }
}

/// Running tally for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds the engine won.
    pub engine: u32,
    /// Rounds the human won.
    pub human: u32,
    /// Drawn rounds.
    pub draws: u32,
}

impl Scoreboard {
    /// Create an empty scoreboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one round.
    pub fn record(&mut self, result: RoundResult) {
        match result {
            RoundResult::EngineWins => self.engine += 1,
            RoundResult::HumanWins => self.human += 1,
            RoundResult::Draw => self.draws += 1,
        }
    }

    /// Total rounds counted.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.engine + self.human + self.draws
    }

    /// Fraction of decided rounds the engine won.
    #[must_use]
    pub fn engine_win_rate(&self) -> f64 {
        let decided = self.engine + self.human;
        if decided == 0 {
            0.0
        } else {
            self.engine as f64 / decided as f64
        }
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scores: PC: {}, You: {}, Draws: {}",
            self.engine, self.human, self.draws
        )
    }
}
