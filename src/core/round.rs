//! Rounds and the append-only session history.
//!
//! ## Round
//!
//! A recorded `(human, engine)` pair. Serialized as a two-element array of
//! move codes, e.g. `["R","S"]`.
//!
//! ## History
//!
//! Ordered rounds, oldest first. There is no removal API: within a session
//! the history only grows.

use serde::{Deserialize, Serialize};

use super::moves::Move;

/// One resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(Move, Move)", into = "(Move, Move)")]
pub struct Round {
    /// What the human threw.
    pub human: Move,
    /// What the engine threw.
    pub engine: Move,
}

impl Round {
    /// Create a new round.
    #[must_use]
    pub const fn new(human: Move, engine: Move) -> Self {
        Self { human, engine }
    }
}

impl From<(Move, Move)> for Round {
    fn from((human, engine): (Move, Move)) -> Self {
        Self { human, engine }
    }
}

impl From<Round> for (Move, Move) {
    fn from(round: Round) -> Self {
        (round.human, round.engine)
    }
}

/// Ordered sequence of rounds, oldest first.
///
/// ```
/// use evil_rps::core::{History, Move, Round};
///
/// let mut history = History::new();
/// history.push(Round::new(Move::Rock, Move::Paper));
/// history.push(Round::new(Move::Scissors, Move::Paper));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.recent(5).len(), 2);
/// assert_eq!(history.last(), Some(&Round::new(Move::Scissors, Move::Paper)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    rounds: Vec<Round>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a round.
    pub fn push(&mut self, round: Round) {
        self.rounds.push(round);
    }

    /// Number of rounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Check if no rounds have been played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Most recent round.
    #[must_use]
    pub fn last(&self) -> Option<&Round> {
        self.rounds.last()
    }

    /// The last `n` rounds (fewer if the history is shorter), oldest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> &[Round] {
        let start = self.rounds.len().saturating_sub(n);
        &self.rounds[start..]
    }

    /// All rounds, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[Round] {
        &self.rounds
    }

    /// Iterate over rounds, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Round> {
        self.rounds.iter()
    }
}

impl From<Vec<Round>> for History {
    fn from(rounds: Vec<Round>) -> Self {
        Self { rounds }
    }
}

impl FromIterator<Round> for History {
    fn from_iter<I: IntoIterator<Item = Round>>(iter: I) -> Self {
        Self {
            rounds: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Round;
    type IntoIter = std::slice::Iter<'a, Round>;

    fn into_iter(self) -> Self::IntoIter {
        self.rounds.iter()
    }
}
