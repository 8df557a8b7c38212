//! The three canonical moves and the cyclic "beats" relation.
//!
//! ## Relation
//!
//! Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
//! `beaten_by` is the inverse: it answers "what do I throw to win against X".
//!
//! ```
//! use evil_rps::core::{Move, Outcome};
//!
//! assert_eq!(Move::Rock.beats(), Move::Scissors);
//! assert_eq!(Move::Rock.beaten_by(), Move::Paper);
//! assert_eq!(Move::Paper.versus(Move::Rock), Outcome::Win);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the three canonical moves.
///
/// Serialized as its single-character code (`"R"`, `"P"`, `"S"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Move {
    #[serde(rename = "R")]
    Rock,
    #[serde(rename = "P")]
    Paper,
    #[serde(rename = "S")]
    Scissors,
}

impl Move {
    /// Every move, in a fixed order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one defeats.
    #[must_use]
    pub const fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Scissors => Move::Paper,
            Move::Paper => Move::Rock,
        }
    }

    /// The move that defeats this one.
    #[must_use]
    pub const fn beaten_by(self) -> Move {
        match self {
            Move::Scissors => Move::Rock,
            Move::Paper => Move::Scissors,
            Move::Rock => Move::Paper,
        }
    }

    /// Resolve `self` against `other` from `self`'s point of view.
    ///
    /// # Panics
    ///
    /// Panics if the pair is neither a draw nor decided by `beats`, which
    /// would mean the relation itself is broken.
    #[must_use]
    pub fn versus(self, other: Move) -> Outcome {
        if self == other {
            Outcome::Draw
        } else if self.beats() == other {
            Outcome::Win
        } else if other.beats() == self {
            Outcome::Lose
        } else {
            unreachable!("beats relation is not total for {self:?} vs {other:?}")
        }
    }

    /// Single-character code used in prompts and persisted records.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Move::Rock => 'R',
            Move::Paper => 'P',
            Move::Scissors => 'S',
        }
    }

    /// Parse a single-character code, ignoring case.
    #[must_use]
    pub fn from_code(code: char) -> Option<Move> {
        match code.to_ascii_uppercase() {
            'R' => Some(Move::Rock),
            'P' => Some(Move::Paper),
            'S' => Some(Move::Scissors),
            _ => None,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }

    /// Position in [`Move::ALL`]; used to index per-move counters.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = Error;

    /// Accepts a single move code (`r`, `P`, ...) surrounded by optional whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Move::from_code(c).ok_or_else(|| Error::InvalidMove {
                input: trimmed.to_string(),
            }),
            _ => Err(Error::InvalidMove {
                input: trimmed.to_string(),
            }),
        }
    }
}

/// Result of one move against another, from the first move's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}
