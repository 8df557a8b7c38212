//! Context keys: the window of rounds that precedes an observation.

use std::fmt;

use smallvec::SmallVec;

use crate::core::Round;

/// A fixed-length window of consecutive rounds, oldest first.
///
/// The order of a context is its length. Order 0 is the empty context.
/// SmallVec keeps the default orders (0-2) off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Context(SmallVec<[Round; 2]>);

impl Context {
    /// The order-0 context.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Context built from consecutive rounds.
    #[must_use]
    pub fn from_rounds(rounds: &[Round]) -> Self {
        Self(SmallVec::from_slice(rounds))
    }

    /// Number of rounds in the window.
    #[must_use]
    pub fn order(&self) -> usize {
        self.0.len()
    }

    /// Rounds in the window, oldest first.
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.0
    }
}

impl From<Round> for Context {
    fn from(round: Round) -> Self {
        Self::from_rounds(&[round])
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, round) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", round.human.code(), round.engine.code())?;
        }
        f.write_str("]")
    }
}
