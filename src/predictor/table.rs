//! Frequency tables: context -> counts of the human move that followed.

use rustc_hash::FxHashMap;

use super::context::Context;
use crate::core::Move;

/// Observed follow-up moves for a single context.
///
/// Each move carries a count and the tick of its most recent reinforcement,
/// so equal counts can be broken in favor of the freshest observation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FollowUps {
    counts: [u32; 3],
    last_reinforced: [u64; 3],
}

impl FollowUps {
    /// Record one more occurrence of `next` at time `tick`.
    pub fn reinforce(&mut self, next: Move, tick: u64) {
        let i = next.index();
        self.counts[i] += 1;
        self.last_reinforced[i] = tick;
    }

    /// How often `next` followed this context.
    #[must_use]
    pub fn count(&self, next: Move) -> u32 {
        self.counts[next.index()]
    }

    /// Total observations for this context.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// The most frequent follow-up; ties go to the most recently reinforced move.
    ///
    /// `None` when nothing has been observed.
    #[must_use]
    pub fn most_likely(&self) -> Option<Move> {
        Move::ALL
            .into_iter()
            .filter(|m| self.counts[m.index()] > 0)
            .max_by_key(|m| (self.counts[m.index()], self.last_reinforced[m.index()]))
    }
}

/// All contexts of one order and what followed them.
#[derive(Clone, Debug)]
pub struct FrequencyTable {
    order: usize,
    entries: FxHashMap<Context, FollowUps>,
}

impl FrequencyTable {
    /// Create an empty table for contexts of the given order.
    #[must_use]
    pub fn new(order: usize) -> Self {
        Self {
            order,
            entries: FxHashMap::default(),
        }
    }

    /// Context length this table holds.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Count one occurrence of `next` after `context`.
    pub fn increment(&mut self, context: Context, next: Move, tick: u64) {
        debug_assert_eq!(context.order(), self.order, "context order mismatch");
        self.entries.entry(context).or_default().reinforce(next, tick);
    }

    /// Follow-ups observed for a context.
    #[must_use]
    pub fn get(&self, context: &Context) -> Option<&FollowUps> {
        self.entries.get(context)
    }

    /// Number of distinct contexts observed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
