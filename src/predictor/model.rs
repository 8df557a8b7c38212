//! Bounded-order Markov model of the human's moves.

use log::debug;
use thiserror::Error;

use super::context::Context;
use super::table::{FollowUps, FrequencyTable};
use crate::core::{History, Move, PredictorConfig, Round};

/// Why a prediction could not be made.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictError {
    /// History is empty, or its last round has never been followed by anything.
    #[error("insufficient context to predict the next move")]
    InsufficientContext,
}

/// Multi-order frequency model over rounds.
///
/// Holds one `FrequencyTable` per order `0..=max_order`. `feed` updates all of
/// them; `predict` reads the order-1 table only.
///
/// ```
/// use evil_rps::core::{Move, PredictorConfig, Round};
/// use evil_rps::predictor::{PredictError, PredictorModel};
///
/// let mut model = PredictorModel::new(PredictorConfig::default());
/// let rs = Round::new(Move::Rock, Move::Scissors);
///
/// assert_eq!(model.predict(&[rs]), Err(PredictError::InsufficientContext));
///
/// model.feed(&[rs, Round::new(Move::Rock, Move::Paper)]);
/// assert_eq!(model.predict(&[rs]), Ok(Move::Rock));
/// ```
#[derive(Clone, Debug)]
pub struct PredictorModel {
    config: PredictorConfig,
    tables: Vec<FrequencyTable>,
    tick: u64,
}

impl PredictorModel {
    /// Create an empty model.
    #[must_use]
    pub fn new(config: PredictorConfig) -> Self {
        let tables = (0..=config.max_order).map(FrequencyTable::new).collect();
        Self {
            config,
            tables,
            tick: 0,
        }
    }

    /// Model parameters.
    #[must_use]
    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Learn from the most recent rounds, oldest first.
    ///
    /// Only the last `window` rounds are considered. The final round is the
    /// observation; every shorter run of rounds directly before it (down to
    /// the empty context) is credited with the human move it led to.
    pub fn feed(&mut self, window: &[Round]) {
        let start = window.len().saturating_sub(self.config.window);
        let window = &window[start..];
        let Some((observed, preceding)) = window.split_last() else {
            return;
        };

        self.tick += 1;
        let max_order = self.config.max_order.min(preceding.len());
        for order in 0..=max_order {
            let context = Context::from_rounds(&preceding[preceding.len() - order..]);
            debug!("feed order {order}: {context} -> {}", observed.human);
            self.tables[order].increment(context, observed.human, self.tick);
        }
    }

    /// Predict the human's next move from the most recent round.
    pub fn predict(&self, history: &[Round]) -> Result<Move, PredictError> {
        let last = history.last().ok_or(PredictError::InsufficientContext)?;
        self.follow_ups(&Context::from(*last))
            .and_then(FollowUps::most_likely)
            .ok_or(PredictError::InsufficientContext)
    }

    /// Replay a full history, as if every round had been fed when it was played.
    pub fn replay(&mut self, history: &History) {
        let rounds = history.as_slice();
        for end in 1..=rounds.len() {
            self.feed(&rounds[..end]);
        }
    }

    /// Observed follow-ups for a context of any order up to `max_order`.
    #[must_use]
    pub fn follow_ups(&self, context: &Context) -> Option<&FollowUps> {
        self.tables.get(context.order())?.get(context)
    }

    /// Table for one order.
    #[must_use]
    pub fn table(&self, order: usize) -> Option<&FrequencyTable> {
        self.tables.get(order)
    }

    /// Number of `feed` calls that recorded an observation.
    #[must_use]
    pub fn observations(&self) -> u64 {
        self.tick
    }
}

impl Default for PredictorModel {
    fn default() -> Self {
        Self::new(PredictorConfig::default())
    }
}
