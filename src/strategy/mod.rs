//! Opponent strategies.
//!
//! A strategy answers one question: "given the rounds so far, what do I throw
//! next?". Strategies are trait-based so the engine can be driven by the
//! predictive opponent in play and by deterministic stand-ins in tests:
//! - `PredictiveStrategy`: Counters the move the Markov model expects
//! - `RandomStrategy`: Uniform random every round
//! - `FixedStrategy`: Always the same move

use log::debug;

use crate::core::{GameRng, History, Move, PredictorConfig};
use crate::predictor::{PredictError, PredictorModel};

// =============================================================================
// Decision
// =============================================================================

/// A chosen move and how it was arrived at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The model predicted the opponent's move; play what beats it.
    Counter { predicted: Move, play: Move },
    /// No usable prediction; uniform random move.
    Fallback(Move),
    /// A move chosen without looking at the history.
    Fixed(Move),
}

impl Decision {
    /// The move actually thrown.
    #[must_use]
    pub fn play(&self) -> Move {
        match *self {
            Decision::Counter { play, .. } => play,
            Decision::Fallback(play) | Decision::Fixed(play) => play,
        }
    }

    /// The predicted opponent move, if any.
    #[must_use]
    pub fn predicted(&self) -> Option<Move> {
        match *self {
            Decision::Counter { predicted, .. } => Some(predicted),
            _ => None,
        }
    }
}

// =============================================================================
// Strategy
// =============================================================================

/// Produces the next move from the history of rounds.
///
/// `history` is always from the engine's point of view: `human` is the
/// opponent being modeled, `engine` is the strategy's own side.
pub trait Strategy {
    /// Short name for logs and scoreboards.
    fn name(&self) -> &str;

    /// Choose the next move. Called before the opponent's move is known.
    fn decide(&mut self, history: &History, rng: &mut GameRng) -> Decision;

    /// Learn from the history after a round was appended.
    fn observe(&mut self, _history: &History) {}
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn decide(&mut self, history: &History, rng: &mut GameRng) -> Decision {
        (**self).decide(history, rng)
    }

    fn observe(&mut self, history: &History) {
        (**self).observe(history)
    }
}

// =============================================================================
// Predictive
// =============================================================================

/// Counter-predicts the opponent with a `PredictorModel`.
#[derive(Clone, Debug, Default)]
pub struct PredictiveStrategy {
    model: PredictorModel,
}

impl PredictiveStrategy {
    /// Create a strategy with an empty model.
    #[must_use]
    pub fn new(config: PredictorConfig) -> Self {
        Self {
            model: PredictorModel::new(config),
        }
    }

    /// Create a strategy whose model has already learned from `history`.
    #[must_use]
    pub fn with_history(config: PredictorConfig, history: &History) -> Self {
        let mut strategy = Self::new(config);
        strategy.model.replay(history);
        strategy
    }

    /// The underlying model.
    #[must_use]
    pub fn model(&self) -> &PredictorModel {
        &self.model
    }
}

impl Strategy for PredictiveStrategy {
    fn name(&self) -> &str {
        "PC"
    }

    fn decide(&mut self, history: &History, rng: &mut GameRng) -> Decision {
        match self.model.predict(history.as_slice()) {
            Ok(predicted) => {
                let play = predicted.beaten_by();
                debug!("predicted {predicted}, countering with {play}");
                Decision::Counter { predicted, play }
            }
            Err(PredictError::InsufficientContext) => {
                let play = rng.choose_move();
                debug!("no prediction available, falling back to {play}");
                Decision::Fallback(play)
            }
        }
    }

    fn observe(&mut self, history: &History) {
        let window = self.model.config().window;
        self.model.feed(history.recent(window));
    }
}

// =============================================================================
// Random
// =============================================================================

/// Uniform random opponent.
#[derive(Clone, Debug, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "Rando"
    }

    fn decide(&mut self, _history: &History, rng: &mut GameRng) -> Decision {
        Decision::Fallback(rng.choose_move())
    }
}

// =============================================================================
// Fixed
// =============================================================================

/// Plays the same move every round.
#[derive(Clone, Debug)]
pub struct FixedStrategy {
    play: Move,
}

impl FixedStrategy {
    /// Always play `play`.
    #[must_use]
    pub fn new(play: Move) -> Self {
        Self { play }
    }

    /// Pick the move once at random, then stick with it.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Self {
        Self::new(rng.choose_move())
    }
}

impl Strategy for FixedStrategy {
    fn name(&self) -> &str {
        "Lazy"
    }

    fn decide(&mut self, _history: &History, _rng: &mut GameRng) -> Decision {
        Decision::Fixed(self.play)
    }
}
