//! Strategy-versus-strategy matches with no human involved.
//!
//! The challenger takes the human's seat. Each side sees the rounds from its
//! own point of view, so any `Strategy` can play either seat.

use log::debug;

use super::score::{RoundResult, Scoreboard};
use crate::core::{GameRng, History, Round};
use crate::strategy::Strategy;

/// A running match between two strategies.
pub struct Arena<C, E> {
    challenger: C,
    engine: E,
    /// Rounds as `(challenger, engine)`.
    engine_view: History,
    /// The same rounds mirrored as `(engine, challenger)`.
    challenger_view: History,
    scores: Scoreboard,
    challenger_rng: GameRng,
    engine_rng: GameRng,
}

impl<C: Strategy, E: Strategy> Arena<C, E> {
    /// Set up a match. Each side gets its own fork of `rng`.
    pub fn new(challenger: C, engine: E, rng: &mut GameRng) -> Self {
        Self {
            challenger,
            engine,
            engine_view: History::new(),
            challenger_view: History::new(),
            scores: Scoreboard::new(),
            challenger_rng: rng.fork(),
            engine_rng: rng.fork(),
        }
    }

    /// Play one round; both sides commit before either move is revealed.
    pub fn play_round(&mut self) -> (Round, RoundResult) {
        let challenger_move = self
            .challenger
            .decide(&self.challenger_view, &mut self.challenger_rng)
            .play();
        let engine_move = self
            .engine
            .decide(&self.engine_view, &mut self.engine_rng)
            .play();

        let round = Round::new(challenger_move, engine_move);
        let result = RoundResult::of(&round);
        self.scores.record(result);

        self.engine_view.push(round);
        self.challenger_view.push(Round::new(engine_move, challenger_move));
        self.engine.observe(&self.engine_view);
        self.challenger.observe(&self.challenger_view);

        debug!(
            "{} {} vs {} {} -> {result:?}",
            self.challenger.name(),
            challenger_move,
            self.engine.name(),
            engine_move
        );
        (round, result)
    }

    /// Play `rounds` rounds and return the scores so far.
    pub fn play(&mut self, rounds: usize) -> Scoreboard {
        for _ in 0..rounds {
            self.play_round();
        }
        self.scores
    }

    /// Rounds as `(challenger, engine)`.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.engine_view
    }

    /// The challenger strategy.
    #[must_use]
    pub fn challenger(&self) -> &C {
        &self.challenger
    }

    /// The engine-side strategy.
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Move;
    use crate::strategy::{FixedStrategy, PredictiveStrategy, RandomStrategy};

    #[test]
    fn test_fixed_vs_fixed() {
        let mut rng = GameRng::new(5);
        let mut arena = Arena::new(
            FixedStrategy::new(Move::Rock),
            FixedStrategy::new(Move::Paper),
            &mut rng,
        );

        let scores = arena.play(10);
        assert_eq!(scores.engine, 10);
        assert_eq!(scores.human, 0);
        assert_eq!(arena.history().len(), 10);
    }

    #[test]
    fn test_predictive_beats_lazy() {
        let mut rng = GameRng::new(11);
        let mut arena = Arena::new(
            FixedStrategy::new(Move::Scissors),
            PredictiveStrategy::default(),
            &mut rng,
        );

        let scores = arena.play(50);
        // Once (Scissors, Rock) has been seen as a context the engine never loses again.
        assert!(scores.engine >= 40, "{scores:?}");
        assert_eq!(arena.challenger().name(), "Lazy");
    }

    #[test]
    fn test_totals_match_rounds() {
        let mut rng = GameRng::new(3);
        let mut arena = Arena::new(RandomStrategy, PredictiveStrategy::default(), &mut rng);

        let scores = arena.play(200);
        assert_eq!(scores.rounds(), 200);
        assert_eq!(arena.history().len(), 200);
    }
}
