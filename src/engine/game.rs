//! The turn loop.
//!
//! ## States
//!
//! ```text
//! AwaitingRound --human move--> RoundResolved --next turn--> AwaitingRound
//!       |
//!       +--quit / interrupt--> Terminated
//! ```
//!
//! `Terminated` is final: the history is saved once and no more turns are
//! accepted.

use std::fmt;

use log::{debug, info};

use super::input::{InputEvent, MoveSource, QuitReason};
use super::score::{RoundResult, Scoreboard};
use crate::core::{GameRng, History, PredictorConfig, Round};
use crate::error::{Error, Result};
use crate::storage::{HistoryStore, PlayerKey};
use crate::strategy::{Decision, PredictiveStrategy, Strategy};

/// Where the engine is in the turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Ready for (or inside) a turn.
    AwaitingRound,
    /// The last turn produced a round.
    RoundResolved,
    /// Session is over.
    Terminated,
}

/// Everything the output side needs to describe a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// 1-based round number within this session.
    pub number: usize,
    pub round: Round,
    pub result: RoundResult,
    /// How the engine picked its move.
    pub decision: Decision,
    /// Scores after this round.
    pub scores: Scoreboard,
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You threw {}, the computer threw {}. ",
            self.round.human, self.round.engine
        )?;
        match self.result {
            RoundResult::EngineWins => f.write_str("The computer wins!"),
            RoundResult::HumanWins => f.write_str("You win!"),
            RoundResult::Draw => f.write_str("Draw!"),
        }
    }
}

/// Result of a single call to `GameEngine::play_turn`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Resolved(RoundReport),
    Quit(QuitReason),
}

/// Final state of a finished session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub player: PlayerKey,
    pub scores: Scoreboard,
    /// Rounds played in this session.
    pub rounds_played: usize,
    /// Rounds in the saved history, including earlier sessions.
    pub total_rounds: usize,
    pub reason: QuitReason,
}

/// One player's session against a strategy.
///
/// Owns all mutable session state: history, scores, the strategy (and with
/// it the predictor model) and the RNG.
pub struct GameEngine<S = PredictiveStrategy> {
    player: PlayerKey,
    history: History,
    loaded_rounds: usize,
    scores: Scoreboard,
    strategy: S,
    rng: GameRng,
    state: EngineState,
    quit: Option<QuitReason>,
    saved: bool,
}

impl GameEngine<PredictiveStrategy> {
    /// Load the player's history and build a predictive opponent that has
    /// already learned from it.
    pub fn resume(
        player: PlayerKey,
        store: &dyn HistoryStore,
        config: PredictorConfig,
        rng: GameRng,
    ) -> Self {
        let history = store.load(&player);
        let strategy = PredictiveStrategy::with_history(config, &history);
        Self::new(player, history, strategy, rng)
    }
}

impl<S: Strategy> GameEngine<S> {
    /// Start a session from an existing history.
    pub fn new(player: PlayerKey, history: History, strategy: S, rng: GameRng) -> Self {
        info!(
            "session for '{player}' against {} with {} prior rounds",
            strategy.name(),
            history.len()
        );
        Self {
            player,
            loaded_rounds: history.len(),
            history,
            scores: Scoreboard::new(),
            strategy,
            rng,
            state: EngineState::AwaitingRound,
            quit: None,
            saved: false,
        }
    }

    /// The player's storage key.
    #[must_use]
    pub fn player(&self) -> &PlayerKey {
        &self.player
    }

    /// All rounds, including those loaded at start.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Scores for this session.
    #[must_use]
    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The opponent strategy.
    #[must_use]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Check if the session started with a stored history.
    #[must_use]
    pub fn is_returning(&self) -> bool {
        self.loaded_rounds > 0
    }

    /// Rounds played since the session started.
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.history.len() - self.loaded_rounds
    }

    /// Play one turn.
    ///
    /// The engine commits to its move before asking for the human's. A quit
    /// from `input` moves the engine to `Terminated`; call `terminate` to save.
    ///
    /// # Errors
    ///
    /// `Error::SessionTerminated` if the session has already ended.
    pub fn play_turn(&mut self, input: &mut dyn MoveSource) -> Result<TurnOutcome> {
        if self.state == EngineState::Terminated {
            return Err(Error::SessionTerminated);
        }
        self.state = EngineState::AwaitingRound;

        let decision = self.strategy.decide(&self.history, &mut self.rng);

        let human = match input.next_move() {
            InputEvent::Move(human) => human,
            InputEvent::Quit(reason) => {
                info!("'{}' left ({reason:?})", self.player);
                self.state = EngineState::Terminated;
                self.quit = Some(reason);
                return Ok(TurnOutcome::Quit(reason));
            }
        };

        let round = Round::new(human, decision.play());
        let result = RoundResult::of(&round);
        self.scores.record(result);
        self.history.push(round);
        self.strategy.observe(&self.history);
        self.state = EngineState::RoundResolved;

        debug!("round {}: {round:?} -> {result:?}", self.rounds_played());
        Ok(TurnOutcome::Resolved(RoundReport {
            number: self.rounds_played(),
            round,
            result,
            decision,
            scores: self.scores,
        }))
    }

    /// End the session and save the full history.
    ///
    /// Saves exactly once; later calls fail with `Error::SessionTerminated`.
    ///
    /// # Errors
    ///
    /// Propagates the store's error if the save fails.
    pub fn terminate(&mut self, store: &dyn HistoryStore) -> Result<SessionSummary> {
        if self.saved {
            return Err(Error::SessionTerminated);
        }
        self.state = EngineState::Terminated;

        store.save(&self.player, &self.history)?;
        self.saved = true;

        Ok(SessionSummary {
            player: self.player.clone(),
            scores: self.scores,
            rounds_played: self.rounds_played(),
            total_rounds: self.history.len(),
            reason: self.quit.unwrap_or(QuitReason::Requested),
        })
    }

    /// Play turns until the input quits, then save.
    ///
    /// `on_round` sees every resolved round.
    pub fn run(
        &mut self,
        input: &mut dyn MoveSource,
        store: &dyn HistoryStore,
        mut on_round: impl FnMut(&RoundReport),
    ) -> Result<SessionSummary> {
        while let TurnOutcome::Resolved(report) = self.play_turn(input)? {
            on_round(&report);
        }
        self.terminate(store)
    }
}
