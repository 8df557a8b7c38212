//! # evil-rps
//!
//! Rock-paper-scissors against an opponent that models you as a Markov chain
//! and throws whatever beats the move it expects next.
//!
//! ## Design Principles
//!
//! 1. **Commit before you look**: The engine picks its move before the human's
//!    move is read, and only learns from a round after it has been played.
//!
//! 2. **Explicit session ownership**: History, scores, model and RNG belong
//!    to one `GameEngine` value. Nothing is global.
//!
//! 3. **Storage never blocks play**: A missing or damaged record is a new
//!    player, not an error.
//!
//! ## Modules
//!
//! - `core`: Moves and the beats relation, rounds, history, RNG, configuration
//! - `predictor`: Multi-order frequency model of the human's moves
//! - `strategy`: Predictive, random and fixed opponents behind one trait
//! - `storage`: Per-player history records
//! - `engine`: Turn state machine, scoring, bot-vs-bot arena
//! - `terminal`: Interactive front end (feature `cli`)

pub mod core;
pub mod predictor;
pub mod strategy;
pub mod storage;
pub mod engine;
pub mod error;

#[cfg(feature = "cli")]
pub mod terminal;

// Re-export commonly used types
pub use crate::core::{GameRng, History, Move, Outcome, PredictorConfig, Round, SessionConfig};

pub use crate::predictor::{Context, FollowUps, FrequencyTable, PredictError, PredictorModel};

pub use crate::strategy::{Decision, FixedStrategy, PredictiveStrategy, RandomStrategy, Strategy};

pub use crate::storage::{sanitize, FileStore, HistoryStore, MemoryStore, PlayerKey};

pub use crate::engine::{
    Arena, EngineState, GameEngine, InputEvent, MoveSource, QuitReason, RoundReport, RoundResult,
    Scoreboard, ScriptedInput, SessionSummary, TurnOutcome,
};

pub use crate::error::{Error, Result};
