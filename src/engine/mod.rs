//! Game engine: the turn state machine and what it talks to.
//!
//! - `GameEngine`: Owns one session (history, scores, strategy, RNG) and
//!   runs it turn by turn until the player quits
//! - `MoveSource`: Where human moves come from (terminal, script)
//! - `Scoreboard` / `RoundResult`: Round resolution and bookkeeping
//! - `Arena`: Two strategies playing each other without a human
//!
//! ## Example
//!
//! ```
//! use evil_rps::core::{GameRng, Move, PredictorConfig};
//! use evil_rps::engine::{GameEngine, ScriptedInput};
//! use evil_rps::storage::{HistoryStore, MemoryStore, PlayerKey};
//!
//! let store = MemoryStore::new();
//! let player = PlayerKey::from_display_name("Ada");
//! let mut engine = GameEngine::resume(
//!     player.clone(),
//!     &store,
//!     PredictorConfig::default(),
//!     GameRng::new(7),
//! );
//!
//! let mut input = ScriptedInput::new([Move::Rock, Move::Rock, Move::Paper]);
//! let summary = engine.run(&mut input, &store, |report| println!("{report}")).unwrap();
//!
//! assert_eq!(summary.rounds_played, 3);
//! assert_eq!(store.load(&player).len(), 3);
//! ```

mod arena;
mod game;
mod input;
mod score;

pub use arena::Arena;
pub use game::{EngineState, GameEngine, RoundReport, SessionSummary, TurnOutcome};
pub use input::{parse_command, InputEvent, MoveSource, QuitReason, ScriptedInput};
pub use score::{RoundResult, Scoreboard};
