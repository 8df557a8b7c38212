//! Core types: moves, rounds, history, RNG, configuration.
//!
//! Everything here is plain data plus pure functions; the stateful parts of
//! the game live in `predictor`, `strategy` and `engine`.

pub mod moves;
pub mod round;
pub mod rng;
pub mod config;

pub use moves::{Move, Outcome};
pub use round::{History, Round};
pub use rng::GameRng;
pub use config::{PredictorConfig, SessionConfig};
