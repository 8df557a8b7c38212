//! Adaptive move prediction.
//!
//! The model treats the human as a Markov chain over rounds. After every
//! round it records which human move followed each recent context (orders
//! `0..=max_order`). Predictions look up the single most recent round and
//! return the follow-up seen most often.
//!
//! ## Cold start
//!
//! With no history, or with a last round never seen before, `predict`
//! returns `PredictError::InsufficientContext`. Choosing a fallback move is
//! the caller's job (see `strategy::PredictiveStrategy`).

mod context;
mod model;
mod table;

pub use context::Context;
pub use model::{PredictError, PredictorModel};
pub use table::{FollowUps, FrequencyTable};
