//! History persistence.
//!
//! Each player has one record holding every round they have played. The
//! record is read once at session start and rewritten in full once at the
//! end. Reading never fails: a missing or damaged record simply means a new
//! player.

mod codec;
mod store;

pub use codec::{decode, encode};
pub use store::{sanitize, FileStore, HistoryStore, MemoryStore, PlayerKey};
