//! Per-player history stores.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::{debug, info, warn};
use rustc_hash::FxHashMap;

use super::codec;
use crate::core::History;
use crate::error::{Error, Result};

/// Keep only ASCII letters, ASCII digits and spaces, in order.
///
/// ```
/// use evil_rps::storage::sanitize;
///
/// assert_eq!(sanitize("Bo!b 123"), "Bob 123");
/// assert_eq!(sanitize("../../etc/passwd"), "etcpasswd");
/// ```
#[must_use]
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}

/// Storage key derived from a player's display name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlayerKey(String);

impl PlayerKey {
    /// Trim and sanitize a raw display name.
    #[must_use]
    pub fn from_display_name(raw: &str) -> Self {
        Self(sanitize(raw.trim()))
    }

    /// The sanitized key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if nothing survived sanitizing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Durable storage for one history per player.
pub trait HistoryStore {
    /// Load a player's history.
    ///
    /// A missing, unreadable or malformed record is an empty history; this
    /// never fails.
    fn load(&self, key: &PlayerKey) -> History;

    /// Replace a player's record with `history`.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save(&self, key: &PlayerKey, history: &History) -> Result<()>;
}

// =============================================================================
// File store
// =============================================================================

/// One `<key>.txt` file per player in a directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// File name used when the key is empty.
    pub const ANONYMOUS: &'static str = "_anonymous";

    /// Store records under `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the record for `key`.
    #[must_use]
    pub fn record_path(&self, key: &PlayerKey) -> PathBuf {
        let stem = if key.is_empty() {
            Self::ANONYMOUS
        } else {
            key.as_str()
        };
        self.dir.join(format!("{stem}.txt"))
    }
}

impl HistoryStore for FileStore {
    fn load(&self, key: &PlayerKey) -> History {
        let path = self.record_path(key);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("no record at {}, starting fresh", path.display());
                return History::new();
            }
            Err(err) => {
                warn!("could not read {}: {err}", path.display());
                return History::new();
            }
        };

        match codec::decode(&text) {
            Ok(history) => {
                info!("loaded {} rounds from {}", history.len(), path.display());
                history
            }
            Err(err) => {
                warn!("ignoring malformed record {}: {err}", path.display());
                History::new()
            }
        }
    }

    fn save(&self, key: &PlayerKey, history: &History) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| Error::Io {
            operation: format!("create directory {}", self.dir.display()),
            source,
        })?;

        let path = self.record_path(key);
        let tmp = path.with_extension("txt.tmp");
        let text = codec::encode(history)?;

        fs::write(&tmp, text).map_err(|source| Error::Io {
            operation: format!("write {}", tmp.display()),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| Error::Io {
            operation: format!("replace {}", path.display()),
            source,
        })?;

        info!("saved {} rounds to {}", history.len(), path.display());
        Ok(())
    }
}

// =============================================================================
// Memory store
// =============================================================================

/// In-process store holding encoded records.
///
/// Records go through the same codec as `FileStore`, so tests exercise the
/// real format. Also counts saves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<FxHashMap<String, String>>,
    saves: Cell<usize>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put raw record text under a key, bypassing the encoder.
    pub fn insert_raw(&self, key: &PlayerKey, text: impl Into<String>) {
        self.records
            .borrow_mut()
            .insert(key.as_str().to_string(), text.into());
    }

    /// Raw record text for a key.
    #[must_use]
    pub fn raw(&self, key: &PlayerKey) -> Option<String> {
        self.records.borrow().get(key.as_str()).cloned()
    }

    /// Number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self, key: &PlayerKey) -> History {
        let Some(text) = self.raw(key) else {
            return History::new();
        };
        codec::decode(&text).unwrap_or_else(|err| {
            warn!("ignoring malformed record for '{key}': {err}");
            History::new()
        })
    }

    fn save(&self, key: &PlayerKey, history: &History) -> Result<()> {
        let text = codec::encode(history)?;
        debug!("storing {} rounds for '{key}'", history.len());
        self.records
            .borrow_mut()
            .insert(key.as_str().to_string(), text);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
