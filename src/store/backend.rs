//! Storage backends for the game state store.
//!
//! The store never touches storage directly; it goes through the `Storage`
//! trait so the backend is substitutable: in-memory for tests, file-backed
//! for a durable session, or a host-provided adapter (e.g. browser local
//! storage behind a wasm shim).
//!
//! Read failures of any kind are reported as "absent"; the store recovers
//! by starting fresh rather than surfacing storage errors to gameplay.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

/// Key-value storage for serialized records.
pub trait Storage {
    /// Read the value stored under a key, or `None` if absent or unreadable.
    fn read(&self, key: &str) -> Option<String>;

    /// Write a value under a key, replacing any previous value.
    fn write(&mut self, key: &str, value: &str);

    /// Remove the value stored under a key, if any.
    fn remove(&mut self, key: &str);
}

/// Volatile in-memory storage.
///
/// The default backend for tests; state lives only as long as the value.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: FxHashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Durable file-backed storage: one file per key under a directory.
///
/// Mirrors the local-storage model the game is designed around: reads that
/// fail for any reason behave as a missing key, and writes are treated as
/// non-failing (a failed write is logged and the session continues on the
/// in-memory state it already has).
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a backend rooted at `dir`. The directory is created lazily on
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this backend stores files under.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path(key)).ok()
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(err) = fs::create_dir_all(&self.dir) {
            tracing::warn!(%err, dir = %self.dir.display(), "cannot create storage directory");
            return;
        }
        if let Err(err) = fs::write(self.path(key), value) {
            tracing::warn!(%err, key, "failed to persist record");
        }
    }

    fn remove(&mut self, key: &str) {
        // Missing file is the desired end state; only real failures are noted.
        if let Err(err) = fs::remove_file(self.path(key)) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(%err, key, "failed to remove record");
            }
        }
    }
}
