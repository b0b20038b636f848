//! Key-value persistence for the history log.

use super::History;
use crate::error::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage key the history log is saved under.
pub const HISTORY_KEY: &str = "calculator-history";

/// Minimal string key-value storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under the platform data directory, e.g. `~/.local/share/calcdeck`.
    pub fn default_location() -> Self {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calcdeck");
        Self::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-process store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load the history log from `store`.
///
/// An absent key yields an empty history. Read and parse failures are
/// logged and also yield an empty history.
pub fn load_history(store: &dyn KeyValueStore) -> History {
    let raw = match store.get(HISTORY_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return History::new(),
        Err(e) => {
            tracing::warn!("Failed to read calculator history: {}", e);
            return History::new();
        }
    };

    match serde_json::from_str::<History>(&raw) {
        Ok(history) => {
            let history = History::from_entries(history.entries().cloned());
            tracing::debug!(entries = history.len(), "Loaded calculator history");
            history
        }
        Err(e) => {
            tracing::warn!("Failed to parse stored calculator history: {}", e);
            History::new()
        }
    }
}

/// Persist the history log to `store`. Failures are logged, never returned.
pub fn save_history(store: &dyn KeyValueStore, history: &History) {
    let result = serde_json::to_string(history)
        .map_err(crate::error::Error::from)
        .and_then(|json| store.set(HISTORY_KEY, &json));

    match result {
        Ok(()) => tracing::debug!(entries = history.len(), "Saved calculator history"),
        Err(e) => tracing::warn!("Failed to save calculator history: {}", e),
    }
}
