//! # Persistence
//!
//! A small key-value store that mirrors the navigator's state. Storage is
//! never the source of truth: the in-memory `NavigationState` is, and every
//! write here is best-effort.
//!
//! ```text
//! "navigation" → {"current": "general_error", "history": ["general_intro"]}
//! "language"   → "java"
//! ```
//!
//! `FileStore` keeps all keys in one JSON file. Writes use atomic rename
//! (write `.tmp`, then `rename()`) so a crash never leaves a half-written file.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::state::SavedNavigation;

pub const NAVIGATION_KEY: &str = "navigation";
pub const LANGUAGE_KEY: &str = "language";

// ============================================================================
// Store Trait
// ============================================================================

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    /// The backing file exists but is not a store we can read.
    Corrupt(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "storage I/O error: {e}"),
            StoreError::Corrupt(e) => write!(f, "storage file is corrupt: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

// ============================================================================
// In-Memory Store
// ============================================================================

/// Store that lives only as long as the process. Used when no data
/// directory is available, and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

// ============================================================================
// File Store
// ============================================================================

#[derive(Serialize, Deserialize, Default, Debug)]
struct StoreFile {
    updated_at: Option<DateTime<Utc>>,
    entries: IndexMap<String, String>,
}

/// Store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<StoreFile, StoreError> {
        if !self.path.exists() {
            return Ok(StoreFile::default());
        }
        let json = fs::read_to_string(&self.path).map_err(StoreError::Io)?;
        serde_json::from_str(&json).map_err(StoreError::Corrupt)
    }

    /// Read for modification. A corrupt file is replaced rather than
    /// blocking every later write.
    fn read_for_update(&self) -> Result<StoreFile, StoreError> {
        match self.read() {
            Err(StoreError::Corrupt(e)) => {
                warn!("Replacing corrupt store {}: {}", self.path.display(), e);
                Ok(StoreFile::default())
            }
            other => other,
        }
    }

    fn write(&self, mut file: StoreFile) -> Result<(), StoreError> {
        file.updated_at = Some(Utc::now());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(StoreError::Io)?;
        }
        atomic_write_json(&self.path, &file).map_err(StoreError::Io)
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read()?.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut file = self.read_for_update()?;
        file.entries.insert(key.to_string(), value.to_string());
        self.write(file)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut file = self.read_for_update()?;
        if file.entries.shift_remove(key).is_none() {
            return Ok(());
        }
        self.write(file)
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

// ============================================================================
// Best-Effort Helpers
// ============================================================================
//
// The navigator only talks to storage through these. Failures are logged
// and dropped; the in-memory transition has already happened.

pub fn save_navigation(store: &mut dyn Store, saved: &SavedNavigation) {
    let json = match serde_json::to_string(saved) {
        Ok(json) => json,
        Err(e) => {
            warn!("Failed to serialize navigation: {}", e);
            return;
        }
    };
    match store.set(NAVIGATION_KEY, &json) {
        Ok(()) => debug!("Navigation saved: {}", json),
        Err(e) => warn!("Failed to save navigation: {}", e),
    }
}

pub fn clear_navigation(store: &mut dyn Store) {
    if let Err(e) = store.remove(NAVIGATION_KEY) {
        warn!("Failed to clear navigation: {}", e);
    }
}

pub fn save_language(store: &mut dyn Store, language: &str) {
    if let Err(e) = store.set(LANGUAGE_KEY, language) {
        warn!("Failed to save language: {}", e);
    }
}

pub fn load_language(store: &dyn Store) -> Option<String> {
    match store.get(LANGUAGE_KEY) {
        Ok(language) => language,
        Err(e) => {
            warn!("Failed to load language: {}", e);
            None
        }
    }
}
