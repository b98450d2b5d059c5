//! Detection store
//!
//! All persisted state lives in one JSON document `{live, logs}`. The
//! storage medium sits behind the [`StateBackend`] trait so the file
//! layout can be swapped without touching validation or billing. Every
//! access goes through a single mutex, so concurrent ingestions
//! serialize and a load-modify-save cycle can never lose an update.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::models::{DetectionRecord, StoreState};

/// Maximum number of history entries kept; older ones are dropped.
pub const HISTORY_CAP: usize = 1000;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Storage interface: one whole-document load, one whole-document save.
pub trait StateBackend: Send {
    fn load(&self) -> Result<StoreState, StoreError>;
    fn save(&self, state: &StoreState) -> Result<(), StoreError>;
}

/// JSON-document-on-disk backend.
///
/// A missing or corrupt document loads as the empty default state; a
/// request is never failed because prior state was unreadable. Saves go
/// through a temp file plus rename so readers see either the old or the
/// new complete document.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateBackend for JsonFileBackend {
    fn load(&self) -> Result<StoreState, StoreError> {
        if !self.path.exists() {
            return Ok(StoreState::default());
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Storage document unreadable, using empty state: {}", e);
                return Ok(StoreState::default());
            }
        };

        match serde_json::from_str(&content) {
            Ok(state) => Ok(state),
            Err(e) => {
                tracing::warn!("Storage document corrupt, using empty state: {}", e);
                Ok(StoreState::default())
            }
        }
    }

    fn save(&self, state: &StoreState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(state)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}

/// In-memory backend for tests.
///
/// Needs its own lock: the trait takes `&self`, and the mutex in
/// [`Store`] guards the backend box, not the state inside it.
#[derive(Default)]
pub struct MemoryBackend {
    state: Mutex<StoreState>,
}

impl StateBackend for MemoryBackend {
    fn load(&self) -> Result<StoreState, StoreError> {
        Ok(self.state.lock().clone())
    }

    fn save(&self, state: &StoreState) -> Result<(), StoreError> {
        *self.state.lock() = state.clone();
        Ok(())
    }
}

/// Single-writer store over a [`StateBackend`].
pub struct Store {
    backend: Mutex<Box<dyn StateBackend>>,
}

impl Store {
    pub fn new(backend: impl StateBackend + 'static) -> Self {
        Self {
            backend: Mutex::new(Box::new(backend)),
        }
    }

    /// Ensure the storage document exists, creating the empty default
    /// if it does not.
    pub fn bootstrap(&self) -> Result<(), StoreError> {
        let backend = self.backend.lock();
        let state = backend.load()?;
        backend.save(&state)
    }

    /// Append a validated record: it becomes the new `live` value and
    /// the newest history entry, with the history truncated to
    /// [`HISTORY_CAP`]. Load, modify and save happen under one lock.
    pub fn append(&self, record: DetectionRecord) -> Result<(), StoreError> {
        let backend = self.backend.lock();
        let mut state = backend.load()?;

        state.live = Some(record.clone());
        state.logs.insert(0, record);
        state.logs.truncate(HISTORY_CAP);

        backend.save(&state)
    }

    /// Most recently ingested record, or `None` before the first ingest.
    pub fn live(&self) -> Result<Option<DetectionRecord>, StoreError> {
        Ok(self.backend.lock().load()?.live)
    }

    /// Full bounded history, newest first. Empty before the first ingest.
    pub fn logs(&self) -> Result<Vec<DetectionRecord>, StoreError> {
        Ok(self.backend.lock().load()?.logs)
    }
}
