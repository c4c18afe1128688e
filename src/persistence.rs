//! High score persistence
//!
//! The game only ever persists one number. It goes through the narrow
//! [`HighScoreStore`] interface so the engine does not care where it lives:
//! a JSON file on disk for normal play, or memory for tests and
//! `--no-persist` runs.

use serde_json::{Map, Value};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use tempfile::NamedTempFile;

use crate::error::StoreError;

/// Key used when none is given
pub const DEFAULT_KEY: &str = "snakeHighScore";

/// Storage for the process-wide high score
pub trait HighScoreStore: Send {
    /// Current stored value, 0 if nothing was stored yet
    fn read(&self) -> Result<u32, StoreError>;

    /// Replace the stored value
    fn write(&mut self, score: u32) -> Result<(), StoreError>;
}

/// JSON object on disk, with the score stored under a named key.
///
/// Other keys in the file are left untouched on write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    key: String,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_key(path, DEFAULT_KEY)
    }

    pub fn with_key(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_map(&self) -> Result<Map<String, Value>, StoreError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&json)?)
    }
}

impl HighScoreStore for JsonFileStore {
    fn read(&self) -> Result<u32, StoreError> {
        let map = self.load_map()?;
        let score = match map.get(&self.key) {
            None => 0,
            Some(value) => match parse_score(value) {
                Some(score) => score,
                None => {
                    log::warn!(
                        "Ignoring high score {} under {:?} in {:?}",
                        value,
                        self.key,
                        self.path
                    );
                    0
                }
            },
        };
        Ok(score)
    }

    fn write(&mut self, score: u32) -> Result<(), StoreError> {
        let mut map = match self.load_map() {
            Ok(map) => map,
            Err(StoreError::Format(e)) => {
                log::warn!("Replacing malformed high score file {:?}: {}", self.path, e);
                Map::new()
            }
            Err(e) => return Err(e),
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        map.insert(self.key.clone(), Value::from(score));
        let json = serde_json::to_string_pretty(&map)?;

        // Write beside the target and rename over it, so an interrupted
        // write never leaves a truncated file behind
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Accepts numbers and numeric strings, the form browser key-value stores keep
fn parse_score(value: &Value) -> Option<u32> {
    let score = match value {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    Some(u32::try_from(score).unwrap_or(u32::MAX))
}

/// In-memory store. Clones share the same value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    score: Arc<AtomicU32>,
}

impl MemoryStore {
    pub fn new(initial: u32) -> Self {
        Self {
            score: Arc::new(AtomicU32::new(initial)),
        }
    }

    pub fn value(&self) -> u32 {
        self.score.load(Ordering::Relaxed)
    }
}

impl HighScoreStore for MemoryStore {
    fn read(&self) -> Result<u32, StoreError> {
        Ok(self.value())
    }

    fn write(&mut self, score: u32) -> Result<(), StoreError> {
        self.score.store(score, Ordering::Relaxed);
        Ok(())
    }
}
