//! In-memory leaderboard repository for testing.
//!
//! Stores the serialized leaderboard in memory, so tests exercise the same
//! serialization path as the file adapter without touching the filesystem.

use std::sync::{Arc, Mutex};

use crate::{Result, error::Error, leaderboard::Leaderboard, ports::LeaderboardRepository};

/// In-memory repository for testing.
///
/// Clones share the same underlying storage, so a store and the test
/// asserting on it can hold separate handles.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<Option<String>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether anything has been saved yet.
    pub fn is_saved(&self) -> bool {
        self.storage.lock().unwrap().is_some()
    }

    /// Reset to the unsaved state.
    pub fn clear(&self) {
        *self.storage.lock().unwrap() = None;
    }

    /// Replace the stored contents with raw text, for corrupt-data tests.
    pub fn inject_raw(&self, contents: &str) {
        *self.storage.lock().unwrap() = Some(contents.to_string());
    }
}

impl LeaderboardRepository for InMemoryRepository {
    fn load(&self) -> Result<Leaderboard> {
        let storage = self.storage.lock().unwrap();
        match storage.as_deref() {
            None => Ok(Leaderboard::new()),
            Some(contents) => serde_json::from_str(contents).map_err(|e| Error::CorruptData {
                path: "<memory>".to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn save(&self, leaderboard: &Leaderboard) -> Result<()> {
        let contents = serde_json::to_string(leaderboard)?;
        *self.storage.lock().unwrap() = Some(contents);
        Ok(())
    }
}
