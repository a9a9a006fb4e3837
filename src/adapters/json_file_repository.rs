//! JSON file implementation of the leaderboard repository.
//!
//! Stores the leaderboard as a flat JSON object in a single file. The file
//! name is `leaderboard.txt` for compatibility with existing leaderboards,
//! even though the contents are JSON.

use std::{fs, path::PathBuf};

use crate::{Result, error::Error, leaderboard::Leaderboard, ports::LeaderboardRepository};

/// Default storage location, relative to the working directory
pub const DEFAULT_LEADERBOARD_PATH: &str = "leaderboard.txt";

/// File-backed leaderboard repository using JSON.
///
/// Saves write to a temporary file in the same directory and rename it over
/// the target, so a crash mid-write cannot leave a half-written file behind.
/// Concurrent processes writing the same file are not guarded against.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_LEADERBOARD_PATH)
    }
}

impl LeaderboardRepository for JsonFileRepository {
    fn load(&self) -> Result<Leaderboard> {
        if !self.path.exists() {
            return Ok(Leaderboard::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| Error::Io {
            operation: format!("read leaderboard file {:?}", self.path),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|e| Error::CorruptData {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn save(&self, leaderboard: &Leaderboard) -> Result<()> {
        let contents = serde_json::to_string(leaderboard)?;

        let mut tmp_path = self.path.clone();
        tmp_path.set_extension("tmp");

        fs::write(&tmp_path, contents).map_err(|source| Error::Io {
            operation: format!("write leaderboard file {tmp_path:?}"),
            source,
        })?;

        fs::rename(&tmp_path, &self.path).map_err(|source| Error::Io {
            operation: format!("rename {:?} to {:?}", tmp_path, self.path),
            source,
        })?;

        Ok(())
    }
}
