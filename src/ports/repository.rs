//! Repository port for leaderboard persistence.
//!
//! This module defines the trait boundary between the leaderboard domain
//! logic and the storage layer, so tests can run against an in-memory
//! backend while the game uses the filesystem.

use crate::{Result, leaderboard::Leaderboard};

/// Port for persisting and loading the leaderboard.
pub trait LeaderboardRepository {
    /// Load the leaderboard from storage.
    ///
    /// A storage location that does not exist yet is an empty leaderboard,
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns `CorruptData` if the stored contents cannot be parsed, or an
    /// I/O error if the location exists but cannot be read.
    fn load(&self) -> Result<Leaderboard>;

    /// Write the full leaderboard to storage, replacing previous contents.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the location cannot be
    /// written.
    fn save(&self, leaderboard: &Leaderboard) -> Result<()>;
}
