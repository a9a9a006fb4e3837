//! Leaderboard model and persistence service
//!
//! The leaderboard is a name-to-score mapping persisted as a flat JSON
//! object, e.g. `{"Alice": 1, "Bob": 1}`. Names are unique and a repeated
//! save overwrites the previous score. Entries keep insertion order so the
//! display stays stable across load/save cycles.

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

use crate::ports::LeaderboardRepository;

/// Name-to-score mapping with insertion order preserved
///
/// Backed by a `Vec` rather than a hash map: nine entries would be a busy
/// leaderboard, and the linear scan keeps display order equal to insertion
/// order without extra bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<(String, i64)>,
}

impl Leaderboard {
    /// Create an empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a score by name
    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, score)| score)
    }

    /// Insert or overwrite a score, keeping the entry's original position
    /// when the name already exists
    pub fn set(&mut self, name: &str, score: i64) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = score,
            None => self.entries.push((name.to_string(), score)),
        }
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(name, score)| (name.as_str(), *score))
    }
}

impl fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, score) in self.iter() {
            writeln!(f, "{name}\t{score}")?;
        }
        Ok(())
    }
}

impl Serialize for Leaderboard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, score) in &self.entries {
            map.serialize_entry(name, score)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Leaderboard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LeaderboardVisitor;

        impl<'de> Visitor<'de> for LeaderboardVisitor {
            type Value = Leaderboard;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of player names to integer scores")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut leaderboard = Leaderboard::new();
                while let Some((name, score)) = access.next_entry::<String, i64>()? {
                    // Last write wins for duplicate keys in the file.
                    leaderboard.set(&name, score);
                }
                Ok(leaderboard)
            }
        }

        deserializer.deserialize_map(LeaderboardVisitor)
    }
}

/// Persistence service over a storage backend
///
/// Every mutation goes straight through to storage; no leaderboard state
/// lives only in memory across menu actions.
pub struct LeaderboardStore<R: LeaderboardRepository> {
    repository: R,
}

impl<R: LeaderboardRepository> LeaderboardStore<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Load the leaderboard, treating corrupt storage as empty
    ///
    /// A malformed file is reported back as the second element so the caller
    /// can warn the user; it never aborts the program.
    pub fn load_or_empty(&self) -> (Leaderboard, Option<crate::Error>) {
        match self.repository.load() {
            Ok(leaderboard) => (leaderboard, None),
            Err(error) => (Leaderboard::new(), Some(error)),
        }
    }

    /// Record a score, overwriting any existing entry for the name
    ///
    /// Loads the current mapping, updates it, and writes the whole mapping
    /// back immediately.
    pub fn record(&self, name: &str, score: i64) -> Result<(), crate::Error> {
        let (mut leaderboard, _) = self.load_or_empty();
        leaderboard.set(name, score);
        self.repository.save(&leaderboard)
    }
}
