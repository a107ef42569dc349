//! High score leaderboard
//!
//! Persisted through a [`KeyValueStore`] as a JSON array of
//! `{"score", "initials"}` objects, best first. Tracks the top 10.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::persistence::{KeyValueStore, load_json, save_json};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// Maximum initials length
pub const MAX_INITIALS: usize = 3;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub score: u64,
    pub initials: String,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "highScores";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary entries, restoring order, cap and initials form
    ///
    /// Blank initials are kept as an empty string; the score still counts.
    pub fn from_entries(mut entries: Vec<LeaderboardEntry>) -> Self {
        for entry in &mut entries {
            entry.initials = normalize_initials(&entry.initials).unwrap_or_default();
        }
        // Stable: equal scores keep their stored order
        entries.sort_by_key(|e| Reverse(e.score));
        entries.truncate(MAX_HIGH_SCORES);
        Self { entries }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a score qualifies for the leaderboard
    ///
    /// A full board admits only scores strictly above its lowest entry.
    pub fn qualifies(&self, score: u64) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().is_none_or(|e| score > e.score)
    }

    /// Record a score. Returns the rank achieved (1-indexed), or `None` if it
    /// fell off the bottom.
    ///
    /// Ties rank below existing entries with the same score.
    pub fn record(&mut self, score: u64, initials: &str) -> Option<usize> {
        let pos = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());

        self.entries.insert(
            pos,
            LeaderboardEntry {
                score,
                initials: initials.to_string(),
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);

        (pos < MAX_HIGH_SCORES).then_some(pos + 1)
    }

    /// Load from storage
    ///
    /// An absent key is initialized to an empty list. A value that does not
    /// parse is treated as empty and left in place until the next save.
    pub fn load(store: &mut dyn KeyValueStore) -> Self {
        if store.get(Self::STORAGE_KEY).is_none() {
            log::info!("No high scores found, starting fresh");
            let empty = Self::new();
            empty.save(store);
            return empty;
        }

        match load_json::<Vec<LeaderboardEntry>>(store, Self::STORAGE_KEY) {
            Some(entries) => {
                let scores = Self::from_entries(entries);
                log::info!("Loaded {} high scores", scores.len());
                scores
            }
            None => Self::new(),
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        save_json(store, Self::STORAGE_KEY, self);
        log::info!("High scores saved ({} entries)", self.entries.len());
    }
}

/// Normalize raw prompt input into leaderboard initials
///
/// Returns `None` for blank input, which counts as declining.
pub fn normalize_initials(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    // Uppercasing can grow a char ("ß" -> "SS"), so cap afterwards
    Some(trimmed.to_uppercase().chars().take(MAX_INITIALS).collect())
}
