use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fs;
use std::path::PathBuf;

#[cfg(test)]
mod tests;

pub const MAX_ENTRIES: usize = 10;
pub const MAX_NAME_CHARS: usize = 8;
const PLACEHOLDER_NAME: &str = "player";

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

/// Storage backend for the leaderboard. Implementations persist the full
/// list on every save; `load` degrades to empty when storage is absent or
/// unreadable.
pub trait Store {
    fn load(&self) -> Vec<LeaderboardEntry>;
    fn save(&self, entries: &[LeaderboardEntry]) -> Result<()>;
}

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        JsonFileStore { path }
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> Vec<LeaderboardEntry> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&text) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    "Treating unreadable leaderboard {} as empty: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&self, entries: &[LeaderboardEntry]) -> Result<()> {
        let text = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

pub struct Leaderboard<S: Store> {
    store: S,
}

impl<S: Store> Leaderboard<S> {
    pub fn new(store: S) -> Self {
        Leaderboard { store }
    }

    pub fn load(&self) -> Vec<LeaderboardEntry> {
        self.store.load()
    }

    /// Inserts a score and persists the resulting top 10. The sort is
    /// stable, so equal scores keep their recording order.
    pub fn record(&self, name: &str, score: u32) -> Result<Vec<LeaderboardEntry>> {
        let mut entries = self.store.load();
        entries.push(LeaderboardEntry {
            name: sanitize_name(name),
            score,
        });
        entries.sort_by_key(|e| Reverse(e.score));
        entries.truncate(MAX_ENTRIES);
        self.store.save(&entries)?;
        Ok(entries)
    }

    /// Removes the entry at `index` (0 = first rank) and persists. Out of
    /// range indices are a no-op.
    pub fn remove_at(&self, index: usize) -> Result<Vec<LeaderboardEntry>> {
        let mut entries = self.store.load();
        if index < entries.len() {
            entries.remove(index);
            self.store.save(&entries)?;
        }
        Ok(entries)
    }
}

pub fn sanitize_name(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return PLACEHOLDER_NAME.to_owned();
    }
    name.chars().take(MAX_NAME_CHARS).collect()
}
