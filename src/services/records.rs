//! Persistent player records, stored as one JSON file.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::GridSize;

/// Everything persisted between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Records {
    /// Best score per board size, keyed "highScore4x4" style.
    pub high_scores: BTreeMap<String, u32>,
    /// Total seconds spent in-game across sessions.
    pub total_play_time_secs: u64,
    /// Achievement ids already unlocked.
    pub achievements: BTreeSet<String>,
}

/// Loads, mutates, and saves [`Records`] at a fixed path.
#[derive(Debug, Clone)]
pub struct RecordsStore {
    path: PathBuf,
    records: Records,
}

impl RecordsStore {
    /// Open a store, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Self { path, records }
    }

    /// Default records location: `$HOME/.tui-2048/records.json`, or the
    /// working directory when no home is set.
    pub fn default_path() -> PathBuf {
        match std::env::var_os("HOME") {
            Some(home) => Path::new(&home).join(".tui-2048").join("records.json"),
            None => PathBuf::from("tui-2048-records.json"),
        }
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    /// Best recorded score for a board size (0 when none).
    pub fn high_score(&self, size: GridSize) -> u32 {
        self.records
            .high_scores
            .get(&size.high_score_key())
            .copied()
            .unwrap_or(0)
    }

    /// Record a score; returns true when it beats the stored best.
    pub fn submit_score(&mut self, size: GridSize, score: u32) -> bool {
        if score <= self.high_score(size) {
            return false;
        }
        self.records
            .high_scores
            .insert(size.high_score_key(), score);
        true
    }

    /// Accumulate play time; returns the new total in seconds.
    pub fn add_play_time(&mut self, secs: u64) -> u64 {
        self.records.total_play_time_secs += secs;
        self.records.total_play_time_secs
    }

    pub fn total_play_time_secs(&self) -> u64 {
        self.records.total_play_time_secs
    }

    /// Unlock an achievement; returns true when it was not unlocked before.
    pub fn unlock(&mut self, id: &str) -> bool {
        self.records.achievements.insert(id.to_owned())
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.records.achievements.contains(id)
    }

    /// Write the records file, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("create records directory {}", dir.display()))?;
        }
        let text = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, text)
            .with_context(|| format!("write records to {}", self.path.display()))
    }
}
