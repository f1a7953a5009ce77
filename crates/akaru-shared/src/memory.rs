//! Conversation memory: the interaction log and the user profile.
//!
//! Both live in one persisted document:
//! `{"history": [{"user", "bot", "time", "tags"}, ...], "nama": "..."}`.
//! Every field is optional on read.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::tags::Tags;

/// One archived turn. Never edited after it is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "user", default)]
    pub user_text: String,
    #[serde(rename = "bot", default)]
    pub bot_text: String,
    #[serde(rename = "time", default)]
    pub timestamp: NaiveDateTime,
    #[serde(default)]
    pub tags: Tags,
}

impl LogEntry {
    pub fn new(user_text: impl Into<String>, bot_text: impl Into<String>, tags: Tags) -> Self {
        Self {
            user_text: user_text.into(),
            bot_text: bot_text.into(),
            timestamp: Local::now().naive_local(),
            tags,
        }
    }

    pub fn at(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Ordered interaction history. Append-only except for explicit deletion.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Log {
    entries: Vec<LogEntry>,
}

impl<'de> Deserialize<'de> for Log {
    /// Entries that fail to decode are dropped; the rest of the log survives.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
        let total = raw.len();
        let entries: Vec<LogEntry> = raw
            .into_iter()
            .enumerate()
            .filter_map(|(i, value)| match serde_json::from_value(value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable history entry {}: {}", i, e);
                    None
                }
            })
            .collect();
        if entries.len() < total {
            warn!("Kept {} of {} history entries", entries.len(), total);
        }
        Ok(Self { entries })
    }
}

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// The most recent `n` entries, oldest first
    pub fn recent(&self, n: usize) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Remove every entry, returning how many were dropped
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    pub fn remove_last(&mut self) -> Option<LogEntry> {
        self.entries.pop()
    }

    /// Remove entries whose lower-cased user text contains `keyword`.
    pub fn remove_matching(&mut self, keyword: &str) -> usize {
        let keyword = keyword.to_lowercase();
        let before = self.entries.len();
        self.entries
            .retain(|e| !e.user_text.to_lowercase().contains(&keyword));
        before - self.entries.len()
    }
}

/// Small persisted user-specific state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "nama", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Profile {
    /// The declared name, ignoring blank values
    pub fn name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}

/// The whole persisted document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    #[serde(default)]
    pub history: Log,
    #[serde(flatten)]
    pub profile: Profile,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Archive a finished turn
    pub fn record_turn(&mut self, user_text: &str, bot_text: &str, tags: Tags) {
        self.history.append(LogEntry::new(user_text, bot_text, tags));
    }
}
