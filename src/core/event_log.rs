//! Bounded, most-recent-first event history carried in the game state.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Human-readable game events, newest first, capped at `limit` entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    entries: Vector<String>,
    limit: usize,
}

impl EventLog {
    /// Create an empty log that keeps at most `limit` entries.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vector::new(),
            limit,
        }
    }

    /// Record an event, dropping the oldest entry past the limit.
    pub fn push(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        log::debug!("{}", entry);
        self.entries.push_front(entry);
        while self.entries.len() > self.limit {
            self.entries.pop_back();
        }
    }

    /// The newest entry.
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Iterate newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }
}
