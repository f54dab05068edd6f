//! In-memory, read-only player table.
//!
//! Loaded once at startup. A missing or unreadable dataset does not abort the process: the store
//! is marked unavailable and every lookup reports "not found".
//!
//! Both lookups are linear scans in table order and return the first qualifying row. When one
//! player's name is contained in another row that appears earlier, the earlier row wins.

pub mod error;
pub mod loader;
pub mod record;

#[cfg(test)]
mod tests;

pub use error::{StoreError, StoreResult};
pub use loader::load_players;
pub use record::{PlayerRecord, PlayerRow, format_price};

use std::path::Path;

use tracing::{debug, info, warn};

use crate::constants::MIN_NAME_LEN;

/// The player table. `None` means the dataset failed to load.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    table: Option<Vec<PlayerRecord>>,
}

impl RecordStore {
    /// Loads the dataset at `path`, degrading to an unavailable store on any failure.
    pub fn load(path: &Path) -> Self {
        match load_players(path) {
            Ok(records) => {
                info!(path = %path.display(), players = records.len(), "Player dataset loaded");
                Self::from_records(records)
            }
            Err(e) => {
                warn!("{}. Player lookups will report not found.", e);
                Self::unavailable()
            }
        }
    }

    pub fn from_records(records: Vec<PlayerRecord>) -> Self {
        Self {
            table: Some(records),
        }
    }

    pub fn unavailable() -> Self {
        Self { table: None }
    }

    pub fn is_available(&self) -> bool {
        self.table.is_some()
    }

    /// Number of loaded rows (0 when unavailable).
    pub fn len(&self) -> usize {
        self.table.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds the first row whose `name` or `full_name` contains `query`, ignoring case.
    ///
    /// The query is trimmed first; queries shorter than [`MIN_NAME_LEN`] characters never match.
    pub fn lookup_by_name(&self, query: &str) -> Option<&PlayerRecord> {
        let table = self.table.as_ref()?;

        let query = query.trim().to_lowercase();
        if query.chars().count() < MIN_NAME_LEN {
            return None;
        }

        let found = table.iter().find(|record| record.name_contains(&query));
        if let Some(record) = found {
            debug!(query = %query, player = %record.name, "Name lookup matched");
        }
        found
    }

    /// Finds the first row (in table order) whose `name` or `full_name` occurs inside `text`.
    ///
    /// Candidate names shorter than [`MIN_NAME_LEN`] characters are skipped.
    pub fn find_mentioned_player(&self, text: &str) -> Option<&PlayerRecord> {
        let table = self.table.as_ref()?;
        if text.is_empty() {
            return None;
        }

        let text = text.to_lowercase();
        let found = table
            .iter()
            .find(|record| record.is_mentioned_in(&text, MIN_NAME_LEN));
        if let Some(record) = found {
            debug!(player = %record.name, "Player mentioned in text");
        }
        found
    }

    /// Mention scan first, then name lookup on the whole text.
    pub fn resolve(&self, text: &str) -> Option<&PlayerRecord> {
        self.find_mentioned_player(text)
            .or_else(|| self.lookup_by_name(text))
    }
}
