use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::MoodlogError;

/// A single dated record of a user's self-reported mood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: i64,
    pub user_id: i64,
    pub date: DateTime<Utc>,
    pub mood: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Optional inclusive bounds on the entry date.
///
/// Both bounds are independently optional; an unbounded range matches all
/// entries for the user.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }
}

#[async_trait]
pub trait MoodEntryRepository: Send + Sync {
    /// Persists a new entry.
    ///
    /// Returns [`MoodlogError::InvalidUserReference`] when the store's
    /// foreign-key constraint reports that `user_id` does not exist.
    async fn create_entry(
        &self,
        user_id: i64,
        date: DateTime<Utc>,
        mood: &str,
        notes: Option<&str>,
    ) -> Result<MoodEntry, MoodlogError>;

    /// Returns the user's entries within `range`, most recent first.
    ///
    /// An empty result is not an error.
    async fn entries_for_user(
        &self,
        user_id: i64,
        range: DateRange,
    ) -> Result<Vec<MoodEntry>, MoodlogError>;
}
