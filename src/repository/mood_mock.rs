//! In-memory mood entry repository for tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::mood::{DateRange, MoodEntry, MoodEntryRepository};
use crate::MoodlogError;

#[derive(Default)]
struct Inner {
    entries: Vec<MoodEntry>,
    /// When set, `create_entry` enforces the foreign-key constraint the
    /// real store provides: unknown user ids are rejected.
    known_users: Option<Vec<i64>>,
}

/// Mutex-over-Vec mood entry store. Clones share storage.
#[derive(Clone, Default)]
pub struct MockMoodEntryRepository {
    inner: Arc<Mutex<Inner>>,
}

impl MockMoodEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository that only accepts entries for the given user ids,
    /// mimicking the store's foreign-key enforcement.
    pub fn with_known_users(user_ids: Vec<i64>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                entries: Vec::new(),
                known_users: Some(user_ids),
            })),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, MoodlogError> {
        self.inner
            .lock()
            .map_err(|_| MoodlogError::DatabaseError("Lock poisoned".to_owned()))
    }
}

#[async_trait]
impl MoodEntryRepository for MockMoodEntryRepository {
    async fn create_entry(
        &self,
        user_id: i64,
        date: DateTime<Utc>,
        mood: &str,
        notes: Option<&str>,
    ) -> Result<MoodEntry, MoodlogError> {
        let mut inner = self.lock()?;

        if let Some(ref known) = inner.known_users {
            if !known.contains(&user_id) {
                return Err(MoodlogError::InvalidUserReference);
            }
        }

        let entry = MoodEntry {
            id: inner.entries.len() as i64 + 1,
            user_id,
            date,
            mood: mood.to_owned(),
            notes: notes.map(str::to_owned),
            created_at: Utc::now(),
        };

        inner.entries.push(entry.clone());
        Ok(entry)
    }

    async fn entries_for_user(
        &self,
        user_id: i64,
        range: DateRange,
    ) -> Result<Vec<MoodEntry>, MoodlogError> {
        let inner = self.lock()?;

        let mut matches: Vec<MoodEntry> = inner
            .entries
            .iter()
            .filter(|e| e.user_id == user_id && range.contains(e.date))
            .cloned()
            .collect();

        matches.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_list_descending() {
        let repo = MockMoodEntryRepository::new();
        repo.create_entry(1, day(1), "happy", None).await.unwrap();
        repo.create_entry(1, day(3), "tired", Some("long day"))
            .await
            .unwrap();
        repo.create_entry(1, day(2), "calm", None).await.unwrap();
        repo.create_entry(2, day(2), "anxious", None).await.unwrap();

        let entries = repo
            .entries_for_user(1, DateRange::default())
            .await
            .unwrap();

        let moods: Vec<&str> = entries.iter().map(|e| e.mood.as_str()).collect();
        assert_eq!(moods, ["tired", "calm", "happy"]);
    }

    #[tokio::test]
    async fn test_range_filter() {
        let repo = MockMoodEntryRepository::new();
        for d in 1..=5 {
            repo.create_entry(1, day(d), "ok", None).await.unwrap();
        }

        let entries = repo
            .entries_for_user(
                1,
                DateRange {
                    start: Some(day(2)),
                    end: Some(day(4)),
                },
            )
            .await
            .unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].date, day(4));
        assert_eq!(entries[2].date, day(2));
    }

    #[tokio::test]
    async fn test_empty_result_is_ok() {
        let repo = MockMoodEntryRepository::new();
        let entries = repo
            .entries_for_user(42, DateRange::default())
            .await
            .unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_user_rejected() {
        let repo = MockMoodEntryRepository::with_known_users(vec![1]);
        let result = repo.create_entry(99, day(1), "happy", None).await;
        assert_eq!(result.unwrap_err(), MoodlogError::InvalidUserReference);
    }
}
