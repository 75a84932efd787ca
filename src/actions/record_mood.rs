use chrono::{DateTime, Utc};

use crate::{MoodEntry, MoodEntryRepository, MoodlogError};

pub struct RecordMoodAction<M> {
    repository: M,
}

impl<M: MoodEntryRepository> RecordMoodAction<M> {
    pub fn new(repository: M) -> Self {
        RecordMoodAction { repository }
    }

    /// Persists a mood entry for the user.
    ///
    /// Multiple entries per day are allowed. A foreign-key violation from
    /// the store surfaces as [`MoodlogError::InvalidUserReference`].
    pub async fn execute(
        &self,
        user_id: i64,
        date: DateTime<Utc>,
        mood: &str,
        notes: Option<&str>,
    ) -> Result<MoodEntry, MoodlogError> {
        if mood.trim().is_empty() {
            return Err(MoodlogError::MissingField("mood"));
        }

        self.repository.create_entry(user_id, date, mood, notes).await
    }
}
