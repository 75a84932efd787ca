use crate::repository::DateRange;
use crate::{MoodEntry, MoodEntryRepository, MoodlogError};

pub struct MoodHistoryAction<M> {
    repository: M,
}

impl<M: MoodEntryRepository> MoodHistoryAction<M> {
    pub fn new(repository: M) -> Self {
        MoodHistoryAction { repository }
    }

    /// Returns the user's entries within `range`, most recent first.
    ///
    /// Each call re-queries the store; an empty result is success, not an
    /// error.
    pub async fn execute(
        &self,
        user_id: i64,
        range: DateRange,
    ) -> Result<Vec<MoodEntry>, MoodlogError> {
        self.repository.entries_for_user(user_id, range).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;
    use crate::MockMoodEntryRepository;

    fn jan(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
    }

    async fn seeded_repo() -> MockMoodEntryRepository {
        let repo = MockMoodEntryRepository::new();
        for d in [3, 1, 5] {
            repo.create_entry(1, jan(d), "ok", None).await.unwrap();
        }
        repo.create_entry(2, jan(2), "other", None).await.unwrap();
        repo
    }

    #[tokio::test]
    async fn test_history_all_entries_descending() {
        let action = MoodHistoryAction::new(seeded_repo().await);

        let entries = action.execute(1, DateRange::default()).await.unwrap();

        let dates: Vec<_> = entries.iter().map(|e| e.date).collect();
        assert_eq!(dates, [jan(5), jan(3), jan(1)]);
    }

    #[tokio::test]
    async fn test_history_bounded() {
        let action = MoodHistoryAction::new(seeded_repo().await);

        let entries = action
            .execute(
                1,
                DateRange {
                    start: Some(jan(1)),
                    end: Some(jan(3)),
                },
            )
            .await
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date, jan(3));
        assert_eq!(entries[1].date, jan(1));
    }

    #[tokio::test]
    async fn test_history_scoped_to_user() {
        let action = MoodHistoryAction::new(seeded_repo().await);

        let entries = action.execute(2, DateRange::default()).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].mood, "other");
    }

    #[tokio::test]
    async fn test_history_empty_for_new_user() {
        let action = MoodHistoryAction::new(seeded_repo().await);

        let entries = action.execute(42, DateRange::default()).await.unwrap();
        assert!(entries.is_empty());
    }
}
