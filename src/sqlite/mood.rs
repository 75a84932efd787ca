use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::error::ErrorKind;
use sqlx::{FromRow, SqlitePool};

use crate::repository::DateRange;
use crate::{MoodEntry, MoodEntryRepository, MoodlogError};

#[derive(Clone)]
pub struct SqliteMoodEntryRepository {
    pool: SqlitePool,
}

impl SqliteMoodEntryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct MoodEntryRecord {
    id: i64,
    user_id: i64,
    date: DateTime<Utc>,
    mood: String,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<MoodEntryRecord> for MoodEntry {
    fn from(row: MoodEntryRecord) -> Self {
        MoodEntry {
            id: row.id,
            user_id: row.user_id,
            date: row.date,
            mood: row.mood,
            notes: row.notes,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl MoodEntryRepository for SqliteMoodEntryRepository {
    async fn create_entry(
        &self,
        user_id: i64,
        date: DateTime<Utc>,
        mood: &str,
        notes: Option<&str>,
    ) -> Result<MoodEntry, MoodlogError> {
        let now = Utc::now();
        let row: MoodEntryRecord = sqlx::query_as(
            "INSERT INTO mood_entries (user_id, date, mood, notes, created_at) VALUES (?, ?, ?, ?, ?) RETURNING id, user_id, date, mood, notes, created_at"
        )
        .bind(user_id)
        .bind(date)
        .bind(mood)
        .bind(notes)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if matches!(db.kind(), ErrorKind::ForeignKeyViolation) => {
                MoodlogError::InvalidUserReference
            }
            _ => {
                log::error!(target: "moodlog", "msg=\"database error\", operation=\"create_entry\", error=\"{e}\"");
                MoodlogError::DatabaseError(e.to_string())
            }
        })?;

        Ok(row.into())
    }

    async fn entries_for_user(
        &self,
        user_id: i64,
        range: DateRange,
    ) -> Result<Vec<MoodEntry>, MoodlogError> {
        // Each optional bound is bound twice: once for the NULL check and
        // once for the comparison, keeping the statement static.
        let rows: Vec<MoodEntryRecord> = sqlx::query_as(
            "SELECT id, user_id, date, mood, notes, created_at FROM mood_entries \
             WHERE user_id = ? \
             AND (? IS NULL OR date >= ?) \
             AND (? IS NULL OR date <= ?) \
             ORDER BY date DESC",
        )
        .bind(user_id)
        .bind(range.start)
        .bind(range.start)
        .bind(range.end)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            log::error!(target: "moodlog", "msg=\"database error\", operation=\"entries_for_user\", error=\"{e}\"");
            MoodlogError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
