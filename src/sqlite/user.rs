use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::error::ErrorKind;
use sqlx::{FromRow, SqlitePool};

use crate::{MoodlogError, User, UserRepository};

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRecord {
    id: i64,
    email: String,
    username: Option<String>,
    hashed_password: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(row: UserRecord) -> Self {
        User {
            id: row.id,
            email: row.email,
            username: row.username,
            hashed_password: row.hashed_password,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, MoodlogError> {
        let row: Option<UserRecord> = sqlx::query_as(
            "SELECT id, email, username, hashed_password, created_at, updated_at FROM users WHERE email = ?"
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!(target: "moodlog", "msg=\"database error\", operation=\"find_user_by_email\", error=\"{e}\"");
            MoodlogError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Into::into))
    }

    async fn create_user(
        &self,
        email: &str,
        username: Option<&str>,
        hashed_password: &str,
    ) -> Result<User, MoodlogError> {
        let now = Utc::now();
        let row: UserRecord = sqlx::query_as(
            "INSERT INTO users (email, username, hashed_password, created_at, updated_at) VALUES (?, ?, ?, ?, ?) RETURNING id, email, username, hashed_password, created_at, updated_at"
        )
        .bind(email)
        .bind(username)
        .bind(hashed_password)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // The unique constraint on email is the authority for duplicates.
            sqlx::Error::Database(db) if matches!(db.kind(), ErrorKind::UniqueViolation) => {
                MoodlogError::UserAlreadyExists
            }
            _ => {
                log::error!(target: "moodlog", "msg=\"database error\", operation=\"create_user\", error=\"{e}\"");
                MoodlogError::DatabaseError(e.to_string())
            }
        })?;

        Ok(row.into())
    }
}
