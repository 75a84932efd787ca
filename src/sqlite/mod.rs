//! SQLite-backed repositories.
//!
//! One [`SqlitePool`] per process is the persistence gateway: it is created
//! here, handed to the repositories at construction, and shared across
//! requests. Handlers never open connections of their own.

pub mod migrations;
mod mood;
mod user;

use std::str::FromStr;

pub use mood::SqliteMoodEntryRepository;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
pub use user::SqliteUserRepository;

use crate::MoodlogError;

/// Creates the process-wide connection pool.
///
/// Foreign keys are switched on so a mood entry for a nonexistent user is a
/// constraint violation rather than an orphan row.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, MoodlogError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| MoodlogError::ConfigurationError(e.to_string()))?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|e| MoodlogError::DatabaseError(e.to_string()))
}

/// Builds all repositories over a shared pool.
pub fn create_repositories(pool: SqlitePool) -> (SqliteUserRepository, SqliteMoodEntryRepository) {
    (
        SqliteUserRepository::new(pool.clone()),
        SqliteMoodEntryRepository::new(pool),
    )
}
