//! Embedded database migrations for `SQLite`.
//!
//! Migrations are embedded at compile time and run programmatically, tracked
//! in the `_moodlog_migrations` table.
//!
//! # Example
//!
//! ```rust,ignore
//! use moodlog::sqlite::migrations;
//! use sqlx::SqlitePool;
//!
//! async fn setup_database(pool: &SqlitePool) -> Result<(), sqlx::Error> {
//!     migrations::run(pool).await?;
//!     Ok(())
//! }
//! ```

use sqlx::{Executor, SqlitePool};

const CORE_MIGRATIONS: &[(&str, &str)] = &[
    (
        "20250101000001_create_users_table",
        include_str!("../../migrations_sqlite/core/20250101000001_create_users_table.sql"),
    ),
    (
        "20250101000002_create_mood_entries_table",
        include_str!("../../migrations_sqlite/core/20250101000002_create_mood_entries_table.sql"),
    ),
];

/// Runs all database migrations.
///
/// Applied migrations are recorded and skipped on subsequent runs.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    pool.execute(
        r"
        CREATE TABLE IF NOT EXISTS _moodlog_migrations (
            name TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        )
        ",
    )
    .await?;

    run_migrations(pool, CORE_MIGRATIONS).await
}

/// Runs a set of migrations against the database.
///
/// # Limitations
///
/// SQL statements are split by semicolons (`;`), so migrations must not put
/// semicolons inside string literals. The bundled migrations avoid this.
async fn run_migrations(pool: &SqlitePool, migrations: &[(&str, &str)]) -> Result<(), sqlx::Error> {
    for (name, sql) in migrations {
        let applied: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM _moodlog_migrations WHERE name = ?)")
                .bind(*name)
                .fetch_one(pool)
                .await?;

        if !applied {
            // SQLite doesn't run multiple statements in one execute, so
            // split by semicolons and run each statement.
            for statement in sql.split(';') {
                let trimmed = statement.trim();
                if !trimmed.is_empty() {
                    pool.execute(trimmed).await?;
                }
            }

            sqlx::query("INSERT INTO _moodlog_migrations (name) VALUES (?)")
                .bind(*name)
                .execute(pool)
                .await?;
        }
    }
    Ok(())
}
