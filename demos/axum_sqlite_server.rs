#![allow(clippy::print_stdout, clippy::unwrap_used, clippy::expect_used)]

//! Mood-tracking server over SQLite.
//!
//! Run with: `cargo run --example axum_sqlite_server`
//!
//! Environment variables:
//!   DATABASE_URL=sqlite:./moodlog.db (optional, defaults to in-memory)
//!   SESSION_SECRET=<at least 32 bytes> (required)
//!   MOODLOG_BIND_ADDR=127.0.0.1:8080 (optional)
//!   MOODLOG_ENV=development|production (optional)
//!
//! Test endpoints:
//!   curl -X POST http://localhost:8080/api/auth/register \
//!     -H "Content-Type: application/json" \
//!     -d '{"email": "user@example.com", "password": "securepassword"}'

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use moodlog::api::axum::{api_routes, AppState};
use moodlog::quote::HttpQuoteSource;
use moodlog::session::{InMemorySessionRepository, SessionRepository};
use moodlog::sqlite::{create_pool, create_repositories, migrations, SqliteMoodEntryRepository, SqliteUserRepository};
use moodlog::AppConfig;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = AppConfig::from_env().expect("Failed to load configuration");

    // One pool per process; every repository shares it.
    let pool = create_pool(&config.database_url, config.max_connections)
        .await
        .expect("Failed to create pool");

    migrations::run(&pool)
        .await
        .expect("Failed to run migrations");

    let (user_repo, mood_repo) = create_repositories(pool);
    let session_repo = InMemorySessionRepository::new();

    // Expired sessions are destroyed when their cookie is presented; this
    // sweeper reclaims the ones whose owners never come back.
    let sweeper = session_repo.clone();
    tokio::spawn(async move {
        let mut tick = tokio::time::interval(Duration::from_secs(600));
        loop {
            tick.tick().await;
            match sweeper.prune_expired().await {
                Ok(0) => {}
                Ok(pruned) => println!("Pruned {pruned} expired sessions"),
                Err(err) => {
                    log::error!(target: "moodlog", "msg=\"session prune failed\", error=\"{err}\"");
                }
            }
        }
    });
    let quote_source = HttpQuoteSource::new(
        &config.quote_api_url,
        Duration::from_secs(config.quote_timeout_secs),
    )
    .expect("Failed to build quote client");

    let state = AppState {
        user_repo,
        mood_repo,
        session_repo,
        quote_source,
        session_config: Arc::new(config.session.clone()),
    };

    let app = Router::new()
        .nest(
            "/api",
            api_routes::<
                SqliteUserRepository,
                SqliteMoodEntryRepository,
                InMemorySessionRepository,
                HttpQuoteSource,
            >(),
        )
        .with_state(state);

    println!("Starting moodlog server on http://{}", config.bind_addr);
    println!("Database: {}", config.database_url);
    println!("Endpoints:");
    println!("  POST /api/auth/register - Create account");
    println!("  POST /api/auth/login    - Login (sets session cookie)");
    println!("  POST /api/auth/logout   - Logout (clears session cookie)");
    println!("  POST /api/moods         - Record a mood entry");
    println!("  GET  /api/moods         - List mood history (startDate/endDate)");
    println!("  GET  /api/quote         - Quote of the day");

    let listener = TcpListener::bind(&config.bind_addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
