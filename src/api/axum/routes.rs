use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers;
use crate::quote::QuoteSource;
use crate::session::{SessionConfig, SessionRepository};
use crate::{MoodEntryRepository, UserRepository};

/// Shared handler state: the repositories, the quote source, and the
/// session cookie settings.
#[derive(Clone)]
pub struct AppState<U, M, S, Q> {
    pub user_repo: U,
    pub mood_repo: M,
    pub session_repo: S,
    pub quote_source: Q,
    pub session_config: Arc<SessionConfig>,
}

/// Builds the API router. Nest it under `/api`:
///
/// ```ignore
/// let app = Router::new()
///     .nest("/api", api_routes::<U, M, S, Q>())
///     .with_state(state);
/// ```
pub fn api_routes<U, M, S, Q>() -> Router<AppState<U, M, S, Q>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    M: MoodEntryRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
    Q: QuoteSource + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/auth/register", post(handlers::register::<U, M, S, Q>))
        .route("/auth/login", post(handlers::login::<U, M, S, Q>))
        .route("/auth/logout", post(handlers::logout::<U, M, S, Q>))
        .route(
            "/moods",
            post(handlers::create_mood::<U, M, S, Q>).get(handlers::list_moods::<U, M, S, Q>),
        )
        .route("/quote", get(handlers::daily_quote::<U, M, S, Q>))
}
