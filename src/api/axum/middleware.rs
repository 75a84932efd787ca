//! Session authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;

use super::error::AppError;
use super::routes::AppState;
use crate::quote::QuoteSource;
use crate::session::{cookie_from_header, verify_signed_cookie, Session, SessionRepository};
use crate::{MoodEntryRepository, MoodlogError, UserRepository};

/// Authenticated user, extracted from the signed session cookie.
///
/// Handlers taking this parameter require a valid, unexpired session; the
/// user id comes from the server-side session record, never from the
/// request. Missing, tampered, unknown, and expired cookies all reject with
/// 401.
#[derive(Debug, Clone)]
pub struct SessionUser {
    session: Session,
}

impl SessionUser {
    /// Returns the user ID from the session.
    pub fn user_id(&self) -> i64 {
        self.session.data.user_id
    }

    /// Returns the user's email from the session.
    pub fn email(&self) -> &str {
        &self.session.data.email
    }

    /// Returns a reference to the session.
    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl<U, M, S, Q> FromRequestParts<AppState<U, M, S, Q>> for SessionUser
where
    U: UserRepository + Clone + Send + Sync + 'static,
    M: MoodEntryRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
    Q: QuoteSource + Clone + Send + Sync + 'static,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<U, M, S, Q>,
    ) -> Result<Self, Self::Rejection> {
        let config = &state.session_config;

        let header = parts
            .headers
            .get(COOKIE)
            .and_then(|value| value.to_str().ok())
            .ok_or(MoodlogError::Unauthenticated)?;

        let cookie_value = cookie_from_header(header, &config.cookie_name)
            .ok_or(MoodlogError::Unauthenticated)?;

        let session_id = verify_signed_cookie(cookie_value, &config.secret_key)
            .ok_or(MoodlogError::Unauthenticated)?;

        let session = state
            .session_repo
            .find(&session_id)
            .await?
            .ok_or(MoodlogError::Unauthenticated)?;

        if session.is_expired() {
            // Stale record; drop it so the store doesn't accumulate them.
            state.session_repo.destroy(&session.id).await?;
            return Err(AppError(MoodlogError::Unauthenticated));
        }

        Ok(SessionUser { session })
    }
}
