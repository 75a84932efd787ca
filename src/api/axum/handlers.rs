//! HTTP handlers.
//!
//! Each handler is a thin shell: unwrap required fields, run the action,
//! shape the response. All error conversion happens in [`AppError`].

use axum::extract::{Query, State};
use axum::http::header::{HeaderValue, SET_COOKIE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;

use super::error::AppError;
use super::middleware::SessionUser;
use super::routes::AppState;
use crate::actions::{
    LoginAction, LogoutAction, MoodHistoryAction, RecordMoodAction, SignupAction,
};
use crate::api::{
    parse_date, AuthResponse, LoginRequest, MessageResponse, MoodCreatedResponse,
    MoodEntryResponse, MoodHistoryQuery, MoodRequest, RegisterRequest, UserResponse,
};
use crate::crypto::Argon2Hasher;
use crate::quote::QuoteSource;
use crate::repository::DateRange;
use crate::session::{
    build_removal_cookie, build_session_cookie, cookie_from_header, sign_session_id,
    verify_signed_cookie, SessionData, SessionRepository,
};
use crate::{MoodEntryRepository, MoodlogError, UserRepository};

fn set_cookie(response: &mut Response, cookie: &str) -> Result<(), AppError> {
    let value = HeaderValue::from_str(cookie).map_err(|_| {
        AppError(MoodlogError::ConfigurationError(
            "session cookie is not a valid header value".to_owned(),
        ))
    })?;
    response.headers_mut().insert(SET_COOKIE, value);
    Ok(())
}

/// Register a new user.
///
/// POST /api/auth/register
pub async fn register<U, M, S, Q>(
    State(state): State<AppState<U, M, S, Q>>,
    Json(body): Json<RegisterRequest>,
) -> Result<Response, AppError>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    M: Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
    Q: Clone + Send + Sync + 'static,
{
    let email = body.email.ok_or(MoodlogError::MissingField("email"))?;
    let password = body.password.ok_or(MoodlogError::MissingField("password"))?;

    let action = SignupAction::new(state.user_repo, Argon2Hasher::default());
    let user = action
        .execute(&email, &password, body.username.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".to_owned(),
            user: UserResponse::from(user),
        }),
    )
        .into_response())
}

/// Authenticate and issue a session cookie.
///
/// POST /api/auth/login
pub async fn login<U, M, S, Q>(
    State(state): State<AppState<U, M, S, Q>>,
    Json(body): Json<LoginRequest>,
) -> Result<Response, AppError>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    M: Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
    Q: Clone + Send + Sync + 'static,
{
    let email = body.email.ok_or(MoodlogError::MissingField("email"))?;
    let password = body.password.ok_or(MoodlogError::MissingField("password"))?;

    let action = LoginAction::new(state.user_repo, Argon2Hasher::default());
    let user = action.execute(&email, &password).await?;

    let config = &state.session_config;
    let session_data = SessionData {
        user_id: user.id,
        email: user.email.clone(),
        created_at: Utc::now(),
        expires_at: Utc::now() + config.session_lifetime,
    };
    let session_id = state.session_repo.create(session_data).await?;
    let signed_value = sign_session_id(&session_id, &config.secret_key);
    let cookie = build_session_cookie(&signed_value, config);

    let mut response = (
        StatusCode::OK,
        Json(AuthResponse {
            message: "Login successful".to_owned(),
            user: UserResponse::from(user),
        }),
    )
        .into_response();
    set_cookie(&mut response, &cookie)?;

    Ok(response)
}

/// Destroy the session and clear the cookie.
///
/// POST /api/auth/logout
///
/// Always succeeds: a missing or invalid cookie still gets the removal
/// cookie back.
pub async fn logout<U, M, S, Q>(
    State(state): State<AppState<U, M, S, Q>>,
    headers: HeaderMap,
) -> Result<Response, AppError>
where
    U: Clone + Send + Sync + 'static,
    M: Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
    Q: Clone + Send + Sync + 'static,
{
    let config = &state.session_config;

    let session_id = headers
        .get(axum::http::header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|header| cookie_from_header(header, &config.cookie_name))
        .and_then(|value| verify_signed_cookie(value, &config.secret_key));

    if let Some(session_id) = session_id {
        let action = LogoutAction::new(state.session_repo);
        action.execute(&session_id).await?;
    }

    let mut response = (
        StatusCode::OK,
        Json(MessageResponse {
            message: "Logout successful".to_owned(),
        }),
    )
        .into_response();
    set_cookie(&mut response, &build_removal_cookie(config))?;

    Ok(response)
}

/// Record a mood entry for the logged-in user.
///
/// POST /api/moods
pub async fn create_mood<U, M, S, Q>(
    State(state): State<AppState<U, M, S, Q>>,
    user: SessionUser,
    Json(body): Json<MoodRequest>,
) -> Result<Response, AppError>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    M: MoodEntryRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
    Q: QuoteSource + Clone + Send + Sync + 'static,
{
    let raw_date = body.date.ok_or(MoodlogError::MissingField("date"))?;
    let mood = body.mood.ok_or(MoodlogError::MissingField("mood"))?;
    let date = parse_date("date", &raw_date)?;

    let action = RecordMoodAction::new(state.mood_repo);
    let entry = action
        .execute(user.user_id(), date, &mood, body.notes.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MoodCreatedResponse {
            message: "Mood entry created successfully".to_owned(),
            mood_entry: MoodEntryResponse::from(entry),
        }),
    )
        .into_response())
}

/// List the logged-in user's mood entries, most recent first.
///
/// GET /api/moods?startDate=...&endDate=...
pub async fn list_moods<U, M, S, Q>(
    State(state): State<AppState<U, M, S, Q>>,
    user: SessionUser,
    Query(query): Query<MoodHistoryQuery>,
) -> Result<Response, AppError>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    M: MoodEntryRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
    Q: QuoteSource + Clone + Send + Sync + 'static,
{
    let range = DateRange {
        start: query
            .start_date
            .as_deref()
            .map(|raw| parse_date("startDate", raw))
            .transpose()?,
        end: query
            .end_date
            .as_deref()
            .map(|raw| parse_date("endDate", raw))
            .transpose()?,
    };

    let action = MoodHistoryAction::new(state.mood_repo);
    let entries = action.execute(user.user_id(), range).await?;

    let body: Vec<MoodEntryResponse> = entries.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(body)).into_response())
}

/// Fetch the quote of the day from the upstream API.
///
/// GET /api/quote
///
/// Upstream failure is a 502 with an error body, not a placeholder quote.
pub async fn daily_quote<U, M, S, Q>(
    State(state): State<AppState<U, M, S, Q>>,
) -> Result<Response, AppError>
where
    U: Clone + Send + Sync + 'static,
    M: Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
    Q: QuoteSource + Clone + Send + Sync + 'static,
{
    let quote = state.quote_source.fetch_daily().await?;
    Ok((StatusCode::OK, Json(quote)).into_response())
}
