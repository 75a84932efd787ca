//! moodlog - a small personal mood-tracking backend.
//!
//! Users register with email and password, log in to receive a signed session
//! cookie, record dated mood entries with optional notes, query their history
//! by date range, and fetch a daily quote proxied from an upstream API.
//!
//! The crate is organized around repository traits so the HTTP layer and the
//! use-case actions can be exercised against mocks without a database:
//!
//! - [`actions`]: one struct per use case (signup, login, logout, record
//!   mood, mood history), generic over the repository traits.
//! - [`repository`]: models and storage traits, plus in-memory mocks.
//! - [`sqlite`]: `sqlx`-backed implementations and embedded migrations.
//! - [`session`]: server-side session records and HMAC-signed cookies.
//! - [`quote`]: the upstream quote-of-the-day proxy.
//! - [`api`]: axum handlers, routes, and request/response DTOs.

pub mod actions;
pub mod api;
pub mod config;
pub mod crypto;
pub mod quote;
pub mod repository;
pub mod secret;
pub mod session;
pub mod sqlite;
pub mod validators;

use std::fmt;

pub use config::AppConfig;
pub use repository::{
    MockMoodEntryRepository, MockUserRepository, MoodEntry, MoodEntryRepository, User,
    UserRepository,
};
pub use secret::SecretString;
use validators::ValidationError;

/// Errors produced by moodlog operations.
///
/// Every variant maps to exactly one HTTP status at the API boundary
/// (see `api::axum::AppError`); the core never deals in status codes.
#[derive(Debug, Clone, PartialEq)]
pub enum MoodlogError {
    /// A required request field was absent.
    MissingField(&'static str),
    /// A field was present but unparsable (e.g. a malformed date).
    InvalidFormat(&'static str),
    /// Input failed validation rules.
    Validation(ValidationError),
    /// A mood entry referenced a user the store does not know.
    InvalidUserReference,
    /// Registration attempted with an email that already has an account.
    UserAlreadyExists,
    /// Login failed. Deliberately covers both unknown email and wrong
    /// password so the response does not reveal which occurred.
    InvalidCredentials,
    /// The request carried no valid session cookie.
    Unauthenticated,
    /// The upstream quote API failed or returned nothing usable.
    UpstreamFailure(String),
    PasswordHashError,
    ConfigurationError(String),
    DatabaseError(String),
}

impl std::error::Error for MoodlogError {}

impl fmt::Display for MoodlogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoodlogError::MissingField(field) => write!(f, "{field} is required"),
            MoodlogError::InvalidFormat(field) => write!(f, "Invalid {field} format"),
            MoodlogError::Validation(err) => write!(f, "{err}"),
            MoodlogError::InvalidUserReference => write!(f, "Invalid user reference"),
            MoodlogError::UserAlreadyExists => {
                write!(f, "User already exists with this email")
            }
            MoodlogError::InvalidCredentials => write!(f, "Invalid email or password"),
            MoodlogError::Unauthenticated => write!(f, "Not authenticated"),
            MoodlogError::UpstreamFailure(msg) => write!(f, "Upstream failure: {msg}"),
            MoodlogError::PasswordHashError => write!(f, "Failed to hash password"),
            MoodlogError::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
            MoodlogError::DatabaseError(msg) => write!(f, "Database error: {msg}"),
        }
    }
}

impl From<ValidationError> for MoodlogError {
    fn from(err: ValidationError) -> Self {
        MoodlogError::Validation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoodlogError::MissingField("email").to_string(),
            "email is required"
        );
        assert_eq!(
            MoodlogError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
        assert_eq!(
            MoodlogError::UpstreamFailure("status 503".to_owned()).to_string(),
            "Upstream failure: status 503"
        );
    }

    #[test]
    fn test_credentials_error_covers_both_cases() {
        // Unknown email and wrong password must be indistinguishable.
        let unknown_email = MoodlogError::InvalidCredentials;
        let wrong_password = MoodlogError::InvalidCredentials;
        assert_eq!(unknown_email, wrong_password);
        assert_eq!(unknown_email.to_string(), wrong_password.to_string());
    }
}
