//! Request and response DTOs.
//!
//! Wire names are camelCase to match the public API contract
//! (`userId`, `moodEntry`, `startDate`, ...).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{MoodEntry, MoodlogError, SecretString, User};

// Request DTOs
//
// Required fields are Options so that an absent field surfaces as a 400
// MissingField with a useful message instead of a body-level decode error.

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<SecretString>,
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<SecretString>,
}

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub date: Option<String>,
    pub mood: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodHistoryQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

// Response DTOs

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            email: user.email,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntryResponse {
    pub id: i64,
    pub user_id: i64,
    pub date: DateTime<Utc>,
    pub mood: String,
    pub notes: Option<String>,
}

impl From<MoodEntry> for MoodEntryResponse {
    fn from(entry: MoodEntry) -> Self {
        MoodEntryResponse {
            id: entry.id,
            user_id: entry.user_id,
            date: entry.date,
            mood: entry.mood,
            notes: entry.notes,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodCreatedResponse {
    pub message: String,
    pub mood_entry: MoodEntryResponse,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl From<MoodlogError> for ErrorResponse {
    fn from(err: MoodlogError) -> Self {
        let code = match &err {
            MoodlogError::MissingField(_) => "MISSING_FIELD",
            MoodlogError::InvalidFormat(_) => "INVALID_FORMAT",
            MoodlogError::Validation(_) => "VALIDATION_ERROR",
            MoodlogError::InvalidUserReference => "INVALID_USER_REFERENCE",
            MoodlogError::UserAlreadyExists => "USER_ALREADY_EXISTS",
            MoodlogError::InvalidCredentials => "INVALID_CREDENTIALS",
            MoodlogError::Unauthenticated => "UNAUTHENTICATED",
            MoodlogError::UpstreamFailure(_) => "UPSTREAM_FAILURE",
            MoodlogError::PasswordHashError => "PASSWORD_HASH_ERROR",
            MoodlogError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            MoodlogError::DatabaseError(_) => "DATABASE_ERROR",
        };

        ErrorResponse {
            error: err.to_string(),
            code: code.to_owned(),
        }
    }
}

/// Parses a request date.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates; a date-only
/// value resolves to midnight UTC, matching how the range bounds have always
/// been interpreted.
pub fn parse_date(field: &'static str, raw: &str) -> Result<DateTime<Utc>, MoodlogError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or(MoodlogError::InvalidFormat(field))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_parse_date_plain() {
        let parsed = parse_date("date", "2024-01-01").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_date_rfc3339() {
        let parsed = parse_date("date", "2024-01-01T15:30:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 15, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_date_invalid() {
        assert_eq!(
            parse_date("startDate", "yesterday").unwrap_err(),
            MoodlogError::InvalidFormat("startDate")
        );
        assert_eq!(
            parse_date("date", "2024-13-40").unwrap_err(),
            MoodlogError::InvalidFormat("date")
        );
    }

    #[test]
    fn test_user_response_has_no_password() {
        let response = UserResponse::from(User::mock());
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("password").is_none());
        assert!(json.get("hashed_password").is_none());
        assert!(json.get("hashedPassword").is_none());
        assert_eq!(json["email"], "test@example.com");
    }

    #[test]
    fn test_mood_entry_response_wire_names() {
        let entry = MoodEntry {
            id: 7,
            user_id: 1,
            date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            mood: "happy".to_owned(),
            notes: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(MoodEntryResponse::from(entry)).unwrap();

        assert_eq!(json["userId"], 1);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn test_error_response_codes() {
        let response = ErrorResponse::from(MoodlogError::UserAlreadyExists);
        assert_eq!(response.code, "USER_ALREADY_EXISTS");

        let response = ErrorResponse::from(MoodlogError::MissingField("email"));
        assert_eq!(response.code, "MISSING_FIELD");
        assert_eq!(response.error, "email is required");
    }
}
