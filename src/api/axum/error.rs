use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::ErrorResponse;
use crate::MoodlogError;

/// Converts `MoodlogError` into the appropriate HTTP response.
///
/// This is the final boundary: every error becomes a `{error, code}` JSON
/// body plus status, and server-side details (SQL text, hash internals)
/// never reach the client.
#[derive(Debug)]
pub struct AppError(pub MoodlogError);

impl From<MoodlogError> for AppError {
    fn from(err: MoodlogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            MoodlogError::MissingField(_)
            | MoodlogError::InvalidFormat(_)
            | MoodlogError::Validation(_)
            | MoodlogError::InvalidUserReference => StatusCode::BAD_REQUEST,
            MoodlogError::UserAlreadyExists => StatusCode::CONFLICT,
            MoodlogError::InvalidCredentials | MoodlogError::Unauthenticated => {
                StatusCode::UNAUTHORIZED
            }
            MoodlogError::UpstreamFailure(_) => StatusCode::BAD_GATEWAY,
            MoodlogError::PasswordHashError
            | MoodlogError::ConfigurationError(_)
            | MoodlogError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let error_response = ErrorResponse::from(self.0);
        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: MoodlogError) -> StatusCode {
        AppError(err).into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(MoodlogError::MissingField("email")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(MoodlogError::InvalidUserReference),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(MoodlogError::UserAlreadyExists),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(MoodlogError::InvalidCredentials),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(MoodlogError::Unauthenticated),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(MoodlogError::UpstreamFailure("down".to_owned())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(MoodlogError::DatabaseError("boom".to_owned())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
