use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::MoodlogError;

/// A registered account.
///
/// The password hash is carried for verification during login but is never
/// serialized, so no API response can leak it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: Option<String>,
    #[serde(skip_serializing, default)]
    pub hashed_password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn mock() -> Self {
        let now = Utc::now();
        User {
            id: 1,
            email: "test@example.com".to_owned(),
            username: Some("testuser".to_owned()),
            hashed_password: "fakehashedpassword".to_owned(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn mock_from_credentials(email: &str, hashed_password: &str) -> Self {
        let now = Utc::now();
        User {
            id: 1,
            email: email.to_owned(),
            username: None,
            hashed_password: hashed_password.to_owned(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, MoodlogError>;

    /// Creates a user.
    ///
    /// Returns [`MoodlogError::UserAlreadyExists`] when the store's unique
    /// constraint on email fires.
    async fn create_user(
        &self,
        email: &str,
        username: Option<&str>,
        hashed_password: &str,
    ) -> Result<User, MoodlogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashed_password_never_serialized() {
        let user = User::mock();
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("hashed_password").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "test@example.com");
    }
}
