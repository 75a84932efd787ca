use crate::crypto::PasswordHasher;
use crate::validators::{validate_email, validate_password};
use crate::{MoodlogError, SecretString, User, UserRepository};

pub struct SignupAction<R, H> {
    repository: R,
    hasher: H,
}

impl<R: UserRepository, H: PasswordHasher> SignupAction<R, H> {
    pub fn new(repository: R, hasher: H) -> Self {
        SignupAction { repository, hasher }
    }

    pub async fn execute(
        &self,
        email: &str,
        password: &SecretString,
        username: Option<&str>,
    ) -> Result<User, MoodlogError> {
        validate_email(email)?;
        validate_password(password.expose_secret())?;

        if self.repository.find_user_by_email(email).await?.is_some() {
            return Err(MoodlogError::UserAlreadyExists);
        }

        let hashed = self.hasher.hash(password.expose_secret())?;

        // The pre-check races with concurrent registration; the store's
        // unique constraint is the authority and also maps to this error.
        self.repository.create_user(email, username, &hashed).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Argon2Hasher;
    use crate::validators::ValidationError;
    use crate::MockUserRepository;

    fn action() -> SignupAction<MockUserRepository, Argon2Hasher> {
        SignupAction::new(MockUserRepository::new(), Argon2Hasher::default())
    }

    #[tokio::test]
    async fn test_signup_success() {
        let signup = action();

        let user = signup
            .execute(
                "user@example.com",
                &SecretString::new("securepassword"),
                Some("user"),
            )
            .await
            .unwrap();

        assert_eq!(user.email, "user@example.com");
        assert_eq!(user.username.as_deref(), Some("user"));
        // The stored value is a hash, not the password.
        assert_ne!(user.hashed_password, "securepassword");
    }

    #[tokio::test]
    async fn test_signup_without_username() {
        let signup = action();

        let user = signup
            .execute("user@example.com", &SecretString::new("securepassword"), None)
            .await
            .unwrap();

        assert!(user.username.is_none());
    }

    #[tokio::test]
    async fn test_signup_user_already_exists() {
        let signup = action();

        signup
            .execute("user@example.com", &SecretString::new("securepassword"), None)
            .await
            .unwrap();

        let result = signup
            .execute("user@example.com", &SecretString::new("otherpassword"), None)
            .await;

        assert_eq!(result.unwrap_err(), MoodlogError::UserAlreadyExists);
    }

    #[tokio::test]
    async fn test_signup_invalid_email() {
        let signup = action();

        let result = signup
            .execute("notanemail", &SecretString::new("securepassword"), None)
            .await;

        assert_eq!(
            result.unwrap_err(),
            MoodlogError::Validation(ValidationError::EmailInvalidFormat)
        );
    }

    #[tokio::test]
    async fn test_signup_short_password() {
        let signup = action();

        let result = signup
            .execute("user@example.com", &SecretString::new("short"), None)
            .await;

        assert_eq!(
            result.unwrap_err(),
            MoodlogError::Validation(ValidationError::PasswordTooShort)
        );
    }
}
