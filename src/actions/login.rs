use crate::crypto::PasswordHasher;
use crate::{MoodlogError, SecretString, User, UserRepository};

pub struct LoginAction<R, H> {
    repository: R,
    hasher: H,
}

impl<R: UserRepository, H: PasswordHasher> LoginAction<R, H> {
    pub fn new(repository: R, hasher: H) -> Self {
        LoginAction { repository, hasher }
    }

    /// Authenticates a user by email and password.
    ///
    /// Unknown email and wrong password both return
    /// [`MoodlogError::InvalidCredentials`] so a caller cannot probe which
    /// addresses have accounts.
    pub async fn execute(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<User, MoodlogError> {
        if let Some(user) = self.repository.find_user_by_email(email).await? {
            if self
                .hasher
                .verify(password.expose_secret(), &user.hashed_password)?
            {
                return Ok(user);
            }
        }

        Err(MoodlogError::InvalidCredentials)
    }
}
