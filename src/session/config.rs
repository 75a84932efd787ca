use chrono::Duration;

use crate::SecretString;

/// Session cookie settings.
///
/// The cookie is always `HttpOnly` and `SameSite=Strict`; only the attributes
/// moodlog actually varies are configurable. `cookie_secure` is dropped in
/// development so plain-HTTP local testing works (see
/// [`AppConfig::from_env`](crate::AppConfig::from_env)).
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub cookie_path: String,
    pub cookie_secure: bool,
    pub session_lifetime: Duration,
    pub secret_key: SecretString,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "moodlog_session".to_owned(),
            cookie_path: "/".to_owned(),
            cookie_secure: true,
            session_lifetime: Duration::hours(2),
            secret_key: SecretString::new(""),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.secret_key.is_empty() {
            return Err("secret_key must not be empty");
        }
        if self.secret_key.len() < 32 {
            return Err("secret_key should be at least 32 bytes");
        }
        if self.session_lifetime <= Duration::zero() {
            return Err("session_lifetime must be positive");
        }
        Ok(())
    }
}
