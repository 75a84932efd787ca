//! Environment-driven application configuration.

use chrono::Duration;

use crate::session::SessionConfig;
use crate::{MoodlogError, SecretString};

const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_QUOTE_API_URL: &str = "https://zenquotes.io/api/today";
const DEFAULT_QUOTE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Runtime environment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// Application configuration.
///
/// Everything is environment-variable driven; see [`AppConfig::from_env`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub environment: Environment,
    pub quote_api_url: String,
    pub quote_timeout_secs: u64,
    pub session: SessionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            bind_addr: DEFAULT_BIND_ADDR.to_owned(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            environment: Environment::Development,
            quote_api_url: DEFAULT_QUOTE_API_URL.to_owned(),
            quote_timeout_secs: DEFAULT_QUOTE_TIMEOUT_SECS,
            session: SessionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the environment.
    ///
    /// Recognized variables:
    /// - `DATABASE_URL` (default `sqlite::memory:`)
    /// - `MOODLOG_BIND_ADDR` (default `127.0.0.1:8080`)
    /// - `MOODLOG_ENV` (`development` | `production`)
    /// - `SESSION_SECRET` (required; at least 32 bytes)
    /// - `SESSION_LIFETIME_SECS` (default 7200)
    /// - `QUOTE_API_URL`, `QUOTE_TIMEOUT_SECS`
    ///
    /// The session cookie drops the `Secure` attribute in development so
    /// plain-HTTP local testing works.
    pub fn from_env() -> Result<Self, MoodlogError> {
        let environment = match std::env::var("MOODLOG_ENV").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        };

        let secret_key = std::env::var("SESSION_SECRET")
            .map(SecretString::from)
            .map_err(|_| {
                MoodlogError::ConfigurationError("SESSION_SECRET is not set".to_owned())
            })?;

        let quote_timeout_secs = match std::env::var("QUOTE_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                MoodlogError::ConfigurationError("QUOTE_TIMEOUT_SECS must be an integer".to_owned())
            })?,
            Err(_) => DEFAULT_QUOTE_TIMEOUT_SECS,
        };

        let session_lifetime = match std::env::var("SESSION_LIFETIME_SECS") {
            Ok(raw) => {
                let secs: i64 = raw.parse().map_err(|_| {
                    MoodlogError::ConfigurationError(
                        "SESSION_LIFETIME_SECS must be an integer".to_owned(),
                    )
                })?;
                Duration::seconds(secs)
            }
            Err(_) => Duration::hours(2),
        };

        let session = SessionConfig {
            cookie_secure: environment == Environment::Production,
            session_lifetime,
            secret_key,
            ..Default::default()
        };
        session
            .validate()
            .map_err(|msg| MoodlogError::ConfigurationError(msg.to_owned()))?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned()),
            bind_addr: std::env::var("MOODLOG_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned()),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            environment,
            quote_api_url: std::env::var("QUOTE_API_URL")
                .unwrap_or_else(|_| DEFAULT_QUOTE_API_URL.to_owned()),
            quote_timeout_secs,
            session,
        })
    }
}
