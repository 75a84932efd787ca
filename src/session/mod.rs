//! Server-side sessions with signed cookies.
//!
//! Login creates a session record keyed by a random id; the cookie carries
//! `{id}.{hmac}` so a tampered id fails verification before any lookup.
//! Mood endpoints derive the user from the session - they never trust a
//! client-supplied user id.

mod config;
mod cookie;
mod memory_store;
mod repository;

use chrono::{DateTime, Utc};
pub use config::SessionConfig;
pub use cookie::{
    build_removal_cookie, build_session_cookie, cookie_from_header, sign_session_id,
    verify_signed_cookie,
};
pub use memory_store::InMemorySessionRepository;
pub use repository::SessionRepository;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub user_id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub data: SessionData,
}

impl Session {
    pub fn new(id: String, data: SessionData) -> Self {
        Self { id, data }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.data.expires_at
    }
}
