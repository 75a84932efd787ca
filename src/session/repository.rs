//! Session repository trait.

use async_trait::async_trait;

use super::{Session, SessionData};
use crate::MoodlogError;

/// Repository for session storage.
///
/// [`InMemorySessionRepository`](super::InMemorySessionRepository) covers
/// single-instance deployments and tests; a shared store would implement
/// this trait for multi-instance setups.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Creates a new session and returns the session ID.
    async fn create(&self, data: SessionData) -> Result<String, MoodlogError>;

    /// Finds a session by its ID.
    async fn find(&self, session_id: &str) -> Result<Option<Session>, MoodlogError>;

    /// Destroys a session. Destroying a missing session is not an error.
    async fn destroy(&self, session_id: &str) -> Result<(), MoodlogError>;

    /// Removes expired sessions.
    ///
    /// Returns the number of sessions pruned.
    async fn prune_expired(&self) -> Result<u64, MoodlogError>;
}
