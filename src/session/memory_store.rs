//! In-memory session storage.
//!
//! Suitable for development, testing, and single-instance deployments.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use super::repository::SessionRepository;
use super::{Session, SessionData};
use crate::crypto::generate_token;
use crate::MoodlogError;

const SESSION_ID_LENGTH: usize = 32;

/// In-memory session storage.
///
/// Stores sessions in a `HashMap` protected by a `RwLock`, keyed by session
/// ID. Sessions are lost when the process restarts.
#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<String, SessionData>>>,
}

impl InMemorySessionRepository {
    /// Creates a new in-memory session repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of sessions currently stored.
    pub fn len(&self) -> usize {
        self.sessions.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns true if there are no sessions stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, data: SessionData) -> Result<String, MoodlogError> {
        let session_id = generate_token(SESSION_ID_LENGTH);

        self.sessions
            .write()
            .map_err(|_| MoodlogError::DatabaseError("Lock poisoned".to_owned()))?
            .insert(session_id.clone(), data);

        Ok(session_id)
    }

    async fn find(&self, session_id: &str) -> Result<Option<Session>, MoodlogError> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| MoodlogError::DatabaseError("Lock poisoned".to_owned()))?;

        Ok(sessions.get(session_id).map(|data| Session {
            id: session_id.to_owned(),
            data: data.clone(),
        }))
    }

    async fn destroy(&self, session_id: &str) -> Result<(), MoodlogError> {
        self.sessions
            .write()
            .map_err(|_| MoodlogError::DatabaseError("Lock poisoned".to_owned()))?
            .remove(session_id);

        Ok(())
    }

    async fn prune_expired(&self) -> Result<u64, MoodlogError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| MoodlogError::DatabaseError("Lock poisoned".to_owned()))?;

        let now = Utc::now();
        let before = sessions.len();
        sessions.retain(|_, data| data.expires_at > now);

        Ok((before - sessions.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn session_data(user_id: i64, lifetime: Duration) -> SessionData {
        SessionData {
            user_id,
            email: format!("user{user_id}@example.com"),
            created_at: Utc::now(),
            expires_at: Utc::now() + lifetime,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemorySessionRepository::new();
        let id = repo.create(session_data(1, Duration::hours(1))).await.unwrap();

        let session = repo.find(&id).await.unwrap().unwrap();
        assert_eq!(session.data.user_id, 1);
        assert_eq!(session.id, id);

        assert!(repo.find("unknown").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_destroy() {
        let repo = InMemorySessionRepository::new();
        let id = repo.create(session_data(1, Duration::hours(1))).await.unwrap();

        repo.destroy(&id).await.unwrap();
        assert!(repo.find(&id).await.unwrap().is_none());

        // Destroying again is fine.
        repo.destroy(&id).await.unwrap();
    }

    #[tokio::test]
    async fn test_prune_expired() {
        let repo = InMemorySessionRepository::new();
        repo.create(session_data(1, Duration::hours(1))).await.unwrap();
        repo.create(session_data(2, Duration::hours(-1))).await.unwrap();
        repo.create(session_data(3, Duration::hours(-2))).await.unwrap();

        let pruned = repo.prune_expired().await.unwrap();
        assert_eq!(pruned, 2);
        assert_eq!(repo.len(), 1);
    }
}
