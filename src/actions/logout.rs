use crate::session::SessionRepository;
use crate::MoodlogError;

pub struct LogoutAction<S> {
    sessions: S,
}

impl<S: SessionRepository> LogoutAction<S> {
    pub fn new(sessions: S) -> Self {
        LogoutAction { sessions }
    }

    /// Destroys the session.
    ///
    /// Idempotent: destroying an unknown session succeeds, so logout always
    /// clears the client's cookie.
    pub async fn execute(&self, session_id: &str) -> Result<(), MoodlogError> {
        self.sessions.destroy(session_id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::session::{InMemorySessionRepository, SessionData};

    #[tokio::test]
    async fn test_logout_destroys_session() {
        let sessions = InMemorySessionRepository::new();
        let id = sessions
            .create(SessionData {
                user_id: 1,
                email: "user@example.com".to_owned(),
                created_at: Utc::now(),
                expires_at: Utc::now() + Duration::hours(1),
            })
            .await
            .unwrap();

        let logout = LogoutAction::new(sessions.clone());
        logout.execute(&id).await.unwrap();

        assert!(sessions.find(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_logout_unknown_session_is_ok() {
        let logout = LogoutAction::new(InMemorySessionRepository::new());
        assert!(logout.execute("never-existed").await.is_ok());
    }
}
