//! In-memory user repository for tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use super::user::{User, UserRepository};
use crate::MoodlogError;

/// Mutex-over-Vec user store.
///
/// Cloning shares the underlying storage, so a clone handed to an app state
/// sees the same users as the original held by the test.
#[derive(Clone, Default)]
pub struct MockUserRepository {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<User>>, MoodlogError> {
        self.users
            .lock()
            .map_err(|_| MoodlogError::DatabaseError("Lock poisoned".to_owned()))
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, MoodlogError> {
        Ok(self.lock()?.iter().find(|u| u.email == email).cloned())
    }

    async fn create_user(
        &self,
        email: &str,
        username: Option<&str>,
        hashed_password: &str,
    ) -> Result<User, MoodlogError> {
        let mut users = self.lock()?;

        // Mirrors the store-level unique constraint on email.
        if users.iter().any(|u| u.email == email) {
            return Err(MoodlogError::UserAlreadyExists);
        }

        let now = Utc::now();
        let user = User {
            id: users.len() as i64 + 1,
            email: email.to_owned(),
            username: username.map(str::to_owned),
            hashed_password: hashed_password.to_owned(),
            created_at: now,
            updated_at: now,
        };

        users.push(user.clone());
        Ok(user)
    }
}
