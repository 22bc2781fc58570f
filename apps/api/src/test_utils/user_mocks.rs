//! In-memory mock implementation for the user repository.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::user::UserRepo,
    domain::entities::user::User,
};

struct StoredUser {
    id: i64,
    username: String,
    password_hash: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl StoredUser {
    fn to_user(&self) -> User {
        User {
            id: self.id,
            username: self.username.clone(),
            password_hash: SecretString::new(self.password_hash.clone().into()),
            created_at: self.created_at,
        }
    }
}

/// In-memory implementation of UserRepo for testing.
#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<StoredUser>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepo for InMemoryUserRepo {
    async fn create(&self, username: &str, password_hash: &SecretString) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.username == username) {
            return Err(AppError::DuplicateUsername {
                username: username.to_string(),
            });
        }

        let stored = StoredUser {
            id: users.len() as i64 + 1,
            username: username.to_string(),
            password_hash: password_hash.expose_secret().to_string(),
            created_at: chrono::Utc::now(),
        };
        let user = stored.to_user();
        users.push(stored);
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .map(StoredUser::to_user))
    }
}
