use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::user::User,
};

/// Storage port for user accounts. `create` fails with
/// `AppError::DuplicateUsername` when the username is taken.
#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn create(&self, username: &str, password_hash: &SecretString) -> AppResult<User>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}

#[derive(Clone)]
pub struct UserUseCases {
    repo: Arc<dyn UserRepo>,
}

impl UserUseCases {
    pub fn new(repo: Arc<dyn UserRepo>) -> Self {
        Self { repo }
    }

    /// Store a user with a credential that was hashed by the caller.
    #[instrument(skip(self, password_hash))]
    pub async fn create_user(&self, username: &str, password_hash: SecretString) -> AppResult<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::InvalidInput("Username is required".into()));
        }
        if password_hash.expose_secret().is_empty() {
            return Err(AppError::InvalidInput("Password hash is required".into()));
        }

        self.repo.create(username, &password_hash).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.repo.find_by_username(username.trim()).await
    }
}
