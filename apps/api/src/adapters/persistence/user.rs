use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use sqlx::Row;

use crate::{
    adapters::persistence::{PostgresPersistence, is_unique_violation},
    app_error::{AppError, AppResult},
    domain::entities::user::User,
    use_cases::user::UserRepo,
};

const USERNAME_UNIQUE_CONSTRAINT: &str = "users_username_key";

fn row_to_user(row: sqlx::postgres::PgRow) -> User {
    let password_hash: String = row.get("password");
    User {
        id: row.get("id"),
        username: row.get("username"),
        password_hash: SecretString::new(password_hash.into()),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl UserRepo for PostgresPersistence {
    async fn create(&self, username: &str, password_hash: &SecretString) -> AppResult<User> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (username, password)
            VALUES ($1, $2)
            RETURNING id, username, password, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash.expose_secret())
        .fetch_one(self.pool())
        .await
        .map_err(|err| {
            if is_unique_violation(&err, Some(USERNAME_UNIQUE_CONSTRAINT)) {
                AppError::DuplicateUsername {
                    username: username.to_owned(),
                }
            } else {
                AppError::from(err)
            }
        })?;

        Ok(row_to_user(row))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, username, password, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(self.pool())
        .await
        .map_err(AppError::from)?;

        Ok(row.map(row_to_user))
    }
}
