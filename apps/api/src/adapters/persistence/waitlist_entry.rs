use async_trait::async_trait;
use sqlx::Row;

use crate::{
    adapters::persistence::{PostgresPersistence, is_unique_violation},
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
    use_cases::waitlist::WaitlistRepo,
};

/// Unique index on `lower(email)`, see `migrations/`.
const EMAIL_UNIQUE_INDEX: &str = "waitlist_entries_email_key";

fn row_to_entry(row: sqlx::postgres::PgRow) -> WaitlistEntry {
    WaitlistEntry {
        id: row.get("id"),
        email: row.get("email"),
        name: row.get("name"),
        message: row.get("message"),
        source: row.get("source"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        // Single statement: the unique index decides the race, no pre-read.
        let row = sqlx::query(
            r#"
            INSERT INTO waitlist_entries (email, name, message, source)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, name, message, source, created_at
            "#,
        )
        .bind(&entry.email)
        .bind(&entry.name)
        .bind(&entry.message)
        .bind(&entry.source)
        .fetch_one(self.pool())
        .await
        .map_err(|err| {
            if is_unique_violation(&err, Some(EMAIL_UNIQUE_INDEX)) {
                AppError::DuplicateEmail {
                    email: entry.email.clone(),
                }
            } else {
                AppError::from(err)
            }
        })?;

        Ok(row_to_entry(row))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, name, message, source, created_at
            FROM waitlist_entries
            WHERE lower(email) = lower($1)
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await
        .map_err(AppError::from)?;

        Ok(row.map(row_to_entry))
    }

    async fn count(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM waitlist_entries")
            .fetch_one(self.pool())
            .await
            .map_err(AppError::from)?;

        Ok(row.get("total"))
    }
}
