use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;
use waitlist_types::{CandidateSubmission, WaitlistStats, validate_submission};

use crate::{
    app_error::AppResult,
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

/// Storage port for waitlist entries.
///
/// `insert` must enforce email uniqueness atomically and fail with
/// `AppError::DuplicateEmail` on conflict, writing nothing.
#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>>;
    async fn count(&self) -> AppResult<i64>;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self { repo }
    }

    /// Create a waitlist entry. The only path that writes to `waitlist_entries`.
    ///
    /// Insert-only: a duplicate email is reported, never merged into the
    /// existing entry. Storage failures are returned as-is without retrying.
    #[instrument(skip_all, fields(email = %candidate.email.trim(), source = ?source))]
    pub async fn submit(
        &self,
        candidate: &CandidateSubmission,
        source: Option<&str>,
    ) -> AppResult<WaitlistEntry> {
        let submission = validate_submission(candidate)?;
        let new_entry = NewWaitlistEntry::new(&submission, source);

        let entry = self.repo.insert(&new_entry).await?;

        tracing::info!(
            entry_id = entry.id,
            source = %entry.source,
            "Waitlist entry created"
        );
        Ok(entry)
    }

    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        self.repo.find_by_email(&email.trim().to_lowercase()).await
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> AppResult<WaitlistStats> {
        let total = self.repo.count().await?;
        Ok(WaitlistStats { total })
    }
}
