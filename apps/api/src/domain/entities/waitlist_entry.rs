use chrono::{DateTime, Utc};
use waitlist_types::{DEFAULT_SOURCE, ValidSubmission};

/// A stored waitlist signup. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistEntry {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub message: Option<String>,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a waitlist entry. `id` and `created_at` are assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaitlistEntry {
    pub email: String,
    pub name: String,
    pub message: Option<String>,
    pub source: String,
}

impl NewWaitlistEntry {
    /// Blank or missing `source` falls back to [`DEFAULT_SOURCE`].
    pub fn new(submission: &ValidSubmission, source: Option<&str>) -> Self {
        let source = source
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SOURCE);

        Self {
            email: submission.email().to_owned(),
            name: submission.name().to_owned(),
            message: submission.message().map(str::to_owned),
            source: source.to_owned(),
        }
    }
}
