//! In-memory mock implementations for the waitlist repository.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

#[derive(Default)]
struct WaitlistTable {
    entries: Vec<WaitlistEntry>,
    last_id: i64,
}

/// In-memory implementation of WaitlistRepo for testing.
///
/// The duplicate check and the insert run under one lock, mirroring the
/// unique index in Postgres.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    table: Mutex<WaitlistTable>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with existing entries.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        let last_id = entries.iter().map(|e| e.id).max().unwrap_or(0);
        Self {
            table: Mutex::new(WaitlistTable { entries, last_id }),
        }
    }

    /// Get all entries (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.table.lock().unwrap().entries.clone()
    }

    pub fn count_by_email(&self, email: &str) -> usize {
        self.table
            .lock()
            .unwrap()
            .entries
            .iter()
            .filter(|e| e.email.eq_ignore_ascii_case(email))
            .count()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let mut table = self.table.lock().unwrap();

        if table
            .entries
            .iter()
            .any(|e| e.email.to_lowercase() == entry.email.to_lowercase())
        {
            return Err(AppError::DuplicateEmail {
                email: entry.email.clone(),
            });
        }

        table.last_id += 1;
        let created = WaitlistEntry {
            id: table.last_id,
            email: entry.email.clone(),
            name: entry.name.clone(),
            message: entry.message.clone(),
            source: entry.source.clone(),
            created_at: chrono::Utc::now(),
        };
        table.entries.push(created.clone());
        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        let email = email.to_lowercase();
        Ok(self
            .table
            .lock()
            .unwrap()
            .entries
            .iter()
            .find(|e| e.email.to_lowercase() == email)
            .cloned())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.table.lock().unwrap().entries.len() as i64)
    }
}

/// Repo whose database is down.
#[derive(Default)]
pub struct UnavailableWaitlistRepo;

#[async_trait]
impl WaitlistRepo for UnavailableWaitlistRepo {
    async fn insert(&self, _entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        Err(AppError::StorageUnavailable("connection refused".into()))
    }

    async fn find_by_email(&self, _email: &str) -> AppResult<Option<WaitlistEntry>> {
        Err(AppError::StorageUnavailable("connection refused".into()))
    }

    async fn count(&self) -> AppResult<i64> {
        Err(AppError::StorageUnavailable("connection refused".into()))
    }
}
