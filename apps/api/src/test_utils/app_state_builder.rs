//! Test app state builder for HTTP-level testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! with in-memory repositories for testing HTTP endpoints.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
    domain::entities::waitlist_entry::WaitlistEntry,
    infra::config::AppConfig,
    test_utils::InMemoryWaitlistRepo,
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let app_state = TestAppStateBuilder::new()
///     .with_entry(create_test_entry(|e| e.email = "ada@example.com".into()))
///     .build();
/// ```
#[derive(Default)]
pub struct TestAppStateBuilder {
    entries: Vec<WaitlistEntry>,
    waitlist_repo: Option<Arc<dyn WaitlistRepo>>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the default in-memory repo with an existing entry.
    pub fn with_entry(mut self, entry: WaitlistEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Use a custom repo (e.g. a shared `InMemoryWaitlistRepo` for assertions,
    /// or `UnavailableWaitlistRepo`). Seeded entries are ignored.
    pub fn with_waitlist_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.waitlist_repo = Some(repo);
        self
    }

    pub fn build(self) -> AppState {
        let waitlist_repo = self
            .waitlist_repo
            .unwrap_or_else(|| Arc::new(InMemoryWaitlistRepo::with_entries(self.entries)));

        // Create minimal config for testing
        let config = Arc::new(AppConfig {
            database_url: SecretString::new("postgres://unused".into()),
            database_max_connections: 1,
            run_migrations: false,
            bind_addr: "127.0.0.1:3001".parse::<SocketAddr>().unwrap(),
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
        });

        AppState {
            config,
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(waitlist_repo)),
        }
    }
}
