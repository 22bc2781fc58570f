//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::waitlist_entry::WaitlistEntry;

/// Create a stored waitlist entry with sensible defaults.
pub fn create_test_entry(overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        id: 1,
        email: "ada@example.com".to_string(),
        name: "Ada".to_string(),
        message: None,
        source: "landing".to_string(),
        created_at: test_datetime(),
    };
    overrides(&mut entry);
    entry
}

/// A fixed timestamp for reproducible fixtures.
pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}
