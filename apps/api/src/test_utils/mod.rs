//! Test utilities for route and use case testing.
//!
//! This module provides:
//! - Test data factories for creating valid test fixtures
//! - In-memory repository implementations for mocking persistence
//! - A builder for `AppState` backed by those repositories

mod app_state_builder;
mod factories;
mod user_mocks;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use user_mocks::*;
pub use waitlist_mocks::*;
