//! Shared types for the waitlist service.
//!
//! This crate provides:
//! - Request/response bodies for the waitlist HTTP API
//! - Error codes and the structured error body returned by the API
//! - The submission validator, shared by the server and the form controller

mod errors;
mod requests;
mod responses;
mod validation;

pub use errors::{ErrorBody, ErrorCode};
pub use requests::SubmitWaitlistRequest;
pub use responses::{WaitlistEntryResponse, WaitlistStats};
pub use validation::{
    CandidateSubmission, SubmissionField, ValidSubmission, ValidationError, ValidationReason,
    is_valid_email, validate_submission,
};

/// Source tag recorded when a submission does not name one.
pub const DEFAULT_SOURCE: &str = "landing";
