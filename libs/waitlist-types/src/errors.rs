use serde::{Deserialize, Serialize};

use crate::validation::{SubmissionField, ValidationReason};

/// API error codes returned by waitlist endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    InvalidInput,
    DuplicateEmail,
    DuplicateUsername,
    NotFound,
    StorageUnavailable,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidInput => "INVALID_INPUT",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::DuplicateUsername => "DUPLICATE_USERNAME",
            Self::NotFound => "NOT_FOUND",
            Self::StorageUnavailable => "STORAGE_UNAVAILABLE",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured error body returned by every failing endpoint.
///
/// Only `code` is always present. `field` and `reason` accompany
/// `VALIDATION_ERROR`, `email` accompanies `DUPLICATE_EMAIL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: ErrorCode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<SubmissionField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<ValidationReason>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ErrorBody {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: None,
            field: None,
            reason: None,
            email: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
