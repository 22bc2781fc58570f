use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

/// Submission fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionField {
    Name,
    Email,
}

impl std::fmt::Display for SubmissionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Name => "name",
            Self::Email => "email",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    Required,
    InvalidFormat,
}

impl std::fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Required => "required",
            Self::InvalidFormat => "invalid_format",
        };
        write!(f, "{}", s)
    }
}

/// A submission rejected before it reached storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: SubmissionField,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: SubmissionField, reason: ValidationReason) -> Self {
        Self { field, reason }
    }
}

/// Raw form input, exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSubmission {
    pub name: String,
    pub email: String,
    pub message: Option<String>,
}

impl CandidateSubmission {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// A submission that passed validation.
///
/// Strings are trimmed, the email is lowercased so that uniqueness is
/// case-insensitive, and an empty message is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    name: String,
    email: String,
    message: Option<String>,
}

impl ValidSubmission {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Validates that the input looks like a valid email address with a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || !email.validate_email() {
        return false;
    }

    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    !local.is_empty() && domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

/// Validate and normalize a candidate submission.
///
/// `name` is checked before `email`; the first failing field is reported.
pub fn validate_submission(
    candidate: &CandidateSubmission,
) -> Result<ValidSubmission, ValidationError> {
    let name = candidate.name.trim();
    if name.is_empty() {
        return Err(ValidationError::new(
            SubmissionField::Name,
            ValidationReason::Required,
        ));
    }

    let email = candidate.email.trim();
    if !is_valid_email(email) {
        return Err(ValidationError::new(
            SubmissionField::Email,
            ValidationReason::InvalidFormat,
        ));
    }

    let message = candidate
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_owned);

    Ok(ValidSubmission {
        name: name.to_owned(),
        email: email.to_lowercase(),
        message,
    })
}
