use thiserror::Error;
use waitlist_types::{ErrorCode, ValidationError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid submission: {0}")]
    Validation(#[from] ValidationError),

    #[error("Email is already on the waitlist: {email}")]
    DuplicateEmail { email: String },

    #[error("Username is already taken: {username}")]
    DuplicateUsername { username: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found")]
    NotFound,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::DuplicateEmail { .. } => ErrorCode::DuplicateEmail,
            AppError::DuplicateUsername { .. } => ErrorCode::DuplicateUsername,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::NotFound => ErrorCode::NotFound,
            AppError::StorageUnavailable(_) => ErrorCode::StorageUnavailable,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Expected outcomes of a well-formed request, as opposed to failures of the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::DuplicateEmail { .. }
                | AppError::DuplicateUsername { .. }
                | AppError::InvalidInput(_)
                | AppError::NotFound
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
