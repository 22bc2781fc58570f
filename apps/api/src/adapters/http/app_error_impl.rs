use crate::app_error::AppError;
use axum::Json;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use waitlist_types::ErrorBody;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        if self.is_client_error() {
            tracing::info!(error = %self, "Request rejected");
        } else {
            tracing::error!(error = ?self, "Request failed");
        }

        let status = status_for(&self);
        let mut body = ErrorBody::new(self.code());

        match self {
            AppError::Validation(err) => {
                body.message = Some(err.to_string());
                body.field = Some(err.field);
                body.reason = Some(err.reason);
            }
            AppError::DuplicateEmail { email } => {
                body.message = Some("This email is already on the waitlist".into());
                body.email = Some(email);
            }
            AppError::DuplicateUsername { .. } => {
                body.message = Some("This username is already taken".into());
            }
            AppError::InvalidInput(msg) => body.message = Some(msg),
            // Infrastructure details stay in the logs.
            AppError::NotFound | AppError::StorageUnavailable(_) | AppError::Internal(_) => {}
        }

        (status, Json(body)).into_response()
    }
}

/// Body rejections answer with the same JSON error body as every other failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::Validation(_) | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        AppError::DuplicateEmail { .. } | AppError::DuplicateUsername { .. } => {
            StatusCode::CONFLICT
        }
        AppError::NotFound => StatusCode::NOT_FOUND,
        AppError::StorageUnavailable(_) => StatusCode::BAD_GATEWAY,
        AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
