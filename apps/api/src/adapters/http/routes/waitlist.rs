//! Waitlist signup routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::Value;
use waitlist_types::{
    SubmissionField, SubmitWaitlistRequest, ValidationError, ValidationReason,
    WaitlistEntryResponse,
};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
};

impl From<WaitlistEntry> for WaitlistEntryResponse {
    fn from(entry: WaitlistEntry) -> Self {
        Self {
            id: entry.id,
            email: entry.email,
            name: entry.name,
            message: entry.message,
            source: entry.source,
            created_at: entry.created_at,
        }
    }
}

/// POST /api/waitlist
/// Adds the submitter to the waitlist. 201 on success, 400 on invalid input,
/// 409 if the email already joined, 502 if the database is unreachable.
async fn submit(
    State(app_state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = payload?;
    let (candidate, source) = parse_submission(body)?.into_parts();

    let entry = app_state
        .waitlist_use_cases
        .submit(&candidate, source.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(WaitlistEntryResponse::from(entry))))
}

/// Wrongly typed form fields get the same field-level error as a failed
/// validation, so the form can still highlight them.
fn parse_submission(body: Value) -> AppResult<SubmitWaitlistRequest> {
    for (key, field) in [
        ("name", SubmissionField::Name),
        ("email", SubmissionField::Email),
    ] {
        let reason = match body.get(key) {
            None | Some(Value::String(_)) => continue,
            Some(Value::Null) => ValidationReason::Required,
            Some(_) => ValidationReason::InvalidFormat,
        };
        return Err(ValidationError::new(field, reason).into());
    }

    serde_json::from_value(body).map_err(|e| AppError::InvalidInput(e.to_string()))
}

/// GET /api/waitlist/stats
async fn stats(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = app_state.waitlist_use_cases.stats().await?;
    Ok(Json(stats))
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/waitlist", post(submit))
        .route("/waitlist/stats", get(stats))
}
