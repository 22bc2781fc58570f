//! Signup form state machine.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use waitlist_types::{
    CandidateSubmission, SubmissionField, SubmitWaitlistRequest, ValidationError,
    WaitlistEntryResponse, WaitlistStats, validate_submission,
};

use crate::{
    error::ClientError,
    query_cache::{QueryClient, WAITLIST_STATS_KEY},
    transport::SubmissionTransport,
};

/// Failure shown to the user after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Shown inline next to the offending field
    Invalid(ValidationError),
    AlreadyJoined { email: String },
    /// Storage or network trouble; the user may try again later
    Unavailable(String),
}

impl FormError {
    /// Field to highlight, for inline feedback.
    pub fn field(&self) -> Option<SubmissionField> {
        match self {
            FormError::Invalid(err) => Some(err.field),
            _ => None,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            FormError::Invalid(err) => match err.field {
                SubmissionField::Name => "Please enter your name.".to_string(),
                SubmissionField::Email => "Please enter a valid email address.".to_string(),
            },
            FormError::AlreadyJoined { .. } => "You're already on the waitlist!".to_string(),
            FormError::Unavailable(_) => {
                "Something went wrong. Please try again later.".to_string()
            }
        }
    }
}

impl From<ClientError> for FormError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Validation(e) => FormError::Invalid(e),
            ClientError::DuplicateEmail { email } => FormError::AlreadyJoined { email },
            other => FormError::Unavailable(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    /// Terminal for this controller.
    Success(WaitlistEntryResponse),
    Error(FormError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded(WaitlistEntryResponse),
    Failed(FormError),
    /// A submission is in flight or the form already succeeded; nothing was sent.
    Ignored,
}

/// Returns the form to `Idle` if a submit future is dropped mid-request,
/// so an abandoned request cannot leave the form stuck in `Submitting`.
struct InFlight<'a> {
    state: &'a Mutex<FormState>,
    finished: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if matches!(*state, FormState::Submitting) {
            tracing::debug!("Submit dropped before completing");
            *state = FormState::Idle;
        }
    }
}

/// Drives one rendered signup form.
///
/// Transitions: `Idle -> Submitting -> Success | Error`, and
/// `Error -> Submitting` on resubmission. While `Submitting`, and after
/// `Success`, further submits are ignored. Requests are never cancelled by the
/// controller; dropping a pending `submit` returns the form to `Idle`.
pub struct FormController<T: SubmissionTransport> {
    transport: T,
    queries: Arc<QueryClient>,
    source: Option<String>,
    state: Mutex<FormState>,
}

impl<T: SubmissionTransport> FormController<T> {
    pub fn new(transport: T, queries: Arc<QueryClient>) -> Self {
        Self {
            transport,
            queries,
            source: None,
            state: Mutex::new(FormState::Idle),
        }
    }

    /// Attribute submissions from this form to a campaign or channel.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    fn lock_state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> FormState {
        self.lock_state().clone()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(*self.lock_state(), FormState::Submitting)
    }

    /// Clear an error so the form renders as fresh. Returns false in any other state.
    pub fn reset(&self) -> bool {
        let mut state = self.lock_state();
        if matches!(*state, FormState::Error(_)) {
            *state = FormState::Idle;
            true
        } else {
            false
        }
    }

    /// Validate locally, then send the submission.
    pub async fn submit(&self, candidate: &CandidateSubmission) -> SubmitOutcome {
        {
            let mut state = self.lock_state();
            if matches!(*state, FormState::Submitting | FormState::Success(_)) {
                tracing::debug!("Submit ignored, form is busy or done");
                return SubmitOutcome::Ignored;
            }

            if let Err(err) = validate_submission(candidate) {
                let error = FormError::Invalid(err);
                *state = FormState::Error(error.clone());
                return SubmitOutcome::Failed(error);
            }

            *state = FormState::Submitting;
        }

        let mut in_flight = InFlight {
            state: &self.state,
            finished: false,
        };

        let mut request = SubmitWaitlistRequest::from(candidate);
        request.source = self.source.clone();

        let result = self.transport.submit(&request).await;

        in_flight.finished = true;
        let mut state = self.lock_state();
        match result {
            Ok(entry) => {
                self.queries.invalidate(WAITLIST_STATS_KEY);
                *state = FormState::Success(entry.clone());
                SubmitOutcome::Succeeded(entry)
            }
            Err(err) => {
                tracing::debug!(error = %err, "Waitlist submission failed");
                let error = FormError::from(err);
                *state = FormState::Error(error.clone());
                SubmitOutcome::Failed(error)
            }
        }
    }

    /// Waitlist stats, served from the query cache when present.
    pub async fn stats(&self) -> Result<Arc<WaitlistStats>, ClientError> {
        self.queries
            .get_or_fetch(WAITLIST_STATS_KEY, || self.transport.stats())
            .await
    }
}
