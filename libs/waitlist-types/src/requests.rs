use serde::{Deserialize, Serialize};

use crate::validation::CandidateSubmission;

/// Body of `POST /api/waitlist`.
///
/// Missing `name`/`email` deserialize as empty strings so that they fail
/// validation with a field-level error instead of a body rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitWaitlistRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl SubmitWaitlistRequest {
    /// Split into the candidate form fields and the optional source tag.
    pub fn into_parts(self) -> (CandidateSubmission, Option<String>) {
        let candidate = CandidateSubmission {
            name: self.name,
            email: self.email,
            message: self.message,
        };
        (candidate, self.source)
    }
}

impl From<&CandidateSubmission> for SubmitWaitlistRequest {
    fn from(candidate: &CandidateSubmission) -> Self {
        Self {
            name: candidate.name.clone(),
            email: candidate.email.clone(),
            message: candidate.message.clone(),
            source: None,
        }
    }
}
