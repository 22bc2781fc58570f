use async_trait::async_trait;
use waitlist_types::{SubmitWaitlistRequest, WaitlistEntryResponse, WaitlistStats};

use crate::error::ClientError;

/// Network boundary between the form controller and the submission endpoint.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn submit(
        &self,
        request: &SubmitWaitlistRequest,
    ) -> Result<WaitlistEntryResponse, ClientError>;

    async fn stats(&self) -> Result<WaitlistStats, ClientError>;
}
