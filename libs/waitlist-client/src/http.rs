//! HTTP implementation of the submission transport.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use waitlist_types::{
    ErrorBody, ErrorCode, SubmitWaitlistRequest, ValidationError, WaitlistEntryResponse,
    WaitlistStats,
};

use crate::{error::ClientError, transport::SubmissionTransport};

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Origin of the waitlist API (e.g., "https://api.example.com")
    pub base_url: String,

    /// Per-request timeout in seconds (default: 10)
    pub timeout_seconds: Option<u64>,
}

/// Talks to the waitlist API over HTTP.
///
/// Never retries; a failed request surfaces to the form as an error the
/// user can resubmit from.
pub struct HttpTransport {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: HttpTransportConfig) -> Result<Self, ClientError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            return Err(ClientError::Config("base_url is required".into()));
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.unwrap_or(10)))
            .build()?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn submit(
        &self,
        request: &SubmitWaitlistRequest,
    ) -> Result<WaitlistEntryResponse, ClientError> {
        let response = self
            .http_client
            .post(self.url("/api/waitlist"))
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        decode_response(status, &body)
    }

    async fn stats(&self) -> Result<WaitlistStats, ClientError> {
        let response = self
            .http_client
            .get(self.url("/api/waitlist/stats"))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        decode_response(status, &body)
    }
}

/// Map a response to the success body or a typed error.
fn decode_response<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, ClientError> {
    if (200..300).contains(&status) {
        return serde_json::from_slice(body).map_err(|e| ClientError::Decode(e.to_string()));
    }

    let Ok(error) = serde_json::from_slice::<ErrorBody>(body) else {
        return Err(match status {
            502..=504 => ClientError::StorageUnavailable,
            _ => ClientError::Api {
                status,
                code: None,
                message: String::from_utf8_lossy(body).into_owned(),
            },
        });
    };

    Err(match (error.code, error.field, error.reason) {
        (ErrorCode::ValidationError, Some(field), Some(reason)) => {
            ClientError::Validation(ValidationError::new(field, reason))
        }
        (ErrorCode::DuplicateEmail, _, _) => ClientError::DuplicateEmail {
            email: error.email.unwrap_or_default(),
        },
        (ErrorCode::StorageUnavailable, _, _) => ClientError::StorageUnavailable,
        (code, _, _) => ClientError::Api {
            status,
            code: Some(code),
            message: error.message.unwrap_or_default(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use waitlist_types::{SubmissionField, ValidationReason};

    #[test]
    fn test_config_validation_empty_base_url() {
        let result = HttpTransport::new(HttpTransportConfig {
            base_url: "  ".into(),
            timeout_seconds: None,
        });

        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let transport = HttpTransport::new(HttpTransportConfig {
            base_url: "https://api.example.com/".into(),
            timeout_seconds: Some(5),
        })
        .unwrap();

        assert_eq!(
            transport.url("/api/waitlist"),
            "https://api.example.com/api/waitlist"
        );
    }

    #[test]
    fn test_decode_created_entry() {
        let body = br#"{"id":1,"email":"ada@example.com","name":"Ada","message":null,"source":"landing","createdAt":"2024-06-01T12:00:00Z"}"#;

        let entry: WaitlistEntryResponse = decode_response(201, body).unwrap();
        assert_eq!(entry.id, 1);
        assert_eq!(entry.source, "landing");
    }

    #[test]
    fn test_decode_validation_error() {
        let body = br#"{"code":"VALIDATION_ERROR","field":"name","reason":"required","message":"name: required"}"#;

        let err = decode_response::<WaitlistEntryResponse>(400, body).unwrap_err();
        match err {
            ClientError::Validation(e) => {
                assert_eq!(e.field, SubmissionField::Name);
                assert_eq!(e.reason, ValidationReason::Required);
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_duplicate_email() {
        let body = br#"{"code":"DUPLICATE_EMAIL","email":"ada@example.com","message":"This email is already on the waitlist"}"#;

        let err = decode_response::<WaitlistEntryResponse>(409, body).unwrap_err();
        assert!(matches!(err, ClientError::DuplicateEmail { ref email } if email == "ada@example.com"));
    }

    #[test]
    fn test_decode_storage_unavailable() {
        let body = br#"{"code":"STORAGE_UNAVAILABLE"}"#;

        let err = decode_response::<WaitlistEntryResponse>(502, body).unwrap_err();
        assert!(matches!(err, ClientError::StorageUnavailable));
    }

    #[test]
    fn test_decode_gateway_error_without_json() {
        let err = decode_response::<WaitlistEntryResponse>(504, b"upstream timed out").unwrap_err();
        assert!(matches!(err, ClientError::StorageUnavailable));
    }

    #[test]
    fn test_decode_unexpected_status() {
        let err = decode_response::<WaitlistEntryResponse>(418, b"teapot").unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 418, code: None, .. }));
    }

    #[test]
    fn test_decode_malformed_success_body() {
        let err = decode_response::<WaitlistStats>(200, b"not json").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
