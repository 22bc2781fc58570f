//! Client side of the waitlist signup flow.
//!
//! - [`FormController`]: the signup form's state machine (idle, submitting,
//!   success, error) with a single-flight guard
//! - [`QueryClient`]: an explicitly passed query cache with invalidation
//! - [`SubmissionTransport`]: the network boundary, implemented over HTTP by
//!   [`HttpTransport`] with the `client` feature

mod error;
mod form;
#[cfg(feature = "client")]
mod http;
mod query_cache;
mod transport;

pub use error::ClientError;
pub use form::{FormController, FormError, FormState, SubmitOutcome};
#[cfg(feature = "client")]
pub use http::{HttpTransport, HttpTransportConfig};
pub use query_cache::{QueryClient, WAITLIST_STATS_KEY};
pub use transport::SubmissionTransport;
