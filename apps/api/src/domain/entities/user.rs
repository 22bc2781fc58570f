use chrono::{DateTime, Utc};
use secrecy::SecretString;

/// An account record. `password_hash` is produced by an external hasher and
/// stored verbatim; it is never logged.
#[derive(Debug)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: SecretString,
    pub created_at: DateTime<Utc>,
}
