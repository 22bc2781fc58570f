use sqlx::PgPool;

use crate::app_error::AppError;

pub mod user;
pub mod waitlist_entry;

#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        PostgresPersistence { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// True when the error is a unique-constraint violation, optionally on a specific constraint.
pub(crate) fn is_unique_violation(err: &sqlx::Error, constraint: Option<&str>) -> bool {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => match constraint {
            Some(name) => db_err.constraint() == Some(name),
            None => true,
        },
        _ => false,
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::NotFound,
            // The store could not be reached or handed out a connection.
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => {
                tracing::error!(error = %err, "Database unreachable");
                AppError::StorageUnavailable("Database unreachable".into())
            }
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::InvalidInput("A record with this value already exists".into())
            }
            _ => {
                // Log the actual error for debugging, but don't expose details
                tracing::error!(error = ?err, "Database error");
                AppError::Internal("Database operation failed".into())
            }
        }
    }
}
