//! Persistence error types for the contact store.
//!
//! Uses `thiserror` for ergonomic error handling. The store's contract has a
//! single failure class: any variant here means the write was not saved or
//! the read did not complete, and the caller decides whether to retry. The
//! store itself never recovers or retries.

use super::domain::SubmissionId;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during submission persistence.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A submission with this identifier is already stored.
    #[error("duplicate submission: {0}")]
    Duplicate(SubmissionId),

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(Arc<dyn std::error::Error + Send + Sync>),

    /// A row could not be converted to or from its domain form.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A connection error occurred.
    #[error("connection error: {0}")]
    Connection(String),
}

impl RepositoryError {
    /// Creates a database error from any error type.
    #[must_use]
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Database(Arc::new(err))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        // Diesel errors collapse to the database variant. Unique constraint
        // violations carry no identifier, so adapters that know which id was
        // being written map those to `Duplicate` themselves.
        Self::database(err)
    }
}
