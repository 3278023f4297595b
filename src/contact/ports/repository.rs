//! Repository port for contact-submission persistence.
//!
//! Defines the abstract interface for appending and listing submissions,
//! allowing different persistence implementations (`PostgreSQL`, in-memory,
//! etc.). The capability set is deliberately minimal: append one record,
//! list all records newest-first. There is no update, delete, or lookup.

use crate::contact::{domain::ContactSubmission, error::RepositoryError};
use async_trait::async_trait;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Port for contact-submission persistence operations.
///
/// Implementations provide the actual storage mechanism (`PostgreSQL`,
/// in-memory for testing) while the service layer remains storage-agnostic.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - Submission IDs are unique across the lifetime of the store
/// - Submissions are immutable after storage (no update or delete)
/// - `list_descending` orders by `submitted_at` descending with a
///   deterministic tie-break: submissions sharing a timestamp appear in
///   reverse insertion order (most recently appended first)
/// - Concurrent appends are independent; each produces its own record
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Durably appends a new submission.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if:
    /// - A submission with the same ID already exists
    /// - The database connection fails or the write is rejected
    async fn append(&self, submission: &ContactSubmission) -> RepositoryResult<()>;

    /// Retrieves all submissions, most recent first.
    ///
    /// Returns an empty vector for an empty store. Repeated calls with no
    /// intervening append return identical sequences.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    async fn list_descending(&self) -> RepositoryResult<Vec<ContactSubmission>>;
}
