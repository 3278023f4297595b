//! Service layer for receiving and listing contact submissions.
//!
//! Implements the store's two operations: `submit` appends one new record
//! stamped by the store's clock, `list` returns everything newest-first.

use crate::contact::{
    domain::ContactSubmission, error::RepositoryError, ports::repository::ContactRepository,
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for submitting a contact message.
///
/// All three fields are visitor-supplied text, carried verbatim. The store
/// applies no validation: empty strings are accepted and reach persistence
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitContactRequest {
    name: String,
    email: String,
    message: String,
}

impl SubmitContactRequest {
    /// Creates a request from the three contact-form fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// Acknowledgment returned by a successful submission.
///
/// Deliberately carries no record or identifier: submission is
/// fire-and-forget from the caller's perspective. A failure surfaces as an
/// error instead of a `false` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmitReceipt {
    /// Always `true` for a persisted submission.
    pub success: bool,
}

impl SubmitReceipt {
    /// Acknowledgment for a durably persisted submission.
    #[must_use]
    pub const fn persisted() -> Self {
        Self { success: true }
    }
}

/// Service-level errors for contact intake operations.
#[derive(Debug, Error)]
pub enum ContactIntakeError {
    /// Repository operation failed; the submission was not saved or the
    /// read did not complete.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for contact intake service operations.
pub type ContactIntakeResult<T> = Result<T, ContactIntakeError>;

/// Contact intake orchestration service.
///
/// Owns the store's clock: `submitted_at` always reflects the instant the
/// service received the submission, never a caller-supplied value.
pub struct ContactIntakeService<R, C>
where
    R: ContactRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for ContactIntakeService<R, C>
where
    R: ContactRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> ContactIntakeService<R, C>
where
    R: ContactRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new contact intake service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Receives a contact submission and durably appends it to the store.
    ///
    /// Assigns a fresh unique identifier and the clock's current instant,
    /// then persists exactly one record. No other state is touched.
    ///
    /// # Errors
    ///
    /// Returns [`ContactIntakeError::Repository`] when persistence rejects
    /// the write; the caller must treat any failure as "submission not
    /// saved" and may retry.
    pub async fn submit(&self, request: SubmitContactRequest) -> ContactIntakeResult<SubmitReceipt> {
        let SubmitContactRequest {
            name,
            email,
            message,
        } = request;
        let submission = ContactSubmission::received(name, email, message, &*self.clock);
        self.repository.append(&submission).await?;
        Ok(SubmitReceipt::persisted())
    }

    /// Returns every stored submission, most recent first.
    ///
    /// Ordering is by `submitted_at` descending; submissions sharing a
    /// timestamp appear in reverse insertion order, so the result is
    /// deterministic for a fixed store state.
    ///
    /// # Errors
    ///
    /// Returns [`ContactIntakeError::Repository`] when the persistence
    /// layer is unreachable.
    pub async fn list(&self) -> ContactIntakeResult<Vec<ContactSubmission>> {
        Ok(self.repository.list_descending().await?)
    }
}
