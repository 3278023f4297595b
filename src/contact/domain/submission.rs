//! The `ContactSubmission` aggregate representing one visitor-authored message.
//!
//! Submissions are immutable after creation; the store offers no update or
//! delete operation.

use super::SubmissionId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One inbound message from a site visitor.
///
/// Submissions are the only record kind in the store. Every field is fixed
/// at the moment the submission is received.
///
/// # Invariants
///
/// - `id` is always a valid, non-nil UUID, unique for the lifetime of the
///   store
/// - `submitted_at` reflects the store's wall clock at insertion, never a
///   client-supplied value
/// - `name`, `email`, and `message` are stored verbatim; the store applies
///   no length, charset, or format validation (empty strings are accepted)
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use postbox::contact::domain::ContactSubmission;
///
/// let clock = DefaultClock;
/// let submission = ContactSubmission::received("Ada", "ada@example.com", "Hello!", &clock);
///
/// assert_eq!(submission.name(), "Ada");
/// assert_eq!(submission.email(), "ada@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// Unique identifier for this submission.
    id: SubmissionId,

    /// Visitor-supplied name.
    name: String,

    /// Visitor-supplied email address.
    email: String,

    /// Visitor-supplied message body.
    message: String,

    /// When the store received the submission.
    submitted_at: DateTime<Utc>,
}

impl ContactSubmission {
    /// Creates a submission stamped with the clock's current instant.
    ///
    /// Assigns a fresh random identifier. Field values are taken verbatim;
    /// empty strings are accepted because the store performs no validation.
    #[must_use]
    pub fn received(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: SubmissionId::new(),
            name: name.into(),
            email: email.into(),
            message: message.into(),
            submitted_at: clock.utc(),
        }
    }

    /// Reconstructs a submission from persisted fields.
    ///
    /// Used by persistence adapters when mapping storage rows back to the
    /// domain; never assigns new values.
    #[must_use]
    pub fn from_persisted(
        id: SubmissionId,
        name: String,
        email: String,
        message: String,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            message,
            submitted_at,
        }
    }

    /// Returns the submission identifier.
    #[must_use]
    pub const fn id(&self) -> SubmissionId {
        self.id
    }

    /// Returns the visitor-supplied name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the visitor-supplied email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the visitor-supplied message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the receipt timestamp.
    #[must_use]
    pub const fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    /// Returns the receipt timestamp as milliseconds since the Unix epoch.
    ///
    /// This is the wire representation used by the data API.
    #[must_use]
    pub fn submitted_at_millis(&self) -> i64 {
        self.submitted_at.timestamp_millis()
    }
}
