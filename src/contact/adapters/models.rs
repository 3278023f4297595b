//! Diesel model types for contact-submission persistence.
//!
//! These types map database rows to Rust structs using Diesel's derive
//! macros. They serve as the boundary between the database and domain
//! layers; the `insertion_seq` column never crosses into the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::contacts;
use crate::contact::domain::{ContactSubmission, SubmissionId};

/// Database row representation of a contact submission.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ContactRow {
    /// Unique submission identifier.
    pub id: Uuid,
    /// Visitor-supplied name.
    pub name: String,
    /// Visitor-supplied email address.
    pub email: String,
    /// Visitor-supplied message body.
    pub message: String,
    /// When the store received the submission.
    pub submitted_at: DateTime<Utc>,
    /// Insertion sequence assigned by the database; tie-break key only.
    pub insertion_seq: i64,
}

impl ContactRow {
    /// Converts this row to its domain form.
    ///
    /// The insertion sequence stays behind: it orders rows inside the
    /// adapter and is never exposed to callers.
    #[must_use]
    pub fn into_domain(self) -> ContactSubmission {
        ContactSubmission::from_persisted(
            SubmissionId::from_uuid(self.id),
            self.name,
            self.email,
            self.message,
            self.submitted_at,
        )
    }
}

/// Data for inserting a new contact submission.
///
/// Omits `insertion_seq`, which the database assigns from its sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contacts)]
pub struct NewContact {
    /// Unique submission identifier.
    pub id: Uuid,
    /// Visitor-supplied name.
    pub name: String,
    /// Visitor-supplied email address.
    pub email: String,
    /// Visitor-supplied message body.
    pub message: String,
    /// When the store received the submission.
    pub submitted_at: DateTime<Utc>,
}

impl NewContact {
    /// Creates a `NewContact` from a domain `ContactSubmission`.
    #[must_use]
    pub fn from_domain(submission: &ContactSubmission) -> Self {
        Self {
            id: submission.id().into_inner(),
            name: submission.name().to_owned(),
            email: submission.email().to_owned(),
            message: submission.message().to_owned(),
            submitted_at: submission.submitted_at(),
        }
    }
}
