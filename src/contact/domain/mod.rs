//! Domain types for the contact-submission store.
//!
//! This module contains pure domain types with no infrastructure
//! dependencies. Submissions are immutable after construction and
//! serialisable via serde.

mod ids;
mod submission;

pub use ids::SubmissionId;
pub use submission::ContactSubmission;
