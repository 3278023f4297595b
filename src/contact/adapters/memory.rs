//! In-memory implementation of the `ContactRepository` port.
//!
//! Provides a simple, thread-safe repository for unit testing without
//! database dependencies. Not suitable for production use.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::contact::{
    domain::ContactSubmission,
    error::RepositoryError,
    ports::repository::{ContactRepository, RepositoryResult},
};

/// In-memory implementation of [`ContactRepository`].
///
/// Thread-safe via internal [`RwLock`]. Suitable for unit tests only.
/// Entries are held in insertion order; the slot index doubles as the
/// tie-break key when two submissions share a timestamp.
///
/// # Example
///
/// ```
/// use postbox::contact::adapters::memory::InMemoryContactRepository;
/// use postbox::contact::ports::repository::ContactRepository;
///
/// let repo = InMemoryContactRepository::new();
/// // Use repo in tests...
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryContactRepository {
    entries: Arc<RwLock<Vec<ContactSubmission>>>,
}

impl InMemoryContactRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored submissions.
    ///
    /// Returns `0` if the internal lock is poisoned, matching the fallback
    /// behaviour of an empty repository. For error-propagating access, use
    /// the repository trait methods instead.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no submissions are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn append(&self, submission: &ContactSubmission) -> RepositoryResult<()> {
        let mut guard = self
            .entries
            .write()
            .map_err(|e| RepositoryError::connection(format!("lock poisoned: {e}")))?;

        if guard.iter().any(|s| s.id() == submission.id()) {
            return Err(RepositoryError::Duplicate(submission.id()));
        }

        guard.push(submission.clone());
        Ok(())
    }

    async fn list_descending(&self) -> RepositoryResult<Vec<ContactSubmission>> {
        let guard = self
            .entries
            .read()
            .map_err(|e| RepositoryError::connection(format!("lock poisoned: {e}")))?;

        // Stable sort over reverse insertion order: submissions sharing a
        // timestamp keep the most recently appended first.
        let mut entries: Vec<ContactSubmission> = guard.iter().rev().cloned().collect();
        entries.sort_by(|a, b| b.submitted_at().cmp(&a.submitted_at()));

        Ok(entries)
    }
}
