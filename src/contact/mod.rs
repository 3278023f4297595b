//! Contact-submission store: a durable, append-only log of visitor
//! messages, queryable in reverse-chronological order.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure submission types ([`domain::ContactSubmission`],
//!   [`domain::SubmissionId`])
//! - **Ports**: Abstract trait interfaces
//!   ([`ports::repository::ContactRepository`])
//! - **Adapters**: Concrete implementations
//!   ([`adapters::memory::InMemoryContactRepository`],
//!   [`adapters::postgres::PostgresContactRepository`])
//! - **Services**: Operation orchestration
//!   ([`services::intake::ContactIntakeService`])
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use mockable::DefaultClock;
//! use postbox::contact::adapters::memory::InMemoryContactRepository;
//! use postbox::contact::services::intake::{ContactIntakeService, SubmitContactRequest};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let service = ContactIntakeService::new(
//!     Arc::new(InMemoryContactRepository::new()),
//!     Arc::new(DefaultClock),
//! );
//!
//! let receipt = service
//!     .submit(SubmitContactRequest::new("Ada", "ada@example.com", "Hello!"))
//!     .await
//!     .expect("submission should persist");
//! assert!(receipt.success);
//! # });
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
