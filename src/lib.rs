//! Postbox: durable contact-form submission store.
//!
//! Postbox captures messages submitted through a site's contact form and
//! serves them back newest-first for review. The store is append-only:
//! records are immutable once written and are never updated or deleted.
//!
//! # Architecture
//!
//! Postbox follows hexagonal architecture principles:
//!
//! - **Domain**: Pure submission types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`,
//!   in-memory)
//!
//! # Modules
//!
//! - [`contact`]: the contact-submission store (domain, port, adapters,
//!   service)
//! - [`api`]: HTTP delivery surface exposing the store as a data API
//! - [`config`]: environment-driven runtime configuration

pub mod api;
pub mod config;
pub mod contact;
