//! Persistence adapters for the contact store.
//!
//! This module provides concrete implementations of the
//! [`ContactRepository`] port, following hexagonal architecture principles.
//! Adapters handle all infrastructure concerns while the domain remains
//! pure.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryContactRepository`]: Thread-safe in-memory storage
//!   for unit testing
//! - [`postgres::PostgresContactRepository`]: Production-grade `PostgreSQL`
//!   persistence using Diesel ORM
//!
//! [`ContactRepository`]: crate::contact::ports::repository::ContactRepository

pub mod memory;
pub mod models;
pub mod postgres;
pub mod schema;
