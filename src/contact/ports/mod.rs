//! Port trait definitions for the contact store.
//!
//! Ports define the abstract interfaces the domain requires from
//! infrastructure. Adapters implement these ports to connect the store to a
//! concrete persistence engine.

pub mod repository;

pub use repository::ContactRepository;
