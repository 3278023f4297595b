//! Unit tests for the contact module.
//!
//! Tests are organised by layer: domain construction, in-memory adapter
//! contract checks, and intake service behaviour.
