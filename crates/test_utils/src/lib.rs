//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! contact directory test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built contacts and timestamps
//! - `builders`: Builder for contacts with sensible defaults
//! - `database`: PostgreSQL testcontainer harness
//! - `assertions`: Assertions comparing wire JSON with contacts
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
