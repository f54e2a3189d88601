//! Repository implementations for domain entities
//!
//! Repositories encapsulate SQL queries and map database rows to row types.
//! Adapters in [`crate::adapters`] turn those rows into domain values.

pub mod contact;

pub use contact::{ContactRepository, ContactRow};
