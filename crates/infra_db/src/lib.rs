//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL access for the contact directory using
//! SQLx.
//!
//! # Architecture
//!
//! - `pool`: pool configuration, the process-wide shared pool, migrations
//! - `repositories`: SQL queries mapped to row types
//! - `adapters`: implementations of domain ports on top of the repositories
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, shared_pool, PostgresContactAdapter};
//!
//! let pool = shared_pool(&DatabaseConfig::new("postgres://localhost/contacts")).await?;
//! let adapter = PostgresContactAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, DatabaseConfig, create_pool, shared_pool, run_migrations};
pub use error::DatabaseError;
pub use repositories::{ContactRepository, ContactRow};
pub use adapters::PostgresContactAdapter;
