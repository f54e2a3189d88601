//! Domain Adapters
//!
//! Adapter implementations for domain ports, connecting domain interfaces to
//! the PostgreSQL database layer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresContactAdapter;
//! use domain_contact::ContactPort;
//!
//! let adapter = PostgresContactAdapter::new(pool);
//! let contacts = adapter.find_many().await?;
//! ```

pub mod contact;

pub use contact::PostgresContactAdapter;
