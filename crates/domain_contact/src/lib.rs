//! Contact Domain
//!
//! This crate holds the contact record and the port through which the rest
//! of the system reads contacts from the store.
//!
//! The contact list is read-only: rows are created and updated by processes
//! outside this system, so the port exposes a single unfiltered read.
//!
//! # Examples
//!
//! ```rust,ignore
//! use domain_contact::{ContactPort, Contact};
//! use std::sync::Arc;
//!
//! async fn list(port: Arc<dyn ContactPort>) -> Vec<Contact> {
//!     port.find_many().await.unwrap_or_default()
//! }
//! ```

pub mod contact;
pub mod ports;

pub use contact::Contact;
pub use ports::ContactPort;

#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockContactPort;
