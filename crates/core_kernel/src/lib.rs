//! Core Kernel - Foundational types shared by the contact directory crates
//!
//! This crate provides the building blocks used by the domain, storage and
//! web layers:
//! - Strongly-typed identifiers
//! - The port error type and health-check abstractions for adapters
//! - The kernel error type

pub mod identifiers;
pub mod ports;
pub mod error;

pub use identifiers::ContactId;
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
pub use error::CoreError;
