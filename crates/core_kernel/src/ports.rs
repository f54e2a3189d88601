//! Ports and Adapters Infrastructure
//!
//! Foundational types for the ports and adapters split used by the domain
//! crates. A domain defines a port trait extending [`DomainPort`]; storage or
//! mock adapters implement it.
//!
//! ```text
//!   view / handlers ──► ContactPort ◄── PostgresContactAdapter (infra_db)
//!                                   ◄── InMemoryContactAdapter (mock)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! #[async_trait]
//! pub trait ContactPort: DomainPort {
//!     async fn find_many(&self) -> Result<Vec<Contact>, PortError>;
//! }
//! ```

use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Error type for port operations
///
/// All port implementations report failures through this type. Store errors
/// are carried through [`PortError::Store`] untouched so callers see the
/// driver's own message.
#[derive(Debug, Error)]
pub enum PortError {
    /// The backing store reported an error
    #[error(transparent)]
    Store(Box<dyn std::error::Error + Send + Sync>),

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl PortError {
    /// Wraps a store error without altering its message
    pub fn store(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        PortError::Store(Box::new(error))
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
        }
    }

    /// Returns true if the failure came from the connection layer
    pub fn is_connection(&self) -> bool {
        matches!(self, PortError::Connection { .. })
    }
}

/// Marker trait for all domain ports
///
/// All port traits extend this marker so they are thread-safe and can be
/// shared across async tasks.
pub trait DomainPort: Send + Sync + 'static {}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    /// Adapter is healthy and operational
    Healthy,
    /// Adapter is unhealthy and not operational
    Unhealthy,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Latency of the health check in milliseconds
    pub latency_ms: u64,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl HealthCheckResult {
    /// Returns true when the adapter reported itself healthy
    pub fn is_healthy(&self) -> bool {
        self.status == AdapterHealth::Healthy
    }
}

/// Trait for adapters that support health checks
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    async fn health_check(&self) -> HealthCheckResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("relation \"contacts\" does not exist")]
    struct FakeDriverError;

    #[test]
    fn test_store_error_keeps_message() {
        let error = PortError::store(FakeDriverError);
        assert_eq!(error.to_string(), "relation \"contacts\" does not exist");
        assert!(!error.is_connection());
    }

    #[test]
    fn test_connection_error() {
        let error = PortError::connection("refused");
        assert!(error.is_connection());
        assert!(error.to_string().contains("refused"));
    }

    #[test]
    fn test_health_result_serializes_snake_case() {
        let result = HealthCheckResult {
            adapter_id: "mock".to_string(),
            status: AdapterHealth::Healthy,
            latency_ms: 0,
            message: None,
            checked_at: chrono::Utc::now(),
        };
        assert!(result.is_healthy());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "healthy");
    }
}
