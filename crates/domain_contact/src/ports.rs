//! Contact Domain Ports
//!
//! The `ContactPort` trait is the accessor over the contact store. Adapters:
//!
//! - **PostgreSQL**: `infra_db::adapters::PostgresContactAdapter`
//! - **Mock**: [`mock::MockContactPort`], in memory, for tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_contact::ContactPort;
//! use std::sync::Arc;
//!
//! let port: Arc<dyn ContactPort> = Arc::new(PostgresContactAdapter::new(pool));
//! let contacts = port.find_many().await?;
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::contact::Contact;

/// Read access to the contact store
#[async_trait]
pub trait ContactPort: DomainPort {
    /// Returns every persisted contact in store-default order
    ///
    /// No filtering, pagination or projection is applied. Store failures are
    /// returned as [`PortError::Store`] with the store's own message.
    async fn find_many(&self) -> Result<Vec<Contact>, PortError>;
}

/// Mock implementation of ContactPort for testing
///
/// Holds contacts in memory and can be switched into a failing mode to
/// exercise error paths without a database.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use core_kernel::{AdapterHealth, HealthCheckResult, HealthCheckable};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use thiserror::Error;
    use tokio::sync::RwLock;

    /// Error raised by a mock store switched into failing mode
    #[derive(Debug, Error)]
    #[error("{0}")]
    pub struct MockStoreFailure(pub String);

    /// In-memory mock implementation of ContactPort
    #[derive(Debug, Default, Clone)]
    pub struct MockContactPort {
        contacts: Arc<RwLock<Vec<Contact>>>,
        failure: Arc<RwLock<Option<String>>>,
        calls: Arc<AtomicUsize>,
    }

    impl MockContactPort {
        /// Creates an empty mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a mock port pre-populated with contacts
        pub fn with_contacts(contacts: Vec<Contact>) -> Self {
            Self {
                contacts: Arc::new(RwLock::new(contacts)),
                ..Self::default()
            }
        }

        /// Creates a mock port whose reads fail with the given message
        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                failure: Arc::new(RwLock::new(Some(message.into()))),
                ..Self::default()
            }
        }

        /// Replaces the stored contacts
        pub async fn set_contacts(&self, contacts: Vec<Contact>) {
            *self.contacts.write().await = contacts;
        }

        /// Switches failing mode on (`Some`) or off (`None`)
        pub async fn set_failure(&self, message: Option<String>) {
            *self.failure.write().await = message;
        }

        /// Number of `find_many` calls served so far
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl DomainPort for MockContactPort {}

    #[async_trait]
    impl HealthCheckable for MockContactPort {
        async fn health_check(&self) -> HealthCheckResult {
            let failure = self.failure.read().await.clone();
            HealthCheckResult {
                adapter_id: "mock-contact-port".to_string(),
                status: if failure.is_some() {
                    AdapterHealth::Unhealthy
                } else {
                    AdapterHealth::Healthy
                },
                latency_ms: 0,
                message: failure,
                checked_at: chrono::Utc::now(),
            }
        }
    }

    #[async_trait]
    impl ContactPort for MockContactPort {
        async fn find_many(&self) -> Result<Vec<Contact>, PortError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(message) = self.failure.read().await.clone() {
                return Err(PortError::store(MockStoreFailure(message)));
            }
            Ok(self.contacts.read().await.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::mock::MockContactPort;
    use core_kernel::HealthCheckable;
    use chrono::{TimeZone, Utc};
    use core_kernel::ContactId;

    fn contact(id: &str, name: &str) -> Contact {
        Contact::new(
            ContactId::new(id),
            name,
            format!("{}@example.com", id),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_mock_returns_contacts_in_insertion_order() {
        let port = MockContactPort::with_contacts(vec![contact("b", "Bea"), contact("a", "Al")]);

        let contacts = port.find_many().await.unwrap();

        let names: Vec<_> = contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bea", "Al"]);
        assert_eq!(port.calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_empty_store() {
        let port = MockContactPort::new();
        assert!(port.find_many().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_failure_message_is_unchanged() {
        let port = MockContactPort::failing("connection reset by peer");

        let error = port.find_many().await.unwrap_err();

        assert_eq!(error.to_string(), "connection reset by peer");
    }

    #[tokio::test]
    async fn test_mock_health_follows_failure_mode() {
        let port = MockContactPort::new();
        assert!(port.health_check().await.is_healthy());

        port.set_failure(Some("down".to_string())).await;
        let result = port.health_check().await;
        assert!(!result.is_healthy());
        assert_eq!(result.message.as_deref(), Some("down"));
    }

    #[tokio::test]
    async fn test_mock_failure_can_be_cleared() {
        let port = MockContactPort::failing("down");
        port.set_failure(None).await;
        port.set_contacts(vec![contact("1", "Ada")]).await;

        assert_eq!(port.find_many().await.unwrap().len(), 1);
    }
}
