//! PostgreSQL Contact Adapter
//!
//! Implements `ContactPort` on top of [`ContactRepository`]. Database errors
//! are handed to the caller as `PortError::Store` so the driver's message
//! reaches the view unchanged.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, instrument, warn};

use core_kernel::{
    AdapterHealth, ContactId, DomainPort, HealthCheckResult, HealthCheckable, PortError,
};
use domain_contact::{Contact, ContactPort};

use crate::error::DatabaseError;
use crate::repositories::contact::{ContactRepository, ContactRow};

const ADAPTER_ID: &str = "postgres-contact-adapter";

/// PostgreSQL-backed implementation of the ContactPort trait
#[derive(Debug, Clone)]
pub struct PostgresContactAdapter {
    repository: ContactRepository,
    pool: PgPool,
}

impl PostgresContactAdapter {
    /// Creates a new PostgreSQL contact adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ContactRepository::new(pool.clone()),
            pool,
        }
    }

    /// Returns a reference to the underlying repository
    pub fn repository(&self) -> &ContactRepository {
        &self.repository
    }
}

impl DomainPort for PostgresContactAdapter {}

#[async_trait]
impl HealthCheckable for PostgresContactAdapter {
    /// Runs `SELECT 1` against the pool
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(_) => HealthCheckResult {
                adapter_id: ADAPTER_ID.to_string(),
                status: AdapterHealth::Healthy,
                latency_ms,
                message: None,
                checked_at: Utc::now(),
            },
            Err(e) => HealthCheckResult {
                adapter_id: ADAPTER_ID.to_string(),
                status: AdapterHealth::Unhealthy,
                latency_ms,
                message: Some(format!("Database error: {}", e)),
                checked_at: Utc::now(),
            },
        }
    }
}

#[async_trait]
impl ContactPort for PostgresContactAdapter {
    #[instrument(skip(self))]
    async fn find_many(&self) -> Result<Vec<Contact>, PortError> {
        debug!("Fetching all contacts");

        let rows = self.repository.find_many().await.map_err(db_to_port_error)?;

        Ok(rows.into_iter().map(row_to_contact).collect())
    }
}

fn db_to_port_error(error: DatabaseError) -> PortError {
    warn!(error = %error, "Contact query failed");
    match error {
        DatabaseError::ConnectionFailed(message) => PortError::connection(message),
        other => PortError::store(other),
    }
}

fn row_to_contact(row: ContactRow) -> Contact {
    Contact {
        id: ContactId::from(row.id),
        name: row.name,
        email: row.email,
        date_of_birth: row.date_of_birth,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}
