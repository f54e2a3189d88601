//! Contact repository implementation
//!
//! Read-only access to the `contacts` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;

use crate::error::DatabaseError;

/// Repository over the `contacts` table
#[derive(Debug, Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    /// Creates a new ContactRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves every contact row
    ///
    /// No `ORDER BY` is applied: rows come back in whatever order the store
    /// produces, which for an unmodified heap table is insertion order.
    pub async fn find_many(&self) -> Result<Vec<ContactRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT
                id,
                name,
                email,
                date_of_birth,
                created_at,
                updated_at
            FROM contacts
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Fetched contact rows");
        Ok(rows)
    }
}

/// Database row representation of a contact
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContactRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
