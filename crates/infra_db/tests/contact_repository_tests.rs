//! Repository tests against a real PostgreSQL container
//!
//! Run with `cargo test -p infra_db -- --ignored` on a machine with Docker.

use domain_contact::ContactPort;
use infra_db::{ContactRepository, PostgresContactAdapter};
use core_kernel::HealthCheckable;
use test_utils::{ContactFixtures, TestContactBuilder, TestDatabase};

#[tokio::test]
#[ignore = "requires docker"]
async fn test_find_many_empty_table() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    let repo = ContactRepository::new(db.pool().clone());

    let rows = repo.find_many().await.unwrap();

    assert!(rows.is_empty());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_adapter_returns_seeded_contacts_in_insertion_order() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    let contacts = ContactFixtures::all();
    db.seed(&contacts).await.unwrap();

    let adapter = PostgresContactAdapter::new(db.pool().clone());
    let found = adapter.find_many().await.unwrap();

    assert_eq!(found, contacts);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_adapter_returns_row_with_blank_id() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    let blank = TestContactBuilder::new().with_id("").build();
    db.seed(&[blank.clone(), ContactFixtures::ada_lovelace()]).await.unwrap();

    let adapter = PostgresContactAdapter::new(db.pool().clone());
    let found = adapter.find_many().await.unwrap();

    assert_eq!(found.len(), 2);
    assert!(found.contains(&blank));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_store_error_surfaces_driver_message() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    sqlx::query("DROP TABLE contacts").execute(db.pool()).await.unwrap();

    let adapter = PostgresContactAdapter::new(db.pool().clone());
    let error = adapter.find_many().await.unwrap_err();

    assert!(error.to_string().contains("contacts"));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_health_check_healthy() {
    let db = TestDatabase::new().await.expect("Failed to create test database");
    let adapter = PostgresContactAdapter::new(db.pool().clone());

    assert!(adapter.health_check().await.is_healthy());
}
