//! Tests for the HTTP fetch path client

mod common;

use axum::{routing::get, Router};
use axum::http::StatusCode;
use domain_contact::MockContactPort;
use interface_web::client::{ClientError, ContactsClient};
use test_utils::ContactFixtures;

#[tokio::test]
async fn test_fetch_contacts_decodes_endpoint_response() {
    let contacts = ContactFixtures::all();
    let base_url = common::spawn_app(MockContactPort::with_contacts(contacts.clone())).await;

    let fetched = ContactsClient::new(base_url).fetch_contacts().await.unwrap();

    assert_eq!(fetched, contacts);
}

#[tokio::test]
async fn test_fetch_contacts_non_2xx_is_status_error() {
    let base_url = common::spawn_failing_api(StatusCode::SERVICE_UNAVAILABLE).await;

    let error = ContactsClient::new(base_url).fetch_contacts().await.unwrap_err();

    assert!(matches!(error, ClientError::Status(503)));
    assert_eq!(error.to_string(), "HTTP error! status: 503");
}

#[tokio::test]
async fn test_fetch_contacts_bad_body_is_decode_error() {
    let base_url = common::spawn_garbage_api().await;

    let error = ContactsClient::new(base_url).fetch_contacts().await.unwrap_err();

    assert!(matches!(error, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_contacts_connection_refused_is_transport_error() {
    let error = ContactsClient::new(common::closed_base_url().await)
        .fetch_contacts()
        .await
        .unwrap_err();

    assert!(matches!(error, ClientError::Transport(_)));
}

#[tokio::test]
async fn test_fetch_contacts_accepts_date_only_fields() {
    let router = Router::new().route(
        "/api/contacts",
        get(|| async {
            (
                [("content-type", "application/json")],
                r#"[{"id":"1","name":"Ada Lovelace","email":"ada@example.com",
                    "dateOfBirth":null,"createdAt":"2024-01-01","updatedAt":"2024-01-01"}]"#,
            )
        }),
    );
    let base_url = common::serve(router).await;

    let fetched = ContactsClient::new(base_url).fetch_contacts().await.unwrap();

    assert_eq!(fetched, vec![ContactFixtures::ada_lovelace()]);
}
