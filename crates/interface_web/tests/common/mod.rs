//! Shared helpers for the interface_web integration tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};
use domain_contact::MockContactPort;
use interface_web::{client::ContactsClient, create_router, AppState};
use tokio::net::TcpListener;

/// Serves `router` on an ephemeral loopback port and returns its base URL
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Starts the full application on a loopback port, with the page's HTTP
/// path pointed back at the same server
pub async fn spawn_app(store: MockContactPort) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let state = AppState::new(Arc::new(store), ContactsClient::new(base_url.clone()));
    let app = create_router(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    base_url
}

/// Starts a server whose contacts endpoint always answers with `status`
pub async fn spawn_failing_api(status: StatusCode) -> String {
    let router = Router::new().route(
        "/api/contacts",
        get(move || async move { (status, "boom") }),
    );
    serve(router).await
}

/// Starts a server whose contacts endpoint answers 200 with a non-JSON body
pub async fn spawn_garbage_api() -> String {
    let router = Router::new().route("/api/contacts", get(|| async { "<html>not json</html>" }));
    serve(router).await
}

/// A base URL nothing is listening on
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
