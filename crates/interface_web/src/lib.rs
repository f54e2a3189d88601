//! HTTP Layer
//!
//! This crate serves the contact directory using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: the JSON endpoint, the contact page, health checks
//! - **View**: the dual-fetch page model and its HTML rendering
//! - **Client**: the HTTP client the page uses for its network path
//! - **Middleware**: request ids, tracing, request logging
//!
//! # Routes
//!
//! | Method | Path            | Response                         |
//! |--------|-----------------|----------------------------------|
//! | GET    | `/`             | HTML page with both panels       |
//! | GET    | `/api/contacts` | JSON array of contacts           |
//! | GET    | `/health`       | liveness                         |
//! | GET    | `/health/ready` | 200 if the store answers, else 503 |
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_web::{create_router, AppState, client::ContactsClient};
//!
//! let state = AppState::new(Arc::new(adapter), ContactsClient::new(config.api_base_url()));
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod client;
pub mod view;

use std::sync::Arc;

use axum::{
    http::Uri,
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use core_kernel::HealthCheckable;
use domain_contact::ContactPort;

use crate::client::{ContactsClient, CONTACTS_PATH};
use crate::error::ApiError;
use crate::handlers::{contacts, health, page};
use crate::middleware::request_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// In-process accessor over the store
    pub contacts: Arc<dyn ContactPort>,
    /// Health probe of the same store
    pub store_health: Arc<dyn HealthCheckable>,
    /// Client the page uses for its HTTP path
    pub client: ContactsClient,
}

impl AppState {
    /// Builds state around one store adapter
    pub fn new<P>(store: Arc<P>, client: ContactsClient) -> Self
    where
        P: ContactPort + HealthCheckable,
    {
        Self {
            contacts: store.clone(),
            store_health: store,
            client,
        }
    }
}

/// Creates the main router
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(page::contacts_page))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let api_routes = Router::new()
        .route(CONTACTS_PATH, get(contacts::list_contacts))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(axum_middleware::from_fn(request_log_middleware)),
        )
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
