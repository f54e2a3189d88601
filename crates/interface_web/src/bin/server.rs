//! Contact Directory - Web Server Binary
//!
//! Serves the contact page and the contacts JSON endpoint.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin contacts-web
//!
//! # Run with environment variables
//! CONTACTS_PORT=8080 CONTACTS_DATABASE_URL=postgres://... cargo run --bin contacts-web
//! ```
//!
//! # Environment Variables
//!
//! * `CONTACTS_HOST` - Server host (default: 0.0.0.0)
//! * `CONTACTS_PORT` - Server port (default: 3000)
//! * `CONTACTS_DATABASE_URL` - PostgreSQL connection string (`DATABASE_URL` also accepted)
//! * `CONTACTS_DB_MAX_CONNECTIONS` - Pool size (default: 10)
//! * `CONTACTS_AUTO_MIGRATE` - Apply embedded migrations at startup (default: false)
//! * `CONTACTS_API_BASE_URL` - Base URL the page fetches `/api/contacts` from
//!   (default: `http://127.0.0.1:<port>`)
//! * `CONTACTS_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use infra_db::{run_migrations, shared_pool, PostgresContactAdapter};
use interface_web::{client::ContactsClient, config::WebConfig, create_router, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the web server.
///
/// Loads configuration, initializes logging, obtains the shared database
/// pool, and serves until Ctrl+C or SIGTERM.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config()?;
    config.validate()?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        api_base_url = %config.api_base_url(),
        "Starting contact directory server"
    );

    let pool = shared_pool(&config.database_config()).await?;

    if config.auto_migrate {
        run_migrations(&pool).await?;
    }

    let store = Arc::new(PostgresContactAdapter::new(pool));
    let state = AppState::new(store, ContactsClient::new(config.api_base_url()));
    let app = create_router(state);

    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads configuration from `CONTACTS_*` variables, honouring a bare
/// `DATABASE_URL` when the prefixed one is absent.
fn load_config() -> Result<WebConfig, config::ConfigError> {
    let mut config = WebConfig::from_env()?;

    if std::env::var("CONTACTS_DATABASE_URL").is_err() {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database_url = url;
        }
    }

    Ok(config)
}

/// Initializes the tracing subscriber; `RUST_LOG` wins over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
