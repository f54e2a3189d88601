//! Web server configuration

use serde::Deserialize;

use core_kernel::CoreError;
use infra_db::DatabaseConfig;

/// Environment variable prefix, e.g. `CONTACTS_PORT`
pub const ENV_PREFIX: &str = "CONTACTS";

/// Web server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Maximum pooled database connections
    pub db_max_connections: u32,
    /// Apply embedded migrations at startup
    pub auto_migrate: bool,
    /// Base URL the page uses to reach `/api/contacts`; derived from the port when unset
    pub api_base_url: Option<String>,
    /// Log level
    pub log_level: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: "postgres://localhost/contacts".to_string(),
            db_max_connections: 10,
            auto_migrate: false,
            api_base_url: None,
            log_level: "info".to_string(),
        }
    }
}

impl WebConfig {
    /// Loads configuration from `CONTACTS_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from the given environment source
    pub fn from_environment(env: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Checks values that would only fail later at bind or connect time
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.port == 0 {
            return Err(CoreError::configuration("port must be non-zero"));
        }
        if self.database_url.trim().is_empty() {
            return Err(CoreError::configuration("database_url must be set"));
        }
        if self.db_max_connections == 0 {
            return Err(CoreError::configuration("db_max_connections must be at least 1"));
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the base URL for the HTTP fetch path
    pub fn api_base_url(&self) -> String {
        match &self.api_base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://127.0.0.1:{}", self.port),
        }
    }

    /// Returns the pool configuration for the store
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(self.database_url.clone()).max_connections(self.db_max_connections)
    }
}
