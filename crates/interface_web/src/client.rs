//! HTTP client for the contacts endpoint
//!
//! This is the network half of the dual-fetch page: it reads
//! `GET {base_url}/api/contacts` the way a browser `fetch` would. A non-2xx
//! status is an error, reported as `HTTP error! status: <code>`.

use thiserror::Error;
use tracing::{debug, instrument, warn};

use domain_contact::Contact;

/// Path of the contacts endpoint
pub const CONTACTS_PATH: &str = "/api/contacts";

/// Errors from the HTTP fetch path
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The request never produced a response
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    /// The body was not a JSON array of contacts
    #[error("Invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client for `GET /api/contacts`
#[derive(Debug, Clone)]
pub struct ContactsClient {
    http: reqwest::Client,
    base_url: String,
}

impl ContactsClient {
    /// Creates a client for the server at `base_url` (scheme, host and port)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Creates a client reusing an existing reqwest client
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Full URL of the contacts endpoint
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CONTACTS_PATH)
    }

    /// Fetches every contact through the HTTP endpoint
    #[instrument(skip(self), fields(url = %self.endpoint()))]
    pub async fn fetch_contacts(&self) -> Result<Vec<Contact>, ClientError> {
        let response = self
            .http
            .get(self.endpoint())
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Contacts endpoint returned an error status");
            return Err(ClientError::Status(status.as_u16()));
        }

        let contacts = response
            .json::<Vec<Contact>>()
            .await
            .map_err(ClientError::Decode)?;

        debug!(count = contacts.len(), "Fetched contacts over HTTP");
        Ok(contacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = ContactsClient::new("http://localhost:3000/");
        assert_eq!(client.endpoint(), "http://localhost:3000/api/contacts");
    }

    #[test]
    fn test_status_error_message() {
        assert_eq!(ClientError::Status(500).to_string(), "HTTP error! status: 500");
    }
}
