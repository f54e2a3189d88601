//! Contacts handlers

use axum::{extract::State, Json};
use tracing::debug;

use domain_contact::{Contact, ContactPort};

use crate::{AppState, error::ApiError};

/// Lists every contact as a JSON array
///
/// Query parameters are ignored.
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state.contacts.find_many().await?;
    debug!(count = contacts.len(), "Serving contacts");
    Ok(Json(contacts))
}
