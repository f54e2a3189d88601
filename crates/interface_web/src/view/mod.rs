//! Dual-fetch contact view
//!
//! The page shows the same contact list twice. The left panel reads through
//! the in-process [`ContactPort`] call, the right panel through the HTTP
//! endpoint via [`ContactsClient`]. Each panel runs its own
//! [`FetchState`] machine:
//!
//! ```text
//! Idle ──begin──► Loading ──resolve(ok)──► Success(rows)
//!                    ▲    └─resolve(err)─► Error(message)
//!                    └──────── begin (refresh) ──────────┘
//! ```
//!
//! Every `begin` issues a new sequence number for that panel. A result is
//! applied only if it carries the latest number, so a slow response from an
//! earlier refresh cannot overwrite a newer one.
//!
//! The `/` handler renders a view only after both reads have settled, so the
//! loading placeholders and stale-response dropping are visible to callers
//! that drive a [`DualFetchView`] step by step, not in the served page.

pub mod fetch_state;
pub mod panel;
pub mod render;

use tracing::{debug, instrument};

use core_kernel::PortError;
use domain_contact::{Contact, ContactPort};

use crate::client::{ClientError, ContactsClient};

pub use fetch_state::FetchState;
pub use panel::Panel;

/// Title of the in-process panel
pub const SERVER_ACTION_TITLE: &str = "Server Actions";
/// Title of the HTTP panel
pub const API_TITLE: &str = "API Route";

/// Sequence numbers issued by one refresh, one per panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    pub server_action: u64,
    pub api: u64,
}

/// The two-panel contact view
#[derive(Debug, Clone)]
pub struct DualFetchView {
    server_action: Panel,
    api: Panel,
}

impl Default for DualFetchView {
    fn default() -> Self {
        Self::new()
    }
}

impl DualFetchView {
    /// Creates a view with both panels idle
    pub fn new() -> Self {
        Self {
            server_action: Panel::new(SERVER_ACTION_TITLE),
            api: Panel::new(API_TITLE),
        }
    }

    /// The in-process panel
    pub fn server_action(&self) -> &Panel {
        &self.server_action
    }

    /// The HTTP panel
    pub fn api(&self) -> &Panel {
        &self.api
    }

    /// Puts both panels into `Loading`, whatever state they were in
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        RefreshTicket {
            server_action: self.server_action.begin(),
            api: self.api.begin(),
        }
    }

    /// Applies the in-process result; returns false if it was stale
    pub fn resolve_server_action(
        &mut self,
        seq: u64,
        result: Result<Vec<Contact>, PortError>,
    ) -> bool {
        self.server_action.resolve(seq, result)
    }

    /// Applies the HTTP result; returns false if it was stale
    pub fn resolve_api(&mut self, seq: u64, result: Result<Vec<Contact>, ClientError>) -> bool {
        self.api.resolve(seq, result)
    }

    /// Refreshes both panels
    ///
    /// The two reads run concurrently and neither waits on the other's
    /// outcome. Failures stay inside their own panel.
    #[instrument(skip_all)]
    pub async fn refresh(&mut self, port: &dyn ContactPort, client: &ContactsClient) {
        let ticket = self.begin_refresh();

        let (direct, over_http) = tokio::join!(port.find_many(), client.fetch_contacts());

        self.resolve_server_action(ticket.server_action, direct);
        self.resolve_api(ticket.api, over_http);

        debug!(
            server_action = self.server_action.state().label(),
            api = self.api.state().label(),
            "Refresh finished"
        );
    }

    /// Renders the full HTML page
    pub fn render(&self) -> String {
        render::page(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use core_kernel::ContactId;

    fn ada() -> Contact {
        Contact::new(
            ContactId::new("1"),
            "Ada Lovelace",
            "ada@example.com",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_new_view_is_idle() {
        let view = DualFetchView::new();
        assert!(matches!(view.server_action().state(), FetchState::Idle));
        assert!(matches!(view.api().state(), FetchState::Idle));
        assert_eq!(view.server_action().title(), SERVER_ACTION_TITLE);
        assert_eq!(view.api().title(), API_TITLE);
    }

    #[test]
    fn test_refresh_enters_loading_from_any_state() {
        let mut view = DualFetchView::new();
        let first = view.begin_refresh();
        view.resolve_server_action(first.server_action, Ok(vec![ada()]));
        view.resolve_api(first.api, Err(ClientError::Status(500)));

        let second = view.begin_refresh();

        assert!(view.server_action().state().is_loading());
        assert!(view.api().state().is_loading());
        assert!(second.server_action > first.server_action);
        assert!(second.api > first.api);
    }

    #[test]
    fn test_failure_is_confined_to_its_panel() {
        let mut view = DualFetchView::new();
        let ticket = view.begin_refresh();

        view.resolve_server_action(ticket.server_action, Err(PortError::internal("db down")));
        view.resolve_api(ticket.api, Ok(vec![ada()]));

        assert_eq!(view.server_action().state().error(), Some("Internal error: db down"));
        assert_eq!(view.api().state().data().map(Vec::len), Some(1));
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut view = DualFetchView::new();
        let stale = view.begin_refresh();
        let fresh = view.begin_refresh();

        assert!(view.resolve_api(fresh.api, Ok(vec![ada()])));
        assert!(!view.resolve_api(stale.api, Err(ClientError::Status(503))));

        assert_eq!(view.api().state().data().map(Vec::len), Some(1));
        assert!(view.server_action().state().is_loading());
    }
}
