//! One list panel and its request sequencing

use std::fmt::Display;

use tracing::debug;

use domain_contact::Contact;

use super::fetch_state::FetchState;

/// A titled contact list with its own fetch state
///
/// The rows of the last successful read are kept across later failures so
/// the header count still reflects them.
#[derive(Debug, Clone)]
pub struct Panel {
    title: &'static str,
    state: FetchState<Vec<Contact>>,
    contacts: Vec<Contact>,
    issued: u64,
}

impl Panel {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            state: FetchState::Idle,
            contacts: Vec::new(),
            issued: 0,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn state(&self) -> &FetchState<Vec<Contact>> {
        &self.state
    }

    /// Rows from the most recent successful read
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Latest sequence number handed out by [`Panel::begin`]
    pub fn latest_seq(&self) -> u64 {
        self.issued
    }

    /// Enters `Loading` and returns the sequence number for the new request
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.state = FetchState::Loading;
        self.issued
    }

    /// Applies a result if `seq` is the latest issued and still pending
    ///
    /// Returns whether the result was applied.
    pub fn resolve<E: Display>(&mut self, seq: u64, result: Result<Vec<Contact>, E>) -> bool {
        if seq != self.issued || !self.state.is_loading() {
            debug!(panel = self.title, seq, latest = self.issued, "Dropping stale response");
            return false;
        }
        self.state = FetchState::from_result(result);
        if let Some(rows) = self.state.data() {
            self.contacts = rows.clone();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_increments_sequence() {
        let mut panel = Panel::new("Test");
        assert_eq!(panel.begin(), 1);
        assert_eq!(panel.begin(), 2);
        assert_eq!(panel.latest_seq(), 2);
    }

    #[test]
    fn test_resolve_requires_pending_request() {
        let mut panel = Panel::new("Test");
        assert!(!panel.resolve(0, Ok::<_, String>(vec![])));

        let seq = panel.begin();
        assert!(panel.resolve(seq, Ok::<_, String>(vec![])));
        assert!(!panel.resolve(seq, Err("late duplicate")));
        assert_eq!(panel.state().data().map(Vec::len), Some(0));
    }

    #[test]
    fn test_failed_refresh_keeps_previous_rows() {
        let ada = Contact::new(
            core_kernel::ContactId::new("1"),
            "Ada Lovelace",
            "ada@example.com",
            chrono::Utc::now(),
        );
        let mut panel = Panel::new("Test");
        let seq = panel.begin();
        panel.resolve(seq, Ok::<_, String>(vec![ada.clone()]));

        let seq = panel.begin();
        assert!(panel.resolve(seq, Err("connection reset")));

        assert_eq!(panel.state().error(), Some("connection reset"));
        assert_eq!(panel.contacts(), [ada].as_slice());
    }
}
