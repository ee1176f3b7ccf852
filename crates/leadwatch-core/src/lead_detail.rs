use crate::error::ApiError;
use crate::model::LeadDetail;
use crate::schedule::{RequestSeq, Ticket};
use tracing::{debug, info, warn};

/// A lookup the caller must issue against the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadRequest {
    pub ticket: Ticket,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeadOutcome {
    Selected,
    Alerted,
    Stale,
}

/// On-demand lookup of one lead, shown as an overlay. Holds at most one
/// selected lead; closing discards it and reopening fetches again.
#[derive(Clone, Debug, Default)]
pub struct LeadDetailFetcher {
    selected: Option<LeadDetail>,
    pending: Option<String>,
    alert: Option<String>,
    lookups: RequestSeq,
}

impl LeadDetailFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&LeadDetail> {
        self.selected.as_ref()
    }

    pub fn pending_email(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Blocking notification raised by a failed lookup.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn request(&mut self, email: &str) -> Option<LeadRequest> {
        let email = email.trim();
        if email.is_empty() {
            return None;
        }
        let ticket = self.lookups.issue();
        debug!(ticket = ticket.value(), email = %email, "Lead lookup started");
        self.pending = Some(email.to_string());
        Some(LeadRequest {
            ticket,
            email: email.to_string(),
        })
    }

    pub fn complete(&mut self, ticket: Ticket, result: Result<LeadDetail, ApiError>) -> LeadOutcome {
        if !self.lookups.complete(ticket) {
            debug!(ticket = ticket.value(), "Discarding stale lead lookup");
            return LeadOutcome::Stale;
        }
        let email = self.pending.take().unwrap_or_default();
        match result {
            Ok(detail) => {
                info!(email = %detail.email, "Lead details loaded");
                self.selected = Some(detail);
                LeadOutcome::Selected
            }
            Err(err) => {
                let detail = err.detail();
                warn!(email = %email, error = %detail, "Error fetching lead details");
                self.alert = Some(format!("Could not fetch lead details: {detail}"));
                LeadOutcome::Alerted
            }
        }
    }

    /// Closes the overlay and forgets any lookup still in flight.
    pub fn close(&mut self) {
        self.selected = None;
        self.pending = None;
        self.lookups.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(email: &str) -> LeadDetail {
        LeadDetail {
            email: email.to_string(),
            ..LeadDetail::default()
        }
    }

    #[test]
    fn empty_email_is_ignored() {
        let mut fetcher = LeadDetailFetcher::new();
        assert!(fetcher.request("").is_none());
        assert!(fetcher.request("   ").is_none());
    }

    #[test]
    fn success_selects_lead() {
        let mut fetcher = LeadDetailFetcher::new();
        let request = fetcher.request("a@b.com").unwrap();
        assert_eq!(request.email, "a@b.com");
        assert_eq!(fetcher.pending_email(), Some("a@b.com"));
        assert_eq!(
            fetcher.complete(request.ticket, Ok(lead("a@b.com"))),
            LeadOutcome::Selected
        );
        assert_eq!(fetcher.selected().map(|l| l.email.as_str()), Some("a@b.com"));
        assert_eq!(fetcher.pending_email(), None);
    }

    #[test]
    fn not_found_raises_alert_and_keeps_selection_unset() {
        let mut fetcher = LeadDetailFetcher::new();
        let request = fetcher.request("a@b.com").unwrap();
        let outcome = fetcher.complete(
            request.ticket,
            Err(ApiError::Envelope("not found".to_string())),
        );
        assert_eq!(outcome, LeadOutcome::Alerted);
        assert!(fetcher.selected().is_none());
        assert!(fetcher.alert().unwrap().contains("not found"));
        fetcher.dismiss_alert();
        assert!(fetcher.alert().is_none());
    }

    #[test]
    fn only_one_lead_is_selected() {
        let mut fetcher = LeadDetailFetcher::new();
        let first = fetcher.request("a@b.com").unwrap();
        fetcher.complete(first.ticket, Ok(lead("a@b.com")));
        let second = fetcher.request("c@d.com").unwrap();
        fetcher.complete(second.ticket, Ok(lead("c@d.com")));
        assert_eq!(fetcher.selected().map(|l| l.email.as_str()), Some("c@d.com"));
    }

    #[test]
    fn close_clears_and_reopen_refetches() {
        let mut fetcher = LeadDetailFetcher::new();
        let request = fetcher.request("a@b.com").unwrap();
        fetcher.complete(request.ticket, Ok(lead("a@b.com")));
        fetcher.close();
        assert!(fetcher.selected().is_none());
        let again = fetcher.request("a@b.com").unwrap();
        assert_ne!(again.ticket, request.ticket);
    }

    #[test]
    fn lookup_finishing_after_close_is_dropped() {
        let mut fetcher = LeadDetailFetcher::new();
        let request = fetcher.request("a@b.com").unwrap();
        fetcher.close();
        assert_eq!(
            fetcher.complete(request.ticket, Ok(lead("a@b.com"))),
            LeadOutcome::Stale
        );
        assert!(fetcher.selected().is_none());
    }
}
