use super::*;

impl TuiApp {
    pub(in crate::tui) fn poll_job_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_job_event(event);
        }
    }

    fn apply_job_event(&mut self, event: JobEvent) {
        match event {
            JobEvent::AuthChecked { ticket, result } => {
                self.auth.complete_check(ticket, result);
            }
            JobEvent::AuthRefreshed(result) => {
                self.refreshing_auth = false;
                if let Some(ticket) = self.auth.complete_refresh(result) {
                    self.notice = Some("Token refreshed.".to_string());
                    self.start_auth_check(ticket);
                }
            }
            JobEvent::AuthDisconnected(result) => {
                self.disconnecting = false;
                if self.auth.complete_disconnect(result) {
                    self.notice = Some("Disconnected from backend.".to_string());
                    self.lead.close();
                }
            }
            JobEvent::DashboardFetched { ticket, result } => {
                if self.dashboard.complete_fetch(ticket, result) {
                    self.clamp_log_selection();
                }
            }
            JobEvent::LeadFetched { ticket, result } => {
                if self.lead.complete(ticket, result) == LeadOutcome::Stale {
                    debug!(ticket = ticket.value(), "Lead response arrived after close");
                }
            }
        }
    }

    /// Fires due timers and lets the dashboard follow the auth gate.
    pub(in crate::tui) fn tick(&mut self, now: Instant) {
        if let Some(ticket) = self.auth.poll_due(now) {
            self.start_auth_check(ticket);
        }
        if let Some(ticket) = self.dashboard.sync_with_auth(&self.auth, now) {
            self.start_dashboard_fetch(ticket);
        }
        if let Some(ticket) = self.dashboard.poll_due(now) {
            self.start_dashboard_fetch(ticket);
        }
    }
}
