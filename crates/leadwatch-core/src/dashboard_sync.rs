use crate::auth_session::AuthSession;
use crate::error::ApiError;
use crate::model::DashboardData;
use crate::schedule::{PollSchedule, RequestSeq, Ticket};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Keeps the aggregate dashboard snapshot in sync while the backend is
/// authenticated.
#[derive(Clone, Debug)]
pub struct DashboardSync {
    data: Option<DashboardData>,
    error: Option<String>,
    fetches: RequestSeq,
    schedule: PollSchedule,
    active: bool,
}

impl DashboardSync {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            data: None,
            error: None,
            fetches: RequestSeq::default(),
            schedule: PollSchedule::new(poll_interval),
            active: false,
        }
    }

    pub fn data(&self) -> Option<&DashboardData> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.fetches.in_flight()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Follows the auth gate: activating fetches immediately and arms the
    /// poll interval, deactivating stops it. Returns the ticket of a fetch
    /// the caller must issue.
    pub fn sync_with_auth(&mut self, auth: &AuthSession, now: Instant) -> Option<Ticket> {
        let allowed = auth.is_authenticated() && !auth.initial_check_pending();
        match (self.active, allowed) {
            (false, true) => {
                self.active = true;
                self.schedule.start(now);
                info!(
                    interval_secs = self.schedule.interval().as_secs(),
                    "Dashboard polling started"
                );
                Some(self.issue())
            }
            (true, false) => {
                self.deactivate();
                None
            }
            _ => None,
        }
    }

    /// Manual fetch; refused while polling is inactive.
    pub fn begin_fetch(&mut self) -> Option<Ticket> {
        if !self.active {
            debug!("Dashboard fetch skipped while unauthenticated");
            return None;
        }
        Some(self.issue())
    }

    pub fn poll_due(&mut self, now: Instant) -> Option<Ticket> {
        if self.active && self.schedule.fire_if_due(now) {
            Some(self.issue())
        } else {
            None
        }
    }

    /// Applies a fetch response; returns false when the ticket was stale.
    pub fn complete_fetch(
        &mut self,
        ticket: Ticket,
        result: Result<DashboardData, ApiError>,
    ) -> bool {
        if !self.fetches.complete(ticket) {
            debug!(ticket = ticket.value(), "Discarding stale dashboard fetch");
            return false;
        }
        match result {
            Ok(data) => {
                info!(
                    services = data.service_health.len(),
                    logs = data.trigger_logs.len(),
                    "Dashboard data refreshed"
                );
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => {
                let message = err.detail();
                warn!(error = %message, has_data = self.data.is_some(), "Error fetching dashboard data");
                self.error = Some(message);
            }
        }
        true
    }

    pub fn unmount(&mut self) {
        self.deactivate();
    }

    fn issue(&mut self) -> Ticket {
        let ticket = self.fetches.issue();
        debug!(ticket = ticket.value(), "Dashboard fetch started");
        ticket
    }

    fn deactivate(&mut self) {
        if self.active {
            info!("Dashboard polling stopped");
        }
        self.active = false;
        self.schedule.stop();
        self.fetches.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ActionAck, AuthStatus, Stats};

    fn authed(now: Instant) -> AuthSession {
        let mut auth = AuthSession::new(Duration::from_secs(300));
        let ticket = auth.mount(now);
        auth.complete_check(
            ticket,
            Ok(AuthStatus {
                authenticated: true,
                ..AuthStatus::default()
            }),
        );
        auth
    }

    fn sample(total: u64) -> DashboardData {
        DashboardData {
            stats: Some(Stats {
                total_processed: Some(total),
                ..Stats::default()
            }),
            ..DashboardData::default()
        }
    }

    #[test]
    fn no_fetch_before_initial_check() {
        let now = Instant::now();
        let mut auth = AuthSession::new(Duration::from_secs(300));
        let _ = auth.mount(now);
        let mut sync = DashboardSync::new(Duration::from_secs(300));
        assert!(sync.sync_with_auth(&auth, now).is_none());
        assert!(sync.begin_fetch().is_none());
        assert!(sync.poll_due(now + Duration::from_secs(600)).is_none());
    }

    #[test]
    fn no_fetch_while_unauthenticated() {
        let now = Instant::now();
        let mut auth = AuthSession::new(Duration::from_secs(300));
        let ticket = auth.mount(now);
        auth.complete_check(ticket, Ok(AuthStatus::unauthenticated()));
        let mut sync = DashboardSync::new(Duration::from_secs(300));
        assert!(sync.sync_with_auth(&auth, now).is_none());
        assert!(sync.begin_fetch().is_none());
    }

    #[test]
    fn activation_fetches_immediately_and_polls() {
        let now = Instant::now();
        let auth = authed(now);
        let mut sync = DashboardSync::new(Duration::from_secs(300));
        let ticket = sync.sync_with_auth(&auth, now).unwrap();
        assert!(sync.is_loading());
        assert!(sync.complete_fetch(ticket, Ok(sample(5))));
        assert_eq!(sync.data(), Some(&sample(5)));
        assert!(sync.sync_with_auth(&auth, now).is_none());
        assert!(sync.poll_due(now + Duration::from_secs(299)).is_none());
        assert!(sync.poll_due(now + Duration::from_secs(300)).is_some());
    }

    #[test]
    fn failure_keeps_previous_data() {
        let now = Instant::now();
        let auth = authed(now);
        let mut sync = DashboardSync::new(Duration::from_secs(300));
        let ticket = sync.sync_with_auth(&auth, now).unwrap();
        sync.complete_fetch(ticket, Ok(sample(5)));
        let ticket = sync.begin_fetch().unwrap();
        sync.complete_fetch(ticket, Err(ApiError::Envelope("backend busy".to_string())));
        assert_eq!(sync.error(), Some("backend busy"));
        assert_eq!(sync.data(), Some(&sample(5)));
        let ticket = sync.begin_fetch().unwrap();
        sync.complete_fetch(ticket, Ok(sample(6)));
        assert_eq!(sync.error(), None);
        assert_eq!(sync.data(), Some(&sample(6)));
    }

    #[test]
    fn newer_fetch_wins_over_older_response() {
        let now = Instant::now();
        let auth = authed(now);
        let mut sync = DashboardSync::new(Duration::from_secs(300));
        let older = sync.sync_with_auth(&auth, now).unwrap();
        let newer = sync.begin_fetch().unwrap();
        assert!(sync.complete_fetch(newer, Ok(sample(2))));
        assert!(!sync.complete_fetch(older, Ok(sample(1))));
        assert_eq!(sync.data(), Some(&sample(2)));
    }

    #[test]
    fn losing_auth_stops_polling_and_discards_in_flight() {
        let now = Instant::now();
        let mut auth = authed(now);
        let mut sync = DashboardSync::new(Duration::from_secs(300));
        let ticket = sync.sync_with_auth(&auth, now).unwrap();
        auth.complete_disconnect(Ok(ActionAck { success: true }));
        assert!(sync.sync_with_auth(&auth, now).is_none());
        assert!(!sync.is_active());
        assert!(!sync.complete_fetch(ticket, Ok(sample(9))));
        assert!(sync.data().is_none());
        assert!(sync.poll_due(now + Duration::from_secs(900)).is_none());
    }

    #[test]
    fn unmount_discards_late_results() {
        let now = Instant::now();
        let auth = authed(now);
        let mut sync = DashboardSync::new(Duration::from_secs(300));
        let ticket = sync.sync_with_auth(&auth, now).unwrap();
        sync.unmount();
        assert!(!sync.complete_fetch(ticket, Ok(sample(1))));
        assert!(!sync.is_loading());
    }
}
