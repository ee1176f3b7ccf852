use crate::error::ApiError;
use crate::model::{ActionAck, AuthStatus};
use crate::schedule::{PollSchedule, RequestSeq, Ticket};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Tracks whether the backend is authenticated against its upstream services.
///
/// The session never performs I/O itself: `begin_*`/`mount`/`poll_due` hand out
/// tickets for requests the caller must issue, and `complete_*` applies the
/// responses. Only the latest check ticket is applied.
#[derive(Clone, Debug)]
pub struct AuthSession {
    status: Option<AuthStatus>,
    error: Option<String>,
    checks: RequestSeq,
    schedule: PollSchedule,
    mounted: bool,
}

impl AuthSession {
    pub fn new(recheck_interval: Duration) -> Self {
        Self {
            status: None,
            error: None,
            checks: RequestSeq::default(),
            schedule: PollSchedule::new(recheck_interval),
            mounted: false,
        }
    }

    pub fn status(&self) -> Option<&AuthStatus> {
        self.status.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status
            .as_ref()
            .map(|status| status.authenticated)
            .unwrap_or(false)
    }

    /// True until the first check has been answered.
    pub fn initial_check_pending(&self) -> bool {
        self.status.is_none()
    }

    pub fn is_loading(&self) -> bool {
        self.checks.in_flight()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Starts the session: an immediate check plus the periodic re-check.
    pub fn mount(&mut self, now: Instant) -> Ticket {
        self.mounted = true;
        self.schedule.start(now);
        info!(
            interval_secs = self.schedule.interval().as_secs(),
            "Auth session mounted"
        );
        self.begin_check()
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.schedule.stop();
        self.checks.invalidate();
        debug!("Auth session unmounted");
    }

    pub fn begin_check(&mut self) -> Ticket {
        let ticket = self.checks.issue();
        debug!(ticket = ticket.value(), "Auth check started");
        ticket
    }

    /// Returns a check ticket when the re-check interval has elapsed.
    pub fn poll_due(&mut self, now: Instant) -> Option<Ticket> {
        if self.mounted && self.schedule.fire_if_due(now) {
            Some(self.begin_check())
        } else {
            None
        }
    }

    /// Applies a check response; returns false when the ticket was stale.
    pub fn complete_check(&mut self, ticket: Ticket, result: Result<AuthStatus, ApiError>) -> bool {
        if !self.checks.complete(ticket) {
            debug!(ticket = ticket.value(), "Discarding stale auth check");
            return false;
        }
        match result {
            Ok(status) => {
                info!(authenticated = status.authenticated, "Auth status checked");
                self.status = Some(status);
                self.error = None;
            }
            Err(err) => {
                warn!(error = %err, "Auth check failed");
                self.error = Some(err.auth_message());
                self.status = Some(AuthStatus::failed(err.to_string()));
            }
        }
        true
    }

    /// Applies a refresh response. A confirmed refresh yields the ticket of
    /// the follow-up check; failures are only logged.
    pub fn complete_refresh(&mut self, result: Result<ActionAck, ApiError>) -> Option<Ticket> {
        match result {
            Ok(ack) if ack.success => {
                info!("Auth refreshed");
                Some(self.begin_check())
            }
            Ok(_) => {
                debug!("Auth refresh not confirmed by backend");
                None
            }
            Err(err) => {
                warn!(error = %err, "Failed to refresh auth");
                None
            }
        }
    }

    /// Applies a disconnect response; a confirmed disconnect drops
    /// authentication immediately and discards any in-flight check.
    pub fn complete_disconnect(&mut self, result: Result<ActionAck, ApiError>) -> bool {
        match result {
            Ok(ack) if ack.success => {
                info!("Auth disconnected");
                self.checks.invalidate();
                self.status = Some(AuthStatus::unauthenticated());
                true
            }
            Ok(_) => {
                debug!("Auth disconnect not confirmed by backend");
                false
            }
            Err(err) => {
                warn!(error = %err, "Failed to disconnect");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorBody;
    use crate::model::UserInfo;

    fn session() -> AuthSession {
        AuthSession::new(Duration::from_secs(300))
    }

    fn connected() -> AuthStatus {
        AuthStatus {
            authenticated: true,
            user_info: Some(UserInfo {
                name: Some("Ops".to_string()),
                email: Some("ops@example.com".to_string()),
            }),
            error: None,
        }
    }

    #[test]
    fn mount_issues_initial_check() {
        let mut auth = session();
        assert!(auth.initial_check_pending());
        let ticket = auth.mount(Instant::now());
        assert!(auth.is_loading());
        assert!(auth.complete_check(ticket, Ok(connected())));
        assert!(!auth.is_loading());
        assert!(!auth.initial_check_pending());
        assert!(auth.is_authenticated());
    }

    #[test]
    fn failed_check_sets_error_and_unauthenticated() {
        let mut auth = session();
        let ticket = auth.mount(Instant::now());
        let err = ApiError::Status {
            status: 500,
            body: ErrorBody {
                detail: None,
                error: Some("oauth broken".to_string()),
            },
        };
        auth.complete_check(ticket, Err(err));
        assert!(!auth.is_authenticated());
        assert_eq!(auth.error(), Some("oauth broken"));
        assert_eq!(
            auth.status().and_then(|status| status.error.as_deref()),
            Some("Request failed with status code 500")
        );
    }

    #[test]
    fn success_clears_previous_error() {
        let mut auth = session();
        let ticket = auth.mount(Instant::now());
        auth.complete_check(ticket, Err(ApiError::Transport("down".to_string())));
        assert_eq!(auth.error(), Some("down"));
        let ticket = auth.begin_check();
        auth.complete_check(ticket, Ok(connected()));
        assert_eq!(auth.error(), None);
    }

    #[test]
    fn repeated_checks_are_idempotent() {
        let mut auth = session();
        let ticket = auth.mount(Instant::now());
        auth.complete_check(ticket, Ok(connected()));
        let first = auth.status().cloned();
        let ticket = auth.begin_check();
        assert!(auth.is_authenticated());
        assert!(!auth.initial_check_pending());
        auth.complete_check(ticket, Ok(connected()));
        assert_eq!(auth.status().cloned(), first);
        assert!(auth.is_authenticated());
    }

    #[test]
    fn stale_check_is_discarded() {
        let mut auth = session();
        let first = auth.mount(Instant::now());
        let second = auth.begin_check();
        assert!(auth.complete_check(second, Ok(connected())));
        assert!(!auth.complete_check(first, Ok(AuthStatus::unauthenticated())));
        assert!(auth.is_authenticated());
    }

    #[test]
    fn refresh_success_triggers_check() {
        let mut auth = session();
        let ticket = auth.mount(Instant::now());
        auth.complete_check(ticket, Ok(connected()));
        let follow_up = auth.complete_refresh(Ok(ActionAck { success: true }));
        assert!(follow_up.is_some());
        assert!(auth.is_loading());
    }

    #[test]
    fn refresh_failure_is_silent() {
        let mut auth = session();
        let ticket = auth.mount(Instant::now());
        auth.complete_check(ticket, Ok(connected()));
        assert!(
            auth.complete_refresh(Err(ApiError::Transport("timeout".to_string())))
                .is_none()
        );
        assert!(auth.complete_refresh(Ok(ActionAck { success: false })).is_none());
        assert_eq!(auth.error(), None);
        assert!(auth.is_authenticated());
    }

    #[test]
    fn disconnect_drops_auth_immediately() {
        let mut auth = session();
        let ticket = auth.mount(Instant::now());
        auth.complete_check(ticket, Ok(connected()));
        let pending = auth.begin_check();
        assert!(auth.complete_disconnect(Ok(ActionAck { success: true })));
        assert_eq!(auth.status(), Some(&AuthStatus::unauthenticated()));
        assert!(!auth.complete_check(pending, Ok(connected())));
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn unconfirmed_disconnect_keeps_status() {
        let mut auth = session();
        let ticket = auth.mount(Instant::now());
        auth.complete_check(ticket, Ok(connected()));
        assert!(!auth.complete_disconnect(Ok(ActionAck { success: false })));
        assert!(auth.is_authenticated());
    }

    #[test]
    fn periodic_recheck_follows_interval() {
        let start = Instant::now();
        let mut auth = session();
        let ticket = auth.mount(start);
        auth.complete_check(ticket, Ok(connected()));
        assert!(auth.poll_due(start + Duration::from_secs(10)).is_none());
        assert!(auth.poll_due(start + Duration::from_secs(300)).is_some());
        auth.unmount();
        assert!(auth.poll_due(start + Duration::from_secs(900)).is_none());
    }
}
