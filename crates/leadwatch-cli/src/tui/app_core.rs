use super::*;

impl TuiApp {
    pub(in crate::tui) fn new(
        config: AppConfig,
        backend: Arc<dyn LeadBackend>,
        runtime: Handle,
        log_buffer: LogBuffer,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        Self {
            auth: AuthSession::new(config.auth_poll_interval()),
            dashboard: DashboardSync::new(config.dashboard_poll_interval()),
            lead: LeadDetailFetcher::new(),
            config,
            backend,
            runtime,
            events_tx,
            events_rx,
            log_buffer,
            log_index: 0,
            log_scroll: 0,
            detail_scroll: 0,
            notice: None,
            refreshing_auth: false,
            disconnecting: false,
        }
    }

    pub(in crate::tui) fn mount(&mut self, now: Instant) {
        let ticket = self.auth.mount(now);
        self.start_auth_check(ticket);
    }

    /// Stops both timers and drops anything still in flight.
    pub(in crate::tui) fn unmount(&mut self) {
        self.auth.unmount();
        self.dashboard.unmount();
        self.lead.close();
        info!("Dashboard closed");
    }

    pub(in crate::tui) fn screen(&self) -> Screen<'_> {
        view::screen(&self.auth, &self.dashboard)
    }

    pub(in crate::tui) fn log_rows(&self) -> Vec<LogRow> {
        self.dashboard
            .data()
            .map(|data| present::log_rows(&data.trigger_logs))
            .unwrap_or_default()
    }

    pub(in crate::tui) fn overlay_open(&self) -> bool {
        self.lead.alert().is_some() || self.lead.selected().is_some()
    }

    pub(in crate::tui) fn clamp_log_selection(&mut self) {
        let len = self.log_rows().len();
        self.log_index = clamp_index(self.log_index, len);
    }
}
