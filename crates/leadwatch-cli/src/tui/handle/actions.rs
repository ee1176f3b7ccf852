use super::*;

impl TuiApp {
    pub(in crate::tui) fn check_auth_now(&mut self) {
        self.notice = None;
        let ticket = self.auth.begin_check();
        self.start_auth_check(ticket);
    }

    pub(in crate::tui) fn refresh_dashboard(&mut self) {
        match self.dashboard.begin_fetch() {
            Some(ticket) => self.start_dashboard_fetch(ticket),
            None => warn!("Dashboard refresh ignored while unauthenticated"),
        }
    }

    pub(in crate::tui) fn open_login(&mut self) {
        let url = self.config.login_url();
        self.notice = Some(match browser::open_url(&url) {
            Ok(()) => format!("Opened {url}. Press c once the login has finished."),
            Err(err) => {
                warn!(error = %err, "Could not open browser");
                format!("Open {url} in a browser, then press c.")
            }
        });
    }

    pub(in crate::tui) fn move_log_selection(&mut self, delta: isize) {
        let len = self.log_rows().len();
        if len == 0 {
            self.log_index = 0;
            return;
        }
        let next = self.log_index.saturating_add_signed(delta);
        self.log_index = clamp_index(next, len);
    }

    /// Rows without a lead email are not clickable.
    pub(in crate::tui) fn open_selected_lead(&mut self) {
        let rows = self.log_rows();
        let Some(email) = rows
            .get(self.log_index)
            .and_then(|row| row.lookup.clone())
        else {
            return;
        };
        if let Some(request) = self.lead.request(&email) {
            self.detail_scroll = 0;
            self.start_lead_fetch(request);
        }
    }

    pub(in crate::tui) fn scroll_detail(&mut self, delta: isize) {
        self.detail_scroll = self.detail_scroll.saturating_add_signed(delta);
    }

    pub(in crate::tui) fn close_lead(&mut self) {
        self.lead.close();
        self.detail_scroll = 0;
    }
}
