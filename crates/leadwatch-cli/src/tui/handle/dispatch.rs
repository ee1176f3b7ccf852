use super::*;

impl TuiApp {
    /// Returns true when the app should exit.
    pub(in crate::tui) fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }
        if self.lead.alert().is_some() {
            self.handle_alert(key);
            return false;
        }
        if self.lead.selected().is_some() {
            self.handle_lead_overlay(key);
            return false;
        }
        if key.code == KeyCode::Char('q') {
            return true;
        }
        match self.screen() {
            Screen::AuthLoading | Screen::DashboardLoading => {}
            Screen::AuthRequired { .. } => self.handle_auth_required(key),
            Screen::DashboardError { .. } => self.handle_dashboard_error(key),
            Screen::DashboardReady { .. } => self.handle_dashboard(key),
        }
        false
    }

    fn handle_alert(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            self.lead.dismiss_alert();
        }
    }

    /// Scroll offsets past the end are clamped on the next draw.
    fn handle_lead_overlay(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.close_lead(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_detail(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_detail(1),
            KeyCode::PageUp => self.scroll_detail(-10),
            KeyCode::PageDown => self.scroll_detail(10),
            KeyCode::Home => self.detail_scroll = 0,
            KeyCode::End => self.detail_scroll = usize::MAX,
            _ => {}
        }
    }

    fn handle_auth_required(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('l') | KeyCode::Enter => self.open_login(),
            KeyCode::Char('c') => self.check_auth_now(),
            _ => {}
        }
    }

    fn handle_dashboard_error(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') | KeyCode::Enter => self.refresh_dashboard(),
            KeyCode::Char('a') => self.start_auth_refresh(),
            KeyCode::Char('d') => self.start_auth_disconnect(),
            _ => {}
        }
    }

    fn handle_dashboard(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_log_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_log_selection(1),
            KeyCode::PageUp => self.move_log_selection(-10),
            KeyCode::PageDown => self.move_log_selection(10),
            KeyCode::Home => self.log_index = 0,
            KeyCode::End => self.log_index = self.log_rows().len().saturating_sub(1),
            KeyCode::Enter => self.open_selected_lead(),
            KeyCode::Char('r') => self.refresh_dashboard(),
            KeyCode::Char('a') => self.start_auth_refresh(),
            KeyCode::Char('d') => self.start_auth_disconnect(),
            KeyCode::Char('c') => self.check_auth_now(),
            KeyCode::Esc => self.notice = None,
            _ => {}
        }
    }
}
