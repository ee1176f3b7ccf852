use super::*;
use tracing::Level;

impl TuiApp {
    pub(in crate::tui) fn draw(&mut self, frame: &mut ratatui::Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(LOG_PANEL_HEIGHT),
                Constraint::Length(3),
            ])
            .split(frame.size());

        self.draw_header(frame, layout[0]);

        let mut ready = false;
        match self.screen() {
            Screen::AuthLoading => draw_loading(frame, layout[1], "Checking authentication..."),
            Screen::AuthRequired { error } => self.draw_auth_required(frame, layout[1], error),
            Screen::DashboardLoading => draw_loading(frame, layout[1], "Loading dashboard..."),
            Screen::DashboardError { message } => {
                self.draw_dashboard_error(frame, layout[1], message)
            }
            Screen::DashboardReady { .. } => ready = true,
        }
        if ready {
            self.draw_dashboard(frame, layout[1]);
        }

        self.draw_log_panel(frame, layout[2]);

        let footer = Paragraph::new(self.footer_text()).block(titled_block("Help"));
        frame.render_widget(footer, layout[3]);

        let full = frame.size();
        if let Some(alert) = self.lead.alert() {
            draw_alert(frame, full, alert);
        } else if let Some(lead) = self.lead.selected() {
            self.detail_scroll = draw_lead_detail(frame, full, lead, self.detail_scroll);
        }
    }

    fn draw_header(&self, frame: &mut ratatui::Frame, area: Rect) {
        let mut spans = vec![
            bold("Lead Processing Dashboard"),
            Span::raw("  Monitor incoming leads and processing status"),
        ];
        let activity = if self.dashboard.is_loading() {
            Some("refreshing data...")
        } else if self.auth.is_loading() {
            Some("checking auth...")
        } else if self.lead.pending_email().is_some() {
            Some("loading lead...")
        } else {
            None
        };
        if let Some(activity) = activity {
            spans.push(Span::styled(
                format!("  [{activity}]"),
                Style::default().fg(Color::Yellow),
            ));
        }
        let title = format!("{} ({})", self.config.base_url, self.config.environment);
        let header = Paragraph::new(Line::from(spans)).block(titled_block(&title));
        frame.render_widget(header, area);
    }

    pub(in crate::tui) fn footer_text(&self) -> String {
        let keys = if self.lead.alert().is_some() {
            "Enter/Esc: dismiss"
        } else if self.lead.selected().is_some() {
            "Up/Down/PgUp/PgDn: scroll | Esc: close details"
        } else {
            match self.screen() {
                Screen::AuthLoading | Screen::DashboardLoading => "q: quit",
                Screen::AuthRequired { .. } => "l: authenticate backend | c: check status again | q: quit",
                Screen::DashboardError { .. } => {
                    "r: try again | a: refresh auth | d: disconnect | q: quit"
                }
                Screen::DashboardReady { .. } => {
                    "Up/Down: select | Enter: lead details | r: refresh data | a: refresh auth | d: disconnect | c: check auth | q: quit"
                }
            }
        };
        match &self.notice {
            Some(notice) => format!("{notice} | {keys}"),
            None => keys.to_string(),
        }
    }

    fn draw_log_panel(&self, frame: &mut ratatui::Frame, area: Rect) {
        let max_lines = area.height.saturating_sub(LOG_PANEL_BORDER_HEIGHT) as usize;
        if max_lines == 0 {
            return;
        }
        let entries = self.log_buffer.tail(max_lines);
        let lines: Vec<Line> = if entries.is_empty() {
            vec![Line::from("No activity yet.")]
        } else {
            entries
                .iter()
                .map(|entry| {
                    let style = if entry.level == Level::ERROR {
                        Style::default().fg(Color::Red)
                    } else if entry.level == Level::WARN {
                        Style::default().fg(Color::Yellow)
                    } else {
                        Style::default()
                    };
                    Line::from(Span::styled(entry.format_compact(), style))
                })
                .collect()
        };
        let widget = Paragraph::new(lines).block(titled_block("Activity"));
        frame.render_widget(widget, area);
    }
}
