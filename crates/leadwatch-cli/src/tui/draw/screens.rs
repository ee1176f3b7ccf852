use super::*;
use leadwatch_core::present::{ServiceRow, icon_tone};

/// Rows kept for the auth and stats panels plus the smallest log list.
const FIXED_DASHBOARD_ROWS: u16 = 4 + 4 + 3;
const SERVICE_COLUMN_MIN_WIDTH: u16 = 40;

pub(in crate::tui) fn draw_loading(frame: &mut ratatui::Frame, area: Rect, message: &str) {
    let widget = Paragraph::new(vec![Line::from(""), Line::from(bold(message.to_string()))])
        .alignment(ratatui::layout::Alignment::Center)
        .block(titled_block("Loading..."));
    frame.render_widget(widget, area);
}

impl TuiApp {
    pub(in crate::tui) fn draw_auth_required(
        &self,
        frame: &mut ratatui::Frame,
        area: Rect,
        error: Option<&str>,
    ) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Authentication Required",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(
                "The backend application's connection to Google services is not yet authenticated.",
            ),
            Line::from("Please initiate the one-time authentication process."),
            Line::from(""),
            Line::from(vec![bold("[l]"), Span::raw(" Authenticate Backend Now")]),
            Line::from(vec![bold("[c]"), Span::raw(" Check Status Again")]),
            Line::from(""),
            Line::from(format!("Login URL: {}", self.config.login_url())),
        ];
        if let Some(error) = error.filter(|error| !error.is_empty()) {
            lines.push(Line::from(Span::styled(
                format!("Last check failed: {error}"),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "(This is a one-time setup. Once authenticated, the backend manages tokens automatically.)",
            Style::default().fg(Color::Gray),
        )));
        let widget = Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(titled_block("Authentication"));
        frame.render_widget(widget, area);
    }

    pub(in crate::tui) fn draw_dashboard_error(
        &self,
        frame: &mut ratatui::Frame,
        area: Rect,
        message: &str,
    ) {
        let lines = vec![
            Line::from(Span::styled(
                "✖ Connection Error",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(message.to_string()),
            Line::from(""),
            Line::from(vec![bold("[r]"), Span::raw(" Try Again")]),
        ];
        let widget = Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(titled_block("Dashboard"));
        frame.render_widget(widget, area);
    }

    pub(in crate::tui) fn draw_dashboard(&mut self, frame: &mut ratatui::Frame, area: Rect) {
        let rows = self.log_rows();
        let services = self
            .dashboard
            .data()
            .map(present::service_rows)
            .unwrap_or_default();
        let wanted = u16::try_from(services.len().max(1))
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let service_height = wanted
            .min(area.height.saturating_sub(FIXED_DASHBOARD_ROWS))
            .max(3);
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(service_height),
                Constraint::Min(3),
            ])
            .split(area);

        let visible = layout[3].height.saturating_sub(2) as usize;
        self.log_index = clamp_index(self.log_index, rows.len());
        self.log_scroll = adjust_scroll(self.log_index, self.log_scroll, visible, rows.len());

        self.draw_auth_panel(frame, layout[0]);
        self.draw_stats(frame, layout[1]);
        draw_services(frame, layout[2], &services);
        self.draw_logs(frame, layout[3], &rows, visible);
    }

    fn draw_auth_panel(&self, frame: &mut ratatui::Frame, area: Rect) {
        let Some(status) = self.auth.status() else {
            return;
        };
        let (icon, summary, tone) = if status.authenticated {
            ("✔", "Connected to Google Services", Color::Green)
        } else {
            ("✖", "Not authenticated (Manual setup required)", Color::Red)
        };
        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{icon} "), Style::default().fg(tone)),
            bold("Authentication Status"),
            Span::raw(format!("  {summary}")),
        ])];
        let mut details = Vec::new();
        if let Some(user) = status.user_info.as_ref().filter(|_| status.authenticated) {
            details.push(Span::raw(format!("User: {}", user.display_name())));
            if let Some(email) = user.email.as_deref().filter(|email| !email.is_empty()) {
                details.push(Span::raw(format!("  Email: {email}")));
            }
        }
        let busy = match (self.refreshing_auth, self.disconnecting) {
            (true, _) => "  refreshing token...",
            (_, true) => "  disconnecting...",
            _ => "",
        };
        details.push(Span::styled(
            busy.to_string(),
            Style::default().fg(Color::Yellow),
        ));
        lines.push(Line::from(details));
        let widget = Paragraph::new(lines).block(titled_block("Auth"));
        frame.render_widget(widget, area);
    }

    fn draw_stats(&self, frame: &mut ratatui::Frame, area: Rect) {
        let stats = self.dashboard.data().and_then(|data| data.stats.as_ref());
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);
        for (card, column) in present::stat_cards(stats).iter().zip(columns.iter()) {
            let value = Span::styled(
                card.value.to_string(),
                Style::default()
                    .fg(tone_color(card.tone))
                    .add_modifier(Modifier::BOLD),
            );
            let widget = Paragraph::new(Line::from(value))
                .alignment(ratatui::layout::Alignment::Center)
                .block(titled_block(card.label));
            frame.render_widget(widget, *column);
        }
    }

    fn draw_logs(&self, frame: &mut ratatui::Frame, area: Rect, rows: &[LogRow], visible: usize) {
        let mut title = vec![Span::raw(format!("Recent Trigger Logs ({})", rows.len()))];
        if let Some(error) = self.dashboard.error() {
            title.push(Span::styled(
                format!(" refresh failed: {error}"),
                Style::default().fg(Color::Red),
            ));
        }
        let block = Block::default().borders(Borders::ALL).title(Line::from(title));
        if rows.is_empty() {
            let widget = Paragraph::new(Span::styled(
                present::EMPTY_LOGS_MESSAGE,
                Style::default().fg(Color::Gray),
            ))
            .block(block);
            frame.render_widget(widget, area);
            return;
        }
        let width = area.width.saturating_sub(2) as usize;
        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(self.log_scroll)
            .take(visible)
            .map(|(index, row)| log_line(row, index == self.log_index, width))
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Renders one entry per service, spilling into extra columns once the rows
/// outgrow the panel height.
fn draw_services(frame: &mut ratatui::Frame, area: Rect, services: &[ServiceRow]) {
    let block = titled_block("Backend Service Health");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if services.is_empty() {
        let widget = Paragraph::new(Span::styled(
            "No services reported.",
            Style::default().fg(Color::Gray),
        ));
        frame.render_widget(widget, inner);
        return;
    }

    let per_column = service_rows_per_column(services.len(), inner);
    let columns = services.len().div_ceil(per_column);
    let constraints = vec![Constraint::Ratio(1, columns as u32); columns];
    let areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);
    for (chunk, column) in services.chunks(per_column).zip(areas.iter()) {
        let lines: Vec<Line> = chunk.iter().map(service_line).collect();
        frame.render_widget(Paragraph::new(lines), *column);
    }
}

/// Picks the row count per column: as many as fit, but never so many columns
/// that each is narrower than `SERVICE_COLUMN_MIN_WIDTH`.
fn service_rows_per_column(count: usize, inner: Rect) -> usize {
    let height = usize::from(inner.height).max(1);
    let max_columns = usize::from(inner.width / SERVICE_COLUMN_MIN_WIDTH).max(1);
    height.max(count.div_ceil(max_columns))
}

fn service_line(row: &ServiceRow) -> Line<'static> {
    let mut spans = vec![
        Span::raw(format!("{:<20} ", row.name)),
        badge_span(&row.badge),
    ];
    if let Some(alert) = &row.alert {
        spans.push(Span::styled(
            format!("  ! {alert}"),
            Style::default().fg(Color::Red),
        ));
    }
    Line::from(spans)
}

fn log_line(row: &LogRow, selected: bool, width: usize) -> Line<'static> {
    let marker = if selected { "› " } else { "  " };
    let mut spans = vec![
        Span::styled(
            marker,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} ", row.icon.glyph()),
            Style::default().fg(tone_color(icon_tone(row.icon))),
        ),
    ];
    let title_style = if selected {
        Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    spans.push(Span::styled(truncate_with_ellipsis(&row.title, 28), title_style));
    if let Some(email) = &row.lead_email {
        spans.push(Span::raw(format!("  {email}")));
    }
    if let Some(name) = &row.lead_name {
        spans.push(Span::styled(
            format!(" ({name})"),
            Style::default().fg(Color::Gray),
        ));
    }
    if let Some(badge) = &row.lead_type {
        spans.push(Span::raw(" "));
        spans.push(badge_span(badge));
    }
    spans.push(Span::raw(" "));
    spans.push(badge_span(&row.crm));
    let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
    if used + row.timestamp.len() + 2 <= width {
        spans.push(Span::styled(
            format!("  {}", row.timestamp),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}
