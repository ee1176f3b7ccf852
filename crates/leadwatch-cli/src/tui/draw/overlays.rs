use super::*;

pub(in crate::tui) fn draw_alert(frame: &mut ratatui::Frame, area: Rect, message: &str) {
    let popup = centered_rect(60, 30, area);
    frame.render_widget(Clear, popup);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )),
        Line::from(""),
        Line::from(vec![bold("[Enter]"), Span::raw(" OK")]),
    ];
    let widget = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(titled_block("Alert"));
    frame.render_widget(widget, popup);
}

const LABEL_WIDTH: usize = 14;

/// Draws the lead popup starting `scroll` lines down and returns the offset
/// actually used once clamped to the content.
pub(in crate::tui) fn draw_lead_detail(
    frame: &mut ratatui::Frame,
    area: Rect,
    lead: &LeadDetail,
    scroll: usize,
) -> usize {
    let popup = centered_rect(80, 80, area);
    frame.render_widget(Clear, popup);
    let width = popup.width.saturating_sub(2) as usize;
    let visible = popup.height.saturating_sub(2) as usize;

    let lines = lead_detail_lines(lead, width);
    let scroll = scroll.min(lines.len().saturating_sub(visible));
    let title = if lines.len() > visible {
        format!(
            "Lead Details {}-{}/{} (Up/Down scroll, Esc to close)",
            scroll + 1,
            (scroll + visible).min(lines.len()),
            lines.len()
        )
    } else {
        "Lead Details (Esc to close)".to_string()
    };
    let body: Vec<Line> = lines.into_iter().skip(scroll).take(visible).collect();
    frame.render_widget(Paragraph::new(body).block(titled_block(&title)), popup);
    scroll
}

/// Lays the lead out pre-wrapped to `width` so scrolling counts real rows.
/// The error message sits above the CRM dump, which can run long.
fn lead_detail_lines(lead: &LeadDetail, width: usize) -> Vec<Line<'static>> {
    let view = present::lead_detail_view(lead);
    let mut lines = Vec::new();

    let value_width = width.saturating_sub(LABEL_WIDTH);
    let mut field = |label: &str, value: &str| {
        for (index, piece) in wrap_chars(value, value_width).into_iter().enumerate() {
            let label = if index == 0 { label } else { "" };
            lines.push(Line::from(vec![
                bold(format!("{label:<LABEL_WIDTH$}")),
                Span::raw(piece),
            ]));
        }
    };
    field("Lead Email", &view.email);
    field("Name", &view.name);
    field("Company", &view.company);
    lines.push(Line::from(vec![
        bold(format!("{:<LABEL_WIDTH$}", "Lead Type")),
        badge_span(&view.lead_type),
        Span::raw("   "),
        bold("CRM Status "),
        badge_span(&view.crm),
    ]));
    lines.push(Line::from(vec![
        bold(format!("{:<LABEL_WIDTH$}", "Timestamp")),
        Span::raw(view.timestamp.clone()),
    ]));

    let indented = |text: &str, style: Style| -> Vec<Line<'static>> {
        text.lines()
            .flat_map(|line| wrap_chars(line, width.saturating_sub(2)))
            .map(|piece| Line::from(Span::styled(format!("  {piece}"), style)))
            .collect()
    };
    lines.push(Line::from(""));
    lines.push(Line::from(bold("Message")));
    lines.extend(indented(&view.message, Style::default()));
    if let Some(error) = &view.error_message {
        lines.push(Line::from(""));
        lines.push(Line::from(bold("Error Message")));
        lines.extend(indented(error, Style::default().fg(Color::Red)));
    }
    if let Some(response) = &view.crm_response {
        lines.push(Line::from(""));
        lines.push(Line::from(bold("CRM Response")));
        lines.extend(indented(response, Style::default().fg(Color::Cyan)));
    }
    lines
}
