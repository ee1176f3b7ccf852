use super::*;

pub(in crate::tui) fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Green => Color::Green,
        Tone::Yellow => Color::Yellow,
        Tone::Red => Color::Red,
        Tone::Blue => Color::Blue,
        Tone::Gray => Color::Gray,
    }
}

pub(in crate::tui) fn badge_span(badge: &Badge) -> Span<'static> {
    Span::styled(
        format!("[{}]", badge.label),
        Style::default().fg(tone_color(badge.tone)),
    )
}

pub(in crate::tui) fn bold(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().add_modifier(Modifier::BOLD))
}

pub(in crate::tui) fn titled_block(title: &str) -> Block<'_> {
    Block::default().borders(Borders::ALL).title(title)
}
