use super::*;

pub(in crate::tui) fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { index.min(len - 1) }
}

/// Keeps `selected` inside a window of `height` rows starting at `scroll`.
pub(in crate::tui) fn adjust_scroll(
    selected: usize,
    scroll: usize,
    height: usize,
    len: usize,
) -> usize {
    if len == 0 || height == 0 {
        return 0;
    }
    if selected < scroll {
        return selected;
    }
    let last_visible = scroll.saturating_add(height).saturating_sub(1);
    if selected > last_visible {
        return selected.saturating_sub(height - 1);
    }
    scroll.min(len.saturating_sub(height))
}

/// A rect of `percent_x` by `percent_y` centred in `area`.
pub(in crate::tui) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

pub(in crate::tui) fn truncate_with_ellipsis(value: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if value.chars().count() <= max {
        return value.to_string();
    }
    let mut truncated = value.chars().take(max - 1).collect::<String>();
    truncated.push('…');
    truncated
}

/// Splits `value` into pieces of at most `width` characters. Empty input
/// still yields one empty piece so blank lines survive.
pub(in crate::tui) fn wrap_chars(value: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let chars: Vec<char> = value.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
