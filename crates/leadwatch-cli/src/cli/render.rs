//! Plain-text renderings for the one-shot commands.

use super::*;

pub(super) fn auth_lines(status: &AuthStatus) -> Vec<String> {
    let mut lines = vec![format!(
        "Authenticated: {}",
        if status.authenticated { "yes" } else { "no" }
    )];
    if let Some(user) = &status.user_info {
        match user.email.as_deref() {
            Some(email) if user.name.is_some() => {
                lines.push(format!("User: {} <{email}>", user.display_name()))
            }
            _ => lines.push(format!("User: {}", user.display_name())),
        }
    }
    if let Some(error) = status.error.as_deref().filter(|error| !error.is_empty()) {
        lines.push(format!("Error: {error}"));
    }
    lines
}

pub(super) fn dashboard_lines(data: &DashboardData) -> Vec<String> {
    let mut lines = vec!["Stats".to_string()];
    for card in present::stat_cards(data.stats.as_ref()) {
        lines.push(format!("  {:<16} {}", card.label, card.value));
    }

    lines.push(String::new());
    lines.push("Service Health".to_string());
    let services = present::service_rows(data);
    if services.is_empty() {
        lines.push("  (none reported)".to_string());
    }
    for row in services {
        let mut line = format!("  {:<16} {}", row.name, row.badge.label);
        if let Some(alert) = row.alert {
            line.push_str(&format!(" (! {alert})"));
        }
        lines.push(line);
    }

    lines.push(String::new());
    lines.push("Trigger Logs".to_string());
    let rows = present::log_rows(&data.trigger_logs);
    if rows.is_empty() {
        lines.push(format!("  {}", present::EMPTY_LOGS_MESSAGE));
    }
    for row in rows {
        let mut parts = vec![format!("{} {}", row.icon.glyph(), row.title)];
        parts.extend(row.lead_email);
        parts.extend(row.lead_name);
        parts.extend(row.lead_type.map(|badge| badge.label));
        parts.push(row.crm.label);
        parts.push(row.timestamp);
        lines.push(format!("  {}", parts.join("  ")));
    }
    lines
}

pub(super) fn lead_lines(lead: &LeadDetail) -> Vec<String> {
    let view = present::lead_detail_view(lead);
    let mut lines = vec![
        format!("Email:      {}", view.email),
        format!("Name:       {}", view.name),
        format!("Company:    {}", view.company),
        format!("Lead Type:  {}", view.lead_type.label),
        format!("CRM Status: {}", view.crm.label),
        format!("Processed:  {}", view.timestamp),
        "Message:".to_string(),
    ];
    lines.extend(view.message.lines().map(|line| format!("  {line}")));
    if let Some(response) = view.crm_response {
        lines.push("CRM Response:".to_string());
        lines.extend(response.lines().map(|line| format!("  {line}")));
    }
    if let Some(error) = view.error_message {
        lines.push(format!("Error: {error}"));
    }
    lines
}
