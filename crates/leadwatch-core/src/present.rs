//! Display attributes for dashboard data.
//!
//! Every status-like value maps through a `match` on its enum, with the
//! `Other` arm (or a missing value) as the single fallback, so no value can
//! end up without a tone.

use crate::model::{
    CrmStatus, DashboardData, LeadDetail, LeadType, ServiceState, ServiceStatus, Stats,
    TriggerLog, TriggerStatus,
};
use crate::timestamp::{format_timestamp, newest_first};

pub const EMPTY_LOGS_MESSAGE: &str = "No trigger logs available. Start sending leads!";
pub const DEFAULT_LOG_TITLE: &str = "Webhook Received";
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    Green,
    Yellow,
    Red,
    Blue,
    Gray,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusIcon {
    Check,
    Clock,
    Cross,
    Alert,
}

impl StatusIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            StatusIcon::Check => "✔",
            StatusIcon::Clock => "◷",
            StatusIcon::Cross => "✖",
            StatusIcon::Alert => "!",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

pub fn service_tone(status: Option<&ServiceStatus>) -> Tone {
    match status {
        Some(ServiceStatus::Healthy) | Some(ServiceStatus::Authenticated) => Tone::Green,
        Some(ServiceStatus::Warning) => Tone::Yellow,
        Some(ServiceStatus::Other(_)) | None => Tone::Red,
    }
}

pub fn trigger_icon(status: Option<&TriggerStatus>) -> StatusIcon {
    match status {
        Some(TriggerStatus::Completed) => StatusIcon::Check,
        Some(TriggerStatus::Processing) => StatusIcon::Clock,
        Some(TriggerStatus::Failed) => StatusIcon::Cross,
        Some(TriggerStatus::Other(_)) | None => StatusIcon::Alert,
    }
}

pub fn icon_tone(icon: StatusIcon) -> Tone {
    match icon {
        StatusIcon::Check => Tone::Green,
        StatusIcon::Clock => Tone::Yellow,
        StatusIcon::Cross => Tone::Red,
        StatusIcon::Alert => Tone::Gray,
    }
}

pub fn lead_type_tone(lead_type: Option<&LeadType>) -> Tone {
    match lead_type {
        Some(LeadType::Hot) => Tone::Red,
        Some(LeadType::Cold) => Tone::Blue,
        Some(LeadType::Spam) => Tone::Gray,
        Some(LeadType::Other(_)) | None => Tone::Yellow,
    }
}

/// CRM badge tone in the log list.
pub fn crm_tone(status: Option<&CrmStatus>) -> Tone {
    match status {
        Some(CrmStatus::Success) => Tone::Green,
        Some(CrmStatus::Failed) => Tone::Red,
        Some(CrmStatus::Pending) | Some(CrmStatus::Other(_)) | None => Tone::Gray,
    }
}

/// CRM badge tone in the lead detail overlay, where pending is highlighted.
pub fn crm_detail_tone(status: Option<&CrmStatus>) -> Tone {
    match status {
        Some(CrmStatus::Pending) => Tone::Yellow,
        other => crm_tone(other),
    }
}

pub fn crm_label(status: Option<&CrmStatus>) -> String {
    status
        .map(|status| status.as_str().to_string())
        .unwrap_or_else(|| "Pending".to_string())
}

/// `mail_sync` -> `Mail Sync`.
pub fn display_service_name(key: &str) -> String {
    key.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: u64,
    pub tone: Tone,
}

pub fn stat_cards(stats: Option<&Stats>) -> [StatCard; 4] {
    let stats = stats.cloned().unwrap_or_default();
    [
        StatCard {
            label: "Total Processed",
            value: stats.total_processed.unwrap_or(0),
            tone: Tone::Blue,
        },
        StatCard {
            label: "Completed",
            value: stats.completed.unwrap_or(0),
            tone: Tone::Green,
        },
        StatCard {
            label: "Processing",
            value: stats.processing.unwrap_or(0),
            tone: Tone::Yellow,
        },
        StatCard {
            label: "Failed",
            value: stats.failed.unwrap_or(0),
            tone: Tone::Red,
        },
    ]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceRow {
    pub key: String,
    pub name: String,
    pub badge: Badge,
    /// Tooltip text for the alert marker.
    pub alert: Option<String>,
}

pub fn service_row(key: &str, state: &ServiceState) -> ServiceRow {
    ServiceRow {
        key: key.to_string(),
        name: display_service_name(key),
        badge: Badge {
            label: state
                .status
                .as_ref()
                .map(|status| status.as_str().to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            tone: service_tone(state.status.as_ref()),
        },
        alert: state
            .error_message
            .clone()
            .filter(|message| !message.is_empty()),
    }
}

pub fn service_rows(data: &DashboardData) -> Vec<ServiceRow> {
    data.service_health
        .iter()
        .map(|(key, state)| service_row(key, state))
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRow {
    pub icon: StatusIcon,
    pub title: String,
    pub lead_email: Option<String>,
    pub lead_name: Option<String>,
    /// Omitted when the log has no lead type.
    pub lead_type: Option<Badge>,
    pub crm: Badge,
    pub timestamp: String,
    /// Email to look up when the row is activated.
    pub lookup: Option<String>,
}

impl LogRow {
    pub fn is_clickable(&self) -> bool {
        self.lookup.is_some()
    }
}

pub fn log_row(log: &TriggerLog) -> LogRow {
    LogRow {
        icon: trigger_icon(log.status.as_ref()),
        title: log
            .kind
            .clone()
            .filter(|kind| !kind.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_TITLE.to_string()),
        lead_email: log.lead_email.clone().filter(|email| !email.is_empty()),
        lead_name: log.lead_name.clone().filter(|name| !name.is_empty()),
        lead_type: log.lead_type.as_ref().map(|lead_type| Badge {
            label: format!("{lead_type} Lead"),
            tone: lead_type_tone(Some(lead_type)),
        }),
        crm: Badge {
            label: format!("CRM: {}", crm_label(log.crm_status.as_ref())),
            tone: crm_tone(log.crm_status.as_ref()),
        },
        timestamp: format_timestamp(log.timestamp.as_deref()),
        lookup: log.lookup_email().map(str::to_string),
    }
}

/// Logs newest first; a stable sort, so equal timestamps keep backend order.
pub fn sorted_logs(logs: &[TriggerLog]) -> Vec<&TriggerLog> {
    let mut sorted: Vec<&TriggerLog> = logs.iter().collect();
    sorted.sort_by(|a, b| newest_first(a.timestamp.as_deref(), b.timestamp.as_deref()));
    sorted
}

pub fn log_rows(logs: &[TriggerLog]) -> Vec<LogRow> {
    sorted_logs(logs).into_iter().map(log_row).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadDetailView {
    pub email: String,
    pub name: String,
    pub company: String,
    pub message: String,
    pub lead_type: Badge,
    pub crm: Badge,
    pub timestamp: String,
    pub crm_response: Option<String>,
    pub error_message: Option<String>,
}

fn text_or_na(value: Option<&String>) -> String {
    value
        .filter(|value| !value.is_empty())
        .cloned()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn lead_detail_view(lead: &LeadDetail) -> LeadDetailView {
    LeadDetailView {
        email: lead.email.clone(),
        name: text_or_na(lead.name.as_ref()),
        company: text_or_na(lead.company.as_ref()),
        message: text_or_na(lead.message.as_ref()),
        lead_type: Badge {
            label: lead
                .lead_type
                .as_ref()
                .map(|lead_type| lead_type.as_str().to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            tone: lead_type_tone(lead.lead_type.as_ref()),
        },
        crm: Badge {
            label: crm_label(lead.crm_status.as_ref()),
            tone: crm_detail_tone(lead.crm_status.as_ref()),
        },
        timestamp: format_timestamp(lead.timestamp.as_deref()),
        crm_response: lead
            .crm_response
            .as_ref()
            .and_then(|response| serde_json::to_string_pretty(response).ok()),
        error_message: lead
            .error_message
            .clone()
            .filter(|message| !message.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn log_at(id: u64, timestamp: &str) -> TriggerLog {
        TriggerLog {
            id: Some(json!(id)),
            timestamp: Some(timestamp.to_string()),
            ..TriggerLog::default()
        }
    }

    fn ids(logs: &[&TriggerLog]) -> Vec<u64> {
        logs.iter()
            .map(|log| log.id.as_ref().and_then(|id| id.as_u64()).unwrap())
            .collect()
    }

    #[test]
    fn empty_stats_default_to_zero() {
        let data: DashboardData = serde_json::from_value(json!({"stats": {}})).unwrap();
        let cards = stat_cards(data.stats.as_ref());
        assert!(cards.iter().all(|card| card.value == 0));
        assert!(stat_cards(None).iter().all(|card| card.value == 0));
    }

    #[test]
    fn logs_sort_newest_first() {
        let logs = vec![
            log_at(2, "2024-01-02T00:00:00Z"),
            log_at(1, "2024-01-01T00:00:00Z"),
            log_at(3, "2024-01-03T00:00:00Z"),
        ];
        assert_eq!(ids(&sorted_logs(&logs)), vec![3, 2, 1]);
    }

    #[test]
    fn equal_timestamps_keep_backend_order() {
        let logs = vec![
            log_at(1, "2024-01-01T00:00:00Z"),
            log_at(2, "2024-01-05T00:00:00Z"),
            log_at(3, "2024-01-01T00:00:00Z"),
            log_at(4, "not a date"),
        ];
        assert_eq!(ids(&sorted_logs(&logs)), vec![2, 1, 3, 4]);
    }

    #[test]
    fn service_tone_table_is_total() {
        let cases = [
            (Some(ServiceStatus::Healthy), Tone::Green),
            (Some(ServiceStatus::Authenticated), Tone::Green),
            (Some(ServiceStatus::Warning), Tone::Yellow),
            (Some(ServiceStatus::from("degraded")), Tone::Red),
            (None, Tone::Red),
        ];
        for (status, tone) in cases {
            assert_eq!(service_tone(status.as_ref()), tone, "{status:?}");
        }
    }

    #[test]
    fn trigger_icon_table_is_total() {
        let cases = [
            (Some(TriggerStatus::Completed), StatusIcon::Check),
            (Some(TriggerStatus::Processing), StatusIcon::Clock),
            (Some(TriggerStatus::Failed), StatusIcon::Cross),
            (Some(TriggerStatus::from("queued")), StatusIcon::Alert),
            (None, StatusIcon::Alert),
        ];
        for (status, icon) in cases {
            assert_eq!(trigger_icon(status.as_ref()), icon, "{status:?}");
        }
    }

    #[test]
    fn lead_and_crm_tone_tables_are_total() {
        assert_eq!(lead_type_tone(Some(&LeadType::Hot)), Tone::Red);
        assert_eq!(lead_type_tone(Some(&LeadType::Cold)), Tone::Blue);
        assert_eq!(lead_type_tone(Some(&LeadType::Spam)), Tone::Gray);
        assert_eq!(lead_type_tone(Some(&LeadType::from("warm"))), Tone::Yellow);
        assert_eq!(lead_type_tone(None), Tone::Yellow);

        assert_eq!(crm_tone(Some(&CrmStatus::Success)), Tone::Green);
        assert_eq!(crm_tone(Some(&CrmStatus::Failed)), Tone::Red);
        assert_eq!(crm_tone(Some(&CrmStatus::Pending)), Tone::Gray);
        assert_eq!(crm_tone(None), Tone::Gray);
        assert_eq!(crm_detail_tone(Some(&CrmStatus::Pending)), Tone::Yellow);
        assert_eq!(crm_detail_tone(Some(&CrmStatus::from("queued"))), Tone::Gray);
    }

    #[test]
    fn service_names_are_humanised() {
        assert_eq!(display_service_name("crm"), "Crm");
        assert_eq!(display_service_name("mail_sync"), "Mail Sync");
        assert_eq!(display_service_name("google-oauth_token"), "Google Oauth Token");
    }

    #[test]
    fn service_row_carries_alert() {
        let state = ServiceState {
            status: Some(ServiceStatus::from("error")),
            error_message: Some("token revoked".to_string()),
        };
        let row = service_row("gmail", &state);
        assert_eq!(row.badge.tone, Tone::Red);
        assert_eq!(row.badge.label, "error");
        assert_eq!(row.alert.as_deref(), Some("token revoked"));
    }

    #[test]
    fn dashboard_scenario_renders_cards_health_and_empty_logs() {
        let data: DashboardData = serde_json::from_value(json!({
            "stats": {"total_processed": 5, "completed": 3, "processing": 1, "failed": 1},
            "service_health": {"crm": {"status": "healthy"}},
            "trigger_logs": []
        }))
        .unwrap();
        let values: Vec<u64> = stat_cards(data.stats.as_ref())
            .iter()
            .map(|card| card.value)
            .collect();
        assert_eq!(values, vec![5, 3, 1, 1]);
        let services = service_rows(&data);
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].key, "crm");
        assert_eq!(services[0].badge.label, "healthy");
        assert_eq!(services[0].badge.tone, Tone::Green);
        assert!(log_rows(&data.trigger_logs).is_empty());
    }

    #[test]
    fn log_row_defaults() {
        let row = log_row(&TriggerLog::default());
        assert_eq!(row.title, DEFAULT_LOG_TITLE);
        assert_eq!(row.icon, StatusIcon::Alert);
        assert!(row.lead_type.is_none());
        assert_eq!(row.crm.label, "CRM: Pending");
        assert_eq!(row.crm.tone, Tone::Gray);
        assert_eq!(row.timestamp, "N/A");
        assert!(!row.is_clickable());
    }

    #[test]
    fn log_row_with_lead() {
        let log: TriggerLog = serde_json::from_value(json!({
            "type": "Form Submission",
            "status": "completed",
            "lead_email": "a@b.com",
            "lead_name": "Ada",
            "lead_type": "hot",
            "crm_status": "success",
            "timestamp": "2024-05-01T12:30:00Z"
        }))
        .unwrap();
        let row = log_row(&log);
        assert_eq!(row.icon, StatusIcon::Check);
        assert_eq!(
            row.lead_type,
            Some(Badge {
                label: "hot Lead".to_string(),
                tone: Tone::Red
            })
        );
        assert_eq!(row.crm.label, "CRM: success");
        assert_eq!(row.timestamp, "2024-05-01 12:30:00 UTC");
        assert_eq!(row.lookup.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn detail_view_fills_missing_fields() {
        let lead = LeadDetail {
            email: "a@b.com".to_string(),
            crm_response: Some(json!({"id": 42})),
            error_message: Some("CRM rejected".to_string()),
            ..LeadDetail::default()
        };
        let view = lead_detail_view(&lead);
        assert_eq!(view.name, NOT_AVAILABLE);
        assert_eq!(view.company, NOT_AVAILABLE);
        assert_eq!(view.message, NOT_AVAILABLE);
        assert_eq!(view.lead_type.label, "Unknown");
        assert_eq!(view.lead_type.tone, Tone::Yellow);
        assert_eq!(view.crm.label, "Pending");
        assert_eq!(view.crm_response.as_deref(), Some("{\n  \"id\": 42\n}"));
        assert_eq!(view.error_message.as_deref(), Some("CRM rejected"));
    }
}
