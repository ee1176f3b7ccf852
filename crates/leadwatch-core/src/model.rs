use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Declares a string-backed enum whose unknown values land in `Other`.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $text,)+
                    $name::Other(value) => value.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($text => $name::$variant,)+
                    _ => $name::Other(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(value) => value,
                    other => other.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum!(
    /// Processing outcome of one trigger event.
    TriggerStatus {
        Completed => "completed",
        Processing => "processing",
        Failed => "failed",
    }
);

string_enum!(
    /// Classification assigned to a lead.
    LeadType {
        Hot => "hot",
        Cold => "cold",
        Spam => "spam",
    }
);

string_enum!(
    /// CRM synchronization state of a lead.
    CrmStatus {
        Success => "success",
        Failed => "failed",
        Pending => "pending",
    }
);

string_enum!(
    /// Health reported for one backend dependency.
    ServiceStatus {
        Healthy => "healthy",
        Authenticated => "authenticated",
        Warning => "warning",
    }
);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("N/A")
    }
}

/// Authentication state of the backend's connection to its upstream services.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatus {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<UserInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthStatus {
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            authenticated: false,
            user_info: None,
            error: Some(error.into()),
        }
    }
}

/// Body of the refresh and disconnect actions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionAck {
    #[serde(default)]
    pub success: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_processed: Option<u64>,
    #[serde(default)]
    pub completed: Option<u64>,
    #[serde(default)]
    pub processing: Option<u64>,
    #[serde(default)]
    pub failed: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceState {
    #[serde(default)]
    pub status: Option<ServiceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerLog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<TriggerStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_type: Option<LeadType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crm_status: Option<CrmStatus>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl TriggerLog {
    /// Email to look up when the row is activated; blank emails are not clickable.
    pub fn lookup_email(&self) -> Option<&str> {
        self.lead_email
            .as_deref()
            .filter(|email| !email.trim().is_empty())
    }
}

/// Aggregate snapshot returned by the dashboard endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub stats: Option<Stats>,
    #[serde(default)]
    pub service_health: BTreeMap<String, ServiceState>,
    #[serde(default)]
    pub trigger_logs: Vec<TriggerLog>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadDetail {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_type: Option<LeadType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crm_status: Option<CrmStatus>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crm_response: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// `{status, data, message}` wrapper used by the dashboard and lead endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<String>,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    /// Unwraps the payload, turning a non-success status into an error message.
    pub fn into_result(self, fallback: &str) -> Result<T, crate::error::ApiError> {
        if !self.is_success() {
            let message = self
                .message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| fallback.to_string());
            return Err(crate::error::ApiError::Envelope(message));
        }
        self.data
            .ok_or_else(|| crate::error::ApiError::Decode("response has no data".to_string()))
    }
}
