use serde::Deserialize;

/// Fields a failing backend response may carry in its JSON body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "lenient_text")]
    pub detail: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn parse(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connect failure, timeout).
    #[error("{0}")]
    Transport(String),
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: ErrorBody },
    /// The backend answered with a non-success envelope.
    #[error("{0}")]
    Envelope(String),
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message for dashboard and lead failures; prefers the body's `detail`.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Status { body, .. } => body
                .detail
                .clone()
                .unwrap_or_else(|| self.to_string()),
            other => other.to_string(),
        }
    }

    /// Message for auth failures; prefers the body's `error`.
    pub fn auth_message(&self) -> String {
        match self {
            ApiError::Status { body, .. } => {
                body.error.clone().unwrap_or_else(|| self.to_string())
            }
            other => other.to_string(),
        }
    }
}
