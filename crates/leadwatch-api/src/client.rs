use crate::http::send_json;
use anyhow::Context;
use leadwatch_core::backend::{BackendFuture, DiagEndpoint, LeadBackend};
use leadwatch_core::config::AppConfig;
use leadwatch_core::error::ApiError;
use leadwatch_core::model::{ActionAck, AuthStatus, DashboardData, Envelope, LeadDetail};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use tracing::debug;

const API_KEY_HEADER: &str = "x-api-key";

/// `LeadBackend` over HTTP. Every request carries the API key header and the
/// configured timeout.
pub struct HttpBackend {
    client: Client,
    config: AppConfig,
}

impl HttpBackend {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut key = HeaderValue::from_str(&config.api_key).context("invalid api key header")?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .user_agent(concat!("leadwatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build http client")?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Lead lookup URL with the email escaped as a single path segment.
    pub fn lead_url(&self, email: &str) -> Result<Url, ApiError> {
        let base = self.config.url(&self.config.endpoints.leads);
        let mut url =
            Url::parse(&base).map_err(|err| ApiError::Transport(format!("invalid url {base}: {err}")))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::Transport(format!("url cannot take a path: {base}")))?;
            segments.pop_if_empty().push(email);
        }
        Ok(url)
    }

    fn diag_path(&self, endpoint: DiagEndpoint) -> &str {
        let endpoints = &self.config.endpoints;
        match endpoint {
            DiagEndpoint::Status => &endpoints.status,
            DiagEndpoint::Health => &endpoints.health,
            DiagEndpoint::Services => &endpoints.services,
            DiagEndpoint::Debug => &endpoints.debug,
        }
    }
}

impl LeadBackend for HttpBackend {
    fn check_auth(&self) -> BackendFuture<'_, AuthStatus> {
        Box::pin(async move {
            let url = self.config.url(&self.config.endpoints.check);
            debug!(url = %url, "GET auth check");
            send_json(self.client.get(url)).await
        })
    }

    fn refresh_auth(&self) -> BackendFuture<'_, ActionAck> {
        Box::pin(async move {
            let url = self.config.url(&self.config.endpoints.refresh);
            debug!(url = %url, "POST auth refresh");
            send_json(self.client.post(url)).await
        })
    }

    fn disconnect_auth(&self) -> BackendFuture<'_, ActionAck> {
        Box::pin(async move {
            let url = self.config.url(&self.config.endpoints.disconnect);
            debug!(url = %url, "POST auth disconnect");
            send_json(self.client.post(url)).await
        })
    }

    fn fetch_dashboard(&self) -> BackendFuture<'_, DashboardData> {
        Box::pin(async move {
            let url = self.config.url(&self.config.endpoints.dashboard);
            debug!(url = %url, "GET dashboard");
            let envelope: Envelope<DashboardData> = send_json(self.client.get(url)).await?;
            envelope.into_result("Failed to fetch dashboard data")
        })
    }

    fn fetch_lead<'a>(&'a self, email: &'a str) -> BackendFuture<'a, LeadDetail> {
        Box::pin(async move {
            let url = self.lead_url(email)?;
            debug!(url = %url, "GET lead details");
            let envelope: Envelope<LeadDetail> = send_json(self.client.get(url)).await?;
            envelope.into_result("Failed to fetch lead details")
        })
    }

    fn diagnostics(&self, endpoint: DiagEndpoint) -> BackendFuture<'_, serde_json::Value> {
        Box::pin(async move {
            let url = self.config.url(self.diag_path(endpoint));
            debug!(url = %url, endpoint = endpoint.label(), "GET diagnostics");
            send_json(self.client.get(url)).await
        })
    }
}
