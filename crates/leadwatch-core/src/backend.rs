use crate::error::ApiError;
use crate::model::{ActionAck, AuthStatus, DashboardData, LeadDetail};
use std::future::Future;
use std::pin::Pin;

pub type BackendFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send + 'a>>;

/// Diagnostics endpoints exposed next to the auth flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagEndpoint {
    Status,
    Health,
    Services,
    Debug,
}

impl DiagEndpoint {
    pub fn label(self) -> &'static str {
        match self {
            DiagEndpoint::Status => "status",
            DiagEndpoint::Health => "health",
            DiagEndpoint::Services => "services",
            DiagEndpoint::Debug => "debug",
        }
    }
}

/// The lead-processing backend as seen by the dashboard.
pub trait LeadBackend: Send + Sync {
    fn check_auth(&self) -> BackendFuture<'_, AuthStatus>;
    fn refresh_auth(&self) -> BackendFuture<'_, ActionAck>;
    fn disconnect_auth(&self) -> BackendFuture<'_, ActionAck>;
    fn fetch_dashboard(&self) -> BackendFuture<'_, DashboardData>;
    fn fetch_lead<'a>(&'a self, email: &'a str) -> BackendFuture<'a, LeadDetail>;

    fn diagnostics(&self, endpoint: DiagEndpoint) -> BackendFuture<'_, serde_json::Value> {
        Box::pin(async move {
            Err(ApiError::Transport(format!(
                "{} diagnostics not supported by this backend",
                endpoint.label()
            )))
        })
    }
}
