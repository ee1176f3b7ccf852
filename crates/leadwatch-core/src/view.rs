use crate::auth_session::AuthSession;
use crate::dashboard_sync::DashboardSync;
use crate::model::DashboardData;

/// Which top-level screen the dashboard shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Screen<'a> {
    AuthLoading,
    AuthRequired {
        error: Option<&'a str>,
    },
    DashboardLoading,
    DashboardError {
        message: &'a str,
    },
    /// Data stays on screen while a refresh runs or after it failed.
    DashboardReady {
        data: &'a DashboardData,
        refreshing: bool,
        error: Option<&'a str>,
    },
}

impl Screen<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::AuthLoading => "auth-loading",
            Screen::AuthRequired { .. } => "auth-required",
            Screen::DashboardLoading => "dashboard-loading",
            Screen::DashboardError { .. } => "dashboard-error",
            Screen::DashboardReady { .. } => "dashboard-ready",
        }
    }
}

pub fn screen<'a>(auth: &'a AuthSession, dashboard: &'a DashboardSync) -> Screen<'a> {
    if auth.initial_check_pending() {
        return Screen::AuthLoading;
    }
    if !auth.is_authenticated() {
        return Screen::AuthRequired {
            error: auth.error(),
        };
    }
    match (dashboard.data(), dashboard.error()) {
        (Some(data), error) => Screen::DashboardReady {
            data,
            refreshing: dashboard.is_loading(),
            error,
        },
        (None, _) if dashboard.is_loading() => Screen::DashboardLoading,
        (None, Some(message)) => Screen::DashboardError { message },
        (None, None) => Screen::DashboardLoading,
    }
}
