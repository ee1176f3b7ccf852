use super::*;

mod poll;
mod start;

/// Backend responses handed from the runtime back to the UI thread.
pub(in crate::tui) enum JobEvent {
    AuthChecked {
        ticket: Ticket,
        result: Result<AuthStatus, ApiError>,
    },
    AuthRefreshed(Result<ActionAck, ApiError>),
    AuthDisconnected(Result<ActionAck, ApiError>),
    DashboardFetched {
        ticket: Ticket,
        result: Result<DashboardData, ApiError>,
    },
    LeadFetched {
        ticket: Ticket,
        result: Result<LeadDetail, ApiError>,
    },
}
