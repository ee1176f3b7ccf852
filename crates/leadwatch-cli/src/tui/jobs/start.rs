use super::*;

impl TuiApp {
    fn spawn_job<F>(&self, job: F)
    where
        F: Future<Output = JobEvent> + Send + 'static,
    {
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let _ = tx.send(job.await);
        });
    }

    pub(in crate::tui) fn start_auth_check(&self, ticket: Ticket) {
        debug!(ticket = ticket.value(), "Checking auth status");
        let backend = Arc::clone(&self.backend);
        self.spawn_job(async move {
            JobEvent::AuthChecked {
                ticket,
                result: backend.check_auth().await,
            }
        });
    }

    pub(in crate::tui) fn start_auth_refresh(&mut self) {
        if self.refreshing_auth {
            debug!("Auth refresh already running");
            return;
        }
        info!("Refreshing auth token");
        self.refreshing_auth = true;
        let backend = Arc::clone(&self.backend);
        self.spawn_job(async move { JobEvent::AuthRefreshed(backend.refresh_auth().await) });
    }

    pub(in crate::tui) fn start_auth_disconnect(&mut self) {
        if self.disconnecting {
            debug!("Disconnect already running");
            return;
        }
        info!("Disconnecting backend session");
        self.disconnecting = true;
        let backend = Arc::clone(&self.backend);
        self.spawn_job(async move { JobEvent::AuthDisconnected(backend.disconnect_auth().await) });
    }

    pub(in crate::tui) fn start_dashboard_fetch(&self, ticket: Ticket) {
        let backend = Arc::clone(&self.backend);
        self.spawn_job(async move {
            JobEvent::DashboardFetched {
                ticket,
                result: backend.fetch_dashboard().await,
            }
        });
    }

    pub(in crate::tui) fn start_lead_fetch(&self, request: LeadRequest) {
        let backend = Arc::clone(&self.backend);
        let LeadRequest { ticket, email } = request;
        self.spawn_job(async move {
            let result = backend.fetch_lead(&email).await;
            JobEvent::LeadFetched { ticket, result }
        });
    }
}
