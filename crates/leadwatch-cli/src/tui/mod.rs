use crate::browser;
use crate::logging::LogBuffer;
use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use leadwatch_core::auth_session::AuthSession;
use leadwatch_core::backend::LeadBackend;
use leadwatch_core::config::AppConfig;
use leadwatch_core::dashboard_sync::DashboardSync;
use leadwatch_core::error::ApiError;
use leadwatch_core::lead_detail::{LeadDetailFetcher, LeadOutcome, LeadRequest};
use leadwatch_core::model::{ActionAck, AuthStatus, DashboardData, LeadDetail};
use leadwatch_core::present::{self, Badge, LogRow, Tone};
use leadwatch_core::schedule::Ticket;
use leadwatch_core::view::{self, Screen};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::future::Future;
use std::io;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tracing::{debug, error, info, warn};

const TICK_RATE: Duration = Duration::from_millis(200);
const LOG_PANEL_HEIGHT: u16 = 7;
const LOG_PANEL_BORDER_HEIGHT: u16 = 2;

mod app_core;
mod draw;
mod handle;
mod helpers;
mod jobs;

use helpers::*;
use jobs::JobEvent;

pub fn run_tui(
    config: AppConfig,
    backend: Arc<dyn LeadBackend>,
    runtime: Handle,
    log_buffer: LogBuffer,
) -> anyhow::Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("create terminal")?;

    info!(base_url = %config.base_url, "Starting TUI");
    let mut app = TuiApp::new(config, backend, runtime, log_buffer);
    app.mount(Instant::now());
    let result = run_app(&mut terminal, &mut app);
    app.unmount();

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    if let Err(err) = &result {
        error!(error = %err, "TUI exited with error");
    }
    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut TuiApp) -> anyhow::Result<()> {
    let mut last_tick = Instant::now();
    debug!(
        tick_rate_ms = TICK_RATE.as_millis(),
        "TUI event loop started"
    );

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        let timeout = TICK_RATE
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && app.handle_key(key)
        {
            return Ok(());
        }

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
        }

        app.poll_job_events();
        app.tick(Instant::now());
    }
}

struct TuiApp {
    config: AppConfig,
    backend: Arc<dyn LeadBackend>,
    runtime: Handle,
    events_tx: mpsc::Sender<JobEvent>,
    events_rx: mpsc::Receiver<JobEvent>,
    auth: AuthSession,
    dashboard: DashboardSync,
    lead: LeadDetailFetcher,
    log_buffer: LogBuffer,
    log_index: usize,
    log_scroll: usize,
    detail_scroll: usize,
    notice: Option<String>,
    refreshing_auth: bool,
    disconnecting: bool,
}
