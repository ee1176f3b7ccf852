use crate::{browser, logging, tui};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use leadwatch_api::HttpBackend;
use leadwatch_core::backend::{DiagEndpoint, LeadBackend};
use leadwatch_core::config::{AppConfig, default_config_path, load_effective};
use leadwatch_core::model::{AuthStatus, DashboardData, LeadDetail};
use leadwatch_core::present;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

mod app;
mod args;
mod commands;
mod render;
#[cfg(test)]
mod tests;

use args::*;

pub fn run() -> anyhow::Result<()> {
    app::run()
}
