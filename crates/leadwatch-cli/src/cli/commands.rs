use super::*;
use anyhow::bail;
use leadwatch_core::error::ApiError;
use serde::Serialize;
use std::path::Path;

pub(super) async fn handle_remote(
    command: Commands,
    backend: &dyn LeadBackend,
) -> anyhow::Result<()> {
    match command {
        Commands::Status => print_status(backend).await,
        Commands::Dashboard(args) => {
            let data = backend
                .fetch_dashboard()
                .await
                .map_err(|err| failure("fetch dashboard", &err))?;
            info!(
                logs = data.trigger_logs.len(),
                services = data.service_health.len(),
                "Fetched dashboard"
            );
            if args.json {
                print_json(&data)
            } else {
                print_lines(render::dashboard_lines(&data));
                Ok(())
            }
        }
        Commands::Lead(args) => {
            let email = args.email.trim();
            if email.is_empty() {
                bail!("lead email must not be empty");
            }
            let lead = backend
                .fetch_lead(email)
                .await
                .map_err(|err| failure("fetch lead details", &err))?;
            if args.json {
                print_json(&lead)
            } else {
                print_lines(render::lead_lines(&lead));
                Ok(())
            }
        }
        Commands::Auth(args) => handle_auth(args, backend).await,
        Commands::Diag(args) => {
            let endpoint = DiagEndpoint::from(args.endpoint);
            let value = backend
                .diagnostics(endpoint)
                .await
                .map_err(|err| failure(endpoint.label(), &err))?;
            print_json(&value)
        }
        Commands::Tui | Commands::Login | Commands::Config(_) => {
            bail!("command does not talk to the backend")
        }
    }
}

async fn handle_auth(args: AuthArgs, backend: &dyn LeadBackend) -> anyhow::Result<()> {
    match args.command {
        AuthCommands::Refresh => {
            let ack = backend
                .refresh_auth()
                .await
                .map_err(|err| failure("refresh auth", &err))?;
            if !ack.success {
                bail!("backend reported that the token refresh failed");
            }
            println!("Token refreshed.");
        }
        AuthCommands::Disconnect => {
            let ack = backend
                .disconnect_auth()
                .await
                .map_err(|err| failure("disconnect", &err))?;
            if !ack.success {
                bail!("backend reported that the disconnect failed");
            }
            println!("Disconnected.");
        }
    }
    print_status(backend).await
}

async fn print_status(backend: &dyn LeadBackend) -> anyhow::Result<()> {
    let status = backend.check_auth().await.map_err(|err| {
        warn!(error = %err, "Auth check failed");
        anyhow::anyhow!("check auth status: {}", err.auth_message())
    })?;
    print_lines(render::auth_lines(&status));
    Ok(())
}

pub(super) fn handle_login(config: &AppConfig) -> anyhow::Result<()> {
    let url = config.login_url();
    println!("Log in at: {url}");
    if let Err(err) = browser::open_url(&url) {
        warn!(error = %err, "Could not open browser");
        println!("Open the URL above in a browser to authenticate.");
    }
    Ok(())
}

pub(super) fn handle_config(args: &ConfigArgs, cli: &Cli, path: &Path) -> anyhow::Result<()> {
    match &args.command {
        ConfigCommands::Show => {
            let config = app::effective_config(cli, path)?;
            println!("Config file: {}", path.display());
            print_json(&masked(config))
        }
        ConfigCommands::Init(init) => {
            if path.exists() && !init.force {
                bail!(
                    "config already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            AppConfig::default().save(path)?;
            info!(path = %path.display(), "Config written");
            println!("Config written to {}", path.display());
            Ok(())
        }
    }
}

fn masked(mut config: AppConfig) -> AppConfig {
    if !config.api_key.is_empty() {
        config.api_key = "********".to_string();
    }
    config
}

fn failure(action: &str, err: &ApiError) -> anyhow::Error {
    anyhow::anyhow!("{action}: {}", err.detail())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{text}");
    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}
