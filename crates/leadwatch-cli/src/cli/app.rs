use super::*;
use std::path::Path;

const LOG_BUFFER_ENTRIES: usize = 200;

pub(super) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_buffer = logging::LogBuffer::new(LOG_BUFFER_ENTRIES);
    logging::init(log_buffer.clone(), !cli.launches_tui());
    info!(
        command = command_label(cli.command.as_ref()),
        "Running command"
    );

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    if let Some(Commands::Config(args)) = &cli.command {
        return commands::handle_config(args, &cli, &config_path);
    }

    let config = effective_config(&cli, &config_path)?;
    if let Some(Commands::Login) = &cli.command {
        return commands::handle_login(&config);
    }

    let backend: Arc<dyn LeadBackend> = Arc::new(HttpBackend::new(&config)?);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("create tokio runtime")?;

    match cli.command {
        None | Some(Commands::Tui) => {
            tui::run_tui(config, backend, runtime.handle().clone(), log_buffer)
        }
        Some(command) => runtime.block_on(commands::handle_remote(command, backend.as_ref())),
    }
}

/// Config file, then `LEADWATCH_*` variables, then command-line flags.
pub(super) fn effective_config(cli: &Cli, path: &Path) -> anyhow::Result<AppConfig> {
    let mut config = load_effective(path)?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}
