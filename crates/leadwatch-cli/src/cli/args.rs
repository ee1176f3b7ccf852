use super::*;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Terminal dashboard for the lead processing backend"
)]
pub(super) struct Cli {
    #[arg(long, global = true, help = "Path to the config file")]
    pub(super) config: Option<PathBuf>,
    #[arg(long, global = true, help = "Override the API base URL")]
    pub(super) base_url: Option<String>,
    #[arg(long, global = true, help = "Override the API key")]
    pub(super) api_key: Option<String>,
    #[arg(long, global = true, help = "Override the request timeout in seconds")]
    pub(super) timeout: Option<u64>,
    #[command(subcommand)]
    pub(super) command: Option<Commands>,
}

impl Cli {
    pub(super) fn launches_tui(&self) -> bool {
        matches!(self.command, None | Some(Commands::Tui))
    }

    /// Flags win over the config file and environment.
    pub(super) fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(api_key) = &self.api_key {
            config.api_key = api_key.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
    }
}

#[derive(clap::Subcommand)]
pub(super) enum Commands {
    #[command(about = "Launch the terminal dashboard (default)")]
    Tui,
    #[command(about = "Check authentication status")]
    Status,
    #[command(about = "Fetch dashboard stats, service health and trigger logs")]
    Dashboard(OutputArgs),
    #[command(about = "Look up a single lead by email")]
    Lead(LeadArgs),
    #[command(about = "Refresh or disconnect the backend session")]
    Auth(AuthArgs),
    #[command(about = "Print and open the login URL")]
    Login,
    #[command(about = "Query a backend diagnostics endpoint")]
    Diag(DiagArgs),
    #[command(about = "Manage config")]
    Config(ConfigArgs),
}

#[derive(Parser)]
pub(super) struct OutputArgs {
    #[arg(long, help = "Print the raw response as JSON")]
    pub(super) json: bool,
}

#[derive(Parser)]
pub(super) struct LeadArgs {
    pub(super) email: String,
    #[arg(long, help = "Print the raw response as JSON")]
    pub(super) json: bool,
}

#[derive(Parser)]
pub(super) struct AuthArgs {
    #[command(subcommand)]
    pub(super) command: AuthCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum AuthCommands {
    #[command(about = "Refresh the backend OAuth token")]
    Refresh,
    #[command(about = "Disconnect the backend OAuth session")]
    Disconnect,
}

#[derive(Parser)]
pub(super) struct DiagArgs {
    #[arg(value_enum)]
    pub(super) endpoint: DiagTarget,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(super) enum DiagTarget {
    Status,
    Health,
    Services,
    Debug,
}

impl From<DiagTarget> for DiagEndpoint {
    fn from(target: DiagTarget) -> Self {
        match target {
            DiagTarget::Status => DiagEndpoint::Status,
            DiagTarget::Health => DiagEndpoint::Health,
            DiagTarget::Services => DiagEndpoint::Services,
            DiagTarget::Debug => DiagEndpoint::Debug,
        }
    }
}

#[derive(Parser)]
pub(super) struct ConfigArgs {
    #[command(subcommand)]
    pub(super) command: ConfigCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum ConfigCommands {
    #[command(about = "Print the effective config")]
    Show,
    #[command(about = "Write a config file with default settings")]
    Init(InitArgs),
}

#[derive(Parser)]
pub(super) struct InitArgs {
    #[arg(long, help = "Overwrite an existing config file")]
    pub(super) force: bool,
}

pub(super) fn command_label(command: Option<&Commands>) -> &'static str {
    match command {
        None | Some(Commands::Tui) => "tui",
        Some(Commands::Status) => "status",
        Some(Commands::Dashboard(_)) => "dashboard",
        Some(Commands::Lead(_)) => "lead",
        Some(Commands::Auth(_)) => "auth",
        Some(Commands::Login) => "login",
        Some(Commands::Diag(_)) => "diag",
        Some(Commands::Config(_)) => "config",
    }
}
