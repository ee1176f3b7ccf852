use anyhow::{Context, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_API_BASE: &str = "LEADWATCH_API_BASE";
pub const ENV_API_KEY: &str = "LEADWATCH_API_KEY";
pub const ENV_ENVIRONMENT: &str = "LEADWATCH_ENVIRONMENT";
pub const ENV_TIMEOUT_SECS: &str = "LEADWATCH_TIMEOUT_SECS";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub login: String,
    pub check: String,
    pub status: String,
    pub refresh: String,
    pub disconnect: String,
    pub health: String,
    pub services: String,
    pub debug: String,
    pub dashboard: String,
    pub leads: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            login: "/auth/google/login".to_string(),
            check: "/auth/check".to_string(),
            status: "/auth/status".to_string(),
            refresh: "/auth/refresh".to_string(),
            disconnect: "/auth/disconnect".to_string(),
            health: "/auth/health".to_string(),
            services: "/auth/services".to_string(),
            debug: "/auth/debug".to_string(),
            dashboard: "/dashboard".to_string(),
            leads: "/leads".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
    pub environment: String,
    pub auth_poll_secs: u64,
    pub dashboard_poll_secs: u64,
    pub endpoints: Endpoints,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            api_key: "demo-key".to_string(),
            timeout_secs: 10,
            environment: "development".to_string(),
            auth_poll_secs: 300,
            dashboard_poll_secs: 300,
            endpoints: Endpoints::default(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path).context("read config")?;
        let config = serde_json::from_str(&data).context("parse config")?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("create config directory")?;
        }
        let data = serde_json::to_string_pretty(self).context("serialize config")?;
        fs::write(path, data).context("write config")?;
        Ok(())
    }

    /// Applies `LEADWATCH_*` overrides using the given variable lookup.
    pub fn apply_env<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup(ENV_API_BASE) {
            self.base_url = base;
        }
        if let Some(key) = lookup(ENV_API_KEY) {
            self.api_key = key;
        }
        if let Some(environment) = lookup(ENV_ENVIRONMENT) {
            self.environment = environment;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = timeout
                .trim()
                .parse()
                .with_context(|| format!("parse {ENV_TIMEOUT_SECS}={timeout}"))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let base = self.base_url.trim();
        if base.is_empty() {
            bail!("base_url must not be empty");
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            bail!("base_url must start with http:// or https://: {base}");
        }
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be greater than zero");
        }
        if self.auth_poll_secs == 0 || self.dashboard_poll_secs == 0 {
            bail!("poll intervals must be greater than zero");
        }
        Ok(())
    }

    /// Joins an endpoint path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    pub fn login_url(&self) -> String {
        self.url(&self.endpoints.login)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn auth_poll_interval(&self) -> Duration {
        Duration::from_secs(self.auth_poll_secs)
    }

    pub fn dashboard_poll_interval(&self) -> Duration {
        Duration::from_secs(self.dashboard_poll_secs)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let project =
        ProjectDirs::from("com", "leadwatch", "leadwatch").context("resolve project dirs")?;
    Ok(project.config_dir().join("config.json"))
}

/// Reads the config file (if any) and layers environment overrides on top.
pub fn load_effective(path: &Path) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load(path)?;
    config.apply_env(|name| std::env::var(name).ok())?;
    Ok(config)
}
