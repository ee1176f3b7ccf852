use anyhow::Context;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use tracing::{debug, info};

/// Hands `url` to the platform opener without waiting for it to exit.
pub fn open_url(url: &str) -> anyhow::Result<()> {
    spawn_detached(opener_command(url))
        .with_context(|| format!("launch browser for {url}"))?;
    info!(url = %url, "Opened login page in browser");
    Ok(())
}

/// Starts `command` with null stdio and reaps it on a background thread so
/// the exited opener does not linger as a zombie.
fn spawn_detached(mut command: Command) -> anyhow::Result<JoinHandle<()>> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(thread::spawn(move || match child.wait() {
        Ok(status) => debug!(%status, "Browser opener exited"),
        Err(err) => debug!(error = %err, "Could not wait for browser opener"),
    }))
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}
