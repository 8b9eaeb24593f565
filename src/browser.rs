//! Browser tab launcher
//!
//! Opens URLs with the platform opener. The opener is spawned and not
//! waited on, so dispatch never blocks on the browser. Spawning goes through
//! tokio so exited openers are reaped; call from within the runtime.

use crate::error::{FridayError, FridayResult};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Opens a URL in a new browsing context
pub trait TabLauncher: Send + Sync {
    fn open(&self, url: &str) -> FridayResult<()>;
}

/// Launcher backed by xdg-open / open / start
#[derive(Debug, Clone, Default)]
pub struct SystemBrowser;

impl SystemBrowser {
    pub fn new() -> Self {
        Self
    }
}

impl TabLauncher for SystemBrowser {
    fn open(&self, url: &str) -> FridayResult<()> {
        info!("🌐 Opening tab: {}", url);
        spawn_detached(opener_command(url))
    }
}

/// Spawn without waiting; tokio reaps the child once it exits
fn spawn_detached(mut command: Command) -> FridayResult<()> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    let child = command
        .spawn()
        .map_err(|e| FridayError::Browser(format!("failed to launch opener: {}", e)))?;
    debug!("Opener spawned (pid {:?})", child.id());
    Ok(())
}

#[cfg(target_os = "linux")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg("start").arg("").arg(url);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

/// Search-engine query URL for free text
pub fn search_url(base: &str, query: &str) -> String {
    format!("{}?q={}", base, urlencoding::encode(query))
}
