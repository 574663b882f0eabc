use anyhow::{Context, Result};
use std::process::Command;

use super::backend::ClipboardBackend;
use super::pipe_to_command;

/// Wayland clipboard backend using wl-clipboard tools
/// Requires wl-copy to be installed
pub struct WaylandBackend;

impl WaylandBackend {
    /// Create a new Wayland clipboard backend
    pub fn new() -> Result<Self> {
        Command::new("wl-copy")
            .arg("--version")
            .output()
            .context("wl-copy not found. Install wl-clipboard package")?;

        log::debug!("WaylandBackend initialized successfully");
        Ok(WaylandBackend)
    }
}

impl ClipboardBackend for WaylandBackend {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut command = Command::new("wl-copy");
        command.arg("--type").arg("text/plain");
        pipe_to_command(command, text)?;

        log::debug!("Wrote {} bytes text to clipboard", text.len());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "Wayland"
    }
}
