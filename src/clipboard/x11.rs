use anyhow::{Context, Result};
use std::process::Command;

use super::backend::ClipboardBackend;
use super::pipe_to_command;

/// X11 clipboard backend using xclip
pub struct X11Backend;

impl X11Backend {
    /// Create a new X11 clipboard backend
    pub fn new() -> Result<Self> {
        Command::new("xclip")
            .arg("-version")
            .output()
            .context("xclip not found. Install the xclip package")?;

        log::debug!("X11Backend initialized successfully");
        Ok(X11Backend)
    }
}

impl ClipboardBackend for X11Backend {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut command = Command::new("xclip");
        command.arg("-selection").arg("clipboard").arg("-in");
        pipe_to_command(command, text)?;

        log::debug!("Wrote {} bytes text to clipboard", text.len());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "X11"
    }
}
