use anyhow::{Result, anyhow};

/// Trait for clipboard backend abstraction
/// Write-only: clips are copied out, never read back
pub trait ClipboardBackend: Send + Sync {
    /// Write text to clipboard
    fn write_text(&self, text: &str) -> Result<()>;

    /// Get the backend name (for logging/debugging)
    fn name(&self) -> &'static str;
}

/// Stand-in used when no display server is reachable.
/// Every write fails with the reason detection failed, so copy errors reach the user.
pub struct UnavailableBackend {
    reason: String,
}

impl UnavailableBackend {
    pub fn new(reason: impl Into<String>) -> Self {
        UnavailableBackend {
            reason: reason.into(),
        }
    }
}

impl ClipboardBackend for UnavailableBackend {
    fn write_text(&self, _text: &str) -> Result<()> {
        Err(anyhow!("No clipboard available: {}", self.reason))
    }

    fn name(&self) -> &'static str {
        "Unavailable"
    }
}
