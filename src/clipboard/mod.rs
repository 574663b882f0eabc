pub mod backend;
pub mod wayland;
pub mod x11;

use anyhow::{Context, Result, anyhow};
use std::env;
use std::io::Write;
use std::process::{Command, Stdio};

pub use backend::{ClipboardBackend, UnavailableBackend};
pub use wayland::WaylandBackend;
pub use x11::X11Backend;

/// Create a clipboard backend based on the current display server
/// Wayland (WAYLAND_DISPLAY) wins over X11 (DISPLAY)
pub fn create_backend() -> Result<Box<dyn ClipboardBackend>> {
    if env::var("WAYLAND_DISPLAY").is_ok() {
        log::info!("Detected Wayland display server");
        return Ok(Box::new(WaylandBackend::new()?));
    }

    if env::var("DISPLAY").is_ok() {
        log::info!("Detected X11 display server");
        return Ok(Box::new(X11Backend::new()?));
    }

    Err(anyhow!(
        "No supported display server detected. Set WAYLAND_DISPLAY or DISPLAY"
    ))
}

/// Run `command` with `text` on stdin and wait for it to exit successfully
fn pipe_to_command(mut command: Command, text: &str) -> Result<()> {
    let program = command.get_program().to_string_lossy().into_owned();

    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to spawn {}", program))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to {} stdin", program))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("Failed to wait for {}", program))?;

    if !status.success() {
        return Err(anyhow!("{} failed with status: {}", program, status));
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::ClipboardBackend;
    use anyhow::{Result, anyhow};
    use std::sync::{Arc, Mutex};

    /// Records every write; clones share the record
    #[derive(Clone, Default)]
    pub struct RecordingClipboard {
        pub writes: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingClipboard {
        pub fn last(&self) -> Option<String> {
            self.writes.lock().unwrap().last().cloned()
        }
    }

    impl ClipboardBackend for RecordingClipboard {
        fn write_text(&self, text: &str) -> Result<()> {
            self.writes.lock().unwrap().push(text.to_string());
            Ok(())
        }

        fn name(&self) -> &'static str {
            "Recording"
        }
    }

    pub struct FailingClipboard;

    impl ClipboardBackend for FailingClipboard {
        fn write_text(&self, _text: &str) -> Result<()> {
            Err(anyhow!("clipboard is locked"))
        }

        fn name(&self) -> &'static str {
            "Failing"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_backend_reports_reason() {
        let backend = UnavailableBackend::new("no display");
        let err = backend.write_text("x").unwrap_err();
        assert!(err.to_string().contains("no display"));
        assert_eq!(backend.name(), "Unavailable");
    }

    #[test]
    fn test_pipe_to_command_reports_exit_status() {
        assert!(pipe_to_command(Command::new("cat"), "some text").is_ok());

        let mut failing = Command::new("sh");
        failing.arg("-c").arg("cat > /dev/null; exit 3");
        let err = pipe_to_command(failing, "some text").unwrap_err();
        assert!(err.to_string().contains("sh failed"));
    }

    #[test]
    fn test_pipe_to_missing_program() {
        let err = pipe_to_command(Command::new("quickclip-no-such-tool"), "x").unwrap_err();
        assert!(err.to_string().contains("Failed to spawn"));
    }
}
