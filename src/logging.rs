use anyhow::{Context, Result};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Target for store and persistence records.
/// These go to the log file only and never reach the TUI status line.
pub const STORE_TARGET: &str = "quickclip::store";

/// Flash message for TUI display
#[derive(Debug, Clone)]
pub struct FlashMessage {
    pub level: Level,
    pub message: String,
    pub timestamp: Instant,
}

/// Logger that writes to a rolling file and forwards important records to the TUI
struct QuickclipLogger {
    file_writer: Arc<Mutex<RollingFileAppender>>,
    flash_tx: Option<Arc<Mutex<Sender<FlashMessage>>>>,
    file_level: LevelFilter,
    flash_level: LevelFilter,
}

impl Log for QuickclipLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.file_level || metadata.level() <= self.flash_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = format!("{}", record.args());
        let level = record.level();

        if level <= self.file_level {
            if let Ok(mut writer) = self.file_writer.lock() {
                let _ = writeln!(
                    writer,
                    "{} [{}] {}: {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                    level,
                    record.target(),
                    message
                );
            }
        }

        if level <= self.flash_level && !is_store_record(record) {
            if let Some(tx) = &self.flash_tx {
                if let Ok(tx) = tx.lock() {
                    let _ = tx.send(FlashMessage {
                        level,
                        message,
                        timestamp: Instant::now(),
                    });
                }
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut writer) = self.file_writer.lock() {
            let _ = writer.flush();
        }
    }
}

fn is_store_record(record: &Record) -> bool {
    record.target() == STORE_TARGET
}

/// Parse log level string to LevelFilter, defaulting to info
pub fn parse_level(level_str: &str) -> LevelFilter {
    match level_str.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Install the global logger.
/// The log file rotates daily and keeps the last three files.
pub fn init_logger(
    log_file_path: PathBuf,
    flash_tx: Option<Sender<FlashMessage>>,
    file_level: &str,
    flash_level: &str,
) -> Result<()> {
    let log_dir = log_file_path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Invalid log file path"))?;
    fs::create_dir_all(log_dir).context("Failed to create log directory")?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(3)
        .filename_prefix(
            log_file_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("quickclip"),
        )
        .filename_suffix(
            log_file_path
                .extension()
                .and_then(|s| s.to_str())
                .unwrap_or("log"),
        )
        .build(log_dir)
        .context("Failed to create rotating file appender")?;

    let file_level = parse_level(file_level);
    let flash_level = parse_level(flash_level);

    let logger = QuickclipLogger {
        file_writer: Arc::new(Mutex::new(file_appender)),
        flash_tx: flash_tx.map(|tx| Arc::new(Mutex::new(tx))),
        file_level,
        flash_level,
    };

    log::set_boxed_logger(Box::new(logger)).context("Failed to set global logger")?;
    log::set_max_level(file_level.max(flash_level));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("error"), LevelFilter::Error);
        assert_eq!(parse_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_level(" Debug "), LevelFilter::Debug);
        assert_eq!(parse_level("trace"), LevelFilter::Trace);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("verbose"), LevelFilter::Info);
    }

    #[test]
    fn test_logger_routes_by_level() {
        let dir = tempfile::tempdir().unwrap();
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix("test")
            .filename_suffix("log")
            .build(dir.path())
            .unwrap();
        let (tx, rx) = std::sync::mpsc::channel();
        let logger = QuickclipLogger {
            file_writer: Arc::new(Mutex::new(appender)),
            flash_tx: Some(Arc::new(Mutex::new(tx))),
            file_level: LevelFilter::Info,
            flash_level: LevelFilter::Warn,
        };

        logger.log(
            &Record::builder()
                .level(Level::Info)
                .args(format_args!("saved"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Error)
                .args(format_args!("copy failed"))
                .build(),
        );
        logger.flush();

        let flashes: Vec<FlashMessage> = rx.try_iter().collect();
        assert_eq!(flashes.len(), 1);
        assert_eq!(flashes[0].level, Level::Error);
        assert_eq!(flashes[0].message, "copy failed");

        let contents = fs::read_to_string(dir.path().join("test.log")).unwrap();
        assert!(contents.contains("[INFO]"));
        assert!(contents.contains("copy failed"));
    }

    #[test]
    fn test_store_records_stay_out_of_flash() {
        let dir = tempfile::tempdir().unwrap();
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix("store")
            .filename_suffix("log")
            .build(dir.path())
            .unwrap();
        let (tx, rx) = std::sync::mpsc::channel();
        let logger = QuickclipLogger {
            file_writer: Arc::new(Mutex::new(appender)),
            flash_tx: Some(Arc::new(Mutex::new(tx))),
            file_level: LevelFilter::Info,
            flash_level: LevelFilter::Warn,
        };

        logger.log(
            &Record::builder()
                .level(Level::Error)
                .target(STORE_TARGET)
                .args(format_args!("Error saving clips: disk full"))
                .build(),
        );
        logger.flush();

        assert_eq!(rx.try_iter().count(), 0);
        let contents = fs::read_to_string(dir.path().join("store.log")).unwrap();
        assert!(contents.contains("[ERROR] quickclip::store: Error saving clips: disk full"));
    }
}
