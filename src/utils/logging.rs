//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to
//! `$STOREFORGE_DATA_DIR/studio.log` (falling back to the working
//! directory) and automatic rotation on startup keeping 6 historical files.

use crate::error::Result;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Maximum number of historical log files to keep (studio.log.1 through studio.log.5)
const MAX_LOG_FILES: u8 = 5;

/// Resolve the directory session logs are written to
fn log_dir() -> PathBuf {
    let base = std::env::var("STOREFORGE_DATA_DIR").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(base)
}

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via `RUST_LOG`.
/// Rotates existing logs on startup so each session's log is preserved
/// separately.
pub fn init_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let log_path = log_dir.join("studio.log");
    rotate_logs_on_startup(&log_path)?;

    // tracing_appender's RollingFileAppender has no startup-based rotation,
    // so rotation is handled manually above
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("studio")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| crate::error::StoreforgeError::ConfigError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| crate::error::StoreforgeError::ConfigError(Box::new(e)))?;

    tracing::info!("storeforge v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Rotate log files on application startup
///
/// studio.log.5 is deleted, each numbered file shifts up by one, and the
/// current studio.log becomes studio.log.1; the logger then creates a
/// fresh studio.log. Runs unconditionally on every startup regardless of
/// file size.
fn rotate_logs_on_startup(log_path: &PathBuf) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path.parent().ok_or_else(|| {
        crate::error::StoreforgeError::ConfigError(crate::error::StringError::new(
            "Invalid log path",
        ))
    })?;

    let log_name = log_path
        .file_name()
        .ok_or_else(|| {
            crate::error::StoreforgeError::ConfigError(crate::error::StringError::new(
                "Invalid log filename",
            ))
        })?
        .to_string_lossy();

    let oldest_log = log_dir.join(format!("{log_name}.{MAX_LOG_FILES}"));
    if oldest_log.exists() {
        std::fs::remove_file(&oldest_log)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current_log = log_dir.join(format!("{log_name}.{i}"));
        let next_log = log_dir.join(format!("{log_name}.{}", i + 1));
        if current_log.exists() {
            std::fs::rename(&current_log, &next_log)?;
        }
    }

    let log_1 = log_dir.join(format!("{log_name}.1"));
    std::fs::rename(log_path, &log_1)?;

    Ok(())
}
