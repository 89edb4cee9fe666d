//! Logging setup
//!
//! Stdout is reserved for the cheatsheet JSON and sensor lines, so console
//! logs go to stderr.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=niri_keybinds::keybinds=trace` - every parsed keybind
//! - `RUST_LOG=niri_keybinds::sensors=debug` - sensor detection decisions
//!
//! # Log Files
//!
//! Logs are written to `~/.config/niri-keybinds/logs/niri-keybinds.log` with
//! daily rotation, always at debug level. Only the newest
//! [`MAX_LOG_FILES`] days are kept.

use std::path::Path;

use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::{ensure_logs_dir, LOG_FILE_PREFIX};

/// Daily log files kept before the oldest is deleted
pub const MAX_LOG_FILES: usize = 7;

/// Daily rolling appender in `logs_dir` that prunes old files
pub fn file_appender(logs_dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(logs_dir)
}

/// Initialize tracing subscriber with stderr and file logging
///
/// `verbose` lowers the console default from `warn` to `debug` when RUST_LOG
/// is not set.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match ensure_logs_dir()
        .and_then(|dir| file_appender(&dir).map_err(|e| e.to_string()))
    {
        Ok(file_appender) => {
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
