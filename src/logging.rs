use crate::error::{DeskError, Result};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to a JSON log file
/// * `to_stderr` - Also log to stderr. Must be off while the TUI owns the terminal.
///
/// Fails when the log file cannot be opened.
pub fn init(verbose: bool, log_file: Option<PathBuf>, to_stderr: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    let file_layer = match log_file {
        Some(log_path) => Some(
            fmt::layer()
                .with_writer(file_appender(&log_path)?)
                .with_ansi(false)
                .json(),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
    Ok(())
}

/// Daily-rolling appender for `log_path`, creating its directory first.
fn file_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = log_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ticketdesk.log".to_string());

    let log_error = |reason: String| DeskError::Logging {
        path: log_path.to_path_buf(),
        reason,
    };
    std::fs::create_dir_all(dir).map_err(|e| log_error(e.to_string()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .build(dir)
        .map_err(|e| log_error(e.to_string()))
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("ticketdesk={}", level)
}

/// Log file used by the TUI when none is given on the command line.
pub fn default_log_file() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "ticketdesk")
        .map(|dirs| dirs.data_local_dir().join("ticketdesk.log"))
}
