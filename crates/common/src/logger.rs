use crate::error::DocsumError;
use std::path::Path;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "docsum.log";

/// Initialize logging system
///
/// Sets up logging to both console and file
///
/// # Arguments
/// * `log_dir` - Directory where log files will be stored
/// * `log_level` - Log level (trace, debug, info, warn, error)
pub fn setup_logging(log_dir: &Path, log_level: &str) -> Result<(), DocsumError> {
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir).map_err(|e| {
            DocsumError::config(format!(
                "Failed to create log directory {}: {}",
                log_dir.display(),
                e
            ))
        })?;
    }

    let log_file_path = log_dir.join(LOG_FILE_NAME);
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .map_err(|e| {
            DocsumError::config(format!(
                "Failed to open log file {}: {}",
                log_file_path.display(),
                e
            ))
        })?;

    let env_filter = env_filter(log_level)?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(env_filter.clone());

    let file_layer = fmt::layer()
        .with_writer(log_file)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized: level={}, log_file={}", log_level, log_file_path.display());

    Ok(())
}

/// Console-only logging, used by the one-shot CLI
///
/// Writes to stderr so stdout stays free for command output.
pub fn setup_console_logging(log_level: &str) -> Result<(), DocsumError> {
    let env_filter = env_filter(log_level)?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    tracing::debug!("Console logging initialized: level={}", log_level);

    Ok(())
}

/// `RUST_LOG` when set, otherwise the configured `LOG_LEVEL` directives
fn env_filter(log_level: &str) -> Result<EnvFilter, DocsumError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => directive_filter(log_level),
    }
}

/// Filter from a level or directive list such as `info,docsum_llm=debug`
fn directive_filter(log_level: &str) -> Result<EnvFilter, DocsumError> {
    EnvFilter::try_new(log_level)
        .map_err(|e| DocsumError::config(format!("Invalid LOG_LEVEL '{}': {}", log_level, e)))
}
