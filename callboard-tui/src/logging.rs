//! File logging.
//!
//! The terminal belongs to the UI, so log lines go to `log_path` through a
//! non-blocking appender. Keep the returned guard alive until exit or
//! buffered lines are lost.

use crate::config::TuiConfig;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "callboard_core=info,callboard_tui=info";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Log path has no file name: {0}")]
    InvalidPath(String),
    #[error("Failed to create log directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to init subscriber: {0}")]
    Init(String),
}

pub fn init(config: &TuiConfig) -> Result<WorkerGuard, LoggingError> {
    let path = config.log_path.as_path();
    let file_name = path
        .file_name()
        .ok_or_else(|| LoggingError::InvalidPath(path.display().to_string()))?;
    let directory = log_directory(path);
    std::fs::create_dir_all(directory)?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    tracing::info!(log_path = %path.display(), "Logging initialized");
    Ok(guard)
}

fn log_directory(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_file_name_logs_to_cwd() {
        assert_eq!(log_directory(Path::new("callboard.log")), Path::new("."));
    }

    #[test]
    fn test_nested_path_uses_parent() {
        assert_eq!(
            log_directory(Path::new("logs/today/callboard.log")),
            Path::new("logs/today")
        );
    }

    #[test]
    fn test_init_rejects_directory_path() {
        let config = TuiConfig {
            log_path: "/".into(),
            ..TuiConfig::default()
        };
        assert!(matches!(init(&config), Err(LoggingError::InvalidPath(_))));
    }
}
