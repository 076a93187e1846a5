//! Logging utilities for the Lokal client.
//!
//! One subscriber per process: an `EnvFilter` (`lokal=<level>` unless
//! `RUST_LOG` says otherwise), a formatting layer on stderr and, when a log
//! file is configured, a non-blocking file layer.

use lokal_config::LoggingConfig;
use std::path::Path;
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{config_error, LokalError};

/// Keeps the file writer flushing until dropped. Hold it for the lifetime
/// of `main`.
#[derive(Default)]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Initialize logging from the `[logging]` section of the app config.
///
/// Returns an error only for an unknown level string or an unusable log
/// file path.
pub fn init_from_config(config: &LoggingConfig) -> Result<LogGuard, LokalError> {
    let level: Level = config
        .level
        .trim()
        .parse()
        .map_err(|_| config_error(format!("unknown log level '{}'", config.level)))?;
    install(level, config.file.as_deref())
}

fn install(level: Level, file: Option<&Path>) -> Result<LogGuard, LokalError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("lokal={}", level))
            .map_err(|e| config_error(format!("invalid log filter: {}", e)))?,
    };

    let mut guard = LogGuard::default();
    let file_layer = match file {
        Some(path) => {
            let (writer, worker) = file_writer(path)?;
            guard._file = Some(worker);
            Some(fmt::layer().with_ansi(false).with_writer(writer))
        }
        None => None,
    };

    // try_init: a global subscriber may already be set (tests, repeated init)
    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .with(file_layer)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
    Ok(guard)
}

fn file_writer(
    path: &Path,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard), LokalError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| config_error(format!("log file '{}' has no file name", path.display())))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_level_is_config_error() {
        let config = LoggingConfig {
            level: "chatty".to_string(),
            file: None,
        };
        let err = init_from_config(&config).err().unwrap();
        assert!(matches!(err, LokalError::ConfigError(_)));
    }

    #[test]
    fn test_file_writer_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("lokal.log");
        let (_writer, _guard) = file_writer(&path).unwrap();
        assert!(dir.path().join("logs").is_dir());
    }
}
