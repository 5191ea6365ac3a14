use std::{fs::File, path::Path, str::FromStr, sync::Arc};

use thiserror::Error;
use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
};

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid LOG_LEVEL '{0}'")]
    LogLevel(String),
    #[error("Failed to install logger: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Logs go to stderr, stdout is for the screen. If a file is given they are copied there too.
pub fn setup_logger(log_level: LevelFilter, log_file: Option<&Path>) -> Result<(), LoggerError> {
    let file_log = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            let writer = BoxMakeWriter::new(Arc::new(file));
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_file(false),
            )
        }
        None => None,
    };

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(false);

    tracing_subscriber::registry()
        .with(
            stderr_log
                .and_then(file_log)
                .with_filter(log_level)
                .with_filter(filter::filter_fn(|metadata| {
                    metadata.target().starts_with("onboard")
                })),
        )
        .try_init()?;

    Ok(())
}

/// Level to log at: the LOG_LEVEL environment variable, if set, overrides the configured one.
pub fn effective_level(env: Option<&str>, config: LevelFilter) -> Result<LevelFilter, LoggerError> {
    match env {
        Some(l) => LevelFilter::from_str(l).map_err(|_| LoggerError::LogLevel(l.to_string())),
        None => Ok(config),
    }
}
