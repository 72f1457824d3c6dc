use std::path::{Path, PathBuf};

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::infra::{config::LogConfig, error::AppError};

const DEFAULT_LOG_FILE_NAME: &str = "imreg.log";

/// Installs the global subscriber. `RUST_LOG` overrides the configured level.
///
/// When a log file is configured the returned guard must outlive every log
/// call; dropping it flushes and closes the file.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>, AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let (file_layer, guard) = match &config.file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(file_appender(path)?);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|error| AppError::LoggingInit(Box::new(error)))?;

    Ok(guard)
}

fn file_appender(path: &Path) -> Result<RollingFileAppender, AppError> {
    let (directory, file_name) = split_log_path(path);

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

fn split_log_path(path: &Path) -> (PathBuf, String) {
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_owned());

    (directory, file_name)
}
