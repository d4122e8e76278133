use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Once;

use env_logger::{Target, WriteStyle};
use log::LevelFilter;
use thiserror::Error;

use crate::config::LoggingConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("no log file location configured")]
    NoLogFile,
    #[error("failed to create log directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to open log file {path}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

static INIT: Once = Once::new();

/// Install the global logger, writing to the configured file. The terminal is
/// owned by the UI, so nothing is ever written to stdout or stderr.
///
/// Only the first call has an effect.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let path = config.file.clone().ok_or(LoggingError::NoLogFile)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| LoggingError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| LoggingError::OpenFile {
            path: path.clone(),
            source,
        })?;

    let filter = config.filter.clone();
    INIT.call_once(move || {
        let mut builder = env_logger::Builder::new();
        if let Some(filter) = filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(LevelFilter::Info);
        }
        builder
            .write_style(WriteStyle::Never)
            .target(Target::Pipe(Box::new(file)));
        // Another logger may already be installed (tests); ignore that.
        let _ = builder.try_init();
        log::debug!("logging initialized");
    });
    Ok(())
}
