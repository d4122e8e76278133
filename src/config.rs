//! Runtime settings. There is no config file; everything starts from
//! `Default` and `Config::load` only fills in paths that depend on the host.

use std::path::PathBuf;

use directories::BaseDirs;

use crate::poster::{placeholder_uri, PlaceholderSpec};

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".movie-browser";
/// Log file name stored inside the application data directory.
const LOG_FILE_NAME: &str = "movie-browser.log";

/// Logger settings. `filter` follows the `env_logger` filter syntax
/// (e.g. "info" or "movie_browser=debug"); when unset, `RUST_LOG` is used.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Number of movie cards per grid row.
    pub grid_columns: usize,
    /// Terminal rows given to each card.
    pub card_height: u16,
    pub placeholder: PlaceholderSpec,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_columns: 4,
            card_height: 9,
            placeholder: PlaceholderSpec::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Defaults plus the log file location under the user's home directory.
    /// A host without a home directory simply logs nowhere.
    pub fn load() -> Self {
        let mut config = Self::default();
        config.logging.file = log_path();
        config
    }

    pub fn placeholder_uri(&self) -> String {
        placeholder_uri(&self.placeholder)
    }
}

fn log_path() -> Option<PathBuf> {
    let base_dirs = BaseDirs::new()?;
    Some(base_dirs.home_dir().join(DATA_DIR_NAME).join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_grid_layout() {
        let config = Config::default();
        assert_eq!(config.grid_columns, 4);
        assert!(config.card_height >= 5);
        assert!(config.logging.file.is_none());
        assert_eq!(
            config.placeholder_uri(),
            "https://placehold.co/300x450/333/FFF?text=Not+Found"
        );
    }

    #[test]
    fn load_points_log_into_data_dir() {
        if let Some(path) = Config::load().logging.file {
            assert!(path.ends_with(".movie-browser/movie-browser.log"));
        }
    }
}
