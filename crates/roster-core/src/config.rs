//! Session configuration.
//!
//! Values are resolved in order: explicit builder values (command-line flags
//! and environment variables), then the JSON config file, then defaults under
//! the XDG base directories.

use std::{
    fmt,
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::{RosterError, Result};

const APP_PREFIX: &str = "roster";
const DATABASE_FILE: &str = "roster.db";
const LOG_FILE: &str = "roster.log";
const CONFIG_FILE: &str = "config.json";

/// Number of records shown per page when reading. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub const DEFAULT: PageSize = PageSize(match NonZeroUsize::new(5) {
        Some(size) => size,
        None => unreachable!(),
    });

    /// Validates a page size.
    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size).map(PageSize).ok_or_else(|| {
            RosterError::invalid_input("page_size").with_reason("must be greater than zero")
        })
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// On-disk configuration file contents. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub database: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub page_size: Option<usize>,
}

impl ConfigFile {
    /// Reads and parses a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| RosterError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Fully resolved configuration for one interactive session.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_path: PathBuf,
    pub log_file: PathBuf,
    pub page_size: PageSize,
}

/// Builder for creating a [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    database_path: Option<PathBuf>,
    log_file: Option<PathBuf>,
    page_size: Option<usize>,
    config_file: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses `$XDG_DATA_HOME/roster/roster.db`.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a custom event log path.
    ///
    /// If not specified, uses `$XDG_DATA_HOME/roster/roster.log`.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.log_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    pub fn with_page_size(mut self, page_size: Option<usize>) -> Self {
        if page_size.is_some() {
            self.page_size = page_size;
        }
        self
    }

    /// Sets the JSON config file to read.
    ///
    /// If not specified, `$XDG_CONFIG_HOME/roster/config.json` is read when it
    /// exists.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Resolves the configuration.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Configuration` if the page size is zero.
    /// Returns `RosterError::FileSystem` or `RosterError::Serialization` if an
    /// explicit config file cannot be read or parsed.
    /// Returns `RosterError::XdgDirectory` if a default path cannot be placed.
    pub fn build(self) -> Result<Config> {
        let file = match self.config_file {
            Some(path) => ConfigFile::load(path)?,
            None => match Self::default_config_file() {
                Some(path) => ConfigFile::load(path)?,
                None => ConfigFile::default(),
            },
        };

        let page_size = match self.page_size.or(file.page_size) {
            Some(size) => PageSize::new(size).map_err(|e| RosterError::Configuration {
                message: e.to_string(),
            })?,
            None => PageSize::default(),
        };

        let database_path = match self.database_path.or(file.database) {
            Some(path) => path,
            None => Self::default_data_path(DATABASE_FILE)?,
        };

        let log_file = match self.log_file.or(file.log_file) {
            Some(path) => path,
            None => Self::default_data_path(LOG_FILE)?,
        };

        Ok(Config {
            database_path,
            log_file,
            page_size,
        })
    }

    /// Returns a data file path following the XDG Base Directory
    /// specification, creating its directory.
    fn default_data_path(file: &str) -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_PREFIX)
            .place_data_file(file)
            .map_err(|e| RosterError::XdgDirectory(e.to_string()))
    }

    fn default_config_file() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_PREFIX).find_config_file(CONFIG_FILE)
    }
}
