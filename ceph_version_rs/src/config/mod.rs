//! Configuration of the inspector.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::{LevelFilter, ParseLevelError};
use semver::Version;
use thiserror::Error;


pub const APP_NAME: &str = env!("CARGO_CRATE_NAME", "binary must be compiled by Cargo");

const APP_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "binary must be compiled by Cargo");
lazy_static::lazy_static! {
    pub static ref APP_VERSION: Version = APP_VERSION_STR.parse().unwrap();
}

/// Variable with the maximum level of log records.
pub const LOG_LEVEL_VAR: &str = "CEPH_VERSION_LOG_LEVEL";
/// Variable with the directory to write log files into.
pub const LOG_DIR_VAR: &str = "CEPH_VERSION_LOG_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid log level `{value}` in {variable}: {source}")]
    LogLevel {
        variable: &'static str,
        value: String,
        #[source]
        source: ParseLevelError,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    name: String,
    version: Version,
    log_level: LevelFilter,
    log_dir: Option<PathBuf>,
}

impl Config {
    pub const fn new(
        name: String,
        version: Version,
        log_level: LevelFilter,
        log_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            name,
            version,
            log_level,
            log_dir,
        }
    }

    /// Reads logging overrides from the process environment.
    ///
    /// # Errors
    /// An error is returned if the log level variable is not a valid level.
    ///
    pub fn from_env() -> Result<Self, ConfigError> {
        let log_level = env::var(LOG_LEVEL_VAR).ok();
        let log_dir = env::var_os(LOG_DIR_VAR);
        Self::from_vars(log_level, log_dir)
    }

    fn from_vars(log_level: Option<String>, log_dir: Option<OsString>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = log_level.filter(|value| !value.trim().is_empty()) {
            config.log_level = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::LogLevel {
                    variable: LOG_LEVEL_VAR,
                    value,
                    source,
                })?;
        }
        config.log_dir = log_dir.filter(|dir| !dir.is_empty()).map(PathBuf::from);
        Ok(config)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    /// Directory for log files; console only if `None`.
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            APP_NAME.to_string(),
            APP_VERSION.clone(),
            LevelFilter::Info,
            None,
        )
    }
}
