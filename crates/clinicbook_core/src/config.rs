//! Session configuration.
//!
//! # Responsibility
//! - Load `AppConfig` from an optional JSON file.
//! - Apply the `CLINICBOOK_LOG_LEVEL` environment override.
//!
//! # Invariants
//! - A missing file yields defaults; a malformed file is an error.
//! - Fields absent from the file keep their defaults.

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Environment variable overriding `log_level`.
pub const LOG_LEVEL_ENV: &str = "CLINICBOOK_LOG_LEVEL";

/// Runtime settings for one CLI session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    /// Must be absolute when passed to `init_logging`.
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: std::env::temp_dir().join("clinicbook-logs"),
        }
    }
}

impl AppConfig {
    /// Reads `path` (if given and present) and applies the environment
    /// override.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_level_override(std::env::var(LOG_LEVEL_ENV).ok()))
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|err| ConfigError::Read(path.to_path_buf(), err))?;
        serde_json::from_str(&raw).map_err(|err| ConfigError::Parse(path.to_path_buf(), err))
    }

    /// Replaces `log_level` with a non-blank override.
    pub fn with_level_override(mut self, level: Option<String>) -> Self {
        if let Some(level) = level.filter(|value| !value.trim().is_empty()) {
            self.log_level = level;
        }
        self
    }
}

/// Configuration load failure.
#[derive(Debug)]
pub enum ConfigError {
    Read(PathBuf, std::io::Error),
    Parse(PathBuf, serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(path, err) => write!(f, "failed to read config `{}`: {err}", path.display()),
            Self::Parse(path, err) => {
                write!(f, "invalid config `{}`: {err}", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read(_, err) => Some(err),
            Self::Parse(_, err) => Some(err),
        }
    }
}
