//! Settings loaded from `paperdesk.toml` and `PAPERDESK_*` environment
//! variables. Command-line flags are applied on top by the binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "paperdesk.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub toast_ttl_ms: u64,
    pub tick_rate_ms: u64,
    pub start_path: String,
    pub log_filter: String,
    pub log_file: Option<PathBuf>,
    pub snapshot_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            toast_ttl_ms: 4000,
            tick_rate_ms: 250,
            start_path: "/".into(),
            log_filter: "info".into(),
            log_file: None,
            snapshot_file: "paperdesk-session.json".into(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from [`DEFAULT_CONFIG_FILE`] when it
    /// exists, then applies environment overrides.
    ///
    /// An explicit `path` that cannot be read is an error; a missing default
    /// file is not.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        settings.apply_env(|key| std::env::var(key).ok())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `PAPERDESK_*` overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("PAPERDESK_TOAST_TTL_MS") {
            self.toast_ttl_ms = parse_millis("PAPERDESK_TOAST_TTL_MS", &v)?;
        }
        if let Some(v) = lookup("PAPERDESK_TICK_RATE_MS") {
            self.tick_rate_ms = parse_millis("PAPERDESK_TICK_RATE_MS", &v)?;
        }
        if let Some(v) = lookup("PAPERDESK_START_PATH") {
            self.start_path = v;
        }
        if let Some(v) = lookup("PAPERDESK_LOG") {
            self.log_filter = v;
        }
        if let Some(v) = lookup("PAPERDESK_LOG_FILE") {
            self.log_file = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup("PAPERDESK_SNAPSHOT_FILE") {
            self.snapshot_file = PathBuf::from(v);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.toast_ttl_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "toast_ttl_ms",
                value: "0".into(),
            });
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "tick_rate_ms",
                value: "0".into(),
            });
        }
        Ok(())
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

fn parse_millis(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        })
}
