use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::Level;

/// Root session-run configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SessionRunConfig {
    /// Path to the machine definition JSON.
    pub machine: PathBuf,
    #[serde(default)]
    pub total_games: u32,
    #[serde(default)]
    pub start_games: u32,
    /// Observed counts per role id. Ignored when a simulation is requested.
    #[serde(default)]
    pub counts: BTreeMap<String, u32>,
    #[serde(default)]
    pub simulate: Option<SimulateConfig>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SessionRunConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let cfg: SessionRunConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.machine.as_os_str().is_empty() {
            return Err(ValidationError::InvalidField {
                field: "machine".to_string(),
                message: "machine definition path must not be empty".to_string(),
            });
        }

        if self.start_games > self.total_games {
            return Err(ValidationError::InvalidField {
                field: "start_games".to_string(),
                message: format!(
                    "starting counter reading {} exceeds total games {}",
                    self.start_games, self.total_games
                ),
            });
        }

        if self.logging.level().is_none() {
            return Err(ValidationError::InvalidField {
                field: "logging.level".to_string(),
                message: format!("unknown log level '{}'", self.logging.level),
            });
        }

        Ok(())
    }
}

/// Optional simulation block: generate counts for a known true setting
/// instead of replaying configured ones.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SimulateConfig {
    pub setting: String,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Write the full report as JSON to this path.
    #[serde(default)]
    pub json: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
}

impl LoggingConfig {
    pub fn level(&self) -> Option<Level> {
        self.level.parse().ok()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            level: default_level(),
            log_path: default_log_path(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_log_path() -> PathBuf {
    PathBuf::from("slotsense.log.jsonl")
}

/// Parses a `role=count` override from the command line.
pub fn parse_count_override(raw: &str) -> Result<(String, u32), ValidationError> {
    let Some((role, count)) = raw.split_once('=') else {
        return Err(ValidationError::InvalidField {
            field: "count".to_string(),
            message: format!("expected ROLE=COUNT, got '{raw}'"),
        });
    };
    let count = count
        .trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidField {
            field: "count".to_string(),
            message: format!("'{raw}' has a non-numeric count"),
        })?;
    Ok((role.trim().to_string(), count))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid config at {path}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
