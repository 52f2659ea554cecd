//! Runtime configuration layered from defaults, a TOML file, and the
//! environment.
//!
//! Precedence, lowest to highest: built-in defaults, the given
//! `costar.toml` (missing files are simply skipped), then `COSTAR_*`
//! environment variables with `__` as the section separator
//! (e.g. `COSTAR_SEARCH__MAX_VISITED=5000`).

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when configuration cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Extraction or parsing failure from any configuration layer.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] figment::Error),
}

/// Top-level configuration for the engine and its CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CostarConfig {
    /// Dataset location settings.
    pub data: DataConfig,
    /// Per-query search limits.
    pub search: SearchConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl CostarConfig {
    /// Loads configuration, optionally layering a TOML file over the
    /// defaults. Environment variables win over both.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            figment = figment.merge(Toml::file(path));
        }
        Ok(figment
            .merge(Env::prefixed("COSTAR_").split("__"))
            .extract()?)
    }
}

/// Dataset location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory containing `people.csv`, `movies.csv` and `stars.csv`.
    pub dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
        }
    }
}

/// Limits applied to a single shortest-path query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Upper bound on people expanded per query. `None` searches the
    /// whole component.
    pub max_visited: Option<usize>,
}

impl SearchConfig {
    /// Creates a config with the given expansion budget.
    #[must_use]
    pub fn with_max_visited(max_visited: usize) -> Self {
        Self {
            max_visited: Some(max_visited),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter; `RUST_LOG` overrides it at runtime.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
