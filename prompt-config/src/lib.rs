//! Configuration management for Prompt Lab.
//!
//! A project is a root directory holding a `prompts/` tree and, optionally, a
//! `promptlab.toml` file overriding the defaults below.

#![warn(missing_docs, clippy::pedantic)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use prompt_primitives::{DEFAULT_METRIC, DEFAULT_TOP_LIMIT};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "promptlab.toml";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Source [`std::io::Error`].
        #[source]
        source: io::Error,
    },
    /// The configuration file is not valid TOML for [`LabConfig`].
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        /// Path of the configuration file.
        path: PathBuf,
        /// Source TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Defaults for the analytics commands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Metric used by `top` when none is given.
    pub metric: String,
    /// Number of prompts shown by `top` when none is given.
    pub top: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            metric: DEFAULT_METRIC.to_owned(),
            top: DEFAULT_TOP_LIMIT,
        }
    }
}

/// Project configuration.
///
/// Relative paths are resolved against [`LabConfig::root`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Project root directory.
    #[serde(skip)]
    pub root: PathBuf,
    /// Directory holding prompt records.
    pub prompts_dir: PathBuf,
    /// Schema file; the bundled schema is used when unset.
    pub schema: Option<PathBuf>,
    /// Analytics defaults.
    pub analytics: AnalyticsConfig,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            prompts_dir: PathBuf::from("prompts"),
            schema: None,
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl LabConfig {
    /// Loads `promptlab.toml` from `root`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file exists but cannot be read or parsed.
    pub fn discover(root: impl Into<PathBuf>) -> ConfigResult<Self> {
        let root = root.into();
        let path = root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            debug!(root = %root.display(), "no config file, using defaults");
            return Ok(Self {
                root,
                ..Self::default()
            });
        }
        Self::from_file(root, &path)
    }

    /// Loads configuration from an explicit file, resolving paths against `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn from_file(root: impl Into<PathBuf>, path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.root = root.into();
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Overrides the schema file.
    #[must_use]
    pub fn with_schema(mut self, schema: impl Into<PathBuf>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Returns the resolved prompts directory.
    #[must_use]
    pub fn prompts_path(&self) -> PathBuf {
        self.root.join(&self.prompts_dir)
    }

    /// Returns the resolved schema path, if one is configured.
    #[must_use]
    pub fn schema_path(&self) -> Option<PathBuf> {
        self.schema.as_ref().map(|schema| self.root.join(schema))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LabConfig::discover(dir.path()).unwrap();
        assert_eq!(config.prompts_path(), dir.path().join("prompts"));
        assert_eq!(config.schema_path(), None);
        assert_eq!(config.analytics.metric, "effectiveness");
        assert_eq!(config.analytics.top, 10);
    }

    #[test]
    fn reads_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "prompts_dir = \"library\"\nschema = \"schema/prompt.json\"\n\n[analytics]\ntop = 3\n",
        )
        .unwrap();

        let config = LabConfig::discover(dir.path()).unwrap();
        assert_eq!(config.prompts_path(), dir.path().join("library"));
        assert_eq!(
            config.schema_path(),
            Some(dir.path().join("schema/prompt.json"))
        );
        assert_eq!(config.analytics.top, 3);
        assert_eq!(config.analytics.metric, "effectiveness");
    }

    #[test]
    fn rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "prompts_dir = [").unwrap();
        let err = LabConfig::discover(dir.path()).expect_err("bad toml");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn schema_override_wins() {
        let config = LabConfig::default().with_schema("/abs/schema.json");
        assert_eq!(config.schema_path(), Some(PathBuf::from("/abs/schema.json")));
    }
}
