//! Configuration file handling.
//!
//! Settings live in a small TOML file. Every key is optional and command
//! line flags take precedence over anything read here.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PGR_PROGRESS_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `<student_id>.json|yaml|yml` records files
    pub records_dir: PathBuf,
    pub format: OutputFormat,
    pub color: bool,
    /// Default tracing filter when neither the env var nor `-v` is given
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            records_dir: PathBuf::from("."),
            format: OutputFormat::Text,
            color: true,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Parse a config file. A relative `records_dir` is taken relative to
    /// the directory containing the file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        if config.records_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.records_dir = parent.join(&config.records_dir);
            }
        }

        Ok(config)
    }

    /// `<config dir>/pgr-progress/config.toml` for the current user.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pgr-progress").join("config.toml"))
    }

    /// Resolve and load the configuration.
    ///
    /// Order: `explicit` path, then `PGR_PROGRESS_CONFIG`, then the default
    /// location. A file named explicitly or through the environment must
    /// exist; the default file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        if let Some(path) = named {
            if !path.is_file() {
                bail!("Config file not found: {}", path.display());
            }
            tracing::debug!(path = %path.display(), "loading config");
            return Self::from_file(&path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading default config");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
