//! Shell configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the interactive shell.
///
/// Every key is optional in the file; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Spell text character by character.
    pacing: bool,

    /// Delay after each character of text, in milliseconds.
    char_delay_ms: u64,

    /// Delay after each character of a rendered board, in milliseconds.
    board_char_delay_ms: u64,

    /// Length of a dramatic pause, in milliseconds.
    pause_ms: u64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            pacing: true,
            char_delay_ms: 40,
            board_char_delay_ms: 20,
            pause_ms: 200,
        }
    }
}

impl ShellConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`], both naming
    /// the file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(pacing = config.pacing, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns this configuration with pacing switched off.
    pub fn without_pacing(mut self) -> Self {
        self.pacing = false;
        self
    }
}

/// Failure to load a [`ShellConfig`] file.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[display("Failed to read config file {}: {source}", path.display())]
    Read {
        /// File that was being loaded.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for a [`ShellConfig`].
    #[display("Failed to parse config file {}: {source}", path.display())]
    Parse {
        /// File that was being loaded.
        path: PathBuf,
        /// Deserialization error, with the offending key or line.
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// The file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}
