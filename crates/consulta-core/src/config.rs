//! Configuration management for consulta.
//!
//! Loads configuration from ${CONSULTA_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// Every field is optional in the file; missing fields fall back to defaults
/// so a partial config.toml is always valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log filter directive (e.g. "info", "consulta_core=debug").
    /// The RUST_LOG environment variable takes precedence when set.
    pub log_filter: Option<String>,

    /// Path override for the account records file.
    /// Defaults to ${CONSULTA_HOME}/accounts.json.
    pub accounts_file: Option<String>,
}

impl Config {
    /// Loads configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    ///
    /// A missing file returns defaults; a present but malformed file is an
    /// error (silently ignoring a broken config hides user mistakes).
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Creates a config file with commented defaults.
    ///
    /// Fails if the file already exists (no silent overwrite).
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_contents())
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    /// Returns the effective path of the account records file.
    pub fn accounts_path(&self) -> PathBuf {
        self.accounts_file
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(paths::accounts_path)
    }
}

fn default_config_contents() -> String {
    "\
# consulta configuration
#
# All settings are optional; uncomment to override.

# Log filter directive (RUST_LOG wins when set).
# log_filter = \"info\"

# Path of the account records file.
# accounts_file = \"/path/to/accounts.json\"
"
    .to_string()
}

pub mod paths {
    //! Path resolution for consulta files.
    //!
    //! CONSULTA_HOME resolution order:
    //! 1. CONSULTA_HOME environment variable (if set)
    //! 2. ~/.config/consulta

    use std::path::PathBuf;

    /// Returns the user's home directory.
    pub fn home_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(PathBuf::from)
    }

    /// Returns the consulta home directory.
    ///
    /// Checks CONSULTA_HOME env var first, falls back to ~/.config/consulta.
    pub fn consulta_home() -> PathBuf {
        if let Some(home) = std::env::var_os("CONSULTA_HOME") {
            return PathBuf::from(home);
        }
        home_dir()
            .map(|home| home.join(".config").join("consulta"))
            .unwrap_or_else(|| PathBuf::from(".consulta"))
    }

    /// Returns the path of config.toml.
    pub fn config_path() -> PathBuf {
        consulta_home().join("config.toml")
    }

    /// Returns the default path of the account records file.
    pub fn accounts_path() -> PathBuf {
        consulta_home().join("accounts.json")
    }

    /// Returns the directory used for log files.
    pub fn logs_dir() -> PathBuf {
        consulta_home().join("logs")
    }
}
