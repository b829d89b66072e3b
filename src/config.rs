//! TOML configuration.
//!
//! Loaded from `~/.config/ccprune/config.toml`. Every field is optional so
//! users only write what they want to override; CLI flags take priority over
//! config, which overrides defaults.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Theme name ("claude_code", "classic", "ocean")
    #[serde(default)]
    pub theme: Option<String>,
    /// Override for the `~/.claude` directory
    #[serde(default)]
    pub claude_dir: Option<PathBuf>,
    /// Pruning defaults
    #[serde(default)]
    pub prune: PruneConfig,
}

/// Defaults for the `prune` command.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PruneConfig {
    /// Assistant turns to keep when `--keep` is not given (None = ask via
    /// the boundary picker)
    #[serde(default)]
    pub default_keep: Option<u32>,
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine the config directory")?;
        Ok(base.join("ccprune").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is missing.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    /// Write the config file, creating its directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }

    /// Validate configuration values.
    ///
    /// Returns `Ok(())` if all values are within acceptable bounds, or an
    /// error describing the first invalid value found.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref name) = self.theme {
            if Theme::from_name(name).is_none() {
                return Err(format!(
                    "Unknown theme '{}'. Valid: {}",
                    name,
                    Theme::NAMES.join(", ")
                ));
            }
        }
        if let Some(keep) = self.prune.default_keep {
            if keep > 100_000 {
                return Err(format!(
                    "prune.default_keep {} exceeds maximum (100000)",
                    keep
                ));
            }
        }
        Ok(())
    }
}
