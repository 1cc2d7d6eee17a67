//! Configuration for the toolsmith CLI.
//!
//! Loaded from .toolsmith.yml in the current directory or
//! ~/.config/toolsmith/toolsmith.yml.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration for toolsmith.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Phar Lap installation settings.
    pub pharlap: PharLapConfig,

    /// Tool selection settings.
    pub tools: ToolsConfig,
}

impl GlobalConfig {
    /// Load configuration with fallback chain.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. .toolsmith.yml in current directory
    /// 3. ~/.config/toolsmith/toolsmith.yml
    /// 4. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // Explicit path takes precedence
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        // Try project config
        let project_config = PathBuf::from(".toolsmith.yml");
        if project_config.exists() {
            match Self::load_from_file(&project_config) {
                Ok(config) => {
                    log::info!("Loaded config from .toolsmith.yml");
                    return Ok(config);
                }
                Err(e) => {
                    log::warn!("Failed to load .toolsmith.yml: {}", e);
                }
            }
        }

        // Try user config
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("toolsmith").join("toolsmith.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", user_config.display());
                        return Ok(config);
                    }
                    Err(e) => {
                        log::warn!("Failed to load {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // Use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        for name in &self.tools.preferred {
            if name.trim().is_empty() {
                eyre::bail!("tools.preferred must not contain empty names");
            }
        }
        if let Some(root) = &self.pharlap.root {
            if root.as_os_str().is_empty() {
                eyre::bail!("pharlap.root must not be empty when set");
            }
        }
        Ok(())
    }
}

/// Phar Lap installation settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PharLapConfig {
    /// Installation root; overrides the ETSDIR process variable.
    pub root: Option<PathBuf>,
}

/// Tool selection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Tool names tried in order when no tool is named explicitly.
    pub preferred: Vec<String>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            preferred: vec!["386asm".to_string(), "as".to_string()],
        }
    }
}
