//! Configuration management for the resume builder

use crate::error::{Result, ResumeBuilderError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the resume and settings JSON files.
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub color_output: bool,
    /// Show the advisor's top improvements alongside the score.
    pub show_tips: bool,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-builder");

        Self {
            storage: StorageConfig { data_dir },
            output: OutputConfig {
                color_output: true,
                show_tips: true,
            },
        }
    }
}

impl Config {
    /// Load configuration from the default location, writing defaults on
    /// first run, or from an explicit path when one is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read_from(path),
            None => {
                let config_path = Self::config_path();
                if config_path.exists() {
                    Self::read_from(&config_path)
                } else {
                    let config = Self::default();
                    config.save()?;
                    Ok(config)
                }
            }
        }
    }

    fn read_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ResumeBuilderError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeBuilderError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-builder")
            .join("config.toml")
    }
}
