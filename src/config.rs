//! User configuration for the form engine and the `cadastro` binary

use crate::rules::Rules;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "cadastro=info";

/// Optional overrides, all absent by default
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CadastroConfig {
    /// Oldest accepted birth date, in calendar years before today
    pub max_age_years: Option<u32>,
    /// Age below which parents' names are required
    pub age_of_majority: Option<u32>,
    /// Minimum password length
    pub min_password_length: Option<usize>,
    /// `tracing_subscriber` filter directive
    pub log_filter: Option<String>,
}

impl CadastroConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("br", "cadastro", "cadastro")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: CadastroConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform config directory
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validation thresholds with this config's overrides applied
    pub fn rules(&self) -> Rules {
        let defaults = Rules::default();
        Rules {
            max_age_years: self.max_age_years.unwrap_or(defaults.max_age_years),
            age_of_majority: self.age_of_majority.unwrap_or(defaults.age_of_majority),
            min_password_length: self
                .min_password_length
                .unwrap_or(defaults.min_password_length),
        }
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
