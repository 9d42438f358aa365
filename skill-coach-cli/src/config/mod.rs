use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog to use instead of the bundled one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Body weight for calorie estimates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,

    #[serde(default = "default_duration")]
    pub default_duration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub detailed: bool,

    #[serde(default = "default_true")]
    pub color: bool,
}

// Default value functions
fn default_duration() -> u32 {
    30
}

fn default_true() -> bool {
    true
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            weight_kg: None,
            default_duration: default_duration(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            detailed: false,
            color: default_true(),
        }
    }
}

impl Config {
    /// Get config directory path (~/.skill-coach/)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".skill-coach"))
    }

    /// Get config file path (~/.skill-coach/config.toml)
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Resolve the config file, preferring an explicit path
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::config_file(),
        }
    }

    /// Load configuration, falling back to defaults when the file is missing
    pub fn load_from(config_file: &Path) -> Result<Self> {
        if !config_file.exists() {
            tracing::debug!("Config file {} not found, using defaults", config_file.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(config_file).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file, creating parent directories
    pub fn save_to(&self, config_file: &Path) -> Result<()> {
        if let Some(dir) = config_file.parent() {
            fs::create_dir_all(dir).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_file, contents).context("Failed to write config file")?;

        Ok(())
    }
}
