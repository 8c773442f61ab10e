use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use dagbok_client::DEFAULT_API_URL;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the journal backend, e.g. "http://localhost:5555/api"
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    std::env::var("DAGBOK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("dagbok")
            .join("config.toml"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }
}
