use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

static DEFAULT_API_URL: &str = "http://localhost:3333";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Global configuration at ~/.config/planner/config.toml
///
/// The owner fields, when set, are attached to every trip created from
/// this device.
#[derive(Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: default_api_url(),
            owner_name: None,
            owner_email: None,
        }
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("planner");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when absent.
    pub fn load() -> Result<Config> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config at {}: {}", path.display(), e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_to_missing_fields() {
        let config: Config = toml::from_str("owner_name = \"Diego\"").unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.owner_name.as_deref(), Some("Diego"));
        assert_eq!(config.owner_email, None);
    }
}
