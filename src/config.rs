use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ImageTagsError, Result};

/// Represents the complete configuration for image-tags.
///
/// Describes the publish target: registry host, base image name, and which
/// branch is treated as the release branch.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_registry")]
    pub registry: String,

    /// Base image name, e.g. "acme/widget". May instead be supplied with
    /// the `--image` flag, which takes precedence.
    #[serde(default)]
    pub image: Option<String>,

    #[serde(default = "default_release_branch")]
    pub release_branch: String,
}

fn default_registry() -> String {
    "ghcr.io".to_string()
}

fn default_release_branch() -> String {
    "master".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            registry: default_registry(),
            image: None,
            release_branch: default_release_branch(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `imagetags.toml` in current directory
/// 3. `~/.config/.imagetags.toml` in user config directory
/// 4. Default configuration if no file found
///
/// A file that exists but cannot be read or parsed is an error.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./imagetags.toml").exists() {
        fs::read_to_string("./imagetags.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".imagetags.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| ImageTagsError::config(e.to_string()))?;
    Ok(config)
}
