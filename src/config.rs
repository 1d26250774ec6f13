use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ReleaseError, Result};

/// Represents the complete configuration for git-release.
///
/// Controls tag naming, the push remote, where local tool binaries live, and
/// the optional publish command run after tagging.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    /// Prefix applied to version numbers when naming tags (e.g., "v1.2.3")
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    /// Remote that tags are pushed to
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Directory of locally installed tool binaries, prepended to PATH for
    /// every command the release runs
    #[serde(default = "default_local_bin_dir")]
    pub local_bin_dir: String,

    /// Command run after tagging to publish the package (e.g., "npm publish"
    /// or "cargo publish"); skipped when unset
    #[serde(default)]
    pub publish_command: Option<String>,
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_local_bin_dir() -> String {
    "node_modules/.bin".to_string()
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            tag_prefix: default_tag_prefix(),
            remote: default_remote(),
            local_bin_dir: default_local_bin_dir(),
            publish_command: None,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release.toml` in current directory
/// 3. `.release.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(ReleaseConfig)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<ReleaseConfig> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./release.toml").exists() {
        fs::read_to_string("./release.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".release.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(ReleaseConfig::default());
        }
    } else {
        return Ok(ReleaseConfig::default());
    };

    let config: ReleaseConfig =
        toml::from_str(&config_str).map_err(|e| ReleaseError::config(e.to_string()))?;
    Ok(config)
}
