use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, TagReleaseError};

/// Represents the complete configuration for tag-release.
///
/// Controls the editor fallback, the emitted message file, and confirmation behavior.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_editor_fallback() -> String {
    "vi".to_string()
}

/// Editor selection for interactive message entry.
///
/// `$EDITOR` always wins; the fallback applies when it is unset.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EditorConfig {
    #[serde(default = "default_editor_fallback")]
    pub fallback: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            fallback: default_editor_fallback(),
        }
    }
}

fn default_message_file() -> String {
    "RELEASE_MSG".to_string()
}

/// Configuration for the emitted commit-message artifact.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_message_file")]
    pub message_file: String,

    #[serde(default)]
    pub include_commits: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            message_file: default_message_file(),
            include_commits: false,
        }
    }
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub skip_confirmation: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `tagrelease.toml` in current directory
/// 3. `~/.config/.tagrelease.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./tagrelease.toml").exists() {
        fs::read_to_string("./tagrelease.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".tagrelease.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| TagReleaseError::config(e.to_string()))?;
    Ok(config)
}
