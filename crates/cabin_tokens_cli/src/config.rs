//! cabin-tokens configuration file handling

use anyhow::{Context, Result};
use cabin_tokens::{ArtifactLayout, TokenConfig, DEFAULT_ROOT_KEY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "cabin-tokens.toml";

/// Top-level configuration (cabin-tokens.toml)
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct CabinConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub tokens: TokenConfig,
}

/// Token document location
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct InputConfig {
    /// Token document (relative to the config file)
    #[serde(default = "default_input")]
    pub path: PathBuf,
    /// Key holding the theme set inside the document
    #[serde(default = "default_root_key")]
    pub root_key: String,
}

fn default_input() -> PathBuf {
    PathBuf::from("token.json")
}

fn default_root_key() -> String {
    DEFAULT_ROOT_KEY.to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input(),
            root_key: default_root_key(),
        }
    }
}

/// Where generated files go
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct OutputConfig {
    /// Output root (relative to the config file)
    #[serde(default = "default_output")]
    pub dir: PathBuf,
    #[serde(flatten)]
    pub layout: ArtifactLayout,
}

fn default_output() -> PathBuf {
    PathBuf::from(".")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output(),
            layout: ArtifactLayout::default(),
        }
    }
}

impl CabinConfig {
    /// Load configuration from a directory (looks for cabin-tokens.toml).
    ///
    /// Relative input and output paths are anchored at the config file's directory.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No {} found in {}. Run `cabin-tokens init` to create one.",
                CONFIG_FILE,
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let mut config: CabinConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        if let Some(base) = config_path.parent() {
            config.input.path = base.join(&config.input.path);
            config.output.dir = base.join(&config.output.dir);
        }

        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
