//! Project scaffolding

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::{CabinConfig, CONFIG_FILE};

/// Write a default cabin-tokens.toml and a starter token document.
///
/// Existing files are left alone unless `force` is set.
pub fn init_project(path: &Path, force: bool) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("Failed to create {}", path.display()))?;

    let config = CabinConfig::default();
    write_new(&path.join(CONFIG_FILE), &config.to_toml()?, force)?;
    write_new(&path.join(&config.input.path), STARTER_TOKENS, force)?;

    Ok(())
}

fn write_new(path: &Path, content: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        tracing::warn!(path = %path.display(), "already exists, skipping");
        return Ok(());
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "created");
    Ok(())
}

const STARTER_TOKENS: &str = r##"{
  "cabin x theme": {
    "light": {
      "palette": {
        "gray": {
          "10": { "value": "#fafafa" },
          "20": { "value": "#f5f5f5" }
        }
      },
      "background": {
        "page": { "color": { "value": "{cabin x theme.cabin x.palette.gray.20}" } }
      },
      "font-color": {
        "title": { "primary": { "value": "rgba(0, 0, 0, 0.88)" } }
      },
      "border": {
        "base": { "width": { "value": 1 } }
      },
      "components": {
        "button": {
          "radius": { "default": { "value": 6 } }
        }
      }
    }
  }
}
"##;
