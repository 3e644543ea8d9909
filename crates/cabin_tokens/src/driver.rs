//! Theme driver
//!
//! Runs every stage for each theme and lays the results out as artifacts:
//!
//! ```text
//! palette/<theme>.scss      palette + common + font declarations
//! palette/<theme>.json      their resolved value map
//! components/<theme>.scss   component declarations
//! components/<theme>.json   their resolved value map
//! ```

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::combine::{combine_common, combine_components, Bundle};
use crate::config::TokenConfig;
use crate::error::TokenError;
use crate::format::{format_common, format_components, format_palette};
use crate::theme::{Theme, ThemeDocument};

/// Output directory names, relative to the sink root
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ArtifactLayout {
    #[serde(default = "default_palette_dir")]
    pub palette_dir: String,
    #[serde(default = "default_components_dir")]
    pub components_dir: String,
    /// Extension of the declaration files
    #[serde(default = "default_stylesheet_ext")]
    pub stylesheet_ext: String,
}

fn default_palette_dir() -> String {
    "palette".to_string()
}

fn default_components_dir() -> String {
    "components".to_string()
}

fn default_stylesheet_ext() -> String {
    "scss".to_string()
}

impl Default for ArtifactLayout {
    fn default() -> Self {
        Self {
            palette_dir: default_palette_dir(),
            components_dir: default_components_dir(),
            stylesheet_ext: default_stylesheet_ext(),
        }
    }
}

/// A logical file to persist
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

/// Both bundles of one theme
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeOutput {
    pub name: String,
    pub palette: Bundle,
    pub components: Bundle,
}

impl ThemeOutput {
    /// Stylesheet and JSON artifacts for both bundles.
    ///
    /// The theme name becomes the file stem, so it must be a single plain
    /// path component.
    pub fn artifacts(&self, layout: &ArtifactLayout) -> Result<Vec<Artifact>, TokenError> {
        if !is_plain_file_name(&self.name) {
            tracing::warn!(theme = %self.name, "refusing theme name as file name");
            return Err(TokenError::InvalidThemeName(self.name.clone()));
        }
        let mut out = Vec::with_capacity(4);
        for (dir, bundle) in [
            (&layout.palette_dir, &self.palette),
            (&layout.components_dir, &self.components),
        ] {
            let dir = PathBuf::from(dir);
            out.push(Artifact {
                path: dir.join(format!("{}.{}", self.name, layout.stylesheet_ext)),
                content: bundle.text.clone(),
            });
            out.push(Artifact {
                path: dir.join(format!("{}.json", self.name)),
                content: bundle.values_json()?,
            });
        }
        Ok(out)
    }
}

fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    !name.contains(|c: char| c == '/' || c == '\\')
        && matches!(components.next(), Some(Component::Normal(_)))
        && components.next().is_none()
}

/// Compile one theme into its palette and component bundles
pub fn compile_theme(theme: &Theme, config: &TokenConfig) -> ThemeOutput {
    let palette = format_palette(theme, config);
    let common = format_common(theme, config);
    let font = theme.font.declarations();
    let components = format_components(theme, config);

    let output = ThemeOutput {
        name: theme.name.clone(),
        palette: combine_common(&palette, &common, &font, config),
        components: combine_components(&components, config),
    };
    tracing::info!(
        theme = %theme.name,
        palette = output.palette.values.len(),
        components = output.components.values.len(),
        "compiled theme"
    );
    output
}

/// Compile every theme of a document, in declaration order
pub fn compile_document(document: &ThemeDocument, config: &TokenConfig) -> Vec<ThemeOutput> {
    document
        .themes
        .iter()
        .map(|theme| compile_theme(theme, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn artifact_paths() {
        let theme = Theme::from_json(
            "dark",
            &json!({ "palette": {}, "components": {} }),
            &TokenConfig::default(),
        )
        .unwrap();
        let output = compile_theme(&theme, &TokenConfig::default());
        let paths: Vec<_> = output
            .artifacts(&ArtifactLayout::default())
            .unwrap()
            .into_iter()
            .map(|a| a.path)
            .collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("palette/dark.scss"),
                PathBuf::from("palette/dark.json"),
                PathBuf::from("components/dark.scss"),
                PathBuf::from("components/dark.json"),
            ]
        );
    }

    #[test]
    fn theme_names_cannot_leave_the_output_root() {
        let config = TokenConfig::default();
        for name in ["../../x", "a/b", "..", "", "/etc", "a\\b"] {
            let theme = Theme::from_json(name, &json!({}), &config).unwrap();
            let err = compile_theme(&theme, &config)
                .artifacts(&ArtifactLayout::default())
                .unwrap_err();
            assert!(matches!(err, TokenError::InvalidThemeName(n) if n == name), "{name}");
        }

        let theme = Theme::from_json("high-contrast.v2", &json!({}), &config).unwrap();
        assert!(compile_theme(&theme, &config)
            .artifacts(&ArtifactLayout::default())
            .is_ok());
    }

    #[test]
    fn empty_theme_still_emits_font_declarations() {
        let theme = Theme::from_json("light", &json!({}), &TokenConfig::default()).unwrap();
        let output = compile_theme(&theme, &TokenConfig::default());
        assert_eq!(output.palette.values.len(), 6);
        assert!(output.components.values.is_empty());
    }
}
