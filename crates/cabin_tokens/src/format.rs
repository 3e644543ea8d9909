//! Category formatters
//!
//! Each formatter picks one part of a [`Theme`] and flattens it under its
//! namespace:
//!
//! - palette:    `--dm-token-palette-<family>-<step>`
//! - common:     `--dm-common-<category>-<group>-<path>`
//! - components: `--dm-component-<component>-<property>-<path>`
//!
//! Font sizes and line heights are not tree-derived; see [`FontMetrics`].

use indexmap::IndexMap;
use serde_json::{Number, Value};

use crate::config::TokenConfig;
use crate::flatten::{flatten, FlatTokenMap};
use crate::theme::Theme;
use crate::tokens::format_number;

/// Flatten the theme palette under `--<root>-token-palette`
pub fn format_palette(theme: &Theme, config: &TokenConfig) -> FlatTokenMap {
    let ns = config.namespaces();
    let out = flatten(&theme.palette, &ns.palette_scale, &config.separator);
    tracing::debug!(theme = %theme.name, tokens = out.len(), "formatted palette");
    out
}

/// Flatten every sub-group of every common category into one map
pub fn format_common(theme: &Theme, config: &TokenConfig) -> FlatTokenMap {
    let ns = config.namespaces();
    let sep = &config.separator;
    let mut out = FlatTokenMap::new();
    for (category, groups) in &theme.common {
        for (group, node) in groups {
            let prefix = format!("{}{sep}{category}{sep}{group}", ns.common);
            out.extend(flatten(node, &prefix, sep));
        }
    }
    tracing::debug!(theme = %theme.name, tokens = out.len(), "formatted common tokens");
    out
}

/// Flatten the component tree directly under `--<root>-component`
pub fn format_components(theme: &Theme, config: &TokenConfig) -> FlatTokenMap {
    let ns = config.namespaces();
    let out = flatten(&theme.components, &ns.component, &config.separator);
    tracing::debug!(theme = %theme.name, tokens = out.len(), "formatted component tokens");
    out
}

/// Font declarations: fixed names, unit-less values
pub type FontDeclarations = IndexMap<String, String>;

pub const FONT_SIZE_S: &str = "--cx-font-size-s-default";
pub const FONT_SIZE_M: &str = "--cx-font-size-m-default";
pub const FONT_SIZE_L: &str = "--cx-font-size-l-default";
pub const LINE_HEIGHT_S: &str = "--cx-font-size-s-default-line-height";
pub const LINE_HEIGHT_M: &str = "--cx-font-size-m-default-line-height";
pub const LINE_HEIGHT_L: &str = "--cx-font-size-l-default-line-height";

/// Default font sizes and line heights of the three control sizes.
///
/// Read from optional top-level fields of a theme (`fontSizeS`, `lineHeightM`, ...).
#[derive(Clone, Debug, PartialEq)]
pub struct FontMetrics {
    pub font_size_s: Number,
    pub font_size_m: Number,
    pub font_size_l: Number,
    pub line_height_s: Number,
    pub line_height_m: Number,
    pub line_height_l: Number,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            font_size_s: 12.into(),
            font_size_m: 14.into(),
            font_size_l: 16.into(),
            line_height_s: 18.into(),
            line_height_m: 22.into(),
            line_height_l: 24.into(),
        }
    }
}

impl FontMetrics {
    /// Pick the metric fields out of the theme object `theme` named `name`.
    ///
    /// Numeric strings (`"13"`) are accepted. Any other non-number is logged
    /// and replaced by that field's default.
    pub fn from_theme(name: &str, theme: &Value) -> Self {
        let defaults = Self::default();
        let field = |key: &str, default: Number| -> Number {
            match theme.get(key) {
                None => default,
                Some(Value::Number(n)) => n.clone(),
                Some(other) => match other.as_str().map(|s| s.trim().parse::<Number>()) {
                    Some(Ok(n)) => n,
                    _ => {
                        tracing::warn!(
                            theme = name,
                            field = key,
                            value = %other,
                            "font metric is not a number, using default"
                        );
                        default
                    }
                },
            }
        };
        Self {
            font_size_s: field("fontSizeS", defaults.font_size_s),
            font_size_m: field("fontSizeM", defaults.font_size_m),
            font_size_l: field("fontSizeL", defaults.font_size_l),
            line_height_s: field("lineHeightS", defaults.line_height_s),
            line_height_m: field("lineHeightM", defaults.line_height_m),
            line_height_l: field("lineHeightL", defaults.line_height_l),
        }
    }

    /// The six declarations, bypassing flattening and resolution
    pub fn declarations(&self) -> FontDeclarations {
        [
            (FONT_SIZE_S, &self.font_size_s),
            (FONT_SIZE_M, &self.font_size_m),
            (FONT_SIZE_L, &self.font_size_l),
            (LINE_HEIGHT_S, &self.line_height_s),
            (LINE_HEIGHT_M, &self.line_height_m),
            (LINE_HEIGHT_L, &self.line_height_l),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), format_number(value)))
        .collect()
    }
}
