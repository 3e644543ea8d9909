//! Theme documents
//!
//! A token document holds a set of named themes under a root key:
//!
//! ```json
//! {
//!   "cabin x theme": {
//!     "light": {
//!       "palette":    { "gray": { "20": { "value": "#f5f5f5" } } },
//!       "background": { "page": { "color": { "value": "{cabin x theme.cabin x.palette.gray.20}" } } },
//!       "components": { "button": { "radius": { "default": { "value": 4 } } } },
//!       "fontSizeM": 14
//!     }
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde_json::Value;

use crate::config::TokenConfig;
use crate::error::{Result, TokenError};
use crate::format::FontMetrics;
use crate::tokens::TokenNode;

/// Default key holding the theme set inside a token document
pub const DEFAULT_ROOT_KEY: &str = "cabin x theme";

/// One theme, split into the categories the compiler emits
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: String,
    pub palette: TokenNode,
    /// Category -> sub-group -> tree, in configured category order
    pub common: IndexMap<String, IndexMap<String, TokenNode>>,
    pub components: TokenNode,
    pub font: FontMetrics,
}

impl Theme {
    /// Build a theme from its JSON object.
    ///
    /// Missing categories are logged and contribute no tokens.
    pub fn from_json(name: &str, value: &Value, config: &TokenConfig) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(TokenError::InvalidTheme(name.to_string()));
        };
        let node =
            |v: &Value| TokenNode::from_json(v, &config.leaf_field, &config.reference_marker);

        let palette = match map.get("palette") {
            Some(v) => node(v),
            None => {
                tracing::warn!(theme = name, "theme has no palette");
                TokenNode::empty()
            }
        };

        let mut common = IndexMap::new();
        for category in &config.common_categories {
            let Some(Value::Object(groups)) = map.get(category) else {
                tracing::warn!(theme = name, category = %category, "common category missing");
                continue;
            };
            let groups = groups
                .iter()
                .map(|(group, v)| (group.clone(), node(v)))
                .collect();
            common.insert(category.clone(), groups);
        }

        let components = match map.get("components") {
            Some(v) => node(v),
            None => {
                tracing::warn!(theme = name, "theme has no components");
                TokenNode::empty()
            }
        };

        let font = FontMetrics::from_theme(name, value);

        Ok(Self {
            name: name.to_string(),
            palette,
            common,
            components,
            font,
        })
    }
}

/// All themes of a token document, in declaration order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeDocument {
    pub themes: Vec<Theme>,
}

impl ThemeDocument {
    /// Extract the theme set under `root_key`.
    ///
    /// When `root_key` is absent the whole document is taken as the theme set.
    pub fn from_json(document: &Value, root_key: &str, config: &TokenConfig) -> Result<Self> {
        let Value::Object(top) = document else {
            return Err(TokenError::NotAnObject(json_kind(document)));
        };
        let set = match top.get(root_key) {
            Some(Value::Object(set)) => set,
            Some(other) => return Err(TokenError::NotAnObject(json_kind(other))),
            None => {
                tracing::debug!(root_key, "root key absent, using whole document as theme set");
                top
            }
        };

        let themes = set
            .iter()
            .map(|(name, value)| Theme::from_json(name, value, config))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { themes })
    }

    /// Parse a JSON token document
    pub fn parse_str(source: &str, root_key: &str, config: &TokenConfig) -> Result<Self> {
        let document: Value = serde_json::from_str(source)?;
        Self::from_json(&document, root_key, config)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|t| t.name.as_str())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Number};

    #[test]
    fn reads_theme_set_under_root_key() {
        let doc = json!({
            "cabin x theme": {
                "light": { "palette": {}, "components": {} },
                "dark": { "palette": {}, "components": {} }
            }
        });
        let doc = ThemeDocument::from_json(&doc, DEFAULT_ROOT_KEY, &TokenConfig::default()).unwrap();
        assert_eq!(doc.names().collect::<Vec<_>>(), vec!["light", "dark"]);
    }

    #[test]
    fn missing_root_key_uses_whole_document() {
        let doc = json!({ "light": { "palette": {} } });
        let doc = ThemeDocument::from_json(&doc, DEFAULT_ROOT_KEY, &TokenConfig::default()).unwrap();
        assert_eq!(doc.themes.len(), 1);
    }

    #[test]
    fn missing_categories_are_tolerated() {
        let theme = Theme::from_json(
            "light",
            &json!({ "background": { "page": { "color": { "value": "#fff" } } } }),
            &TokenConfig::default(),
        )
        .unwrap();
        assert_eq!(theme.palette, TokenNode::empty());
        assert_eq!(theme.components, TokenNode::empty());
        assert_eq!(theme.common.keys().collect::<Vec<_>>(), vec!["background"]);
    }

    #[test]
    fn non_object_theme_is_rejected() {
        let err = ThemeDocument::from_json(
            &json!({ "cabin x theme": { "light": 3 } }),
            DEFAULT_ROOT_KEY,
            &TokenConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, TokenError::InvalidTheme(name) if name == "light"));
    }

    #[test]
    fn non_object_document_is_rejected() {
        let err = ThemeDocument::parse_str("[]", DEFAULT_ROOT_KEY, &TokenConfig::default())
            .unwrap_err();
        assert!(matches!(err, TokenError::NotAnObject("an array")));
    }

    #[test]
    fn bad_font_metric_stays_within_its_theme() {
        let doc = json!({
            "cabin x theme": {
                "light": { "fontSizeM": 15 },
                "dark": { "fontSizeS": "13", "lineHeightM": { "px": 20 } }
            }
        });
        let doc = ThemeDocument::from_json(&doc, DEFAULT_ROOT_KEY, &TokenConfig::default()).unwrap();
        assert_eq!(doc.names().collect::<Vec<_>>(), vec!["light", "dark"]);
        assert_eq!(doc.themes[0].font.font_size_m, Number::from(15));
        assert_eq!(doc.themes[1].font.font_size_s, Number::from(13));
        assert_eq!(doc.themes[1].font.line_height_m, Number::from(22));
    }
}
