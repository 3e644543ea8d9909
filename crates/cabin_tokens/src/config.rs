//! Naming and ingestion configuration
//!
//! Every generated variable name is derived from a shared root prefix:
//!
//! | Namespace | Prefix (root `dm`) |
//! |-----------|--------------------|
//! | palette   | `--dm-token`       |
//! | common    | `--dm-common`      |
//! | component | `--dm-component`   |
//!
//! Downstream stylesheets depend on these names, so the defaults must not drift.

use serde::{Deserialize, Serialize};

/// Compiler configuration shared by every stage
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct TokenConfig {
    /// Root prefix, without leading dashes
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Separator between path segments
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Field that marks a node as a leaf token
    #[serde(default = "default_leaf_field")]
    pub leaf_field: String,
    /// Marker that opens a reference path, e.g. `{cabin x theme.cabin x.palette.gray.20}`
    #[serde(default = "default_reference_marker")]
    pub reference_marker: String,
    /// Common categories, in emission order
    #[serde(default = "default_common_categories")]
    pub common_categories: Vec<String>,
}

fn default_prefix() -> String {
    "dm".to_string()
}

fn default_separator() -> String {
    "-".to_string()
}

fn default_leaf_field() -> String {
    "value".to_string()
}

fn default_reference_marker() -> String {
    "cabin x theme.cabin x".to_string()
}

fn default_common_categories() -> Vec<String> {
    ["background", "font-color", "border"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            separator: default_separator(),
            leaf_field: default_leaf_field(),
            reference_marker: default_reference_marker(),
            common_categories: default_common_categories(),
        }
    }
}

impl TokenConfig {
    /// Namespace prefixes derived from the root prefix
    pub fn namespaces(&self) -> Namespaces {
        Namespaces::new(&self.prefix)
    }
}

/// The three namespace prefixes, fixed for a run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespaces {
    pub palette: String,
    /// Where palette colour scales are declared; references into the palette
    /// resolve under this namespace
    pub palette_scale: String,
    pub common: String,
    pub component: String,
}

impl Namespaces {
    pub fn new(root: &str) -> Self {
        Self {
            palette: format!("--{root}-token"),
            palette_scale: format!("--{root}-token-palette"),
            common: format!("--{root}-common"),
            component: format!("--{root}-component"),
        }
    }
}

impl Default for Namespaces {
    fn default() -> Self {
        Self::new(&default_prefix())
    }
}
