//! Section combinators
//!
//! Wrap resolved sections into one `:root,:host { ... }` block per output file
//! and merge their value maps.

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::TokenConfig;
use crate::flatten::FlatTokenMap;
use crate::format::FontDeclarations;
use crate::resolve::{resolve, PrefixKind, ResolvedSection, ResolvedTokenMap};

/// Text and value map destined for one stylesheet/JSON file pair
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Bundle {
    pub text: String,
    pub values: ResolvedTokenMap,
    /// Declaring name -> referenced variable name, for linting
    #[serde(skip)]
    pub references: IndexMap<String, String>,
}

impl Bundle {
    /// Compact JSON of the value map
    pub fn values_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.values)
    }
}

fn banner(title: &str) -> String {
    format!("/***************** {title} *************************/")
}

/// Combine palette, common and font declarations into the palette file bundle.
///
/// Palette entries resolve as palette tokens, common entries as common tokens;
/// font declarations are copied verbatim. Value maps are merged in that order,
/// later entries replacing earlier ones with the same name.
pub fn combine_common(
    palette: &FlatTokenMap,
    common: &FlatTokenMap,
    font: &FontDeclarations,
    config: &TokenConfig,
) -> Bundle {
    let palette = resolve(palette, PrefixKind::Palette, config);
    let common = resolve(common, PrefixKind::Common, config);
    let font_text: String = font
        .iter()
        .map(|(name, value)| format!("{name}: {value};\n"))
        .collect();

    let text = format!(
        "\n:root,:host{{\n{}\n{}\n{}\n{}\n{}\n{}\n}}\n",
        banner("palette"),
        palette.text,
        banner("common"),
        common.text,
        banner("font"),
        font_text,
    );

    let mut bundle = merge([palette, common]);
    bundle.values.extend(font.iter().map(|(k, v)| (k.clone(), v.clone())));
    bundle.text = text;
    bundle
}

/// Wrap the component section into the components file bundle
pub fn combine_components(components: &FlatTokenMap, config: &TokenConfig) -> Bundle {
    let section = resolve(components, PrefixKind::Both, config);
    let text = format!(
        "\n:root,:host{{\n{}\n{}\n}}\n",
        banner("components"),
        section.text
    );
    Bundle {
        text,
        values: section.values,
        references: section.references,
    }
}

fn merge<const N: usize>(sections: [ResolvedSection; N]) -> Bundle {
    let mut bundle = Bundle::default();
    for section in sections {
        bundle.values.extend(section.values);
        bundle.references.extend(section.references);
    }
    bundle
}
