//! Dangling reference detection
//!
//! Resolution never checks that a referenced token exists. This pass compares
//! every reference target of a theme with the names that theme declares.

use std::collections::HashSet;

use serde::Serialize;

use crate::driver::ThemeOutput;

/// A reference whose target is not declared in the same theme
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    pub theme: String,
    /// Declaring variable
    pub name: String,
    /// Missing variable it points at
    pub target: String,
}

/// References of `output` that no declaration in either of its bundles satisfies
pub fn dangling_references(output: &ThemeOutput) -> Vec<DanglingReference> {
    let declared: HashSet<&str> = output
        .palette
        .values
        .keys()
        .chain(output.components.values.keys())
        .map(String::as_str)
        .collect();

    output
        .palette
        .references
        .iter()
        .chain(output.components.references.iter())
        .filter(|(_, target)| !declared.contains(target.as_str()))
        .map(|(name, target)| DanglingReference {
            theme: output.name.clone(),
            name: name.clone(),
            target: target.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenConfig;
    use crate::driver::compile_theme;
    use crate::theme::Theme;
    use serde_json::json;

    #[test]
    fn flags_only_missing_targets() {
        let theme = Theme::from_json(
            "light",
            &json!({
                "palette": { "palette": { "gray": { "20": { "value": "#f5f5f5" } } } },
                "background": {
                    "page": {
                        "color": { "value": "{cabin x theme.cabin x.palette.gray.20}" },
                        "shade": { "value": "{cabin x theme.cabin x.palette.gray.99}" }
                    }
                }
            }),
            &TokenConfig::default(),
        )
        .unwrap();
        let output = compile_theme(&theme, &TokenConfig::default());

        let dangling = dangling_references(&output);
        assert_eq!(
            dangling,
            vec![DanglingReference {
                theme: "light".to_string(),
                name: "--dm-common-background-page-shade".to_string(),
                target: "--dm-token-palette-palette-gray-99".to_string(),
            }]
        );
    }
}
