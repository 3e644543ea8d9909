//! Reference resolution and declaration rendering
//!
//! Turns a [`FlatTokenMap`] into stylesheet declarations plus a parallel
//! name -> value map for tooling:
//!
//! - numbers gain a `px` unit (`4` -> `4px`)
//! - references become `var(<namespace>-<path>)` declarations
//! - everything else is emitted as literal text
//!
//! Declarations are grouped under section comments derived from the key path.

use indexmap::IndexMap;

use crate::config::{Namespaces, TokenConfig};
use crate::flatten::FlatTokenMap;
use crate::tokens::{format_number, Reference, TokenValue};

/// Resolved name -> value map. References are stored as the bare target
/// variable name, without the `var()` wrapper.
pub type ResolvedTokenMap = IndexMap<String, String>;

/// Which namespace a flat map was built under
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrefixKind {
    Palette,
    Common,
    /// Component tokens: grouped by component, then by property
    Both,
}

impl PrefixKind {
    /// Namespace stripped from keys when deriving section labels
    pub fn namespace(self, ns: &Namespaces) -> &str {
        match self {
            Self::Palette => &ns.palette,
            Self::Common => &ns.common,
            Self::Both => &ns.component,
        }
    }
}

/// Output of [`resolve`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedSection {
    /// `<key>: <value>;` lines interleaved with section comments
    pub text: String,
    pub values: ResolvedTokenMap,
    /// Declaring name -> referenced variable name
    pub references: IndexMap<String, String>,
}

/// Section comment placed before the first declaration of a group
pub fn section_header(label: &str) -> String {
    format!("\n/* ----------- {label} -----------*/\n")
}

/// Resolve every entry of `flat` for the namespace `kind`.
///
/// The input is left untouched; the result is a fresh map in the same order.
pub fn resolve(flat: &FlatTokenMap, kind: PrefixKind, config: &TokenConfig) -> ResolvedSection {
    let ns = config.namespaces();
    let sep = config.separator.as_str();
    let strip = kind.namespace(&ns);

    let mut out = ResolvedSection::default();
    let mut last_component: Option<String> = None;
    let mut last_group: Option<String> = None;

    for (key, raw) in flat {
        if kind == PrefixKind::Both {
            if let Some(component) = section_label(key, strip, sep, 1) {
                if last_component.as_deref() != Some(component.as_str()) {
                    out.text.push_str(&section_header(&component));
                    last_component = Some(component);
                }
            }
        }

        if let Some(group) = section_label(key, strip, sep, 2) {
            if last_group.as_deref() != Some(group.as_str()) {
                out.text.push_str(&section_header(&group));
                last_group = Some(group);
            }
        }

        let declared = match raw {
            TokenValue::Number(n) => {
                let value = format!("{}px", format_number(n));
                out.values.insert(key.clone(), value.clone());
                value
            }
            TokenValue::Reference(reference) => {
                let target = reference_target(reference, kind, &ns, sep);
                out.values.insert(key.clone(), target.clone());
                out.references.insert(key.clone(), target.clone());
                format!("var({target})")
            }
            other => {
                let value = other.to_literal(sep);
                out.values.insert(key.clone(), value.clone());
                value
            }
        };

        out.text.push_str(&format!("{key}: {declared};\n"));
    }

    tracing::debug!(
        kind = ?kind,
        declarations = out.values.len(),
        references = out.references.len(),
        "resolved token section"
    );
    out
}

/// Variable name a reference points at.
///
/// Palette paths always land in the palette scale namespace (`--dm-token-palette`),
/// with the path's own `palette` segment kept. Other paths land in the
/// namespace of `kind`, except component tokens which point at common tokens.
pub fn reference_target(
    reference: &Reference,
    kind: PrefixKind,
    ns: &Namespaces,
    separator: &str,
) -> String {
    let namespace = if reference.targets_palette() {
        &ns.palette_scale
    } else {
        match kind {
            PrefixKind::Palette => &ns.palette_scale,
            PrefixKind::Common | PrefixKind::Both => &ns.common,
        }
    };
    format!("{namespace}{separator}{}", reference.path(separator))
}

/// Segment `index` of `key` once the namespace is removed.
///
/// `--dm-token-palette-gray-20` minus `--dm-token` splits into
/// `["", "palette", "gray", "20"]`, so index 2 is the colour family.
fn section_label(key: &str, namespace: &str, separator: &str, index: usize) -> Option<String> {
    let rest = key.replacen(namespace, "", 1);
    rest.split(separator).nth(index).map(str::to_string)
}
