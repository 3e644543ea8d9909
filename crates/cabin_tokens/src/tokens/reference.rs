//! Reference pointers between tokens
//!
//! A reference names another token by its dotted path behind a fixed marker:
//!
//! ```text
//! {cabin x theme.cabin x.palette.gray.20}
//!  \___________________/ \_____________/
//!         marker             segments
//! ```

/// Structured pointer to another token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    segments: Vec<String>,
}

impl Reference {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse `raw` as a reference behind `marker`.
    ///
    /// The strict form `{<marker>.<seg>(.<seg>)*}` is tried first. Any other
    /// string containing `<marker>.` is still accepted: braces and every marker
    /// occurrence are dropped and the remainder is split on `.`.
    pub fn parse(raw: &str, marker: &str) -> Option<Self> {
        if marker.is_empty() {
            return None;
        }
        let needle = format!("{marker}.");
        if !raw.contains(&needle) {
            return None;
        }

        if let Some(path) = raw
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .and_then(|s| s.strip_prefix(needle.as_str()))
        {
            let nested = path.contains(|c: char| c == '{' || c == '}') || path.contains(&needle);
            if !path.is_empty() && !nested {
                return Some(Self::new(path.split('.')));
            }
        }

        let body: String = raw.chars().filter(|c| *c != '{' && *c != '}').collect();
        let path = body.replace(&needle, "");
        Some(Self::new(path.split('.')))
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segments joined with `separator`
    pub fn path(&self, separator: &str) -> String {
        self.segments.join(separator)
    }

    /// Whether the path starts at the palette
    pub fn targets_palette(&self) -> bool {
        self.segments.first().is_some_and(|s| s == "palette")
    }
}
