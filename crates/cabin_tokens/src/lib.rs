//! Cabin Design-Token Compiler
//!
//! Turns nested design-token themes into CSS custom properties and JSON value
//! maps.
//!
//! # Overview
//!
//! The compiler provides:
//! - **Flattening**: nested token trees collapse into `--dm-...` variable names
//! - **Reference resolution**: `{cabin x theme.cabin x.palette.gray.20}` becomes
//!   `var(--dm-token-palette-palette-gray-20)`
//! - **Unit coercion**: numeric tokens gain a `px` unit
//! - **Grouped output**: declarations are commented by section
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cabin_tokens::{compile_document, ThemeDocument, TokenConfig, DEFAULT_ROOT_KEY};
//!
//! let config = TokenConfig::default();
//! let doc = ThemeDocument::parse_str(source, DEFAULT_ROOT_KEY, &config)?;
//! for output in compile_document(&doc, &config) {
//!     println!("{}", output.palette.text);
//! }
//! ```
//!
//! # Pipeline
//!
//! ```text
//! theme tree -> format_* (flatten per category) -> resolve -> combine_* -> artifacts -> sink
//! ```
//!
//! # Namespaces
//!
//! - `--dm-token-palette-*`: palette scales
//! - `--dm-common-*`: common categories (background, font-color, border)
//! - `--dm-component-*`: component tokens
//! - `--cx-font-size-*`: font sizes and line heights
//!
//! # Limits
//!
//! Trees are walked recursively without a depth bound. References are not
//! checked for existence during compilation; see [`lint`] for that.

pub mod combine;
pub mod config;
pub mod driver;
pub mod error;
pub mod flatten;
pub mod format;
pub mod lint;
pub mod resolve;
pub mod sink;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use combine::{combine_common, combine_components, Bundle};
pub use config::{Namespaces, TokenConfig};
pub use driver::{compile_document, compile_theme, Artifact, ArtifactLayout, ThemeOutput};
pub use error::{Result, SinkError, TokenError};
pub use flatten::{flatten, flatten_json, FlatTokenMap};
pub use format::{format_common, format_components, format_palette, FontDeclarations, FontMetrics};
pub use lint::{dangling_references, DanglingReference};
pub use resolve::{resolve, PrefixKind, ResolvedSection, ResolvedTokenMap};
pub use sink::{emit, ArtifactSink, FsSink, MemorySink, WriteReport};
pub use theme::{Theme, ThemeDocument, DEFAULT_ROOT_KEY};
pub use tokens::*;
