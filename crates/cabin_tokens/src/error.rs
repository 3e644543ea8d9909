//! Token compiler error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while ingesting a token document
#[derive(Error, Debug)]
pub enum TokenError {
    /// The document (or the theme set inside it) is not a JSON object
    #[error("token document must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// A theme entry is not a JSON object
    #[error("theme `{0}` must be a JSON object")]
    InvalidTheme(String),

    /// A theme name that cannot be used as an artifact file name
    #[error("theme name `{0}` is not a plain file name")]
    InvalidThemeName(String),

    /// The document could not be parsed as JSON
    #[error("invalid token JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for token operations
pub type Result<T> = std::result::Result<T, TokenError>;

/// Failure to persist a single artifact
#[derive(Error, Debug)]
pub enum SinkError {
    /// Creating the parent directory failed
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the artifact content failed
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The write task stopped before reporting a result
    #[error("write task for {path} aborted: {reason}")]
    Aborted { path: PathBuf, reason: String },

    /// Sink-specific rejection
    #[error("sink rejected {path}: {reason}")]
    Rejected { path: PathBuf, reason: String },
}
