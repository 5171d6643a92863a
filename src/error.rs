//! Error types for the triage engine.
//!
//! Classification itself never fails. Everything here belongs to
//! construction time: loading configuration, a custom rule catalog, or a
//! lemma lexicon.

use std::path::PathBuf;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors raised while loading or validating a pattern catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pattern group has an empty name")]
    EmptyGroupName,

    #[error("Duplicate pattern group: {name}")]
    DuplicateGroup { name: String },

    #[error("Pattern group {name} has no templates")]
    EmptyGroup { name: String },

    #[error("Template {index} of group {group} has no exact step")]
    NoAnchor { group: String, index: usize },

    #[error("Template {index} of group {group} has an exact step with no values")]
    EmptyStep { group: String, index: usize },
}

/// Errors raised while loading a lemma lexicon.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("Failed to read lexicon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse lexicon: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Lexicon entry has an empty form or lemma: {form:?} -> {lemma:?}")]
    EmptyEntry { form: String, lemma: String },
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
