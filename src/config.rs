//! Configuration types.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Which token attribute extractor the engine runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LemmatizerMode {
    /// Built-in lexicon lemmatizer (optionally extended from a file).
    #[default]
    Lexicon,
    /// Surface forms only; lemma equals the lowercased surface.
    SurfaceOnly,
}

/// Triage engine configuration.
#[derive(Debug, Clone)]
pub struct TriageConfig {
    /// Token attribute extractor to use.
    pub lemmatizer: LemmatizerMode,
    /// Extra `{ "form": "lemma" }` entries merged over the built-in lexicon.
    pub lexicon_path: Option<PathBuf>,
    /// JSON catalog replacing the compiled-in rule catalog.
    pub catalog_path: Option<PathBuf>,
    /// Emit a warning log line whenever the safety override fires.
    pub log_overrides: bool,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            lemmatizer: LemmatizerMode::Lexicon,
            lexicon_path: None,
            catalog_path: None,
            log_overrides: true,
        }
    }
}

impl TriageConfig {
    /// Load configuration from `TRIAGE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(mode) = get("TRIAGE_LEMMATIZER") {
            config.lemmatizer = match mode.trim().to_lowercase().as_str() {
                "lexicon" => LemmatizerMode::Lexicon,
                "surface" | "none" | "off" => LemmatizerMode::SurfaceOnly,
                other => {
                    return Err(ConfigError::InvalidValue {
                        key: "TRIAGE_LEMMATIZER".into(),
                        message: format!("expected lexicon or surface, got {other:?}"),
                    });
                }
            };
        }

        config.lexicon_path = get("TRIAGE_LEXICON_PATH").map(PathBuf::from);
        config.catalog_path = get("TRIAGE_CATALOG_PATH").map(PathBuf::from);

        if let Some(flag) = get("TRIAGE_LOG_OVERRIDES") {
            config.log_overrides = parse_bool("TRIAGE_LOG_OVERRIDES", &flag)?;
        }

        Ok(config)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.into(),
            message: format!("expected a boolean, got {other:?}"),
        }),
    }
}
