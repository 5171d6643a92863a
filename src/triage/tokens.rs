//! Token attribute extraction.
//!
//! Splits normalized text into tokens carrying a surface form and a lemma.
//! The lemmatizer is a capability behind [`Tokenizer`]; when none is
//! available the engine runs [`SurfaceTokenizer`] and every lemma equals
//! its surface form.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LexiconError;
use crate::triage::lexicon::BUILTIN_LEXICON;

/// A single token in document order. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Lowercased text as it appeared.
    pub surface: String,
    /// Canonical base form used for matching.
    pub lemma: String,
}

impl Token {
    /// Token whose lemma is its own surface form.
    pub fn surface_only(surface: impl Into<String>) -> Self {
        let surface = surface.into();
        Self {
            lemma: surface.clone(),
            surface,
        }
    }
}

/// Converts normalized text into tokens.
///
/// Implementations must be safe to share across threads: the engine holds
/// one instance for its whole lifetime.
pub trait Tokenizer: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &str;

    /// Tokenize already-normalized text.
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Split on anything that is not alphanumeric or an inner apostrophe.
///
/// `can't` stays one token; `light-headed` becomes `light`, `headed`.
fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
}

/// Surface-only tokenizer. The degraded mode when no lemmatizer loads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceTokenizer;

impl Tokenizer for SurfaceTokenizer {
    fn name(&self) -> &str {
        "surface"
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        split_words(text)
            .map(|w| Token::surface_only(w.to_lowercase()))
            .collect()
    }
}

/// Lookup-table lemmatizer.
///
/// Lemma resolution: exact table hit, then the form with a possessive
/// `'s` removed, then the surface form itself.
#[derive(Debug, Clone)]
pub struct LexiconTokenizer {
    forms: HashMap<String, String>,
}

impl LexiconTokenizer {
    /// Tokenizer over the compiled-in lexicon.
    pub fn builtin() -> Self {
        let forms = BUILTIN_LEXICON
            .iter()
            .map(|(form, lemma)| (form.to_string(), lemma.to_string()))
            .collect();
        Self { forms }
    }

    /// Built-in lexicon extended with a JSON object of `form -> lemma`.
    ///
    /// File entries win over built-in ones.
    pub fn with_overrides_from(path: &Path) -> Result<Self, LexiconError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut tokenizer = Self::builtin();
        tokenizer.extend_from_json(&raw)?;
        Ok(tokenizer)
    }

    /// Merge `{ "form": "lemma" }` entries into this lexicon.
    pub fn extend_from_json(&mut self, raw: &str) -> Result<(), LexiconError> {
        let entries: HashMap<String, String> = serde_json::from_str(raw)?;
        for (form, lemma) in entries {
            let form = form.trim().to_lowercase();
            let lemma = lemma.trim().to_lowercase();
            if form.is_empty() || lemma.is_empty() {
                return Err(LexiconError::EmptyEntry { form, lemma });
            }
            self.forms.insert(form, lemma);
        }
        Ok(())
    }

    /// Number of known inflected forms.
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    fn lemma_of(&self, surface: &str) -> String {
        if let Some(lemma) = self.forms.get(surface) {
            return lemma.clone();
        }
        if let Some(stem) = surface.strip_suffix("'s")
            && !stem.is_empty()
        {
            return self
                .forms
                .get(stem)
                .cloned()
                .unwrap_or_else(|| stem.to_string());
        }
        surface.to_string()
    }
}

impl Default for LexiconTokenizer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Tokenizer for LexiconTokenizer {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        split_words(text)
            .map(|w| {
                let surface = w.to_lowercase();
                let lemma = self.lemma_of(&surface);
                Token { surface, lemma }
            })
            .collect()
    }
}
