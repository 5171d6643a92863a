//! Triage engine: the decision orchestrator.
//!
//! Precedence, evaluated once per call:
//! 1. Safety override → nurse, emergent
//! 2. Dangerous blood pressure → nurse, emergent
//! 3. Any emergent pattern group → nurse, emergent
//! 4. Logistics without clinical language → nursing assistant, routine
//! 5. Everything else, including unrecognized text → nurse, routine
//!
//! The engine is immutable after construction and safe to share across
//! threads behind an `Arc`.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::{LemmatizerMode, TriageConfig};
use crate::error::Result;
use crate::triage::matcher::SequenceMatcher;
use crate::triage::normalize::normalize;
use crate::triage::pattern::{Category, PatternGroup};
use crate::triage::registry::PatternRegistry;
use crate::triage::safety::{SAFETY_OVERRIDE, SafetyOverride};
use crate::triage::tokens::{LexiconTokenizer, SurfaceTokenizer, Tokenizer};
use crate::triage::types::{Routing, Tier, TriageAudit, TriageResult};
use crate::triage::vitals::{BloodPressureDetector, DANGEROUS_BP};

/// Classifies patient messages into a routing and an escalation tier.
pub struct TriageEngine {
    overrides: SafetyOverride,
    vitals: BloodPressureDetector,
    tokenizer: Box<dyn Tokenizer>,
    matcher: SequenceMatcher,
    log_overrides: bool,
}

impl TriageEngine {
    /// Engine with the built-in catalog and lexicon lemmatizer.
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(PatternRegistry::builtin()),
            Box::new(LexiconTokenizer::builtin()),
        )
    }

    /// Engine over an explicit registry and tokenizer.
    pub fn with_parts(registry: Arc<PatternRegistry>, tokenizer: Box<dyn Tokenizer>) -> Self {
        info!(
            version = %registry.version(),
            groups = registry.len(),
            templates = registry.template_count(),
            tokenizer = tokenizer.name(),
            "Triage engine ready"
        );
        Self {
            overrides: SafetyOverride::builtin(),
            vitals: BloodPressureDetector::new(),
            tokenizer,
            matcher: SequenceMatcher::new(registry),
            log_overrides: true,
        }
    }

    /// Build from configuration.
    ///
    /// A custom catalog that fails to load is an error. A lexicon that fails
    /// to load is not: the engine degrades to surface-form matching and logs
    /// one warning.
    pub fn from_config(config: &TriageConfig) -> Result<Self> {
        let registry = match &config.catalog_path {
            Some(path) => PatternRegistry::from_path(path)?,
            None => PatternRegistry::builtin(),
        };
        let tokenizer = resolve_tokenizer(config);
        let mut engine = Self::with_parts(Arc::new(registry), tokenizer);
        engine.log_overrides = config.log_overrides;
        Ok(engine)
    }

    pub fn registry(&self) -> &PatternRegistry {
        self.matcher.registry()
    }

    pub fn tokenizer_name(&self) -> &str {
        self.tokenizer.name()
    }

    /// Classify one message. Total: every input yields a result.
    pub fn classify(&self, text: &str) -> TriageResult {
        let normalized = normalize(text);

        if let Some(phrase) = self.overrides.check(&normalized) {
            if self.log_overrides {
                warn!(phrase, "Safety override fired");
            }
            return TriageResult::emergent(vec![SAFETY_OVERRIDE.to_string()]);
        }

        if let Some(reading) = self.vitals.check(&normalized) {
            debug!(
                value = reading.value,
                band = ?reading.band,
                "Dangerous blood pressure number"
            );
            return TriageResult::emergent(vec![DANGEROUS_BP.to_string()]);
        }

        let tokens = self.tokenizer.tokenize(&normalized);
        let fired = self.matcher.fired(&tokens);
        let result = decide(&fired);
        debug!(
            decision = result.label(),
            patterns = ?result.detected_patterns,
            tokens = tokens.len(),
            "Pattern groups evaluated"
        );
        result
    }

    /// Classify and wrap the decision in an audit record.
    pub fn audit(&self, text: &str) -> TriageAudit {
        TriageAudit {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            text: text.to_string(),
            catalog_version: self.registry().version().to_string(),
            result: self.classify(text),
        }
    }
}

impl Default for TriageEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_tokenizer(config: &TriageConfig) -> Box<dyn Tokenizer> {
    match (config.lemmatizer, &config.lexicon_path) {
        (LemmatizerMode::SurfaceOnly, _) => {
            info!("Lemmatizer disabled by configuration, matching surface forms only");
            Box::new(SurfaceTokenizer)
        }
        (LemmatizerMode::Lexicon, None) => Box::new(LexiconTokenizer::builtin()),
        (LemmatizerMode::Lexicon, Some(path)) => {
            match LexiconTokenizer::with_overrides_from(path) {
                Ok(tokenizer) => Box::new(tokenizer),
                Err(e) => {
                    warn!(
                        error = %e,
                        "Lemmatizer unavailable, falling back to surface-form matching"
                    );
                    Box::new(SurfaceTokenizer)
                }
            }
        }
    }
}

/// Apply the pattern-level precedence (steps 3-5) to the fired groups.
fn decide(fired: &[&PatternGroup]) -> TriageResult {
    let names: Vec<String> = fired.iter().map(|g| g.name.clone()).collect();
    let fired_any = |category: Category| fired.iter().any(|g| g.category == category);

    if fired_any(Category::Emergent) {
        return TriageResult::emergent(names);
    }
    if fired_any(Category::Logistics) && !fired_any(Category::Clinical) {
        return TriageResult::new(Routing::Cna, Tier::Routine, names);
    }
    TriageResult::new(Routing::Nurse, Tier::Routine, names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::safety::OVERRIDE_PHRASES;

    fn engine() -> TriageEngine {
        TriageEngine::new()
    }

    fn group(name: &str, category: Category) -> PatternGroup {
        PatternGroup::new(name, category)
    }

    #[test]
    fn decide_emergent_keeps_every_fired_name() {
        let emergent = group("EMERGENT_X", Category::Emergent);
        let logistics = group("LOGISTICS_X", Category::Logistics);
        let result = decide(&[&emergent, &logistics]);
        assert_eq!(result.decision(), (Routing::Nurse, Tier::Emergent));
        assert_eq!(result.detected_patterns, vec!["EMERGENT_X", "LOGISTICS_X"]);
    }

    #[test]
    fn decide_logistics_alone_goes_to_cna() {
        let logistics = group("LOGISTICS_X", Category::Logistics);
        assert_eq!(decide(&[&logistics]).decision(), (Routing::Cna, Tier::Routine));
    }

    #[test]
    fn decide_clinical_beats_logistics() {
        let logistics = group("LOGISTICS_X", Category::Logistics);
        let clinical = group("CLINICAL_X", Category::Clinical);
        assert_eq!(
            decide(&[&logistics, &clinical]).decision(),
            (Routing::Nurse, Tier::Routine)
        );
    }

    #[test]
    fn decide_nothing_defaults_to_nurse() {
        let result = decide(&[]);
        assert_eq!(result.decision(), (Routing::Nurse, Tier::Routine));
        assert!(result.detected_patterns.is_empty());
    }

    #[test]
    fn empty_input() {
        let result = engine().classify("");
        assert_eq!(result.decision(), (Routing::Nurse, Tier::Routine));
        assert!(result.detected_patterns.is_empty());
    }

    #[test]
    fn gibberish_defaults_to_nurse() {
        let result = engine().classify("asdkjasdlkj");
        assert_eq!(result.decision(), (Routing::Nurse, Tier::Routine));
        assert!(result.detected_patterns.is_empty());
    }

    #[test]
    fn ice_water_goes_to_cna() {
        let result = engine().classify("I need ice water");
        assert_eq!(result.decision(), (Routing::Cna, Tier::Routine));
        assert_eq!(result.detected_patterns, vec!["LOGISTICS_SUPPLIES"]);
    }

    #[test]
    fn infection_sign_overrides_supply_request() {
        let result = engine().classify("I need ice but my incision looks red and is draining");
        assert_eq!(result.decision(), (Routing::Nurse, Tier::Emergent));
        assert_eq!(
            result.detected_patterns,
            vec!["EMERGENT_INFECTION", "LOGISTICS_SUPPLIES", "CLINICAL_WOUND"]
        );
    }

    #[test]
    fn clinical_mixed_with_logistics_goes_to_nurse() {
        let result = engine().classify("Can I get some water and a tylenol for my cramps");
        assert_eq!(result.decision(), (Routing::Nurse, Tier::Routine));
        assert_eq!(
            result.detected_patterns,
            vec!["LOGISTICS_SUPPLIES", "CLINICAL_SYMPTOM", "CLINICAL_MEDICATION"]
        );
    }

    #[test]
    fn override_short_circuits_everything() {
        let result = engine().classify("I need ice water and I can't breathe, 120/80");
        assert_eq!(result.decision(), (Routing::Nurse, Tier::Emergent));
        assert_eq!(result.detected_patterns, vec![SAFETY_OVERRIDE]);
    }

    #[test]
    fn override_survives_split_whitespace() {
        let engine = engine();
        for text in ["I can't  breathe", "help\nI can't\nbreathe", "my baby\twon't   wake"] {
            assert_eq!(engine.classify(text).detected_patterns, vec![SAFETY_OVERRIDE], "{text}");
        }
    }

    #[test]
    fn every_override_phrase_dominates_surrounding_text() {
        let engine = engine();
        for phrase in OVERRIDE_PHRASES {
            let text = format!("I need more diapers. {phrase}. Also some water please");
            let result = engine.classify(&text);
            assert_eq!(result.decision(), (Routing::Nurse, Tier::Emergent), "{phrase}");
            assert_eq!(result.detected_patterns, vec![SAFETY_OVERRIDE], "{phrase}");
        }
    }

    #[test]
    fn numeric_danger_reports_only_bp() {
        for text in ["My blood pressure was 165/100 today", "180 over 110"] {
            let result = engine().classify(text);
            assert_eq!(result.decision(), (Routing::Nurse, Tier::Emergent), "{text}");
            assert_eq!(result.detected_patterns, vec![DANGEROUS_BP]);
        }
    }

    #[test]
    fn case_and_encoding_insensitive() {
        let engine = engine();
        for text in [
            "I need ice water",
            "my chest feels tight",
            "Can I get a blanket and some Tylenol",
            "asdkjasdlkj",
        ] {
            assert_eq!(engine.classify(text), engine.classify(&text.to_uppercase()));
        }
        assert_eq!(
            engine.classify("I canâ€™t breathe"),
            engine.classify("I can't breathe")
        );
    }

    #[test]
    fn repeated_calls_are_equal() {
        let engine = engine();
        let first = engine.classify("my baby looks blue");
        for _ in 0..5 {
            assert_eq!(engine.classify("my baby looks blue"), first);
        }
        assert_eq!(engine.classify("I need ice water").routing, Routing::Cna);
    }

    #[test]
    fn surface_only_keeps_override_and_numeric() {
        let engine = TriageEngine::with_parts(
            Arc::new(PatternRegistry::builtin()),
            Box::new(SurfaceTokenizer),
        );
        assert_eq!(engine.tokenizer_name(), "surface");
        assert!(engine.classify("I can't breathe").is_emergent());
        assert!(engine.classify("bp 170/95").is_emergent());
        assert!(engine.classify("I have chest pain").is_emergent());
    }

    #[test]
    fn audit_carries_catalog_version() {
        let engine = engine();
        let audit = engine.audit("I need ice water");
        assert_eq!(audit.catalog_version, engine.registry().version());
        assert_eq!(audit.text, "I need ice water");
        assert_eq!(audit.result.routing, Routing::Cna);
    }

    #[test]
    fn from_config_defaults_to_lexicon() {
        let engine = TriageEngine::from_config(&TriageConfig::default()).unwrap();
        assert_eq!(engine.tokenizer_name(), "lexicon");
    }

    #[test]
    fn from_config_surface_mode() {
        let config = TriageConfig {
            lemmatizer: LemmatizerMode::SurfaceOnly,
            ..Default::default()
        };
        let engine = TriageEngine::from_config(&config).unwrap();
        assert_eq!(engine.tokenizer_name(), "surface");
    }
}
