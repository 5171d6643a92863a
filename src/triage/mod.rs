//! Triage classification engine.
//!
//! Every patient message flows through:
//! 1. `normalize()`: case folding, apostrophe repair, trimming
//! 2. `SafetyOverride::check()`: literal high-risk phrases (short-circuits)
//! 3. `BloodPressureDetector::check()`: dangerous numbers (short-circuits)
//! 4. `Tokenizer::tokenize()` + `SequenceMatcher::fired()`: rule catalog
//! 5. `TriageEngine`: precedence policy over the fired groups
//!
//! **No message is ever left unrouted.** Unrecognized text goes to a nurse.

pub mod catalog;
pub mod engine;
pub mod lexicon;
pub mod matcher;
pub mod normalize;
pub mod pattern;
pub mod registry;
pub mod safety;
pub mod tokens;
pub mod types;
pub mod vitals;

pub use engine::TriageEngine;
pub use pattern::{Category, PatternGroup, PatternStep, PatternTemplate, TokenField};
pub use registry::PatternRegistry;
pub use tokens::{LexiconTokenizer, SurfaceTokenizer, Token, Tokenizer};
pub use types::{Routing, Tier, TriageAudit, TriageResult};
