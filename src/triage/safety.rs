//! Safety override: literal phrases that bypass every other check.
//!
//! These phrasings are rare, unambiguous, and too dangerous to leave to
//! tokenization. Matching is plain substring search on normalized text.

/// Detected-pattern label recorded when an override fires.
pub const SAFETY_OVERRIDE: &str = "SAFETY_OVERRIDE";

/// Lowercase trigger phrases. Apostrophes are ASCII; the normalizer folds
/// curly and mis-decoded variants before this runs.
pub const OVERRIDE_PHRASES: &[&str] = &[
    // cannot breathe
    "can't breathe",
    "cant breathe",
    "cannot breathe",
    "can not breathe",
    "unable to breathe",
    "can't catch my breath",
    "cant catch my breath",
    "not breathing",
    "isn't breathing",
    "isnt breathing",
    "stopped breathing",
    // baby dropped or hurt
    "dropped the baby",
    "dropped my baby",
    "baby was dropped",
    "baby fell",
    "baby hit his head",
    "baby hit her head",
    "baby hit their head",
    "baby hit its head",
    // baby unresponsive or will not wake
    "baby won't wake",
    "baby wont wake",
    "baby will not wake",
    "can't wake the baby",
    "cant wake the baby",
    "can't wake my baby",
    "cant wake my baby",
    "baby is unresponsive",
    "baby unresponsive",
    "baby not responding",
    "baby isn't responding",
    "baby isnt responding",
    // impending death
    "i'm dying",
    "im dying",
    "i am dying",
    "going to die",
    "gonna die",
];

/// Literal-substring override scanner.
#[derive(Debug, Clone)]
pub struct SafetyOverride {
    phrases: Vec<String>,
}

impl SafetyOverride {
    /// Scanner over the built-in phrase list.
    pub fn builtin() -> Self {
        Self {
            phrases: OVERRIDE_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// First trigger phrase contained in `normalized`, if any.
    pub fn check(&self, normalized: &str) -> Option<&str> {
        self.phrases
            .iter()
            .find(|phrase| normalized.contains(phrase.as_str()))
            .map(String::as_str)
    }
}

impl Default for SafetyOverride {
    fn default() -> Self {
        Self::builtin()
    }
}
