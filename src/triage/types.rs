//! Result types handed back to the surrounding application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Decision ────────────────────────────────────────────────────────

/// Caregiver role a message is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Routing {
    /// Certified nursing assistant: supplies and simple assisted acts.
    Cna,
    /// Registered nurse.
    Nurse,
}

/// Escalation urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Routine,
    Emergent,
}

/// Final triage decision for one message.
///
/// `detected_patterns` is for the audit log only. The routing and tier are
/// decided when the result is built and are never recomputed from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    pub routing: Routing,
    pub tier: Tier,
    pub detected_patterns: Vec<String>,
}

impl TriageResult {
    pub(crate) fn new(routing: Routing, tier: Tier, detected_patterns: Vec<String>) -> Self {
        Self {
            routing,
            tier,
            detected_patterns,
        }
    }

    /// Nurse, emergent tier.
    pub(crate) fn emergent(detected_patterns: Vec<String>) -> Self {
        Self::new(Routing::Nurse, Tier::Emergent, detected_patterns)
    }

    pub fn is_emergent(&self) -> bool {
        self.tier == Tier::Emergent
    }

    /// `(routing, tier)` pair, convenient for assertions and dispatch.
    pub fn decision(&self) -> (Routing, Tier) {
        (self.routing, self.tier)
    }

    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self.decision() {
            (Routing::Nurse, Tier::Emergent) => "nurse_emergent",
            (Routing::Nurse, Tier::Routine) => "nurse_routine",
            (Routing::Cna, Tier::Emergent) => "cna_emergent",
            (Routing::Cna, Tier::Routine) => "cna_routine",
        }
    }
}

// ── Audit record ────────────────────────────────────────────────────

/// One classified message, ready for the caller to persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageAudit {
    /// Unique record ID.
    pub id: Uuid,
    /// When the message was classified.
    pub received_at: DateTime<Utc>,
    /// The raw message text, as received.
    pub text: String,
    /// Version of the rule catalog that produced the decision.
    pub catalog_version: String,
    /// The decision.
    pub result: TriageResult,
}
