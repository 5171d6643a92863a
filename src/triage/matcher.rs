//! Sequence matcher: aligns templates against a token sequence.
//!
//! A template matches if, from some start offset, every exact step consumes
//! one accepted token in order and every gap absorbs zero or more tokens in
//! between. Gaps are tried shortest-first, so the first alignment found is
//! the one with minimal gap lengths.

use std::sync::Arc;

use crate::triage::pattern::{PatternGroup, PatternStep, PatternTemplate};
use crate::triage::registry::PatternRegistry;
use crate::triage::tokens::Token;

impl PatternTemplate {
    /// Whether this template aligns anywhere in `tokens`.
    pub fn matches(&self, tokens: &[Token]) -> bool {
        let steps = self.steps();
        if steps.is_empty() {
            return false;
        }
        (0..tokens.len()).any(|start| align(steps, &tokens[start..]))
    }
}

/// Anchored alignment of `steps` at the head of `tokens`.
fn align(steps: &[PatternStep], tokens: &[Token]) -> bool {
    let Some((step, rest)) = steps.split_first() else {
        return true;
    };
    match step {
        PatternStep::Gap => {
            if rest.is_empty() {
                return true;
            }
            (0..=tokens.len()).any(|skip| align(rest, &tokens[skip..]))
        }
        PatternStep::Exact { .. } => match tokens.split_first() {
            Some((token, remaining)) => step.accepts(token) && align(rest, remaining),
            None => false,
        },
    }
}

/// Evaluates token sequences against a shared registry.
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    registry: Arc<PatternRegistry>,
}

impl SequenceMatcher {
    pub fn new(registry: Arc<PatternRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Groups with at least one matching template, in catalog order.
    pub fn fired<'a>(&'a self, tokens: &[Token]) -> Vec<&'a PatternGroup> {
        if tokens.is_empty() {
            return Vec::new();
        }
        self.registry
            .groups()
            .iter()
            .filter(|group| group.templates.iter().any(|t| t.matches(tokens)))
            .collect()
    }
}
