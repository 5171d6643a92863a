//! Pattern data model: steps, templates, and named groups.
//!
//! Templates are plain data. They serialize as tagged steps so a catalog
//! can be exported, reviewed, and loaded back without code changes:
//!
//! ```json
//! [{"kind": "exact", "field": "lemma", "values": ["chest"]},
//!  {"kind": "gap"},
//!  {"kind": "exact", "field": "lemma", "values": ["pain", "tight"]}]
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::triage::tokens::Token;

/// Which token attribute an exact step compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenField {
    Surface,
    #[default]
    Lemma,
}

/// One step of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatternStep {
    /// Consumes exactly one token whose `field` is one of `values`.
    Exact {
        #[serde(default)]
        field: TokenField,
        values: BTreeSet<String>,
    },
    /// Consumes zero or more tokens.
    Gap,
}

impl PatternStep {
    /// Exact step over the given field. Values are lowercased.
    pub fn exact<I, S>(field: TokenField, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Exact {
            field,
            values: values
                .into_iter()
                .map(|v| v.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Whether this step consumes `token`. Always false for `Gap`.
    pub fn accepts(&self, token: &Token) -> bool {
        match self {
            Self::Exact { field, values } => match field {
                TokenField::Surface => values.contains(&token.surface),
                TokenField::Lemma => values.contains(&token.lemma),
            },
            Self::Gap => false,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, Self::Gap)
    }
}

/// An ordered sequence of steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternTemplate {
    steps: Vec<PatternStep>,
}

impl PatternTemplate {
    /// Build a template, collapsing runs of adjacent gaps into one.
    pub fn new(steps: Vec<PatternStep>) -> Self {
        let mut collapsed: Vec<PatternStep> = Vec::with_capacity(steps.len());
        for step in steps {
            if step.is_gap() && collapsed.last().is_some_and(PatternStep::is_gap) {
                continue;
            }
            collapsed.push(step);
        }
        Self { steps: collapsed }
    }

    pub fn steps(&self) -> &[PatternStep] {
        &self.steps
    }

    /// Number of non-gap steps.
    pub fn anchor_count(&self) -> usize {
        self.steps.iter().filter(|s| !s.is_gap()).count()
    }
}

/// Clinical meaning of a pattern group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Red flag: always routes to a nurse at the emergent tier.
    Emergent,
    /// Supplies and simple assisted acts a nursing assistant can handle.
    Logistics,
    /// Symptom or medication language that needs a nurse, not urgently.
    Clinical,
}

/// A named set of templates sharing one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternGroup {
    pub name: String,
    pub category: Category,
    pub templates: Vec<PatternTemplate>,
}

impl PatternGroup {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            templates: Vec::new(),
        }
    }

    /// Append templates (builder style).
    pub fn with<I>(mut self, templates: I) -> Self
    where
        I: IntoIterator<Item = PatternTemplate>,
    {
        self.templates.extend(templates);
        self
    }
}
