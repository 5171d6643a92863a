//! Pattern registry: the immutable, versioned rule catalog.
//!
//! Built once when the engine is constructed and shared read-only from then
//! on. Custom catalogs go through the same validation as the built-in one.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::triage::catalog::{self, BUILTIN_CATALOG_VERSION};
use crate::triage::pattern::{Category, PatternGroup, PatternStep, PatternTemplate};

/// Validated, ordered collection of pattern groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternRegistry {
    version: String,
    groups: Vec<PatternGroup>,
}

/// Wire shape of a catalog file, before validation.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    version: String,
    groups: Vec<PatternGroup>,
}

impl PatternRegistry {
    /// Validate and normalize a set of groups into a registry.
    ///
    /// Exact-step values are trimmed and lowercased and adjacent gaps are
    /// collapsed. Group order is preserved; it defines the order of
    /// `detected_patterns`.
    pub fn new(
        version: impl Into<String>,
        groups: Vec<PatternGroup>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut validated = Vec::with_capacity(groups.len());

        for group in groups {
            let name = group.name.trim().to_string();
            if name.is_empty() {
                return Err(CatalogError::EmptyGroupName);
            }
            if !seen.insert(name.clone()) {
                return Err(CatalogError::DuplicateGroup { name });
            }
            if group.templates.is_empty() {
                return Err(CatalogError::EmptyGroup { name });
            }

            let mut templates = Vec::with_capacity(group.templates.len());
            for (index, template) in group.templates.into_iter().enumerate() {
                templates.push(normalize_template(&name, index, template)?);
            }

            validated.push(PatternGroup {
                name,
                category: group.category,
                templates,
            });
        }

        Ok(Self {
            version: version.into(),
            groups: validated,
        })
    }

    /// The compiled-in catalog.
    pub fn builtin() -> Self {
        // Authored data already satisfies validation; a unit test pins that.
        Self {
            version: BUILTIN_CATALOG_VERSION.to_string(),
            groups: catalog::builtin_groups(),
        }
    }

    /// Parse and validate a JSON catalog.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: RawCatalog = serde_json::from_str(raw)?;
        Self::new(catalog.version, catalog.groups)
    }

    /// Load a JSON catalog from disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Export as pretty-printed JSON, loadable with [`Self::from_json`].
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn groups(&self) -> &[PatternGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Look up a group by name.
    pub fn group(&self, name: &str) -> Option<&PatternGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Groups of one category, in catalog order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &PatternGroup> {
        self.groups.iter().filter(move |g| g.category == category)
    }

    /// Total number of templates across all groups.
    pub fn template_count(&self) -> usize {
        self.groups.iter().map(|g| g.templates.len()).sum()
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize_template(
    group: &str,
    index: usize,
    template: PatternTemplate,
) -> Result<PatternTemplate, CatalogError> {
    let mut steps = Vec::with_capacity(template.steps().len());
    for step in template.steps() {
        match step {
            PatternStep::Exact { field, values } => {
                let values: Vec<&String> = values.iter().filter(|v| !v.trim().is_empty()).collect();
                if values.is_empty() {
                    return Err(CatalogError::EmptyStep {
                        group: group.to_string(),
                        index,
                    });
                }
                steps.push(PatternStep::exact(*field, values));
            }
            PatternStep::Gap => steps.push(PatternStep::Gap),
        }
    }

    let normalized = PatternTemplate::new(steps);
    if normalized.anchor_count() == 0 {
        return Err(CatalogError::NoAnchor {
            group: group.to_string(),
            index,
        });
    }
    Ok(normalized)
}
