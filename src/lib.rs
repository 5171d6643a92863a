//! Bedside triage: routes postpartum patient messages to the right caregiver.

pub mod config;
pub mod error;
pub mod triage;

pub use triage::{Routing, Tier, TriageEngine, TriageResult};
