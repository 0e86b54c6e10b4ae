//! Canonical salt reference models.

use serde::{Deserialize, Serialize};

/// A single entry in the canonical salt reference list.
///
/// The name is the authoritative human-readable spelling, unique across the
/// list (e.g. "Amoxicillin", "Vitamin D3 (Cholecalciferol)"). Reference data
/// is loaded once per resolution run and never mutated mid-run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalSalt {
    /// Unique canonical salt name
    pub name: String,
}

impl CanonicalSalt {
    /// Create a new canonical salt entry.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
