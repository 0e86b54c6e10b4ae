//! Resolved composition models.

use serde::{Deserialize, Serialize};

/// A numeric strength paired with its unit token.
///
/// The unit is always stored lower-cased ("mg", "ml", "mg/ml", "%") so that
/// comparisons and round-trip formatting are canonical.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Strength {
    /// Numeric value (decimals allowed, e.g. 0.5)
    pub value: f64,
    /// Lower-cased unit token
    pub unit: String,
}

impl Strength {
    /// Create a strength, lower-casing the unit.
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into().to_lowercase(),
        }
    }
}

/// Extraction confidence for a single component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Confidence {
    /// Both a strength value and unit were extracted
    High,
    /// Strength value or unit is missing
    Low,
}

/// Position-derived role of a component within its composition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    /// First-listed ingredient
    Primary,
    /// Any subsequent ingredient of a combination
    Secondary,
}

impl Role {
    /// Role for a component at the given zero-based position.
    pub fn from_order(order: usize) -> Self {
        if order == 0 {
            Role::Primary
        } else {
            Role::Secondary
        }
    }

    /// Stable lowercase label, used for persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
        }
    }
}

/// One resolved ingredient within a drug's composition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompositionComponent {
    /// Original unsplit text segment this component came from (for audit)
    pub raw_fragment: String,
    /// Canonical salt name if matched, otherwise the cleaned candidate name
    pub resolved_name: String,
    /// Whether `resolved_name` is bound to a canonical salt
    pub matched: bool,
    /// Extracted strength value
    pub strength_value: Option<f64>,
    /// Extracted strength unit (lower-cased)
    pub strength_unit: Option<String>,
    /// High iff both strength value and unit are present
    pub confidence: Confidence,
    /// Zero-based position within the composition
    pub order: usize,
    /// Primary iff order == 0
    pub role: Role,
}

impl CompositionComponent {
    /// Whether this component satisfies the acceptance invariant on its own:
    /// bound to a canonical salt and carrying a full strength.
    pub fn is_complete(&self) -> bool {
        self.matched && self.strength_value.is_some() && self.strength_unit.is_some()
    }

    /// Why this component fails the acceptance invariant, if it does.
    pub fn failure(&self) -> Option<ComponentFailure> {
        if !self.matched {
            return Some(ComponentFailure::NoMatch {
                candidate: self.resolved_name.clone(),
                raw_fragment: self.raw_fragment.clone(),
            });
        }
        if self.strength_value.is_none() || self.strength_unit.is_none() {
            return Some(ComponentFailure::MissingStrength {
                candidate: self.resolved_name.clone(),
                raw_fragment: self.raw_fragment.clone(),
            });
        }
        None
    }
}

/// Reason a component dragged its composition to rejection.
///
/// Carries the cleaned candidate name and the original fragment text so the
/// caller can attribute the diagnostic to the specific failing ingredient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ComponentFailure {
    /// No canonical salt matched the candidate name
    NoMatch {
        candidate: String,
        raw_fragment: String,
    },
    /// A salt matched but no strength value/unit was found
    MissingStrength {
        candidate: String,
        raw_fragment: String,
    },
}

/// The full resolution output for one drug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolvedComposition {
    /// Resolved components in input order
    pub components: Vec<CompositionComponent>,
    /// True iff every component matched a salt and carries a full strength
    pub accepted: bool,
}

impl ResolvedComposition {
    /// The empty, rejected result used for null/blank input.
    pub fn empty() -> Self {
        Self {
            components: Vec::new(),
            accepted: false,
        }
    }

    /// Build from components, deriving the all-or-nothing `accepted` flag.
    pub fn from_components(components: Vec<CompositionComponent>) -> Self {
        let accepted = !components.is_empty() && components.iter().all(|c| c.is_complete());
        Self {
            components,
            accepted,
        }
    }

    /// Whether this composition lists more than one ingredient.
    pub fn is_combination(&self) -> bool {
        self.components.len() > 1
    }

    /// Failures of individual components, in input order.
    pub fn failures(&self) -> Vec<ComponentFailure> {
        self.components
            .iter()
            .filter_map(|c| c.failure())
            .collect()
    }
}
