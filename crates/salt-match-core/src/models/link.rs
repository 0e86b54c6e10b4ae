//! Durable drug-to-salt link records.

use serde::{Deserialize, Serialize};

use super::composition::{ResolvedComposition, Role};

/// One durable link between a drug and a canonical salt.
///
/// Links only exist for accepted compositions, so strength fields are not
/// optional here: a link row always carries a full strength.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompositionLink {
    /// Drug identifier (owned by the caller's inventory)
    pub drug_id: String,
    /// Matched canonical salt name
    pub salt_name: String,
    /// Strength value
    pub strength_value: f64,
    /// Strength unit (lower-cased)
    pub strength_unit: String,
    /// Primary/secondary role
    pub role: Role,
    /// Zero-based position within the composition
    pub position: usize,
}

impl ResolvedComposition {
    /// Convert an accepted composition into its link rows.
    ///
    /// Returns `None` unless the composition is accepted, so a partial set of
    /// links for one drug can never be produced.
    pub fn to_links(&self, drug_id: &str) -> Option<Vec<CompositionLink>> {
        if !self.accepted {
            return None;
        }
        let links = self
            .components
            .iter()
            .map(|c| {
                Some(CompositionLink {
                    drug_id: drug_id.to_string(),
                    salt_name: c.resolved_name.clone(),
                    strength_value: c.strength_value?,
                    strength_unit: c.strength_unit.clone()?,
                    role: c.role,
                    position: c.order,
                })
            })
            .collect::<Option<Vec<_>>>()?;
        Some(links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompositionComponent, Confidence};

    fn complete_component(order: usize, name: &str, value: f64) -> CompositionComponent {
        CompositionComponent {
            raw_fragment: format!("{} {}mg", name, value),
            resolved_name: name.to_string(),
            matched: true,
            strength_value: Some(value),
            strength_unit: Some("mg".to_string()),
            confidence: Confidence::High,
            order,
            role: Role::from_order(order),
        }
    }

    #[test]
    fn test_accepted_composition_to_links() {
        let comp = ResolvedComposition::from_components(vec![
            complete_component(0, "Amoxicillin", 500.0),
            complete_component(1, "Clavulanic Acid", 125.0),
        ]);

        let links = comp.to_links("DRUG-1").unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].salt_name, "Amoxicillin");
        assert_eq!(links[0].role, Role::Primary);
        assert_eq!(links[0].position, 0);
        assert_eq!(links[1].salt_name, "Clavulanic Acid");
        assert_eq!(links[1].role, Role::Secondary);
        assert_eq!(links[1].position, 1);
    }

    #[test]
    fn test_rejected_composition_yields_no_links() {
        let mut incomplete = complete_component(1, "Mystery", 0.0);
        incomplete.matched = false;
        let comp = ResolvedComposition::from_components(vec![
            complete_component(0, "Amoxicillin", 500.0),
            incomplete,
        ]);

        assert!(!comp.accepted);
        assert!(comp.to_links("DRUG-1").is_none());
    }

    #[test]
    fn test_empty_composition_yields_no_links() {
        assert!(ResolvedComposition::empty().to_links("DRUG-1").is_none());
    }
}
