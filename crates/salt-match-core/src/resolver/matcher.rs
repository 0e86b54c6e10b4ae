//! Canonical salt matching.
//!
//! Strategies, in order, first hit wins:
//! 1. Exact match (case-sensitive)
//! 2. Exact match on lower-cased names
//! 3. Fuzzy prefix fallback for candidates longer than three characters
//!
//! On a prefix collision the first entry in reference iteration order wins.
//! That weak guarantee is deliberate; callers needing tighter behavior must
//! curate the reference list, not this matcher.

use strsim::jaro_winkler;

use crate::models::CanonicalSalt;

/// Candidates at or below this many characters never fuzzy-match; short
/// fragments like "Ca" would otherwise collide with half the reference list.
const FUZZY_MIN_CHARS: usize = 3;

/// Number of suggestions returned for reject diagnostics.
const DEFAULT_SUGGESTIONS: usize = 3;

/// A near-miss suggestion for operator review.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSuggestion {
    /// Canonical salt name
    pub name: String,
    /// Jaro-Winkler similarity to the candidate (0.0 - 1.0)
    pub similarity: f64,
}

/// Matcher over the read-only canonical salt reference set.
pub struct SaltMatcher<'a> {
    reference: &'a [CanonicalSalt],
}

impl<'a> SaltMatcher<'a> {
    /// Create a matcher over a loaded reference set.
    pub fn new(reference: &'a [CanonicalSalt]) -> Self {
        Self { reference }
    }

    /// Resolve a candidate name to a canonical salt, or report no match.
    pub fn match_name(&self, candidate: &str) -> Option<&'a CanonicalSalt> {
        if let Some(salt) = self.reference.iter().find(|s| s.name == candidate) {
            return Some(salt);
        }

        let candidate_lower = candidate.to_lowercase();
        if let Some(salt) = self
            .reference
            .iter()
            .find(|s| s.name.to_lowercase() == candidate_lower)
        {
            return Some(salt);
        }

        if candidate.chars().count() > FUZZY_MIN_CHARS {
            return self
                .reference
                .iter()
                .find(|s| s.name.to_lowercase().starts_with(&candidate_lower));
        }

        None
    }

    /// Closest canonical names to an unmatched candidate, best first.
    ///
    /// Diagnostics only: never consulted by `match_name`.
    pub fn suggestions(&self, candidate: &str, limit: usize) -> Vec<ScoredSuggestion> {
        let candidate_lower = candidate.to_lowercase();
        let mut scored: Vec<ScoredSuggestion> = self
            .reference
            .iter()
            .map(|s| ScoredSuggestion {
                name: s.name.clone(),
                similarity: jaro_winkler(&candidate_lower, &s.name.to_lowercase()),
            })
            .collect();

        scored.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(limit);
        scored
    }

    /// Suggestions with the default list length.
    pub fn default_suggestions(&self, candidate: &str) -> Vec<ScoredSuggestion> {
        self.suggestions(candidate, DEFAULT_SUGGESTIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Vec<CanonicalSalt> {
        vec![
            CanonicalSalt::new("Paracetamol"),
            CanonicalSalt::new("Amoxicillin"),
            CanonicalSalt::new("Clavulanic Acid"),
            CanonicalSalt::new("Montelukast Sodium"),
            CanonicalSalt::new("Montelukast"),
            CanonicalSalt::new("Calcium Carbonate"),
        ]
    }

    #[test]
    fn test_exact_match() {
        let salts = reference();
        let matcher = SaltMatcher::new(&salts);
        assert_eq!(matcher.match_name("Paracetamol").unwrap().name, "Paracetamol");
    }

    #[test]
    fn test_case_insensitive_match() {
        let salts = reference();
        let matcher = SaltMatcher::new(&salts);
        assert_eq!(matcher.match_name("paracetamol").unwrap().name, "Paracetamol");
        assert_eq!(matcher.match_name("AMOXICILLIN").unwrap().name, "Amoxicillin");
    }

    #[test]
    fn test_fuzzy_prefix_match() {
        let salts = reference();
        let matcher = SaltMatcher::new(&salts);
        assert_eq!(matcher.match_name("Clavu").unwrap().name, "Clavulanic Acid");
        assert_eq!(matcher.match_name("paracet").unwrap().name, "Paracetamol");
    }

    #[test]
    fn test_prefix_collision_first_in_reference_order_wins() {
        let salts = reference();
        let matcher = SaltMatcher::new(&salts);
        // Both "Montelukast Sodium" and "Montelukast" share the prefix;
        // the one listed first wins
        assert_eq!(
            matcher.match_name("Montelu").unwrap().name,
            "Montelukast Sodium"
        );
    }

    #[test]
    fn test_exact_beats_prefix() {
        let salts = reference();
        let matcher = SaltMatcher::new(&salts);
        // "Montelukast" is an exact match even though "Montelukast Sodium"
        // comes first in prefix order
        assert_eq!(matcher.match_name("Montelukast").unwrap().name, "Montelukast");
    }

    #[test]
    fn test_short_candidates_never_fuzzy_match() {
        let salts = reference();
        let matcher = SaltMatcher::new(&salts);
        // "Ca" would prefix-match Calcium Carbonate; the length floor stops it
        assert!(matcher.match_name("Ca").is_none());
        assert!(matcher.match_name("Cal").is_none());
        assert_eq!(
            matcher.match_name("Calc").unwrap().name,
            "Calcium Carbonate"
        );
    }

    #[test]
    fn test_no_match() {
        let salts = reference();
        let matcher = SaltMatcher::new(&salts);
        assert!(matcher.match_name("Unrecognized Thing").is_none());
    }

    #[test]
    fn test_suggestions_ranked() {
        let salts = reference();
        let matcher = SaltMatcher::new(&salts);
        let suggestions = matcher.suggestions("Paracitamol", 2);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].name, "Paracetamol");
        assert!(suggestions[0].similarity > suggestions[1].similarity);
    }
}
