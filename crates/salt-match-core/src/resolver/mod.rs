//! Composition resolution pipeline.
//!
//! Pipeline per fragment: Split → Strength Extraction → Name Cleanup →
//! Alias Rewrite → Salt Matching → Assembly
//!
//! The assembler applies the all-or-nothing rule: a composition is accepted
//! only when every ingredient matched a canonical salt and carries a full
//! strength. Partial results are kept for diagnostics but are never
//! persistable (see `ResolvedComposition::to_links`).

mod alias;
mod formatter;
mod matcher;
mod normalizer;
mod splitter;
mod strength;

pub use alias::*;
pub use formatter::*;
pub use matcher::*;
pub use normalizer::*;
pub use splitter::*;
pub use strength::*;

use thiserror::Error;

use crate::models::{
    CanonicalSalt, CompositionComponent, Confidence, ResolvedComposition, Role, Strength,
};

/// Resolver errors.
///
/// Ordinary business outcomes (no match, no strength, blank input) are data,
/// not errors; the only failure here is a caller-contract violation.
#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("canonical salt reference set is empty; load it before resolving")]
    EmptyReference,
}

pub type ResolverResult<T> = Result<T, ResolverError>;

/// Composition resolver over a loaded canonical salt reference set.
///
/// Stateless per call: each `resolve` builds a fresh value from its inputs,
/// so one resolver can serve many drugs, concurrently if shared.
pub struct Resolver<'a> {
    matcher: SaltMatcher<'a>,
    aliases: AliasTable,
}

impl<'a> Resolver<'a> {
    /// Create a resolver with the default alias table.
    ///
    /// Fails fast on an empty reference set - resolving against nothing is
    /// always a caller bug, not a business outcome.
    pub fn new(reference: &'a [CanonicalSalt]) -> ResolverResult<Self> {
        Self::with_aliases(reference, AliasTable::new())
    }

    /// Create a resolver with a caller-supplied alias table.
    pub fn with_aliases(
        reference: &'a [CanonicalSalt],
        aliases: AliasTable,
    ) -> ResolverResult<Self> {
        if reference.is_empty() {
            return Err(ResolverError::EmptyReference);
        }
        Ok(Self {
            matcher: SaltMatcher::new(reference),
            aliases,
        })
    }

    /// Get the matcher for direct access (suggestions for diagnostics).
    pub fn matcher(&self) -> &SaltMatcher<'a> {
        &self.matcher
    }

    /// Resolve a raw composition string into a `ResolvedComposition`.
    ///
    /// `fallback` is an externally sourced package-level strength; it is
    /// substituted only for a single-salt composition or the first component
    /// of a combination. Null, empty or whitespace-only input yields the
    /// empty rejected result, never an error.
    pub fn resolve(
        &self,
        composition: Option<&str>,
        fallback: Option<&Strength>,
    ) -> ResolvedComposition {
        let text = match composition {
            Some(t) if !t.trim().is_empty() => t,
            _ => return ResolvedComposition::empty(),
        };

        let fragments = split_fragments(text);
        if fragments.is_empty() {
            return ResolvedComposition::empty();
        }

        let combination = fragments.len() > 1;
        let components = fragments
            .iter()
            .enumerate()
            .map(|(order, fragment)| {
                self.resolve_fragment(fragment, order, combination, fallback)
            })
            .collect();

        ResolvedComposition::from_components(components)
    }

    /// Run the per-fragment pipeline and assemble one component.
    fn resolve_fragment(
        &self,
        fragment: &str,
        order: usize,
        combination: bool,
        fallback: Option<&Strength>,
    ) -> CompositionComponent {
        let extracted = extract_strength(fragment);

        let name_part = match &extracted {
            Some(m) => &fragment[..m.name_end],
            None => fragment,
        };
        let cleaned = clean_name(name_part, extracted.is_some());
        let candidate = self.aliases.resolve(&cleaned);
        let matched = self.matcher.match_name(&candidate);

        // Secondary components of a combination never receive the fallback
        let strength = extracted.map(|m| m.strength).or_else(|| {
            if !combination || order == 0 {
                fallback.map(|s| Strength::new(s.value, s.unit.as_str()))
            } else {
                None
            }
        });

        let (strength_value, strength_unit) = match strength {
            Some(s) => (Some(s.value), Some(s.unit)),
            None => (None, None),
        };
        let confidence = if strength_value.is_some() && strength_unit.is_some() {
            Confidence::High
        } else {
            Confidence::Low
        };

        CompositionComponent {
            raw_fragment: fragment.to_string(),
            resolved_name: matched
                .map(|salt| salt.name.clone())
                .unwrap_or(candidate),
            matched: matched.is_some(),
            strength_value,
            strength_unit,
            confidence,
            order,
            role: Role::from_order(order),
        }
    }
}
