//! Strength extraction from ingredient fragments.
//!
//! Two patterns are tried in order, first hit wins:
//! - bounded: value and unit enclosed in parentheses, "Amoxycillin (125mg)"
//! - plain: value and unit after whitespace, "Paracetamol 500mg"

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Strength;

// Unit token: letter/% segments optionally joined by '/' (mg, ml, %, mg/ml).
static BOUNDED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\s*([0-9]+(?:\.[0-9]+)?)\s*([A-Za-z%]+(?:/[A-Za-z%]+)*)\s*\)")
        .expect("valid bounded strength pattern")
});

static PLAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[\s(])([0-9]+(?:\.[0-9]+)?)\s*([A-Za-z%]+(?:/[A-Za-z%]+)*)")
        .expect("valid plain strength pattern")
});

/// A strength located inside a fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthMatch {
    /// Extracted value and lower-cased unit
    pub strength: Strength,
    /// Byte offset where the strength expression starts; the fragment text
    /// before this offset is the candidate name
    pub name_end: usize,
}

/// Extract a strength from one ingredient fragment, if present.
pub fn extract_strength(fragment: &str) -> Option<StrengthMatch> {
    for pattern in [&*BOUNDED_RE, &*PLAIN_RE] {
        if let Some(caps) = pattern.captures(fragment) {
            let whole = caps.get(0)?;
            let value: f64 = caps[1].parse().ok()?;
            let unit = &caps[2];
            return Some(StrengthMatch {
                strength: Strength::new(value, unit),
                name_end: whole.start(),
            });
        }
    }
    None
}
