//! Unit-aware composition splitting.
//!
//! Splits a raw composition string into per-ingredient fragments on `+`,
//! `/`, `&`, `,` and the word "plus" without corrupting compound unit
//! expressions such as "mg/ml" or "w/w". Protection works by substituting a
//! sentinel for the `/` inside known unit shapes before the general split,
//! then restoring it per fragment.

use std::sync::LazyLock;

use regex::Regex;

/// Sentinel substituted for '/' inside protected unit expressions.
const SLASH_SENTINEL: char = '\u{1}';

/// Packaging/form words stripped from the whole string before splitting.
const NOISE_WORDS: &[&str] = &[
    "tablet",
    "tablets",
    "capsule",
    "capsules",
    "syrup",
    "suspension",
    "injection",
    "drops",
];

/// Ratio expressions whose '/' is never a delimiter.
const PROTECTED_RATIOS: &[&str] = &["w/w", "w/v", "v/v"];

static NOISE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", NOISE_WORDS.join("|"))).expect("valid noise pattern")
});

static RATIO_RE: LazyLock<Regex> = LazyLock::new(|| {
    let escaped: Vec<String> = PROTECTED_RATIOS.iter().map(|r| regex::escape(r)).collect();
    Regex::new(&format!(r"(?i)\b(?:{})\b", escaped.join("|"))).expect("valid ratio pattern")
});

// A '/' directly after a numeric token and directly before a unit-like token
// ("500mg/5ml", "mg/ml" in "1mg/ml") is part of one strength expression.
static UNIT_SLASH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9][a-z%]*)\s*/\s*((?:[0-9]+(?:\.[0-9]+)?)?\s*(?:mg|mcg|ug|g|kg|ml|l|iu)\b)")
        .expect("valid unit slash pattern")
});

static DELIMITER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\+|/|&|,|\bplus\b").expect("valid delimiter pattern"));

/// Split a composition string into trimmed, non-empty ingredient fragments.
///
/// Empty fragments (from leading/trailing/doubled delimiters) are discarded,
/// so fragment indices are dense.
pub fn split_fragments(text: &str) -> Vec<String> {
    let cleaned = NOISE_RE.replace_all(text, "");
    let protected = protect_units(&cleaned);

    DELIMITER_RE
        .split(&protected)
        .map(|fragment| fragment.replace(SLASH_SENTINEL, "/"))
        .map(|fragment| fragment.trim().to_string())
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Replace the '/' of compound unit expressions with the sentinel.
fn protect_units(text: &str) -> String {
    let ratios_protected = RATIO_RE.replace_all(text, |caps: &regex::Captures| {
        caps[0].replace('/', &SLASH_SENTINEL.to_string())
    });

    UNIT_SLASH_RE
        .replace_all(&ratios_protected, |caps: &regex::Captures| {
            format!("{}{}{}", &caps[1], SLASH_SENTINEL, &caps[2])
        })
        .into_owned()
}
