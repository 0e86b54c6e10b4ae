//! Ingredient name cleanup.
//!
//! Handles:
//! - Pharmacopeial qualifier removal (IP, BP, USP)
//! - Stray parenthesis removal
//! - Trailing numeric garbage when no strength was extracted

use std::sync::LazyLock;

use regex::Regex;

/// Pharmacopeial qualifiers removed as whole words, case-insensitively.
const QUALIFIERS: &[&str] = &["IP", "BP", "USP"];

static QUALIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", QUALIFIERS.join("|"))).expect("valid qualifier pattern")
});

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid whitespace pattern"));

/// Clean the name portion of a fragment.
///
/// `strength_found` tells whether a strength was extracted from the fragment;
/// when it was not, the fragment may still contain stray numeric garbage, so
/// everything from the first digit onwards is dropped first.
pub fn clean_name(raw: &str, strength_found: bool) -> String {
    let mut name = raw.to_string();

    if !strength_found {
        if let Some(pos) = name.find(|c: char| c.is_ascii_digit()) {
            name.truncate(pos);
        }
    }

    let name = QUALIFIER_RE.replace_all(&name, "");
    let name = name.replace(['(', ')'], "");
    let name = WHITESPACE_RE.replace_all(&name, " ");
    name.trim().to_string()
}
