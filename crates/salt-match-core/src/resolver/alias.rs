//! Known spelling variants and synonyms.
//!
//! The alias table rewrites non-canonical spellings ("Amoxycillin",
//! "Pcm") to canonical names before matching. Lookup is exact and
//! case-sensitive; unknown names pass through unchanged. The table is
//! read-only configuration data.

use std::collections::HashMap;

/// Static mapping from known variants to canonical salt names.
pub struct AliasTable {
    map: HashMap<String, String>,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AliasTable {
    /// Create a table with the default mappings.
    pub fn new() -> Self {
        Self {
            map: Self::default_aliases(),
        }
    }

    /// Create an empty table (for callers supplying their own data).
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Rewrite a name through the table; pass-through on miss.
    pub fn resolve(&self, name: &str) -> String {
        self.map
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }

    /// Add a custom alias mapping.
    pub fn add_alias(&mut self, alias: &str, canonical: &str) {
        self.map.insert(alias.to_string(), canonical.to_string());
    }

    /// Default alias mappings.
    fn default_aliases() -> HashMap<String, String> {
        let mut map = HashMap::new();

        // Spelling variants
        map.insert("Amoxycillin".into(), "Amoxicillin".into());
        map.insert("Paracetomol".into(), "Paracetamol".into());
        map.insert("Paracetmol".into(), "Paracetamol".into());
        map.insert("Ibuprofin".into(), "Ibuprofen".into());
        map.insert("Cetrizine".into(), "Cetirizine".into());
        map.insert("Domperidon".into(), "Domperidone".into());
        map.insert("Glimiperide".into(), "Glimepiride".into());

        // Shorthand
        map.insert("Pcm".into(), "Paracetamol".into());
        map.insert("PCM".into(), "Paracetamol".into());
        map.insert("Cpm".into(), "Chlorpheniramine Maleate".into());
        map.insert("CPM".into(), "Chlorpheniramine Maleate".into());
        map.insert("Vit C".into(), "Ascorbic Acid".into());
        map.insert("Vit D3".into(), "Vitamin D3 (Cholecalciferol)".into());

        // Synonyms
        map.insert("Acetaminophen".into(), "Paracetamol".into());
        map.insert("Vitamin C".into(), "Ascorbic Acid".into());
        map.insert("Amoxicillin Trihydrate".into(), "Amoxicillin".into());
        map.insert("Clavulanate Potassium".into(), "Clavulanic Acid".into());
        map.insert("Metformin Hcl".into(), "Metformin Hydrochloride".into());
        map.insert("Dicyclomine Hcl".into(), "Dicyclomine Hydrochloride".into());

        // Paren-free spelling of a canonical name that carries parentheses;
        // cleanup removes parens from candidates, so this bridge is needed
        // for that entry to be reachable at all
        map.insert(
            "Vitamin D3 Cholecalciferol".into(),
            "Vitamin D3 (Cholecalciferol)".into(),
        );

        map
    }
}
