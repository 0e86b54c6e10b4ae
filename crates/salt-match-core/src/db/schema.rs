//! SQLite schema definition.

/// Complete database schema for salt-match.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Canonical Salt Reference
-- ============================================================================

CREATE TABLE IF NOT EXISTS canonical_salts (
    name TEXT PRIMARY KEY,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- ============================================================================
-- Drug Composition Links (written all-or-nothing per drug)
-- ============================================================================

CREATE TABLE IF NOT EXISTS composition_links (
    drug_id TEXT NOT NULL,
    salt_name TEXT NOT NULL REFERENCES canonical_salts(name),
    strength_value REAL NOT NULL,
    strength_unit TEXT NOT NULL,
    role TEXT NOT NULL CHECK (role IN ('primary', 'secondary')),
    position INTEGER NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    PRIMARY KEY (drug_id, position)
);

CREATE INDEX IF NOT EXISTS idx_links_salt ON composition_links(salt_name);
"#;
