//! Batch run reporting.

use serde::{Deserialize, Serialize};

/// Aggregate counts for one batch run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchReport {
    /// Unique run identifier
    pub run_id: String,
    /// Run start timestamp (RFC 3339)
    pub started_at: String,
    /// Run end timestamp (RFC 3339)
    pub finished_at: String,
    /// Whether persistence was withheld
    pub dry_run: bool,
    /// Total drugs processed
    pub total: usize,
    /// Drugs whose composition was accepted (and persisted unless dry-run)
    pub matched: usize,
    /// Drugs identified as combinations (more than one ingredient)
    pub combinations: usize,
    /// Drugs skipped for blank/missing composition text
    pub skipped: usize,
}

impl BatchReport {
    /// Drugs that parsed into at least one component but were rejected.
    pub fn rejected(&self) -> usize {
        self.total - self.matched - self.skipped
    }

    /// Serialize to pretty JSON for the operator summary.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
