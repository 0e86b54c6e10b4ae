//! Batch mapping runner.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use salt_match_core::models::{ComponentFailure, Strength};
use salt_match_core::resolver::Resolver;
use salt_match_core::Database;

use super::{BatchError, BatchResult, BatchReport};

/// One drug record submitted to a batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrugRecord {
    /// Drug identifier in the caller's inventory
    pub drug_id: String,
    /// Raw composition text, if any
    pub composition: Option<String>,
    /// Package-level strength used as the resolver fallback
    pub package_strength: Option<Strength>,
}

/// Batch runner configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Compute and log identically, but withhold persistence
    pub dry_run: bool,
}

/// Run a batch of drug records against the reference set stored in `db`.
///
/// Loads the reference once up front; an empty reference aborts the batch
/// before any drug is processed. Accepted compositions are written
/// all-or-nothing per drug; rejected ones are logged per failing fragment
/// and never partially persisted.
pub fn run_batch(
    db: &mut Database,
    records: &[DrugRecord],
    options: BatchOptions,
) -> BatchResult<BatchReport> {
    let run_id = uuid::Uuid::new_v4().to_string();
    let started_at = chrono::Utc::now().to_rfc3339();

    let reference = db.load_salts()?;
    let resolver = Resolver::new(&reference).map_err(BatchError::Resolver)?;

    info!(
        run_id = %run_id,
        drugs = records.len(),
        salts = reference.len(),
        dry_run = options.dry_run,
        "starting composition mapping batch"
    );

    let mut matched = 0usize;
    let mut combinations = 0usize;
    let mut skipped = 0usize;

    for record in records {
        let resolved = resolver.resolve(
            record.composition.as_deref(),
            record.package_strength.as_ref(),
        );

        if resolved.components.is_empty() {
            debug!(drug_id = %record.drug_id, "skipped: no composition text");
            skipped += 1;
            continue;
        }

        if resolved.is_combination() {
            combinations += 1;
        }

        if resolved.accepted {
            // to_links always succeeds for an accepted composition
            if let Some(links) = resolved.to_links(&record.drug_id) {
                if !options.dry_run {
                    db.replace_links(&record.drug_id, &links)?;
                }
                matched += 1;
                debug!(
                    drug_id = %record.drug_id,
                    components = links.len(),
                    "composition mapped"
                );
            }
            continue;
        }

        log_rejection(&resolver, &record.drug_id, &resolved.failures());
    }

    let report = BatchReport {
        run_id,
        started_at,
        finished_at: chrono::Utc::now().to_rfc3339(),
        dry_run: options.dry_run,
        total: records.len(),
        matched,
        combinations,
        skipped,
    };

    info!(
        matched = report.matched,
        rejected = report.rejected(),
        combinations = report.combinations,
        skipped = report.skipped,
        "batch finished"
    );

    Ok(report)
}

/// Log one diagnostic line per failing fragment, with near-miss suggestions
/// for unmatched names.
fn log_rejection(resolver: &Resolver<'_>, drug_id: &str, failures: &[ComponentFailure]) {
    for failure in failures {
        match failure {
            ComponentFailure::NoMatch {
                candidate,
                raw_fragment,
            } => {
                let suggestions: Vec<String> = resolver
                    .matcher()
                    .default_suggestions(candidate)
                    .into_iter()
                    .map(|s| s.name)
                    .collect();
                warn!(
                    drug_id = %drug_id,
                    candidate = %candidate,
                    fragment = %raw_fragment,
                    closest = ?suggestions,
                    "rejected: no canonical match"
                );
            }
            ComponentFailure::MissingStrength {
                candidate,
                raw_fragment,
            } => {
                warn!(
                    drug_id = %drug_id,
                    candidate = %candidate,
                    fragment = %raw_fragment,
                    "rejected: matched but strength missing"
                );
            }
        }
    }
}
