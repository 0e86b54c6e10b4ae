//! Batch mapping entry point.
//!
//! Usage: salt-match-batch <db-path> <drugs.json> [--dry-run]
//!
//! Loads the canonical salt reference from the database, resolves every
//! drug record in the JSON file, persists accepted compositions (unless
//! dry-run) and prints the run report as JSON.

use anyhow::{bail, Context, Result};

use salt_match_batch::{run_batch, BatchOptions, DrugRecord};
use salt_match_core::Database;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let (db_path, drugs_path, dry_run) = match args.as_slice() {
        [_, db, drugs] => (db.clone(), drugs.clone(), false),
        [_, db, drugs, flag] if flag == "--dry-run" => (db.clone(), drugs.clone(), true),
        _ => bail!("usage: salt-match-batch <db-path> <drugs.json> [--dry-run]"),
    };

    let mut db =
        Database::open(&db_path).with_context(|| format!("opening database {}", db_path))?;

    let payload = std::fs::read_to_string(&drugs_path)
        .with_context(|| format!("reading drug records from {}", drugs_path))?;
    let records: Vec<DrugRecord> =
        serde_json::from_str(&payload).context("parsing drug records JSON")?;

    let report = run_batch(&mut db, &records, BatchOptions { dry_run })?;
    println!("{}", report.to_json()?);

    Ok(())
}
