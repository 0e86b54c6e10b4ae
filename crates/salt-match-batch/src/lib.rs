//! Salt-Match Batch Library
//!
//! Drives the composition resolver over a set of drug records, persists
//! accepted compositions all-or-nothing per drug, and reports aggregate
//! counts for operator review.
//!
//! Per-drug resolution failures never abort a batch; only a missing
//! reference set does.

mod report;
mod runner;

pub use report::*;
pub use runner::*;

use thiserror::Error;

/// Batch errors.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Database error: {0}")]
    Database(#[from] salt_match_core::db::DbError),

    #[error("Resolver error: {0}")]
    Resolver(#[from] salt_match_core::resolver::ResolverError),
}

pub type BatchResult<T> = Result<T, BatchError>;
