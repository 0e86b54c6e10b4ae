//! Salt-Match Core Library
//!
//! Deterministic parser and matcher that turns free-text pharmaceutical
//! composition strings into structured, canonical salt-composition records.
//!
//! # Architecture
//!
//! ```text
//! "Amoxycillin (500mg) + Clavulanic Acid 125mg"
//!                      │
//!              ┌───────▼────────┐
//!              │  Unit-aware    │   protects "mg/ml", "w/w"
//!              │     split      │   splits on + / & , "plus"
//!              └───────┬────────┘
//!          per fragment │
//!     ┌─────────────────┼─────────────────┐
//!     ▼                 ▼                 ▼
//! Strength         Name cleanup      Alias rewrite
//! extraction       (IP/BP/USP,       (exact, case-
//! (bounded, plain)  parens)           sensitive)
//!     │                 │                 │
//!     └────────┬────────┴────────┬────────┘
//!              │                 ▼
//!              │         Canonical matching
//!              │         (exact → lowercase → prefix)
//!              ▼                 │
//!      ┌───────────────────────────────┐
//!      │     Composition assembly      │
//!      │  order, role, confidence,     │
//!      │  all-or-nothing acceptance    │
//!      └───────────────────────────────┘
//! ```
//!
//! # Core Principle
//!
//! **Acceptance is all-or-nothing per drug.** A composition is accepted only
//! when every ingredient matched a canonical salt and carries a full
//! strength; partial mappings are kept for diagnostics but can never be
//! persisted (link rows only exist for accepted compositions).
//!
//! The engine is synchronous and stateless per call: resolution does no I/O
//! and shares nothing mutable, so callers may parallelize across drugs
//! freely as long as the reference set is not mutated mid-batch.
//!
//! # Modules
//!
//! - [`db`]: SQLite store for the salt reference and per-drug links
//! - [`models`]: Domain types (CanonicalSalt, CompositionComponent, etc.)
//! - [`resolver`]: The resolution pipeline (split, extract, clean, match)

pub mod db;
pub mod models;
pub mod resolver;

// Re-export commonly used types
pub use db::Database;
pub use models::{
    CanonicalSalt, ComponentFailure, CompositionComponent, CompositionLink, Confidence,
    ResolvedComposition, Role, Strength,
};
pub use resolver::{
    format_components, AliasTable, Resolver, ResolverError, ResolverResult, SaltMatcher,
};
