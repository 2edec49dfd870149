//! # docket-core
//!
//! The in-memory case registry for the court office system - THE LOGIC.
//!
//! This crate implements the CORE of the system: a single source of truth
//! for case filings plus the read-only views derived from it. The
//! presentation layer (HTTP API, CLI) lives in the `docket` binary and is
//! treated strictly as an external collaborator.
//!
//! ## Architecture
//!
//! - [`registry::CaseRegistry`] owns the insertion-ordered case list and is
//!   the only component allowed to mutate it (create / update / delete).
//! - [`catalog::CaseTypeCatalog`] is the fixed code-to-label mapping.
//! - [`number::CaseNumberGenerator`] derives case numbers from current
//!   registry state (count-based, not a persisted counter).
//! - [`query::CaseQueryEngine`] and [`stats::CaseStatsAggregator`] are pure
//!   views recomputed from the registry's contents on every call.
//! - [`gate::SessionGate`] guards the mutating operations behind a single
//!   compiled-in login.
//!
//! ## Architectural Constraints
//!
//! - Single-threaded and synchronous: every operation runs to completion
//!   in response to one external trigger. Callers that share the registry
//!   across tasks must serialize mutations behind one lock so the
//!   count-based numbering invariant holds.
//! - No persistence: state lives for the lifetime of the process.
//! - No async, no network dependencies (pure Rust).

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod gate;
pub mod number;
pub mod query;
pub mod registry;
pub mod stats;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Case, CaseId, CasePatch, CaseStatus, CaseType, CreateCase, RegistryError};

// =============================================================================
// RE-EXPORTS: Registry and Views
// =============================================================================

pub use catalog::CaseTypeCatalog;
pub use gate::{LoginOutcome, SessionGate};
pub use number::CaseNumberGenerator;
pub use query::CaseQueryEngine;
pub use registry::CaseRegistry;
pub use stats::{CaseStats, CaseStatsAggregator, StatusBucket, TypeBucket};
