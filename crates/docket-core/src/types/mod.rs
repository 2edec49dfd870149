//! # Core Type Definitions
//!
//! This module contains all core types for the docket case registry:
//! - Identifiers (`CaseId`)
//! - The fixed enumerations (`CaseType`, `CaseStatus`)
//! - The central entity (`Case`) and its input/patch forms
//! - Error types (`RegistryError`)
//!
//! ## Immutability Guarantees
//!
//! A `Case` is only ever constructed by the registry. After creation the
//! identity fields (`id`, `case_number`, `case_type`, `type_name`,
//! `plaintiff`, `defendant`, `description`, `date`) never change; only
//! `status` and `notes` are reachable through [`CasePatch`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Unique identifier for a case within the registry.
///
/// Allocated from a monotonically increasing counter; never reused,
/// even after the case it belonged to has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CaseId(pub u64);

impl std::fmt::Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// CASE TYPE
// =============================================================================

/// The fixed enumeration of case-type codes used by the court office.
///
/// The wire representation is the short procedural code (`1`, `2`, `2a`,
/// `3`, `4`, `5`), both in JSON and in the printed case number. Display
/// labels live in [`crate::catalog::CaseTypeCatalog`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CaseType {
    /// Code `1` — criminal proceedings.
    #[serde(rename = "1")]
    Criminal,
    /// Code `2` — civil proceedings.
    #[serde(rename = "2")]
    Civil,
    /// Code `2a` — administrative proceedings.
    #[serde(rename = "2a")]
    Administrative,
    /// Code `3` — judicial oversight.
    #[serde(rename = "3")]
    JudicialOversight,
    /// Code `4` — sentence enforcement.
    #[serde(rename = "4")]
    SentenceEnforcement,
    /// Code `5` — administrative offences.
    #[serde(rename = "5")]
    AdministrativeOffence,
}

impl CaseType {
    /// All case types in fixed catalog order.
    pub const ALL: [CaseType; 6] = [
        CaseType::Criminal,
        CaseType::Civil,
        CaseType::Administrative,
        CaseType::JudicialOversight,
        CaseType::SentenceEnforcement,
        CaseType::AdministrativeOffence,
    ];

    /// The short procedural code, as it appears in case numbers.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            CaseType::Criminal => "1",
            CaseType::Civil => "2",
            CaseType::Administrative => "2a",
            CaseType::JudicialOversight => "3",
            CaseType::SentenceEnforcement => "4",
            CaseType::AdministrativeOffence => "5",
        }
    }
}

impl FromStr for CaseType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseType::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| RegistryError::UnknownTypeCode(s.to_string()))
    }
}

impl std::fmt::Display for CaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// CASE STATUS
// =============================================================================

/// Lifecycle stage of a case.
///
/// Every case starts as `Received` and can only move between these three
/// values via an explicit edit; no other value is reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// Filing accepted by the office.
    Received,
    /// Under active consideration.
    InProgress,
    /// Proceedings concluded.
    Completed,
}

impl CaseStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [CaseStatus; 3] = [
        CaseStatus::Received,
        CaseStatus::InProgress,
        CaseStatus::Completed,
    ];

    /// Localized display label, as shown by the court office UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CaseStatus::Received => "Принято",
            CaseStatus::InProgress => "В работе",
            CaseStatus::Completed => "Завершено",
        }
    }
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// CASE
// =============================================================================

/// A single court filing record tracked by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    /// Registry-unique identifier, immutable.
    pub id: CaseId,
    /// Human-facing number, `{code}-{seq:03}/{year}`. Assigned once at creation.
    pub case_number: String,
    /// Case-type code.
    #[serde(rename = "type")]
    pub case_type: CaseType,
    /// Display label stamped from the catalog at creation time.
    ///
    /// Stored redundantly for parity with the source system rather than
    /// re-derived on read.
    pub type_name: String,
    /// Claimant or applicant party name.
    pub plaintiff: String,
    /// Respondent or accused party name.
    pub defendant: String,
    /// Free-text summary of the matter.
    pub description: String,
    /// Lifecycle stage; mutable only via [`CasePatch`].
    pub status: CaseStatus,
    /// Registration date (calendar date, not a timestamp). Set once.
    pub date: NaiveDate,
    /// Internal clerk notes. Never exposed to public-facing views.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// =============================================================================
// CREATE / PATCH FORMS
// =============================================================================

/// Input for registering a new case. Everything else on [`Case`] is
/// derived by the registry at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCase {
    /// Case-type code selected by the filer.
    #[serde(rename = "type")]
    pub case_type: CaseType,
    /// Claimant or applicant; required, non-empty.
    pub plaintiff: String,
    /// Respondent or accused; required, non-empty.
    pub defendant: String,
    /// Summary of the matter; required, non-empty.
    pub description: String,
}

impl CreateCase {
    /// Names of the required free-text fields that are empty.
    ///
    /// Empty means the empty string; the registry rejects creation while
    /// this list is non-empty.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.plaintiff.is_empty() {
            missing.push("plaintiff");
        }
        if self.defendant.is_empty() {
            missing.push("defendant");
        }
        if self.description.is_empty() {
            missing.push("description");
        }
        missing
    }
}

/// Partial update applied by [`crate::registry::CaseRegistry::update`].
///
/// Only the two mutable fields appear here; absent fields are left as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasePatch {
    /// New lifecycle stage, if changing.
    #[serde(default)]
    pub status: Option<CaseStatus>,
    /// Replacement clerk notes, if changing.
    #[serde(default)]
    pub notes: Option<String>,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors surfaced by the registry and its views.
///
/// All failures are local and synchronous; every mutation is all-or-nothing
/// against the in-memory collection. A failed login is a negative result
/// ([`crate::gate::LoginOutcome::Rejected`]), not an error.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A create request left required free-text fields empty.
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// No case with the given id exists in the registry.
    #[error("case not found: {0}")]
    NotFound(CaseId),

    /// A case-type code outside the enumerated set.
    #[error("unknown case type code: {0:?}")]
    UnknownTypeCode(String),
}

// =============================================================================
// TESTS
// =============================================================================
