//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.
//!
//! Responses follow the `success`/`error` envelope convention. Public case
//! views use [`CaseJson`], which never carries clerk notes; the admin-only
//! update path returns [`AdminCaseJson`] including them.

use docket_core::{
    Case, CasePatch, CaseStatus, CaseType, CreateCase, RegistryError,
    stats::{StatusBucket, TypeBucket},
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// CASE VIEWS
// =============================================================================

/// Public JSON view of a case. Clerk notes are deliberately absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseJson {
    pub id: u64,
    pub case_number: String,
    #[serde(rename = "type")]
    pub case_type: CaseType,
    pub type_name: String,
    pub plaintiff: String,
    pub defendant: String,
    pub description: String,
    pub status: CaseStatus,
    pub status_label: String,
    /// Registration date, `YYYY-MM-DD`.
    pub date: String,
}

impl CaseJson {
    /// Build the public view from a core case, dropping internal notes.
    #[must_use]
    pub fn public(case: &Case) -> Self {
        Self {
            id: case.id.0,
            case_number: case.case_number.clone(),
            case_type: case.case_type,
            type_name: case.type_name.clone(),
            plaintiff: case.plaintiff.clone(),
            defendant: case.defendant.clone(),
            description: case.description.clone(),
            status: case.status,
            status_label: case.status.label().to_string(),
            date: case.date.to_string(),
        }
    }
}

/// Admin JSON view of a case: the public view plus clerk notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCaseJson {
    #[serde(flatten)]
    pub case: CaseJson,
    pub notes: Option<String>,
}

impl AdminCaseJson {
    #[must_use]
    pub fn from_case(case: &Case) -> Self {
        Self {
            case: CaseJson::public(case),
            notes: case.notes.clone(),
        }
    }
}

// =============================================================================
// CREATE REQUEST/RESPONSE
// =============================================================================

/// Case filing request.
///
/// The type code arrives as a raw string so that codes outside the
/// enumerated set surface as the registry's `UnknownTypeCode` error
/// rather than a generic deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCaseRequest {
    #[serde(rename = "type")]
    pub type_code: String,
    pub plaintiff: String,
    pub defendant: String,
    pub description: String,
}

impl CreateCaseRequest {
    /// Convert to registry input, resolving the type code.
    pub fn to_input(&self) -> Result<CreateCase, RegistryError> {
        Ok(CreateCase {
            case_type: CaseType::from_str(&self.type_code)?,
            plaintiff: self.plaintiff.clone(),
            defendant: self.defendant.clone(),
            description: self.description.clone(),
        })
    }
}

/// Case filing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCaseResponse {
    pub success: bool,
    pub case: Option<CaseJson>,
    pub error: Option<String>,
}

impl CreateCaseResponse {
    pub fn success(case: &Case) -> Self {
        Self {
            success: true,
            case: Some(CaseJson::public(case)),
            error: None,
        }
    }
}

// =============================================================================
// LIST / SEARCH
// =============================================================================

/// Query parameters of `GET /cases`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CasesQuery {
    /// Free-text search term; absent or empty matches everything.
    #[serde(default)]
    pub search: Option<String>,
    /// Type facet: a type code, or "all"/absent for no restriction.
    #[serde(default, rename = "type")]
    pub type_code: Option<String>,
}

impl CasesQuery {
    /// Resolve the facet parameter. `None` and `"all"` mean no restriction.
    pub fn type_filter(&self) -> Result<Option<CaseType>, RegistryError> {
        match self.type_code.as_deref() {
            None | Some("all") => Ok(None),
            Some(code) => CaseType::from_str(code).map(Some),
        }
    }
}

/// Case listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CasesResponse {
    pub success: bool,
    pub total: usize,
    pub cases: Vec<CaseJson>,
}

impl CasesResponse {
    pub fn from_cases<'a>(cases: impl IntoIterator<Item = &'a Case>) -> Self {
        let cases: Vec<CaseJson> = cases.into_iter().map(CaseJson::public).collect();
        Self {
            success: true,
            total: cases.len(),
            cases,
        }
    }
}

/// Query parameters of `GET /cases/next-number`.
#[derive(Debug, Clone, Deserialize)]
pub struct NextNumberQuery {
    #[serde(rename = "type")]
    pub type_code: String,
}

/// Response of `GET /cases/next-number`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextNumberResponse {
    pub success: bool,
    /// Provisional number; recomputed at actual filing time.
    pub case_number: String,
}

// =============================================================================
// UPDATE REQUEST/RESPONSE
// =============================================================================

/// Admin patch request: status and clerk notes only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCaseRequest {
    #[serde(default)]
    pub status: Option<CaseStatus>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl UpdateCaseRequest {
    #[must_use]
    pub fn to_patch(&self) -> CasePatch {
        CasePatch {
            status: self.status,
            notes: self.notes.clone(),
        }
    }
}

/// Admin patch response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCaseResponse {
    pub success: bool,
    pub case: Option<AdminCaseJson>,
    pub error: Option<String>,
}

impl UpdateCaseResponse {
    pub fn success(case: &Case) -> Self {
        Self {
            success: true,
            case: Some(AdminCaseJson::from_case(case)),
            error: None,
        }
    }
}

// =============================================================================
// STATS RESPONSE
// =============================================================================

/// Aggregate statistics response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub success: bool,
    pub total: usize,
    pub by_status: Vec<StatusBucket>,
    pub by_type: Vec<TypeBucket>,
}

// =============================================================================
// CATALOG RESPONSE
// =============================================================================

/// One selectable case type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeEntry {
    pub code: String,
    pub label: String,
}

/// Case-type catalog response (selection menus).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypesResponse {
    pub success: bool,
    pub types: Vec<TypeEntry>,
}

// =============================================================================
// LOGIN / LOGOUT
// =============================================================================

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login / logout response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub success: bool,
    pub authenticated: bool,
    pub error: Option<String>,
}

impl SessionResponse {
    pub fn authenticated() -> Self {
        Self {
            success: true,
            authenticated: true,
            error: None,
        }
    }

    pub fn logged_out() -> Self {
        Self {
            success: true,
            authenticated: false,
            error: None,
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            authenticated: false,
            error: Some("invalid username or password".to_string()),
        }
    }
}

// =============================================================================
// GENERIC ERROR / DELETE
// =============================================================================

/// Generic error envelope for failures without a dedicated response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: msg.into(),
        }
    }
}

/// Delete acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCaseResponse {
    pub success: bool,
    pub deleted_case_number: String,
}
