//! # HTTP API Handlers
//!
//! Request handlers for the docket REST API.
//!
//! All case state lives in a single [`docket_core::CaseRegistry`] behind a
//! `RwLock`. Reads take the shared lock; create/update/delete take the
//! exclusive lock, so numbering stays consistent under concurrent clients.
//!
//! Admin-only handlers check the session gate first and answer 401 with an
//! error envelope when no session is open.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use docket_core::{CaseId, CaseStatsAggregator, CaseType, CaseTypeCatalog, RegistryError};
use std::str::FromStr;

use super::AppState;
use super::auth::require_admin;
use super::types::{
    CaseJson, CasesQuery, CasesResponse, CreateCaseRequest, CreateCaseResponse,
    DeleteCaseResponse, ErrorResponse, HealthResponse, NextNumberQuery, NextNumberResponse,
    StatsResponse, TypeEntry, TypesResponse, UpdateCaseRequest, UpdateCaseResponse,
};

/// Shorthand for the error arm shared by all fallible handlers.
type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a registry error to an HTTP status plus error envelope.
///
/// Validation failures and unknown type codes are client errors (400),
/// a missing case is 404.
fn registry_error(err: &RegistryError) -> ApiError {
    let status = match err {
        RegistryError::MissingFields(_) | RegistryError::UnknownTypeCode(_) => {
            StatusCode::BAD_REQUEST
        }
        RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
    };
    (status, Json(ErrorResponse::new(err.to_string())))
}

// =============================================================================
// HEALTH
// =============================================================================

/// GET /health - Health check endpoint.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

// =============================================================================
// CASE TYPE CATALOG
// =============================================================================

/// GET /types - The case-type catalog in its fixed order.
pub async fn types_handler() -> Json<TypesResponse> {
    let types = CaseTypeCatalog::new()
        .entries()
        .map(|(case_type, label)| TypeEntry {
            code: case_type.code().to_string(),
            label: label.to_string(),
        })
        .collect();

    Json(TypesResponse {
        success: true,
        types,
    })
}

// =============================================================================
// CASE LISTING AND SEARCH
// =============================================================================

/// GET /cases - List cases, optionally filtered by search term and type facet.
///
/// Cases come back in registration order. `?type=all` (or no `type`
/// parameter) disables the facet; any other value must be a known code.
pub async fn list_cases_handler(
    State(state): State<AppState>,
    Query(query): Query<CasesQuery>,
) -> Result<Json<CasesResponse>, ApiError> {
    let type_filter = query.type_filter().map_err(|e| registry_error(&e))?;
    let term = query.search.as_deref().unwrap_or("");

    let registry = state.registry.read().await;
    let matches = docket_core::CaseQueryEngine::search(registry.cases(), term, type_filter);

    Ok(Json(CasesResponse::from_cases(matches)))
}

/// GET /cases/{id} - Fetch a single case by id (public view, no notes).
pub async fn get_case_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<CaseJson>, ApiError> {
    let registry = state.registry.read().await;
    let case = registry.get(CaseId(id)).map_err(|e| registry_error(&e))?;
    Ok(Json(CaseJson::public(case)))
}

/// GET /cases/next-number - Preview the number the next filing would get.
///
/// Purely informational. The number is recomputed when the case is
/// actually created, so two previews can race without consequence.
pub async fn next_number_handler(
    State(state): State<AppState>,
    Query(query): Query<NextNumberQuery>,
) -> Result<Json<NextNumberResponse>, ApiError> {
    let case_type = CaseType::from_str(&query.type_code).map_err(|e| registry_error(&e))?;

    let registry = state.registry.read().await;
    Ok(Json(NextNumberResponse {
        success: true,
        case_number: registry.preview_number(case_type),
    }))
}

// =============================================================================
// CASE FILING
// =============================================================================

/// POST /cases - Register a new case.
///
/// The case number, registration date, initial status and type name are
/// all assigned by the registry; the client supplies only the parties,
/// the description and the type code.
pub async fn create_case_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateCaseRequest>,
) -> Result<(StatusCode, Json<CreateCaseResponse>), ApiError> {
    let input = request.to_input().map_err(|e| registry_error(&e))?;

    let mut registry = state.registry.write().await;
    let case = registry.create(input).map_err(|e| registry_error(&e))?;

    tracing::info!(
        case_number = %case.case_number,
        case_type = %case.case_type,
        "case registered"
    );

    Ok((StatusCode::CREATED, Json(CreateCaseResponse::success(&case))))
}

// =============================================================================
// ADMIN: UPDATE / DELETE / STATS
// =============================================================================

/// PATCH /cases/{id} - Update status and clerk notes (admin only).
///
/// Identity fields are immutable here; the registry ignores everything
/// except status and notes.
pub async fn update_case_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateCaseRequest>,
) -> Result<Json<UpdateCaseResponse>, ApiError> {
    require_admin(&state).await?;

    let mut registry = state.registry.write().await;
    let case = registry
        .update(CaseId(id), request.to_patch())
        .map_err(|e| registry_error(&e))?;

    tracing::info!(case_number = %case.case_number, "case updated");

    Ok(Json(UpdateCaseResponse::success(&case)))
}

/// DELETE /cases/{id} - Remove a case from the registry (admin only).
pub async fn delete_case_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteCaseResponse>, ApiError> {
    require_admin(&state).await?;

    let mut registry = state.registry.write().await;
    let case_number = registry
        .get(CaseId(id))
        .map_err(|e| registry_error(&e))?
        .case_number
        .clone();
    registry.delete(CaseId(id)).map_err(|e| registry_error(&e))?;

    tracing::info!(case_number = %case_number, "case deleted");

    Ok(Json(DeleteCaseResponse {
        success: true,
        deleted_case_number: case_number,
    }))
}

/// GET /stats - Aggregate counts and percentages (admin only).
pub async fn stats_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, ApiError> {
    require_admin(&state).await?;

    let registry = state.registry.read().await;
    let stats = CaseStatsAggregator::aggregate(registry.cases(), &CaseTypeCatalog::new());

    Ok(Json(StatsResponse {
        success: true,
        total: stats.total,
        by_status: stats.by_status,
        by_type: stats.by_type,
    }))
}
