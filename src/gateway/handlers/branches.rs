//! Branch endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResponse, ListParams, MessageResponse, Paginated};
use crate::warehouse::models::{Branch, BranchPayload};
use crate::warehouse::repository::{BranchRepository, OfficeRepository};

async fn validate(state: &AppState, payload: &BranchPayload) -> Result<(), ApiError> {
    if payload.code.is_empty() {
        return Err(ApiError::bad_request("branch code is required"));
    }
    if payload.name.is_empty() {
        return Err(ApiError::bad_request("branch name is required"));
    }
    // A branch always hangs off an existing office.
    if OfficeRepository::find_by_id(state.db.pool(), payload.office_id)
        .await?
        .is_none()
    {
        return Err(ApiError::bad_request("office not found"));
    }
    Ok(())
}

/// Get list of branches
#[utoipa::path(
    get,
    path = "/api/v1/branches",
    params(ListParams),
    responses(
        (status = 200, description = "Paginated branches", body = ApiResponse<Paginated<Branch>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("auth_header" = [])),
    tag = "Branches"
)]
pub async fn list_branches(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<Paginated<Branch>>>, ApiError> {
    let (page, page_size) = params.normalize();
    let (items, total_records) =
        BranchRepository::list(state.db.pool(), page, page_size, &params.search()).await?;
    Ok(Json(ApiResponse::success(Paginated {
        total_records,
        page,
        page_size,
        items,
    })))
}

/// Get branch by ID
#[utoipa::path(
    get,
    path = "/api/v1/branches/{id}",
    params(("id" = Uuid, Path, description = "Branch ID")),
    responses(
        (status = 200, description = "Branch", body = ApiResponse<Branch>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Branches"
)]
pub async fn get_branch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Branch>>, ApiError> {
    let branch = BranchRepository::find_by_id(state.db.pool(), id)
        .await?
        .ok_or_else(|| ApiError::not_found("branch not found"))?;
    Ok(Json(ApiResponse::success(branch)))
}

/// Create a new branch
#[utoipa::path(
    post,
    path = "/api/v1/branches",
    request_body = BranchPayload,
    responses(
        (status = 201, description = "Branch created", body = ApiResponse<Branch>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Duplicate code")
    ),
    security(("auth_header" = [])),
    tag = "Branches"
)]
pub async fn create_branch(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BranchPayload>,
) -> Result<(StatusCode, Json<ApiResponse<Branch>>), ApiError> {
    validate(&state, &payload).await?;
    let branch = BranchRepository::create(state.db.pool(), &payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(branch))))
}

/// Update a branch
#[utoipa::path(
    put,
    path = "/api/v1/branches/{id}",
    params(("id" = Uuid, Path, description = "Branch ID")),
    request_body = BranchPayload,
    responses(
        (status = 200, description = "Branch updated", body = ApiResponse<Branch>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Branches"
)]
pub async fn update_branch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BranchPayload>,
) -> Result<Json<ApiResponse<Branch>>, ApiError> {
    validate(&state, &payload).await?;
    let branch = BranchRepository::update(state.db.pool(), id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("branch not found"))?;
    Ok(Json(ApiResponse::success(branch)))
}

/// Delete a branch
#[utoipa::path(
    delete,
    path = "/api/v1/branches/{id}",
    params(("id" = Uuid, Path, description = "Branch ID")),
    responses(
        (status = 200, description = "Branch deleted", body = ApiResponse<MessageResponse>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Branches"
)]
pub async fn delete_branch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    if !BranchRepository::delete(state.db.pool(), id).await? {
        return Err(ApiError::not_found("branch not found"));
    }
    Ok(Json(ApiResponse::success(MessageResponse::new(
        "branch deleted",
    ))))
}
