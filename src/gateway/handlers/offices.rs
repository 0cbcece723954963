//! Office endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResponse, ListParams, MessageResponse, Paginated};
use crate::warehouse::models::{Office, OfficePayload};
use crate::warehouse::repository::OfficeRepository;

fn validate(payload: &OfficePayload) -> Result<(), ApiError> {
    if payload.code.is_empty() {
        return Err(ApiError::bad_request("office code is required"));
    }
    if payload.name.is_empty() {
        return Err(ApiError::bad_request("office name is required"));
    }
    Ok(())
}

/// Get list of offices
#[utoipa::path(
    get,
    path = "/api/v1/offices",
    params(ListParams),
    responses(
        (status = 200, description = "Paginated offices", body = ApiResponse<Paginated<Office>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("auth_header" = [])),
    tag = "Offices"
)]
pub async fn list_offices(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<Paginated<Office>>>, ApiError> {
    let (page, page_size) = params.normalize();
    let (items, total_records) =
        OfficeRepository::list(state.db.pool(), page, page_size, &params.search()).await?;
    Ok(Json(ApiResponse::success(Paginated {
        total_records,
        page,
        page_size,
        items,
    })))
}

/// Get office by ID
#[utoipa::path(
    get,
    path = "/api/v1/offices/{id}",
    params(("id" = Uuid, Path, description = "Office ID")),
    responses(
        (status = 200, description = "Office", body = ApiResponse<Office>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Offices"
)]
pub async fn get_office(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Office>>, ApiError> {
    let office = OfficeRepository::find_by_id(state.db.pool(), id)
        .await?
        .ok_or_else(|| ApiError::not_found("office not found"))?;
    Ok(Json(ApiResponse::success(office)))
}

/// Create a new office
#[utoipa::path(
    post,
    path = "/api/v1/offices",
    request_body = OfficePayload,
    responses(
        (status = 201, description = "Office created", body = ApiResponse<Office>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Duplicate code")
    ),
    security(("auth_header" = [])),
    tag = "Offices"
)]
pub async fn create_office(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<OfficePayload>,
) -> Result<(StatusCode, Json<ApiResponse<Office>>), ApiError> {
    validate(&payload)?;
    let office = OfficeRepository::create(state.db.pool(), &payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(office))))
}

/// Update an office
#[utoipa::path(
    put,
    path = "/api/v1/offices/{id}",
    params(("id" = Uuid, Path, description = "Office ID")),
    request_body = OfficePayload,
    responses(
        (status = 200, description = "Office updated", body = ApiResponse<Office>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Offices"
)]
pub async fn update_office(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<OfficePayload>,
) -> Result<Json<ApiResponse<Office>>, ApiError> {
    validate(&payload)?;
    let office = OfficeRepository::update(state.db.pool(), id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("office not found"))?;
    Ok(Json(ApiResponse::success(office)))
}

/// Delete an office
#[utoipa::path(
    delete,
    path = "/api/v1/offices/{id}",
    params(("id" = Uuid, Path, description = "Office ID")),
    responses(
        (status = 200, description = "Office deleted", body = ApiResponse<MessageResponse>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Offices"
)]
pub async fn delete_office(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    if !OfficeRepository::delete(state.db.pool(), id).await? {
        return Err(ApiError::not_found("office not found"));
    }
    Ok(Json(ApiResponse::success(MessageResponse::new(
        "office deleted",
    ))))
}
