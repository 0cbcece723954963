//! Measurement unit endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResponse, ListParams, MessageResponse, Paginated};
use crate::warehouse::models::{Unit, UnitPayload};
use crate::warehouse::repository::UnitRepository;

fn validate(payload: &UnitPayload) -> Result<(), ApiError> {
    if payload.code.is_empty() {
        return Err(ApiError::bad_request("unit code is required"));
    }
    if payload.name.is_empty() {
        return Err(ApiError::bad_request("unit name is required"));
    }
    Ok(())
}

/// Get list of units
#[utoipa::path(
    get,
    path = "/api/v1/units",
    params(ListParams),
    responses(
        (status = 200, description = "Paginated units", body = ApiResponse<Paginated<Unit>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("auth_header" = [])),
    tag = "Units"
)]
pub async fn list_units(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<Paginated<Unit>>>, ApiError> {
    let (page, page_size) = params.normalize();
    let (items, total_records) =
        UnitRepository::list(state.db.pool(), page, page_size, &params.search()).await?;
    Ok(Json(ApiResponse::success(Paginated {
        total_records,
        page,
        page_size,
        items,
    })))
}

/// Get unit by ID
#[utoipa::path(
    get,
    path = "/api/v1/units/{id}",
    params(("id" = Uuid, Path, description = "Unit ID")),
    responses(
        (status = 200, description = "Unit", body = ApiResponse<Unit>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Units"
)]
pub async fn get_unit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Unit>>, ApiError> {
    let unit = UnitRepository::find_by_id(state.db.pool(), id)
        .await?
        .ok_or_else(|| ApiError::not_found("unit not found"))?;
    Ok(Json(ApiResponse::success(unit)))
}

/// Create a new unit
#[utoipa::path(
    post,
    path = "/api/v1/units",
    request_body = UnitPayload,
    responses(
        (status = 201, description = "Unit created", body = ApiResponse<Unit>),
        (status = 400, description = "Validation error")
    ),
    security(("auth_header" = [])),
    tag = "Units"
)]
pub async fn create_unit(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UnitPayload>,
) -> Result<(StatusCode, Json<ApiResponse<Unit>>), ApiError> {
    validate(&payload)?;
    let unit = UnitRepository::create(state.db.pool(), &payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(unit))))
}

/// Update a unit
#[utoipa::path(
    put,
    path = "/api/v1/units/{id}",
    params(("id" = Uuid, Path, description = "Unit ID")),
    request_body = UnitPayload,
    responses(
        (status = 200, description = "Unit updated", body = ApiResponse<Unit>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Units"
)]
pub async fn update_unit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UnitPayload>,
) -> Result<Json<ApiResponse<Unit>>, ApiError> {
    validate(&payload)?;
    let unit = UnitRepository::update(state.db.pool(), id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("unit not found"))?;
    Ok(Json(ApiResponse::success(unit)))
}

/// Delete a unit
#[utoipa::path(
    delete,
    path = "/api/v1/units/{id}",
    params(("id" = Uuid, Path, description = "Unit ID")),
    responses(
        (status = 200, description = "Unit deleted", body = ApiResponse<MessageResponse>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Units"
)]
pub async fn delete_unit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    if !UnitRepository::delete(state.db.pool(), id).await? {
        return Err(ApiError::not_found("unit not found"));
    }
    Ok(Json(ApiResponse::success(MessageResponse::new(
        "unit deleted",
    ))))
}
