//! Warehouse endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResponse, ListParams, MessageResponse, Paginated};
use crate::warehouse::models::{Warehouse, WarehousePayload};
use crate::warehouse::repository::WarehouseRepository;

fn validate(payload: &WarehousePayload) -> Result<(), ApiError> {
    if payload.code.is_empty() {
        return Err(ApiError::bad_request("warehouse code is required"));
    }
    if payload.name.is_empty() {
        return Err(ApiError::bad_request("warehouse name is required"));
    }
    Ok(())
}

/// Get list of warehouses
#[utoipa::path(
    get,
    path = "/api/v1/warehouses",
    params(ListParams),
    responses(
        (status = 200, description = "Paginated warehouses", body = ApiResponse<Paginated<Warehouse>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("auth_header" = [])),
    tag = "Warehouses"
)]
pub async fn list_warehouses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<Paginated<Warehouse>>>, ApiError> {
    let (page, page_size) = params.normalize();
    let (items, total_records) =
        WarehouseRepository::list(state.db.pool(), page, page_size, &params.search()).await?;
    Ok(Json(ApiResponse::success(Paginated {
        total_records,
        page,
        page_size,
        items,
    })))
}

/// Get warehouse by ID
#[utoipa::path(
    get,
    path = "/api/v1/warehouses/{id}",
    params(("id" = Uuid, Path, description = "Warehouse ID")),
    responses(
        (status = 200, description = "Warehouse", body = ApiResponse<Warehouse>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Warehouses"
)]
pub async fn get_warehouse(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Warehouse>>, ApiError> {
    let warehouse = WarehouseRepository::find_by_id(state.db.pool(), id)
        .await?
        .ok_or_else(|| ApiError::not_found("warehouse not found"))?;
    Ok(Json(ApiResponse::success(warehouse)))
}

/// Create a new warehouse
#[utoipa::path(
    post,
    path = "/api/v1/warehouses",
    request_body = WarehousePayload,
    responses(
        (status = 201, description = "Warehouse created", body = ApiResponse<Warehouse>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Duplicate code")
    ),
    security(("auth_header" = [])),
    tag = "Warehouses"
)]
pub async fn create_warehouse(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<WarehousePayload>,
) -> Result<(StatusCode, Json<ApiResponse<Warehouse>>), ApiError> {
    validate(&payload)?;
    let warehouse = WarehouseRepository::create(state.db.pool(), &payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(warehouse))))
}

/// Update a warehouse
#[utoipa::path(
    put,
    path = "/api/v1/warehouses/{id}",
    params(("id" = Uuid, Path, description = "Warehouse ID")),
    request_body = WarehousePayload,
    responses(
        (status = 200, description = "Warehouse updated", body = ApiResponse<Warehouse>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Warehouses"
)]
pub async fn update_warehouse(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<WarehousePayload>,
) -> Result<Json<ApiResponse<Warehouse>>, ApiError> {
    validate(&payload)?;
    let warehouse = WarehouseRepository::update(state.db.pool(), id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("warehouse not found"))?;
    Ok(Json(ApiResponse::success(warehouse)))
}

/// Delete a warehouse
#[utoipa::path(
    delete,
    path = "/api/v1/warehouses/{id}",
    params(("id" = Uuid, Path, description = "Warehouse ID")),
    responses(
        (status = 200, description = "Warehouse deleted", body = ApiResponse<MessageResponse>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Warehouses"
)]
pub async fn delete_warehouse(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    if !WarehouseRepository::delete(state.db.pool(), id).await? {
        return Err(ApiError::not_found("warehouse not found"));
    }
    Ok(Json(ApiResponse::success(MessageResponse::new(
        "warehouse deleted",
    ))))
}
