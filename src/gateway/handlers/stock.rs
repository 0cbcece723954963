//! Stock entry endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResponse, ListParams, MessageResponse, Paginated};
use crate::warehouse::models::{StockEntry, StockEntryPayload};
use crate::warehouse::repository::{
    ProductRepository, StockEntryRepository, WarehouseRepository,
};

async fn validate(state: &AppState, payload: &StockEntryPayload) -> Result<(), ApiError> {
    if WarehouseRepository::find_by_id(state.db.pool(), payload.warehouse_id)
        .await?
        .is_none()
    {
        return Err(ApiError::bad_request("warehouse not found"));
    }
    if ProductRepository::find_by_id(state.db.pool(), payload.product_id)
        .await?
        .is_none()
    {
        return Err(ApiError::bad_request("product not found"));
    }
    if payload.stock < 0 {
        return Err(ApiError::bad_request("stock cannot be negative"));
    }
    Ok(())
}

/// Get list of stock entries
#[utoipa::path(
    get,
    path = "/api/v1/stockentries",
    params(ListParams),
    responses(
        (status = 200, description = "Paginated stock entries", body = ApiResponse<Paginated<StockEntry>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("auth_header" = [])),
    tag = "Stock"
)]
pub async fn list_stock_entries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<Paginated<StockEntry>>>, ApiError> {
    let (page, page_size) = params.normalize();
    let (items, total_records) =
        StockEntryRepository::list(state.db.pool(), page, page_size, &params.search()).await?;
    Ok(Json(ApiResponse::success(Paginated {
        total_records,
        page,
        page_size,
        items,
    })))
}

/// Get stock entry by ID
#[utoipa::path(
    get,
    path = "/api/v1/stockentries/{id}",
    params(("id" = Uuid, Path, description = "Stock entry ID")),
    responses(
        (status = 200, description = "Stock entry", body = ApiResponse<StockEntry>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Stock"
)]
pub async fn get_stock_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<StockEntry>>, ApiError> {
    let entry = StockEntryRepository::find_by_id(state.db.pool(), id)
        .await?
        .ok_or_else(|| ApiError::not_found("stock entry not found"))?;
    Ok(Json(ApiResponse::success(entry)))
}

/// Create a new stock entry
///
/// The referenced warehouse and product must exist.
#[utoipa::path(
    post,
    path = "/api/v1/stockentries",
    request_body = StockEntryPayload,
    responses(
        (status = 201, description = "Stock entry created", body = ApiResponse<StockEntry>),
        (status = 400, description = "Validation error")
    ),
    security(("auth_header" = [])),
    tag = "Stock"
)]
pub async fn create_stock_entry(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<StockEntryPayload>,
) -> Result<(StatusCode, Json<ApiResponse<StockEntry>>), ApiError> {
    validate(&state, &payload).await?;
    let entry = StockEntryRepository::create(state.db.pool(), &payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(entry))))
}

/// Update a stock entry
#[utoipa::path(
    put,
    path = "/api/v1/stockentries/{id}",
    params(("id" = Uuid, Path, description = "Stock entry ID")),
    request_body = StockEntryPayload,
    responses(
        (status = 200, description = "Stock entry updated", body = ApiResponse<StockEntry>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Stock"
)]
pub async fn update_stock_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<StockEntryPayload>,
) -> Result<Json<ApiResponse<StockEntry>>, ApiError> {
    validate(&state, &payload).await?;
    let entry = StockEntryRepository::update(state.db.pool(), id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("stock entry not found"))?;
    Ok(Json(ApiResponse::success(entry)))
}

/// Delete a stock entry
#[utoipa::path(
    delete,
    path = "/api/v1/stockentries/{id}",
    params(("id" = Uuid, Path, description = "Stock entry ID")),
    responses(
        (status = 200, description = "Stock entry deleted", body = ApiResponse<MessageResponse>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Stock"
)]
pub async fn delete_stock_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    if !StockEntryRepository::delete(state.db.pool(), id).await? {
        return Err(ApiError::not_found("stock entry not found"));
    }
    Ok(Json(ApiResponse::success(MessageResponse::new(
        "stock entry deleted",
    ))))
}
