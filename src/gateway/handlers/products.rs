//! Product endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResponse, ListParams, MessageResponse, Paginated};
use crate::warehouse::models::{Product, ProductPayload};
use crate::warehouse::repository::{CategoryRepository, ProductRepository};

async fn validate(state: &AppState, payload: &ProductPayload) -> Result<(), ApiError> {
    if payload.code.is_empty() {
        return Err(ApiError::bad_request("product code is required"));
    }
    if payload.name.is_empty() {
        return Err(ApiError::bad_request("product name is required"));
    }
    if payload.large_unit.is_empty() {
        return Err(ApiError::bad_request("large unit is required"));
    }
    if payload.small_unit.is_empty() {
        return Err(ApiError::bad_request("small unit is required"));
    }
    if payload.content_per_large_unit <= 0 {
        return Err(ApiError::bad_request(
            "content per large unit must be greater than 0",
        ));
    }
    if payload.purchase_price < Decimal::ZERO {
        return Err(ApiError::bad_request("purchase price cannot be negative"));
    }
    if payload.selling_price < Decimal::ZERO {
        return Err(ApiError::bad_request("selling price cannot be negative"));
    }
    if CategoryRepository::find_by_id(state.db.pool(), payload.category_id)
        .await?
        .is_none()
    {
        return Err(ApiError::bad_request("category not found"));
    }
    Ok(())
}

/// Get list of products
#[utoipa::path(
    get,
    path = "/api/v1/products",
    params(ListParams),
    responses(
        (status = 200, description = "Paginated products", body = ApiResponse<Paginated<Product>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("auth_header" = [])),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<Paginated<Product>>>, ApiError> {
    let (page, page_size) = params.normalize();
    let (items, total_records) =
        ProductRepository::list(state.db.pool(), page, page_size, &params.search()).await?;
    Ok(Json(ApiResponse::success(Paginated {
        total_records,
        page,
        page_size,
        items,
    })))
}

/// Get product by ID
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product", body = ApiResponse<Product>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let product = ProductRepository::find_by_id(state.db.pool(), id)
        .await?
        .ok_or_else(|| ApiError::not_found("product not found"))?;
    Ok(Json(ApiResponse::success(product)))
}

/// Create a new product
///
/// The referenced category must exist.
#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<Product>),
        (status = 400, description = "Validation error (invalid input or category not found)")
    ),
    security(("auth_header" = [])),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), ApiError> {
    validate(&state, &payload).await?;
    let product = ProductRepository::create(state.db.pool(), &payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(product))))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<Product>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    validate(&state, &payload).await?;
    let product = ProductRepository::update(state.db.pool(), id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("product not found"))?;
    Ok(Json(ApiResponse::success(product)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<MessageResponse>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    if !ProductRepository::delete(state.db.pool(), id).await? {
        return Err(ApiError::not_found("product not found"));
    }
    Ok(Json(ApiResponse::success(MessageResponse::new(
        "product deleted",
    ))))
}
