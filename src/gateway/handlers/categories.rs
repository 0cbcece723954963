//! Product category endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResponse, ListParams, MessageResponse, Paginated};
use crate::warehouse::models::{Category, CategoryPayload};
use crate::warehouse::repository::CategoryRepository;

/// Get list of product categories
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    params(ListParams),
    responses(
        (status = 200, description = "Paginated categories", body = ApiResponse<Paginated<Category>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("auth_header" = [])),
    tag = "Categories"
)]
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<Paginated<Category>>>, ApiError> {
    let (page, page_size) = params.normalize();
    let (items, total_records) =
        CategoryRepository::list(state.db.pool(), page, page_size, &params.search()).await?;
    Ok(Json(ApiResponse::success(Paginated {
        total_records,
        page,
        page_size,
        items,
    })))
}

/// Get category by ID
#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category", body = ApiResponse<Category>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Categories"
)]
pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    let category = CategoryRepository::find_by_id(state.db.pool(), id)
        .await?
        .ok_or_else(|| ApiError::not_found("category not found"))?;
    Ok(Json(ApiResponse::success(category)))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CategoryPayload,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<Category>),
        (status = 400, description = "Validation error")
    ),
    security(("auth_header" = [])),
    tag = "Categories"
)]
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CategoryPayload>,
) -> Result<(StatusCode, Json<ApiResponse<Category>>), ApiError> {
    if payload.name.is_empty() {
        return Err(ApiError::bad_request("category name is required"));
    }
    let category = CategoryRepository::create(state.db.pool(), &payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(category))))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    request_body = CategoryPayload,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<Category>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Categories"
)]
pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CategoryPayload>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    if payload.name.is_empty() {
        return Err(ApiError::bad_request("category name is required"));
    }
    let category = CategoryRepository::update(state.db.pool(), id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("category not found"))?;
    Ok(Json(ApiResponse::success(category)))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<MessageResponse>),
        (status = 404, description = "Not found")
    ),
    security(("auth_header" = [])),
    tag = "Categories"
)]
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    if !CategoryRepository::delete(state.db.pool(), id).await? {
        return Err(ApiError::not_found("category not found"));
    }
    Ok(Json(ApiResponse::success(MessageResponse::new(
        "category deleted",
    ))))
}
