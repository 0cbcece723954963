//! Ops endpoints: health check and database seeding.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{Json, extract::State, http::StatusCode};
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ApiResponse, MessageResponse};
use crate::seeder;

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
}

/// Health check endpoint
///
/// Pings the store; does not expose any internal details in the response.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service healthy", body = ApiResponse<HealthResponse>),
        (status = 503, description = "Service unavailable")
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    match state.db.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(HealthResponse {
                timestamp_ms: now_ms,
            })),
        ),
        Err(e) => {
            tracing::error!("[HEALTH] store ping failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse {
                    success: false,
                    data: None,
                    error: Some("unavailable".to_string()),
                }),
            )
        }
    }
}

/// Run database seeder
///
/// Populates initial data: permissions, the admin role and user, and the
/// measurement unit catalogue. Idempotent.
#[utoipa::path(
    post,
    path = "/api/v1/admin/seed",
    responses(
        (status = 200, description = "Seeder executed", body = ApiResponse<MessageResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Insufficient role"),
        (status = 500, description = "Seeding failed")
    ),
    security(("auth_header" = [])),
    tag = "Admin"
)]
pub async fn run_seeder(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse<MessageResponse>>) {
    match seeder::seed(state.db.pool()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(MessageResponse::new(
                "Database seeder executed successfully",
            ))),
        ),
        Err(e) => {
            tracing::error!("Seeding failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse {
                    success: false,
                    data: None,
                    error: Some("seeding failed".to_string()),
                }),
            )
        }
    }
}
