//! Auth HTTP handlers: registration, login, API token rotation.

use axum::{Extension, Json, extract::State, http::StatusCode};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use crate::gateway::state::AppState;
use crate::gateway::types::ErrorBody;

use super::models::AuthenticatedPrincipal;
use super::service::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterWithOfficeRequest,
    RegisterWithOfficeResponse,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
}

/// Opaque API token, returned exactly once at rotation.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiTokenResponse {
    pub api_token: String,
}

type HandlerResult<T> = Result<(StatusCode, Json<T>), (StatusCode, Json<ErrorBody>)>;

fn reject<T>(status: StatusCode, message: impl Into<String>) -> HandlerResult<T> {
    Err((status, Json(ErrorBody::new(message))))
}

/// Register a new user
///
/// POST /api/v1/auth/register
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = RegisterResponse),
        (status = 400, description = "Invalid input or user already exists", body = ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> HandlerResult<RegisterResponse> {
    if let Err(e) = req.validate() {
        return reject(StatusCode::BAD_REQUEST, e.to_string());
    }

    match state.auth_service.register(req).await {
        Ok(()) => Ok((
            StatusCode::CREATED,
            Json(RegisterResponse {
                message: "User registered successfully".to_string(),
            }),
        )),
        Err(e) => reject(StatusCode::BAD_REQUEST, e.to_string()),
    }
}

/// Register a new user with office creation
///
/// POST /api/v1/auth/register-with-office
#[utoipa::path(
    post,
    path = "/api/v1/auth/register-with-office",
    request_body = RegisterWithOfficeRequest,
    responses(
        (status = 201, description = "Office and user registered", body = RegisterWithOfficeResponse),
        (status = 400, description = "Invalid input or duplicate user/office", body = ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn register_with_office(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterWithOfficeRequest>,
) -> HandlerResult<RegisterWithOfficeResponse> {
    if let Err(e) = req.validate() {
        return reject(StatusCode::BAD_REQUEST, e.to_string());
    }

    match state.auth_service.register_with_office(req).await {
        Ok(resp) => Ok((StatusCode::CREATED, Json(resp))),
        Err(e) => reject(StatusCode::BAD_REQUEST, e.to_string()),
    }
}

/// User login
///
/// POST /api/v1/auth/login
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials or no roles assigned", body = ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> HandlerResult<LoginResponse> {
    if let Err(e) = req.validate() {
        return reject(StatusCode::BAD_REQUEST, e.to_string());
    }

    match state.auth_service.login(req).await {
        Ok(resp) => Ok((StatusCode::OK, Json(resp))),
        Err(e) => {
            tracing::warn!("Login failed: {}", e);
            reject(StatusCode::UNAUTHORIZED, e.to_string())
        }
    }
}

/// Rotate the caller's opaque API token
///
/// POST /api/v1/user/token
#[utoipa::path(
    post,
    path = "/api/v1/user/token",
    responses(
        (status = 201, description = "New API token, shown only once", body = ApiTokenResponse),
        (status = 401, description = "Unauthorized", body = ErrorBody)
    ),
    security(("auth_header" = [])),
    tag = "User"
)]
pub async fn rotate_api_token(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthenticatedPrincipal>,
) -> HandlerResult<ApiTokenResponse> {
    match state.auth_service.rotate_api_token(principal.user_id).await {
        Ok(api_token) => Ok((StatusCode::CREATED, Json(ApiTokenResponse { api_token }))),
        Err(e) => {
            tracing::error!("Failed to rotate API token: {}", e);
            reject(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to rotate API token",
            )
        }
    }
}
