//! Shared gateway response types and error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Generic wrapper for successful payloads.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Plain confirmation message.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Rejection body: a single `error` message field.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// A page of results plus the unfiltered-total for the same predicate.
#[derive(Debug, Serialize, ToSchema)]
pub struct Paginated<T> {
    pub total_records: i64,
    pub page: u32,
    pub page_size: u32,
    pub items: Vec<T>,
}

const DEFAULT_PAGE_SIZE: u32 = 10;
const MAX_PAGE_SIZE: u32 = 100;

/// Query parameters shared by all list endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListParams {
    /// Page number, 1-based (default: 1)
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size (default: 10, max: 100)
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Search term to filter by
    #[serde(default)]
    pub search_term: Option<String>,
}

impl ListParams {
    /// Resolve defaults and caps: page >= 1, 1 <= page_size <= 100.
    pub fn normalize(&self) -> (u32, u32) {
        let page = self.page.unwrap_or(1).max(1);
        let page_size = self
            .page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        (page, page_size)
    }

    /// Sanitized search term; empty disables filtering.
    pub fn search(&self) -> String {
        crate::warehouse::search::sanitize_search_term(self.search_term.as_deref().unwrap_or(""))
    }
}

/// CRUD handler failures.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return Self::Conflict("duplicate value for a unique field".to_string());
            }
        }
        tracing::error!("store error: {}", e);
        Self::Internal("internal server error".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_params_defaults() {
        let params = ListParams {
            page: None,
            page_size: None,
            search_term: None,
        };
        assert_eq!(params.normalize(), (1, 10));
        assert_eq!(params.search(), "");
    }

    #[test]
    fn list_params_caps() {
        let params = ListParams {
            page: Some(0),
            page_size: Some(5000),
            search_term: Some("  pa%ra  ".to_string()),
        };
        assert_eq!(params.normalize(), (1, 100));
        assert_eq!(params.search(), "para");
    }

    #[test]
    fn api_error_statuses() {
        assert_eq!(
            ApiError::bad_request("x").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
