//! Authentication error taxonomy.
//!
//! Every verification failure maps to a distinct user-visible message; none
//! of them are retried. Rejection bodies are a single `error` field.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Authentication and authorization failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No Authorization header on the request.
    #[error("Missing Authorization header")]
    MissingCredential,

    /// Header present but not of the `<scheme> <credential>` shape.
    #[error("Invalid Authorization header format")]
    MalformedHeader,

    /// Scheme does not match the configured verification mode.
    #[error("Authorization scheme must be {expected} for {mode} mode")]
    SchemeMismatch {
        expected: &'static str,
        mode: &'static str,
    },

    /// Signature, expiry, or opaque-token lookup failure.
    #[error("{0}")]
    InvalidCredential(&'static str),

    /// Signed token verified fine but carries no numeric subject claim.
    #[error("Missing user_id claim")]
    MissingClaim,

    /// The configured authentication mode is not a recognized value.
    /// Operator error, not a caller error.
    #[error("Invalid AUTH_MODE configuration")]
    ServerMisconfiguration,

    /// Authorization gate: the subject lacks the required role.
    #[error("Insufficient role permission")]
    InsufficientRole,
}

/// Message for a signed token that failed signature or expiry checks.
pub const INVALID_JWT: &str = "Invalid or expired JWT token";
/// Message for an opaque token with no matching user.
pub const UNKNOWN_TOKEN: &str = "Invalid or unknown token";

impl AuthError {
    /// HTTP status for this failure.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::ServerMisconfiguration => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InsufficientRole => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

/// JSON body for rejected requests.
#[derive(Debug, Serialize)]
pub struct AuthErrorBody {
    pub error: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = AuthErrorBody {
            error: self.to_string(),
        };
        (self.http_status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status() {
        assert_eq!(
            AuthError::MissingCredential.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::InvalidCredential(INVALID_JWT).http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::ServerMisconfiguration.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AuthError::InsufficientRole.http_status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AuthError::MissingCredential.to_string(),
            "Missing Authorization header"
        );
        assert_eq!(
            AuthError::SchemeMismatch {
                expected: "Bearer",
                mode: "JWT"
            }
            .to_string(),
            "Authorization scheme must be Bearer for JWT mode"
        );
        assert_eq!(
            AuthError::InvalidCredential(UNKNOWN_TOKEN).to_string(),
            "Invalid or unknown token"
        );
        assert_eq!(
            AuthError::InsufficientRole.to_string(),
            "Insufficient role permission"
        );
    }
}
