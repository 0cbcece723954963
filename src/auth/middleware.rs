//! Authentication middleware for Axum.
//!
//! Verifies the Authorization header, attaches the resulting
//! [`AuthenticatedPrincipal`] to request extensions, and only then lets the
//! request through. Invalid or missing credentials are rejected before any
//! downstream handler runs.

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::gateway::state::AppState;

use super::error::AuthError;
use super::models::AuthenticatedPrincipal;
use super::repository::RoleRepository;

/// Axum middleware guarding protected routes.
///
/// Flow per request: extract header, verify per the configured mode, attach
/// the principal, best-effort role load, then invoke the next handler. Role
/// loading runs only after verification succeeded, and its failure is never
/// conflated with an authentication failure: the request proceeds
/// authenticated with `roles: None`.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let subject = state.verifier.verify(auth_header).await?;

    let roles = match RoleRepository::list_for_user(state.db.pool(), subject.user_id).await {
        Ok(roles) => Some(roles),
        Err(e) => {
            tracing::warn!(
                user_id = subject.user_id,
                "role loading failed, proceeding without roles: {}",
                e
            );
            None
        }
    };

    request.extensions_mut().insert(AuthenticatedPrincipal {
        user_id: subject.user_id,
        username: subject.username,
        roles,
    });

    Ok(next.run(request).await)
}
