//! Role-based access control gate.
//!
//! [`require_role`] builds a tower layer that reads the role set the
//! authentication middleware attached to the request and rejects with 403
//! unless a role with exactly the required name is present. It is a pure
//! read of request-scoped state: no store access, no side effects. Compose
//! it inside (after) the authentication middleware; without a principal in
//! scope it fails closed.

use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use futures::future::{Either, Ready, ready};
use tower::{Layer, Service};

use super::error::AuthError;
use super::models::AuthenticatedPrincipal;

/// Gate a router subtree behind a role name.
pub fn require_role(required: &'static str) -> RequireRoleLayer {
    RequireRoleLayer { required }
}

#[derive(Debug, Clone, Copy)]
pub struct RequireRoleLayer {
    required: &'static str,
}

impl<S> Layer<S> for RequireRoleLayer {
    type Service = RequireRoleService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequireRoleService {
            inner,
            required: self.required,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RequireRoleService<S> {
    inner: S,
    required: &'static str,
}

impl<S> Service<Request<Body>> for RequireRoleService<S>
where
    S: Service<Request<Body>, Response = Response>,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Either<Ready<Result<Response, S::Error>>, S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let authorized = request
            .extensions()
            .get::<AuthenticatedPrincipal>()
            .is_some_and(|principal| principal.has_role(self.required));

        if authorized {
            Either::Right(self.inner.call(request))
        } else {
            Either::Left(ready(Ok(AuthError::InsufficientRole.into_response())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::models::Role;
    use axum::http::StatusCode;
    use std::convert::Infallible;

    #[derive(Clone)]
    struct Ok200;

    impl Service<Request<Body>> for Ok200 {
        type Response = Response;
        type Error = Infallible;
        type Future = Ready<Result<Response, Infallible>>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Infallible>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, _request: Request<Body>) -> Self::Future {
            ready(Ok(StatusCode::OK.into_response()))
        }
    }

    fn request_with_roles(roles: Option<Vec<&str>>) -> Request<Body> {
        let mut request = Request::new(Body::empty());
        request.extensions_mut().insert(AuthenticatedPrincipal {
            user_id: 42,
            username: None,
            roles: roles.map(|names| {
                names
                    .into_iter()
                    .enumerate()
                    .map(|(i, name)| Role {
                        id: i as i64 + 1,
                        name: name.to_string(),
                    })
                    .collect()
            }),
        });
        request
    }

    async fn status_for(request: Request<Body>) -> StatusCode {
        let mut service = require_role("admin").layer(Ok200);
        service.call(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn matching_role_passes() {
        let status = status_for(request_with_roles(Some(vec!["viewer", "admin"]))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_role_forbidden() {
        let status = status_for(request_with_roles(Some(vec!["viewer"]))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn failed_role_load_forbidden() {
        // roles: None means the loader failed upstream; the gate must not
        // treat that as authorization.
        let status = status_for(request_with_roles(None)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn missing_principal_forbidden() {
        // Gate composed without prior authentication: fail closed.
        let status = status_for(Request::new(Body::empty())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
