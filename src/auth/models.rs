//! Credential-store models and the request-scoped principal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A persisted user account.
///
/// `api_token` is the opaque credential for token-mode deployments; it is
/// never serialized into responses.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, ToSchema)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(skip_serializing)]
    pub api_token: Option<String>,
    pub office_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// A role assignable to users. Names are unique at the store level.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

/// A permission grantable to roles. Names are unique at the store level.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Permission {
    pub id: i64,
    pub name: String,
}

/// Identity extracted from a verified credential.
///
/// Jwt-mode verification yields only the subject id; token-mode lookup also
/// knows the username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedSubject {
    pub user_id: i64,
    pub username: Option<String>,
}

/// Identity and role set attached to a request after its credential passed
/// verification, injected into request extensions by the authentication
/// middleware. Built per request, never cached across requests.
///
/// `roles` is `None` when role loading failed this request and `Some` with
/// an empty vec when the subject simply has no roles; downstream handlers
/// can tell the two apart.
#[derive(Debug, Clone)]
pub struct AuthenticatedPrincipal {
    pub user_id: i64,
    pub username: Option<String>,
    pub roles: Option<Vec<Role>>,
}

impl AuthenticatedPrincipal {
    /// Whether the principal holds a role with exactly this name.
    ///
    /// Fails closed: an absent role set (load failure) grants nothing.
    pub fn has_role(&self, name: &str) -> bool {
        self.roles
            .as_ref()
            .is_some_and(|roles| roles.iter().any(|r| r.name == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(name: &str) -> Role {
        Role {
            id: 1,
            name: name.to_string(),
        }
    }

    #[test]
    fn has_role_matches_exact_name() {
        let principal = AuthenticatedPrincipal {
            user_id: 42,
            username: None,
            roles: Some(vec![role("admin"), role("viewer")]),
        };
        assert!(principal.has_role("admin"));
        assert!(principal.has_role("viewer"));
        assert!(!principal.has_role("Admin"));
        assert!(!principal.has_role("editor"));
    }

    #[test]
    fn has_role_fails_closed_without_role_set() {
        let principal = AuthenticatedPrincipal {
            user_id: 42,
            username: None,
            roles: None,
        };
        assert!(!principal.has_role("admin"));
    }

    #[test]
    fn empty_role_set_grants_nothing() {
        let principal = AuthenticatedPrincipal {
            user_id: 42,
            username: Some("nobody".to_string()),
            roles: Some(vec![]),
        };
        assert!(!principal.has_role("admin"));
    }
}
