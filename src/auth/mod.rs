//! Authentication and authorization core.
//!
//! ## Components
//! - `token`: HS256 issue/verify with a shared symmetric secret
//! - `verifier`: header parsing + mode-dispatched credential verification
//! - `middleware`: per-request authentication, principal injection
//! - `rbac`: role gate consuming the injected principal
//! - `repository`: user/role store queries
//! - `service`: registration, login, API token rotation
//! - `error`: the failure taxonomy, each mapped to a distinct response

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod rbac;
pub mod repository;
pub mod service;
pub mod token;
pub mod verifier;

pub use error::AuthError;
pub use middleware::auth_middleware;
pub use models::{AuthenticatedPrincipal, Role, VerifiedSubject};
pub use rbac::require_role;
pub use repository::{RoleRepository, UserRepository};
pub use service::AuthService;
pub use token::TokenIssuer;
pub use verifier::{AuthMode, CredentialVerifier};
