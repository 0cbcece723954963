//! Shared gateway application state.
//!
//! Everything here is constructed once at startup and injected explicitly;
//! there is no ambient global state. The pool is the only shared mutable
//! resource and synchronizes itself.

use std::sync::Arc;

use crate::auth::service::AuthService;
use crate::auth::verifier::CredentialVerifier;
use crate::db::Database;

#[derive(Clone)]
pub struct AppState {
    /// Credential + inventory store.
    pub db: Arc<Database>,
    /// Mode-dispatched credential verification.
    pub verifier: CredentialVerifier,
    /// Registration/login/token rotation.
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(db: Arc<Database>, verifier: CredentialVerifier, auth_service: Arc<AuthService>) -> Self {
        Self {
            db,
            verifier,
            auth_service,
        }
    }
}
