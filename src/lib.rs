//! Gudang - Warehouse & Inventory Backend
//!
//! A modular-monolith REST backend: user authentication with a pluggable
//! credential scheme (signed JWT or opaque lookup token), role-based access
//! control over a user/role/permission graph, and CRUD for the warehouse
//! domain.
//!
//! # Modules
//!
//! - [`auth`] - credential verification, middleware, RBAC, login/registration
//! - [`warehouse`] - inventory entities and store queries
//! - [`gateway`] - HTTP routes, shared state, OpenAPI docs
//! - [`db`] - PostgreSQL pool management
//! - [`seeder`] - idempotent schema + initial data
//! - [`config`] - per-environment YAML configuration
//! - [`logging`] - tracing initialization

pub mod auth;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod seeder;
pub mod warehouse;

// Convenient re-exports at crate root
pub use auth::{AuthMode, AuthService, AuthenticatedPrincipal, CredentialVerifier, TokenIssuer};
pub use db::Database;
pub use gateway::state::AppState;
