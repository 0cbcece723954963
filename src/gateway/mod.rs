//! HTTP gateway: route assembly and server lifecycle.
//!
//! Route groups:
//! - `/api/v1/auth`   public registration/login
//! - `/api/v1/user`   per-user credential management (authenticated)
//! - `/api/v1/admin`  operator endpoints (authenticated + "admin" role)
//! - `/api/v1/...`    inventory CRUD (authenticated)
//!
//! The authentication middleware wraps whole subtrees, so no protected
//! handler ever runs before a credential has been verified; the role gate
//! composes inside it and reads what it attached.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::middleware::auth_middleware;
use crate::auth::rbac::require_role;
use state::AppState;

/// Build the complete application router.
pub fn router(state: Arc<AppState>) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(crate::auth::handlers::register))
        .route(
            "/register-with-office",
            post(crate::auth::handlers::register_with_office),
        )
        .route("/login", post(crate::auth::handlers::login));

    let user_routes = Router::new()
        .route("/token", post(crate::auth::handlers::rotate_api_token))
        .layer(from_fn_with_state(state.clone(), auth_middleware));

    let admin_routes = Router::new()
        .route("/seed", post(handlers::admin::run_seeder))
        // Authentication must run first: the role gate only reads what the
        // auth middleware attached. The outermost layer is added last.
        .layer(require_role("admin"))
        .layer(from_fn_with_state(state.clone(), auth_middleware));

    let inventory_routes = Router::new()
        .route(
            "/offices",
            get(handlers::offices::list_offices).post(handlers::offices::create_office),
        )
        .route(
            "/offices/{id}",
            get(handlers::offices::get_office)
                .put(handlers::offices::update_office)
                .delete(handlers::offices::delete_office),
        )
        .route(
            "/branches",
            get(handlers::branches::list_branches).post(handlers::branches::create_branch),
        )
        .route(
            "/branches/{id}",
            get(handlers::branches::get_branch)
                .put(handlers::branches::update_branch)
                .delete(handlers::branches::delete_branch),
        )
        .route(
            "/warehouses",
            get(handlers::warehouses::list_warehouses)
                .post(handlers::warehouses::create_warehouse),
        )
        .route(
            "/warehouses/{id}",
            get(handlers::warehouses::get_warehouse)
                .put(handlers::warehouses::update_warehouse)
                .delete(handlers::warehouses::delete_warehouse),
        )
        .route(
            "/categories",
            get(handlers::categories::list_categories).post(handlers::categories::create_category),
        )
        .route(
            "/categories/{id}",
            get(handlers::categories::get_category)
                .put(handlers::categories::update_category)
                .delete(handlers::categories::delete_category),
        )
        .route(
            "/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )
        .route(
            "/units",
            get(handlers::units::list_units).post(handlers::units::create_unit),
        )
        .route(
            "/units/{id}",
            get(handlers::units::get_unit)
                .put(handlers::units::update_unit)
                .delete(handlers::units::delete_unit),
        )
        .route(
            "/stockentries",
            get(handlers::stock::list_stock_entries).post(handlers::stock::create_stock_entry),
        )
        .route(
            "/stockentries/{id}",
            get(handlers::stock::get_stock_entry)
                .put(handlers::stock::update_stock_entry)
                .delete(handlers::stock::delete_stock_entry),
        )
        .layer(from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/api/v1/health", get(handlers::admin::health_check))
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/user", user_routes)
        .nest("/api/v1/admin", admin_routes)
        .nest("/api/v1", inventory_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .with_state(state)
}

/// Start the HTTP gateway and serve until shutdown.
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Gateway listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
