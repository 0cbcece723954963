//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::auth::handlers::{ApiTokenResponse, RegisterResponse};
use crate::auth::service::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterWithOfficeRequest,
    RegisterWithOfficeResponse,
};
use crate::gateway::handlers::admin::HealthResponse;
use crate::gateway::types::{ErrorBody, MessageResponse};
use crate::warehouse::models::{
    Branch, BranchPayload, Category, CategoryPayload, Office, OfficePayload, Product,
    ProductPayload, StockEntry, StockEntryPayload, Unit, UnitPayload, Warehouse, WarehousePayload,
};

/// Authorization header security scheme.
///
/// The scheme depends on the deployment's configured mode:
/// `Bearer <jwt>` in jwt mode, `Token <opaque token>` in token mode.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "auth_header",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "Authorization",
                    "Mode-dependent credential: \"Bearer <jwt>\" (jwt mode) or \"Token <opaque token>\" (token mode).",
                ))),
            );
        }
    }
}

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gudang Warehouse API",
        version = "1.0.0",
        description = "Warehouse & inventory backend with pluggable JWT/opaque-token authentication.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::admin::health_check,
        crate::gateway::handlers::admin::run_seeder,
        crate::auth::handlers::register,
        crate::auth::handlers::register_with_office,
        crate::auth::handlers::login,
        crate::auth::handlers::rotate_api_token,
        crate::gateway::handlers::offices::list_offices,
        crate::gateway::handlers::offices::get_office,
        crate::gateway::handlers::offices::create_office,
        crate::gateway::handlers::offices::update_office,
        crate::gateway::handlers::offices::delete_office,
        crate::gateway::handlers::branches::list_branches,
        crate::gateway::handlers::branches::get_branch,
        crate::gateway::handlers::branches::create_branch,
        crate::gateway::handlers::branches::update_branch,
        crate::gateway::handlers::branches::delete_branch,
        crate::gateway::handlers::warehouses::list_warehouses,
        crate::gateway::handlers::warehouses::get_warehouse,
        crate::gateway::handlers::warehouses::create_warehouse,
        crate::gateway::handlers::warehouses::update_warehouse,
        crate::gateway::handlers::warehouses::delete_warehouse,
        crate::gateway::handlers::categories::list_categories,
        crate::gateway::handlers::categories::get_category,
        crate::gateway::handlers::categories::create_category,
        crate::gateway::handlers::categories::update_category,
        crate::gateway::handlers::categories::delete_category,
        crate::gateway::handlers::products::list_products,
        crate::gateway::handlers::products::get_product,
        crate::gateway::handlers::products::create_product,
        crate::gateway::handlers::products::update_product,
        crate::gateway::handlers::products::delete_product,
        crate::gateway::handlers::units::list_units,
        crate::gateway::handlers::units::get_unit,
        crate::gateway::handlers::units::create_unit,
        crate::gateway::handlers::units::update_unit,
        crate::gateway::handlers::units::delete_unit,
        crate::gateway::handlers::stock::list_stock_entries,
        crate::gateway::handlers::stock::get_stock_entry,
        crate::gateway::handlers::stock::create_stock_entry,
        crate::gateway::handlers::stock::update_stock_entry,
        crate::gateway::handlers::stock::delete_stock_entry,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
            MessageResponse,
            RegisterRequest,
            RegisterResponse,
            RegisterWithOfficeRequest,
            RegisterWithOfficeResponse,
            LoginRequest,
            LoginResponse,
            ApiTokenResponse,
            Office,
            OfficePayload,
            Branch,
            BranchPayload,
            Warehouse,
            WarehousePayload,
            Category,
            CategoryPayload,
            Product,
            ProductPayload,
            Unit,
            UnitPayload,
            StockEntry,
            StockEntryPayload,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "System", description = "Health and diagnostics"),
        (name = "Auth", description = "Registration and login"),
        (name = "User", description = "Per-user credential management"),
        (name = "Admin", description = "Operator endpoints"),
        (name = "Offices", description = "Office management"),
        (name = "Branches", description = "Branch management"),
        (name = "Warehouses", description = "Warehouse management"),
        (name = "Categories", description = "Product category management"),
        (name = "Products", description = "Product management"),
        (name = "Units", description = "Measurement unit catalogue"),
        (name = "Stock", description = "Stock entries"),
    )
)]
pub struct ApiDoc;
