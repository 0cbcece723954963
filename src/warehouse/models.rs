//! Inventory entities and their write payloads.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Office {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    /// e.g. active, inactive
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OfficePayload {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_status")]
    pub status: String,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Branch {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub status: String,
    pub office_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BranchPayload {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_status")]
    pub status: String,
    pub office_id: Uuid,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Warehouse {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub status: String,
    // Nullable: a warehouse may be attached directly to an office.
    pub branch_id: Option<Uuid>,
    pub office_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct WarehousePayload {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_status")]
    pub status: String,
    pub branch_id: Option<Uuid>,
    pub office_id: Option<Uuid>,
}

/// Product category, optionally nested under a parent.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CategoryPayload {
    pub name: String,
    pub parent_id: Option<Uuid>,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    /// Product code or SKU
    pub code: String,
    pub name: String,
    /// e.g. box, pack
    pub large_unit: String,
    /// e.g. 12 pieces per box
    pub content_per_large_unit: i32,
    /// e.g. piece, tablet
    pub small_unit: String,
    pub purchase_price: Decimal,
    pub selling_price: Decimal,
    pub category_id: Uuid,
    /// Description or usage
    pub indication: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductPayload {
    pub code: String,
    pub name: String,
    pub large_unit: String,
    pub content_per_large_unit: i32,
    pub small_unit: String,
    pub purchase_price: Decimal,
    pub selling_price: Decimal,
    pub category_id: Uuid,
    #[serde(default)]
    pub indication: String,
}

/// Measurement unit catalogue entry.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Unit {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UnitPayload {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct StockEntry {
    pub id: Uuid,
    pub warehouse_id: Uuid,
    pub product_id: Uuid,
    pub batch_number: String,
    pub expired_at: DateTime<Utc>,
    pub date: DateTime<Utc>,
    pub margin: Decimal,
    pub tax: Decimal,
    pub price: Decimal,
    pub stock: i32,
    pub previous_stock: i32,
    pub status: String,
    pub order_id: Option<Uuid>,
    pub notes: String,
    pub reference_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct StockEntryPayload {
    pub warehouse_id: Uuid,
    pub product_id: Uuid,
    #[serde(default)]
    pub batch_number: String,
    pub expired_at: DateTime<Utc>,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub margin: Decimal,
    #[serde(default)]
    pub tax: Decimal,
    pub price: Decimal,
    pub stock: i32,
    #[serde(default)]
    pub previous_stock: i32,
    #[serde(default = "default_status")]
    pub status: String,
    pub order_id: Option<Uuid>,
    #[serde(default)]
    pub notes: String,
    pub reference_id: Option<Uuid>,
}

fn default_status() -> String {
    "active".to_string()
}
