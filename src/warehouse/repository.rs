//! Inventory store queries: paginated list with search, get, create,
//! update, delete per entity.
//!
//! Uses runtime queries to avoid sqlx compile-time database connection.
//! Search terms are expected to be sanitized by the caller; an empty term
//! disables the filter. Counts run against the same predicate as the page
//! query so totals always match the filter.

use sqlx::PgPool;
use uuid::Uuid;

use super::models::{
    Branch, BranchPayload, Category, CategoryPayload, Office, OfficePayload, Product,
    ProductPayload, StockEntry, StockEntryPayload, Unit, UnitPayload, Warehouse, WarehousePayload,
};

/// Compute the row offset for a 1-based page.
fn offset(page: u32, page_size: u32) -> i64 {
    ((page.max(1) - 1) * page_size) as i64
}

const OFFICE_COLUMNS: &str = "id, code, name, address, city, phone, status, created_at, updated_at";
const OFFICE_FILTER: &str = "($1 = '' OR code ILIKE '%'||$1||'%' OR name ILIKE '%'||$1||'%' OR address ILIKE '%'||$1||'%' OR city ILIKE '%'||$1||'%')";

pub struct OfficeRepository;

impl OfficeRepository {
    pub async fn list(
        pool: &PgPool,
        page: u32,
        page_size: u32,
        search: &str,
    ) -> Result<(Vec<Office>, i64), sqlx::Error> {
        let (total,): (i64,) =
            sqlx::query_as(&format!("SELECT COUNT(*) FROM offices WHERE {OFFICE_FILTER}"))
                .bind(search)
                .fetch_one(pool)
                .await?;

        let items = sqlx::query_as::<_, Office>(&format!(
            "SELECT {OFFICE_COLUMNS} FROM offices WHERE {OFFICE_FILTER} \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(search)
        .bind(page_size as i64)
        .bind(offset(page, page_size))
        .fetch_all(pool)
        .await?;

        Ok((items, total))
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Office>, sqlx::Error> {
        sqlx::query_as::<_, Office>(&format!("SELECT {OFFICE_COLUMNS} FROM offices WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Office>, sqlx::Error> {
        sqlx::query_as::<_, Office>(&format!(
            "SELECT {OFFICE_COLUMNS} FROM offices WHERE code = $1"
        ))
        .bind(code)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(pool: &PgPool, payload: &OfficePayload) -> Result<Office, sqlx::Error> {
        sqlx::query_as::<_, Office>(&format!(
            "INSERT INTO offices (id, code, name, address, city, phone, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {OFFICE_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&payload.code)
        .bind(&payload.name)
        .bind(&payload.address)
        .bind(&payload.city)
        .bind(&payload.phone)
        .bind(&payload.status)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        payload: &OfficePayload,
    ) -> Result<Option<Office>, sqlx::Error> {
        sqlx::query_as::<_, Office>(&format!(
            "UPDATE offices SET code = $2, name = $3, address = $4, city = $5, phone = $6, \
             status = $7, updated_at = NOW() WHERE id = $1 RETURNING {OFFICE_COLUMNS}"
        ))
        .bind(id)
        .bind(&payload.code)
        .bind(&payload.name)
        .bind(&payload.address)
        .bind(&payload.city)
        .bind(&payload.phone)
        .bind(&payload.status)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM offices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

const BRANCH_COLUMNS: &str =
    "id, code, name, address, city, phone, status, office_id, created_at, updated_at";
const BRANCH_FILTER: &str = "($1 = '' OR code ILIKE '%'||$1||'%' OR name ILIKE '%'||$1||'%' OR city ILIKE '%'||$1||'%')";

pub struct BranchRepository;

impl BranchRepository {
    pub async fn list(
        pool: &PgPool,
        page: u32,
        page_size: u32,
        search: &str,
    ) -> Result<(Vec<Branch>, i64), sqlx::Error> {
        let (total,): (i64,) =
            sqlx::query_as(&format!("SELECT COUNT(*) FROM branches WHERE {BRANCH_FILTER}"))
                .bind(search)
                .fetch_one(pool)
                .await?;

        let items = sqlx::query_as::<_, Branch>(&format!(
            "SELECT {BRANCH_COLUMNS} FROM branches WHERE {BRANCH_FILTER} \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(search)
        .bind(page_size as i64)
        .bind(offset(page, page_size))
        .fetch_all(pool)
        .await?;

        Ok((items, total))
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Branch>, sqlx::Error> {
        sqlx::query_as::<_, Branch>(&format!(
            "SELECT {BRANCH_COLUMNS} FROM branches WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(pool: &PgPool, payload: &BranchPayload) -> Result<Branch, sqlx::Error> {
        sqlx::query_as::<_, Branch>(&format!(
            "INSERT INTO branches (id, code, name, address, city, phone, status, office_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {BRANCH_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&payload.code)
        .bind(&payload.name)
        .bind(&payload.address)
        .bind(&payload.city)
        .bind(&payload.phone)
        .bind(&payload.status)
        .bind(payload.office_id)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        payload: &BranchPayload,
    ) -> Result<Option<Branch>, sqlx::Error> {
        sqlx::query_as::<_, Branch>(&format!(
            "UPDATE branches SET code = $2, name = $3, address = $4, city = $5, phone = $6, \
             status = $7, office_id = $8, updated_at = NOW() WHERE id = $1 \
             RETURNING {BRANCH_COLUMNS}"
        ))
        .bind(id)
        .bind(&payload.code)
        .bind(&payload.name)
        .bind(&payload.address)
        .bind(&payload.city)
        .bind(&payload.phone)
        .bind(&payload.status)
        .bind(payload.office_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM branches WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

const WAREHOUSE_COLUMNS: &str =
    "id, code, name, address, phone, status, branch_id, office_id, created_at, updated_at";
const WAREHOUSE_FILTER: &str = "($1 = '' OR code ILIKE '%'||$1||'%' OR name ILIKE '%'||$1||'%' OR address ILIKE '%'||$1||'%')";

pub struct WarehouseRepository;

impl WarehouseRepository {
    pub async fn list(
        pool: &PgPool,
        page: u32,
        page_size: u32,
        search: &str,
    ) -> Result<(Vec<Warehouse>, i64), sqlx::Error> {
        let (total,): (i64,) = sqlx::query_as(&format!(
            "SELECT COUNT(*) FROM warehouses WHERE {WAREHOUSE_FILTER}"
        ))
        .bind(search)
        .fetch_one(pool)
        .await?;

        let items = sqlx::query_as::<_, Warehouse>(&format!(
            "SELECT {WAREHOUSE_COLUMNS} FROM warehouses WHERE {WAREHOUSE_FILTER} \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(search)
        .bind(page_size as i64)
        .bind(offset(page, page_size))
        .fetch_all(pool)
        .await?;

        Ok((items, total))
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Warehouse>, sqlx::Error> {
        sqlx::query_as::<_, Warehouse>(&format!(
            "SELECT {WAREHOUSE_COLUMNS} FROM warehouses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(
        pool: &PgPool,
        payload: &WarehousePayload,
    ) -> Result<Warehouse, sqlx::Error> {
        sqlx::query_as::<_, Warehouse>(&format!(
            "INSERT INTO warehouses (id, code, name, address, phone, status, branch_id, office_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {WAREHOUSE_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&payload.code)
        .bind(&payload.name)
        .bind(&payload.address)
        .bind(&payload.phone)
        .bind(&payload.status)
        .bind(payload.branch_id)
        .bind(payload.office_id)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        payload: &WarehousePayload,
    ) -> Result<Option<Warehouse>, sqlx::Error> {
        sqlx::query_as::<_, Warehouse>(&format!(
            "UPDATE warehouses SET code = $2, name = $3, address = $4, phone = $5, status = $6, \
             branch_id = $7, office_id = $8, updated_at = NOW() WHERE id = $1 \
             RETURNING {WAREHOUSE_COLUMNS}"
        ))
        .bind(id)
        .bind(&payload.code)
        .bind(&payload.name)
        .bind(&payload.address)
        .bind(&payload.phone)
        .bind(&payload.status)
        .bind(payload.branch_id)
        .bind(payload.office_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM warehouses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

const CATEGORY_COLUMNS: &str = "id, name, parent_id, created_at, updated_at";

pub struct CategoryRepository;

impl CategoryRepository {
    pub async fn list(
        pool: &PgPool,
        page: u32,
        page_size: u32,
        search: &str,
    ) -> Result<(Vec<Category>, i64), sqlx::Error> {
        let filter = "($1 = '' OR name ILIKE '%'||$1||'%')";
        let (total,): (i64,) = sqlx::query_as(&format!(
            "SELECT COUNT(*) FROM product_categories WHERE {filter}"
        ))
        .bind(search)
        .fetch_one(pool)
        .await?;

        let items = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM product_categories WHERE {filter} \
             ORDER BY name LIMIT $2 OFFSET $3"
        ))
        .bind(search)
        .bind(page_size as i64)
        .bind(offset(page, page_size))
        .fetch_all(pool)
        .await?;

        Ok((items, total))
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM product_categories WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(pool: &PgPool, payload: &CategoryPayload) -> Result<Category, sqlx::Error> {
        sqlx::query_as::<_, Category>(&format!(
            "INSERT INTO product_categories (id, name, parent_id) VALUES ($1, $2, $3) \
             RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&payload.name)
        .bind(payload.parent_id)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        payload: &CategoryPayload,
    ) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(&format!(
            "UPDATE product_categories SET name = $2, parent_id = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(id)
        .bind(&payload.name)
        .bind(payload.parent_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM product_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

const PRODUCT_COLUMNS: &str = "id, code, name, large_unit, content_per_large_unit, small_unit, \
     purchase_price, selling_price, category_id, indication, created_at, updated_at";
const PRODUCT_FILTER: &str = "($1 = '' OR name ILIKE '%'||$1||'%' OR code ILIKE '%'||$1||'%' OR indication ILIKE '%'||$1||'%')";

pub struct ProductRepository;

impl ProductRepository {
    pub async fn list(
        pool: &PgPool,
        page: u32,
        page_size: u32,
        search: &str,
    ) -> Result<(Vec<Product>, i64), sqlx::Error> {
        let (total,): (i64,) =
            sqlx::query_as(&format!("SELECT COUNT(*) FROM products WHERE {PRODUCT_FILTER}"))
                .bind(search)
                .fetch_one(pool)
                .await?;

        let items = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE {PRODUCT_FILTER} \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(search)
        .bind(page_size as i64)
        .bind(offset(page, page_size))
        .fetch_all(pool)
        .await?;

        Ok((items, total))
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(pool: &PgPool, payload: &ProductPayload) -> Result<Product, sqlx::Error> {
        sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products (id, code, name, large_unit, content_per_large_unit, \
             small_unit, purchase_price, selling_price, category_id, indication) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&payload.code)
        .bind(&payload.name)
        .bind(&payload.large_unit)
        .bind(payload.content_per_large_unit)
        .bind(&payload.small_unit)
        .bind(payload.purchase_price)
        .bind(payload.selling_price)
        .bind(payload.category_id)
        .bind(&payload.indication)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        payload: &ProductPayload,
    ) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(&format!(
            "UPDATE products SET code = $2, name = $3, large_unit = $4, \
             content_per_large_unit = $5, small_unit = $6, purchase_price = $7, \
             selling_price = $8, category_id = $9, indication = $10, updated_at = NOW() \
             WHERE id = $1 RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id)
        .bind(&payload.code)
        .bind(&payload.name)
        .bind(&payload.large_unit)
        .bind(payload.content_per_large_unit)
        .bind(&payload.small_unit)
        .bind(payload.purchase_price)
        .bind(payload.selling_price)
        .bind(payload.category_id)
        .bind(&payload.indication)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

const UNIT_COLUMNS: &str = "id, code, name, created_at, updated_at";

pub struct UnitRepository;

impl UnitRepository {
    pub async fn list(
        pool: &PgPool,
        page: u32,
        page_size: u32,
        search: &str,
    ) -> Result<(Vec<Unit>, i64), sqlx::Error> {
        let filter = "($1 = '' OR code ILIKE '%'||$1||'%' OR name ILIKE '%'||$1||'%')";
        let (total,): (i64,) =
            sqlx::query_as(&format!("SELECT COUNT(*) FROM product_units WHERE {filter}"))
                .bind(search)
                .fetch_one(pool)
                .await?;

        let items = sqlx::query_as::<_, Unit>(&format!(
            "SELECT {UNIT_COLUMNS} FROM product_units WHERE {filter} \
             ORDER BY code LIMIT $2 OFFSET $3"
        ))
        .bind(search)
        .bind(page_size as i64)
        .bind(offset(page, page_size))
        .fetch_all(pool)
        .await?;

        Ok((items, total))
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Unit>, sqlx::Error> {
        sqlx::query_as::<_, Unit>(&format!(
            "SELECT {UNIT_COLUMNS} FROM product_units WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(pool: &PgPool, payload: &UnitPayload) -> Result<Unit, sqlx::Error> {
        sqlx::query_as::<_, Unit>(&format!(
            "INSERT INTO product_units (id, code, name) VALUES ($1, $2, $3) \
             RETURNING {UNIT_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&payload.code)
        .bind(&payload.name)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        payload: &UnitPayload,
    ) -> Result<Option<Unit>, sqlx::Error> {
        sqlx::query_as::<_, Unit>(&format!(
            "UPDATE product_units SET code = $2, name = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING {UNIT_COLUMNS}"
        ))
        .bind(id)
        .bind(&payload.code)
        .bind(&payload.name)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM product_units WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

const STOCK_COLUMNS: &str = "id, warehouse_id, product_id, batch_number, expired_at, date, \
     margin, tax, price, stock, previous_stock, status, order_id, notes, reference_id, \
     created_at, updated_at";
const STOCK_FILTER: &str =
    "($1 = '' OR batch_number ILIKE '%'||$1||'%' OR notes ILIKE '%'||$1||'%')";

pub struct StockEntryRepository;

impl StockEntryRepository {
    pub async fn list(
        pool: &PgPool,
        page: u32,
        page_size: u32,
        search: &str,
    ) -> Result<(Vec<StockEntry>, i64), sqlx::Error> {
        let (total,): (i64,) = sqlx::query_as(&format!(
            "SELECT COUNT(*) FROM stock_entries WHERE {STOCK_FILTER}"
        ))
        .bind(search)
        .fetch_one(pool)
        .await?;

        let items = sqlx::query_as::<_, StockEntry>(&format!(
            "SELECT {STOCK_COLUMNS} FROM stock_entries WHERE {STOCK_FILTER} \
             ORDER BY date DESC LIMIT $2 OFFSET $3"
        ))
        .bind(search)
        .bind(page_size as i64)
        .bind(offset(page, page_size))
        .fetch_all(pool)
        .await?;

        Ok((items, total))
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<StockEntry>, sqlx::Error> {
        sqlx::query_as::<_, StockEntry>(&format!(
            "SELECT {STOCK_COLUMNS} FROM stock_entries WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(
        pool: &PgPool,
        payload: &StockEntryPayload,
    ) -> Result<StockEntry, sqlx::Error> {
        sqlx::query_as::<_, StockEntry>(&format!(
            "INSERT INTO stock_entries (id, warehouse_id, product_id, batch_number, expired_at, \
             date, margin, tax, price, stock, previous_stock, status, order_id, notes, \
             reference_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
             RETURNING {STOCK_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(payload.warehouse_id)
        .bind(payload.product_id)
        .bind(&payload.batch_number)
        .bind(payload.expired_at)
        .bind(payload.date)
        .bind(payload.margin)
        .bind(payload.tax)
        .bind(payload.price)
        .bind(payload.stock)
        .bind(payload.previous_stock)
        .bind(&payload.status)
        .bind(payload.order_id)
        .bind(&payload.notes)
        .bind(payload.reference_id)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        payload: &StockEntryPayload,
    ) -> Result<Option<StockEntry>, sqlx::Error> {
        sqlx::query_as::<_, StockEntry>(&format!(
            "UPDATE stock_entries SET warehouse_id = $2, product_id = $3, batch_number = $4, \
             expired_at = $5, date = $6, margin = $7, tax = $8, price = $9, stock = $10, \
             previous_stock = $11, status = $12, order_id = $13, notes = $14, \
             reference_id = $15, updated_at = NOW() WHERE id = $1 RETURNING {STOCK_COLUMNS}"
        ))
        .bind(id)
        .bind(payload.warehouse_id)
        .bind(payload.product_id)
        .bind(&payload.batch_number)
        .bind(payload.expired_at)
        .bind(payload.date)
        .bind(payload.margin)
        .bind(payload.tax)
        .bind(payload.price)
        .bind(payload.stock)
        .bind(payload.previous_stock)
        .bind(&payload.status)
        .bind(payload.order_id)
        .bind(&payload.notes)
        .bind(payload.reference_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stock_entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(offset(1, 10), 0);
        assert_eq!(offset(2, 10), 10);
        assert_eq!(offset(5, 25), 100);
        // Page 0 is treated as page 1.
        assert_eq!(offset(0, 10), 0);
    }
}
