//! Warehouse/inventory domain: entities, store queries, search helpers.

pub mod models;
pub mod repository;
pub mod search;

pub use models::{Branch, Category, Office, Product, StockEntry, Unit, Warehouse};
pub use search::sanitize_search_term;
