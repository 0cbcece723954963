//! HTTP handlers for the inventory CRUD surface and ops endpoints.

pub mod admin;
pub mod branches;
pub mod categories;
pub mod offices;
pub mod products;
pub mod stock;
pub mod units;
pub mod warehouses;

pub use admin::{health_check, run_seeder};
