//! Gudang - warehouse inventory manager
//!
//! Tracks electronics and clothing items in an in-memory inventory backed
//! by a single CSV table. The library exposes the inventory repository, the
//! persistence adapter, and a service layer combining the two; the binary
//! wraps the service in a CLI.

pub mod error;
pub mod formatters;
pub mod inventory;
pub mod models;
pub mod service;
pub mod store;

// Re-export commonly used items
pub use error::{InventoryError, ServiceError, StoreError};
pub use formatters::{format_item_table, format_stock_chart, format_thousands};
pub use inventory::{Inventory, ItemEdit};
pub use models::{Category, Item, ItemDetails};
pub use service::Service;
pub use store::{load, save, LoadOutcome, LoadWarning};
