//! Error types for the warehouse core

use thiserror::Error;

/// Domain failures of the in-memory inventory.
///
/// These are recoverable outcomes reported back to the caller; the `Display`
/// strings double as the user-visible messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// No item with this ID exists in the inventory
    #[error("item with ID {0} not found in the warehouse")]
    NotFound(u32),
    /// An item with this ID already exists
    #[error("an item with ID {0} already exists in the warehouse")]
    DuplicateId(u32),
    /// A stock delta would leave the stock outside the valid range
    #[error("cannot update stock of item {id}: current stock {stock}, delta {delta:+}")]
    StockOutOfRange { id: u32, stock: u32, delta: i64 },
}

/// Infrastructure failures of the persistence adapter
#[derive(Debug, Error)]
pub enum StoreError {
    /// Data file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed CSV data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Failures surfaced by the service layer. Domain failures and persistence
/// failures stay distinct: a `Store` error means the in-memory state was
/// left untouched.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error("failed to persist inventory: {0}")]
    Store(#[from] StoreError),
}
