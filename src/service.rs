//! UI-facing operations over the warehouse.
//!
//! The service owns the inventory and the data-file path. Every mutating
//! operation runs against a working copy of the inventory and rewrites the
//! whole data file before the copy is swapped in, so a failed save leaves
//! the in-memory state exactly as it was.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::{InventoryError, ServiceError};
use crate::inventory::{Inventory, ItemEdit};
use crate::models::Item;
use crate::store;

pub struct Service {
    inventory: Inventory,
    data_path: PathBuf,
}

impl Service {
    /// Loads the data file, or starts empty if it does not exist yet.
    /// Rows that could not be restored are logged as warnings.
    pub fn open(data_path: impl Into<PathBuf>) -> Result<Self, ServiceError> {
        let data_path = data_path.into();
        let outcome = store::load(&data_path)?;
        for warning in &outcome.warnings {
            warn!("{warning}");
        }
        info!(
            "Loaded {} items from {}",
            outcome.inventory.len(),
            data_path.display()
        );
        Ok(Self {
            inventory: outcome.inventory,
            data_path,
        })
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Adds a new item and persists the table.
    pub fn create(&mut self, item: Item) -> Result<String, ServiceError> {
        self.apply(|inventory| inventory.add(item))
    }

    /// All items in insertion order, for table rendering
    pub fn list(&self) -> &[Item] {
        self.inventory.items()
    }

    /// Described lines, one per item in insertion order
    pub fn list_descriptions(&self) -> Vec<String> {
        self.inventory.list_all()
    }

    pub fn search(&self, id: u32) -> Option<&Item> {
        self.inventory.find_by_id(id)
    }

    pub fn update_stock(&mut self, id: u32, delta: i64) -> Result<String, ServiceError> {
        self.apply(|inventory| inventory.update_stock(id, delta))
    }

    pub fn remove(&mut self, id: u32) -> Result<String, ServiceError> {
        self.apply(|inventory| inventory.remove(id))
    }

    pub fn edit(&mut self, id: u32, edit: ItemEdit) -> Result<String, ServiceError> {
        self.apply(|inventory| inventory.edit(id, edit))
    }

    /// `(name, stock)` pairs in insertion order, for chart rendering
    pub fn stock_summary(&self) -> Vec<(String, u32)> {
        self.inventory.stock_summary()
    }

    /// Runs a mutation against a working copy, persists it, and only then
    /// swaps it in.
    fn apply<F>(&mut self, op: F) -> Result<String, ServiceError>
    where
        F: FnOnce(&mut Inventory) -> Result<String, InventoryError>,
    {
        let mut next = self.inventory.clone();
        let message = op(&mut next)?;
        store::save(&next, &self.data_path)?;
        self.inventory = next;
        info!("{message}");
        Ok(message)
    }
}
