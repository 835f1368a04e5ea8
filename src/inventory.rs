//! In-memory inventory repository.
//!
//! Items are kept in insertion order; order matters for display, not for
//! lookups. All mutating operations return a human-readable success message
//! or an [`InventoryError`] naming the offending ID.

use crate::error::InventoryError;
use crate::models::Item;

/// Per-field changes for [`Inventory::edit`].
///
/// `None` leaves a field untouched; `Some` overwrites it, including explicit
/// zero or empty-string values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemEdit {
    pub name: Option<String>,
    pub price: Option<u64>,
    pub stock: Option<u32>,
}

impl ItemEdit {
    /// Returns true if no field would be changed
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.stock.is_none()
    }
}

/// The in-memory collection of items plus its query and mutation operations
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Appends an item, rejecting an ID that is already taken.
    pub fn add(&mut self, item: Item) -> Result<String, InventoryError> {
        if self.find_by_id(item.id).is_some() {
            return Err(InventoryError::DuplicateId(item.id));
        }
        let message = format!("Item '{}' (ID {}) added to the warehouse.", item.name, item.id);
        log::debug!("Adding item {} ('{}')", item.id, item.name);
        self.items.push(item);
        Ok(message)
    }

    /// Linear scan for the first item with this ID
    pub fn find_by_id(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    fn find_by_id_mut(&mut self, id: u32) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Describes every item, preserving insertion order
    pub fn list_all(&self) -> Vec<String> {
        self.items.iter().map(Item::describe).collect()
    }

    /// Adds a signed delta to an item's stock.
    ///
    /// Fails without changing anything if the ID is unknown or the result
    /// would fall outside `0..=u32::MAX`.
    pub fn update_stock(&mut self, id: u32, delta: i64) -> Result<String, InventoryError> {
        let item = self
            .find_by_id_mut(id)
            .ok_or(InventoryError::NotFound(id))?;
        let updated = i64::from(item.stock)
            .checked_add(delta)
            .filter(|s| (0..=i64::from(u32::MAX)).contains(s))
            .ok_or(InventoryError::StockOutOfRange {
                id,
                stock: item.stock,
                delta,
            })?;
        item.stock = updated as u32;
        log::debug!("Stock of item {} is now {}", id, item.stock);
        Ok(format!(
            "Stock of item '{}' updated to {}.",
            item.name, item.stock
        ))
    }

    /// Removes the item with this ID; the instance is discarded.
    pub fn remove(&mut self, id: u32) -> Result<String, InventoryError> {
        let pos = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(InventoryError::NotFound(id))?;
        let item = self.items.remove(pos);
        log::debug!("Removed item {} ('{}')", id, item.name);
        Ok(format!(
            "Item '{}' (ID {}) removed from the warehouse.",
            item.name, id
        ))
    }

    /// Overwrites the supplied fields of an item; absent fields are left
    /// unchanged. Zero and empty string are applied literally.
    pub fn edit(&mut self, id: u32, edit: ItemEdit) -> Result<String, InventoryError> {
        let item = self
            .find_by_id_mut(id)
            .ok_or(InventoryError::NotFound(id))?;
        if let Some(name) = edit.name {
            item.name = name;
        }
        if let Some(price) = edit.price {
            item.price = price;
        }
        if let Some(stock) = edit.stock {
            item.stock = stock;
        }
        log::debug!("Edited item {} ('{}')", id, item.name);
        Ok(format!("Item with ID {id} updated."))
    }

    /// One `(name, stock)` pair per item in insertion order. Names are not
    /// deduplicated.
    pub fn stock_summary(&self) -> Vec<(String, u32)> {
        self.items
            .iter()
            .map(|item| (item.name.clone(), item.stock))
            .collect()
    }
}
