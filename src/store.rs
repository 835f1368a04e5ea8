//! CSV persistence adapter.
//!
//! The whole inventory is written as one table, one row per item, with a
//! `Jenis` discriminator column. The category-specific columns of the other
//! category are left empty. Saves replace the destination wholesale through
//! a sibling temp file and rename, so an interrupted save never leaves a
//! half-written data file behind.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::inventory::Inventory;
use crate::models::{Category, Item, ItemDetails};

/// One CSV row. Column names follow the persisted table layout.
#[derive(Debug, Serialize, Deserialize)]
struct ItemRow {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "Nama")]
    name: String,
    #[serde(rename = "Harga")]
    price: u64,
    #[serde(rename = "Stok")]
    stock: u32,
    #[serde(rename = "Jenis")]
    category: String,
    #[serde(rename = "Merek")]
    brand: Option<String>,
    #[serde(rename = "Garansi")]
    warranty_years: Option<u32>,
    #[serde(rename = "Ukuran")]
    size: Option<String>,
    #[serde(rename = "Bahan")]
    material: Option<String>,
}

impl ItemRow {
    fn from_item(item: &Item) -> Self {
        let mut row = ItemRow {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            stock: item.stock,
            category: item.category().as_str().to_string(),
            brand: None,
            warranty_years: None,
            size: None,
            material: None,
        };
        match &item.details {
            ItemDetails::Electronics {
                brand,
                warranty_years,
            } => {
                row.brand = Some(brand.clone());
                row.warranty_years = Some(*warranty_years);
            }
            ItemDetails::Clothing { size, material } => {
                row.size = Some(size.clone());
                row.material = Some(material.clone());
            }
        }
        row
    }
}

/// A row that could not be restored during [`load`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// `Jenis` matched no known category; the row was skipped
    UnknownCategory {
        line: u64,
        id: u32,
        category: String,
    },
    /// An earlier row already used this ID; the row was skipped
    DuplicateId { line: u64, id: u32 },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::UnknownCategory { line, id, category } => write!(
                f,
                "line {line}: unknown category '{category}' for item ID {id}, row skipped"
            ),
            LoadWarning::DuplicateId { line, id } => {
                write!(f, "line {line}: duplicate item ID {id}, row skipped")
            }
        }
    }
}

/// Result of [`load`]: the restored inventory plus any skipped rows
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub inventory: Inventory,
    pub warnings: Vec<LoadWarning>,
}

/// Writes the full inventory to `path`, overwriting any previous contents.
pub fn save(inventory: &Inventory, path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = path.with_extension("csv.tmp");
    let mut writer = csv::Writer::from_path(&tmp)?;
    for item in inventory.items() {
        writer.serialize(ItemRow::from_item(item))?;
    }
    writer.flush()?;
    drop(writer);
    fs::rename(&tmp, path)?;
    log::debug!("Saved {} items to {}", inventory.len(), path.display());
    Ok(())
}

/// Reads the inventory back from `path`.
///
/// A missing file yields an empty inventory with no warnings. Rows are
/// restored in file order; rows with an unknown `Jenis` value or a duplicate
/// ID are skipped and reported in the outcome's warnings.
pub fn load(path: &Path) -> Result<LoadOutcome, StoreError> {
    if !path.exists() {
        log::debug!("No data file at {}, starting empty", path.display());
        return Ok(LoadOutcome::default());
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut outcome = LoadOutcome::default();
    for (index, result) in reader.deserialize().enumerate() {
        // Line 1 is the header row
        let line = index as u64 + 2;
        let row: ItemRow = result?;
        let Some(category) = Category::parse(&row.category) else {
            outcome.warnings.push(LoadWarning::UnknownCategory {
                line,
                id: row.id,
                category: row.category,
            });
            continue;
        };
        let item = match category {
            Category::Electronics => Item::electronics(
                row.id,
                row.name,
                row.price,
                row.stock,
                row.brand.unwrap_or_default(),
                row.warranty_years.unwrap_or_default(),
            ),
            Category::Clothing => Item::clothing(
                row.id,
                row.name,
                row.price,
                row.stock,
                row.size.unwrap_or_default(),
                row.material.unwrap_or_default(),
            ),
        };
        let id = item.id;
        if outcome.inventory.add(item).is_err() {
            outcome.warnings.push(LoadWarning::DuplicateId { line, id });
        }
    }
    log::debug!(
        "Loaded {} items from {} ({} rows skipped)",
        outcome.inventory.len(),
        path.display(),
        outcome.warnings.len()
    );
    Ok(outcome)
}
