use crate::formatters::format_thousands;

/// Represents the supported item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Electronics,
    Clothing,
}

impl Category {
    /// Returns the category name as written in the `Jenis` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Elektronik",
            Category::Clothing => "Pakaian",
        }
    }

    /// Parse a `Jenis` column value into a Category
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Elektronik" => Some(Category::Electronics),
            "Pakaian" => Some(Category::Clothing),
            _ => None,
        }
    }

    /// Returns all supported categories
    pub fn all() -> &'static [Category] {
        &[Category::Electronics, Category::Clothing]
    }
}

/// Category-specific fields. Exactly one variant per item, fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemDetails {
    Electronics { brand: String, warranty_years: u32 },
    Clothing { size: String, material: String },
}

impl ItemDetails {
    pub fn category(&self) -> Category {
        match self {
            ItemDetails::Electronics { .. } => Category::Electronics,
            ItemDetails::Clothing { .. } => Category::Clothing,
        }
    }
}

/// One inventory record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: u32,
    pub name: String,
    /// Unit price in whole rupiah
    pub price: u64,
    pub stock: u32,
    pub details: ItemDetails,
}

impl Item {
    pub fn electronics(
        id: u32,
        name: impl Into<String>,
        price: u64,
        stock: u32,
        brand: impl Into<String>,
        warranty_years: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
            details: ItemDetails::Electronics {
                brand: brand.into(),
                warranty_years,
            },
        }
    }

    pub fn clothing(
        id: u32,
        name: impl Into<String>,
        price: u64,
        stock: u32,
        size: impl Into<String>,
        material: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
            details: ItemDetails::Clothing {
                size: size.into(),
                material: material.into(),
            },
        }
    }

    pub fn category(&self) -> Category {
        self.details.category()
    }

    /// One-line summary of the item, including the category-specific fields
    pub fn describe(&self) -> String {
        let common = format!(
            "ID: {}, Name: {}, Price: {} IDR, Stock: {}",
            self.id,
            self.name,
            format_thousands(self.price),
            self.stock
        );
        match &self.details {
            ItemDetails::Electronics {
                brand,
                warranty_years,
            } => format!("{common}, Brand: {brand}, Warranty: {warranty_years} year(s)"),
            ItemDetails::Clothing { size, material } => {
                format!("{common}, Size: {size}, Material: {material}")
            }
        }
    }
}
