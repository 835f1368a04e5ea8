//! Plain-text rendering of inventory data for the CLI.

use crate::models::{Item, ItemDetails};

/// Formats an integer with `,` thousands separators (e.g. 5000000 -> "5,000,000")
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let offset = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn details_column(item: &Item) -> String {
    match &item.details {
        ItemDetails::Electronics {
            brand,
            warranty_years,
        } => format!("Brand: {brand}, Warranty: {warranty_years} year(s)"),
        ItemDetails::Clothing { size, material } => {
            format!("Size: {size}, Material: {material}")
        }
    }
}

/// Renders items as an aligned text table, one row per item in order.
pub fn format_item_table(items: &[Item]) -> String {
    if items.is_empty() {
        return "No items in the warehouse.\n".to_string();
    }

    let mut max_id_len = 2; // "ID"
    let mut max_name_len = 4; // "Name"
    let mut max_price_len = 11; // "Price (IDR)"
    let mut max_stock_len = 5; // "Stock"
    let mut max_category_len = 8; // "Category"

    let rows: Vec<(String, String, String, String, String, String)> = items
        .iter()
        .map(|item| {
            (
                item.id.to_string(),
                item.name.clone(),
                format_thousands(item.price),
                item.stock.to_string(),
                item.category().as_str().to_string(),
                details_column(item),
            )
        })
        .collect();

    for (id, name, price, stock, category, _) in &rows {
        max_id_len = max_id_len.max(id.len());
        max_name_len = max_name_len.max(name.len());
        max_price_len = max_price_len.max(price.len());
        max_stock_len = max_stock_len.max(stock.len());
        max_category_len = max_category_len.max(category.len());
    }

    let header = format!(
        "{:>width_id$} | {:<width_name$} | {:>width_price$} | {:>width_stock$} | {:<width_cat$} | Details\n",
        "ID",
        "Name",
        "Price (IDR)",
        "Stock",
        "Category",
        width_id = max_id_len,
        width_name = max_name_len,
        width_price = max_price_len,
        width_stock = max_stock_len,
        width_cat = max_category_len,
    );
    let separator = format!(
        "{:->width_id$}-+-{:-<width_name$}-+-{:-<width_price$}-+-{:-<width_stock$}-+-{:-<width_cat$}-+--------\n",
        "",
        "",
        "",
        "",
        "",
        width_id = max_id_len,
        width_name = max_name_len,
        width_price = max_price_len,
        width_stock = max_stock_len,
        width_cat = max_category_len,
    );

    let mut output = String::new();
    output.push_str(&header);
    output.push_str(&separator);
    for (id, name, price, stock, category, details) in &rows {
        output.push_str(&format!(
            "{:>width_id$} | {:<width_name$} | {:>width_price$} | {:>width_stock$} | {:<width_cat$} | {}\n",
            id,
            name,
            price,
            stock,
            category,
            details,
            width_id = max_id_len,
            width_name = max_name_len,
            width_price = max_price_len,
            width_stock = max_stock_len,
            width_cat = max_category_len,
        ));
    }
    output
}

/// Renders the stock summary as a horizontal text bar chart, one bar per
/// entry in order. Bars are scaled down when the largest stock exceeds the
/// chart width.
pub fn format_stock_chart(summary: &[(String, u32)]) -> String {
    const CHART_WIDTH: u32 = 40;

    if summary.is_empty() {
        return "No items in the warehouse.\n".to_string();
    }

    let max_name_len = summary
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0)
        .max(4);
    let max_stock = summary.iter().map(|(_, stock)| *stock).max().unwrap_or(0);

    let mut output = String::new();
    for (name, stock) in summary {
        let bar_len = if max_stock <= CHART_WIDTH {
            u64::from(*stock)
        } else {
            // Round up so any non-zero stock draws at least one mark
            (u64::from(*stock) * u64::from(CHART_WIDTH)).div_ceil(u64::from(max_stock))
        };
        output.push_str(&format!(
            "{:<max_name_len$} | {} {}\n",
            name,
            "#".repeat(bar_len as usize),
            stock,
        ));
    }
    output
}
