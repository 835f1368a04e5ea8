//! Gudang - warehouse inventory manager
//!
//! CLI over the inventory service: items are kept in a CSV table and every
//! mutating command rewrites the full table.

use clap::{Parser, Subcommand};
use gudang::{
    format_item_table, format_stock_chart, InventoryError, Item, ItemEdit, Service, ServiceError,
};
use std::path::PathBuf;

/// Warehouse inventory manager - electronics and clothing stock in a CSV table
#[derive(Parser, Debug)]
#[command(name = "gudang")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV data file
    #[arg(short, long, default_value_t = default_data_path())]
    data: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add an electronics item
    AddElectronics {
        #[arg(long)]
        id: u32,
        #[arg(long)]
        name: String,
        /// Unit price in whole rupiah
        #[arg(long)]
        price: u64,
        #[arg(long)]
        stock: u32,
        #[arg(long)]
        brand: String,
        /// Warranty length in years
        #[arg(long)]
        warranty: u32,
    },
    /// Add a clothing item
    AddClothing {
        #[arg(long)]
        id: u32,
        #[arg(long)]
        name: String,
        /// Unit price in whole rupiah
        #[arg(long)]
        price: u64,
        #[arg(long)]
        stock: u32,
        #[arg(long)]
        size: String,
        #[arg(long)]
        material: String,
    },
    /// List all items as a table
    List,
    /// Show a single item by ID
    Search { id: u32 },
    /// Add a signed delta to an item's stock
    UpdateStock { id: u32, delta: i64 },
    /// Remove an item by ID
    Remove { id: u32 },
    /// Overwrite selected fields of an item; omitted fields stay unchanged
    Edit {
        id: u32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<u64>,
        #[arg(long)]
        stock: Option<u32>,
    },
    /// Show the stock level of every item as a bar chart
    Summary,
}

/// Returns the default data file path: ~/.local/share/gudang/gudang_data.csv
fn default_data_path() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gudang")
        .join("gudang_data.csv")
        .to_string_lossy()
        .to_string()
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::debug!("Data file: {}", args.data);

    let mut service = match Service::open(&args.data) {
        Ok(service) => service,
        Err(e) => {
            log::error!("Failed to open warehouse data: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&mut service, args.command) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Prints the single-item snapshot shown after a successful mutation
fn print_snapshot(service: &Service, id: u32) {
    if let Some(item) = service.search(id) {
        print!("{}", format_item_table(std::slice::from_ref(item)));
    }
}

fn run(service: &mut Service, command: Command) -> Result<(), ServiceError> {
    match command {
        Command::AddElectronics {
            id,
            name,
            price,
            stock,
            brand,
            warranty,
        } => {
            let message = service.create(Item::electronics(id, name, price, stock, brand, warranty))?;
            println!("{message}");
            print_snapshot(service, id);
        }
        Command::AddClothing {
            id,
            name,
            price,
            stock,
            size,
            material,
        } => {
            let message = service.create(Item::clothing(id, name, price, stock, size, material))?;
            println!("{message}");
            print_snapshot(service, id);
        }
        Command::List => {
            print!("{}", format_item_table(service.list()));
        }
        Command::Search { id } => match service.search(id) {
            Some(item) => print!("{}", format_item_table(std::slice::from_ref(item))),
            None => return Err(InventoryError::NotFound(id).into()),
        },
        Command::UpdateStock { id, delta } => {
            let message = service.update_stock(id, delta)?;
            println!("{message}");
            print_snapshot(service, id);
        }
        Command::Remove { id } => {
            let message = service.remove(id)?;
            println!("{message}");
        }
        Command::Edit {
            id,
            name,
            price,
            stock,
        } => {
            let message = service.edit(id, ItemEdit { name, price, stock })?;
            println!("{message}");
            print_snapshot(service, id);
        }
        Command::Summary => {
            print!("{}", format_stock_chart(&service.stock_summary()));
        }
    }
    Ok(())
}
