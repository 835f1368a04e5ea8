use gudang::store::{load, save};
use gudang::{Inventory, Item, ItemDetails, LoadWarning};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// Test fixtures - sample data for testing

fn sample_inventory() -> Inventory {
    let mut inventory = Inventory::new();
    inventory
        .add(Item::electronics(1, "TV", 5_000_000, 3, "Sony", 2))
        .unwrap();
    inventory
        .add(Item::clothing(2, "Batik Shirt", 250_000, 10, "L", "Cotton"))
        .unwrap();
    inventory
        .add(Item::electronics(3, "Rice Cooker", 450_000, 7, "Cosmos", 1))
        .unwrap();
    inventory
}

fn data_path(dir: &TempDir) -> PathBuf {
    dir.path().join("gudang_data.csv")
}

#[test]
fn round_trip_preserves_items_and_order() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);
    let inventory = sample_inventory();

    save(&inventory, &path).unwrap();
    let outcome = load(&path).unwrap();

    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.inventory.items(), inventory.items());
}

#[test]
fn tv_sony_scenario_survives_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);

    let mut inventory = Inventory::new();
    inventory
        .add(Item::electronics(1, "TV", 5_000_000, 3, "Sony", 2))
        .unwrap();
    save(&inventory, &path).unwrap();

    let outcome = load(&path).unwrap();
    let item = outcome.inventory.find_by_id(1).unwrap();
    assert_eq!(item.name, "TV");
    assert_eq!(
        item.details,
        ItemDetails::Electronics {
            brand: "Sony".to_string(),
            warranty_years: 2
        }
    );
}

#[test]
fn saved_file_uses_expected_headers() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);
    save(&sample_inventory(), &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let first_line = content.lines().next().unwrap();
    assert_eq!(first_line, "ID,Nama,Harga,Stok,Jenis,Merek,Garansi,Ukuran,Bahan");
}

#[test]
fn saved_rows_leave_other_category_columns_empty() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);
    save(&sample_inventory(), &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[1], "1,TV,5000000,3,Elektronik,Sony,2,,");
    assert_eq!(lines[2], "2,Batik Shirt,250000,10,Pakaian,,,L,Cotton");
}

#[test]
fn save_overwrites_destination_wholesale() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);
    save(&sample_inventory(), &path).unwrap();

    let mut smaller = Inventory::new();
    smaller
        .add(Item::clothing(9, "Sarong", 120_000, 4, "M", "Rayon"))
        .unwrap();
    save(&smaller, &path).unwrap();

    let outcome = load(&path).unwrap();
    assert_eq!(outcome.inventory.len(), 1);
    assert_eq!(outcome.inventory.find_by_id(9).unwrap().name, "Sarong");
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);
    save(&sample_inventory(), &path).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec!["gudang_data.csv"]);
}

#[test]
fn load_missing_file_yields_empty_inventory() {
    let dir = TempDir::new().unwrap();
    let outcome = load(&data_path(&dir)).unwrap();
    assert!(outcome.inventory.is_empty());
    assert!(outcome.warnings.is_empty());
}

#[test]
fn load_header_only_file_yields_empty_inventory() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);
    fs::write(&path, "ID,Nama,Harga,Stok,Jenis,Merek,Garansi,Ukuran,Bahan\n").unwrap();

    let outcome = load(&path).unwrap();
    assert!(outcome.inventory.is_empty());
    assert!(outcome.warnings.is_empty());
}

#[test]
fn load_skips_unknown_category_with_warning() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);
    fs::write(
        &path,
        "ID,Nama,Harga,Stok,Jenis,Merek,Garansi,Ukuran,Bahan\n\
         1,TV,5000000,3,Elektronik,Sony,2,,\n\
         2,Desk,900000,5,Furniture,,,,\n\
         3,Batik Shirt,250000,10,Pakaian,,,L,Cotton\n",
    )
    .unwrap();

    let outcome = load(&path).unwrap();
    assert_eq!(outcome.inventory.len(), 2);
    assert!(outcome.inventory.find_by_id(2).is_none());
    assert_eq!(
        outcome.warnings,
        vec![LoadWarning::UnknownCategory {
            line: 3,
            id: 2,
            category: "Furniture".to_string(),
        }]
    );
}

#[test]
fn load_skips_duplicate_id_with_warning() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);
    fs::write(
        &path,
        "ID,Nama,Harga,Stok,Jenis,Merek,Garansi,Ukuran,Bahan\n\
         1,TV,5000000,3,Elektronik,Sony,2,,\n\
         1,Radio,150000,8,Elektronik,Polytron,1,,\n",
    )
    .unwrap();

    let outcome = load(&path).unwrap();
    assert_eq!(outcome.inventory.len(), 1);
    // First row wins
    assert_eq!(outcome.inventory.find_by_id(1).unwrap().name, "TV");
    assert_eq!(
        outcome.warnings,
        vec![LoadWarning::DuplicateId { line: 3, id: 1 }]
    );
}

#[test]
fn load_trims_whitespace_in_fields() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);
    fs::write(
        &path,
        "ID,Nama,Harga,Stok,Jenis,Merek,Garansi,Ukuran,Bahan\n\
         1 , TV , 5000000 , 3 , Elektronik , Sony , 2 ,,\n",
    )
    .unwrap();

    let outcome = load(&path).unwrap();
    let item = outcome.inventory.find_by_id(1).unwrap();
    assert_eq!(item.name, "TV");
    assert_eq!(item.price, 5_000_000);
    assert_eq!(
        item.details,
        ItemDetails::Electronics {
            brand: "Sony".to_string(),
            warranty_years: 2
        }
    );
}

#[test]
fn load_handles_quoted_names_with_commas() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);

    let mut inventory = Inventory::new();
    inventory
        .add(Item::clothing(4, "Shirt, long-sleeve", 300_000, 2, "XL", "Cotton"))
        .unwrap();
    save(&inventory, &path).unwrap();

    let outcome = load(&path).unwrap();
    assert_eq!(
        outcome.inventory.find_by_id(4).unwrap().name,
        "Shirt, long-sleeve"
    );
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("data.csv");
    save(&sample_inventory(), &path).unwrap();

    let outcome = load(&path).unwrap();
    assert_eq!(outcome.inventory.len(), 3);
}

#[test]
fn empty_inventory_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = data_path(&dir);
    save(&Inventory::new(), &path).unwrap();

    let outcome = load(&path).unwrap();
    assert!(outcome.inventory.is_empty());
    assert!(outcome.warnings.is_empty());
}
