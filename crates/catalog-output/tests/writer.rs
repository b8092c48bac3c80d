//! Integration tests for catalog output.

use std::fs;

use rust_decimal_macros::dec;
use tempfile::TempDir;

use catalog_model::{PriceRange, Record};
use catalog_output::{OutputError, render_catalog, write_catalog};

fn transformed_records() -> Vec<Record> {
    vec![
        Record::new(1, "WIDGET", dec!(18.00), "Electronics").with_price_range(PriceRange::Medium),
        Record::new(2, "CHAIR", dec!(45.00), "Furniture").with_price_range(PriceRange::Medium),
    ]
}

#[test]
fn renders_header_suffix_and_rows_in_order() {
    let content = render_catalog("product_id,name,price,category", &transformed_records())
        .expect("render catalog");

    assert_eq!(
        content,
        "product_id,name,price,category,PriceRange\n\
         1,WIDGET,18.00,Electronics,Medium\n\
         2,CHAIR,45.00,Furniture,Medium\n"
    );
}

#[test]
fn writes_file_and_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("out").join("transformed.csv");

    write_catalog(&path, "product_id,name,price,category", &transformed_records())
        .expect("write catalog");

    let content = fs::read_to_string(&path).expect("read back output");
    assert!(content.starts_with("product_id,name,price,category,PriceRange\n"));
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn record_without_price_range_fails_before_touching_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("transformed.csv");
    let records = vec![Record::new(9, "LAMP", dec!(9.99), "Home")];

    let error = write_catalog(&path, "product_id,name,price,category", &records).unwrap_err();

    assert!(matches!(error, OutputError::MissingPriceRange { id: 9 }));
    assert!(!path.exists());
}

#[test]
fn empty_record_list_still_writes_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("transformed.csv");

    write_catalog(&path, "product_id,name,price,category", &[]).expect("write catalog");

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "product_id,name,price,category,PriceRange\n");
}
