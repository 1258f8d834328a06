//! Integration tests that load the shipped price schedule fixture.

use std::path::Path;

use formation_core::{
    AddressType, Jurisdiction, PriceTable, SelectionConfig, compute_total,
};
use formation_data::{PriceScheduleError, PriceScheduleLoader};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const STANDARD_CSV: &str = include_str!("../test-data/standard_prices.csv");

#[test]
fn test_fixture_matches_builtin_table() {
    let records = PriceScheduleLoader::parse(STANDARD_CSV.as_bytes()).expect("Failed to parse CSV");
    let table = PriceScheduleLoader::build(&records).expect("Failed to build table");

    assert_eq!(&table, PriceTable::standard());
}

#[test]
fn test_load_from_path() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join("standard_prices.csv");

    let table = PriceScheduleLoader::load_from_path(&path).expect("fixture should load");

    let config = SelectionConfig {
        jurisdiction: Jurisdiction::Wyoming,
        address_type: AddressType::Unique,
        wants_anonymous_formation: true,
        ..Default::default()
    };
    assert_eq!(compute_total(&config, &table), dec!(847));
}

#[test]
fn test_load_nonexistent_file_returns_io_error() {
    let result = PriceScheduleLoader::load_from_path(Path::new("/this/path/does/not/exist.csv"));

    assert!(matches!(result, Err(PriceScheduleError::Io { .. })));
}

#[test]
fn test_overridden_surcharge_changes_quote() {
    let csv = STANDARD_CSV.replace("surcharge,Colorado,150", "surcharge,Colorado,175");
    let records = PriceScheduleLoader::parse(csv.as_bytes()).unwrap();
    let table = PriceScheduleLoader::build(&records).unwrap();

    assert_eq!(compute_total(&SelectionConfig::default(), &table), dec!(573));
}
