// File: crates/scatter-core/tests/parse.rs
// Purpose: Validate CSV loading, numeric coercion, and failure kinds.

use scatter_core::{load_states_csv, DataError};
use std::path::PathBuf;

fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn numeric_fields_parse_or_nan() {
    let path = write_fixture(
        "parse_basic.csv",
        "state,abbr,poverty,healthcare,obesity\n\
         Alabama,AL,18.8,14.6,32.8\n\
         Alaska,AK,n/a,19.8,28.4\n",
    );
    let rows = load_states_csv(&path).expect("load");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].state, "Alabama");
    assert_eq!(rows[0].abbr, "AL");
    assert_eq!(rows[0].poverty, 18.8);
    assert_eq!(rows[0].healthcare, 14.6);
    assert_eq!(rows[0].obesity, 32.8);
    // Malformed cell degrades to NaN for that field only.
    assert!(rows[1].poverty.is_nan());
    assert_eq!(rows[1].healthcare, 19.8);
    assert_eq!(rows[1].obesity, 28.4);
}

#[test]
fn extra_columns_ignored_and_headers_case_insensitive() {
    let path = write_fixture(
        "parse_extra.csv",
        "id,State,Abbr,Poverty,income,Healthcare,Obesity,smokes\n\
         1,Texas,TX,15.2,54000,17.1,31.9,14.3\n",
    );
    let rows = load_states_csv(&path).expect("load");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].abbr, "TX");
    assert_eq!(rows[0].poverty, 15.2);
    assert_eq!(rows[0].healthcare, 17.1);
    assert_eq!(rows[0].obesity, 31.9);
}

#[test]
fn missing_column_is_a_typed_error() {
    let path = write_fixture(
        "parse_missing.csv",
        "state,abbr,poverty,obesity\n\
         Iowa,IA,11.8,30.7\n",
    );
    match load_states_csv(&path) {
        Err(DataError::MissingColumn(col)) => assert_eq!(col, "healthcare"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn missing_file_is_a_csv_error() {
    let err = load_states_csv(std::path::Path::new("target/test_out/definitely_absent.csv"))
        .unwrap_err();
    assert!(matches!(err, DataError::Csv { .. }));
}
