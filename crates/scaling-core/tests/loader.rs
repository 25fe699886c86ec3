// File: crates/scaling-core/tests/loader.rs
// Purpose: Validate table loading, schema checks, and coercion failures.

use scaling_core::{ChartError, Dataset, Series, DURATION_COLUMN};
use std::path::PathBuf;

fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let path = PathBuf::from("target/test_data").join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_rows_in_file_order() {
    let path = write_fixture("order.csv", "T,Duration\n4,30\n1,100\n2,55\n");
    let dataset = Dataset::from_path(&path).expect("load");
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.thread_counts().expect("threads"), vec![4, 1, 2]);

    let duration = Series::extract(&dataset, DURATION_COLUMN).expect("extract");
    assert_eq!(duration.values, vec![30.0, 100.0, 55.0]);
    assert_eq!(duration.len(), dataset.len());
}

#[test]
fn typed_records_carry_optional_speedup() {
    let path = write_fixture("records.csv", "T,Duration,Speedup\n1,100,1.0\n2,55,1.8\n");
    let dataset = Dataset::from_path(&path).expect("load");
    let records = dataset.records().expect("records");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].threads, 1);
    assert_eq!(records[1].duration_ms, 55.0);
    assert_eq!(records[1].speedup, Some(1.8));

    let plain = write_fixture("records_plain.csv", "T,Duration\n1,100\n");
    let dataset = Dataset::from_path(&plain).expect("load");
    assert_eq!(dataset.records().expect("records")[0].speedup, None);
}

#[test]
fn missing_file_is_a_load_error() {
    let err = Dataset::from_path("target/test_data/does_not_exist.csv").unwrap_err();
    assert!(matches!(err, ChartError::Load { .. }), "got {err:?}");
}

#[test]
fn header_only_file_is_empty() {
    let path = write_fixture("empty.csv", "T,Duration\n");
    let err = Dataset::from_path(&path).unwrap_err();
    assert!(matches!(err, ChartError::Empty { .. }), "got {err:?}");
}

#[test]
fn missing_duration_column_is_a_schema_error() {
    let path = write_fixture("no_duration.csv", "T,Time\n1,100\n");
    let err = Dataset::from_path(&path).unwrap_err();
    match err {
        ChartError::Schema { column } => assert_eq!(column, "Duration"),
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn column_names_are_case_sensitive() {
    let path = write_fixture("lowercase.csv", "t,duration\n1,100\n");
    let err = Dataset::from_path(&path).unwrap_err();
    assert!(matches!(err, ChartError::Schema { .. }), "got {err:?}");
}

#[test]
fn short_row_is_malformed() {
    let path = write_fixture("short_row.csv", "T,Duration\n1,100\n2\n");
    let err = Dataset::from_path(&path).unwrap_err();
    assert!(matches!(err, ChartError::Malformed { .. }), "got {err:?}");
}

#[test]
fn unparseable_cell_names_its_row() {
    let path = write_fixture("bad_cell.csv", "T,Duration\n1,100\n2,abc\n4,30\n");
    let dataset = Dataset::from_path(&path).expect("load");
    let err = Series::extract(&dataset, DURATION_COLUMN).unwrap_err();
    match err {
        ChartError::Coercion { column, row, value } => {
            assert_eq!(column, "Duration");
            assert_eq!(row, 1);
            assert_eq!(value, "abc");
        }
        other => panic!("expected coercion error, got {other:?}"),
    }
}

#[test]
fn non_finite_cell_is_rejected() {
    let path = write_fixture("nan_cell.csv", "T,Duration\n1,NaN\n");
    let dataset = Dataset::from_path(&path).expect("load");
    let err = Series::extract(&dataset, DURATION_COLUMN).unwrap_err();
    assert!(matches!(err, ChartError::Coercion { .. }), "got {err:?}");
}
