use genepi_plot::data::{Batch, FileRole, ProgressColumn, TsvConnector};
use genepi_plot::PlotError;
use std::path::PathBuf;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

#[test]
fn test_progress_file_keeps_row_order() {
    let batch = Batch::new("sample", fixtures());
    let table = TsvConnector::load(batch.path(FileRole::ProgressData)).unwrap();

    // Trailing blank line is ignored
    assert_eq!(table.height(), 5);
    assert_eq!(table.width(), 3);
    assert_eq!(
        table.progress_column(ProgressColumn::Generation).unwrap(),
        &[0.0, 1.0, 2.0, 3.0, 4.0]
    );
    assert_eq!(
        table.progress_column(ProgressColumn::BestError).unwrap(),
        &[120.5, 64.0, 12.75, 1.5, 0.0]
    );
    assert_eq!(table.row(2), Some(vec![2.0, 12.75, 150.0]));
}

#[test]
fn test_coefficients_as_column_or_row() {
    let batch = Batch::new("sample", fixtures());

    let input = TsvConnector::load(batch.path(FileRole::InputPoly)).unwrap();
    assert_eq!(input.width(), 1);
    assert_eq!(input.values(), vec![1.0, 0.0, 1.0]);

    let output = TsvConnector::load(batch.path(FileRole::OutputPoly)).unwrap();
    assert_eq!(output.height(), 1);
    assert_eq!(output.values(), vec![1.0, 0.25, 0.75, 0.0]);
}

#[test]
fn test_missing_file_names_path() {
    let batch = Batch::new("no_such_batch", fixtures());
    let path = batch.path(FileRole::ProgressData);

    match TsvConnector::load(&path) {
        Err(err @ PlotError::FileNotFound { .. }) => {
            assert!(err.to_string().contains("no_such_batch_progress_data.tsv"));
        }
        other => panic!("expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn test_ragged_rows_are_parse_errors() {
    let path = fixtures().join("ragged_progress_data.tsv");
    assert!(matches!(
        TsvConnector::load(path),
        Err(PlotError::Parse { .. })
    ));
}

#[test]
fn test_non_numeric_field_is_parse_error() {
    let path = fixtures().join("garbage_progress_data.tsv");
    assert!(matches!(
        TsvConnector::load(path),
        Err(PlotError::Parse { .. })
    ));
}

#[test]
fn test_empty_file_loads_as_empty_table() {
    let table = TsvConnector::load(fixtures().join("empty_training_data.tsv")).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.width(), 0);
    assert!(matches!(
        table.column(0),
        Err(PlotError::ColumnOutOfRange { index: 0, width: 0, .. })
    ));
}

#[test]
fn test_whitespace_only_file_loads_as_empty_table() {
    let table = TsvConnector::load(fixtures().join("blank_progress_data.tsv")).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_narrow_table_column_out_of_range() {
    let table = TsvConnector::load(fixtures().join("narrow_progress_data.tsv")).unwrap();
    assert!(matches!(
        table.progress_column(ProgressColumn::AverageError),
        Err(PlotError::ColumnOutOfRange { index: 2, width: 2, .. })
    ));
}
