use super::*;

const SAMPLE_CSV: &str = "ID;DATE_TIME;C_INLET;VELOCITY\n\
S1;2020-01-01 00:00:00;10.0;2.0\n\
S2;2020-01-01 01:00:00;8.5;1.5\n";

#[test]
fn test_load_semicolon_table() {
    let table = Table::from_reader(std::io::Cursor::new(SAMPLE_CSV)).unwrap();

    assert_eq!(table.header(), &["ID", "DATE_TIME", "C_INLET", "VELOCITY"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.records()[0].value(0), "S1");
    assert_eq!(table.records()[1].value(2), "8.5");
}

#[test]
fn test_record_rows_are_one_based() {
    let table = Table::from_reader(std::io::Cursor::new(SAMPLE_CSV)).unwrap();

    assert_eq!(table.records()[0].row(), 1);
    assert_eq!(table.records()[1].row(), 2);
}

#[test]
fn test_header_and_values_are_trimmed() {
    let csv = " ID ; C_INLET \n S1 ; 10.0 \n";
    let table = Table::from_reader(std::io::Cursor::new(csv)).unwrap();

    assert_eq!(table.header(), &["ID", "C_INLET"]);
    assert_eq!(table.records()[0].value(1), "10.0");
}

#[test]
fn test_column_index_lookup() {
    let table = Table::from_reader(std::io::Cursor::new(SAMPLE_CSV)).unwrap();

    assert_eq!(table.column_index("VELOCITY"), Some(3));
    assert_eq!(table.column_index("velocity"), None);
    assert_eq!(table.column_index("NOPE"), None);
}

#[test]
fn test_short_row_reads_empty() {
    let csv = "ID;C_INLET\nS1\n";
    let table = Table::from_reader(std::io::Cursor::new(csv)).unwrap();

    assert_eq!(table.records()[0].value(0), "S1");
    assert_eq!(table.records()[0].value(1), "");
}

#[test]
fn test_empty_input_is_missing_header() {
    let err = Table::from_reader(std::io::Cursor::new("")).unwrap_err();
    assert!(matches!(err, TableError::MissingHeader));
}
