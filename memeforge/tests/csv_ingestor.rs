use std::path::Path;

use memeforge::error::MemeforgeError;
use memeforge::ingest::ingestors::CsvIngestor;
use memeforge::ingest::QuoteIngestor;
use memeforge::models::Quote;
use pretty_assertions::assert_eq;

mod common;
use common::{ensure_fixtures, fixture_path};

#[test]
fn test_csv_rows_in_file_order() {
    ensure_fixtures();

    let quotes = CsvIngestor.parse(&fixture_path("quotes.csv")).unwrap();
    assert_eq!(
        quotes,
        vec![
            Quote::new("Stay hungry", "Steve Jobs"),
            Quote::new("Be water my friend", "Bruce Lee"),
            Quote::new(
                "Simplicity is the ultimate sophistication",
                "Leonardo da Vinci"
            ),
        ]
    );
}

#[test]
fn test_csv_header_only_yields_no_quotes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "body,author\n").unwrap();

    let quotes = CsvIngestor.parse(&path).unwrap();
    assert!(quotes.is_empty());
}

#[test]
fn test_csv_extra_columns_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wide.csv");
    std::fs::write(&path, "id,body,author\n1,a quote,someone\n").unwrap();

    let quotes = CsvIngestor.parse(&path).unwrap();
    assert_eq!(quotes, vec![Quote::new("a quote", "someone")]);
}

#[test]
fn test_csv_missing_author_column_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.csv");
    std::fs::write(&path, "body,writer\na quote,someone\n").unwrap();

    let err = CsvIngestor.parse(&path).unwrap_err();
    assert!(matches!(err, MemeforgeError::MalformedRecord { .. }));
}

#[test]
fn test_csv_column_names_are_case_sensitive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("caps.csv");
    std::fs::write(&path, "Body,Author\na quote,someone\n").unwrap();

    let err = CsvIngestor.parse(&path).unwrap_err();
    assert!(matches!(err, MemeforgeError::MalformedRecord { .. }));
}

#[test]
fn test_csv_rejects_foreign_extension() {
    let err = CsvIngestor.parse(Path::new("quotes.txt")).unwrap_err();
    assert!(matches!(err, MemeforgeError::FormatMismatch { .. }));
}

#[test]
fn test_csv_can_ingest() {
    assert!(CsvIngestor.can_ingest(Path::new("any/quotes.csv")));
    assert!(!CsvIngestor.can_ingest(Path::new("any/quotes.CSV")));
    assert!(!CsvIngestor.can_ingest(Path::new("any/quotes.tsv")));
}
