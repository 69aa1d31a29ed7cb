//! Delimited-text row source.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tabcard_core::fields::Row;

use crate::error::TableResult;
use crate::format::TableFormat;
use crate::sniff;

/// Reads all rows from a delimited-text file.
///
/// The delimiter is the explicit override when given, the format's fixed
/// delimiter otherwise, and a sniffed one as the last resort.
///
/// ## Errors
/// Returns an error for unsupported extensions, unreadable files, or
/// malformed delimited text.
pub fn read_rows(path: &Path, delimiter: Option<u8>, fallback: u8) -> TableResult<Vec<Row>> {
    let format = TableFormat::from_path(path)?;

    let delimiter = match delimiter.or(format.fixed_delimiter()) {
        Some(delimiter) => delimiter,
        None => sniff::sniff_path(path, fallback)?,
    };

    let file = File::open(path)?;
    let rows = read_rows_from(BufReader::new(file), delimiter)?;

    tracing::info!(path = %path.display(), count = rows.len(), "Read table rows");

    Ok(rows)
}

/// Reads rows from any reader with a known delimiter.
///
/// The first record is the header row. Each data row pairs every header
/// with its cell in header order; missing trailing cells default to empty.
///
/// ## Errors
/// Returns an error if the reader fails or a record is malformed.
pub fn read_rows_from<R: Read>(reader: R, delimiter: u8) -> TableResult<Vec<Row>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true) // Allow varying number of fields
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(String::from).collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let row: Row = headers
            .iter()
            .enumerate()
            .map(|(i, header)| (header.clone(), record.get(i).unwrap_or_default().to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_basic_csv() {
        let input = "given_name,phone\nJohn,555\nJane,666\n";
        let rows = read_rows_from(Cursor::new(input), b',').unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            vec![
                ("given_name".to_string(), "John".to_string()),
                ("phone".to_string(), "555".to_string()),
            ]
        );
        assert_eq!(rows[1][0].1, "Jane");
    }

    #[test]
    fn read_semicolon_delimited() {
        let input = "given_name;phone\nJohn;555\n";
        let rows = read_rows_from(Cursor::new(input), b';').unwrap();
        assert_eq!(rows[0][1], ("phone".to_string(), "555".to_string()));
    }

    #[test]
    fn read_short_record_pads_empty() {
        let input = "given_name,phone,email\nJohn,555\n";
        let rows = read_rows_from(Cursor::new(input), b',').unwrap();
        assert_eq!(rows[0][2], ("email".to_string(), String::new()));
    }

    #[test]
    fn read_trims_cells() {
        let input = "given_name,phone\n  John  , 555 \n";
        let rows = read_rows_from(Cursor::new(input), b',').unwrap();
        assert_eq!(rows[0][0].1, "John");
    }

    #[test]
    fn read_quoted_cells_keep_delimiter() {
        let input = "org,phone\n\"Acme, Inc\",555\n";
        let rows = read_rows_from(Cursor::new(input), b',').unwrap();
        assert_eq!(rows[0][0].1, "Acme, Inc");
    }

    #[test]
    fn read_unsupported_extension_fails_fast() {
        let result = read_rows(Path::new("contacts.xlsx"), None, b',');
        assert!(matches!(
            result,
            Err(crate::error::TableError::UnsupportedExtension(_))
        ));
    }
}
