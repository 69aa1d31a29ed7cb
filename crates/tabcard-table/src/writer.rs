//! Delimited-text row sink.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tabcard_core::fields::Row;

use crate::error::TableResult;
use crate::format::TableFormat;

/// Writes rows to a delimited-text file.
///
/// ## Errors
/// Returns an error for unsupported extensions or if writing fails. The
/// extension check runs before the file is created, so no partial output is
/// left behind on a configuration error.
pub fn write_rows(path: &Path, rows: &[Row]) -> TableResult<()> {
    let format = TableFormat::from_path(path)?;

    let file = File::create(path)?;
    write_rows_to(file, format.write_delimiter(), rows)?;

    tracing::info!(path = %path.display(), count = rows.len(), "Wrote table rows");

    Ok(())
}

/// Writes rows to any writer with the given delimiter.
///
/// The header row is the union of all row keys in first-seen order; cells
/// missing from a row are written empty.
///
/// ## Errors
/// Returns an error if writing to the underlying writer fails.
pub fn write_rows_to<W: Write>(writer: W, delimiter: u8, rows: &[Row]) -> TableResult<()> {
    let headers = collect_headers(rows);
    if headers.is_empty() {
        return Ok(());
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    csv_writer.write_record(&headers)?;

    for row in rows {
        let record: Vec<&str> = headers
            .iter()
            .map(|header| {
                row.iter()
                    .find(|(key, _)| key == header)
                    .map_or("", |(_, value)| value.as_str())
            })
            .collect();
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;

    Ok(())
}

/// Union of row keys in first-seen order.
fn collect_headers(rows: &[Row]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();

    for row in rows {
        for (key, _) in row {
            if !headers.iter().any(|header| header == key) {
                headers.push(key.clone());
            }
        }
    }

    headers
}
