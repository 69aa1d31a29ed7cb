//! Table ⇄ vCard conversion.

use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use tabcard_core::config::Settings;
use tabcard_core::contact::ContactRecord;
use tabcard_core::fields::Row;
use tabcard_rfc::rfc::vcard::{decode_all, encode_all};
use tabcard_table::{TableFormat, read_rows, write_rows};

const VCF_EXTENSION: &str = "vcf";

/// Converts between a table file and a vCard file.
///
/// The direction comes from the extension pair: table → `.vcf` encodes,
/// `.vcf` → table decodes. Anything else is a configuration error, raised
/// before any file is read or written.
///
/// ## Errors
/// Returns an error for unsupported extension pairs, unreadable input, or
/// unwritable output.
pub fn run(
    input: &Path,
    output: &Path,
    delimiter: Option<char>,
    settings: &Settings,
) -> anyhow::Result<()> {
    let delimiter = delimiter
        .map(|c| u8::try_from(c).context("delimiter must be a single-byte character"))
        .transpose()?;

    match (is_vcf(input), is_vcf(output)) {
        (false, true) => table_to_vcf(input, output, delimiter, settings),
        (true, false) => vcf_to_table(input, output),
        (true, true) => bail!("both sides are vCard files, nothing to convert"),
        (false, false) => bail!("one side of the conversion must be a .vcf file"),
    }
}

fn is_vcf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(VCF_EXTENSION))
}

fn table_to_vcf(
    input: &Path,
    output: &Path,
    delimiter: Option<u8>,
    settings: &Settings,
) -> anyhow::Result<()> {
    let rows = read_rows(input, delimiter, settings.convert.fallback_delimiter_byte())
        .with_context(|| format!("failed to read {}", input.display()))?;

    let records: Vec<ContactRecord> = rows.iter().map(|row| ContactRecord::from_row(row)).collect();

    fs::write(output, encode_all(&records))
        .with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(count = records.len(), output = %output.display(), "Wrote vCard document");

    Ok(())
}

fn vcf_to_table(input: &Path, output: &Path) -> anyhow::Result<()> {
    // Validate the target extension before doing any conversion work.
    TableFormat::from_path(output)?;

    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let records = decode_all(&text);
    let rows: Vec<Row> = records.iter().map(ContactRecord::to_row).collect();

    write_rows(output, &rows).with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(count = records.len(), output = %output.display(), "Wrote table document");

    Ok(())
}
