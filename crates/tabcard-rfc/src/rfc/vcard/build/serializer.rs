//! vCard 3.0 encoder.

use tabcard_core::constants::VCARD_VERSION;
use tabcard_core::contact::ContactRecord;

use super::escape::escape_text;

/// Encodes one record as a `BEGIN:VCARD` .. `END:VCARD` block.
///
/// Properties are emitted in a fixed order: N, FN, TEL lines in record
/// order, EMAIL lines, then ORG, TITLE, ADR, and NOTE when present. Every
/// value passes through the escaper. Pure function of its input; absent
/// optional fields are simply omitted.
#[must_use]
pub fn encode(record: &ContactRecord) -> String {
    let mut lines: Vec<String> = vec![
        "BEGIN:VCARD".to_string(),
        format!("VERSION:{VCARD_VERSION}"),
        format!(
            "N:{};{};;;",
            escape_text(&record.family_name),
            escape_text(&record.given_name)
        ),
        format!("FN:{}", escape_text(&record.display_name())),
    ];

    for phone in &record.phones {
        lines.push(format!(
            "TEL;TYPE={}:{}",
            phone.label,
            escape_text(&phone.number)
        ));
    }

    for email in &record.emails {
        lines.push(format!("EMAIL;TYPE=INTERNET:{}", escape_text(email)));
    }

    if !record.org.is_empty() {
        lines.push(format!("ORG:{}", escape_text(&record.org)));
    }
    if !record.title.is_empty() {
        lines.push(format!("TITLE:{}", escape_text(&record.title)));
    }

    if record.has_address() {
        lines.push(format!(
            "ADR;TYPE=HOME:;;{};{};{};{};{}",
            escape_text(&record.street),
            escape_text(&record.city),
            escape_text(&record.region),
            escape_text(&record.postal),
            escape_text(&record.country)
        ));
    }

    if !record.note.is_empty() {
        lines.push(format!("NOTE:{}", escape_text(&record.note)));
    }

    lines.push("END:VCARD".to_string());

    lines.join("\n")
}

/// Encodes a sequence of records as one document.
///
/// Blocks join with a single newline; the trailing newline is present iff
/// the sequence is non-empty.
#[must_use]
pub fn encode_all(records: &[ContactRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut output = records.iter().map(encode).collect::<Vec<_>>().join("\n");
    output.push('\n');
    output
}
