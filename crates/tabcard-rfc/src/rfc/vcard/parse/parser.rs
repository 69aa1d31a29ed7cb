//! Tolerant vCard 3.0 document decoder.
//!
//! The decoder never aborts mid-document: malformed property lines are
//! skipped with a warning and unrecognized properties are ignored, so a
//! damaged block degrades to partial data rather than an error.

use tabcard_core::contact::{ContactRecord, Phone, PhoneLabel};

use crate::rfc::vcard::core::VCardParameter;

use super::lexer::{ContentLine, parse_content_line, split_lines};
use super::values::{parse_address, parse_structured_name, unescape_text};

const BLOCK_BEGIN: &str = "BEGIN:VCARD";
const BLOCK_END: &str = "END:VCARD";

/// Decodes every vCard block in a document.
///
/// The document splits on `BEGIN:VCARD`; each fragment that contains
/// `END:VCARD` is one block, fragments without it are dropped as truncated.
/// A document with no `BEGIN:VCARD` at all yields an empty vector, not an
/// error.
#[must_use]
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn decode_all(input: &str) -> Vec<ContactRecord> {
    let records: Vec<ContactRecord> = input
        .split(BLOCK_BEGIN)
        .skip(1) // text before the first BEGIN is never a block
        .filter(|fragment| fragment.contains(BLOCK_END))
        .map(decode_block)
        .collect();

    tracing::debug!(count = records.len(), "Decoded vCard document");

    records
}

/// Decodes one block's lines into a record.
fn decode_block(block: &str) -> ContactRecord {
    let mut record = ContactRecord::new();

    for (index, line) in split_lines(block).iter().enumerate() {
        match parse_content_line(line, index + 1) {
            Ok(content_line) => apply_line(&mut record, &content_line),
            Err(error) => {
                tracing::warn!(%error, "Skipping malformed property line");
            }
        }
    }

    // FN must never be empty; derive it from N components if needed.
    record.full_name = record.display_name();

    record
}

/// Ordered property classification: the first matching kind consumes the
/// line, everything else is ignored.
fn apply_line(record: &mut ContactRecord, line: &ContentLine) {
    match line.name.as_str() {
        "FN" => record.full_name = unescape_text(&line.value),
        "N" => {
            let name = parse_structured_name(&line.value);
            record.family_name = name.family;
            record.given_name = name.given;
        }
        "TEL" => {
            if !line.value.is_empty() {
                record
                    .phones
                    .push(Phone::new(tel_label(line), unescape_text(&line.value)));
            }
        }
        "EMAIL" => {
            if !line.value.is_empty() {
                record.emails.push(unescape_text(&line.value));
            }
        }
        "ORG" => record.org = unescape_text(&line.value),
        "TITLE" => record.title = unescape_text(&line.value),
        "ADR" => {
            let address = parse_address(&line.value);
            record.street = address.street;
            record.city = address.city;
            record.region = address.region;
            record.postal = address.postal;
            record.country = address.country;
        }
        "NOTE" => record.note = unescape_text(&line.value),
        _ => {}
    }
}

/// Resolves a `TEL` line's label from its `TYPE` parameter, VOICE if absent.
fn tel_label(line: &ContentLine) -> PhoneLabel {
    line.params
        .iter()
        .find(|param| param.name == "TYPE")
        .and_then(VCardParameter::value)
        .map_or(PhoneLabel::Voice, PhoneLabel::from_type)
}
