//! Round-trip decoding and encoding tests.
//!
//! These tests verify that supported contact data survives a decode/encode
//! cycle and that re-encoding decoded output is a fixed point.

use tabcard_core::contact::{ContactRecord, Phone, PhoneLabel};

use super::fixtures::*;
use crate::rfc::vcard::build::encode_all;
use crate::rfc::vcard::parse::decode_all;

/// Decode a document, re-encode it, decode again, and compare the records.
fn round_trip(input: &str) -> Result<(), String> {
    let first = decode_all(input);

    let serialized = encode_all(&first);

    let second = decode_all(&serialized);

    if first.len() != second.len() {
        return Err(format!(
            "Record count mismatch: {} vs {}",
            first.len(),
            second.len()
        ));
    }

    for (a, b) in first.iter().zip(&second) {
        if a != b {
            return Err(format!("Record mismatch:\n{a:#?}\nvs\n{b:#?}\n{serialized}"));
        }
    }

    Ok(())
}

#[test_log::test]
fn round_trip_minimal_card() {
    round_trip(CARD_MINIMAL).expect("round trip should succeed");
}

#[test_log::test]
fn round_trip_full_card() {
    round_trip(CARD_FULL).expect("round trip should succeed");
}

#[test_log::test]
fn round_trip_two_cards() {
    round_trip(TWO_CARDS).expect("round trip should succeed");
}

#[test_log::test]
fn round_trip_folded_card() {
    round_trip(CARD_FOLDED).expect("round trip should succeed");
}

#[test_log::test]
fn folded_and_unfolded_decode_identically() {
    assert_eq!(decode_all(CARD_FOLDED), decode_all(CARD_UNFOLDED));
}

#[test_log::test]
fn full_card_fields_survive() {
    let records = decode_all(CARD_FULL);
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.full_name, "Budi Santoso");
    assert_eq!(record.family_name, "Santoso");
    assert_eq!(record.given_name, "Budi");
    assert_eq!(record.org, "Acme, Inc");
    assert_eq!(record.title, "Engineer");
    assert_eq!(record.note, "Likes long walks\nand short vCards");
    assert_eq!(record.street, "Jl. Sudirman 1");
    assert_eq!(record.country, "ID");
    assert_eq!(record.phones.len(), 5);
    assert_eq!(
        record.phones[4],
        Phone::new(PhoneLabel::Custom("OFFICE".to_string()), "+62855555")
    );
    assert_eq!(
        record.emails,
        vec!["budi@example.com", "budi.alt@example.com"]
    );
}

#[test_log::test]
fn encode_decode_encode_is_fixed_point() {
    let records = vec![
        ContactRecord {
            given_name: "John".to_string(),
            family_name: "Doe".to_string(),
            phones: vec![
                Phone::new(PhoneLabel::Voice, "+6281234"),
                Phone::new(PhoneLabel::Custom("OFFICE".to_string()), "555"),
            ],
            emails: vec!["j@example.com".to_string()],
            org: "Acme, Inc".to_string(),
            note: "line one\nline two".to_string(),
            ..ContactRecord::default()
        },
        ContactRecord {
            full_name: "Jane".to_string(),
            city: "Jakarta".to_string(),
            ..ContactRecord::default()
        },
    ];

    let once = encode_all(&records);
    let again = encode_all(&decode_all(&once));
    assert_eq!(once, again);
}

#[test_log::test]
fn basic_record_emits_expected_lines() {
    let record = ContactRecord {
        given_name: "John".to_string(),
        family_name: "Doe".to_string(),
        phones: vec![Phone::new(PhoneLabel::Voice, "+6281234")],
        emails: vec!["j@example.com".to_string()],
        ..ContactRecord::default()
    };

    let output = encode_all(&[record]);
    assert!(output.contains("N:Doe;John;;;"));
    assert!(output.contains("FN:John Doe"));
    assert!(output.contains("TEL;TYPE=VOICE:+6281234"));
    assert!(output.contains("EMAIL;TYPE=INTERNET:j@example.com"));
}
