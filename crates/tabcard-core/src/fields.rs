//! Canonical column vocabulary and the row ⇄ record mapping.
//!
//! This is the table-facing half of the field mapper: each canonical contact
//! attribute has a fixed column name, the four canonical phone slots map to
//! fixed labels, and any other `phone_<suffix>` column becomes a custom
//! label. The vCard-facing half lives in the codec crate, which emits and
//! recognizes the corresponding properties.

use crate::contact::{ContactRecord, Phone, PhoneLabel};

/// An ordered sequence of (header, cell) pairs, one table row.
pub type Row = Vec<(String, String)>;

pub const FULL_NAME: &str = "full_name";
pub const GIVEN_NAME: &str = "given_name";
pub const FAMILY_NAME: &str = "family_name";
pub const ORG: &str = "org";
pub const TITLE: &str = "title";
pub const STREET: &str = "street";
pub const CITY: &str = "city";
pub const REGION: &str = "region";
pub const POSTAL: &str = "postal";
pub const COUNTRY: &str = "country";
pub const NOTE: &str = "note";
pub const PHONE: &str = "phone";
pub const PHONE_MOBILE: &str = "phone_mobile";
pub const PHONE_HOME: &str = "phone_home";
pub const PHONE_WORK: &str = "phone_work";
pub const PHONE_PREFIX: &str = "phone_";
pub const EMAIL: &str = "email";
pub const EMAIL_ALT: &str = "email_alt";

/// Canonical phone slots in emission order.
const CANONICAL_PHONES: [(PhoneLabel, &str); 4] = [
    (PhoneLabel::Voice, PHONE),
    (PhoneLabel::Cell, PHONE_MOBILE),
    (PhoneLabel::Home, PHONE_HOME),
    (PhoneLabel::Work, PHONE_WORK),
];

/// Headers are matched case-insensitively with surrounding whitespace removed.
fn normalize(header: &str) -> String {
    header.trim().to_ascii_lowercase()
}

impl PhoneLabel {
    /// Maps a normalized column name to a phone label.
    ///
    /// The four canonical columns map to their fixed labels; any other
    /// `phone_<suffix>` column yields a custom label with the suffix
    /// uppercased. Columns outside the phone vocabulary return `None`.
    #[must_use]
    pub fn from_column(column: &str) -> Option<Self> {
        match column {
            PHONE => Some(Self::Voice),
            PHONE_MOBILE => Some(Self::Cell),
            PHONE_HOME => Some(Self::Home),
            PHONE_WORK => Some(Self::Work),
            other => other
                .strip_prefix(PHONE_PREFIX)
                .filter(|suffix| !suffix.is_empty())
                .map(|suffix| Self::Custom(suffix.to_ascii_uppercase())),
        }
    }

    /// Returns the column name this label maps back to.
    #[must_use]
    pub fn column(&self) -> String {
        match self {
            Self::Voice => PHONE.to_string(),
            Self::Cell => PHONE_MOBILE.to_string(),
            Self::Home => PHONE_HOME.to_string(),
            Self::Work => PHONE_WORK.to_string(),
            Self::Custom(label) => format!("{PHONE_PREFIX}{}", label.to_ascii_lowercase()),
        }
    }
}

impl ContactRecord {
    /// Builds a record from an ordered row of (header, cell) pairs.
    ///
    /// Canonical phone slots are read first, in the fixed order VOICE, CELL,
    /// HOME, WORK; remaining `phone_<suffix>` columns follow in row order.
    /// Empty cells are skipped.
    #[must_use]
    pub fn from_row(row: &[(String, String)]) -> Self {
        let cell = |key: &str| -> String {
            row.iter()
                .find(|(header, _)| normalize(header) == key)
                .map(|(_, value)| value.trim().to_string())
                .unwrap_or_default()
        };

        let mut record = Self {
            full_name: cell(FULL_NAME),
            given_name: cell(GIVEN_NAME),
            family_name: cell(FAMILY_NAME),
            org: cell(ORG),
            title: cell(TITLE),
            street: cell(STREET),
            city: cell(CITY),
            region: cell(REGION),
            postal: cell(POSTAL),
            country: cell(COUNTRY),
            note: cell(NOTE),
            ..Self::default()
        };

        for (label, column) in &CANONICAL_PHONES {
            let number = cell(column);
            if !number.is_empty() {
                record.phones.push(Phone::new(label.clone(), number));
            }
        }

        for (header, value) in row {
            let number = value.trim();
            if number.is_empty() {
                continue;
            }
            if let Some(label @ PhoneLabel::Custom(_)) = PhoneLabel::from_column(&normalize(header))
            {
                record.phones.push(Phone::new(label, number));
            }
        }

        for column in [EMAIL, EMAIL_ALT] {
            let value = cell(column);
            if !value.is_empty() {
                record.emails.push(value);
            }
        }

        record
    }

    /// Flattens the record back into a row.
    ///
    /// Phones group by label into their mapped columns, repeated labels
    /// joining with `"; "` in one cell. The first email fills `email`, any
    /// remaining join into `email_alt`.
    #[must_use]
    pub fn to_row(&self) -> Row {
        let mut row: Row = vec![
            (FULL_NAME.to_string(), self.full_name.clone()),
            (GIVEN_NAME.to_string(), self.given_name.clone()),
            (FAMILY_NAME.to_string(), self.family_name.clone()),
        ];

        let mut phone_columns: Vec<(String, Vec<&str>)> = Vec::new();
        for phone in &self.phones {
            let column = phone.label.column();
            if let Some((_, numbers)) = phone_columns.iter_mut().find(|(name, _)| *name == column)
            {
                numbers.push(&phone.number);
            } else {
                phone_columns.push((column, vec![&phone.number]));
            }
        }
        for (column, numbers) in phone_columns {
            row.push((column, numbers.join("; ")));
        }

        let mut emails = self.emails.iter();
        row.push((
            EMAIL.to_string(),
            emails.next().cloned().unwrap_or_default(),
        ));
        row.push((
            EMAIL_ALT.to_string(),
            emails.map(String::as_str).collect::<Vec<_>>().join("; "),
        ));

        row.push((ORG.to_string(), self.org.clone()));
        row.push((TITLE.to_string(), self.title.clone()));
        row.push((STREET.to_string(), self.street.clone()));
        row.push((CITY.to_string(), self.city.clone()));
        row.push((REGION.to_string(), self.region.clone()));
        row.push((POSTAL.to_string(), self.postal.clone()));
        row.push((COUNTRY.to_string(), self.country.clone()));
        row.push((NOTE.to_string(), self.note.clone()));

        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(header: &str, value: &str) -> (String, String) {
        (header.to_string(), value.to_string())
    }

    #[test]
    fn from_row_basic_fields() {
        let row = vec![
            pair("given_name", "John"),
            pair("family_name", "Doe"),
            pair("email", "j@example.com"),
            pair("phone", "+6281234"),
        ];
        let record = ContactRecord::from_row(&row);
        assert_eq!(record.given_name, "John");
        assert_eq!(record.family_name, "Doe");
        assert_eq!(record.emails, vec!["j@example.com"]);
        assert_eq!(record.phones, vec![Phone::new(PhoneLabel::Voice, "+6281234")]);
    }

    #[test]
    fn from_row_canonical_slots_before_custom() {
        // Row order puts the custom column first; canonical slots still win.
        let row = vec![
            pair("phone_office", "111"),
            pair("phone_mobile", "222"),
            pair("phone", "333"),
        ];
        let record = ContactRecord::from_row(&row);
        assert_eq!(
            record.phones,
            vec![
                Phone::new(PhoneLabel::Voice, "333"),
                Phone::new(PhoneLabel::Cell, "222"),
                Phone::new(PhoneLabel::Custom("OFFICE".to_string()), "111"),
            ]
        );
    }

    #[test]
    fn from_row_skips_empty_cells() {
        let row = vec![pair("phone", "  "), pair("email", "")];
        let record = ContactRecord::from_row(&row);
        assert!(record.phones.is_empty());
        assert!(record.emails.is_empty());
    }

    #[test]
    fn from_row_normalizes_headers() {
        let row = vec![pair(" Full_Name ", "Jane")];
        let record = ContactRecord::from_row(&row);
        assert_eq!(record.full_name, "Jane");
    }

    #[test]
    fn from_row_email_slots_in_order() {
        let row = vec![
            pair("email_alt", "second@example.com"),
            pair("email", "first@example.com"),
        ];
        let record = ContactRecord::from_row(&row);
        assert_eq!(
            record.emails,
            vec!["first@example.com", "second@example.com"]
        );
    }

    #[test]
    fn to_row_groups_repeated_labels() {
        let record = ContactRecord {
            phones: vec![
                Phone::new(PhoneLabel::Cell, "111"),
                Phone::new(PhoneLabel::Cell, "222"),
            ],
            ..ContactRecord::default()
        };
        let row = record.to_row();
        let cell = row
            .iter()
            .find(|(header, _)| header == "phone_mobile")
            .map(|(_, value)| value.as_str());
        assert_eq!(cell, Some("111; 222"));
    }

    #[test]
    fn to_row_custom_label_column() {
        let record = ContactRecord {
            phones: vec![Phone::new(PhoneLabel::Custom("OFFICE".to_string()), "555")],
            ..ContactRecord::default()
        };
        let row = record.to_row();
        assert!(row.iter().any(|(header, value)| header == "phone_office" && value == "555"));
    }

    #[test]
    fn row_round_trip() {
        let row = vec![
            pair("full_name", "John Doe"),
            pair("given_name", "John"),
            pair("family_name", "Doe"),
            pair("phone", "+6281234"),
            pair("phone_office", "777"),
            pair("email", "j@example.com"),
            pair("org", "Acme"),
        ];
        let record = ContactRecord::from_row(&row);
        let rebuilt = ContactRecord::from_row(&record.to_row());
        assert_eq!(record, rebuilt);
    }

    #[test]
    fn label_column_round_trip() {
        for label in [
            PhoneLabel::Voice,
            PhoneLabel::Cell,
            PhoneLabel::Home,
            PhoneLabel::Work,
            PhoneLabel::Custom("OFFICE".to_string()),
        ] {
            assert_eq!(PhoneLabel::from_column(&label.column()), Some(label));
        }
    }

    #[test]
    fn bare_phone_prefix_is_not_a_label() {
        assert_eq!(PhoneLabel::from_column("phone_"), None);
        assert_eq!(PhoneLabel::from_column("phones"), None);
    }
}
