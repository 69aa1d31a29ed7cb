//! The canonical in-memory contact record.
//!
//! A [`ContactRecord`] is built transiently per table row (encode path) or
//! per vCard block (decode path) and discarded once written to its target
//! representation. All text fields use the empty string for "absent".

use crate::constants::PLACEHOLDER_NAME;

/// A single contact, as exchanged between the table adapter and the codec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    pub full_name: String,
    pub given_name: String,
    pub family_name: String,
    pub org: String,
    pub title: String,
    pub street: String,
    pub city: String,
    pub region: String,
    pub postal: String,
    pub country: String,
    pub note: String,
    /// Phone numbers in source order, one per `TEL` line.
    pub phones: Vec<Phone>,
    /// Email addresses in source order, one per `EMAIL` line.
    pub emails: Vec<String>,
}

impl ContactRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the name to display for this contact.
    ///
    /// Falls back to `given_name family_name` when `full_name` is empty, and
    /// to the fixed placeholder when both are.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = self.full_name.trim();
        if !full.is_empty() {
            return full.to_string();
        }

        let derived = format!("{} {}", self.given_name.trim(), self.family_name.trim());
        let derived = derived.trim();
        if derived.is_empty() {
            PLACEHOLDER_NAME.to_string()
        } else {
            derived.to_string()
        }
    }

    /// Returns whether any of the five address components is non-empty.
    #[must_use]
    pub fn has_address(&self) -> bool {
        !self.street.is_empty()
            || !self.city.is_empty()
            || !self.region.is_empty()
            || !self.postal.is_empty()
            || !self.country.is_empty()
    }
}

/// One phone entry: a type label and the number text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    pub label: PhoneLabel,
    pub number: String,
}

impl Phone {
    /// Creates a phone entry.
    #[must_use]
    pub fn new(label: PhoneLabel, number: impl Into<String>) -> Self {
        Self {
            label,
            number: number.into(),
        }
    }
}

/// Phone type label: the four canonical slots plus open-ended custom labels.
///
/// Custom labels are stored uppercased, matching how they appear in the
/// `TYPE` parameter on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneLabel {
    Voice,
    Cell,
    Home,
    Work,
    Custom(String),
}

impl PhoneLabel {
    /// Parses a `TYPE` parameter value into a label.
    ///
    /// Unknown values become [`PhoneLabel::Custom`], uppercased.
    #[must_use]
    pub fn from_type(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "VOICE" => Self::Voice,
            "CELL" => Self::Cell,
            "HOME" => Self::Home,
            "WORK" => Self::Work,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Returns the `TYPE` parameter value for this label.
    #[must_use]
    pub fn as_type(&self) -> &str {
        match self {
            Self::Voice => "VOICE",
            Self::Cell => "CELL",
            Self::Home => "HOME",
            Self::Work => "WORK",
            Self::Custom(label) => label,
        }
    }
}

impl std::fmt::Display for PhoneLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_type())
    }
}
