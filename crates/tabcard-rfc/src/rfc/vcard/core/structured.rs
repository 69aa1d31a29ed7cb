//! Structured vCard property values.
//!
//! These types carry the decoded components of the N and ADR properties
//! before they are folded into a contact record.

/// Structured name (N property).
///
/// The wire form has five semicolon-delimited components; only the first
/// two carry data in this system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    /// Family name (surname).
    pub family: String,
    /// Given name (first name).
    pub given: String,
}

/// Address (ADR property).
///
/// The wire form has seven components; the first two (post office box,
/// extended address) are always empty in this system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    /// Locality.
    pub city: String,
    /// State or province.
    pub region: String,
    pub postal: String,
    pub country: String,
}
