/// Placeholder used when a contact has neither a full name nor any name
/// components to derive one from. Both the encoder and the decoder fall back
/// to it, so `FN` is never empty.
pub const PLACEHOLDER_NAME: &str = "no name";

/// The only vCard version this system reads and writes.
pub const VCARD_VERSION: &str = "3.0";
