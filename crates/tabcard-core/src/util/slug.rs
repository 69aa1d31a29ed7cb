//! Slug generation for filesystem-safe file names.
//!
//! ## Summary
//! Generates stable, filesystem-safe slugs from contact names, used when
//! splitting a multi-contact document into one file per contact.

/// Generate a filesystem-safe slug from a name.
///
/// Converts to lowercase, replaces spaces and special characters with
/// hyphens, collapses multiple hyphens, and trims edge hyphens.
///
/// Examples:
/// - "John Doe" -> "john-doe"
/// - "Acme, Inc." -> "acme-inc"
#[must_use]
pub fn generate_slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
