//! Split a multi-contact document into one file per contact.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tabcard_core::util::slug::generate_slug;
use tabcard_rfc::rfc::vcard::{decode_all, encode_all};

/// Writes each contact of `input` to its own `.vcf` file under `out_dir`.
///
/// Files are named `NNN-<slug>.vcf` from the contact's position and full
/// name, so the output sorts in source order.
///
/// ## Errors
/// Returns an error if the input cannot be read or an output file cannot be
/// written.
pub fn run(input: &Path, out_dir: &Path) -> anyhow::Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let records = decode_all(&text);

    if records.is_empty() {
        tracing::warn!(input = %input.display(), "No contacts found, nothing to split");
        return Ok(());
    }

    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    for (index, record) in records.iter().enumerate() {
        let target = out_dir.join(file_name(index, &record.full_name));
        fs::write(&target, encode_all(std::slice::from_ref(record)))
            .with_context(|| format!("failed to write {}", target.display()))?;
    }

    tracing::info!(
        count = records.len(),
        out_dir = %out_dir.display(),
        "Split contacts"
    );

    Ok(())
}

fn file_name(index: usize, full_name: &str) -> String {
    let slug = generate_slug(full_name);
    let slug = if slug.is_empty() { "contact" } else { &slug };
    format!("{:03}-{slug}.vcf", index + 1)
}
