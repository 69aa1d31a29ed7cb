//! Merge several vCard documents into one.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tabcard_rfc::rfc::vcard::{decode_all, encode_all};

/// Decodes every input in argument order and writes one merged document.
///
/// Inputs without decodable contacts contribute nothing but are not an
/// error, matching the codec's tolerant posture.
///
/// ## Errors
/// Returns an error if an input cannot be read or the output cannot be
/// written.
pub fn run(inputs: &[PathBuf], output: &Path) -> anyhow::Result<()> {
    let mut records = Vec::new();

    for input in inputs {
        let text = fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?;

        let decoded = decode_all(&text);
        tracing::debug!(input = %input.display(), count = decoded.len(), "Decoded input");
        records.extend(decoded);
    }

    fs::write(output, encode_all(&records))
        .with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(count = records.len(), output = %output.display(), "Merged contacts");

    Ok(())
}
