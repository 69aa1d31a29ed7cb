//! Delimiter sniffing for ambiguous delimited text.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::TableResult;

/// Candidate delimiters, tried by frequency. Ties resolve to the earliest
/// candidate in this list.
pub const CANDIDATES: [u8; 5] = [b'\t', b';', b',', b'|', b':'];

/// Number of leading bytes inspected.
pub const SAMPLE_LEN: u64 = 4096;

/// Picks the most frequent candidate delimiter in the sample.
///
/// Returns the fallback when no candidate appears at all. The fallback is a
/// policy choice, not something derived from the data.
#[must_use]
pub fn detect_delimiter(sample: &[u8], fallback: u8) -> u8 {
    let mut best = fallback;
    let mut best_count = 0usize;

    for candidate in CANDIDATES {
        let count = sample.iter().filter(|&&b| b == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }

    best
}

/// Sniffs the delimiter from a file's leading sample.
///
/// ## Errors
/// Returns an error if the file cannot be opened or read.
pub fn sniff_path(path: &Path, fallback: u8) -> TableResult<u8> {
    let mut sample = Vec::new();
    File::open(path)?.take(SAMPLE_LEN).read_to_end(&mut sample)?;

    let delimiter = detect_delimiter(&sample, fallback);

    tracing::debug!(
        path = %path.display(),
        delimiter = %char::from(delimiter),
        "Sniffed delimiter"
    );

    Ok(delimiter)
}
