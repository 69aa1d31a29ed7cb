//! Supported table file formats, dispatched by extension.

use std::path::Path;

use crate::error::{TableError, TableResult};

/// A supported delimited-text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated values.
    Csv,
    /// Tab-separated values; the delimiter is never sniffed.
    Tsv,
    /// Plain delimited text with an unknown delimiter.
    Txt,
}

impl TableFormat {
    /// Resolves the format from a path's extension.
    ///
    /// ## Errors
    /// Returns [`TableError::UnsupportedExtension`] for anything other than
    /// `csv`, `tsv`, or `txt`, so conversion fails before any work begins.
    pub fn from_path(path: &Path) -> TableResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "txt" => Ok(Self::Txt),
            _ => Err(TableError::UnsupportedExtension(extension)),
        }
    }

    /// Returns the fixed delimiter for this format, if it has one.
    ///
    /// `Csv` and `Txt` return `None` on the read path, where the actual
    /// delimiter is sniffed from the file contents.
    #[must_use]
    pub fn fixed_delimiter(self) -> Option<u8> {
        match self {
            Self::Tsv => Some(b'\t'),
            Self::Csv | Self::Txt => None,
        }
    }

    /// Returns the delimiter to use when writing this format.
    #[must_use]
    pub fn write_delimiter(self) -> u8 {
        match self {
            Self::Tsv => b'\t',
            Self::Csv | Self::Txt => b',',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path_known_extensions() {
        assert_eq!(
            TableFormat::from_path(Path::new("a.csv")).unwrap(),
            TableFormat::Csv
        );
        assert_eq!(
            TableFormat::from_path(Path::new("a.TSV")).unwrap(),
            TableFormat::Tsv
        );
        assert_eq!(
            TableFormat::from_path(Path::new("dir/a.txt")).unwrap(),
            TableFormat::Txt
        );
    }

    #[test]
    fn from_path_unsupported_extension() {
        let result = TableFormat::from_path(Path::new("contacts.xlsx"));
        assert!(matches!(
            result,
            Err(TableError::UnsupportedExtension(ext)) if ext == "xlsx"
        ));
    }

    #[test]
    fn from_path_missing_extension() {
        assert!(TableFormat::from_path(Path::new("contacts")).is_err());
    }

    #[test]
    fn delimiters() {
        assert_eq!(TableFormat::Tsv.fixed_delimiter(), Some(b'\t'));
        assert_eq!(TableFormat::Csv.fixed_delimiter(), None);
        assert_eq!(TableFormat::Txt.write_delimiter(), b',');
    }
}
