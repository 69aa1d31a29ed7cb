use thiserror::Error;

/// Table adapter errors
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Unsupported table extension: {0:?} (use csv, tsv, or txt)")]
    UnsupportedExtension(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type TableResult<T> = std::result::Result<T, TableError>;
