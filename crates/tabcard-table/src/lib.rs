//! Table adapter: delimited-text reading and writing for contact rows.
//!
//! This crate never touches vCard text. It produces and consumes the
//! ordered (header, cell) rows defined in `tabcard-core`, sniffing the
//! delimiter of ambiguous input and failing fast on unsupported file
//! extensions.

pub mod error;
pub mod format;
pub mod reader;
pub mod sniff;
pub mod writer;

pub use error::{TableError, TableResult};
pub use format::TableFormat;
pub use reader::read_rows;
pub use writer::write_rows;
