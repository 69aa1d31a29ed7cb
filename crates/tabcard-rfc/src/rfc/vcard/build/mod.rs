//! vCard serialization.
//!
//! This module provides the serializers for vCard content:
//! - Escape: text value escaping
//! - Serializer: record and document encoding in a fixed property order

mod escape;
mod serializer;

pub use escape::escape_text;
pub use serializer::{encode, encode_all};
