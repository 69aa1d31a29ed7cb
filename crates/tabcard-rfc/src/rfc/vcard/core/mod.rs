//! Core vCard content-line types.

mod parameter;
mod structured;

pub use parameter::VCardParameter;
pub use structured::{Address, StructuredName};
