//! Wire-format implementations for the tabcard converter.
//!
//! Currently this is the vCard 3.0 codec in [`rfc::vcard`]: a tolerant
//! decoder from vCard text to [`tabcard_core::contact::ContactRecord`]s and
//! a deterministic encoder back.

pub mod rfc;
