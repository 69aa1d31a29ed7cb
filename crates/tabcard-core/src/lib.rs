//! Shared model and plumbing for the tabcard converter.
//!
//! This crate holds the pieces every other crate agrees on: the
//! [`contact::ContactRecord`] exchanged between the table adapter and the
//! vCard codec, the canonical column vocabulary in [`fields`], and
//! configuration loading.

pub mod config;
pub mod constants;
pub mod contact;
pub mod fields;
pub mod util;
