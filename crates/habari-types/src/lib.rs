//! Shared types for habari.
//!
//! [`Metadata`] is the record produced by the parser. The [`Record`] trait and
//! the [`define_record!`] macro give renderers a declaration-ordered view of a
//! record's fields without naming any of them.

mod record;

pub mod field;
pub mod metadata;

pub use field::{AsFieldValue, Field, FieldValue, Record};
pub use metadata::Metadata;
