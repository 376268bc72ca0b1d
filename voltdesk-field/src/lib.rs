//! Field-level validation primitives for Voltdesk records.
//!
//! This crate is the single source of truth for how one raw field value is
//! checked: its type, coercion, constraints and defaults, and the errors a
//! rejection produces. Entity schemas in `voltdesk-schema` are ordered tables
//! of [`FieldRule`]s fed through [`check_field`].

mod check;
mod email;
mod error;
mod rule;
mod value;

pub use check::check_field;
pub use email::{EMAIL_MAX_LENGTH, LOCAL_PART_MAX_LENGTH, is_valid_email};
pub use error::{Bound, Limit, ValidationError, json_type_name};
pub use rule::{Constraint, FieldDefault, FieldRule, FieldType};
pub use value::FieldValue;

/// Storage collection name for an entity type name.
///
/// The persistence layer routes records by the lower-cased type name:
/// `User` is stored in `user`.
#[must_use]
pub fn collection_name(type_name: &str) -> String {
    type_name.to_lowercase()
}
