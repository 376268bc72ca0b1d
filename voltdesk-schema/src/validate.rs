//! The schema validator.
//!
//! Validation is a pure, single-pass function from a raw record to either a
//! [`ValidatedRecord`] or the first [`ValidationError`] encountered:
//!
//! 1. Declared fields are checked in declaration order (presence, type,
//!    constraint), defaults are substituted for absent optional fields.
//! 2. Keys the schema does not declare are rejected with
//!    [`ValidationError::UnknownField`], naming the lexicographically first
//!    undeclared key.
//!
//! The same fail-fast order applies to every entity kind.

use serde_json::{Map, Value};
use tracing::{debug, trace};
use voltdesk_field::{ValidationError, check_field, json_type_name};

use crate::entity::EntityKind;
use crate::record::ValidatedRecord;

/// Validate a raw record against the schema of `kind`.
///
/// `raw` is typically a deserialized JSON request body and must be an object.
///
/// # Errors
/// Returns [`ValidationError::NotARecord`] if `raw` is not an object, or the
/// first field-level error otherwise (see [`validate_map`]).
pub fn validate(kind: EntityKind, raw: &Value) -> Result<ValidatedRecord, ValidationError> {
    let result = match raw {
        Value::Object(map) => validate_fields(kind, map),
        other => Err(ValidationError::NotARecord {
            found: json_type_name(other),
        }),
    };
    log_outcome(kind, &result);
    result
}

/// Validate an already-unpacked field map against the schema of `kind`.
///
/// # Errors
/// Returns the first of: [`ValidationError::MissingField`],
/// [`ValidationError::TypeMismatch`], [`ValidationError::RangeViolation`],
/// [`ValidationError::InvalidEnumValue`], [`ValidationError::InvalidFormat`]
/// in field declaration order, then [`ValidationError::UnknownField`] for the
/// lexicographically first undeclared key.
pub fn validate_map(
    kind: EntityKind,
    raw: &Map<String, Value>,
) -> Result<ValidatedRecord, ValidationError> {
    let result = validate_fields(kind, raw);
    log_outcome(kind, &result);
    result
}

fn validate_fields(
    kind: EntityKind,
    raw: &Map<String, Value>,
) -> Result<ValidatedRecord, ValidationError> {
    let rules = kind.rules();

    let mut fields = Vec::with_capacity(rules.len());
    for rule in rules {
        let value = check_field(rule, raw.get(rule.name))?;
        fields.push((rule.name, value));
    }

    // Map iteration order depends on serde_json features; pick the smallest key.
    if let Some(unknown) = raw.keys().filter(|key| kind.rule(key).is_none()).min() {
        return Err(ValidationError::UnknownField {
            field: unknown.clone(),
        });
    }

    Ok(ValidatedRecord::new(kind, fields))
}

fn log_outcome(kind: EntityKind, result: &Result<ValidatedRecord, ValidationError>) {
    match result {
        Ok(_) => trace!(%kind, "record validated"),
        Err(err) => debug!(
            %kind,
            field = err.field().unwrap_or("-"),
            code = err.code(),
            "record rejected: {err}"
        ),
    }
}
