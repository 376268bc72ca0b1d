//! The validation error taxonomy shared by every entity schema.

use std::fmt;

use thiserror::Error;

/// A numeric limit as declared in a rule table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Limit {
    Integer(i64),
    Decimal(f64),
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(n) => write!(f, "{n}"),
        }
    }
}

/// The side of a constraint that a value fell outside of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Inclusive lower bound.
    AtLeast(Limit),
    /// Inclusive upper bound.
    AtMost(Limit),
    /// Minimum length of a text value, in characters.
    MinLength(usize),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtLeast(limit) => write!(f, ">= {limit}"),
            Self::AtMost(limit) => write!(f, "<= {limit}"),
            Self::MinLength(1) => f.write_str("at least 1 character long"),
            Self::MinLength(n) => write!(f, "at least {n} characters long"),
        }
    }
}

/// Why a raw record was rejected.
///
/// Every variant is a local, recoverable failure. The `Display` output is a
/// sentence suitable for showing to whoever submitted the record.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// A required field is absent.
    #[error("missing required field '{field}'")]
    MissingField {
        /// Declared field name.
        field: &'static str,
    },

    /// A field is present but its value has the wrong type.
    #[error("field '{field}' must be of type {expected}")]
    TypeMismatch {
        /// Declared field name.
        field: &'static str,
        /// Label of the expected type (e.g. `integer`).
        expected: &'static str,
    },

    /// A bounded field holds a value outside its bounds.
    #[error("field '{field}' must be {bound}")]
    RangeViolation {
        /// Declared field name.
        field: &'static str,
        /// The bound that was violated.
        bound: Bound,
    },

    /// An enumerated field holds a value that is not one of its literals.
    #[error("field '{field}' must be one of {}", quoted(.allowed))]
    InvalidEnumValue {
        /// Declared field name.
        field: &'static str,
        /// The accepted literals, in declaration order.
        allowed: &'static [&'static str],
    },

    /// A formatted field (e.g. an email address) is syntactically invalid.
    #[error("field '{field}' is not a valid {format}")]
    InvalidFormat {
        /// Declared field name.
        field: &'static str,
        /// Human name of the expected format.
        format: &'static str,
    },

    /// The record carries a field that the schema does not declare.
    #[error("unknown field '{field}'")]
    UnknownField {
        /// The undeclared key as found in the input.
        field: String,
    },

    /// The raw input is not a field/value mapping at all.
    #[error("record must be an object, got {found}")]
    NotARecord {
        /// JSON type of the input.
        found: &'static str,
    },
}

impl ValidationError {
    /// Name of the offending field, if the error concerns a single field.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field }
            | Self::TypeMismatch { field, .. }
            | Self::RangeViolation { field, .. }
            | Self::InvalidEnumValue { field, .. }
            | Self::InvalidFormat { field, .. } => Some(field),
            Self::UnknownField { field } => Some(field.as_str()),
            Self::NotARecord { .. } => None,
        }
    }

    /// Stable machine-readable code for the error kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::RangeViolation { .. } => "range_violation",
            Self::InvalidEnumValue { .. } => "invalid_enum_value",
            Self::InvalidFormat { .. } => "invalid_format",
            Self::UnknownField { .. } => "unknown_field",
            Self::NotARecord { .. } => "not_a_record",
        }
    }
}

fn quoted(allowed: &[&str]) -> String {
    allowed
        .iter()
        .map(|literal| format!("'{literal}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// JSON type name of a raw value, for error messages.
#[must_use]
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
