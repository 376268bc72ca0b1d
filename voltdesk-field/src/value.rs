//! Coerced field values.

use serde_json::Value;

/// A field value after type coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// The field holds no value.
    Unset,
    Text(String),
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
}

impl FieldValue {
    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Decimal(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// JSON form of the value; `Unset` becomes `null`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Unset => Value::Null,
            Self::Text(s) => Value::String(s.clone()),
            Self::Integer(n) => Value::from(*n),
            // Coercion only ever produces finite decimals.
            Self::Decimal(n) => serde_json::Number::from_f64(*n).map_or(Value::Null, Value::Number),
            Self::Boolean(b) => Value::Bool(*b),
        }
    }
}
