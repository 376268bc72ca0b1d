//! Declarative field rules.
//!
//! A rule table is an ordered `&[FieldRule]` built from `const fn`
//! constructors, so every entity schema is plain static data.

use crate::value::FieldValue;

/// The base type a field's value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Free text.
    Text,
    /// A signed whole number.
    Integer,
    /// A decimal number.
    Decimal,
    /// `true` or `false`.
    Boolean,
    /// Text that must be a syntactically valid email address.
    Email,
    /// Text restricted to one of the listed literals (case-sensitive).
    Choice(&'static [&'static str]),
}

impl FieldType {
    /// Label used for this type in `TypeMismatch` errors.
    ///
    /// Email and choice fields are text on the wire, so a non-string value
    /// is reported against `"text"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text | Self::Email | Self::Choice(_) => "text",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
        }
    }
}

/// A restriction narrower than the field's base type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Text must contain at least one character.
    NonEmpty,
    /// Inclusive integer range; `None` leaves that side open.
    IntRange { min: Option<i64>, max: Option<i64> },
    /// Inclusive decimal range; `None` leaves that side open.
    DecimalRange { min: Option<f64>, max: Option<f64> },
}

/// Value substituted when an optional field is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Unset,
    Boolean(bool),
    Text(&'static str),
}

impl FieldDefault {
    #[must_use]
    pub fn to_value(self) -> FieldValue {
        match self {
            Self::Unset => FieldValue::Unset,
            Self::Boolean(b) => FieldValue::Boolean(b),
            Self::Text(s) => FieldValue::Text(s.to_owned()),
        }
    }
}

/// One declared field of an entity schema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
    pub default: FieldDefault,
    pub constraint: Option<Constraint>,
    pub description: &'static str,
}

impl FieldRule {
    /// A field that must be present in every record.
    #[must_use]
    pub const fn required(name: &'static str, ty: FieldType, description: &'static str) -> Self {
        Self {
            name,
            ty,
            required: true,
            default: FieldDefault::Unset,
            constraint: None,
            description,
        }
    }

    /// A field that may be absent; defaults to unset.
    #[must_use]
    pub const fn optional(name: &'static str, ty: FieldType, description: &'static str) -> Self {
        Self {
            name,
            ty,
            required: false,
            default: FieldDefault::Unset,
            constraint: None,
            description,
        }
    }

    /// Replace the default used when the field is absent.
    #[must_use]
    pub const fn with_default(self, default: FieldDefault) -> Self {
        Self { default, ..self }
    }

    /// Attach a constraint checked after type coercion.
    #[must_use]
    pub const fn constrained(self, constraint: Constraint) -> Self {
        Self {
            constraint: Some(constraint),
            ..self
        }
    }

    /// Whether an explicit `null` is accepted as "unset".
    ///
    /// Only optional fields whose default is unset are nullable; fields with
    /// a concrete default (flags, statuses) must hold a real value.
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        !self.required && matches!(self.default, FieldDefault::Unset)
    }
}
