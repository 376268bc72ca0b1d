//! Checking a single raw value against its field rule.

use serde_json::{Number, Value};

use crate::email::is_valid_email;
use crate::error::{Bound, Limit, ValidationError};
use crate::rule::{Constraint, FieldRule, FieldType};
use crate::value::FieldValue;

/// Strings accepted as boolean `true`, compared case-insensitively.
const TRUTHY: &[&str] = &["true", "1", "yes", "on", "t", "y"];

/// Strings accepted as boolean `false`, compared case-insensitively.
const FALSY: &[&str] = &["false", "0", "no", "off", "f", "n"];

/// Check one field of a raw record.
///
/// `raw` is `None` when the key is absent from the record. On success the
/// coerced value is returned, or the rule's default for an absent optional
/// field.
///
/// # Errors
/// Returns the first [`ValidationError`] the value triggers: missing,
/// wrong type, out of range, not an allowed literal, or badly formatted.
pub fn check_field(rule: &FieldRule, raw: Option<&Value>) -> Result<FieldValue, ValidationError> {
    let value = match raw {
        None if rule.required => {
            return Err(ValidationError::MissingField { field: rule.name });
        }
        None => return Ok(rule.default.to_value()),
        Some(Value::Null) if rule.is_nullable() => return Ok(FieldValue::Unset),
        Some(value) => value,
    };

    let coerced = coerce(rule, value)?;
    apply_constraint(rule, coerced)
}

fn type_mismatch(rule: &FieldRule) -> ValidationError {
    ValidationError::TypeMismatch {
        field: rule.name,
        expected: rule.ty.label(),
    }
}

/// Integers are widened to `i128` so that values outside `i64` still reach the
/// range check instead of failing as a type error.
enum Coerced {
    Text(String),
    Integer(i128),
    Decimal(f64),
    Boolean(bool),
}

fn coerce(rule: &FieldRule, value: &Value) -> Result<Coerced, ValidationError> {
    let coerced = match rule.ty {
        FieldType::Text | FieldType::Email | FieldType::Choice(_) => {
            value.as_str().map(|s| Coerced::Text(s.to_owned()))
        }
        FieldType::Integer => integer_from(value).map(Coerced::Integer),
        FieldType::Decimal => decimal_from(value).map(Coerced::Decimal),
        FieldType::Boolean => boolean_from(value).map(Coerced::Boolean),
    };
    coerced.ok_or_else(|| type_mismatch(rule))
}

fn integer_from(value: &Value) -> Option<i128> {
    match value {
        Value::Number(n) => integer_from_number(n),
        Value::String(s) => integer_from_str(s.trim()),
        _ => None,
    }
}

fn integer_from_number(n: &Number) -> Option<i128> {
    if let Some(i) = n.as_i64() {
        return Some(i128::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(i128::from(u));
    }
    // Integer literals too large for u64 arrive as floats.
    integer_from_float(n.as_f64()?)
}

/// Digit strings of any length are integers; anything past `i128` saturates.
/// Other numeric spellings (`1e3`, `30.0`) follow the float rule.
fn integer_from_str(s: &str) -> Option<i128> {
    if let Ok(i) = s.parse::<i128>() {
        return Some(i);
    }
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Some(if negative { i128::MIN } else { i128::MAX });
    }
    integer_from_float(s.parse::<f64>().ok()?)
}

/// Floats count as integers only when they carry no fractional part; values
/// beyond `i128` saturate so they still fail the range check.
#[allow(clippy::cast_possible_truncation)]
fn integer_from_float(f: f64) -> Option<i128> {
    if !f.is_finite() || f.fract() != 0.0 {
        return None;
    }
    if f.abs() < 1e38 {
        Some(f as i128)
    } else if f.is_sign_negative() {
        Some(i128::MIN)
    } else {
        Some(i128::MAX)
    }
}

fn decimal_from(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

fn boolean_from(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_u64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => {
            let lowered = s.trim().to_ascii_lowercase();
            if TRUTHY.contains(&lowered.as_str()) {
                Some(true)
            } else if FALSY.contains(&lowered.as_str()) {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn apply_constraint(rule: &FieldRule, coerced: Coerced) -> Result<FieldValue, ValidationError> {
    let out_of_range = |bound: Bound| ValidationError::RangeViolation {
        field: rule.name,
        bound,
    };

    match coerced {
        Coerced::Text(text) => {
            if matches!(rule.constraint, Some(Constraint::NonEmpty)) && text.is_empty() {
                return Err(out_of_range(Bound::MinLength(1)));
            }
            check_text_type(rule, &text)?;
            Ok(FieldValue::Text(text))
        }
        Coerced::Integer(n) => {
            if let Some(Constraint::IntRange { min, max }) = rule.constraint {
                if let Some(min) = min
                    && n < i128::from(min)
                {
                    return Err(out_of_range(Bound::AtLeast(Limit::Integer(min))));
                }
                if let Some(max) = max
                    && n > i128::from(max)
                {
                    return Err(out_of_range(Bound::AtMost(Limit::Integer(max))));
                }
            }
            i64::try_from(n)
                .map(FieldValue::Integer)
                .map_err(|_| type_mismatch(rule))
        }
        Coerced::Decimal(n) => {
            if let Some(Constraint::DecimalRange { min, max }) = rule.constraint {
                if let Some(min) = min
                    && n < min
                {
                    return Err(out_of_range(Bound::AtLeast(Limit::Decimal(min))));
                }
                if let Some(max) = max
                    && n > max
                {
                    return Err(out_of_range(Bound::AtMost(Limit::Decimal(max))));
                }
            }
            Ok(FieldValue::Decimal(n))
        }
        Coerced::Boolean(b) => Ok(FieldValue::Boolean(b)),
    }
}

fn check_text_type(rule: &FieldRule, text: &str) -> Result<(), ValidationError> {
    match rule.ty {
        FieldType::Email if !is_valid_email(text) => Err(ValidationError::InvalidFormat {
            field: rule.name,
            format: "email address",
        }),
        FieldType::Choice(allowed) if !allowed.contains(&text) => {
            Err(ValidationError::InvalidEnumValue {
                field: rule.name,
                allowed,
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::rule::FieldDefault;
    use serde_json::json;

    const AGE: FieldRule = FieldRule::optional("age", FieldType::Integer, "Age in years")
        .constrained(Constraint::IntRange {
            min: Some(0),
            max: Some(120),
        });

    const PRICE: FieldRule = FieldRule::required("price", FieldType::Decimal, "Price in dollars")
        .constrained(Constraint::DecimalRange {
            min: Some(0.0),
            max: None,
        });

    const STATUS: FieldRule = FieldRule::optional(
        "status",
        FieldType::Choice(&["new", "contacted"]),
        "Inquiry status",
    )
    .with_default(FieldDefault::Text("new"));

    const FLAG: FieldRule = FieldRule::optional("in_stock", FieldType::Boolean, "")
        .with_default(FieldDefault::Boolean(true));

    const NAME: FieldRule =
        FieldRule::required("name", FieldType::Text, "Full name").constrained(Constraint::NonEmpty);

    const EMAIL: FieldRule = FieldRule::optional("email", FieldType::Email, "");

    // ---- presence ----

    #[test]
    fn test_missing_required() {
        let err = check_field(&NAME, None).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "name" });
    }

    #[test]
    fn test_absent_optional_takes_default() {
        assert_eq!(check_field(&AGE, None).unwrap(), FieldValue::Unset);
        assert_eq!(
            check_field(&STATUS, None).unwrap(),
            FieldValue::Text("new".to_owned())
        );
        assert_eq!(check_field(&FLAG, None).unwrap(), FieldValue::Boolean(true));
    }

    #[test]
    fn test_null_only_for_nullable_fields() {
        assert_eq!(check_field(&AGE, Some(&Value::Null)).unwrap(), FieldValue::Unset);

        let err = check_field(&FLAG, Some(&Value::Null)).unwrap_err();
        assert!(matches!(err, ValidationError::TypeMismatch { field: "in_stock", .. }));

        let err = check_field(&NAME, Some(&Value::Null)).unwrap_err();
        assert!(matches!(err, ValidationError::TypeMismatch { field: "name", .. }));
    }

    // ---- integer ----

    #[test]
    fn test_integer_bounds_inclusive() {
        assert_eq!(check_field(&AGE, Some(&json!(0))).unwrap(), FieldValue::Integer(0));
        assert_eq!(check_field(&AGE, Some(&json!(120))).unwrap(), FieldValue::Integer(120));
    }

    #[test]
    fn test_integer_out_of_bounds() {
        let err = check_field(&AGE, Some(&json!(-1))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::RangeViolation {
                field: "age",
                bound: Bound::AtLeast(Limit::Integer(0)),
            }
        );

        let err = check_field(&AGE, Some(&json!(121))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::RangeViolation {
                field: "age",
                bound: Bound::AtMost(Limit::Integer(120)),
            }
        );
    }

    #[test]
    fn test_integer_beyond_i64_is_out_of_range() {
        let err = check_field(&AGE, Some(&json!(u64::MAX))).unwrap_err();
        assert_eq!(err.code(), "range_violation");
    }

    #[test]
    fn test_integer_beyond_i128_is_out_of_range() {
        let too_big = [
            json!(1e39),
            json!("1e39"),
            json!("1234567890123456789012345678901234567890"),
        ];
        for raw in too_big {
            let err = check_field(&AGE, Some(&raw)).unwrap_err();
            assert_eq!(
                err,
                ValidationError::RangeViolation {
                    field: "age",
                    bound: Bound::AtMost(Limit::Integer(120)),
                },
                "input: {raw}"
            );
        }

        for raw in [json!(-1e39), json!("-1234567890123456789012345678901234567890")] {
            let err = check_field(&AGE, Some(&raw)).unwrap_err();
            assert_eq!(
                err,
                ValidationError::RangeViolation {
                    field: "age",
                    bound: Bound::AtLeast(Limit::Integer(0)),
                },
                "input: {raw}"
            );
        }
    }

    #[test]
    fn test_integer_coercion() {
        assert_eq!(check_field(&AGE, Some(&json!(30.0))).unwrap(), FieldValue::Integer(30));
        assert_eq!(check_field(&AGE, Some(&json!(" 42 "))).unwrap(), FieldValue::Integer(42));
        assert_eq!(check_field(&AGE, Some(&json!("1e2"))).unwrap(), FieldValue::Integer(100));

        for bad in [json!(30.5), json!("30.5"), json!("thirty"), json!("-"), json!(true), json!([30])] {
            let err = check_field(&AGE, Some(&bad)).unwrap_err();
            assert_eq!(
                err,
                ValidationError::TypeMismatch {
                    field: "age",
                    expected: "integer",
                },
                "input: {bad}"
            );
        }
    }

    // ---- decimal ----

    #[test]
    fn test_decimal_lower_bound() {
        assert_eq!(check_field(&PRICE, Some(&json!(0))).unwrap(), FieldValue::Decimal(0.0));
        let err = check_field(&PRICE, Some(&json!(-0.01))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::RangeViolation {
                field: "price",
                bound: Bound::AtLeast(Limit::Decimal(0.0)),
            }
        );
    }

    #[test]
    fn test_decimal_coercion() {
        assert_eq!(
            check_field(&PRICE, Some(&json!("19.99"))).unwrap(),
            FieldValue::Decimal(19.99)
        );
        assert!(check_field(&PRICE, Some(&json!("NaN"))).is_err());
        assert!(check_field(&PRICE, Some(&json!("inf"))).is_err());
        assert!(check_field(&PRICE, Some(&json!(false))).is_err());
    }

    // ---- boolean ----

    #[test]
    fn test_boolean_coercion() {
        for truthy in [json!(true), json!(1), json!("yes"), json!("TRUE"), json!("on")] {
            assert_eq!(
                check_field(&FLAG, Some(&truthy)).unwrap(),
                FieldValue::Boolean(true),
                "input: {truthy}"
            );
        }
        for falsy in [json!(false), json!(0), json!("no"), json!("Off"), json!("f")] {
            assert_eq!(
                check_field(&FLAG, Some(&falsy)).unwrap(),
                FieldValue::Boolean(false),
                "input: {falsy}"
            );
        }
        let err = check_field(&FLAG, Some(&json!(2))).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TypeMismatch {
                expected: "boolean",
                ..
            }
        ));
    }

    // ---- text ----

    #[test]
    fn test_text_rejects_non_strings() {
        let err = check_field(&NAME, Some(&json!(12))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeMismatch {
                field: "name",
                expected: "text",
            }
        );
    }

    #[test]
    fn test_non_empty() {
        let err = check_field(&NAME, Some(&json!(""))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::RangeViolation {
                field: "name",
                bound: Bound::MinLength(1),
            }
        );
        assert!(check_field(&NAME, Some(&json!(" "))).is_ok());
    }

    #[test]
    fn test_choice() {
        assert_eq!(
            check_field(&STATUS, Some(&json!("contacted"))).unwrap(),
            FieldValue::Text("contacted".to_owned())
        );
        let err = check_field(&STATUS, Some(&json!("Contacted"))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidEnumValue {
                field: "status",
                allowed: &["new", "contacted"],
            }
        );
    }

    #[test]
    fn test_email() {
        assert!(check_field(&EMAIL, Some(&json!("jane@example.com"))).is_ok());
        let err = check_field(&EMAIL, Some(&json!("not-an-email"))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidFormat {
                field: "email",
                format: "email address",
            }
        );
    }
}
