//! Lenient numeric coercion for measurement fields arriving over HTTP.
//!
//! Clients send numbers, numeric strings, empty strings or null. Coercion
//! reports *why* a value was rejected; the handler decides to treat
//! rejections as "not provided".

use serde_json::Value;
use thiserror::Error;

use crate::sizing::models::{Field, MeasurementSet};

#[derive(Debug, Error, PartialEq)]
pub enum CoercionError {
    #[error("expected a number or numeric string, got {0}")]
    UnsupportedType(&'static str),

    #[error("'{0}' is not a number")]
    Unparseable(String),

    #[error("value is not finite")]
    NonFinite,
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// `null` and `""` mean absent. Numbers and trimmed numeric strings become
/// values. Everything else is an error.
pub fn coerce_measurement(value: &Value) -> Result<Option<f64>, CoercionError> {
    let parsed = match value {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_f64().ok_or(CoercionError::NonFinite)?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| CoercionError::Unparseable(s.clone()))?
        }
        other => return Err(CoercionError::UnsupportedType(json_type_name(other))),
    };

    if parsed.is_finite() {
        Ok(Some(parsed))
    } else {
        Err(CoercionError::NonFinite)
    }
}

/// Raw, uncoerced measurement values keyed by field.
pub type RawMeasurements<'a> = [(Field, Option<&'a Value>); 8];

/// Coerces every field. Rejected values become `None`; the rejections are
/// returned so callers can log them.
pub fn coerce_measurements(
    raw: &RawMeasurements<'_>,
) -> (MeasurementSet, Vec<(Field, CoercionError)>) {
    let mut set = MeasurementSet::default();
    let mut rejected = Vec::new();

    for (field, value) in raw {
        let Some(value) = value else { continue };
        match coerce_measurement(value) {
            Ok(v) => set.set(*field, v),
            Err(e) => rejected.push((*field, e)),
        }
    }

    (set, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(coerce_measurement(&json!(85)), Ok(Some(85.0)));
        assert_eq!(coerce_measurement(&json!(85.5)), Ok(Some(85.5)));
    }

    #[test]
    fn test_numeric_strings_are_parsed() {
        assert_eq!(coerce_measurement(&json!("94")), Ok(Some(94.0)));
        assert_eq!(coerce_measurement(&json!(" 68.2 ")), Ok(Some(68.2)));
    }

    #[test]
    fn test_null_and_empty_are_absent() {
        assert_eq!(coerce_measurement(&Value::Null), Ok(None));
        assert_eq!(coerce_measurement(&json!("")), Ok(None));
        assert_eq!(coerce_measurement(&json!("   ")), Ok(None));
    }

    #[test]
    fn test_garbage_is_rejected_with_reason() {
        assert_eq!(
            coerce_measurement(&json!("abc")),
            Err(CoercionError::Unparseable("abc".to_string()))
        );
        assert_eq!(
            coerce_measurement(&json!(true)),
            Err(CoercionError::UnsupportedType("boolean"))
        );
        assert_eq!(
            coerce_measurement(&json!([1, 2])),
            Err(CoercionError::UnsupportedType("array"))
        );
        assert_eq!(coerce_measurement(&json!("inf")), Err(CoercionError::NonFinite));
        assert_eq!(coerce_measurement(&json!("NaN")), Err(CoercionError::NonFinite));
    }

    #[test]
    fn test_coerce_measurements_drops_rejections() {
        let chest = json!("85");
        let waist = json!("oops");
        let raw: RawMeasurements = [
            (Field::Chest, Some(&chest)),
            (Field::Waist, Some(&waist)),
            (Field::Hips, None),
            (Field::Inseam, None),
            (Field::Shoulders, None),
            (Field::Neck, None),
            (Field::Thigh, None),
            (Field::Calf, None),
        ];
        let (set, rejected) = coerce_measurements(&raw);
        assert_eq!(set.chest, Some(85.0));
        assert_eq!(set.waist, None);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].0, Field::Waist);
    }
}
