//! Type predicates over JSON values
//!
//! Every predicate is total: any `Value` yields a boolean, never a panic.
//! Dates have no native JSON representation, so a "date" is a string
//! holding an RFC 3339 date-time.

use chrono::DateTime;
use serde_json::Value;

/// Is the value a string holding a valid RFC 3339 date-time?
pub fn is_iso_string(value: &Value) -> bool {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s).is_ok(),
        _ => false,
    }
}

/// Is the value a date? Alias for [`is_iso_string`] since JSON carries
/// dates only as strings.
pub fn is_date(value: &Value) -> bool {
    is_iso_string(value)
}

/// Is the value an array?
pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// Is the value an object?
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

/// Does the value match the named type?
///
/// The tag set is closed:
/// - `"array"`, `"date"`, `"object"` dispatch to the dedicated predicates
/// - `"string"`, `"number"`, `"int"`, `"float"`, `"bool"` (or `"boolean"`),
///   `"null"` compare against the JSON primitive kind
/// - any other tag matches nothing
pub fn typechecks(value: &Value, type_name: &str) -> bool {
    match type_name {
        "array" => is_array(value),
        "date" => is_date(value),
        "object" => is_object(value),
        "string" => value.is_string(),
        "number" => value.is_number(),
        "int" => value.is_i64() || value.is_u64(),
        "float" => value.is_f64(),
        "bool" | "boolean" => value.is_boolean(),
        "null" => value.is_null(),
        _ => false,
    }
}

/// Returns the JSON type name of a value, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_iso_string() {
        assert!(is_iso_string(&json!("2024-01-15T10:30:00.000Z")));
        assert!(is_iso_string(&json!("2024-01-15T10:30:00+02:00")));
        assert!(!is_iso_string(&json!("2024-01-15")));
        assert!(!is_iso_string(&json!("not a date")));
        assert!(!is_iso_string(&json!(42)));
    }

    #[test]
    fn test_is_array_and_object() {
        assert!(is_array(&json!([1, 2])));
        assert!(!is_array(&json!({})));
        assert!(is_object(&json!({ "a": 1 })));
        assert!(!is_object(&json!([1, 2])));
        assert!(!is_object(&json!(null)));
    }

    #[test]
    fn test_typechecks_dedicated_tags() {
        assert!(typechecks(&json!([]), "array"));
        assert!(typechecks(&json!({}), "object"));
        assert!(typechecks(&json!("2024-01-15T10:30:00Z"), "date"));
        assert!(!typechecks(&json!("plain string"), "date"));
    }

    #[test]
    fn test_typechecks_primitive_tags() {
        assert!(typechecks(&json!("x"), "string"));
        assert!(typechecks(&json!(1), "number"));
        assert!(typechecks(&json!(1.5), "number"));
        assert!(typechecks(&json!(1), "int"));
        assert!(!typechecks(&json!(1.5), "int"));
        assert!(typechecks(&json!(1.5), "float"));
        assert!(!typechecks(&json!(1), "float"));
        assert!(typechecks(&json!(true), "bool"));
        assert!(typechecks(&json!(true), "boolean"));
        assert!(typechecks(&json!(null), "null"));
    }

    #[test]
    fn test_typechecks_unknown_tag_matches_nothing() {
        assert!(!typechecks(&json!("x"), "str"));
        assert!(!typechecks(&json!(1), "integer64"));
    }

    #[test]
    fn test_json_type_name() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "bool");
        assert_eq!(json_type_name(&json!(1)), "int");
        assert_eq!(json_type_name(&json!(1.5)), "float");
        assert_eq!(json_type_name(&json!("x")), "string");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }
}
