//! Boundary validation for parsed JSON values.
//!
//! Typed model fields enforce their contracts at compile time; these checks
//! exist for the one place the type system cannot reach — data parsed from
//! JSON or supplied as a raw map. Each function validates that a value
//! matches the expected shape and extracts the typed content, or fails with
//! [`DtoError::InvalidArgument`] naming the offending parameter.
//!
//! The `ensure_null_or_*` variants treat a missing key and an explicit JSON
//! null identically: both are a valid "absent" state, whatever the secondary
//! constraint.

use authkit_wire::{Map, Value};

use crate::error::{DtoError, DtoResult};

/// A value that the remote API may encode as either a JSON string or a JSON
/// integer.
///
/// Servers disagree on the JSON type of some fields (`expires_in` is the
/// classic case), so the field keeps whichever shape arrived and re-encodes
/// it unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringOrInt {
    /// String form, e.g. `"3600"`.
    String(String),
    /// Integer form, e.g. `3600`.
    Int(i64),
}

impl From<&str> for StringOrInt {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<i64> for StringOrInt {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&StringOrInt> for Value {
    fn from(v: &StringOrInt) -> Self {
        match v {
            StringOrInt::String(s) => Value::from(s.as_str()),
            StringOrInt::Int(n) => Value::from(*n),
        }
    }
}

fn invalid<T>(param: &str, expected: &str) -> DtoResult<T> {
    Err(DtoError::invalid_argument(param, expected))
}

/// Validate that `value` is a boolean.
pub fn ensure_bool(param: &str, value: &Value) -> DtoResult<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        _ => invalid(param, "a boolean"),
    }
}

/// Validate that `value` is an integer (a JSON number without a fraction or
/// exponent).
pub fn ensure_i64(param: &str, value: &Value) -> DtoResult<i64> {
    match value.as_i64() {
        Some(n) => Ok(n),
        None => invalid(param, "an integer"),
    }
}

/// Validate that `value` is a string.
pub fn ensure_string(param: &str, value: &Value) -> DtoResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => invalid(param, "a string"),
    }
}

/// Validate that `value` is a string or an integer.
pub fn ensure_string_or_int(param: &str, value: &Value) -> DtoResult<StringOrInt> {
    match value {
        Value::String(s) => Ok(StringOrInt::String(s.clone())),
        _ => match value.as_i64() {
            Some(n) => Ok(StringOrInt::Int(n)),
            None => invalid(param, "a string or an integer"),
        },
    }
}

/// Validate that a key is present with a non-null value.
pub fn ensure_not_null<'a>(param: &str, value: Option<&'a Value>) -> DtoResult<&'a Value> {
    match value {
        Some(Value::Null) | None => invalid(param, "a non-null value"),
        Some(v) => Ok(v),
    }
}

/// Validate that `value` is a non-negative integer.
pub fn ensure_non_negative(param: &str, value: &Value) -> DtoResult<u64> {
    match value.as_u64() {
        Some(n) => Ok(n),
        None => invalid(param, "a non-negative integer"),
    }
}

/// Validate that `value` is absent, null, or a boolean.
pub fn ensure_null_or_bool(param: &str, value: Option<&Value>) -> DtoResult<Option<bool>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => ensure_bool(param, v).map(Some),
    }
}

/// Validate that `value` is absent, null, or an integer.
pub fn ensure_null_or_i64(param: &str, value: Option<&Value>) -> DtoResult<Option<i64>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => ensure_i64(param, v).map(Some),
    }
}

/// Validate that `value` is absent, null, or a string.
pub fn ensure_null_or_string(param: &str, value: Option<&Value>) -> DtoResult<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => ensure_string(param, v).map(Some),
    }
}

/// Validate that `value` is absent, null, or a non-negative integer.
pub fn ensure_null_or_non_negative(param: &str, value: Option<&Value>) -> DtoResult<Option<u64>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => ensure_non_negative(param, v).map(Some),
    }
}

/// Validate that `value` is absent, null, a string, or an integer.
pub fn ensure_null_or_string_or_int(
    param: &str,
    value: Option<&Value>,
) -> DtoResult<Option<StringOrInt>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => ensure_string_or_int(param, v).map(Some),
    }
}

/// Validate that `value` is absent, null, or an array whose elements are all
/// strings. An empty array is valid.
pub fn ensure_null_or_string_array(
    param: &str,
    value: Option<&Value>,
) -> DtoResult<Option<Vec<String>>> {
    let expected = "null or an array of strings";
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => out.push(s.clone()),
                    _ => return invalid(param, expected),
                }
            }
            Ok(Some(out))
        }
        Some(_) => invalid(param, expected),
    }
}

/// Validate that `value` is absent, null, or an object, returning the object
/// for recursive decoding.
pub fn ensure_null_or_object<'a>(
    param: &str,
    value: Option<&'a Value>,
) -> DtoResult<Option<&'a Map>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => invalid(param, "null or an object"),
    }
}

/// Validate that `value` is absent, null, or an array whose elements are all
/// objects, returning the objects for element-wise recursive decoding.
pub fn ensure_null_or_object_array<'a>(
    param: &str,
    value: Option<&'a Value>,
) -> DtoResult<Option<Vec<&'a Map>>> {
    let expected = "null or an array of objects";
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Object(map) => out.push(map),
                    _ => return invalid(param, expected),
                }
            }
            Ok(Some(out))
        }
        Some(_) => invalid(param, expected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ensure_bool() {
        assert_eq!(ensure_bool("hidden", &json!(true)), Ok(true));
        assert!(ensure_bool("hidden", &json!(1)).is_err());
        assert!(ensure_bool("hidden", &json!("true")).is_err());
    }

    #[test]
    fn test_ensure_i64_rejects_floats() {
        assert_eq!(ensure_i64("clientId", &json!(123)), Ok(123));
        assert_eq!(ensure_i64("clientId", &json!(-1)), Ok(-1));
        assert!(ensure_i64("clientId", &json!(1.5)).is_err());
        assert!(ensure_i64("clientId", &json!("123")).is_err());
    }

    #[test]
    fn test_ensure_null_or_string_boundary() {
        assert_eq!(ensure_null_or_string("subject", None), Ok(None));
        assert_eq!(
            ensure_null_or_string("subject", Some(&Value::Null)),
            Ok(None)
        );
        assert_eq!(
            ensure_null_or_string("subject", Some(&json!("user1"))),
            Ok(Some("user1".to_string()))
        );
        assert!(ensure_null_or_string("subject", Some(&json!(7))).is_err());
        assert!(ensure_null_or_string("subject", Some(&json!(false))).is_err());
        assert!(ensure_null_or_string("subject", Some(&json!(["a"]))).is_err());
    }

    #[test]
    fn test_ensure_null_or_string_array_boundary() {
        assert_eq!(ensure_null_or_string_array("scopes", None), Ok(None));
        assert_eq!(
            ensure_null_or_string_array("scopes", Some(&json!([]))),
            Ok(Some(vec![]))
        );
        assert_eq!(
            ensure_null_or_string_array("scopes", Some(&json!(["read", "write"]))),
            Ok(Some(vec!["read".to_string(), "write".to_string()]))
        );
        // One bad element poisons the whole array
        let err = ensure_null_or_string_array("scopes", Some(&json!(["read", 2]))).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(ensure_null_or_string_array("scopes", Some(&json!("read"))).is_err());
    }

    #[test]
    fn test_ensure_string_or_int() {
        assert_eq!(
            ensure_string_or_int("expires_in", &json!("3600")),
            Ok(StringOrInt::from("3600"))
        );
        assert_eq!(
            ensure_string_or_int("expires_in", &json!(3600)),
            Ok(StringOrInt::from(3600))
        );
        // Floats name the combined expectation, not just the integer half
        let err = ensure_string_or_int("expires_in", &json!(36.5)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for `expires_in`: expected a string or an integer"
        );
        assert!(ensure_string_or_int("expires_in", &json!([3600])).is_err());
    }

    #[test]
    fn test_ensure_not_null() {
        assert!(ensure_not_null("ticket", None).is_err());
        assert!(ensure_not_null("ticket", Some(&Value::Null)).is_err());
        assert_eq!(ensure_not_null("ticket", Some(&json!(0))), Ok(&json!(0)));
    }

    #[test]
    fn test_ensure_non_negative() {
        assert_eq!(ensure_non_negative("duration", &json!(0)), Ok(0));
        assert_eq!(ensure_non_negative("duration", &json!(86400)), Ok(86400));
        assert!(ensure_non_negative("duration", &json!(-1)).is_err());
        assert!(ensure_non_negative("duration", &json!(1.5)).is_err());
    }

    #[test]
    fn test_ensure_null_or_object() {
        assert_eq!(ensure_null_or_object("client", None), Ok(None));
        let obj = json!({"clientId": 1});
        let map = ensure_null_or_object("client", Some(&obj)).unwrap().unwrap();
        assert_eq!(map["clientId"], json!(1));
        assert!(ensure_null_or_object("client", Some(&json!([]))).is_err());
    }

    #[test]
    fn test_ensure_null_or_object_array() {
        let arr = json!([{"token": "a"}, {"token": "b"}]);
        let maps = ensure_null_or_object_array("accessTokens", Some(&arr))
            .unwrap()
            .unwrap();
        assert_eq!(maps.len(), 2);
        assert!(ensure_null_or_object_array("accessTokens", Some(&json!([{"a": 1}, 2]))).is_err());
    }

    #[test]
    fn test_string_or_int_to_value() {
        assert_eq!(Value::from(&StringOrInt::from("x")), json!("x"));
        assert_eq!(Value::from(&StringOrInt::from(9)), json!(9));
    }
}
