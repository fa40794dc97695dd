//! # Authkit Wire Format Codec
//!
//! This crate converts the generic ordered key/value map used by the authkit
//! DTO layer to and from JSON text. It is the only place JSON syntax is
//! handled; everything above it works on [`Map`] values.
//!
//! ## Design
//!
//! - **Wire format**: plain JSON objects, keys in insertion order
//! - **Ordered maps**: `serde_json`'s `preserve_order` feature backs [`Map`],
//!   so the key order recorded in fixtures and documentation survives a
//!   render/parse cycle
//! - **Numbers**: JSON numbers decode as integers unless they carry a
//!   fraction or exponent, in which case they decode as floats
//!
//! ## Usage
//!
//! ```rust
//! use authkit_wire::{parse, serialize, Map, Value};
//!
//! let mut map = Map::new();
//! map.insert("subject".to_string(), Value::from("user1"));
//!
//! let text = serialize(&map).unwrap();
//! assert_eq!(text, r#"{"subject":"user1"}"#);
//!
//! let back = parse(&text).unwrap();
//! assert_eq!(back, map);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

use thiserror::Error;

/// Generic wire value: null, boolean, number, string, object, or array.
pub type Value = serde_json::Value;

/// The generic ordered map exchanged with the DTO layer.
///
/// Insertion order is preserved (`serde_json` is built with
/// `preserve_order`), so objects serialize with their keys in the order the
/// fields were written.
pub type Map = serde_json::Map<String, Value>;

/// Wire codec error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// The input text is not valid JSON.
    ///
    /// `line` and `column` locate the first offending character as reported
    /// by the underlying parser.
    #[error("malformed JSON input at line {line}, column {column}: {message}")]
    MalformedInput {
        /// One-based line of the syntax error.
        line: usize,
        /// One-based column of the syntax error.
        column: usize,
        /// Parser diagnostic.
        message: String,
    },

    /// The input parsed, but its root is not a JSON object.
    ///
    /// The map contract requires an object root; a bare scalar or array
    /// cannot be converted into a [`Map`].
    #[error("expected a JSON object at the root, found {found}")]
    UnexpectedRoot {
        /// JSON type name of the actual root value.
        found: &'static str,
    },
}

impl WireError {
    /// Check if this is a syntax-level failure.
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }

    /// Check if this is a well-formed document with the wrong root type.
    #[must_use]
    pub fn is_unexpected_root(&self) -> bool {
        matches!(self, Self::UnexpectedRoot { .. })
    }
}

impl From<serde_json::Error> for WireError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Result type for wire codec operations.
pub type WireResult<T> = Result<T, WireError>;

/// JSON type name used in diagnostics.
#[must_use]
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_f64() => "a float",
        Value::Number(_) => "an integer",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// JSON codec over the generic map.
///
/// This is the single codec the library ships; the `pretty` flag switches
/// between compact output (the transport form) and indented output (for
/// human inspection and log excerpts).
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    /// Pretty print output (default: false)
    pub pretty: bool,
}

impl JsonCodec {
    /// Create a compact JSON codec.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a JSON codec with pretty printing enabled.
    #[must_use]
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Encode a map to JSON text, keys in insertion order.
    pub fn encode(&self, map: &Map) -> WireResult<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(map)
        } else {
            serde_json::to_string(map)
        };
        rendered.map_err(WireError::from)
    }

    /// Decode JSON text into a map, keys in source order.
    pub fn decode(&self, text: &str) -> WireResult<Map> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(map) => Ok(map),
            other => Err(WireError::UnexpectedRoot {
                found: type_name(&other),
            }),
        }
    }
}

/// Serialize a map to compact JSON text.
pub fn serialize(map: &Map) -> WireResult<String> {
    JsonCodec::new().encode(map)
}

/// Serialize a map to indented JSON text for human inspection.
pub fn serialize_pretty(map: &Map) -> WireResult<String> {
    JsonCodec::pretty().encode(map)
}

/// Parse JSON text into the generic map form.
pub fn parse(text: &str) -> WireResult<Map> {
    JsonCodec::new().decode(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_empty_object() {
        let map = parse("{}").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_parse_malformed_input() {
        let err = parse("{not valid json").unwrap_err();
        assert!(err.is_malformed_input());
        match err {
            WireError::MalformedInput { line, column, .. } => {
                assert_eq!(line, 1);
                assert!(column > 0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_non_object_root() {
        let err = parse("[1,2,3]").unwrap_err();
        assert!(err.is_unexpected_root());
        assert_eq!(
            err.to_string(),
            "expected a JSON object at the root, found an array"
        );
    }

    #[test]
    fn test_key_order_preserved() {
        let text = r#"{"zebra":1,"apple":2,"mango":3}"#;
        let map = parse(text).unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
        assert_eq!(serialize(&map).unwrap(), text);
    }

    #[test]
    fn test_numbers_decode_by_shape() {
        let map = parse(r#"{"count":3,"ratio":1.5,"exp":2e3}"#).unwrap();
        assert_eq!(map["count"].as_i64(), Some(3));
        assert!(map["ratio"].is_f64());
        assert!(map["exp"].is_f64());
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let mut map = Map::new();
        map.insert("subject".to_string(), Value::from("user1"));
        let pretty = serialize_pretty(&map).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(parse(&pretty).unwrap(), map);
    }

    #[test]
    fn test_null_survives_round_trip() {
        let mut map = Map::new();
        map.insert("clientName".to_string(), Value::Null);
        let text = serialize(&map).unwrap();
        assert_eq!(text, r#"{"clientName":null}"#);
        assert_eq!(parse(&text).unwrap(), map);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(type_name(&Value::Null), "null");
        assert_eq!(type_name(&Value::from(true)), "a boolean");
        assert_eq!(type_name(&Value::from(1)), "an integer");
        assert_eq!(type_name(&Value::from(1.5)), "a float");
        assert_eq!(type_name(&Value::from("x")), "a string");
        assert_eq!(type_name(&Value::Array(vec![])), "an array");
        assert_eq!(type_name(&Value::Object(Map::new())), "an object");
    }
}
