//! Integration tests for the JSON wire codec.

use authkit_wire::{Map, Value, WireError, parse, serialize, serialize_pretty};
use pretty_assertions::assert_eq;

#[test]
fn test_nested_structures_round_trip() {
    let text = r#"{"action":"OK","client":{"clientId":123,"redirectUris":["https://a.example/cb","https://b.example/cb"]},"accessTokens":[{"token":"a"},{"token":"b"}]}"#;

    let map = parse(text).unwrap();
    assert_eq!(serialize(&map).unwrap(), text);

    let client = map["client"].as_object().unwrap();
    assert_eq!(client["clientId"].as_i64(), Some(123));

    let tokens = map["accessTokens"].as_array().unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0]["token"].as_str(), Some("a"));
    assert_eq!(tokens[1]["token"].as_str(), Some("b"));
}

#[test]
fn test_pretty_and_compact_agree() {
    let mut map = Map::new();
    map.insert("grantType".to_string(), Value::from("AUTHORIZATION_CODE"));
    map.insert("clientId".to_string(), Value::from(123));

    let compact = serialize(&map).unwrap();
    let pretty = serialize_pretty(&map).unwrap();
    assert_ne!(compact, pretty);
    assert_eq!(parse(&compact).unwrap(), parse(&pretty).unwrap());
}

#[test]
fn test_malformed_input_reports_position() {
    let err = parse("{\n  \"a\": 1,\n  oops\n}").unwrap_err();
    match err {
        WireError::MalformedInput { line, message, .. } => {
            assert_eq!(line, 3);
            assert!(!message.is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
