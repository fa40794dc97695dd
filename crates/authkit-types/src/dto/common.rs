//! Shapes shared by several endpoints.

use authkit_wire::Map;

use crate::codec::{self, FromMap, ToMap};
use crate::coerce;
use crate::error::DtoResult;

/// An extra key/value pair attached to a token or authorization.
///
/// Properties ride along with issued tokens; `hidden` marks pairs the server
/// keeps out of introspection responses.
///
/// # Example
///
/// ```
/// use authkit_types::dto::Property;
/// use authkit_types::ToMap;
///
/// let property = Property::new("department", "sales");
/// assert_eq!(
///     property.to_json().unwrap(),
///     r#"{"key":"department","value":"sales","hidden":null}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Property {
    /// Property key.
    pub key: Option<String>,
    /// Property value.
    pub value: Option<String>,
    /// Whether the pair is withheld from introspection responses.
    pub hidden: Option<bool>,
}

impl Property {
    /// Create a property with key and value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
            hidden: None,
        }
    }

    /// Set the hidden flag.
    #[must_use]
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }
}

impl ToMap for Property {
    fn write_map(&self, out: &mut Map) {
        codec::put_string(out, "key", self.key.as_deref());
        codec::put_string(out, "value", self.value.as_deref());
        codec::put_bool(out, "hidden", self.hidden);
    }
}

impl FromMap for Property {
    fn from_map(map: &Map) -> DtoResult<Self> {
        Ok(Self {
            key: coerce::ensure_null_or_string("key", map.get("key"))?,
            value: coerce::ensure_null_or_string("value", map.get("value"))?,
            hidden: coerce::ensure_null_or_bool("hidden", map.get("hidden"))?,
        })
    }
}

/// A client application registered at the authorization server.
///
/// `client_id` is an or-zero field: the wire form carries `0` when no ID has
/// been assigned, so an absent ID and a literal zero are indistinguishable
/// after encoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Client {
    /// Numeric client identifier assigned by the server.
    pub client_id: Option<u64>,
    /// Human-readable client name.
    pub client_name: Option<String>,
    /// Registered redirect URIs.
    pub redirect_uris: Option<Vec<String>>,
}

impl Client {
    /// Create an empty client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the client identifier.
    #[must_use]
    pub fn with_client_id(mut self, client_id: u64) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Set the client name.
    #[must_use]
    pub fn with_client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    /// Set the registered redirect URIs.
    #[must_use]
    pub fn with_redirect_uris<I, S>(mut self, uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.redirect_uris = Some(uris.into_iter().map(Into::into).collect());
        self
    }
}

impl ToMap for Client {
    fn write_map(&self, out: &mut Map) {
        codec::put_u64_or_zero(out, "clientId", self.client_id);
        codec::put_string(out, "clientName", self.client_name.as_deref());
        codec::put_string_array(out, "redirectUris", self.redirect_uris.as_deref());
    }
}

impl FromMap for Client {
    fn from_map(map: &Map) -> DtoResult<Self> {
        Ok(Self {
            client_id: coerce::ensure_null_or_non_negative("clientId", map.get("clientId"))?,
            client_name: coerce::ensure_null_or_string("clientName", map.get("clientName"))?,
            redirect_uris: coerce::ensure_null_or_string_array(
                "redirectUris",
                map.get("redirectUris"),
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_property_round_trip() {
        let property = Property::new("department", "sales").with_hidden(true);
        let map = property.to_map();
        assert_eq!(Property::from_map(&map).unwrap(), property);
    }

    #[test]
    fn test_property_from_empty_map_is_all_absent() {
        let property = Property::from_map(&Map::new()).unwrap();
        assert_eq!(property, Property::default());
    }

    #[test]
    fn test_client_key_casing_is_verbatim() {
        let client = Client::new()
            .with_client_id(123)
            .with_client_name("demo")
            .with_redirect_uris(["https://app.example/cb"]);
        let map = client.to_map();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["clientId", "clientName", "redirectUris"]);
    }

    #[test]
    fn test_client_rejects_bad_redirect_uris() {
        let mut map = Client::new().to_map();
        map.insert("redirectUris".to_string(), serde_json::json!([1, 2]));
        let err = Client::from_map(&map).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("redirectUris"));
    }
}
