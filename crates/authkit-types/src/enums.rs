//! Closed-set wire values.
//!
//! The remote API encodes enumerated fields as their canonical name string
//! (e.g. the literal text `AUTHORIZED`). In memory they are native Rust
//! enums, so matches are exhaustiveness-checked and comparison is trivial;
//! the [`WireEnum`] trait carries the fixed value table and the name/ordinal
//! lookups the wire decoding needs. Ordinals exist for internal comparison
//! and inbound lookup only — they are never written to the wire.

use authkit_wire::Value;

use crate::error::{DtoError, DtoResult};

/// A closed set of named wire values.
///
/// Implementations are generated by the `wire_enum!` macro; the set is
/// fixed at compile time and never extended at runtime.
pub trait WireEnum: Copy + PartialEq + Sized + 'static {
    /// Type name used in diagnostics, e.g. `"GrantType"`.
    const KIND: &'static str;

    /// Every value of the set, in ordinal order.
    const VALUES: &'static [Self];

    /// Canonical wire name, e.g. `"AUTHORIZATION_CODE"`.
    fn name(self) -> &'static str;

    /// Position of this value in [`Self::VALUES`].
    fn ordinal(self) -> usize {
        Self::VALUES
            .iter()
            .position(|v| *v == self)
            .expect("VALUES lists every variant")
    }

    /// Look up a value by its canonical wire name.
    fn from_name(name: &str) -> Option<Self> {
        Self::VALUES.iter().copied().find(|v| v.name() == name)
    }

    /// Look up a value by its ordinal.
    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::VALUES.get(ordinal).copied()
    }
}

/// Decode a boundary value into a closed-set value.
///
/// Null and missing values pass through as `None`. A string resolves by
/// canonical name, a non-negative integer by ordinal; anything else —
/// including an array where a scalar was expected, or a name/ordinal outside
/// the set — is an [`DtoError::InvalidArgument`].
pub fn decode<E: WireEnum>(param: &str, value: Option<&Value>) -> DtoResult<Option<E>> {
    let resolved = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(name)) => E::from_name(name),
        Some(Value::Number(n)) => n.as_u64().and_then(|ord| E::from_ordinal(ord as usize)),
        Some(_) => None,
    };
    match resolved {
        Some(v) => Ok(Some(v)),
        None => Err(DtoError::invalid_argument(
            param,
            format!("a {} name or ordinal", E::KIND),
        )),
    }
}

/// Encode a closed-set value as its canonical name, passing `None` through
/// as JSON null.
pub fn encode<E: WireEnum>(value: Option<E>) -> Value {
    match value {
        Some(v) => Value::from(v.name()),
        None => Value::Null,
    }
}

/// Declare a closed set of wire values.
///
/// Generates the enum plus its [`WireEnum`] implementation, keeping the
/// value table, canonical names, and lookups in sync by construction.
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::enums::WireEnum for $name {
            const KIND: &'static str = stringify!($name);
            const VALUES: &'static [Self] = &[$(Self::$variant,)+];

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }
    };
}

wire_enum! {
    /// OAuth 2.0 grant types understood by the authorization server.
    pub enum GrantType {
        /// Authorization code grant (RFC 6749, section 4.1).
        AuthorizationCode = "AUTHORIZATION_CODE",
        /// Implicit grant (RFC 6749, section 4.2).
        Implicit = "IMPLICIT",
        /// Resource owner password credentials grant (RFC 6749, section 4.3).
        Password = "PASSWORD",
        /// Client credentials grant (RFC 6749, section 4.4).
        ClientCredentials = "CLIENT_CREDENTIALS",
        /// Refresh token grant (RFC 6749, section 6).
        RefreshToken = "REFRESH_TOKEN",
        /// Client-initiated backchannel authentication grant.
        Ciba = "CIBA",
        /// Device authorization grant (RFC 8628).
        DeviceCode = "DEVICE_CODE",
    }
}

wire_enum! {
    /// Next action the API caller should take after a token-create call.
    pub enum TokenCreateAction {
        /// The request was malformed; respond 500 to the client.
        InternalServerError = "INTERNAL_SERVER_ERROR",
        /// The request was rejected; respond 400 to the client.
        BadRequest = "BAD_REQUEST",
        /// The client may not use the requested grant; respond 403.
        Forbidden = "FORBIDDEN",
        /// A token was issued.
        Ok = "OK",
    }
}

wire_enum! {
    /// End-user decision reported when completing the device flow.
    pub enum DeviceCompleteResult {
        /// The end user approved the authorization request.
        Authorized = "AUTHORIZED",
        /// The end user denied the authorization request.
        AccessDenied = "ACCESS_DENIED",
        /// Authentication of the end user failed.
        TransactionFailed = "TRANSACTION_FAILED",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_name_round_trip() {
        for value in GrantType::VALUES {
            assert_eq!(GrantType::from_name(value.name()), Some(*value));
        }
        assert_eq!(
            DeviceCompleteResult::from_name("AUTHORIZED"),
            Some(DeviceCompleteResult::Authorized)
        );
        assert_eq!(DeviceCompleteResult::Authorized.name(), "AUTHORIZED");
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert_eq!(GrantType::from_name("NOT_A_REAL_VALUE"), None);
        let err = decode::<GrantType>("grantType", Some(&json!("NOT_A_REAL_VALUE"))).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("GrantType"));
    }

    #[test]
    fn test_null_passes_through() {
        assert_eq!(decode::<GrantType>("grantType", None), Ok(None));
        assert_eq!(
            decode::<GrantType>("grantType", Some(&Value::Null)),
            Ok(None)
        );
        assert_eq!(encode::<GrantType>(None), Value::Null);
    }

    #[test]
    fn test_malformed_shapes_are_rejected() {
        assert!(decode::<GrantType>("grantType", Some(&json!(["AUTHORIZATION_CODE"]))).is_err());
        assert!(decode::<GrantType>("grantType", Some(&json!(true))).is_err());
        assert!(decode::<GrantType>("grantType", Some(&json!(-1))).is_err());
        assert!(decode::<GrantType>("grantType", Some(&json!(99))).is_err());
    }

    #[test]
    fn test_ordinal_lookup() {
        assert_eq!(GrantType::AuthorizationCode.ordinal(), 0);
        assert_eq!(GrantType::DeviceCode.ordinal(), 6);
        assert_eq!(GrantType::from_ordinal(3), Some(GrantType::ClientCredentials));
        assert_eq!(GrantType::from_ordinal(7), None);
        assert_eq!(
            decode::<TokenCreateAction>("action", Some(&json!(3))),
            Ok(Some(TokenCreateAction::Ok))
        );
    }

    #[test]
    fn test_encode_writes_names_never_ordinals() {
        assert_eq!(
            encode(Some(GrantType::AuthorizationCode)),
            json!("AUTHORIZATION_CODE")
        );
        assert_eq!(
            encode(Some(DeviceCompleteResult::AccessDenied)),
            json!("ACCESS_DENIED")
        );
    }
}
