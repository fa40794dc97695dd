//! Token endpoint models: the backend token-management API (camelCase wire
//! keys) and the standard OAuth 2.0 token-endpoint response (snake_case wire
//! keys, RFC 6749 section 5.1).

use authkit_wire::Map;

use crate::codec::{self, FromMap, ToMap};
use crate::coerce::{self, StringOrInt};
use crate::dto::common::{Client, Property};
use crate::enums::{self, GrantType, TokenCreateAction};
use crate::error::DtoResult;

/// Request to the backend token-create endpoint.
///
/// `clientId` and the two duration fields are or-zero fields: absent values
/// encode as `0`.
///
/// # Example
///
/// ```
/// use authkit_types::dto::TokenCreateRequest;
/// use authkit_types::enums::GrantType;
/// use authkit_types::ToMap;
///
/// let request = TokenCreateRequest::new()
///     .with_grant_type(GrantType::AuthorizationCode)
///     .with_client_id(123)
///     .with_subject("user1")
///     .with_scopes(["read", "write"]);
///
/// let map = request.to_map();
/// assert_eq!(map["grantType"], "AUTHORIZATION_CODE");
/// assert_eq!(map["clientId"], 123);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenCreateRequest {
    /// Grant type the issued token should be bound to.
    pub grant_type: Option<GrantType>,
    /// Client the token is issued to.
    pub client_id: Option<u64>,
    /// Subject (end-user identifier) of the token.
    pub subject: Option<String>,
    /// Scopes to attach to the token.
    pub scopes: Option<Vec<String>>,
    /// Access token lifetime in seconds.
    pub access_token_duration: Option<u64>,
    /// Refresh token lifetime in seconds.
    pub refresh_token_duration: Option<u64>,
    /// Caller-supplied token value, when the server should not mint one.
    pub access_token: Option<String>,
    /// Extra key/value pairs to attach to the token.
    pub properties: Option<Vec<Property>>,
}

impl TokenCreateRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grant type.
    #[must_use]
    pub fn with_grant_type(mut self, grant_type: GrantType) -> Self {
        self.grant_type = Some(grant_type);
        self
    }

    /// Set the client identifier.
    #[must_use]
    pub fn with_client_id(mut self, client_id: u64) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Set the subject.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the scopes.
    #[must_use]
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    /// Set the access token lifetime in seconds.
    #[must_use]
    pub fn with_access_token_duration(mut self, seconds: u64) -> Self {
        self.access_token_duration = Some(seconds);
        self
    }

    /// Set the refresh token lifetime in seconds.
    #[must_use]
    pub fn with_refresh_token_duration(mut self, seconds: u64) -> Self {
        self.refresh_token_duration = Some(seconds);
        self
    }

    /// Supply the token value instead of letting the server mint one.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the extra properties.
    #[must_use]
    pub fn with_properties(mut self, properties: Vec<Property>) -> Self {
        self.properties = Some(properties);
        self
    }
}

impl ToMap for TokenCreateRequest {
    fn write_map(&self, out: &mut Map) {
        codec::put_enum(out, "grantType", self.grant_type);
        codec::put_u64_or_zero(out, "clientId", self.client_id);
        codec::put_string(out, "subject", self.subject.as_deref());
        codec::put_string_array(out, "scopes", self.scopes.as_deref());
        codec::put_u64_or_zero(out, "accessTokenDuration", self.access_token_duration);
        codec::put_u64_or_zero(out, "refreshTokenDuration", self.refresh_token_duration);
        codec::put_string(out, "accessToken", self.access_token.as_deref());
        codec::put_nested_array(out, "properties", self.properties.as_deref());
    }
}

impl FromMap for TokenCreateRequest {
    fn from_map(map: &Map) -> DtoResult<Self> {
        Ok(Self {
            grant_type: enums::decode("grantType", map.get("grantType"))?,
            client_id: coerce::ensure_null_or_non_negative("clientId", map.get("clientId"))?,
            subject: coerce::ensure_null_or_string("subject", map.get("subject"))?,
            scopes: coerce::ensure_null_or_string_array("scopes", map.get("scopes"))?,
            access_token_duration: coerce::ensure_null_or_non_negative(
                "accessTokenDuration",
                map.get("accessTokenDuration"),
            )?,
            refresh_token_duration: coerce::ensure_null_or_non_negative(
                "refreshTokenDuration",
                map.get("refreshTokenDuration"),
            )?,
            access_token: coerce::ensure_null_or_string("accessToken", map.get("accessToken"))?,
            properties: codec::get_nested_array("properties", map)?,
        })
    }
}

/// Response from the backend token-create endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenCreateResponse {
    /// Next action the API caller should take.
    pub action: Option<TokenCreateAction>,
    /// Human-readable result description.
    pub result_message: Option<String>,
    /// Issued access token.
    pub access_token: Option<String>,
    /// Issued refresh token.
    pub refresh_token: Option<String>,
    /// Expiry of the access token, epoch milliseconds.
    pub expires_at: Option<u64>,
    /// Properties attached to the issued token.
    pub properties: Option<Vec<Property>>,
}

impl TokenCreateResponse {
    /// Create an empty response.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the action.
    #[must_use]
    pub fn with_action(mut self, action: TokenCreateAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Set the issued access token.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}

impl ToMap for TokenCreateResponse {
    fn write_map(&self, out: &mut Map) {
        codec::put_enum(out, "action", self.action);
        codec::put_string(out, "resultMessage", self.result_message.as_deref());
        codec::put_string(out, "accessToken", self.access_token.as_deref());
        codec::put_string(out, "refreshToken", self.refresh_token.as_deref());
        codec::put_u64_or_zero(out, "expiresAt", self.expires_at);
        codec::put_nested_array(out, "properties", self.properties.as_deref());
    }
}

impl FromMap for TokenCreateResponse {
    fn from_map(map: &Map) -> DtoResult<Self> {
        Ok(Self {
            action: enums::decode("action", map.get("action"))?,
            result_message: coerce::ensure_null_or_string(
                "resultMessage",
                map.get("resultMessage"),
            )?,
            access_token: coerce::ensure_null_or_string("accessToken", map.get("accessToken"))?,
            refresh_token: coerce::ensure_null_or_string("refreshToken", map.get("refreshToken"))?,
            expires_at: coerce::ensure_null_or_non_negative("expiresAt", map.get("expiresAt"))?,
            properties: codec::get_nested_array("properties", map)?,
        })
    }
}

/// One access token record in a token-list response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessTokenRecord {
    /// The token value.
    pub token: Option<String>,
    /// Client the token was issued to.
    pub client_id: Option<u64>,
    /// Subject of the token.
    pub subject: Option<String>,
    /// Scopes attached to the token.
    pub scopes: Option<Vec<String>>,
    /// Expiry, epoch milliseconds.
    pub expires_at: Option<u64>,
}

impl AccessTokenRecord {
    /// Create a record carrying just the token value.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }
}

impl ToMap for AccessTokenRecord {
    fn write_map(&self, out: &mut Map) {
        codec::put_string(out, "token", self.token.as_deref());
        codec::put_u64_or_zero(out, "clientId", self.client_id);
        codec::put_string(out, "subject", self.subject.as_deref());
        codec::put_string_array(out, "scopes", self.scopes.as_deref());
        codec::put_u64_or_zero(out, "expiresAt", self.expires_at);
    }
}

impl FromMap for AccessTokenRecord {
    fn from_map(map: &Map) -> DtoResult<Self> {
        Ok(Self {
            token: coerce::ensure_null_or_string("token", map.get("token"))?,
            client_id: coerce::ensure_null_or_non_negative("clientId", map.get("clientId"))?,
            subject: coerce::ensure_null_or_string("subject", map.get("subject"))?,
            scopes: coerce::ensure_null_or_string_array("scopes", map.get("scopes"))?,
            expires_at: coerce::ensure_null_or_non_negative("expiresAt", map.get("expiresAt"))?,
        })
    }
}

/// Response from the backend token-list endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenListResponse {
    /// Start index of this page.
    pub start: Option<u64>,
    /// End index (exclusive) of this page.
    pub end: Option<u64>,
    /// Total number of records across all pages.
    pub total_count: Option<u64>,
    /// Client the listing was filtered by.
    pub client: Option<Client>,
    /// The records in this page.
    pub access_tokens: Option<Vec<AccessTokenRecord>>,
}

impl TokenListResponse {
    /// Create an empty response.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ToMap for TokenListResponse {
    fn write_map(&self, out: &mut Map) {
        codec::put_u64_or_zero(out, "start", self.start);
        codec::put_u64_or_zero(out, "end", self.end);
        codec::put_u64_or_zero(out, "totalCount", self.total_count);
        codec::put_nested(out, "client", self.client.as_ref());
        codec::put_nested_array(out, "accessTokens", self.access_tokens.as_deref());
    }
}

impl FromMap for TokenListResponse {
    fn from_map(map: &Map) -> DtoResult<Self> {
        Ok(Self {
            start: coerce::ensure_null_or_non_negative("start", map.get("start"))?,
            end: coerce::ensure_null_or_non_negative("end", map.get("end"))?,
            total_count: coerce::ensure_null_or_non_negative("totalCount", map.get("totalCount"))?,
            client: codec::get_nested("client", map)?,
            access_tokens: codec::get_nested_array("accessTokens", map)?,
        })
    }
}

/// The standard OAuth 2.0 token-endpoint response.
///
/// Wire keys are snake_case per RFC 6749. `expires_in` keeps whichever JSON
/// type the server sent — string or integer — and re-encodes it unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenResponse {
    /// The issued access token.
    pub access_token: Option<String>,
    /// Token type, normally `Bearer`.
    pub token_type: Option<String>,
    /// Lifetime in seconds; servers disagree on its JSON type.
    pub expires_in: Option<StringOrInt>,
    /// The issued refresh token.
    pub refresh_token: Option<String>,
    /// Space-delimited granted scopes.
    pub scope: Option<String>,
    /// OpenID Connect ID token.
    pub id_token: Option<String>,
}

impl TokenResponse {
    /// Create an empty response.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ToMap for TokenResponse {
    fn write_map(&self, out: &mut Map) {
        codec::put_string(out, "access_token", self.access_token.as_deref());
        codec::put_string(out, "token_type", self.token_type.as_deref());
        codec::put_string_or_int(out, "expires_in", self.expires_in.as_ref());
        codec::put_string(out, "refresh_token", self.refresh_token.as_deref());
        codec::put_string(out, "scope", self.scope.as_deref());
        codec::put_string(out, "id_token", self.id_token.as_deref());
    }
}

impl FromMap for TokenResponse {
    fn from_map(map: &Map) -> DtoResult<Self> {
        Ok(Self {
            access_token: coerce::ensure_null_or_string("access_token", map.get("access_token"))?,
            token_type: coerce::ensure_null_or_string("token_type", map.get("token_type"))?,
            expires_in: coerce::ensure_null_or_string_or_int("expires_in", map.get("expires_in"))?,
            refresh_token: coerce::ensure_null_or_string(
                "refresh_token",
                map.get("refresh_token"),
            )?,
            scope: coerce::ensure_null_or_string("scope", map.get("scope"))?,
            id_token: coerce::ensure_null_or_string("id_token", map.get("id_token"))?,
        })
    }
}
