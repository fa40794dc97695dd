//! # Authkit Types
//!
//! Typed request/response models for a remote OAuth 2.0 / OpenID Connect
//! authorization-server API, together with the small framework every model
//! relies on:
//!
//! - **Coercion** ([`coerce`]): boundary validation that a parsed JSON value
//!   matches the shape a field declares
//! - **Closed-set values** ([`enums`]): wire enums with canonical name and
//!   ordinal lookup
//! - **Map codec** ([`codec`]): bidirectional conversion between typed models
//!   and the generic ordered map consumed by the HTTP layer
//! - **Models** ([`dto`]): concrete request/response shapes
//!
//! ## Data flow
//!
//! Outbound: populate a model, [`ToMap::to_map`] walks its fields into an
//! ordered map, [`authkit_wire::serialize`] renders the JSON body. Inbound:
//! [`authkit_wire::parse`] turns a response body into a map,
//! [`FromMap::from_map`] re-validates every value and builds the model. No
//! partial model is ever returned; the first bad value aborts the conversion.
//!
//! ## Quick start
//!
//! ```rust
//! use authkit_types::dto::TokenCreateRequest;
//! use authkit_types::enums::GrantType;
//! use authkit_types::codec::{FromMap, ToMap};
//!
//! let request = TokenCreateRequest::new()
//!     .with_grant_type(GrantType::AuthorizationCode)
//!     .with_client_id(123)
//!     .with_subject("user1")
//!     .with_scopes(["read", "write"]);
//!
//! let body = request.to_json().unwrap();
//! assert!(body.contains(r#""grantType":"AUTHORIZATION_CODE""#));
//!
//! let parsed = TokenCreateRequest::from_json(&body).unwrap();
//! assert_eq!(parsed.grant_type, request.grant_type);
//! assert_eq!(parsed.scopes, request.scopes);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod codec;
pub mod coerce;
pub mod dto;
pub mod enums;
pub mod error;

// Re-export the core surface at the crate root for convenience
pub use codec::{FromMap, ToMap};
pub use coerce::StringOrInt;
pub use enums::WireEnum;
pub use error::{DtoError, DtoResult};

// Wire-layer types flow through the public API of this crate
pub use authkit_wire::{Map, Value, WireError};

/// Version of the authkit types crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
