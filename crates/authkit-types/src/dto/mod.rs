//! Request and response models.
//!
//! Each model maps one request or response shape of the remote API. The wire
//! key of every field is fixed by the remote contract and preserved verbatim
//! — the backend management endpoints use camelCase keys, the standard OAuth
//! token endpoint uses snake_case — so a key here is part of the wire
//! format, not a style choice.

mod common;
mod device;
mod token;

pub use common::{Client, Property};
pub use device::DeviceCompleteRequest;
pub use token::{
    AccessTokenRecord, TokenCreateRequest, TokenCreateResponse, TokenListResponse, TokenResponse,
};
