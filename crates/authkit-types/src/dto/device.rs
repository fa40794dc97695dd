//! Device flow (RFC 8628) backend models.

use authkit_wire::Map;

use crate::codec::{self, FromMap, ToMap};
use crate::coerce;
use crate::dto::common::Property;
use crate::enums::{self, DeviceCompleteResult};
use crate::error::DtoResult;

/// Request reporting the end-user decision that completes a device flow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceCompleteRequest {
    /// The end-user decision.
    pub result: Option<DeviceCompleteResult>,
    /// The user code the decision belongs to.
    pub user_code: Option<String>,
    /// Authenticated end-user identifier.
    pub subject: Option<String>,
    /// Time of end-user authentication, epoch seconds.
    pub auth_time: Option<u64>,
    /// Extra key/value pairs to attach to issued tokens.
    pub properties: Option<Vec<Property>>,
}

impl DeviceCompleteRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the end-user decision.
    #[must_use]
    pub fn with_result(mut self, result: DeviceCompleteResult) -> Self {
        self.result = Some(result);
        self
    }

    /// Set the user code.
    #[must_use]
    pub fn with_user_code(mut self, user_code: impl Into<String>) -> Self {
        self.user_code = Some(user_code.into());
        self
    }

    /// Set the subject.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the authentication time, epoch seconds.
    #[must_use]
    pub fn with_auth_time(mut self, auth_time: u64) -> Self {
        self.auth_time = Some(auth_time);
        self
    }
}

impl ToMap for DeviceCompleteRequest {
    fn write_map(&self, out: &mut Map) {
        codec::put_enum(out, "result", self.result);
        codec::put_string(out, "userCode", self.user_code.as_deref());
        codec::put_string(out, "subject", self.subject.as_deref());
        codec::put_u64_or_zero(out, "authTime", self.auth_time);
        codec::put_nested_array(out, "properties", self.properties.as_deref());
    }
}

impl FromMap for DeviceCompleteRequest {
    fn from_map(map: &Map) -> DtoResult<Self> {
        Ok(Self {
            result: enums::decode("result", map.get("result"))?,
            user_code: coerce::ensure_null_or_string("userCode", map.get("userCode"))?,
            subject: coerce::ensure_null_or_string("subject", map.get("subject"))?,
            auth_time: coerce::ensure_null_or_non_negative("authTime", map.get("authTime"))?,
            properties: codec::get_nested_array("properties", map)?,
        })
    }
}
