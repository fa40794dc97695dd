//! Bidirectional conversion between typed models and the generic map.
//!
//! Every model implements [`ToMap`] and [`FromMap`] over an explicit field
//! table: one `put_*` call per field on the way out, one `coerce`/`enums`
//! lookup per field on the way in. Nested models and sequences of nested
//! models recurse through the same traits; recursion depth is bounded by the
//! static schema, so no guard is needed.
//!
//! The write side is total — absent scalars are written as explicit JSON
//! null. The read side is all-or-nothing: the first value that fails its
//! coercion aborts the conversion and no partial model is returned.

use authkit_wire::{Map, Value};

use crate::coerce::{self, StringOrInt};
use crate::enums::{self, WireEnum};
use crate::error::DtoResult;

/// Convert a model into the generic ordered map.
pub trait ToMap {
    /// Write every declared field of this model into `out`, in field order.
    fn write_map(&self, out: &mut Map);

    /// Produce the wire map for this model.
    #[must_use]
    fn to_map(&self) -> Map {
        let mut out = Map::new();
        self.write_map(&mut out);
        out
    }

    /// Render this model as compact JSON text.
    fn to_json(&self) -> DtoResult<String> {
        Ok(authkit_wire::serialize(&self.to_map())?)
    }

    /// Render this model as indented JSON text for human inspection.
    fn to_json_pretty(&self) -> DtoResult<String> {
        Ok(authkit_wire::serialize_pretty(&self.to_map())?)
    }
}

/// Build a model from the generic map, re-validating every value.
pub trait FromMap: Sized {
    /// Decode a map into a model. A missing key is identical to an explicit
    /// null; any coercion failure aborts the whole conversion.
    fn from_map(map: &Map) -> DtoResult<Self>;

    /// Parse JSON text and decode the resulting map.
    fn from_json(text: &str) -> DtoResult<Self> {
        let map = authkit_wire::parse(text)?;
        Self::from_map(&map).inspect_err(|err| {
            tracing::warn!(error = %err, "wire map failed model validation");
        })
    }
}

/// Write an optional boolean, null when absent.
pub fn put_bool(out: &mut Map, key: &str, value: Option<bool>) {
    out.insert(key.to_string(), value.map_or(Value::Null, Value::from));
}

/// Write an optional integer, null when absent.
pub fn put_i64(out: &mut Map, key: &str, value: Option<i64>) {
    out.insert(key.to_string(), value.map_or(Value::Null, Value::from));
}

/// Write an optional string, null when absent.
pub fn put_string(out: &mut Map, key: &str, value: Option<&str>) {
    out.insert(key.to_string(), value.map_or(Value::Null, Value::from));
}

/// Write an optional string-or-integer, null when absent.
pub fn put_string_or_int(out: &mut Map, key: &str, value: Option<&StringOrInt>) {
    out.insert(key.to_string(), value.map_or(Value::Null, Value::from));
}

/// Write an optional array of strings, null when absent.
pub fn put_string_array(out: &mut Map, key: &str, value: Option<&[String]>) {
    let rendered = value.map_or(Value::Null, |items| {
        Value::Array(items.iter().map(|s| Value::from(s.as_str())).collect())
    });
    out.insert(key.to_string(), rendered);
}

/// Write an optional closed-set value as its canonical name, null when
/// absent.
pub fn put_enum<E: WireEnum>(out: &mut Map, key: &str, value: Option<E>) {
    out.insert(key.to_string(), enums::encode(value));
}

/// Write an optional non-negative integer, **zero when absent**.
///
/// This is the documented lossy "or-zero" convention for duration and ID
/// fields: after this transform an absent field and a literal zero are
/// indistinguishable. Callers that need the distinction must not route the
/// field through this helper.
pub fn put_u64_or_zero(out: &mut Map, key: &str, value: Option<u64>) {
    out.insert(key.to_string(), Value::from(value.unwrap_or(0)));
}

/// Write an optional integer, **zero when absent** — same lossy convention
/// as [`put_u64_or_zero`].
pub fn put_i64_or_zero(out: &mut Map, key: &str, value: Option<i64>) {
    out.insert(key.to_string(), Value::from(value.unwrap_or(0)));
}

/// Write an optional nested model as a nested map, null when absent.
pub fn put_nested<T: ToMap>(out: &mut Map, key: &str, value: Option<&T>) {
    let rendered = value.map_or(Value::Null, |nested| Value::Object(nested.to_map()));
    out.insert(key.to_string(), rendered);
}

/// Write an optional sequence of nested models as an array of maps, null
/// when absent.
pub fn put_nested_array<T: ToMap>(out: &mut Map, key: &str, value: Option<&[T]>) {
    let rendered = value.map_or(Value::Null, |items| {
        Value::Array(items.iter().map(|item| Value::Object(item.to_map())).collect())
    });
    out.insert(key.to_string(), rendered);
}

/// Decode an optional nested model under `key`.
pub fn get_nested<T: FromMap>(key: &str, map: &Map) -> DtoResult<Option<T>> {
    match coerce::ensure_null_or_object(key, map.get(key))? {
        Some(inner) => T::from_map(inner).map(Some),
        None => Ok(None),
    }
}

/// Decode an optional sequence of nested models under `key`, element-wise.
pub fn get_nested_array<T: FromMap>(key: &str, map: &Map) -> DtoResult<Option<Vec<T>>> {
    match coerce::ensure_null_or_object_array(key, map.get(key))? {
        Some(inners) => {
            let mut out = Vec::with_capacity(inners.len());
            for inner in inners {
                out.push(T::from_map(inner)?);
            }
            Ok(Some(out))
        }
        None => Ok(None),
    }
}
