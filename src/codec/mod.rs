// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! JSON codecs
//!
//! Each codec converts one type to and from a `serde_json::Value`. Codecs for
//! composite types never encode their nested fields themselves: they ask the
//! [`CodecContext`] for the codec registered for the nested type.
//!
//! Decoding distinguishes absent from malformed input. A JSON null or a
//! non-object yields `Ok(None)`; an object missing a required member yields
//! [`CodecError::MissingMember`].

pub mod as_address;
pub mod mapping;
pub mod mapping_address;

pub use as_address::LispAsAddressCodec;
pub use mapping::{
    MappingActionCodec, MappingEntryCodec, MappingKeyCodec, MappingTreatmentCodec,
    MappingValueCodec,
};
pub use mapping_address::MappingAddressCodec;

use crate::error::CodecError;
use crate::extensions::LispAsAddress;
use crate::mapping::{
    MappingAction, MappingAddress, MappingEntry, MappingKey, MappingTreatment, MappingValue,
};
use serde_json::{Map, Value};
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Encoder/decoder between `T` and JSON
pub trait JsonCodec<T>: Send + Sync {
    /// Encodes `value` as a JSON object
    fn encode(&self, value: &T, context: &CodecContext) -> Result<Value, CodecError>;

    /// Decodes `json`; `Ok(None)` when `json` is null or not an object
    fn decode(&self, json: &Value, context: &CodecContext) -> Result<Option<T>, CodecError>;
}

/// Registry of codecs, keyed by the type they handle
#[derive(Default)]
pub struct CodecContext {
    codecs: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl CodecContext {
    /// Creates a context with no codecs registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context with every codec of this crate registered
    pub fn with_defaults() -> Self {
        let mut context = Self::new();
        context.register::<MappingAddress, _>(MappingAddressCodec);
        context.register::<LispAsAddress, _>(LispAsAddressCodec);
        context.register::<MappingAction, _>(MappingActionCodec);
        context.register::<MappingTreatment, _>(MappingTreatmentCodec);
        context.register::<MappingKey, _>(MappingKeyCodec);
        context.register::<MappingValue, _>(MappingValueCodec);
        context.register::<MappingEntry, _>(MappingEntryCodec);
        context
    }

    /// Registers `codec` for `T`, replacing any previous one
    pub fn register<T, C>(&mut self, codec: C)
    where
        T: 'static,
        C: JsonCodec<T> + 'static,
    {
        let codec: Arc<dyn JsonCodec<T>> = Arc::new(codec);
        self.codecs.insert(TypeId::of::<T>(), Box::new(codec));
    }

    /// Returns the codec registered for `T`
    pub fn codec<T: 'static>(&self) -> Result<Arc<dyn JsonCodec<T>>, CodecError> {
        self.codecs
            .get(&TypeId::of::<T>())
            .and_then(|codec| codec.downcast_ref::<Arc<dyn JsonCodec<T>>>())
            .cloned()
            .ok_or_else(|| CodecError::UnknownType(type_name::<T>().to_string()))
    }

    /// Encodes a value that may be missing
    ///
    /// A missing value is a caller error, reported as
    /// [`CodecError::NullArgument`].
    pub fn encode<T: 'static>(&self, value: Option<&T>) -> Result<Value, CodecError> {
        let value = value.ok_or(CodecError::NullArgument(short_type_name::<T>()))?;
        self.codec::<T>()?.encode(value, self)
    }

    /// Decodes a value that may be missing
    pub fn decode<T: 'static>(&self, json: Option<&Value>) -> Result<Option<T>, CodecError> {
        match json {
            Some(json) => self.codec::<T>()?.decode(json, self),
            None => Ok(None),
        }
    }

    /// Encodes a list of values as a JSON array
    pub fn encode_all<T: 'static>(&self, values: &[T]) -> Result<Value, CodecError> {
        let codec = self.codec::<T>()?;
        values
            .iter()
            .map(|value| codec.encode(value, self))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }

    /// Decodes a JSON array, skipping elements that decode to nothing
    pub fn decode_all<T: 'static>(&self, json: &Value) -> Result<Vec<T>, CodecError> {
        let Some(items) = json.as_array() else {
            return Ok(Vec::new());
        };

        let codec = self.codec::<T>()?;
        let mut values = Vec::with_capacity(items.len());
        for item in items {
            if let Some(value) = codec.decode(item, self)? {
                values.push(value);
            }
        }
        Ok(values)
    }

    /// Number of registered codecs
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl fmt::Debug for CodecContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecContext")
            .field("codecs", &self.codecs.len())
            .finish()
    }
}

/// Last path segment of a type name, for error messages
fn short_type_name<T>() -> &'static str {
    let name = type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

/// Returns a required member or fails with [`CodecError::MissingMember`]
pub(crate) fn require<'a>(
    object: &'a Map<String, Value>,
    member: &'static str,
    type_name: &'static str,
) -> Result<&'a Value, CodecError> {
    match object.get(member) {
        Some(Value::Null) | None => Err(CodecError::MissingMember { member, type_name }),
        Some(value) => Ok(value),
    }
}

/// Returns an optional member that must be an object when present
pub(crate) fn optional_object<'a>(
    object: &'a Map<String, Value>,
    member: &'static str,
) -> Option<&'a Value> {
    object.get(member).filter(|value| value.is_object())
}

pub(crate) fn require_str<'a>(
    object: &'a Map<String, Value>,
    member: &'static str,
    type_name: &'static str,
) -> Result<&'a str, CodecError> {
    require(object, member, type_name)?
        .as_str()
        .ok_or_else(|| CodecError::InvalidField {
            member,
            reason: "expected a string".to_string(),
        })
}

pub(crate) fn require_u64(
    object: &Map<String, Value>,
    member: &'static str,
    type_name: &'static str,
) -> Result<u64, CodecError> {
    require(object, member, type_name)?
        .as_u64()
        .ok_or_else(|| CodecError::InvalidField {
            member,
            reason: "expected a non-negative integer".to_string(),
        })
}

pub(crate) fn require_u8(
    object: &Map<String, Value>,
    member: &'static str,
    type_name: &'static str,
) -> Result<u8, CodecError> {
    let value = require_u64(object, member, type_name)?;
    u8::try_from(value).map_err(|_| CodecError::InvalidField {
        member,
        reason: format!("{} does not fit in 8 bits", value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_codec_is_reported() {
        let context = CodecContext::new();
        let err = context
            .encode(Some(&MappingAddress::dn("x")))
            .unwrap_err();
        assert!(matches!(err, CodecError::UnknownType(_)));
    }

    #[test]
    fn test_encode_rejects_missing_value() {
        let context = CodecContext::with_defaults();
        let err = context.encode::<MappingAddress>(None).unwrap_err();
        assert!(matches!(err, CodecError::NullArgument("MappingAddress")));
    }

    #[test]
    fn test_decode_absent_input() {
        let context = CodecContext::with_defaults();
        assert_eq!(context.decode::<MappingAddress>(None).unwrap(), None);
        assert_eq!(
            context.decode::<MappingAddress>(Some(&Value::Null)).unwrap(),
            None
        );
        assert_eq!(
            context.decode::<MappingAddress>(Some(&json!([1, 2]))).unwrap(),
            None
        );
    }

    #[test]
    fn test_require_treats_null_as_missing() {
        let object = json!({"a": null, "b": 1});
        let object = object.as_object().unwrap();
        assert!(require(object, "a", "T").is_err());
        assert!(require(object, "c", "T").is_err());
        assert_eq!(require(object, "b", "T").unwrap(), &json!(1));
    }

    #[test]
    fn test_require_u8_range() {
        let object = json!({"small": 7, "big": 300, "neg": -1});
        let object = object.as_object().unwrap();
        assert_eq!(require_u8(object, "small", "T").unwrap(), 7);
        assert!(matches!(
            require_u8(object, "big", "T"),
            Err(CodecError::InvalidField { .. })
        ));
        assert!(require_u8(object, "neg", "T").is_err());
    }
}
