// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! LISP AS address codec
//!
//! ```json
//! {"asNumber": 65000, "address": {"type": "IPV4", "ipv4": "10.0.0.1/32"}}
//! ```
//!
//! `asNumber` is required. `address` is optional and is decoded with the
//! context's [`MappingAddress`] codec.

use super::{CodecContext, JsonCodec, optional_object, require};
use crate::error::CodecError;
use crate::extensions::LispAsAddress;
use crate::mapping::MappingAddress;
use serde_json::{Map, Value};

pub(crate) const AS_NUMBER: &str = "asNumber";
pub(crate) const ADDRESS: &str = "address";

const TYPE_NAME: &str = "LispAsAddress";

/// Codec for [`LispAsAddress`]
///
/// `asNumber` must be an integer in `0..=4294967295` (a 4-byte ASN);
/// negative or larger values fail with [`CodecError::InvalidField`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LispAsAddressCodec;

impl JsonCodec<LispAsAddress> for LispAsAddressCodec {
    fn encode(&self, address: &LispAsAddress, context: &CodecContext) -> Result<Value, CodecError> {
        let mut result = Map::new();
        result.insert(AS_NUMBER.to_string(), Value::from(address.as_number()));

        if let Some(nested) = address.address() {
            let address_codec = context.codec::<MappingAddress>()?;
            result.insert(ADDRESS.to_string(), address_codec.encode(nested, context)?);
        }

        Ok(Value::Object(result))
    }

    fn decode(
        &self,
        json: &Value,
        context: &CodecContext,
    ) -> Result<Option<LispAsAddress>, CodecError> {
        let Some(object) = json.as_object() else {
            return Ok(None);
        };

        let as_number = require(object, AS_NUMBER, TYPE_NAME)?;
        let as_number = as_number
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| CodecError::InvalidField {
                member: AS_NUMBER,
                reason: format!("{} is not a 32-bit AS number", as_number),
            })?;

        let address = match optional_object(object, ADDRESS) {
            Some(address_json) => context
                .codec::<MappingAddress>()?
                .decode(address_json, context)?,
            None => None,
        };

        Ok(Some(
            LispAsAddress::builder()
                .with_as_number(as_number)
                .with_address(address)
                .build(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_roundtrip_without_nested_address() {
        let context = CodecContext::with_defaults();
        let address = LispAsAddress::builder().with_as_number(65001).build();

        let json = LispAsAddressCodec.encode(&address, &context).unwrap();
        assert_eq!(json, json!({"asNumber": 65001}));

        let decoded = LispAsAddressCodec.decode(&json, &context).unwrap();
        assert_eq!(decoded, Some(address));
        assert!(decoded.unwrap().address().is_none());
    }

    #[test]
    fn test_roundtrip_with_nested_address() {
        let context = CodecContext::with_defaults();
        let address = LispAsAddress::builder()
            .with_as_number(1)
            .with_address(Some(MappingAddress::ipv4("192.0.2.0/32".parse().unwrap())))
            .build();

        let json = LispAsAddressCodec.encode(&address, &context).unwrap();
        assert_eq!(json["address"]["ipv4"], "192.0.2.0/32");
        assert_eq!(
            LispAsAddressCodec.decode(&json, &context).unwrap(),
            Some(address)
        );
    }

    #[test]
    fn test_missing_as_number_fails() {
        let context = CodecContext::with_defaults();
        for json in [
            json!({}),
            json!({"asNumber": null}),
            json!({"address": {"type": "DN", "name": "x"}}),
        ] {
            let err = LispAsAddressCodec.decode(&json, &context).unwrap_err();
            assert!(matches!(
                err,
                CodecError::MissingMember {
                    member: "asNumber",
                    type_name: "LispAsAddress"
                }
            ));
        }
    }

    #[test]
    fn test_non_object_input_is_absent() {
        let context = CodecContext::with_defaults();
        assert_eq!(LispAsAddressCodec.decode(&Value::Null, &context).unwrap(), None);
        assert_eq!(LispAsAddressCodec.decode(&json!(42), &context).unwrap(), None);
        assert_eq!(LispAsAddressCodec.decode(&json!("AS1"), &context).unwrap(), None);
    }

    #[test]
    fn test_out_of_range_as_number() {
        let context = CodecContext::with_defaults();
        for json in [json!({"asNumber": -1}), json!({"asNumber": 4294967296u64}), json!({"asNumber": "1"})] {
            assert!(matches!(
                LispAsAddressCodec.decode(&json, &context),
                Err(CodecError::InvalidField { member: "asNumber", .. })
            ));
        }
    }

    #[test]
    fn test_nested_decode_needs_registered_codec() {
        let mut context = CodecContext::new();
        context.register::<LispAsAddress, _>(LispAsAddressCodec);

        let json = json!({"asNumber": 7, "address": {"type": "DN", "name": "x"}});
        assert!(matches!(
            LispAsAddressCodec.decode(&json, &context),
            Err(CodecError::UnknownType(_))
        ));

        // Without a nested address no lookup happens
        let bare = json!({"asNumber": 7});
        assert!(LispAsAddressCodec.decode(&bare, &context).unwrap().is_some());
    }
}
