// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! Mapping address codec
//!
//! ```json
//! {"type": "IPV4", "ipv4": "10.0.0.1/32"}
//! {"type": "AS", "asNumber": "65000"}
//! {"type": "EXTENSION", "extensionType": "AS", "extension": {"asNumber": 65000}}
//! ```

use super::{CodecContext, JsonCodec, require, require_str};
use crate::error::CodecError;
use crate::extensions::{ExtensionMappingAddress, ExtensionMappingAddressType, LispAsAddress};
use crate::mapping::{MappingAddress, MappingAddressType};
use serde_json::{Map, Value, json};

pub(crate) const TYPE: &str = "type";
pub(crate) const IPV4: &str = "ipv4";
pub(crate) const IPV6: &str = "ipv6";
pub(crate) const AS_NUMBER: &str = "asNumber";
pub(crate) const NAME: &str = "name";
pub(crate) const MAC: &str = "mac";
pub(crate) const EXTENSION_TYPE: &str = "extensionType";
pub(crate) const EXTENSION: &str = "extension";

const TYPE_NAME: &str = "MappingAddress";

/// Codec for [`MappingAddress`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MappingAddressCodec;

impl JsonCodec<MappingAddress> for MappingAddressCodec {
    fn encode(&self, address: &MappingAddress, context: &CodecContext) -> Result<Value, CodecError> {
        let kind = address.address_type().as_str();

        let result = match address {
            MappingAddress::Ipv4(prefix) => json!({ TYPE: kind, IPV4: prefix.to_string() }),
            MappingAddress::Ipv6(prefix) => json!({ TYPE: kind, IPV6: prefix.to_string() }),
            MappingAddress::As(number) => json!({ TYPE: kind, AS_NUMBER: number }),
            MappingAddress::Dn(name) => json!({ TYPE: kind, NAME: name }),
            MappingAddress::Eth(mac) => json!({ TYPE: kind, MAC: mac.to_string() }),
            MappingAddress::Extension(extension) => {
                let encoded = match extension {
                    ExtensionMappingAddress::As(as_address) => {
                        context.codec::<LispAsAddress>()?.encode(as_address, context)?
                    }
                };
                json!({
                    TYPE: kind,
                    EXTENSION_TYPE: extension.extension_type().as_str(),
                    EXTENSION: encoded,
                })
            }
        };

        Ok(result)
    }

    fn decode(
        &self,
        json: &Value,
        context: &CodecContext,
    ) -> Result<Option<MappingAddress>, CodecError> {
        let Some(object) = json.as_object() else {
            return Ok(None);
        };

        let kind = require_str(object, TYPE, TYPE_NAME)?;
        let kind = MappingAddressType::from_name(kind).ok_or_else(|| CodecError::InvalidField {
            member: TYPE,
            reason: format!("unknown mapping address type {}", kind),
        })?;

        let address = match kind {
            MappingAddressType::Ipv4 => MappingAddress::Ipv4(parse_member(object, IPV4)?),
            MappingAddressType::Ipv6 => MappingAddress::Ipv6(parse_member(object, IPV6)?),
            MappingAddressType::As => {
                MappingAddress::as_number(require_str(object, AS_NUMBER, TYPE_NAME)?)
            }
            MappingAddressType::Dn => MappingAddress::dn(require_str(object, NAME, TYPE_NAME)?),
            MappingAddressType::Eth => MappingAddress::Eth(parse_member(object, MAC)?),
            MappingAddressType::Extension => return decode_extension(object, context),
        };

        Ok(Some(address))
    }
}

fn decode_extension(
    object: &Map<String, Value>,
    context: &CodecContext,
) -> Result<Option<MappingAddress>, CodecError> {
    let name = require_str(object, EXTENSION_TYPE, TYPE_NAME)?;
    let kind =
        ExtensionMappingAddressType::from_name(name).ok_or_else(|| CodecError::InvalidField {
            member: EXTENSION_TYPE,
            reason: format!("unknown extension address type {}", name),
        })?;
    let payload = require(object, EXTENSION, TYPE_NAME)?;
    if !payload.is_object() {
        return Err(CodecError::InvalidField {
            member: EXTENSION,
            reason: "expected an object".to_string(),
        });
    }

    let extension = match kind {
        ExtensionMappingAddressType::As => context
            .codec::<LispAsAddress>()?
            .decode(payload, context)?
            .map(ExtensionMappingAddress::As),
    };

    extension
        .map(|extension| Some(MappingAddress::Extension(extension)))
        .ok_or_else(|| CodecError::InvalidField {
            member: EXTENSION,
            reason: "extension payload decoded to nothing".to_string(),
        })
}

fn parse_member<T>(object: &Map<String, Value>, member: &'static str) -> Result<T, CodecError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    require_str(object, member, TYPE_NAME)?
        .parse()
        .map_err(|e: T::Err| CodecError::InvalidField {
            member,
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MacAddress;

    fn roundtrip(address: MappingAddress) -> Value {
        let context = CodecContext::with_defaults();
        let json = MappingAddressCodec.encode(&address, &context).unwrap();
        let decoded = MappingAddressCodec.decode(&json, &context).unwrap();
        assert_eq!(decoded, Some(address));
        json
    }

    #[test]
    fn test_ip_prefixes() {
        let json = roundtrip(MappingAddress::ipv4("10.0.0.1/32".parse().unwrap()));
        assert_eq!(json, json!({"type": "IPV4", "ipv4": "10.0.0.1/32"}));

        roundtrip(MappingAddress::ipv6("2001:db8::1/128".parse().unwrap()));
    }

    #[test]
    fn test_scalar_types() {
        let json = roundtrip(MappingAddress::as_number("65000"));
        assert_eq!(json, json!({"type": "AS", "asNumber": "65000"}));

        roundtrip(MappingAddress::dn("xtr.example"));
        roundtrip(MappingAddress::eth(MacAddress::new([2, 0, 0, 0, 0, 1])));
    }

    #[test]
    fn test_extension_uses_nested_codec() {
        let as_address = LispAsAddress::builder()
            .with_as_number(64512)
            .with_address(Some(MappingAddress::dn("edge")))
            .build();
        let json = roundtrip(MappingAddress::extension(ExtensionMappingAddress::As(
            as_address,
        )));

        assert_eq!(json["extensionType"], "AS");
        assert_eq!(json["extension"]["asNumber"], 64512);
        assert_eq!(json["extension"]["address"]["type"], "DN");
    }

    #[test]
    fn test_decode_errors() {
        let context = CodecContext::with_defaults();

        let missing_type = json!({"ipv4": "10.0.0.1/32"});
        assert!(matches!(
            MappingAddressCodec.decode(&missing_type, &context),
            Err(CodecError::MissingMember { member: "type", .. })
        ));

        let bad_prefix = json!({"type": "IPV4", "ipv4": "10.0.0.1/40"});
        assert!(matches!(
            MappingAddressCodec.decode(&bad_prefix, &context),
            Err(CodecError::InvalidField { member: "ipv4", .. })
        ));

        let unknown_type = json!({"type": "GEO"});
        assert!(MappingAddressCodec.decode(&unknown_type, &context).is_err());
    }

    #[test]
    fn test_extension_payload_must_be_object() {
        let context = CodecContext::with_defaults();

        for payload in [json!(5), json!("AS65000"), json!([1])] {
            let address = json!({"type": "EXTENSION", "extensionType": "AS", "extension": payload});
            assert!(matches!(
                MappingAddressCodec.decode(&address, &context),
                Err(CodecError::InvalidField { member: "extension", .. })
            ));
        }

        let missing = json!({"type": "EXTENSION", "extensionType": "AS"});
        assert!(matches!(
            MappingAddressCodec.decode(&missing, &context),
            Err(CodecError::MissingMember { member: "extension", .. })
        ));
    }
}
