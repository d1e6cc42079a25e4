// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! LISP Canonical Address Format (LCAF)
//!
//! An LCAF address is itself a container: its type code selects the shape of
//! the payload, and most payloads nest further [`AfiAddress`]es.

use super::afi::AfiAddress;
use crate::error::AddressError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// LCAF type codes (RFC 8060)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LcafType {
    Null,
    List,
    InstanceId,
    AsNumber,
    ApplicationData,
    GeoCoordinate,
    NatTraversal,
    Multicast,
    ExplicitLocatorPath,
    SourceDestKey,
    Unknown(u8),
}

impl LcafType {
    /// Returns the wire code of this type
    pub fn code(&self) -> u8 {
        match self {
            LcafType::Null => 0,
            LcafType::List => 1,
            LcafType::InstanceId => 2,
            LcafType::AsNumber => 3,
            LcafType::ApplicationData => 4,
            LcafType::GeoCoordinate => 5,
            LcafType::NatTraversal => 7,
            LcafType::Multicast => 9,
            LcafType::ExplicitLocatorPath => 10,
            LcafType::SourceDestKey => 12,
            LcafType::Unknown(code) => *code,
        }
    }

    /// Looks up the type for a wire code
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => LcafType::Null,
            1 => LcafType::List,
            2 => LcafType::InstanceId,
            3 => LcafType::AsNumber,
            4 => LcafType::ApplicationData,
            5 => LcafType::GeoCoordinate,
            7 => LcafType::NatTraversal,
            9 => LcafType::Multicast,
            10 => LcafType::ExplicitLocatorPath,
            12 => LcafType::SourceDestKey,
            other => LcafType::Unknown(other),
        }
    }

    /// True for types decoded into a dedicated [`LcafPayload`] variant
    pub fn has_structured_payload(&self) -> bool {
        matches!(
            self,
            LcafType::List | LcafType::InstanceId | LcafType::AsNumber | LcafType::SourceDestKey
        )
    }
}

impl fmt::Display for LcafType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LcafType::Unknown(code) => write!(f, "UNKNOWN({})", code),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Decoded LCAF payload
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LcafPayload {
    /// AFI list: an ordered set of addresses, typically one IPv4 and one IPv6
    List { addresses: Vec<AfiAddress> },
    /// Instance ID: an address scoped to a virtual network
    InstanceId {
        instance_id: u32,
        mask_length: u8,
        address: Box<AfiAddress>,
    },
    /// AS number: an address qualified with its origin AS
    AsNumber {
        as_number: u32,
        address: Box<AfiAddress>,
    },
    /// Source/destination key
    SourceDest {
        src_mask_length: u8,
        dst_mask_length: u8,
        src: Box<AfiAddress>,
        dst: Box<AfiAddress>,
    },
    /// Payload kept undecoded, for types without a dedicated representation
    Raw { lcaf_type: LcafType, data: Vec<u8> },
}

/// A LISP Canonical Address Format address
///
/// The type code is always derived from the payload, so the two cannot
/// disagree.
///
/// A raw payload is only accepted for types without a structured variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LcafPayload", into = "LcafPayload")]
pub struct LcafAddress {
    payload: LcafPayload,
}

impl LcafAddress {
    /// Wraps a decoded payload
    pub fn new(payload: LcafPayload) -> Result<Self, AddressError> {
        match &payload {
            LcafPayload::Raw { lcaf_type, .. } if lcaf_type.has_structured_payload() => {
                Err(AddressError::StructuredLcaf(*lcaf_type))
            }
            _ => Ok(Self { payload }),
        }
    }

    /// Builds an address whose payload is kept as opaque bytes
    pub fn raw(lcaf_type: LcafType, data: Vec<u8>) -> Result<Self, AddressError> {
        Self::new(LcafPayload::Raw { lcaf_type, data })
    }

    /// Builds an AFI list address
    pub fn list(addresses: Vec<AfiAddress>) -> Self {
        Self {
            payload: LcafPayload::List { addresses },
        }
    }

    /// Builds an AS number address
    pub fn as_number(as_number: u32, address: AfiAddress) -> Self {
        Self {
            payload: LcafPayload::AsNumber {
                as_number,
                address: Box::new(address),
            },
        }
    }

    /// Builds a source/destination key address
    pub fn source_dest(
        src_mask_length: u8,
        dst_mask_length: u8,
        src: AfiAddress,
        dst: AfiAddress,
    ) -> Self {
        Self {
            payload: LcafPayload::SourceDest {
                src_mask_length,
                dst_mask_length,
                src: Box::new(src),
                dst: Box::new(dst),
            },
        }
    }

    /// Builds an instance ID address
    pub fn instance_id(instance_id: u32, mask_length: u8, address: AfiAddress) -> Self {
        Self {
            payload: LcafPayload::InstanceId {
                instance_id,
                mask_length,
                address: Box::new(address),
            },
        }
    }

    /// Returns the LCAF type of this address
    pub fn lcaf_type(&self) -> LcafType {
        match &self.payload {
            LcafPayload::List { .. } => LcafType::List,
            LcafPayload::InstanceId { .. } => LcafType::InstanceId,
            LcafPayload::AsNumber { .. } => LcafType::AsNumber,
            LcafPayload::SourceDest { .. } => LcafType::SourceDestKey,
            LcafPayload::Raw { lcaf_type, .. } => *lcaf_type,
        }
    }

    /// Returns the payload
    pub fn payload(&self) -> &LcafPayload {
        &self.payload
    }
}

impl TryFrom<LcafPayload> for LcafAddress {
    type Error = AddressError;

    fn try_from(payload: LcafPayload) -> Result<Self, Self::Error> {
        Self::new(payload)
    }
}

impl From<LcafAddress> for LcafPayload {
    fn from(address: LcafAddress) -> Self {
        address.payload
    }
}

impl fmt::Display for LcafAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LCAF({})", self.lcaf_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_type_follows_payload() {
        let list = LcafAddress::list(vec![
            AfiAddress::Ipv4(Ipv4Addr::new(10, 0, 0, 1)),
            AfiAddress::Ipv6(Ipv6Addr::LOCALHOST),
        ]);
        assert_eq!(list.lcaf_type(), LcafType::List);

        let asn = LcafAddress::as_number(65000, AfiAddress::Ipv4(Ipv4Addr::LOCALHOST));
        assert_eq!(asn.lcaf_type(), LcafType::AsNumber);

        let raw = LcafAddress::raw(LcafType::GeoCoordinate, vec![1, 2, 3]).unwrap();
        assert_eq!(raw.lcaf_type(), LcafType::GeoCoordinate);

        let sd = LcafAddress::source_dest(
            24,
            32,
            AfiAddress::Ipv4(Ipv4Addr::new(10, 0, 0, 0)),
            AfiAddress::Ipv4(Ipv4Addr::new(10, 1, 0, 1)),
        );
        assert_eq!(sd.lcaf_type(), LcafType::SourceDestKey);
    }

    #[test]
    fn test_raw_rejects_structured_types() {
        for lcaf_type in [
            LcafType::List,
            LcafType::InstanceId,
            LcafType::AsNumber,
            LcafType::SourceDestKey,
        ] {
            assert_eq!(
                LcafAddress::raw(lcaf_type, vec![0, 0, 0xfd, 0xe8]),
                Err(AddressError::StructuredLcaf(lcaf_type))
            );
        }
        assert!(LcafAddress::raw(LcafType::Unknown(99), vec![]).is_ok());
        assert!(LcafAddress::raw(LcafType::NatTraversal, vec![1]).is_ok());
    }

    #[test]
    fn test_deserialize_rejects_structured_raw() {
        let json = serde_json::json!({"kind": "raw", "lcaf_type": "AsNumber", "data": [0, 1]});
        assert!(serde_json::from_value::<LcafAddress>(json).is_err());

        let json = serde_json::json!({"kind": "raw", "lcaf_type": "Multicast", "data": [0, 1]});
        let lcaf: LcafAddress = serde_json::from_value(json).unwrap();
        assert_eq!(lcaf.lcaf_type(), LcafType::Multicast);
    }

    #[test]
    fn test_type_codes() {
        assert_eq!(LcafType::from_code(1), LcafType::List);
        assert_eq!(LcafType::from_code(12), LcafType::SourceDestKey);
        assert_eq!(LcafType::from_code(200), LcafType::Unknown(200));
        assert_eq!(LcafType::AsNumber.code(), 3);
    }

    #[test]
    fn test_nested_lcaf_equality() {
        let inner = LcafAddress::list(vec![AfiAddress::As(1)]);
        let a = LcafAddress::instance_id(7, 32, AfiAddress::Lcaf(inner.clone()));
        let b = LcafAddress::instance_id(7, 32, AfiAddress::Lcaf(inner));
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "LCAF(InstanceId)");
    }
}
