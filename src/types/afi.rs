// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! Address Family Identifiers and AFI-tagged addresses

use super::lcaf::LcafAddress;
use super::mac::MacAddress;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Address Family Identifier (IANA assigned code points)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Afi {
    /// IPv4
    Ip4,
    /// IPv6
    Ip6,
    /// Distinguished name
    DistinguishedName,
    /// Autonomous system number
    As,
    /// LISP Canonical Address Format
    Lcaf,
    /// 48-bit MAC
    Mac,
    /// Any code point this crate has no address type for
    Unknown(u16),
}

impl Afi {
    /// Returns the wire code of this family
    pub fn code(&self) -> u16 {
        match self {
            Afi::Ip4 => 1,
            Afi::Ip6 => 2,
            Afi::DistinguishedName => 17,
            Afi::As => 18,
            Afi::Lcaf => 16387,
            Afi::Mac => 16389,
            Afi::Unknown(code) => *code,
        }
    }

    /// Looks up the family for a wire code
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Afi::Ip4,
            2 => Afi::Ip6,
            17 => Afi::DistinguishedName,
            18 => Afi::As,
            16387 => Afi::Lcaf,
            16389 => Afi::Mac,
            other => Afi::Unknown(other),
        }
    }
}

impl fmt::Display for Afi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Afi::Ip4 => write!(f, "IP4"),
            Afi::Ip6 => write!(f, "IP6"),
            Afi::DistinguishedName => write!(f, "DISTINGUISHED_NAME"),
            Afi::As => write!(f, "AS"),
            Afi::Lcaf => write!(f, "LCAF"),
            Afi::Mac => write!(f, "MAC"),
            Afi::Unknown(code) => write!(f, "UNKNOWN({})", code),
        }
    }
}

/// An address carried in a LISP message, tagged by its family
///
/// Equality and hashing cover both the family and the wrapped value, so two
/// addresses of different families never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "afi", content = "address", rename_all = "snake_case")]
pub enum AfiAddress {
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    Mac(MacAddress),
    DistinguishedName(String),
    As(u32),
    Lcaf(LcafAddress),
}

impl AfiAddress {
    /// Returns the family tag of this address
    pub fn afi(&self) -> Afi {
        match self {
            AfiAddress::Ipv4(_) => Afi::Ip4,
            AfiAddress::Ipv6(_) => Afi::Ip6,
            AfiAddress::Mac(_) => Afi::Mac,
            AfiAddress::DistinguishedName(_) => Afi::DistinguishedName,
            AfiAddress::As(_) => Afi::As,
            AfiAddress::Lcaf(_) => Afi::Lcaf,
        }
    }

    /// Returns the wrapped IP address for the IPv4 and IPv6 families
    pub fn ip(&self) -> Option<IpAddr> {
        match self {
            AfiAddress::Ipv4(addr) => Some(IpAddr::V4(*addr)),
            AfiAddress::Ipv6(addr) => Some(IpAddr::V6(*addr)),
            _ => None,
        }
    }
}

impl From<IpAddr> for AfiAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => AfiAddress::Ipv4(v4),
            IpAddr::V6(v6) => AfiAddress::Ipv6(v6),
        }
    }
}

impl From<Ipv4Addr> for AfiAddress {
    fn from(addr: Ipv4Addr) -> Self {
        AfiAddress::Ipv4(addr)
    }
}

impl From<Ipv6Addr> for AfiAddress {
    fn from(addr: Ipv6Addr) -> Self {
        AfiAddress::Ipv6(addr)
    }
}

impl From<MacAddress> for AfiAddress {
    fn from(addr: MacAddress) -> Self {
        AfiAddress::Mac(addr)
    }
}

impl From<LcafAddress> for AfiAddress {
    fn from(addr: LcafAddress) -> Self {
        AfiAddress::Lcaf(addr)
    }
}

impl fmt::Display for AfiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AfiAddress::Ipv4(addr) => write!(f, "{}", addr),
            AfiAddress::Ipv6(addr) => write!(f, "{}", addr),
            AfiAddress::Mac(addr) => write!(f, "{}", addr),
            AfiAddress::DistinguishedName(name) => write!(f, "{}", name),
            AfiAddress::As(number) => write!(f, "AS{}", number),
            AfiAddress::Lcaf(lcaf) => write!(f, "{}", lcaf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_afi_code_roundtrip() {
        for afi in [
            Afi::Ip4,
            Afi::Ip6,
            Afi::DistinguishedName,
            Afi::As,
            Afi::Lcaf,
            Afi::Mac,
        ] {
            assert_eq!(Afi::from_code(afi.code()), afi);
        }
        assert_eq!(Afi::from_code(9999), Afi::Unknown(9999));
    }

    #[test]
    fn test_address_reports_family() {
        assert_eq!(AfiAddress::Ipv4(Ipv4Addr::LOCALHOST).afi(), Afi::Ip4);
        assert_eq!(AfiAddress::Ipv6(Ipv6Addr::LOCALHOST).afi(), Afi::Ip6);
        assert_eq!(AfiAddress::As(65000).afi(), Afi::As);
        assert_eq!(
            AfiAddress::DistinguishedName("router-1".to_string()).afi(),
            Afi::DistinguishedName
        );
        assert_eq!(AfiAddress::Mac(MacAddress::new([1; 6])).afi(), Afi::Mac);
    }

    #[test]
    fn test_equality_covers_family_and_value() {
        let a = AfiAddress::DistinguishedName("name".to_string());
        let b = AfiAddress::DistinguishedName("name".to_string());
        let c = AfiAddress::DistinguishedName("other".to_string());
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(b);
        set.insert(AfiAddress::As(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(AfiAddress::As(65001).to_string(), "AS65001");
        assert_eq!(
            AfiAddress::Ipv4(Ipv4Addr::new(10, 1, 2, 3)).to_string(),
            "10.1.2.3"
        );
        assert_eq!(Afi::DistinguishedName.to_string(), "DISTINGUISHED_NAME");
    }

    #[test]
    fn test_serde_shape() {
        let addr = AfiAddress::Ipv4(Ipv4Addr::new(192, 0, 2, 1));
        let json = serde_json::to_value(&addr).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"afi": "ipv4", "address": "192.0.2.1"})
        );
        let back: AfiAddress = serde_json::from_value(json).unwrap();
        assert_eq!(back, addr);
    }
}
