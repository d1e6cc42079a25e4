// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! Normalized mapping addresses

use crate::extensions::ExtensionMappingAddress;
use crate::types::MacAddress;
use ipnet::{Ipv4Net, Ipv6Net};
use std::fmt;

/// Kind of a [`MappingAddress`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingAddressType {
    Ipv4,
    Ipv6,
    As,
    Dn,
    Eth,
    Extension,
}

impl MappingAddressType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MappingAddressType::Ipv4 => "IPV4",
            MappingAddressType::Ipv6 => "IPV6",
            MappingAddressType::As => "AS",
            MappingAddressType::Dn => "DN",
            MappingAddressType::Eth => "ETH",
            MappingAddressType::Extension => "EXTENSION",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "IPV4" => Some(MappingAddressType::Ipv4),
            "IPV6" => Some(MappingAddressType::Ipv6),
            "AS" => Some(MappingAddressType::As),
            "DN" => Some(MappingAddressType::Dn),
            "ETH" => Some(MappingAddressType::Eth),
            "EXTENSION" => Some(MappingAddressType::Extension),
            _ => None,
        }
    }
}

impl fmt::Display for MappingAddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A protocol-independent address used in mapping keys and treatments
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MappingAddress {
    Ipv4(Ipv4Net),
    Ipv6(Ipv6Net),
    /// Autonomous system number, kept in its decimal string form
    As(String),
    /// Distinguished name
    Dn(String),
    Eth(MacAddress),
    /// Protocol-specific address produced by an extension interpreter
    Extension(ExtensionMappingAddress),
}

impl MappingAddress {
    pub fn ipv4(prefix: Ipv4Net) -> Self {
        MappingAddress::Ipv4(prefix)
    }

    pub fn ipv6(prefix: Ipv6Net) -> Self {
        MappingAddress::Ipv6(prefix)
    }

    pub fn as_number(as_number: impl Into<String>) -> Self {
        MappingAddress::As(as_number.into())
    }

    pub fn dn(name: impl Into<String>) -> Self {
        MappingAddress::Dn(name.into())
    }

    pub fn eth(mac: MacAddress) -> Self {
        MappingAddress::Eth(mac)
    }

    pub fn extension(address: ExtensionMappingAddress) -> Self {
        MappingAddress::Extension(address)
    }

    pub fn address_type(&self) -> MappingAddressType {
        match self {
            MappingAddress::Ipv4(_) => MappingAddressType::Ipv4,
            MappingAddress::Ipv6(_) => MappingAddressType::Ipv6,
            MappingAddress::As(_) => MappingAddressType::As,
            MappingAddress::Dn(_) => MappingAddressType::Dn,
            MappingAddress::Eth(_) => MappingAddressType::Eth,
            MappingAddress::Extension(_) => MappingAddressType::Extension,
        }
    }
}

impl fmt::Display for MappingAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingAddress::Ipv4(prefix) => write!(f, "IPV4:{}", prefix),
            MappingAddress::Ipv6(prefix) => write!(f, "IPV6:{}", prefix),
            MappingAddress::As(number) => write!(f, "AS:{}", number),
            MappingAddress::Dn(name) => write!(f, "DN:{}", name),
            MappingAddress::Eth(mac) => write!(f, "ETH:{}", mac),
            MappingAddress::Extension(ext) => write!(f, "EXTENSION:{}", ext),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_type_names() {
        for t in [
            MappingAddressType::Ipv4,
            MappingAddressType::Ipv6,
            MappingAddressType::As,
            MappingAddressType::Dn,
            MappingAddressType::Eth,
            MappingAddressType::Extension,
        ] {
            assert_eq!(MappingAddressType::from_name(t.as_str()), Some(t));
        }
        assert_eq!(MappingAddressType::from_name("IP"), None);
    }

    #[test]
    fn test_display() {
        let addr = MappingAddress::ipv4("10.0.0.1/32".parse().unwrap());
        assert_eq!(addr.to_string(), "IPV4:10.0.0.1/32");
        assert_eq!(MappingAddress::as_number("65000").to_string(), "AS:65000");
    }
}
