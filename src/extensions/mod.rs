// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! LISP extension addresses
//!
//! LCAF addresses have no generic mapping form. Each LCAF type needs an
//! [`ExtensionInterpreter`] registered in an [`ExtensionRegistry`]; types
//! with no interpreter translate to no address at all.

pub mod as_address;
pub mod interpreter;

pub use as_address::{LispAsAddress, LispAsAddressBuilder};
pub use interpreter::{AsNumberInterpreter, ExtensionInterpreter, ExtensionRegistry};

use std::fmt;

/// Kind of an [`ExtensionMappingAddress`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionMappingAddressType {
    As,
}

impl ExtensionMappingAddressType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtensionMappingAddressType::As => "AS",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "AS" => Some(ExtensionMappingAddressType::As),
            _ => None,
        }
    }
}

/// Mapping address carrying a protocol-specific payload
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExtensionMappingAddress {
    As(LispAsAddress),
}

impl ExtensionMappingAddress {
    pub fn extension_type(&self) -> ExtensionMappingAddressType {
        match self {
            ExtensionMappingAddress::As(_) => ExtensionMappingAddressType::As,
        }
    }
}

impl From<LispAsAddress> for ExtensionMappingAddress {
    fn from(address: LispAsAddress) -> Self {
        ExtensionMappingAddress::As(address)
    }
}

impl fmt::Display for ExtensionMappingAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionMappingAddress::As(address) => write!(f, "{}", address),
        }
    }
}
