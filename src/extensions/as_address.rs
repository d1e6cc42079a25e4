// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! AS-qualified extension address

use crate::mapping::MappingAddress;
use std::fmt;

/// An address qualified with the autonomous system it belongs to
///
/// The nested address is optional; an AS number on its own is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LispAsAddress {
    as_number: u32,
    address: Option<Box<MappingAddress>>,
}

impl LispAsAddress {
    pub fn builder() -> LispAsAddressBuilder {
        LispAsAddressBuilder::default()
    }

    pub fn as_number(&self) -> u32 {
        self.as_number
    }

    pub fn address(&self) -> Option<&MappingAddress> {
        self.address.as_deref()
    }
}

impl fmt::Display for LispAsAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.address {
            Some(address) => write!(f, "AS{}({})", self.as_number, address),
            None => write!(f, "AS{}", self.as_number),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LispAsAddressBuilder {
    as_number: u32,
    address: Option<MappingAddress>,
}

impl LispAsAddressBuilder {
    pub fn with_as_number(mut self, as_number: u32) -> Self {
        self.as_number = as_number;
        self
    }

    pub fn with_address(mut self, address: Option<MappingAddress>) -> Self {
        self.address = address;
        self
    }

    pub fn build(self) -> LispAsAddress {
        LispAsAddress {
            as_number: self.as_number,
            address: self.address.map(Box::new),
        }
    }
}
