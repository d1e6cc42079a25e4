// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! Locator (RLOC) entries of a map record

use crate::types::AfiAddress;

/// One routing locator reachable for an EID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    priority: u8,
    weight: u8,
    multicast_priority: u8,
    multicast_weight: u8,
    local: bool,
    rloc_probed: bool,
    routed: bool,
    locator_afi: Option<AfiAddress>,
}

impl Locator {
    /// Starts building a locator
    pub fn builder() -> LocatorBuilder {
        LocatorBuilder::default()
    }

    /// Unicast priority
    pub fn priority(&self) -> u8 {
        self.priority
    }

    /// Unicast weight
    pub fn weight(&self) -> u8 {
        self.weight
    }

    pub fn multicast_priority(&self) -> u8 {
        self.multicast_priority
    }

    pub fn multicast_weight(&self) -> u8 {
        self.multicast_weight
    }

    /// Whether the locator is local to the registering site
    pub fn is_local(&self) -> bool {
        self.local
    }

    pub fn is_rloc_probed(&self) -> bool {
        self.rloc_probed
    }

    /// Whether the locator is reachable
    pub fn is_routed(&self) -> bool {
        self.routed
    }

    /// The locator address; absent when the message omitted it
    pub fn locator_afi(&self) -> Option<&AfiAddress> {
        self.locator_afi.as_ref()
    }
}

/// Builder for [`Locator`]
#[derive(Debug, Clone, Default)]
pub struct LocatorBuilder {
    priority: u8,
    weight: u8,
    multicast_priority: u8,
    multicast_weight: u8,
    local: bool,
    rloc_probed: bool,
    routed: bool,
    locator_afi: Option<AfiAddress>,
}

impl LocatorBuilder {
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_weight(mut self, weight: u8) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_multicast_priority(mut self, priority: u8) -> Self {
        self.multicast_priority = priority;
        self
    }

    pub fn with_multicast_weight(mut self, weight: u8) -> Self {
        self.multicast_weight = weight;
        self
    }

    pub fn with_local(mut self, local: bool) -> Self {
        self.local = local;
        self
    }

    pub fn with_rloc_probed(mut self, probed: bool) -> Self {
        self.rloc_probed = probed;
        self
    }

    pub fn with_routed(mut self, routed: bool) -> Self {
        self.routed = routed;
        self
    }

    pub fn with_locator_afi(mut self, address: impl Into<AfiAddress>) -> Self {
        self.locator_afi = Some(address.into());
        self
    }

    pub fn build(self) -> Locator {
        Locator {
            priority: self.priority,
            weight: self.weight,
            multicast_priority: self.multicast_priority,
            multicast_weight: self.multicast_weight,
            local: self.local,
            rloc_probed: self.rloc_probed,
            routed: self.routed,
            locator_afi: self.locator_afi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_locator_builder() {
        let locator = Locator::builder()
            .with_priority(1)
            .with_weight(50)
            .with_multicast_priority(255)
            .with_multicast_weight(0)
            .with_routed(true)
            .with_locator_afi(Ipv4Addr::new(192, 0, 2, 10))
            .build();

        assert_eq!(locator.priority(), 1);
        assert_eq!(locator.weight(), 50);
        assert_eq!(locator.multicast_priority(), 255);
        assert_eq!(locator.multicast_weight(), 0);
        assert!(locator.is_routed());
        assert!(!locator.is_local());
        assert_eq!(
            locator.locator_afi(),
            Some(&AfiAddress::Ipv4(Ipv4Addr::new(192, 0, 2, 10)))
        );
    }

    #[test]
    fn test_locator_without_address() {
        let locator = Locator::builder().with_weight(10).build();
        assert!(locator.locator_afi().is_none());
    }
}
