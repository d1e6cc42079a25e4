// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! Mapping treatments: one per locator of a mapping

use super::address::MappingAddress;

/// A locator address together with its unicast and multicast preferences
///
/// The address may be absent when the locator could not be translated; the
/// weights and priorities are still kept so the locator's position in the
/// preference order survives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MappingTreatment {
    address: Option<MappingAddress>,
    unicast_weight: u8,
    unicast_priority: u8,
    multicast_weight: u8,
    multicast_priority: u8,
}

impl MappingTreatment {
    pub fn builder() -> MappingTreatmentBuilder {
        MappingTreatmentBuilder::default()
    }

    pub fn address(&self) -> Option<&MappingAddress> {
        self.address.as_ref()
    }

    pub fn unicast_weight(&self) -> u8 {
        self.unicast_weight
    }

    pub fn unicast_priority(&self) -> u8 {
        self.unicast_priority
    }

    pub fn multicast_weight(&self) -> u8 {
        self.multicast_weight
    }

    pub fn multicast_priority(&self) -> u8 {
        self.multicast_priority
    }
}

/// Builder for [`MappingTreatment`]
#[derive(Debug, Clone, Default)]
pub struct MappingTreatmentBuilder {
    address: Option<MappingAddress>,
    unicast_weight: u8,
    unicast_priority: u8,
    multicast_weight: u8,
    multicast_priority: u8,
}

impl MappingTreatmentBuilder {
    pub fn with_address(mut self, address: MappingAddress) -> Self {
        self.address = Some(address);
        self
    }

    pub fn set_unicast_weight(mut self, weight: u8) -> Self {
        self.unicast_weight = weight;
        self
    }

    pub fn set_unicast_priority(mut self, priority: u8) -> Self {
        self.unicast_priority = priority;
        self
    }

    pub fn set_multicast_weight(mut self, weight: u8) -> Self {
        self.multicast_weight = weight;
        self
    }

    pub fn set_multicast_priority(mut self, priority: u8) -> Self {
        self.multicast_priority = priority;
        self
    }

    pub fn build(self) -> MappingTreatment {
        MappingTreatment {
            address: self.address,
            unicast_weight: self.unicast_weight,
            unicast_priority: self.unicast_priority,
            multicast_weight: self.multicast_weight,
            multicast_priority: self.multicast_priority,
        }
    }
}
