// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! Map records: one EID-prefix bound to its locator set

use super::locator::Locator;
use crate::types::AfiAddress;
use std::fmt;

/// Action a router takes for an EID when the locator set is empty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MapRecordAction {
    #[default]
    NoAction,
    NativelyForward,
    SendMapRequest,
    Drop,
    /// Any code outside the defined set, kept so it can be reported
    Unknown(u8),
}

impl MapRecordAction {
    pub fn code(&self) -> u8 {
        match self {
            MapRecordAction::NoAction => 0,
            MapRecordAction::NativelyForward => 1,
            MapRecordAction::SendMapRequest => 2,
            MapRecordAction::Drop => 3,
            MapRecordAction::Unknown(code) => *code,
        }
    }

    pub fn from_code(code: u8) -> Self {
        match code {
            0 => MapRecordAction::NoAction,
            1 => MapRecordAction::NativelyForward,
            2 => MapRecordAction::SendMapRequest,
            3 => MapRecordAction::Drop,
            other => MapRecordAction::Unknown(other),
        }
    }
}

impl fmt::Display for MapRecordAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapRecordAction::Unknown(code) => write!(f, "Unknown({})", code),
            other => write!(f, "{:?}", other),
        }
    }
}

/// A decoded map record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapRecord {
    record_ttl: u32,
    mask_length: u8,
    action: MapRecordAction,
    authoritative: bool,
    map_version_number: u16,
    eid_prefix_afi: Option<AfiAddress>,
    locators: Vec<Locator>,
}

impl MapRecord {
    /// Starts building a map record
    pub fn builder() -> MapRecordBuilder {
        MapRecordBuilder::default()
    }

    /// Record time-to-live in minutes
    pub fn record_ttl(&self) -> u32 {
        self.record_ttl
    }

    /// EID mask length as carried on the wire
    pub fn mask_length(&self) -> u8 {
        self.mask_length
    }

    pub fn action(&self) -> MapRecordAction {
        self.action
    }

    pub fn is_authoritative(&self) -> bool {
        self.authoritative
    }

    pub fn map_version_number(&self) -> u16 {
        self.map_version_number
    }

    /// The EID-prefix address
    pub fn eid_prefix_afi(&self) -> Option<&AfiAddress> {
        self.eid_prefix_afi.as_ref()
    }

    /// Locators in the order they appeared in the message
    pub fn locators(&self) -> &[Locator] {
        &self.locators
    }

    /// Number of locators
    pub fn locator_count(&self) -> usize {
        self.locators.len()
    }
}

/// Builder for [`MapRecord`]
#[derive(Debug, Clone, Default)]
pub struct MapRecordBuilder {
    record_ttl: u32,
    mask_length: u8,
    action: MapRecordAction,
    authoritative: bool,
    map_version_number: u16,
    eid_prefix_afi: Option<AfiAddress>,
    locators: Vec<Locator>,
}

impl MapRecordBuilder {
    pub fn with_record_ttl(mut self, ttl: u32) -> Self {
        self.record_ttl = ttl;
        self
    }

    pub fn with_mask_length(mut self, mask_length: u8) -> Self {
        self.mask_length = mask_length;
        self
    }

    pub fn with_action(mut self, action: MapRecordAction) -> Self {
        self.action = action;
        self
    }

    pub fn with_authoritative(mut self, authoritative: bool) -> Self {
        self.authoritative = authoritative;
        self
    }

    pub fn with_map_version_number(mut self, version: u16) -> Self {
        self.map_version_number = version;
        self
    }

    pub fn with_eid_prefix_afi(mut self, address: impl Into<AfiAddress>) -> Self {
        self.eid_prefix_afi = Some(address.into());
        self
    }

    /// Appends a locator; order is preserved
    pub fn add_locator(mut self, locator: Locator) -> Self {
        self.locators.push(locator);
        self
    }

    pub fn with_locators(mut self, locators: impl IntoIterator<Item = Locator>) -> Self {
        self.locators.extend(locators);
        self
    }

    pub fn build(self) -> MapRecord {
        MapRecord {
            record_ttl: self.record_ttl,
            mask_length: self.mask_length,
            action: self.action,
            authoritative: self.authoritative,
            map_version_number: self.map_version_number,
            eid_prefix_afi: self.eid_prefix_afi,
            locators: self.locators,
        }
    }
}
