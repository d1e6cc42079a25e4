// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! JSON documents describing control messages
//!
//! These mirror the message model field for field and are turned into
//! messages through the regular builders, so a document can never produce a
//! message the builders could not.

use super::locator::Locator;
use super::record::{MapRecord, MapRecordAction};
use super::register::MapRegister;
use crate::types::AfiAddress;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocatorDocument {
    #[serde(default)]
    pub priority: u8,
    #[serde(default)]
    pub weight: u8,
    #[serde(default)]
    pub multicast_priority: u8,
    #[serde(default)]
    pub multicast_weight: u8,
    #[serde(default)]
    pub local: bool,
    #[serde(default)]
    pub rloc_probed: bool,
    #[serde(default)]
    pub routed: bool,
    #[serde(default)]
    pub address: Option<AfiAddress>,
}

impl LocatorDocument {
    pub fn into_locator(self) -> Locator {
        let builder = Locator::builder()
            .with_priority(self.priority)
            .with_weight(self.weight)
            .with_multicast_priority(self.multicast_priority)
            .with_multicast_weight(self.multicast_weight)
            .with_local(self.local)
            .with_rloc_probed(self.rloc_probed)
            .with_routed(self.routed);

        match self.address {
            Some(address) => builder.with_locator_afi(address),
            None => builder,
        }
        .build()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapRecordDocument {
    #[serde(default)]
    pub record_ttl: u32,
    #[serde(default)]
    pub mask_length: u8,
    /// Action code, 0-3 for the defined actions
    #[serde(default)]
    pub action: u8,
    #[serde(default)]
    pub authoritative: bool,
    #[serde(default)]
    pub map_version_number: u16,
    #[serde(default)]
    pub eid_prefix: Option<AfiAddress>,
    #[serde(default)]
    pub locators: Vec<LocatorDocument>,
}

impl MapRecordDocument {
    pub fn into_record(self) -> MapRecord {
        let builder = MapRecord::builder()
            .with_record_ttl(self.record_ttl)
            .with_mask_length(self.mask_length)
            .with_action(MapRecordAction::from_code(self.action))
            .with_authoritative(self.authoritative)
            .with_map_version_number(self.map_version_number)
            .with_locators(self.locators.into_iter().map(LocatorDocument::into_locator));

        match self.eid_prefix {
            Some(eid) => builder.with_eid_prefix_afi(eid),
            None => builder,
        }
        .build()
    }
}

/// A Map-Register message as JSON
///
/// When `record_count` is omitted the number of listed records is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapRegisterDocument {
    #[serde(default)]
    pub nonce: u64,
    #[serde(default)]
    pub key_id: u16,
    #[serde(default)]
    pub authentication_data: Vec<u8>,
    #[serde(default)]
    pub record_count: Option<u8>,
    #[serde(default)]
    pub proxy_map_reply: bool,
    #[serde(default)]
    pub want_map_notify: bool,
    #[serde(default)]
    pub records: Vec<MapRecordDocument>,
}

impl MapRegisterDocument {
    /// Parses a document from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn into_message(self) -> MapRegister {
        let record_count = self
            .record_count
            .unwrap_or_else(|| u8::try_from(self.records.len()).unwrap_or(u8::MAX));

        self.records.into_iter().fold(
            MapRegister::builder()
                .with_nonce(self.nonce)
                .with_key_id(self.key_id)
                .with_authentication_data(&self.authentication_data)
                .with_record_count(record_count)
                .with_is_proxy_map_reply(self.proxy_map_reply)
                .with_is_want_map_notify(self.want_map_notify),
            |builder, record| builder.add_record(record.into_record()),
        )
        .build()
    }
}
