// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! Map-Register message
//!
//! Sent by an ETR to its map server to register the EID-prefixes it is
//! authoritative for.

use super::record::MapRecord;
use super::{LispMessage, LispType};
use crate::error::MessageError;

/// An immutable Map-Register message
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapRegister {
    nonce: u64,
    key_id: u16,
    authentication_data: Vec<u8>,
    record_count: u8,
    records: Vec<MapRecord>,
    proxy_map_reply: bool,
    want_map_notify: bool,
}

impl MapRegister {
    /// Starts building a Map-Register message
    pub fn builder() -> RegisterBuilder {
        RegisterBuilder::default()
    }

    /// Returns a fresh builder for another message of this type
    pub fn create_builder(&self) -> RegisterBuilder {
        RegisterBuilder::default()
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn key_id(&self) -> u16 {
        self.key_id
    }

    /// Authentication data
    ///
    /// The message owns its own copy, taken when the builder received it, so
    /// later changes to the caller's buffer are never observed here.
    pub fn authentication_data(&self) -> &[u8] {
        &self.authentication_data
    }

    /// Record count as declared in the header
    ///
    /// Not reconciled with the number of records actually added.
    pub fn record_count(&self) -> u8 {
        self.record_count
    }

    /// Map records in message order
    pub fn lisp_records(&self) -> &[MapRecord] {
        &self.records
    }

    pub fn is_proxy_map_reply(&self) -> bool {
        self.proxy_map_reply
    }

    pub fn is_want_map_notify(&self) -> bool {
        self.want_map_notify
    }
}

impl LispMessage for MapRegister {
    fn message_type(&self) -> LispType {
        LispType::MapRegister
    }

    // TODO: bit-exact Map-Register encoding (RFC 6833 section 4.3)
    fn write_to(&self, _buf: &mut Vec<u8>) -> Result<(), MessageError> {
        Err(MessageError::UnsupportedSerialization(LispType::MapRegister))
    }

    fn records(&self) -> &[MapRecord] {
        &self.records
    }
}

/// Builder for [`MapRegister`]
///
/// Setters may be called in any order. Unset fields default to zero, empty or
/// `false`; `build` never fails.
#[derive(Debug, Clone, Default)]
pub struct RegisterBuilder {
    nonce: u64,
    key_id: u16,
    authentication_data: Vec<u8>,
    record_count: u8,
    records: Vec<MapRecord>,
    proxy_map_reply: bool,
    want_map_notify: bool,
}

impl RegisterBuilder {
    /// Message type this builder produces
    pub fn message_type(&self) -> LispType {
        LispType::MapRegister
    }

    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn with_key_id(mut self, key_id: u16) -> Self {
        self.key_id = key_id;
        self
    }

    /// Copies the given authentication data into the builder
    pub fn with_authentication_data(mut self, data: &[u8]) -> Self {
        self.authentication_data = data.to_vec();
        self
    }

    pub fn with_record_count(mut self, record_count: u8) -> Self {
        self.record_count = record_count;
        self
    }

    /// Appends a record; may be called repeatedly
    pub fn add_record(mut self, record: MapRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn with_is_proxy_map_reply(mut self, proxy_map_reply: bool) -> Self {
        self.proxy_map_reply = proxy_map_reply;
        self
    }

    pub fn with_is_want_map_notify(mut self, want_map_notify: bool) -> Self {
        self.want_map_notify = want_map_notify;
        self
    }

    pub fn build(self) -> MapRegister {
        MapRegister {
            nonce: self.nonce,
            key_id: self.key_id,
            authentication_data: self.authentication_data,
            record_count: self.record_count,
            records: self.records,
            proxy_map_reply: self.proxy_map_reply,
            want_map_notify: self.want_map_notify,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocols::MapRecordAction;
    use std::net::Ipv4Addr;

    fn record(action: MapRecordAction) -> MapRecord {
        MapRecord::builder()
            .with_action(action)
            .with_eid_prefix_afi(Ipv4Addr::new(10, 0, 0, 1))
            .build()
    }

    #[test]
    fn test_builder_in_any_order() {
        let register = MapRegister::builder()
            .with_is_want_map_notify(true)
            .add_record(record(MapRecordAction::Drop))
            .with_nonce(0xdead_beef_cafe_f00d)
            .with_record_count(2)
            .add_record(record(MapRecordAction::NoAction))
            .with_key_id(1)
            .with_is_proxy_map_reply(true)
            .build();

        assert_eq!(register.nonce(), 0xdead_beef_cafe_f00d);
        assert_eq!(register.key_id(), 1);
        assert_eq!(register.record_count(), 2);
        assert!(register.is_proxy_map_reply());
        assert!(register.is_want_map_notify());
        assert_eq!(register.lisp_records().len(), 2);
        assert_eq!(register.lisp_records()[0].action(), MapRecordAction::Drop);
        assert_eq!(register.lisp_records()[1].action(), MapRecordAction::NoAction);
    }

    #[test]
    fn test_empty_builder_uses_defaults() {
        let register = MapRegister::builder().build();
        assert_eq!(register.nonce(), 0);
        assert_eq!(register.key_id(), 0);
        assert!(register.authentication_data().is_empty());
        assert_eq!(register.record_count(), 0);
        assert!(register.lisp_records().is_empty());
        assert!(!register.is_proxy_map_reply());
        assert!(!register.is_want_map_notify());
    }

    #[test]
    fn test_authentication_data_is_copied() {
        let mut auth = vec![1u8, 2, 3, 4];
        let register = MapRegister::builder()
            .with_authentication_data(&auth)
            .build();

        auth[0] = 0xff;
        auth.push(5);

        assert_eq!(register.authentication_data(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_serialization_is_reported_unsupported() {
        let register = MapRegister::builder().with_nonce(7).build();
        assert_eq!(register.message_type(), LispType::MapRegister);
        assert_eq!(
            register.serialize(),
            Err(MessageError::UnsupportedSerialization(LispType::MapRegister))
        );
    }

    #[test]
    fn test_create_builder_starts_empty() {
        let register = MapRegister::builder().with_nonce(9).build();
        let other = register.create_builder().build();
        assert_eq!(other.nonce(), 0);
        assert_eq!(register.create_builder().message_type(), LispType::MapRegister);
    }
}
