// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! Mappings and mapping entries

use super::action::MappingAction;
use super::address::MappingAddress;
use super::treatment::MappingTreatment;
use std::fmt;
use std::str::FromStr;

/// Identifier of the device a mapping belongs to, e.g. `lisp:10.0.0.1`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Builds `<scheme>:<id>`
    pub fn with_scheme(scheme: &str, id: impl fmt::Display) -> Self {
        Self(format!("{}:{}", scheme, id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before the first `:`, if any
    pub fn scheme(&self) -> Option<&str> {
        self.0.split_once(':').map(|(scheme, _)| scheme)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque 64-bit mapping identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MappingId(u64);

impl MappingId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Draws a random identifier
    ///
    /// Uniqueness is assumed from randomness alone; no collision check is
    /// made against existing mappings.
    pub fn random() -> Self {
        Self(rand::random())
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MappingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.0)
    }
}

/// The key of a mapping: the EID address
///
/// The address is absent when the EID could not be translated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MappingKey {
    address: Option<MappingAddress>,
}

impl MappingKey {
    pub fn builder() -> MappingKeyBuilder {
        MappingKeyBuilder::default()
    }

    pub fn address(&self) -> Option<&MappingAddress> {
        self.address.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MappingKeyBuilder {
    address: Option<MappingAddress>,
}

impl MappingKeyBuilder {
    pub fn with_address(mut self, address: Option<MappingAddress>) -> Self {
        self.address = address;
        self
    }

    pub fn build(self) -> MappingKey {
        MappingKey {
            address: self.address,
        }
    }
}

/// The value of a mapping: an action and the ordered treatments
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MappingValue {
    action: MappingAction,
    treatments: Vec<MappingTreatment>,
}

impl MappingValue {
    pub fn builder() -> MappingValueBuilder {
        MappingValueBuilder::default()
    }

    pub fn action(&self) -> MappingAction {
        self.action
    }

    /// Treatments in locator order
    pub fn treatments(&self) -> &[MappingTreatment] {
        &self.treatments
    }
}

#[derive(Debug, Clone, Default)]
pub struct MappingValueBuilder {
    action: MappingAction,
    treatments: Vec<MappingTreatment>,
}

impl MappingValueBuilder {
    pub fn with_action(mut self, action: MappingAction) -> Self {
        self.action = action;
        self
    }

    pub fn add(mut self, treatment: MappingTreatment) -> Self {
        self.treatments.push(treatment);
        self
    }

    pub fn build(self) -> MappingValue {
        MappingValue {
            action: self.action,
            treatments: self.treatments,
        }
    }
}

/// A mapping bound to a device
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mapping {
    id: MappingId,
    device_id: DeviceId,
    key: MappingKey,
    value: MappingValue,
}

impl Mapping {
    pub fn builder() -> MappingBuilder {
        MappingBuilder::default()
    }

    pub fn id(&self) -> MappingId {
        self.id
    }

    pub fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    pub fn key(&self) -> &MappingKey {
        &self.key
    }

    pub fn value(&self) -> &MappingValue {
        &self.value
    }
}

/// Builder for [`Mapping`]
///
/// A missing id is replaced by a random one; a missing device id by an empty
/// one.
#[derive(Debug, Clone, Default)]
pub struct MappingBuilder {
    id: Option<MappingId>,
    device_id: Option<DeviceId>,
    key: MappingKey,
    value: MappingValue,
}

impl MappingBuilder {
    pub fn with_id(mut self, id: MappingId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn for_device(mut self, device_id: DeviceId) -> Self {
        self.device_id = Some(device_id);
        self
    }

    pub fn with_key(mut self, key: MappingKey) -> Self {
        self.key = key;
        self
    }

    pub fn with_value(mut self, value: MappingValue) -> Self {
        self.value = value;
        self
    }

    pub fn build(self) -> Mapping {
        Mapping {
            id: self.id.unwrap_or_else(MappingId::random),
            device_id: self.device_id.unwrap_or_else(|| DeviceId::new("")),
            key: self.key,
            value: self.value,
        }
    }
}

/// Lifecycle state of a mapping entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MappingEntryState {
    PendingAdd,
    #[default]
    Added,
    PendingRemove,
    Removed,
    Failed,
}

impl MappingEntryState {
    pub fn as_str(&self) -> &'static str {
        match self {
            MappingEntryState::PendingAdd => "PENDING_ADD",
            MappingEntryState::Added => "ADDED",
            MappingEntryState::PendingRemove => "PENDING_REMOVE",
            MappingEntryState::Removed => "REMOVED",
            MappingEntryState::Failed => "FAILED",
        }
    }
}

impl fmt::Display for MappingEntryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MappingEntryState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING_ADD" => Ok(MappingEntryState::PendingAdd),
            "ADDED" => Ok(MappingEntryState::Added),
            "PENDING_REMOVE" => Ok(MappingEntryState::PendingRemove),
            "REMOVED" => Ok(MappingEntryState::Removed),
            "FAILED" => Ok(MappingEntryState::Failed),
            _ => Err(format!("Invalid mapping entry state: {}", s)),
        }
    }
}

/// A mapping together with its lifecycle state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MappingEntry {
    mapping: Mapping,
    state: MappingEntryState,
}

impl MappingEntry {
    pub fn new(mapping: Mapping, state: MappingEntryState) -> Self {
        Self { mapping, state }
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub fn id(&self) -> MappingId {
        self.mapping.id
    }

    pub fn device_id(&self) -> &DeviceId {
        &self.mapping.device_id
    }

    pub fn key(&self) -> &MappingKey {
        &self.mapping.key
    }

    pub fn value(&self) -> &MappingValue {
        &self.mapping.value
    }

    pub fn state(&self) -> MappingEntryState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_id_scheme() {
        let id = DeviceId::with_scheme("lisp", "10.0.0.1");
        assert_eq!(id.as_str(), "lisp:10.0.0.1");
        assert_eq!(id.scheme(), Some("lisp"));
        assert_eq!(DeviceId::new("plain").scheme(), None);
    }

    #[test]
    fn test_mapping_builder_assigns_random_id_when_unset() {
        let a = Mapping::builder().build();
        let b = Mapping::builder().build();
        assert_ne!(a.id(), b.id());

        let fixed = Mapping::builder().with_id(MappingId::new(7)).build();
        assert_eq!(fixed.id().value(), 7);
    }

    #[test]
    fn test_value_keeps_treatment_order() {
        let value = MappingValue::builder()
            .with_action(MappingAction::Drop)
            .add(MappingTreatment::builder().set_unicast_priority(3).build())
            .add(MappingTreatment::builder().set_unicast_priority(1).build())
            .build();

        assert_eq!(value.action(), MappingAction::Drop);
        let priorities: Vec<u8> = value
            .treatments()
            .iter()
            .map(|t| t.unicast_priority())
            .collect();
        assert_eq!(priorities, vec![3, 1]);
    }

    #[test]
    fn test_entry_state_names() {
        assert_eq!("ADDED".parse::<MappingEntryState>(), Ok(MappingEntryState::Added));
        assert_eq!(MappingEntryState::PendingAdd.to_string(), "PENDING_ADD");
        assert!("added".parse::<MappingEntryState>().is_err());
    }
}
