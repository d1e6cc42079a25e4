// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! Mapping entry builder
//!
//! Translates a decoded LISP map record into a protocol-independent
//! [`MappingEntry`]:
//! - the record action becomes a [`MappingAction`]
//! - the EID-prefix becomes the [`MappingKey`] address
//! - every locator becomes a [`MappingTreatment`], in locator order
//!
//! Translation never fails. Anything that cannot be translated degrades to a
//! default (no action, no address) and is reported as a
//! [`TranslationWarning`], so one bad locator never discards the rest of the
//! entry.

use crate::extensions::ExtensionRegistry;
use crate::mapping::{
    DeviceId, Mapping, MappingAction, MappingAddress, MappingEntry, MappingEntryState, MappingId,
    MappingKey, MappingTreatment, MappingValue,
};
use crate::protocols::{MapRecord, MapRecordAction};
use crate::types::{AfiAddress, LcafAddress, LcafType};
use ipnet::{Ipv4Net, Ipv6Net};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use tracing::warn;

/// Prefix length given to IPv4 EIDs and RLOCs
pub const IPV4_PREFIX_LENGTH: u8 = 32;
/// Prefix length given to IPv6 EIDs and RLOCs
pub const IPV6_PREFIX_LENGTH: u8 = 128;

/// A soft failure met while translating a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationWarning {
    /// The action code has no mapping action; `NoAction` was used
    UnsupportedAction(MapRecordAction),
    /// A record or locator carried no address
    AddressNotSpecified,
    /// No interpreter is registered for this LCAF type
    UninterpretedLcaf(LcafType),
}

impl fmt::Display for TranslationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationWarning::UnsupportedAction(action) => {
                write!(f, "Unsupported action type {}", action)
            }
            TranslationWarning::AddressNotSpecified => write!(f, "Address is not specified"),
            TranslationWarning::UninterpretedLcaf(lcaf_type) => {
                write!(f, "No extension interpreter for LCAF type {}", lcaf_type)
            }
        }
    }
}

/// A translation result together with the warnings raised producing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translated<T> {
    pub value: T,
    pub warnings: Vec<TranslationWarning>,
}

impl<T> Translated<T> {
    /// True when nothing had to be degraded
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Translates the pieces of a map record, collecting warnings as it goes
///
/// Extension interpreters receive the translator so nested addresses are
/// translated, and reported, the same way as top-level ones.
#[derive(Debug)]
pub struct RecordTranslator<'a> {
    extensions: &'a ExtensionRegistry,
    warnings: Vec<TranslationWarning>,
}

impl<'a> RecordTranslator<'a> {
    pub fn new(extensions: &'a ExtensionRegistry) -> Self {
        Self {
            extensions,
            warnings: Vec::new(),
        }
    }

    /// Translates the record action
    ///
    /// An absent record yields `NoAction` silently.
    pub fn action(&mut self, record: Option<&MapRecord>) -> MappingAction {
        let Some(record) = record else {
            return MappingAction::NoAction;
        };

        match record.action() {
            MapRecordAction::NoAction => MappingAction::NoAction,
            MapRecordAction::SendMapRequest => MappingAction::Forward,
            MapRecordAction::NativelyForward => MappingAction::NativeForward,
            MapRecordAction::Drop => MappingAction::Drop,
            unknown @ MapRecordAction::Unknown(_) => {
                self.report(TranslationWarning::UnsupportedAction(unknown));
                MappingAction::NoAction
            }
        }
    }

    /// Translates a LISP address into a mapping address
    pub fn address(&mut self, address: Option<&AfiAddress>) -> Option<MappingAddress> {
        let Some(address) = address else {
            self.report(TranslationWarning::AddressNotSpecified);
            return None;
        };

        match address {
            AfiAddress::Ipv4(ip) => Some(ipv4_mapping_address(*ip)),
            AfiAddress::Ipv6(ip) => Some(ipv6_mapping_address(*ip)),
            AfiAddress::As(as_number) => Some(MappingAddress::as_number(as_number.to_string())),
            AfiAddress::DistinguishedName(name) => Some(MappingAddress::dn(name.clone())),
            AfiAddress::Mac(mac) => Some(MappingAddress::eth(*mac)),
            AfiAddress::Lcaf(lcaf) => self.lcaf_to_extension(lcaf),
        }
    }

    /// Translates every locator of the record into a treatment
    ///
    /// A locator whose address cannot be translated still yields a
    /// treatment with its weights and priorities, just without an address.
    pub fn treatments(&mut self, record: Option<&MapRecord>) -> Vec<MappingTreatment> {
        let Some(record) = record else {
            return Vec::new();
        };

        record
            .locators()
            .iter()
            .map(|locator| {
                let builder = match self.address(locator.locator_afi()) {
                    Some(address) => MappingTreatment::builder().with_address(address),
                    None => MappingTreatment::builder(),
                };

                builder
                    .set_unicast_weight(locator.weight())
                    .set_unicast_priority(locator.priority())
                    .set_multicast_weight(locator.multicast_weight())
                    .set_multicast_priority(locator.multicast_priority())
                    .build()
            })
            .collect()
    }

    pub fn warnings(&self) -> &[TranslationWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<TranslationWarning> {
        self.warnings
    }

    fn lcaf_to_extension(&mut self, lcaf: &LcafAddress) -> Option<MappingAddress> {
        let extensions = self.extensions;
        match extensions.get(lcaf.lcaf_type()) {
            Some(interpreter) => interpreter.interpret(lcaf, self),
            None => {
                self.report(TranslationWarning::UninterpretedLcaf(lcaf.lcaf_type()));
                None
            }
        }
    }

    /// Logs `warning` and records it with the others
    ///
    /// Interpreters call this when they give up on an address.
    pub fn report(&mut self, warning: TranslationWarning) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }
}

fn ipv4_mapping_address(ip: Ipv4Addr) -> MappingAddress {
    // A host prefix length is always valid
    let prefix = Ipv4Net::new(ip, IPV4_PREFIX_LENGTH).unwrap_or_else(|_| Ipv4Net::from(ip));
    MappingAddress::ipv4(prefix)
}

fn ipv6_mapping_address(ip: Ipv6Addr) -> MappingAddress {
    let prefix = Ipv6Net::new(ip, IPV6_PREFIX_LENGTH).unwrap_or_else(|_| Ipv6Net::from(ip));
    MappingAddress::ipv6(prefix)
}

/// Builds mapping entries from LISP map records
///
/// Translation happens once, in the constructor; every call to
/// [`build`](Self::build) then wraps the result in a new entry with a fresh
/// random identifier.
#[derive(Debug, Clone)]
pub struct MappingEntryBuilder {
    device_id: DeviceId,
    address: Option<MappingAddress>,
    action: MappingAction,
    treatments: Vec<MappingTreatment>,
    warnings: Vec<TranslationWarning>,
}

impl MappingEntryBuilder {
    /// Translates `record` for `device_id` with no extension interpreters
    ///
    /// `None` means no mapping is present: the entry gets an empty key,
    /// `NoAction` and no treatments.
    pub fn new(device_id: DeviceId, record: Option<&MapRecord>) -> Self {
        Self::with_extensions(device_id, record, &ExtensionRegistry::default())
    }

    /// Translates `record`, handing LCAF addresses to `extensions`
    pub fn with_extensions(
        device_id: DeviceId,
        record: Option<&MapRecord>,
        extensions: &ExtensionRegistry,
    ) -> Self {
        let mut translator = RecordTranslator::new(extensions);

        let address = match record {
            Some(record) => translator.address(record.eid_prefix_afi()),
            None => None,
        };
        let action = translator.action(record);
        let treatments = translator.treatments(record);

        Self {
            device_id,
            address,
            action,
            treatments,
            warnings: translator.into_warnings(),
        }
    }

    /// Warnings raised while translating the record
    pub fn warnings(&self) -> &[TranslationWarning] {
        &self.warnings
    }

    /// Builds a mapping entry
    ///
    /// The entry is always in the `Added` state: storage on the router is
    /// assumed to succeed.
    pub fn build(&self) -> MappingEntry {
        let mapping = Mapping::builder()
            .with_id(MappingId::random())
            .for_device(self.device_id.clone())
            .with_key(self.build_key())
            .with_value(self.build_value())
            .build();

        MappingEntry::new(mapping, MappingEntryState::Added)
    }

    /// Builds a mapping entry and hands back the translation warnings with it
    pub fn build_with_diagnostics(self) -> Translated<MappingEntry> {
        let value = self.build();
        Translated {
            value,
            warnings: self.warnings,
        }
    }

    fn build_key(&self) -> MappingKey {
        MappingKey::builder()
            .with_address(self.address.clone())
            .build()
    }

    fn build_value(&self) -> MappingValue {
        self.treatments
            .iter()
            .cloned()
            .fold(
                MappingValue::builder().with_action(self.action),
                |builder, treatment| builder.add(treatment),
            )
            .build()
    }
}

/// Translates every record of a message for one device
pub fn build_entries(
    device_id: &DeviceId,
    records: &[MapRecord],
    extensions: &ExtensionRegistry,
) -> Translated<Vec<MappingEntry>> {
    let mut warnings = Vec::new();
    let entries = records
        .iter()
        .map(|record| {
            let translated =
                MappingEntryBuilder::with_extensions(device_id.clone(), Some(record), extensions)
                    .build_with_diagnostics();
            warnings.extend(translated.warnings);
            translated.value
        })
        .collect();

    Translated {
        value: entries,
        warnings,
    }
}
