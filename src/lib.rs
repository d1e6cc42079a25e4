// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! Translation of LISP control-plane mappings.
//!
//! This crate turns the map records carried by LISP control messages
//! (EID-prefix, action, locators) into protocol-independent mapping
//! entries, and provides JSON codecs for the resulting mapping addresses,
//! including the AS-number extension address.

// Public module declarations
pub mod codec;
pub mod config;
pub mod entry_builder;
pub mod error;
pub mod extensions;
pub mod logging;
pub mod mapping;
pub mod protocols;
pub mod provider;
pub mod types;

// Re-export commonly used types
pub use codec::{CodecContext, JsonCodec, LispAsAddressCodec, MappingAddressCodec};
pub use config::{CliArgs, Command, LogLevel, ProviderConfiguration};
pub use entry_builder::{
    MappingEntryBuilder, RecordTranslator, Translated, TranslationWarning, build_entries,
};
pub use error::{
    AddressError, CodecError, ConfigError, LispMapError, MessageError, ProviderError,
};
pub use extensions::{
    AsNumberInterpreter, ExtensionInterpreter, ExtensionMappingAddress, ExtensionRegistry,
    LispAsAddress,
};
pub use mapping::{
    DeviceId, Mapping, MappingAction, MappingAddress, MappingAddressType, MappingEntry,
    MappingEntryState, MappingId, MappingKey, MappingTreatment, MappingValue,
};
pub use protocols::{
    LispMessage, LispType, Locator, MapRecord, MapRecordAction, MapRegister, MapRegisterDocument,
};
pub use provider::{
    LispController, LispMappingProvider, LispRouterId, LocalController, MessageListener,
    RouterListener,
};
pub use types::{Afi, AfiAddress, LcafAddress, LcafPayload, LcafType, MacAddress};
