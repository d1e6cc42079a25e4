// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! Protocol-independent mapping model
//!
//! This is what the routing control plane consumes: a key (the EID), a value
//! (an action plus ordered treatments, one per locator) and bookkeeping such
//! as the owning device and lifecycle state. Nothing here refers to LISP
//! wire types.

pub mod action;
pub mod address;
pub mod entry;
pub mod treatment;

pub use action::MappingAction;
pub use address::{MappingAddress, MappingAddressType};
pub use entry::{
    DeviceId, Mapping, MappingBuilder, MappingEntry, MappingEntryState, MappingId, MappingKey,
    MappingKeyBuilder, MappingValue, MappingValueBuilder,
};
pub use treatment::{MappingTreatment, MappingTreatmentBuilder};
