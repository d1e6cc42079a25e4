// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! LISP control messages
//!
//! Messages are immutable once built. Each one is created through its
//! builder, either by a decoder or by an originator preparing a message to
//! send.
//!
//! Byte-level encoding is not implemented yet: [`LispMessage::write_to`]
//! returns [`MessageError::UnsupportedSerialization`] for every message.

pub mod document;
pub mod locator;
pub mod record;
pub mod register;

pub use document::{LocatorDocument, MapRecordDocument, MapRegisterDocument};
pub use locator::{Locator, LocatorBuilder};
pub use record::{MapRecord, MapRecordAction, MapRecordBuilder};
pub use register::{MapRegister, RegisterBuilder};

use crate::error::MessageError;
use std::fmt;

/// LISP control message types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LispType {
    MapRequest,
    MapReply,
    MapRegister,
    MapNotify,
    EncapsulatedControl,
}

impl LispType {
    /// Returns the type code carried in the first nibble of a control message
    pub fn code(&self) -> u8 {
        match self {
            LispType::MapRequest => 1,
            LispType::MapReply => 2,
            LispType::MapRegister => 3,
            LispType::MapNotify => 4,
            LispType::EncapsulatedControl => 8,
        }
    }

    /// Looks up the message type for a code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(LispType::MapRequest),
            2 => Some(LispType::MapReply),
            3 => Some(LispType::MapRegister),
            4 => Some(LispType::MapNotify),
            8 => Some(LispType::EncapsulatedControl),
            _ => None,
        }
    }
}

impl fmt::Display for LispType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LispType::MapRequest => write!(f, "MAP_REQUEST"),
            LispType::MapReply => write!(f, "MAP_REPLY"),
            LispType::MapRegister => write!(f, "MAP_REGISTER"),
            LispType::MapNotify => write!(f, "MAP_NOTIFY"),
            LispType::EncapsulatedControl => write!(f, "ENCAPSULATED_CONTROL"),
        }
    }
}

/// Common behaviour of every LISP control message
pub trait LispMessage: fmt::Debug + Send + Sync {
    /// Returns the message type
    fn message_type(&self) -> LispType;

    /// Appends the wire encoding of this message to `buf`
    fn write_to(&self, buf: &mut Vec<u8>) -> Result<(), MessageError>;

    /// Returns the map records carried by this message, if any
    fn records(&self) -> &[MapRecord] {
        &[]
    }

    /// Encodes this message into a fresh buffer
    fn serialize(&self) -> Result<Vec<u8>, MessageError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(buf)
    }
}
