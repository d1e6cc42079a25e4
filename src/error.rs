// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! Error types for lispmap
//!
//! Only hard failures live here. Soft failures during translation (an
//! unsupported action or address) degrade to a default and are reported as
//! [`crate::entry_builder::TranslationWarning`]s instead.

use crate::protocols::LispType;
use crate::types::LcafType;
use thiserror::Error;

/// Main error type for lispmap operations
#[derive(Error, Debug)]
pub enum LispMapError {
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Message error: {0}")]
    Message(#[from] MessageError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Address parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid MAC address: {0}")]
    InvalidMac(String),

    #[error("Invalid router identifier: {0}")]
    InvalidRouterId(String),

    #[error("LCAF type {0} has a structured payload and cannot be kept raw")]
    StructuredLcaf(LcafType),
}

/// JSON codec errors
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("{member} member is required in {type_name}")]
    MissingMember {
        member: &'static str,
        type_name: &'static str,
    },

    #[error("Invalid value for member {member}: {reason}")]
    InvalidField {
        member: &'static str,
        reason: String,
    },

    #[error("{0} cannot be null")]
    NullArgument(&'static str),

    #[error("No codec registered for {0}")]
    UnknownType(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Protocol message errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    #[error("Wire serialization is not supported for {0}")]
    UnsupportedSerialization(LispType),
}

/// Mapping provider errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider channel closed")]
    ChannelClosed,

    #[error("Provider is not active")]
    NotActive,

    #[error("Provider is already active")]
    AlreadyActive,
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<LispMapError> for String {
    fn from(err: LispMapError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_member_message() {
        let err = CodecError::MissingMember {
            member: "asNumber",
            type_name: "LispAsAddress",
        };
        assert_eq!(err.to_string(), "asNumber member is required in LispAsAddress");
    }

    #[test]
    fn test_conversion_into_top_level() {
        let err: LispMapError = MessageError::UnsupportedSerialization(LispType::MapRegister).into();
        assert!(matches!(err, LispMapError::Message(_)));
        assert!(err.to_string().contains("MAP_REGISTER"));
    }
}
