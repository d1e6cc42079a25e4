// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! Configuration management for the mapping provider
//!
//! Supports both command-line arguments and TOML configuration files.
//! Command-line values, when given, override the file.

use crate::error::ConfigError;
use crate::extensions::{AsNumberInterpreter, ExtensionRegistry};
use crate::provider::DEFAULT_SCHEME;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Log verbosity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!(
                "Invalid log level: {}. Use 'trace', 'debug', 'info', 'warn' or 'error'",
                s
            )),
        }
    }
}

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "lispmap")]
#[command(author = "lispmap Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Translate LISP map records into mapping entries", long_about = None)]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate the records of a Map-Register JSON document
    Translate {
        /// Map-Register document
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Address of the router the message came from
        #[arg(short, long, value_name = "IP")]
        router: String,

        /// Enable the AS-number LCAF interpreter
        #[arg(long)]
        as_number_interpreter: bool,
    },
    /// Decode an AS extension address and print it re-encoded
    DecodeAs {
        /// JSON document holding the address
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },
}

/// TOML configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub extensions: ExtensionsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// URI scheme of router device ids
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// Capacity of the provider's event and output queues
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

fn default_channel_capacity() -> usize {
    64
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtensionsConfig {
    #[serde(default)]
    pub as_number_interpreter: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,
}

/// Unified configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfiguration {
    pub scheme: String,
    pub channel_capacity: usize,
    pub as_number_interpreter: bool,
    pub log_level: LogLevel,
}

impl Default for ProviderConfiguration {
    fn default() -> Self {
        Self::from_toml(TomlConfig::default())
    }
}

impl ProviderConfiguration {
    /// Creates configuration from command-line arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(level) = args.log_level {
            config.log_level = level;
        }
        if let Command::Translate {
            as_number_interpreter: true,
            ..
        } = args.command
        {
            config.as_number_interpreter = true;
        }

        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parses configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: TomlConfig = toml::from_str(contents)?;
        Ok(Self::from_toml(config))
    }

    fn from_toml(config: TomlConfig) -> Self {
        Self {
            scheme: config.provider.scheme,
            channel_capacity: config.provider.channel_capacity,
            as_number_interpreter: config.extensions.as_number_interpreter,
            log_level: config.logging.level,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scheme.is_empty() {
            return Err(ConfigError::Invalid("scheme must not be empty".to_string()));
        }
        if !self
            .scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        {
            return Err(ConfigError::Invalid(format!(
                "scheme {} contains characters not allowed in a URI scheme",
                self.scheme
            )));
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::Invalid(
                "channel_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Extension interpreters enabled by this configuration
    pub fn extension_registry(&self) -> ExtensionRegistry {
        let mut registry = ExtensionRegistry::new();
        if self.as_number_interpreter {
            registry.register(Arc::new(AsNumberInterpreter));
        }
        registry
    }
}
