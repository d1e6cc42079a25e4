// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! Mapping actions

use std::fmt;
use std::str::FromStr;

/// What the data plane does with traffic for a mapping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MappingAction {
    #[default]
    NoAction,
    /// Forward after resolving the mapping (send a map request)
    Forward,
    /// Forward natively, without encapsulation
    NativeForward,
    Drop,
}

impl MappingAction {
    /// Name used in JSON and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            MappingAction::NoAction => "NO_ACTION",
            MappingAction::Forward => "FORWARD",
            MappingAction::NativeForward => "NATIVE_FORWARD",
            MappingAction::Drop => "DROP",
        }
    }
}

impl fmt::Display for MappingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MappingAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NO_ACTION" => Ok(MappingAction::NoAction),
            "FORWARD" => Ok(MappingAction::Forward),
            "NATIVE_FORWARD" => Ok(MappingAction::NativeForward),
            "DROP" => Ok(MappingAction::Drop),
            _ => Err(format!("Invalid mapping action: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_names_roundtrip() {
        for action in [
            MappingAction::NoAction,
            MappingAction::Forward,
            MappingAction::NativeForward,
            MappingAction::Drop,
        ] {
            assert_eq!(action.as_str().parse::<MappingAction>(), Ok(action));
        }
        assert!("REDIRECT".parse::<MappingAction>().is_err());
    }
}
