// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! LCAF interpreters
//!
//! An interpreter turns one LCAF type into a mapping address. Interpreters
//! are looked up by LCAF type in an [`ExtensionRegistry`].

use super::ExtensionMappingAddress;
use super::as_address::LispAsAddress;
use crate::entry_builder::{RecordTranslator, TranslationWarning};
use crate::mapping::MappingAddress;
use crate::types::{LcafAddress, LcafPayload, LcafType};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Translates one LCAF type into a mapping address
pub trait ExtensionInterpreter: Send + Sync {
    /// The LCAF type this interpreter handles
    fn lcaf_type(&self) -> LcafType;

    /// Translates `lcaf`
    ///
    /// `translator` translates nested addresses and collects their warnings.
    /// Returning `None` means the address has no mapping form.
    fn interpret(
        &self,
        lcaf: &LcafAddress,
        translator: &mut RecordTranslator<'_>,
    ) -> Option<MappingAddress>;
}

/// Interpreters keyed by LCAF type
///
/// A registry is immutable while in use: build it once, then share it
/// (it is `Clone` and cheap to clone).
#[derive(Clone, Default)]
pub struct ExtensionRegistry {
    interpreters: HashMap<LcafType, Arc<dyn ExtensionInterpreter>>,
}

impl ExtensionRegistry {
    /// Creates an empty registry; every LCAF address is left untranslated
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an interpreter, replacing any previous one for its type
    pub fn register(&mut self, interpreter: Arc<dyn ExtensionInterpreter>) {
        self.interpreters
            .insert(interpreter.lcaf_type(), interpreter);
    }

    /// Builder-style variant of [`register`](Self::register)
    pub fn with(mut self, interpreter: Arc<dyn ExtensionInterpreter>) -> Self {
        self.register(interpreter);
        self
    }

    pub fn get(&self, lcaf_type: LcafType) -> Option<&Arc<dyn ExtensionInterpreter>> {
        self.interpreters.get(&lcaf_type)
    }

    pub fn contains(&self, lcaf_type: LcafType) -> bool {
        self.interpreters.contains_key(&lcaf_type)
    }

    pub fn len(&self) -> usize {
        self.interpreters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interpreters.is_empty()
    }
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<LcafType> = self.interpreters.keys().copied().collect();
        types.sort();
        f.debug_struct("ExtensionRegistry")
            .field("types", &types)
            .finish()
    }
}

/// Interprets AS number LCAFs as [`LispAsAddress`] extension addresses
#[derive(Debug, Clone, Copy, Default)]
pub struct AsNumberInterpreter;

impl ExtensionInterpreter for AsNumberInterpreter {
    fn lcaf_type(&self) -> LcafType {
        LcafType::AsNumber
    }

    fn interpret(
        &self,
        lcaf: &LcafAddress,
        translator: &mut RecordTranslator<'_>,
    ) -> Option<MappingAddress> {
        let LcafPayload::AsNumber { as_number, address } = lcaf.payload() else {
            translator.report(TranslationWarning::UninterpretedLcaf(lcaf.lcaf_type()));
            return None;
        };

        let nested = translator.address(Some(&**address));
        let as_address = LispAsAddress::builder()
            .with_as_number(*as_number)
            .with_address(nested)
            .build();

        Some(MappingAddress::extension(ExtensionMappingAddress::As(
            as_address,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        let registry = ExtensionRegistry::new().with(Arc::new(AsNumberInterpreter));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(LcafType::AsNumber));
        assert!(!registry.contains(LcafType::List));
        assert!(registry.get(LcafType::AsNumber).is_some());
    }

    #[test]
    fn test_mismatched_payload_is_reported() {
        let registry = ExtensionRegistry::new();
        let mut translator = RecordTranslator::new(&registry);
        let lcaf = LcafAddress::list(vec![crate::types::AfiAddress::As(1)]);

        assert_eq!(AsNumberInterpreter.interpret(&lcaf, &mut translator), None);
        assert_eq!(
            translator.warnings(),
            &[TranslationWarning::UninterpretedLcaf(LcafType::List)]
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = ExtensionRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get(LcafType::AsNumber).is_none());
    }
}
