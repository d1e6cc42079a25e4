// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

//! Codecs for mapping actions, treatments, keys, values and entries

use super::{CodecContext, JsonCodec, optional_object, require, require_str, require_u8, require_u64};
use crate::error::CodecError;
use crate::mapping::{
    DeviceId, Mapping, MappingAction, MappingAddress, MappingEntry, MappingEntryState, MappingId,
    MappingKey, MappingTreatment, MappingValue,
};
use serde_json::{Map, Value, json};

const TYPE: &str = "type";
const ADDRESS: &str = "address";
const UNICAST_WEIGHT: &str = "unicastWeight";
const UNICAST_PRIORITY: &str = "unicastPriority";
const MULTICAST_WEIGHT: &str = "multicastWeight";
const MULTICAST_PRIORITY: &str = "multicastPriority";
const ACTION: &str = "action";
const TREATMENTS: &str = "treatments";
const ID: &str = "id";
const DEVICE_ID: &str = "deviceId";
const KEY: &str = "key";
const VALUE: &str = "value";
const STATE: &str = "state";

fn invalid(member: &'static str, reason: impl ToString) -> CodecError {
    CodecError::InvalidField {
        member,
        reason: reason.to_string(),
    }
}

/// Encodes an optional nested address under `address`
fn encode_address(
    result: &mut Map<String, Value>,
    address: Option<&MappingAddress>,
    context: &CodecContext,
) -> Result<(), CodecError> {
    if let Some(address) = address {
        let codec = context.codec::<MappingAddress>()?;
        result.insert(ADDRESS.to_string(), codec.encode(address, context)?);
    }
    Ok(())
}

fn decode_address(
    object: &Map<String, Value>,
    context: &CodecContext,
) -> Result<Option<MappingAddress>, CodecError> {
    context.decode::<MappingAddress>(optional_object(object, ADDRESS))
}

/// `{"type": "NO_ACTION"}`
#[derive(Debug, Clone, Copy, Default)]
pub struct MappingActionCodec;

impl JsonCodec<MappingAction> for MappingActionCodec {
    fn encode(&self, action: &MappingAction, _context: &CodecContext) -> Result<Value, CodecError> {
        Ok(json!({ TYPE: action.as_str() }))
    }

    fn decode(
        &self,
        json: &Value,
        _context: &CodecContext,
    ) -> Result<Option<MappingAction>, CodecError> {
        let Some(object) = json.as_object() else {
            return Ok(None);
        };

        require_str(object, TYPE, "MappingAction")?
            .parse::<MappingAction>()
            .map(Some)
            .map_err(|e| invalid(TYPE, e))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MappingTreatmentCodec;

impl JsonCodec<MappingTreatment> for MappingTreatmentCodec {
    fn encode(
        &self,
        treatment: &MappingTreatment,
        context: &CodecContext,
    ) -> Result<Value, CodecError> {
        let mut result = Map::new();
        encode_address(&mut result, treatment.address(), context)?;
        result.insert(UNICAST_WEIGHT.to_string(), treatment.unicast_weight().into());
        result.insert(UNICAST_PRIORITY.to_string(), treatment.unicast_priority().into());
        result.insert(MULTICAST_WEIGHT.to_string(), treatment.multicast_weight().into());
        result.insert(
            MULTICAST_PRIORITY.to_string(),
            treatment.multicast_priority().into(),
        );
        Ok(Value::Object(result))
    }

    fn decode(
        &self,
        json: &Value,
        context: &CodecContext,
    ) -> Result<Option<MappingTreatment>, CodecError> {
        let Some(object) = json.as_object() else {
            return Ok(None);
        };
        const NAME: &str = "MappingTreatment";

        let builder = MappingTreatment::builder()
            .set_unicast_weight(require_u8(object, UNICAST_WEIGHT, NAME)?)
            .set_unicast_priority(require_u8(object, UNICAST_PRIORITY, NAME)?)
            .set_multicast_weight(require_u8(object, MULTICAST_WEIGHT, NAME)?)
            .set_multicast_priority(require_u8(object, MULTICAST_PRIORITY, NAME)?);

        let treatment = match decode_address(object, context)? {
            Some(address) => builder.with_address(address),
            None => builder,
        }
        .build();

        Ok(Some(treatment))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MappingKeyCodec;

impl JsonCodec<MappingKey> for MappingKeyCodec {
    fn encode(&self, key: &MappingKey, context: &CodecContext) -> Result<Value, CodecError> {
        let mut result = Map::new();
        encode_address(&mut result, key.address(), context)?;
        Ok(Value::Object(result))
    }

    fn decode(&self, json: &Value, context: &CodecContext) -> Result<Option<MappingKey>, CodecError> {
        let Some(object) = json.as_object() else {
            return Ok(None);
        };

        Ok(Some(
            MappingKey::builder()
                .with_address(decode_address(object, context)?)
                .build(),
        ))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MappingValueCodec;

impl JsonCodec<MappingValue> for MappingValueCodec {
    fn encode(&self, value: &MappingValue, context: &CodecContext) -> Result<Value, CodecError> {
        Ok(json!({
            ACTION: context.encode(Some(&value.action()))?,
            TREATMENTS: context.encode_all(value.treatments())?,
        }))
    }

    fn decode(
        &self,
        json: &Value,
        context: &CodecContext,
    ) -> Result<Option<MappingValue>, CodecError> {
        let Some(object) = json.as_object() else {
            return Ok(None);
        };

        let action = require(object, ACTION, "MappingValue")?;
        let action = context
            .decode::<MappingAction>(Some(action))?
            .ok_or_else(|| invalid(ACTION, "expected an object"))?;

        let treatments = match object.get(TREATMENTS) {
            Some(treatments) => context.decode_all::<MappingTreatment>(treatments)?,
            None => Vec::new(),
        };

        Ok(Some(
            treatments
                .into_iter()
                .fold(MappingValue::builder().with_action(action), |builder, t| {
                    builder.add(t)
                })
                .build(),
        ))
    }
}

/// Full mapping entry
///
/// `state` defaults to `ADDED` when absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct MappingEntryCodec;

impl JsonCodec<MappingEntry> for MappingEntryCodec {
    fn encode(&self, entry: &MappingEntry, context: &CodecContext) -> Result<Value, CodecError> {
        Ok(json!({
            ID: entry.id().value(),
            DEVICE_ID: entry.device_id().as_str(),
            KEY: context.encode(Some(entry.key()))?,
            VALUE: context.encode(Some(entry.value()))?,
            STATE: entry.state().as_str(),
        }))
    }

    fn decode(
        &self,
        json: &Value,
        context: &CodecContext,
    ) -> Result<Option<MappingEntry>, CodecError> {
        let Some(object) = json.as_object() else {
            return Ok(None);
        };
        const NAME: &str = "MappingEntry";

        let id = MappingId::new(require_u64(object, ID, NAME)?);
        let device_id = DeviceId::new(require_str(object, DEVICE_ID, NAME)?);
        let key = context
            .decode::<MappingKey>(Some(require(object, KEY, NAME)?))?
            .ok_or_else(|| invalid(KEY, "expected an object"))?;
        let value = context
            .decode::<MappingValue>(Some(require(object, VALUE, NAME)?))?
            .ok_or_else(|| invalid(VALUE, "expected an object"))?;

        let state = match object.get(STATE).and_then(Value::as_str) {
            Some(state) => state
                .parse::<MappingEntryState>()
                .map_err(|e| invalid(STATE, e))?,
            None => MappingEntryState::Added,
        };

        let mapping = Mapping::builder()
            .with_id(id)
            .for_device(device_id)
            .with_key(key)
            .with_value(value)
            .build();

        Ok(Some(MappingEntry::new(mapping, state)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> MappingEntry {
        let treatment = MappingTreatment::builder()
            .with_address(MappingAddress::ipv4("192.0.2.1/32".parse().unwrap()))
            .set_unicast_priority(1)
            .set_unicast_weight(100)
            .set_multicast_priority(255)
            .build();
        let mapping = Mapping::builder()
            .with_id(MappingId::new(0x1234))
            .for_device(DeviceId::new("lisp:10.1.1.1"))
            .with_key(
                MappingKey::builder()
                    .with_address(Some(MappingAddress::ipv4("10.0.0.0/32".parse().unwrap())))
                    .build(),
            )
            .with_value(
                MappingValue::builder()
                    .with_action(MappingAction::Drop)
                    .add(treatment)
                    .build(),
            )
            .build();
        MappingEntry::new(mapping, MappingEntryState::Added)
    }

    #[test]
    fn test_action_codec() {
        let context = CodecContext::with_defaults();
        let json = MappingActionCodec
            .encode(&MappingAction::NativeForward, &context)
            .unwrap();
        assert_eq!(json, json!({"type": "NATIVE_FORWARD"}));
        assert_eq!(
            MappingActionCodec.decode(&json, &context).unwrap(),
            Some(MappingAction::NativeForward)
        );
        assert!(
            MappingActionCodec
                .decode(&json!({"type": "BOUNCE"}), &context)
                .is_err()
        );
    }

    #[test]
    fn test_treatment_requires_weights() {
        let context = CodecContext::with_defaults();
        let json = json!({"unicastWeight": 1, "unicastPriority": 2, "multicastWeight": 3});
        assert!(matches!(
            MappingTreatmentCodec.decode(&json, &context),
            Err(CodecError::MissingMember {
                member: "multicastPriority",
                ..
            })
        ));
    }

    #[test]
    fn test_key_without_address() {
        let context = CodecContext::with_defaults();
        let key = MappingKey::builder().build();
        let json = MappingKeyCodec.encode(&key, &context).unwrap();
        assert_eq!(json, json!({}));
        assert_eq!(MappingKeyCodec.decode(&json, &context).unwrap(), Some(key));
    }

    #[test]
    fn test_entry_roundtrip() {
        let context = CodecContext::with_defaults();
        let entry = sample_entry();

        let json = MappingEntryCodec.encode(&entry, &context).unwrap();
        assert_eq!(json["id"], 0x1234);
        assert_eq!(json["deviceId"], "lisp:10.1.1.1");
        assert_eq!(json["state"], "ADDED");
        assert_eq!(json["value"]["action"]["type"], "DROP");
        assert_eq!(json["value"]["treatments"][0]["multicastPriority"], 255);

        assert_eq!(
            MappingEntryCodec.decode(&json, &context).unwrap(),
            Some(entry)
        );
    }

    #[test]
    fn test_entry_state_defaults_to_added() {
        let context = CodecContext::with_defaults();
        let mut json = MappingEntryCodec.encode(&sample_entry(), &context).unwrap();
        json.as_object_mut().unwrap().remove("state");

        let entry = MappingEntryCodec.decode(&json, &context).unwrap().unwrap();
        assert_eq!(entry.state(), MappingEntryState::Added);
    }
}
