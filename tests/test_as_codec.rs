// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

// AS extension address JSON codec
use lispmap::extensions::ExtensionMappingAddress;
use lispmap::{CodecContext, CodecError, JsonCodec, LispAsAddress, LispAsAddressCodec, MappingAddress};
use serde_json::{Value, json};

#[test]
fn test_as_address_roundtrip_through_context() {
    let context = CodecContext::with_defaults();
    for as_number in [0u32, 1, 65000, u32::MAX] {
        let address = LispAsAddress::builder().with_as_number(as_number).build();
        let json = context.encode(Some(&address)).expect("encode should succeed");
        let decoded = context
            .decode::<LispAsAddress>(Some(&json))
            .expect("decode should succeed");
        assert_eq!(decoded, Some(address));
    }

    println!("✓ AS address round-trips through the codec context");
}

#[test]
fn test_missing_as_number_is_malformed() {
    let context = CodecContext::with_defaults();
    let json = json!({"address": {"type": "IPV4", "ipv4": "10.0.0.1/32"}});

    let err = context.decode::<LispAsAddress>(Some(&json)).unwrap_err();
    assert_eq!(err.to_string(), "asNumber member is required in LispAsAddress");

    println!("✓ Missing asNumber rejected");
}

#[test]
fn test_nested_address_is_optional() {
    let context = CodecContext::with_defaults();

    let bare = LispAsAddressCodec
        .decode(&json!({"asNumber": 64512}), &context)
        .unwrap()
        .unwrap();
    assert!(bare.address().is_none());

    // A non-object nested address is treated as absent
    let scalar = LispAsAddressCodec
        .decode(&json!({"asNumber": 64512, "address": "10.0.0.1"}), &context)
        .unwrap()
        .unwrap();
    assert!(scalar.address().is_none());

    let nested = LispAsAddressCodec
        .decode(
            &json!({"asNumber": 64512, "address": {"type": "DN", "name": "site-a"}}),
            &context,
        )
        .unwrap()
        .unwrap();
    assert_eq!(nested.address(), Some(&MappingAddress::dn("site-a")));
    assert_eq!(nested.to_string(), "AS64512(DN:site-a)");

    println!("✓ Nested AS address is optional");
}

#[test]
fn test_absent_input_is_not_an_error() {
    let context = CodecContext::with_defaults();
    assert_eq!(context.decode::<LispAsAddress>(Some(&Value::Null)).unwrap(), None);
    assert_eq!(context.decode::<LispAsAddress>(None).unwrap(), None);

    println!("✓ Absent input decodes to nothing");
}

#[test]
fn test_encoding_nothing_is_rejected() {
    let context = CodecContext::with_defaults();
    let err = context.encode::<LispAsAddress>(None).unwrap_err();
    assert!(matches!(err, CodecError::NullArgument("LispAsAddress")));

    println!("✓ Encoding a missing value rejected");
}

#[test]
fn test_extension_address_wraps_as_codec() {
    let context = CodecContext::with_defaults();
    let address = MappingAddress::extension(ExtensionMappingAddress::As(
        LispAsAddress::builder()
            .with_as_number(3)
            .with_address(Some(MappingAddress::as_number("4")))
            .build(),
    ));

    let json = context.encode(Some(&address)).unwrap();
    assert_eq!(
        json,
        json!({
            "type": "EXTENSION",
            "extensionType": "AS",
            "extension": {"asNumber": 3, "address": {"type": "AS", "asNumber": "4"}}
        })
    );
    assert_eq!(
        context.decode::<MappingAddress>(Some(&json)).unwrap(),
        Some(address)
    );

    println!("✓ Extension address delegates to the AS codec");
}
