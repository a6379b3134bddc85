//! Property tests over arbitrary JSON input.

use proptest::prelude::*;
use serde_json::{json, Value};
use siren_validate::{validate, MessageKey, Validator};

/// Strategy for JSON values biased toward Siren attribute names, so the
/// checkers actually recurse instead of ignoring unknown keys.
fn siren_like_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        prop_oneof![
            Just("self".to_string()),
            Just("text".to_string()),
            "[a-z]{0,8}",
        ]
        .prop_map(Value::String),
    ];
    let key = prop_oneof![
        Just("class".to_string()),
        Just("properties".to_string()),
        Just("entities".to_string()),
        Just("actions".to_string()),
        Just("fields".to_string()),
        Just("links".to_string()),
        Just("rel".to_string()),
        Just("href".to_string()),
        Just("name".to_string()),
        Just("type".to_string()),
        Just("title".to_string()),
        Just("method".to_string()),
        "[a-z]{1,6}",
    ]
    .boxed();
    leaf.prop_recursive(6, 128, 6, move |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map(key.clone(), inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    /// Validating the same document twice yields identical findings.
    #[test]
    fn validation_is_idempotent(doc in siren_like_value()) {
        let text = doc.to_string();
        prop_assert_eq!(validate(&text), validate(&text));
    }

    /// Validating parsed and unparsed forms agree.
    #[test]
    fn value_and_text_agree(doc in siren_like_value()) {
        let validator = Validator::default();
        prop_assert_eq!(validator.validate_value(&doc), validator.validate(doc.to_string()));
    }

    /// Arbitrary bytes never panic; non-JSON yields exactly one root error.
    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let findings = validate(&bytes);
        if serde_json::from_slice::<Value>(&bytes).is_err() {
            prop_assert_eq!(findings.len(), 1);
            let f = &findings.as_slice()[0];
            prop_assert_eq!(f.code, MessageKey::InvalidJson);
            prop_assert!(f.path.is_root());
        }
    }

    /// Every finding's path resolves to a node in the document, or to the
    /// absent `links` attribute of an entity.
    #[test]
    fn paths_address_the_document(doc in siren_like_value()) {
        for finding in validate(doc.to_string()).iter() {
            let mut node = Some(&doc);
            for segment in finding.path.segments() {
                node = node.and_then(|n| match segment {
                    siren_validate::PathSegment::Key(k) => n.get(k.as_str()),
                    siren_validate::PathSegment::Index(i) => n.get(*i),
                });
            }
            if finding.code == MessageKey::MissingSelfLink {
                prop_assert_eq!(node, finding.value.as_ref());
            } else {
                prop_assert!(node.is_some(), "unresolvable path {}", finding.path);
            }
        }
    }

    /// A class array with one non-string element yields exactly one
    /// CLASS_NOT_STRING at that index.
    #[test]
    fn class_element_errors_are_indexed(
        prefix in prop::collection::vec("[a-z]{1,5}", 0..5),
        bad in any::<i64>(),
    ) {
        let mut class: Vec<Value> = prefix.iter().cloned().map(Value::String).collect();
        class.push(json!(bad));
        let doc = json!({"class": class, "links": [{"rel": ["self"], "href": ""}]});
        let findings = validate(doc.to_string()).into_inner();
        prop_assert_eq!(findings.len(), 1);
        prop_assert_eq!(findings[0].code, MessageKey::ClassNotString);
        prop_assert_eq!(
            serde_json::to_value(&findings[0].path).unwrap(),
            json!(["class", prefix.len()])
        );
    }
}
