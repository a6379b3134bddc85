//! Entity envelope and sub-entities.
//!
//! The root document and every sub-entity share the same envelope:
//! `class`, `properties`, `entities`, `actions`, `links`, `title`, and
//! the self-link convention. Sub-entities additionally carry `rel`.

use serde_json::Value;

use siren_core::{DocPath, Finding, MessageKey};

use super::{has_self_link, Checker, RelKeys};

const SUB_ENTITY_REL_KEYS: RelKeys = RelKeys {
    not_array: MessageKey::SubEntityRelsNotArray,
    empty: MessageKey::SubEntityRelsEmpty,
    not_string: MessageKey::SubEntityRelNotString,
};

impl Checker<'_> {
    /// Validate an entity and everything nested under it.
    ///
    /// A node that is not a JSON object has no attributes to check, so
    /// only the self-link rule can fire for it.
    pub(crate) fn check_entity(&self, node: &Value, path: &DocPath) -> Vec<Finding> {
        tracing::trace!(path = %path, "checking entity");
        let mut findings = Vec::new();

        if let Some(class) = node.get("class") {
            findings.extend(self.check_class(class, &path.key("class")));
        }

        if let Some(properties) = node.get("properties") {
            // Null counts as an empty property set.
            if !(properties.is_object() || properties.is_null()) {
                findings.push(self.report(
                    MessageKey::PropertiesNotObject,
                    path.key("properties"),
                    properties,
                ));
            }
        }

        if let Some(entities) = node.get("entities") {
            findings.extend(self.check_sub_entities(entities, &path.key("entities")));
        }

        if let Some(actions) = node.get("actions") {
            findings.extend(self.check_actions(actions, &path.key("actions")));
        }

        let links = node.get("links");
        if let Some(links) = links {
            findings.extend(self.check_links(links, &path.key("links")));
        }

        // Sub-entities with their own `href` are embedded links and point
        // elsewhere; the root always needs a self link.
        let needs_self_link = path.is_root() || node.get("href").is_none();
        if needs_self_link && !has_self_link(links) {
            findings.push(self.finding(MessageKey::MissingSelfLink, path.key("links"), links));
        }

        findings.extend(self.optional_string(node, "title", path, MessageKey::TitleTypeNotString));

        findings
    }

    /// Validate an `entities` array.
    ///
    /// Each element's `rel` is checked, then the element is validated as a
    /// full entity regardless of how its `rel` fared.
    pub(crate) fn check_sub_entities(&self, entities: &Value, path: &DocPath) -> Vec<Finding> {
        let Some(items) = entities.as_array() else {
            return vec![self.report(MessageKey::SubEntitiesNotArray, path.clone(), entities)];
        };

        let mut findings = Vec::new();
        for (i, entity) in items.iter().enumerate() {
            let entity_path = path.index(i);

            match entity.get("rel") {
                None => findings.push(self.report(
                    MessageKey::SubEntityMissingRel,
                    entity_path.clone(),
                    entity,
                )),
                Some(rel) => findings.extend(self.check_relations(
                    rel,
                    &entity_path.key("rel"),
                    SUB_ENTITY_REL_KEYS,
                )),
            }

            findings.extend(self.check_entity(entity, &entity_path));
        }
        findings
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use serde_json::json;
    use siren_core::{MessageCatalog, Severity};

    use super::*;

    fn check(doc: Value) -> Vec<Finding> {
        let catalog = MessageCatalog::builtin();
        let types = BTreeSet::new();
        Checker::new(&catalog, &types).check_entity(&doc, &DocPath::root())
    }

    fn codes(findings: &[Finding]) -> Vec<MessageKey> {
        findings.iter().map(|f| f.code).collect()
    }

    #[test]
    fn test_empty_root_missing_self_link() {
        let findings = check(json!({}));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, MessageKey::MissingSelfLink);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[0].path, DocPath::root().key("links"));
        assert_eq!(findings[0].value, None);
    }

    #[test]
    fn test_missing_self_link_carries_links_value() {
        let links = json!([{"rel": ["item"], "href": ""}]);
        let findings = check(json!({ "links": links.clone() }));
        assert_eq!(codes(&findings), [MessageKey::MissingSelfLink]);
        assert_eq!(findings[0].value, Some(links));
    }

    #[test]
    fn test_root_href_does_not_exempt_self_link() {
        let findings = check(json!({"href": "http://example.com"}));
        assert_eq!(codes(&findings), [MessageKey::MissingSelfLink]);
    }

    #[test]
    fn test_properties_must_be_object() {
        for bad in [json!([12345]), json!("x"), json!(3), json!(true)] {
            let findings = check(json!({
                "properties": bad.clone(),
                "links": [{"rel": ["self"], "href": ""}]
            }));
            assert_eq!(codes(&findings), [MessageKey::PropertiesNotObject], "for {bad}");
            assert_eq!(findings[0].path, DocPath::root().key("properties"));
            assert_eq!(findings[0].value, Some(bad));
        }
    }

    #[test]
    fn test_properties_null_allowed() {
        let findings = check(json!({
            "properties": null,
            "links": [{"rel": ["self"], "href": ""}]
        }));
        assert!(findings.is_empty(), "got: {findings:?}");
    }

    #[test]
    fn test_title_null_allowed_number_rejected() {
        let ok = check(json!({"title": null, "links": [{"rel": ["self"], "href": ""}]}));
        assert!(ok.is_empty());

        let bad = check(json!({"title": 7, "links": [{"rel": ["self"], "href": ""}]}));
        assert_eq!(codes(&bad), [MessageKey::TitleTypeNotString]);
        assert_eq!(bad[0].path, DocPath::root().key("title"));
    }

    #[test]
    fn test_non_object_root_only_self_link() {
        for doc in [json!([]), json!(42), json!("entity"), json!(null)] {
            let findings = check(doc);
            assert_eq!(codes(&findings), [MessageKey::MissingSelfLink]);
        }
    }

    #[test]
    fn test_sub_entities_not_array() {
        let findings = check(json!({
            "entities": {},
            "links": [{"rel": ["self"], "href": ""}]
        }));
        assert_eq!(codes(&findings), [MessageKey::SubEntitiesNotArray]);
        assert_eq!(findings[0].value, Some(json!({})));
    }

    #[test]
    fn test_sub_entity_missing_rel_is_additive() {
        let findings = check(json!({
            "entities": [{"class": [1]}],
            "links": [{"rel": ["self"], "href": ""}]
        }));
        assert_eq!(
            codes(&findings),
            [
                MessageKey::SubEntityMissingRel,
                MessageKey::ClassNotString,
                MessageKey::MissingSelfLink,
            ]
        );
        assert_eq!(findings[0].path, DocPath::root().key("entities").index(0));
        assert_eq!(findings[0].value, Some(json!({"class": [1]})));
        assert_eq!(
            findings[1].path,
            DocPath::root().key("entities").index(0).key("class").index(0)
        );
    }

    #[test]
    fn test_sub_entity_rel_shapes() {
        let findings = check(json!({
            "entities": [
                {"rel": "item", "href": "/a"},
                {"rel": [], "href": "/b"},
                {"rel": ["item", 2], "href": "/c"}
            ],
            "links": [{"rel": ["self"], "href": ""}]
        }));
        assert_eq!(
            codes(&findings),
            [
                MessageKey::SubEntityRelsNotArray,
                MessageKey::SubEntityRelsEmpty,
                MessageKey::SubEntityRelNotString,
            ]
        );
        let entities = DocPath::root().key("entities");
        assert_eq!(findings[0].path, entities.index(0).key("rel"));
        assert_eq!(findings[0].value, Some(json!("item")));
        assert_eq!(findings[1].path, entities.index(1).key("rel"));
        assert_eq!(findings[2].path, entities.index(2).key("rel").index(1));
        assert_eq!(findings[2].value, Some(json!(2)));
    }

    #[test]
    fn test_embedded_link_exempt_from_self_link() {
        let findings = check(json!({
            "entities": [{"rel": ["item"], "href": "http://example.com/items/1"}],
            "links": [{"rel": ["self"], "href": ""}]
        }));
        assert!(findings.is_empty(), "got: {findings:?}");
    }

    #[test]
    fn test_embedded_link_exemption_not_inherited() {
        let findings = check(json!({
            "entities": [{
                "rel": ["item"],
                "href": "/items/1",
                "entities": [{"rel": ["part"]}]
            }],
            "links": [{"rel": ["self"], "href": ""}]
        }));
        assert_eq!(codes(&findings), [MessageKey::MissingSelfLink]);
        assert_eq!(
            findings[0].path,
            DocPath::root()
                .key("entities")
                .index(0)
                .key("entities")
                .index(0)
                .key("links")
        );
    }

    #[test]
    fn test_check_order() {
        let findings = check(json!({
            "title": 1,
            "links": {},
            "actions": {},
            "entities": {},
            "properties": [],
            "class": "x"
        }));
        assert_eq!(
            codes(&findings),
            [
                MessageKey::ClassesNotArray,
                MessageKey::PropertiesNotObject,
                MessageKey::SubEntitiesNotArray,
                MessageKey::ActionsNotArray,
                MessageKey::LinksNotArray,
                MessageKey::MissingSelfLink,
                MessageKey::TitleTypeNotString,
            ]
        );
    }
}
