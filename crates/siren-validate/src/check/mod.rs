//! Recursive structural checkers.
//!
//! Every checker takes the node under inspection plus its path, and
//! returns the findings for that node and everything beneath it. Paths
//! are extended by value, never mutated in place.

mod action;
mod class;
mod entity;
mod link;

use std::collections::BTreeSet;

use serde_json::Value;

use siren_core::{DocPath, Finding, MessageCatalog, MessageKey};

/// Keys for the three ways a `rel` array can be malformed.
///
/// Links and sub-entities apply the same rule but report it under
/// different keys.
#[derive(Debug, Clone, Copy)]
struct RelKeys {
    not_array: MessageKey,
    empty: MessageKey,
    not_string: MessageKey,
}

/// Borrowed view of the validator state shared by every check.
pub(crate) struct Checker<'a> {
    catalog: &'a MessageCatalog,
    field_types: &'a BTreeSet<String>,
}

impl<'a> Checker<'a> {
    pub(crate) fn new(catalog: &'a MessageCatalog, field_types: &'a BTreeSet<String>) -> Self {
        Self {
            catalog,
            field_types,
        }
    }

    /// Build a finding whose severity follows from its key.
    fn finding(&self, key: MessageKey, path: DocPath, value: Option<&Value>) -> Finding {
        Finding {
            severity: key.severity(),
            code: key,
            message: self.catalog.get(key).to_string(),
            path,
            value: value.cloned(),
        }
    }

    /// Build a finding that carries the offending value.
    fn report(&self, key: MessageKey, path: DocPath, value: &Value) -> Finding {
        self.finding(key, path, Some(value))
    }

    /// `attr`, if present and non-null, must be a string.
    fn optional_string(
        &self,
        node: &Value,
        attr: &str,
        path: &DocPath,
        key: MessageKey,
    ) -> Option<Finding> {
        match node.get(attr) {
            Some(value) if !value.is_null() && !value.is_string() => {
                Some(self.report(key, path.key(attr), value))
            }
            _ => None,
        }
    }

    /// `attr` must be present; if non-null it must be a string.
    ///
    /// A missing attribute is reported at the node itself, carrying the
    /// whole node.
    fn required_string(
        &self,
        node: &Value,
        attr: &str,
        path: &DocPath,
        missing: MessageKey,
        not_string: MessageKey,
    ) -> Option<Finding> {
        match node.get(attr) {
            None => Some(self.report(missing, path.clone(), node)),
            Some(_) => self.optional_string(node, attr, path, not_string),
        }
    }

    /// A present `rel` must be a non-empty array of strings.
    fn check_relations(&self, rel: &Value, path: &DocPath, keys: RelKeys) -> Vec<Finding> {
        let items = match rel.as_array() {
            Some(items) => items,
            None => return vec![self.report(keys.not_array, path.clone(), rel)],
        };

        if items.is_empty() {
            return vec![self.report(keys.empty, path.clone(), rel)];
        }

        items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.is_string())
            .map(|(j, item)| self.report(keys.not_string, path.index(j), item))
            .collect()
    }
}

/// True if `links` is an array holding a link whose `rel` array
/// contains `"self"`.
fn has_self_link(links: Option<&Value>) -> bool {
    links
        .and_then(Value::as_array)
        .map(|links| {
            links.iter().any(|link| {
                link.get("rel")
                    .and_then(Value::as_array)
                    .is_some_and(|rels| rels.iter().any(|r| r.as_str() == Some("self")))
            })
        })
        .unwrap_or(false)
}
