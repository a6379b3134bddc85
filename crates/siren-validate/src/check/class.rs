//! `class` arrays, shared by entities, links, actions, and fields.

use serde_json::Value;

use siren_core::{DocPath, Finding, MessageKey};

use super::Checker;

impl Checker<'_> {
    /// A `class` value must be an array of strings.
    ///
    /// A non-array yields one error and nothing else; otherwise each
    /// non-string element is reported at its own index.
    pub(crate) fn check_class(&self, class: &Value, path: &DocPath) -> Vec<Finding> {
        let Some(items) = class.as_array() else {
            return vec![self.report(MessageKey::ClassesNotArray, path.clone(), class)];
        };

        items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.is_string())
            .map(|(i, item)| self.report(MessageKey::ClassNotString, path.index(i), item))
            .collect()
    }
}
