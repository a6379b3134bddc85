//! `actions` arrays and their `fields`.
//!
//! Field values are never inspected; only the declared shape is.

use serde_json::Value;

use siren_core::{DocPath, Finding, MessageKey};

use super::Checker;

impl Checker<'_> {
    /// Validate an `actions` array.
    pub(crate) fn check_actions(&self, actions: &Value, path: &DocPath) -> Vec<Finding> {
        let Some(items) = actions.as_array() else {
            return vec![self.report(MessageKey::ActionsNotArray, path.clone(), actions)];
        };

        let mut findings = Vec::new();
        for (i, action) in items.iter().enumerate() {
            findings.extend(self.check_action(action, &path.index(i)));
        }
        findings
    }

    fn check_action(&self, action: &Value, path: &DocPath) -> Vec<Finding> {
        let mut findings = Vec::new();

        findings.extend(self.required_string(
            action,
            "name",
            path,
            MessageKey::ActionMissingName,
            MessageKey::ActionNameNotString,
        ));

        if let Some(class) = action.get("class") {
            findings.extend(self.check_class(class, &path.key("class")));
        }

        findings.extend(self.optional_string(
            action,
            "method",
            path,
            MessageKey::ActionMethodNotString,
        ));

        findings.extend(self.required_string(
            action,
            "href",
            path,
            MessageKey::ActionMissingHref,
            MessageKey::ActionHrefNotString,
        ));

        findings.extend(self.optional_string(action, "title", path, MessageKey::ActionTitleNotString));
        findings.extend(self.optional_string(action, "type", path, MessageKey::ActionTypeNotString));

        match action.get("fields") {
            None | Some(Value::Null) => {}
            Some(fields) => findings.extend(self.check_fields(fields, &path.key("fields"))),
        }

        findings
    }

    /// Validate a non-null `fields` value.
    pub(crate) fn check_fields(&self, fields: &Value, path: &DocPath) -> Vec<Finding> {
        let Some(items) = fields.as_array() else {
            return vec![self.report(MessageKey::ActionFieldsNotArray, path.clone(), fields)];
        };

        let mut findings = Vec::new();
        for (i, field) in items.iter().enumerate() {
            findings.extend(self.check_field(field, &path.index(i)));
        }
        findings
    }

    fn check_field(&self, field: &Value, path: &DocPath) -> Vec<Finding> {
        let mut findings = Vec::new();

        findings.extend(self.required_string(
            field,
            "name",
            path,
            MessageKey::ActionFieldMissingName,
            MessageKey::ActionFieldNameNotString,
        ));

        if let Some(class) = field.get("class") {
            findings.extend(self.check_class(class, &path.key("class")));
        }

        findings.extend(self.optional_string(
            field,
            "title",
            path,
            MessageKey::ActionFieldTitleNotString,
        ));

        match field.get("type") {
            None | Some(Value::Null) => {}
            Some(Value::String(kind)) => {
                if !self.field_types.contains(kind.as_str()) {
                    findings.push(self.finding(
                        MessageKey::UnknownField,
                        path.key("type"),
                        field.get("type"),
                    ));
                }
            }
            Some(other) => findings.push(self.report(
                MessageKey::ActionFieldTypeNotString,
                path.key("type"),
                other,
            )),
        }

        findings
    }
}
