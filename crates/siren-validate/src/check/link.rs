//! `links` arrays.

use serde_json::Value;

use siren_core::{DocPath, Finding, MessageKey};

use super::{Checker, RelKeys};

const LINK_REL_KEYS: RelKeys = RelKeys {
    not_array: MessageKey::LinkRelsNotArray,
    empty: MessageKey::LinkRelsEmpty,
    not_string: MessageKey::LinkRelNotString,
};

impl Checker<'_> {
    /// Validate a `links` array: per link `class`, `rel`, `href`, `title`,
    /// and `type`, in that order.
    pub(crate) fn check_links(&self, links: &Value, path: &DocPath) -> Vec<Finding> {
        let Some(items) = links.as_array() else {
            return vec![self.report(MessageKey::LinksNotArray, path.clone(), links)];
        };

        let mut findings = Vec::new();
        for (i, link) in items.iter().enumerate() {
            findings.extend(self.check_link(link, &path.index(i)));
        }
        findings
    }

    fn check_link(&self, link: &Value, path: &DocPath) -> Vec<Finding> {
        let mut findings = Vec::new();

        if let Some(class) = link.get("class") {
            findings.extend(self.check_class(class, &path.key("class")));
        }

        match link.get("rel") {
            None => findings.push(self.report(MessageKey::LinkMissingRel, path.clone(), link)),
            Some(rel) => findings.extend(self.check_relations(rel, &path.key("rel"), LINK_REL_KEYS)),
        }

        // Unlike the other string attributes, `href` may not be null.
        match link.get("href") {
            None => findings.push(self.report(MessageKey::LinkMissingHref, path.clone(), link)),
            Some(href) if !href.is_string() => {
                findings.push(self.report(MessageKey::LinkHrefNotString, path.key("href"), href));
            }
            Some(_) => {}
        }

        findings.extend(self.optional_string(link, "title", path, MessageKey::LinkTitleNotString));
        findings.extend(self.optional_string(link, "type", path, MessageKey::LinkTypeNotString));

        findings
    }
}
