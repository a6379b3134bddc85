//! # Message Keys and Catalog
//!
//! Every condition the validator can report has a stable [`MessageKey`].
//! The engine only ever refers to keys; the human-readable text comes from
//! a [`MessageCatalog`], so wording can change (or be localized) without
//! touching validation logic.
//!
//! The built-in catalog covers every key. Overrides are `KEY: text` pairs
//! (the `messages:` section of a validator config file) and replace only
//! the keys they name.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SirenError;
use crate::finding::Severity;

/// Stable identifier for every reportable condition.
///
/// Serializes as the SCREAMING_SNAKE_CASE name (e.g. `"CLASS_NOT_STRING"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKey {
    // ── Errors ──────────────────────────────────────────────────────
    /// Input is not valid JSON.
    InvalidJson,
    /// Input is well-formed JSON nested deeper than the parser accepts.
    NestingTooDeep,
    /// `class` is not an array.
    ClassesNotArray,
    /// `class` element is not a string.
    ClassNotString,
    /// `properties` is not an object.
    PropertiesNotObject,
    /// Entity `title` is not a string.
    TitleTypeNotString,
    /// `entities` is not an array.
    SubEntitiesNotArray,
    /// Sub-entity has no `rel`.
    SubEntityMissingRel,
    /// Sub-entity `rel` is not an array.
    SubEntityRelsNotArray,
    /// Sub-entity `rel` is an empty array.
    SubEntityRelsEmpty,
    /// Sub-entity `rel` item is not a string.
    SubEntityRelNotString,
    /// `links` is not an array.
    LinksNotArray,
    /// Link has no `rel`.
    LinkMissingRel,
    /// Link `rel` is not an array.
    LinkRelsNotArray,
    /// Link `rel` is an empty array.
    LinkRelsEmpty,
    /// Link `rel` item is not a string.
    LinkRelNotString,
    /// Link has no `href`.
    LinkMissingHref,
    /// Link `href` is not a string.
    LinkHrefNotString,
    /// Link `title` is not a string.
    LinkTitleNotString,
    /// Link `type` is not a string.
    LinkTypeNotString,
    /// `actions` is not an array.
    ActionsNotArray,
    /// Action has no `name`.
    ActionMissingName,
    /// Action `name` is not a string.
    ActionNameNotString,
    /// Action `method` is not a string.
    ActionMethodNotString,
    /// Action has no `href`.
    ActionMissingHref,
    /// Action `href` is not a string.
    ActionHrefNotString,
    /// Action `title` is not a string.
    ActionTitleNotString,
    /// Action `type` is not a string.
    ActionTypeNotString,
    /// Action `fields` is not an array.
    ActionFieldsNotArray,
    /// Field has no `name`.
    ActionFieldMissingName,
    /// Field `name` is not a string.
    ActionFieldNameNotString,
    /// Field `title` is not a string.
    ActionFieldTitleNotString,
    /// Field `type` is not a string.
    ActionFieldTypeNotString,

    // ── Warnings ────────────────────────────────────────────────────
    /// Entity has no link whose `rel` contains `"self"`.
    MissingSelfLink,
    /// Field `type` is a string outside the recognized vocabulary.
    UnknownField,
}

/// Total number of message keys.
pub const MESSAGE_KEY_COUNT: usize = 35;

impl MessageKey {
    /// Every key, errors first, in declaration order.
    pub const ALL: [MessageKey; MESSAGE_KEY_COUNT] = [
        Self::InvalidJson,
        Self::NestingTooDeep,
        Self::ClassesNotArray,
        Self::ClassNotString,
        Self::PropertiesNotObject,
        Self::TitleTypeNotString,
        Self::SubEntitiesNotArray,
        Self::SubEntityMissingRel,
        Self::SubEntityRelsNotArray,
        Self::SubEntityRelsEmpty,
        Self::SubEntityRelNotString,
        Self::LinksNotArray,
        Self::LinkMissingRel,
        Self::LinkRelsNotArray,
        Self::LinkRelsEmpty,
        Self::LinkRelNotString,
        Self::LinkMissingHref,
        Self::LinkHrefNotString,
        Self::LinkTitleNotString,
        Self::LinkTypeNotString,
        Self::ActionsNotArray,
        Self::ActionMissingName,
        Self::ActionNameNotString,
        Self::ActionMethodNotString,
        Self::ActionMissingHref,
        Self::ActionHrefNotString,
        Self::ActionTitleNotString,
        Self::ActionTypeNotString,
        Self::ActionFieldsNotArray,
        Self::ActionFieldMissingName,
        Self::ActionFieldNameNotString,
        Self::ActionFieldTitleNotString,
        Self::ActionFieldTypeNotString,
        Self::MissingSelfLink,
        Self::UnknownField,
    ];

    /// Returns the SCREAMING_SNAKE_CASE identifier.
    ///
    /// Must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidJson => "INVALID_JSON",
            Self::NestingTooDeep => "NESTING_TOO_DEEP",
            Self::ClassesNotArray => "CLASSES_NOT_ARRAY",
            Self::ClassNotString => "CLASS_NOT_STRING",
            Self::PropertiesNotObject => "PROPERTIES_NOT_OBJECT",
            Self::TitleTypeNotString => "TITLE_TYPE_NOT_STRING",
            Self::SubEntitiesNotArray => "SUB_ENTITIES_NOT_ARRAY",
            Self::SubEntityMissingRel => "SUB_ENTITY_MISSING_REL",
            Self::SubEntityRelsNotArray => "SUB_ENTITY_RELS_NOT_ARRAY",
            Self::SubEntityRelsEmpty => "SUB_ENTITY_RELS_EMPTY",
            Self::SubEntityRelNotString => "SUB_ENTITY_REL_NOT_STRING",
            Self::LinksNotArray => "LINKS_NOT_ARRAY",
            Self::LinkMissingRel => "LINK_MISSING_REL",
            Self::LinkRelsNotArray => "LINK_RELS_NOT_ARRAY",
            Self::LinkRelsEmpty => "LINK_RELS_EMPTY",
            Self::LinkRelNotString => "LINK_REL_NOT_STRING",
            Self::LinkMissingHref => "LINK_MISSING_HREF",
            Self::LinkHrefNotString => "LINK_HREF_NOT_STRING",
            Self::LinkTitleNotString => "LINK_TITLE_NOT_STRING",
            Self::LinkTypeNotString => "LINK_TYPE_NOT_STRING",
            Self::ActionsNotArray => "ACTIONS_NOT_ARRAY",
            Self::ActionMissingName => "ACTION_MISSING_NAME",
            Self::ActionNameNotString => "ACTION_NAME_NOT_STRING",
            Self::ActionMethodNotString => "ACTION_METHOD_NOT_STRING",
            Self::ActionMissingHref => "ACTION_MISSING_HREF",
            Self::ActionHrefNotString => "ACTION_HREF_NOT_STRING",
            Self::ActionTitleNotString => "ACTION_TITLE_NOT_STRING",
            Self::ActionTypeNotString => "ACTION_TYPE_NOT_STRING",
            Self::ActionFieldsNotArray => "ACTION_FIELDS_NOT_ARRAY",
            Self::ActionFieldMissingName => "ACTION_FIELD_MISSING_NAME",
            Self::ActionFieldNameNotString => "ACTION_FIELD_NAME_NOT_STRING",
            Self::ActionFieldTitleNotString => "ACTION_FIELD_TITLE_NOT_STRING",
            Self::ActionFieldTypeNotString => "ACTION_FIELD_TYPE_NOT_STRING",
            Self::MissingSelfLink => "MISSING_SELF_LINK",
            Self::UnknownField => "UNKNOWN_FIELD",
        }
    }

    /// Severity every finding with this key is reported at.
    pub fn severity(&self) -> Severity {
        match self {
            Self::MissingSelfLink | Self::UnknownField => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Built-in English text for this key.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidJson => "Invalid JSON",
            Self::NestingTooDeep => "Document nesting exceeds the supported depth",
            Self::ClassesNotArray => "The `class` attribute is not an array",
            Self::ClassNotString => "Class is not a string",
            Self::PropertiesNotObject => "The `properties` attribute is not an object",
            Self::TitleTypeNotString => "The `title` attribute is not a string",
            Self::SubEntitiesNotArray => "The `entities` attribute is not an array",
            Self::SubEntityMissingRel => "Sub-entity is missing `rel` attribute",
            Self::SubEntityRelsNotArray => "Sub-entity `rel` attribute is not an array",
            Self::SubEntityRelsEmpty => "Sub-entity `rel` attribute is empty",
            Self::SubEntityRelNotString => "Sub-entity relation is not a string",
            Self::LinksNotArray => "The `links` attribute is not an array",
            Self::LinkMissingRel => "Link is missing `rel` attribute",
            Self::LinkRelsNotArray => "Link `rel` attribute is not an array",
            Self::LinkRelsEmpty => "Link `rel` attribute is empty",
            Self::LinkRelNotString => "Link relation is not a string",
            Self::LinkMissingHref => "Link is missing `href` attribute",
            Self::LinkHrefNotString => "Link `href` attribute is not a string",
            Self::LinkTitleNotString => "Link `title` attribute is not a string",
            Self::LinkTypeNotString => "Link `type` attribute is not a string",
            Self::ActionsNotArray => "The `actions` attribute is not an array",
            Self::ActionMissingName => "Action is missing `name` attribute",
            Self::ActionNameNotString => "Action `name` attribute is not a string",
            Self::ActionMethodNotString => "Action `method` attribute is not a string",
            Self::ActionMissingHref => "Action is missing `href` attribute",
            Self::ActionHrefNotString => "Action `href` attribute is not a string",
            Self::ActionTitleNotString => "Action `title` attribute is not a string",
            Self::ActionTypeNotString => "Action `type` attribute is not a string",
            Self::ActionFieldsNotArray => "Action `fields` attribute is not an array",
            Self::ActionFieldMissingName => "Field is missing `name` attribute",
            Self::ActionFieldNameNotString => "Field `name` attribute is not a string",
            Self::ActionFieldTitleNotString => "Field `title` attribute is not a string",
            Self::ActionFieldTypeNotString => "Field `type` attribute is not a string",
            Self::MissingSelfLink => "The entity is missing a link with a `self` relation",
            Self::UnknownField => "Field `type` attribute value is unknown",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKey {
    type Err = SirenError;

    /// Parse a key from its SCREAMING_SNAKE_CASE identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| SirenError::UnknownMessageKey(s.to_string()))
    }
}

/// Lookup table from [`MessageKey`] to human-readable text.
///
/// Always complete: every key resolves to some text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    messages: BTreeMap<MessageKey, String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MessageCatalog {
    /// The built-in English catalog.
    pub fn builtin() -> Self {
        let messages = MessageKey::ALL
            .iter()
            .map(|key| (*key, key.default_message().to_string()))
            .collect();
        Self { messages }
    }

    /// Text for a key.
    pub fn get(&self, key: MessageKey) -> &str {
        self.messages
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_message())
    }

    /// Iterate `(key, text)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (MessageKey, &str)> {
        self.messages.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Returns a copy with the named keys replaced.
    ///
    /// # Errors
    ///
    /// Returns `SirenError::UnknownMessageKey` if any override names a key
    /// that does not exist.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Result<Self, SirenError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, text) in overrides {
            let key: MessageKey = name.as_ref().parse()?;
            self.messages.insert(key, text.into());
        }
        Ok(self)
    }
}
