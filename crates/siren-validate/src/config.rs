//! # Validator Configuration
//!
//! Tunable inputs of the validator: the field-type allow-list and
//! message catalog overrides. Loaded from YAML:
//!
//! ```yaml
//! # Add to the built-in HTML input types.
//! extra_field_types: [currency, iban]
//!
//! # Or replace them entirely.
//! # field_types: [text, number]
//!
//! messages:
//!   MISSING_SELF_LINK: "Entity has no self link"
//! ```
//!
//! Every key is optional; an empty file yields the defaults.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use siren_core::{MessageCatalog, SirenError};

/// Field `type` tokens recognized out of the box: the HTML5 input types.
///
/// A field whose `type` is a string outside the configured set is reported
/// as a warning, never an error.
pub const DEFAULT_FIELD_TYPES: [&str; 19] = [
    "hidden",
    "text",
    "search",
    "tel",
    "url",
    "email",
    "password",
    "datetime",
    "date",
    "month",
    "week",
    "time",
    "datetime-local",
    "number",
    "range",
    "color",
    "checkbox",
    "radio",
    "file",
];

/// Validator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Base field-type allow-list. Defaults to [`DEFAULT_FIELD_TYPES`].
    pub field_types: BTreeSet<String>,
    /// Additional accepted field types, merged into `field_types`.
    pub extra_field_types: BTreeSet<String>,
    /// Message catalog overrides keyed by SCREAMING_SNAKE_CASE name.
    pub messages: BTreeMap<String, String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            field_types: DEFAULT_FIELD_TYPES.iter().map(|t| t.to_string()).collect(),
            extra_field_types: BTreeSet::new(),
            messages: BTreeMap::new(),
        }
    }
}

impl ValidatorConfig {
    /// Parse a configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `SirenError::Config` if the YAML is malformed or contains
    /// unknown keys.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SirenError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| SirenError::Config {
            reason: format!("invalid YAML: {e}"),
        })
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `SirenError::Io` if the file cannot be read and
    /// `SirenError::Config` if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, SirenError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content).map_err(|e| match e {
            SirenError::Config { reason } => SirenError::Config {
                reason: format!("{}: {reason}", path.display()),
            },
            other => other,
        })
    }

    /// Adds field types to the allow-list.
    #[must_use]
    pub fn with_extra_field_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_field_types.extend(types.into_iter().map(Into::into));
        self
    }

    /// The effective allow-list: `field_types` plus `extra_field_types`.
    pub fn effective_field_types(&self) -> BTreeSet<String> {
        self.field_types
            .union(&self.extra_field_types)
            .cloned()
            .collect()
    }

    /// Build the message catalog: built-in text with `messages` applied.
    ///
    /// # Errors
    ///
    /// Returns `SirenError::UnknownMessageKey` for overrides naming a key
    /// that does not exist.
    pub fn catalog(&self) -> Result<MessageCatalog, SirenError> {
        MessageCatalog::builtin().with_overrides(&self.messages)
    }
}
