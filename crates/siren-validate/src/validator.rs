//! # Validator
//!
//! Entry points for validating Siren documents.
//!
//! ## Thread Safety
//!
//! [`Validator`] is immutable after construction and `Send + Sync`; one
//! instance can serve any number of concurrent callers. Each call builds a
//! fresh [`Findings`] and never mutates its input.

use std::collections::BTreeSet;
use std::path::Path;

use serde_json::Value;

use siren_core::{DocPath, Finding, Findings, MessageCatalog, MessageKey, SirenError};

use crate::check::Checker;
use crate::config::ValidatorConfig;
use crate::parse::{parse_document, ParseCategory, ParseFailure};

/// Validate raw input with the default configuration.
///
/// Returns every finding in discovery order; an empty result means the
/// document is fully valid.
pub fn validate(input: impl AsRef<[u8]>) -> Findings {
    Validator::default().validate(input)
}

/// A configured Siren document validator.
#[derive(Debug, Clone)]
pub struct Validator {
    catalog: MessageCatalog,
    field_types: BTreeSet<String>,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            catalog: MessageCatalog::builtin(),
            field_types: ValidatorConfig::default().effective_field_types(),
        }
    }
}

impl Validator {
    /// Build a validator from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `SirenError::UnknownMessageKey` if a message override names
    /// a key that does not exist.
    pub fn new(config: ValidatorConfig) -> Result<Self, SirenError> {
        let catalog = config.catalog()?;
        let field_types = config.effective_field_types();
        tracing::debug!(
            field_type_count = field_types.len(),
            message_overrides = config.messages.len(),
            "built validator"
        );
        Ok(Self {
            catalog,
            field_types,
        })
    }

    /// Replace the message catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: MessageCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// The message catalog in use.
    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// The field-type allow-list in use.
    pub fn field_types(&self) -> &BTreeSet<String> {
        &self.field_types
    }

    /// Validate raw JSON text or bytes.
    ///
    /// Malformed input yields exactly one `INVALID_JSON` error at the root
    /// path, carrying the raw input; no further checks run. Well-formed
    /// input nested past the parser's depth limit yields one
    /// `NESTING_TOO_DEEP` error instead.
    pub fn validate(&self, input: impl AsRef<[u8]>) -> Findings {
        let input = input.as_ref();
        match parse_document(input) {
            Ok(doc) => self.validate_value(&doc),
            Err(failure) if failure.category == ParseCategory::Depth => {
                tracing::debug!(
                    line = failure.line,
                    column = failure.column,
                    "document exceeds nesting limit"
                );
                Findings::from(vec![self.parse_finding(MessageKey::NestingTooDeep, &failure, None)])
            }
            Err(failure) => {
                tracing::debug!(
                    line = failure.line,
                    column = failure.column,
                    "document is not valid JSON"
                );
                let raw = Value::String(String::from_utf8_lossy(input).into_owned());
                Findings::from(vec![self.parse_finding(MessageKey::InvalidJson, &failure, Some(raw))])
            }
        }
    }

    /// Validate a document that has already been parsed.
    pub fn validate_value(&self, doc: &Value) -> Findings {
        let checker = Checker::new(&self.catalog, &self.field_types);
        let findings = Findings::from(checker.check_entity(doc, &DocPath::root()));
        tracing::debug!(
            error_count = findings.error_count(),
            warning_count = findings.warning_count(),
            "validated document"
        );
        findings
    }

    /// Read and validate a file.
    ///
    /// # Errors
    ///
    /// Returns `SirenError::Io` if the file cannot be read. Everything
    /// wrong with its contents is reported as findings.
    pub fn validate_file(&self, path: &Path) -> Result<Findings, SirenError> {
        let content = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "read document");
        Ok(self.validate(content))
    }

    /// Root-level finding for input that never reached the checkers; the
    /// parser diagnostic follows the catalog text on a second line.
    fn parse_finding(&self, key: MessageKey, failure: &ParseFailure, value: Option<Value>) -> Finding {
        Finding {
            severity: key.severity(),
            code: key,
            message: format!("{}\n{}", self.catalog.get(key), failure.detail),
            path: DocPath::root(),
            value,
        }
    }
}
