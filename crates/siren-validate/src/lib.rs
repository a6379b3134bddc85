//! # siren-validate: Structural Validation for Siren Documents
//!
//! Checks a JSON document against the structural rules of the Siren
//! hypermedia format and returns every problem found in one pass.
//!
//! ```
//! let findings = siren_validate::validate(r#"{"links":[{"rel":["self"],"href":""}]}"#);
//! assert!(findings.is_empty());
//!
//! let findings = siren_validate::validate("{}");
//! assert_eq!(findings.warning_count(), 1);
//! assert!(!findings.has_errors());
//! ```
//!
//! ## Pipeline
//!
//! 1. [`parse`]: raw bytes to a `serde_json::Value`. Malformed input
//!    yields a single `INVALID_JSON` error and stops; input nested past
//!    the parser's depth limit yields a single `NESTING_TOO_DEEP` error.
//! 2. `check`: a recursive walk from the root entity into classes,
//!    sub-entities, actions (and their fields), and links. Each checker
//!    returns its own findings; callers concatenate them in order.
//!
//! ## Crate Policy
//!
//! - Validation never fails: expected problems are [`Finding`]s, never
//!   `Err` and never a panic. Only file I/O and configuration loading
//!   return [`SirenError`].
//! - The input document is never mutated.
//! - Message text is looked up from a [`MessageCatalog`]; no prose is
//!   inlined in the checkers.

mod check;
pub mod config;
pub mod parse;
pub mod validator;

pub use config::{ValidatorConfig, DEFAULT_FIELD_TYPES};
pub use parse::{parse_document, ParseCategory, ParseFailure};
pub use validator::{validate, Validator};

pub use siren_core::{
    DocPath, Finding, Findings, MessageCatalog, MessageKey, PathSegment, Severity, SirenError,
};
