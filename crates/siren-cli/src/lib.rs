//! # siren-cli: Command-Line Interface for the Siren Validator
//!
//! Provides the `siren` binary.
//!
//! ## Subcommands
//!
//! - `siren validate`: Validate documents from files or stdin.
//! - `siren catalog`: List every message key with its severity and text.
//!
//! ```bash
//! siren validate order.json customer.json
//! curl -s https://api.example.com/orders/42 | siren validate --format json
//! siren --config siren.yaml validate --strict order.json
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: every document passed.
//! - `1`: at least one document has errors (or warnings, with `--strict`).
//! - `2`: operational error: unreadable file, bad configuration.
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; validation logic lives in `siren-validate`.
//! - Findings go to stdout; logs go to stderr.

pub mod catalog;
pub mod output;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use siren_validate::{Validator, ValidatorConfig};

/// Build a validator from an optional config file plus extra field types
/// given on the command line.
pub fn load_validator(config_path: Option<&Path>, extra_field_types: &[String]) -> Result<Validator> {
    let config = match config_path {
        Some(path) => ValidatorConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ValidatorConfig::default(),
    };
    let config = config.with_extra_field_types(extra_field_types.iter().cloned());

    tracing::debug!(
        field_types = config.effective_field_types().len(),
        "resolved validator configuration"
    );

    Validator::new(config).context("invalid validator configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_validator_defaults() {
        let validator = load_validator(None, &[]).unwrap();
        assert!(validator.field_types().contains("text"));
    }

    #[test]
    fn load_validator_merges_cli_types_with_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("siren.yaml");
        std::fs::write(&path, "extra_field_types: [iban]\n").unwrap();

        let validator = load_validator(Some(&path), &["currency".to_string()]).unwrap();
        assert!(validator.field_types().contains("iban"));
        assert!(validator.field_types().contains("currency"));
        assert!(validator.field_types().contains("email"));
    }

    #[test]
    fn load_validator_missing_config() {
        let err = load_validator(Some(Path::new("/nonexistent/siren.yaml")), &[]).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load config"));
    }

    #[test]
    fn load_validator_bad_message_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("siren.yaml");
        std::fs::write(&path, "messages:\n  NOT_A_KEY: x\n").unwrap();
        assert!(load_validator(Some(&path), &[]).is_err());
    }
}
