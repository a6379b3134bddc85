//! # Validate Subcommand
//!
//! Validates Siren documents read from files or stdin and prints every
//! finding. A document passes when it has no errors; with `--strict` it
//! must also have no warnings.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use siren_validate::Validator;

use crate::output::{write_reports, OutputFormat, Report};

/// Label used for documents read from stdin.
pub const STDIN_LABEL: &str = "<stdin>";

/// Arguments for the `siren validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Documents to validate. `-` or no path reads stdin.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Treat warnings as failures.
    #[arg(long)]
    pub strict: bool,

    /// Accept an additional action field type. Repeatable.
    #[arg(long = "field-type", value_name = "TYPE")]
    pub field_types: Vec<String>,
}

/// Where one document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input, read once.
    Stdin,
    /// A document file on disk.
    File(PathBuf),
}

impl Source {
    /// Display label for reports.
    pub fn label(&self) -> String {
        match self {
            Source::Stdin => STDIN_LABEL.to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

/// Map command-line paths to sources; an empty list means stdin.
pub fn sources(paths: &[PathBuf]) -> Vec<Source> {
    if paths.is_empty() {
        return vec![Source::Stdin];
    }
    paths
        .iter()
        .map(|p| {
            if p.as_os_str() == "-" {
                Source::Stdin
            } else {
                Source::File(p.clone())
            }
        })
        .collect()
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when every document passes, 1 when any fails.
/// Unreadable input or configuration is an `Err` (exit code 2).
pub fn run_validate(args: &ValidateArgs, config: Option<&Path>) -> Result<u8> {
    let validator = crate::load_validator(config, &args.field_types)?;
    let stdout = std::io::stdout();
    validate_sources(
        &validator,
        &sources(&args.paths),
        args.format,
        args.strict,
        &mut std::io::stdin().lock(),
        &mut stdout.lock(),
    )
}

/// Validate each source in order and write the reports.
pub fn validate_sources(
    validator: &Validator,
    sources: &[Source],
    format: OutputFormat,
    strict: bool,
    stdin: &mut impl Read,
    out: &mut impl Write,
) -> Result<u8> {
    let mut stdin_buf: Option<Vec<u8>> = None;
    let mut reports = Vec::with_capacity(sources.len());

    for source in sources {
        let findings = match source {
            Source::Stdin => {
                // Stdin can only be drained once; repeated `-` reuses it.
                if stdin_buf.is_none() {
                    let mut buf = Vec::new();
                    stdin
                        .read_to_end(&mut buf)
                        .context("failed to read document from stdin")?;
                    stdin_buf = Some(buf);
                }
                validator.validate(stdin_buf.as_deref().unwrap_or_default())
            }
            Source::File(path) => validator
                .validate_file(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
        };

        tracing::info!(
            source = %source.label(),
            errors = findings.error_count(),
            warnings = findings.warning_count(),
            "validated document"
        );
        reports.push(Report::new(source.label(), findings, strict));
    }

    write_reports(out, &reports, format)?;

    let failed = reports.iter().filter(|r| !r.valid).count();
    if failed > 0 {
        tracing::info!(failed, total = reports.len(), "validation failed");
        Ok(1)
    } else {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{"links":[{"rel":["self"],"href":"http://api.x.io/orders/42"}]}"#;

    fn run(sources: &[Source], stdin: &str, format: OutputFormat, strict: bool) -> (u8, String) {
        let mut out = Vec::new();
        let code = validate_sources(
            &Validator::default(),
            sources,
            format,
            strict,
            &mut stdin.as_bytes(),
            &mut out,
        )
        .unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_sources_default_to_stdin() {
        assert_eq!(sources(&[]), [Source::Stdin]);
        assert_eq!(
            sources(&[PathBuf::from("-"), PathBuf::from("a.json")]),
            [Source::Stdin, Source::File(PathBuf::from("a.json"))]
        );
    }

    #[test]
    fn test_valid_stdin() {
        let (code, out) = run(&[Source::Stdin], VALID, OutputFormat::Text, false);
        assert_eq!(code, 0);
        assert_eq!(out, "OK: <stdin>\n");
    }

    #[test]
    fn test_invalid_json_fails() {
        let (code, out) = run(&[Source::Stdin], "{", OutputFormat::Text, false);
        assert_eq!(code, 1);
        assert!(out.starts_with("FAIL: <stdin> (1 error(s), 0 warning(s))"));
        assert!(out.contains("error [INVALID_JSON] (root): Invalid JSON"));
    }

    #[test]
    fn test_strict_fails_on_warnings() {
        assert_eq!(run(&[Source::Stdin], "{}", OutputFormat::Text, false).0, 0);
        assert_eq!(run(&[Source::Stdin], "{}", OutputFormat::Text, true).0, 1);
    }

    #[test]
    fn test_files_and_json_output() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        std::fs::write(&good, VALID).unwrap();
        std::fs::write(&bad, r#"{"properties":[],"links":[{"rel":["self"],"href":""}]}"#).unwrap();

        let (code, out) = run(
            &[Source::File(good), Source::File(bad)],
            "",
            OutputFormat::Json,
            false,
        );
        assert_eq!(code, 1);
        let reports: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(reports.as_array().unwrap().len(), 2);
        assert_eq!(reports[0]["valid"], true);
        assert_eq!(reports[1]["valid"], false);
        assert_eq!(reports[1]["findings"][0]["code"], "PROPERTIES_NOT_OBJECT");
    }

    #[test]
    fn test_repeated_stdin_reuses_input() {
        let (code, out) = run(&[Source::Stdin, Source::Stdin], VALID, OutputFormat::Text, false);
        assert_eq!(code, 0);
        assert_eq!(out, "OK: <stdin>\nOK: <stdin>\n");
    }

    #[test]
    fn test_missing_file_is_operational_error() {
        let mut out = Vec::new();
        let err = validate_sources(
            &Validator::default(),
            &[Source::File(PathBuf::from("/nonexistent/order.json"))],
            OutputFormat::Text,
            false,
            &mut std::io::empty(),
            &mut out,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("failed to read /nonexistent/order.json"));
        assert!(out.is_empty());
    }
}
