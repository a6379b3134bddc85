//! # Catalog Subcommand
//!
//! Lists every message key with its severity and effective text, after
//! any overrides from the configuration file.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use siren_core::{MessageCatalog, MessageKey, Severity};

use crate::output::OutputFormat;

/// Arguments for the `siren catalog` subcommand.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct Entry<'a> {
    code: MessageKey,
    severity: Severity,
    message: &'a str,
}

/// Execute the catalog subcommand. Always returns exit code 0.
pub fn run_catalog(args: &CatalogArgs, config: Option<&Path>) -> Result<u8> {
    let validator = crate::load_validator(config, &[])?;
    let stdout = std::io::stdout();
    write_catalog(validator.catalog(), args.format, &mut stdout.lock())?;
    Ok(0)
}

/// Write the catalog in the requested format, in key declaration order.
pub fn write_catalog(catalog: &MessageCatalog, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let entries: Vec<Entry<'_>> = MessageKey::ALL
        .iter()
        .map(|&code| Entry {
            code,
            severity: code.severity(),
            message: catalog.get(code),
        })
        .collect();

    match format {
        OutputFormat::Text => {
            for e in &entries {
                writeln!(out, "{:<8}{:<32}{}", e.severity.as_str(), e.code.as_str(), e.message)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
