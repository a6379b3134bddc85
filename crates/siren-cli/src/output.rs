//! Rendering of findings for the terminal or for machines.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use siren_core::Findings;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON array of per-document reports.
    Json,
}

/// Validation outcome for one document.
#[derive(Debug, Serialize)]
pub struct Report {
    /// File path, or `<stdin>`.
    pub source: String,
    /// Whether the document passed under the active strictness.
    pub valid: bool,
    /// Every finding for the document.
    pub findings: Findings,
}

impl Report {
    /// Build a report; `strict` makes warnings count as failures.
    pub fn new(source: String, findings: Findings, strict: bool) -> Self {
        let valid = if strict {
            findings.is_empty()
        } else {
            !findings.has_errors()
        };
        Self {
            source,
            valid,
            findings,
        }
    }
}

/// Write reports in the requested format.
pub fn write_reports(out: &mut impl Write, reports: &[Report], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                write_text(out, report)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_text(out: &mut impl Write, report: &Report) -> Result<()> {
    let status = if report.valid { "OK" } else { "FAIL" };
    if report.findings.is_empty() {
        writeln!(out, "{status}: {}", report.source)?;
        return Ok(());
    }

    writeln!(
        out,
        "{status}: {} ({} error(s), {} warning(s))",
        report.source,
        report.findings.error_count(),
        report.findings.warning_count()
    )?;
    writeln!(out, "{}", report.findings)?;
    Ok(())
}
