//! # Findings
//!
//! The output of a validation pass. A [`Finding`] records one problem:
//! what went wrong (a [`MessageKey`] and its resolved text), where it
//! happened (a [`DocPath`]), and the offending value.
//!
//! Errors and warnings share one shape. [`Severity`] tells them apart:
//!
//! - **Error**: the document breaks a structural MUST rule (wrong JSON
//!   type, missing required attribute).
//! - **Warning**: the document is legal but breaks an advisory SHOULD
//!   convention (missing self link, unrecognized field type).

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::MessageKey;
use crate::path::DocPath;

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Structural violation.
    Error,
    /// Advisory violation.
    Warning,
}

impl Severity {
    /// Returns the lowercase identifier used in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation finding with structured context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Error or warning.
    pub severity: Severity,
    /// Stable condition identifier.
    pub code: MessageKey,
    /// Human-readable description, resolved from the message catalog.
    pub message: String,
    /// Location of the offending node.
    pub path: DocPath,
    /// The offending value. `None` when the relevant attribute is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl Finding {
    /// True if this finding has [`Severity::Error`].
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// True if this finding has [`Severity::Warning`].
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the first line of multi-line messages (parser diagnostics
        // are appended after a newline).
        let headline = self.message.lines().next().unwrap_or("");
        if self.path.is_root() {
            write!(f, "{} [{}] (root): {headline}", self.severity, self.code)
        } else {
            write!(f, "{} [{}] {}: {headline}", self.severity, self.code, self.path)
        }
    }
}

/// Ordered collection of findings from one validation pass.
///
/// Order is discovery order: the depth-first traversal order of the
/// document. An empty collection means the document is fully valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Findings {
    findings: Vec<Finding>,
}

impl Findings {
    /// Returns the number of findings.
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Returns true if there are no findings.
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Returns a slice of all findings.
    pub fn as_slice(&self) -> &[Finding] {
        &self.findings
    }

    /// Iterates all findings in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Finding> {
        self.findings.iter()
    }

    /// Iterates error-severity findings.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_error())
    }

    /// Iterates warning-severity findings.
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_warning())
    }

    /// Returns true if any finding is an error.
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(Finding::is_error)
    }

    /// Returns the number of error-severity findings.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Returns the number of warning-severity findings.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Finding> {
        self.findings
    }
}

impl From<Vec<Finding>> for Findings {
    fn from(findings: Vec<Finding>) -> Self {
        Self { findings }
    }
}

impl IntoIterator for Findings {
    type Item = Finding;
    type IntoIter = std::vec::IntoIter<Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.into_iter()
    }
}

impl<'a> IntoIterator for &'a Findings {
    type Item = &'a Finding;
    type IntoIter = std::slice::Iter<'a, Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.iter()
    }
}

impl fmt::Display for Findings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, finding) in self.findings.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {finding}")?;
        }
        Ok(())
    }
}
