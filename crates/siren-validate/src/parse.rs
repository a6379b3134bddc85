//! # Parser Adapter
//!
//! Turns raw input into a `serde_json::Value`, or into a [`ParseFailure`]
//! that keeps the parser's position diagnostics (line, column, and what
//! went wrong) so they can be shown to the user.
//!
//! Nesting is capped by `serde_json`'s recursion limit (128 levels).
//! Deeper documents fail with [`ParseCategory::Depth`] instead of
//! overflowing the stack during validation; callers must not treat that
//! category as malformed JSON.
//!
//! Number literals outside the `f64` range (`1e400`) are rejected by the
//! parser and surface as [`ParseCategory::Syntax`] failures.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Broad class of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseCategory {
    /// Input is not syntactically valid JSON.
    Syntax,
    /// Input is valid JSON but violates a parser limit.
    Data,
    /// Input ended before a complete value was read.
    Eof,
    /// The underlying reader failed.
    Io,
    /// Input nests deeper than the parser's recursion limit.
    Depth,
}

impl From<serde_json::error::Category> for ParseCategory {
    fn from(category: serde_json::error::Category) -> Self {
        match category {
            serde_json::error::Category::Syntax => Self::Syntax,
            serde_json::error::Category::Data => Self::Data,
            serde_json::error::Category::Eof => Self::Eof,
            serde_json::error::Category::Io => Self::Io,
        }
    }
}

/// Input could not be parsed as JSON.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{detail}")]
pub struct ParseFailure {
    /// 1-based line of the failure.
    pub line: usize,
    /// 1-based column of the failure (0 for empty input).
    pub column: usize,
    /// What kind of failure this is.
    pub category: ParseCategory,
    /// Parser diagnostic, e.g. `EOF while parsing a string at line 1 column 3`.
    pub detail: String,
}

impl From<serde_json::Error> for ParseFailure {
    fn from(err: serde_json::Error) -> Self {
        let detail = err.to_string();
        // serde_json classifies the recursion limit as a syntax error and
        // exposes no code for it; the message prefix is stable.
        let category = if detail.starts_with(RECURSION_LIMIT_PREFIX) {
            ParseCategory::Depth
        } else {
            err.classify().into()
        };
        Self {
            line: err.line(),
            column: err.column(),
            category,
            detail,
        }
    }
}

const RECURSION_LIMIT_PREFIX: &str = "recursion limit exceeded";

/// Parse raw bytes as a JSON document.
///
/// # Errors
///
/// Returns a [`ParseFailure`] carrying line/column diagnostics if the
/// input is not a single well-formed JSON value (invalid UTF-8 included).
pub fn parse_document(input: &[u8]) -> Result<Value, ParseFailure> {
    serde_json::from_slice(input).map_err(ParseFailure::from)
}
