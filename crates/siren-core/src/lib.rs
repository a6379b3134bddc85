//! # siren-core: Foundational Types for the Siren Validator
//!
//! Shared vocabulary for every crate in the workspace. The validation
//! engine produces these types; the CLI renders them. This crate depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One finding type, two severities.** A [`Finding`] carries a
//!    [`Severity`] tag instead of splitting errors and warnings into
//!    separate types. Callers filter with [`Findings::errors`] and
//!    [`Findings::warnings`].
//!
//! 2. **Immutable paths.** [`DocPath::key`] and [`DocPath::index`] return
//!    a new path; a path handed to a recursive call is never mutated
//!    behind the caller's back.
//!
//! 3. **Messages are data.** Every condition has a stable [`MessageKey`].
//!    Human-readable text lives in a [`MessageCatalog`] that can be
//!    overridden without touching validation logic.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `siren-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod catalog;
pub mod error;
pub mod finding;
pub mod path;

pub use catalog::{MessageCatalog, MessageKey};
pub use error::SirenError;
pub use finding::{Finding, Findings, Severity};
pub use path::{DocPath, PathSegment};
