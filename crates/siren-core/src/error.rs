//! # Error Types
//!
//! Operational errors for the Siren workspace. These are distinct from
//! validation findings: a malformed document is a [`crate::Finding`], while
//! an unreadable file or a bad message override is a [`SirenError`].

use thiserror::Error;

/// Top-level operational error.
#[derive(Error, Debug)]
pub enum SirenError {
    /// A catalog override named a key that does not exist.
    #[error("unknown message key: {0:?}")]
    UnknownMessageKey(String),

    /// Validator configuration is invalid.
    #[error("configuration error: {reason}")]
    Config {
        /// Reason the configuration was rejected.
        reason: String,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
