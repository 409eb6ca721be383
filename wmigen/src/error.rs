//! Error types for a generation run.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for a generation run. Every variant is fatal.
#[derive(Debug, Error)]
pub enum Error {
    /// The schema query could not be run or reported failure.
    #[error("query for class '{class}' failed: {reason}")]
    Query {
        /// Class being queried.
        class: String,
        /// What went wrong.
        reason: String,
    },

    /// The schema document could not be decoded.
    #[error("cannot parse schema of class '{class}': {source}")]
    Parse {
        /// Class being parsed.
        class: String,
        /// Underlying parse error.
        #[source]
        source: wmigen_schema::ParseError,
    },

    /// The assembled output is not valid Rust.
    #[error("formatting failed: {0}")]
    Format(#[from] wmigen_codegen::CodegenError),

    /// The output destination could not be created or written.
    #[error("cannot write output to '{}': {source}", path.display())]
    Output {
        /// Destination path, `-` for standard output.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates a query error.
    pub fn query(class: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Query {
            class: class.into(),
            reason: reason.into(),
        }
    }

    /// Creates an output error.
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }
}

/// Error raised while talking to the platform automation interface.
///
/// Never surfaces from enumeration mode, which treats it as an empty listing.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The host has no WMI service.
    #[error("WMI is not available on this platform")]
    Unsupported,

    /// WMI call failed.
    #[cfg(windows)]
    #[error("WMI error: {0}")]
    Wmi(#[from] wmi::WMIError),
}
