//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] wmigen_schema::ParseError),

    /// The assembled source is not valid Rust.
    #[error("generated source is not valid Rust at line {line}, column {column}: {message}")]
    Syntax {
        /// 1-based line of the offending token.
        line: usize,
        /// 0-based column of the offending token.
        column: usize,
        /// Parser message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a syntax error from a `syn` parse failure.
    pub fn syntax(err: &syn::Error) -> Self {
        let start: proc_macro2::LineColumn = err.span().start();
        Self::Syntax {
            line: start.line,
            column: start.column,
            message: err.to_string(),
        }
    }
}
