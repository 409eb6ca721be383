//! Run configuration.

use std::path::{Path, PathBuf};

pub use wmigen_codegen::DEFAULT_PACKAGE;

/// Program answering class schema queries.
pub const DEFAULT_QUERY_PROGRAM: &str = "wmic";

/// Environment variable overriding [`DEFAULT_QUERY_PROGRAM`].
pub const QUERY_PROGRAM_ENV: &str = "WMIGEN_WMIC";

/// Builder for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    package: String,
    output: Option<PathBuf>,
    query_program: PathBuf,
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            output: None,
            query_program: PathBuf::from(DEFAULT_QUERY_PROGRAM),
        }
    }

    /// Sets the namespace identifier.
    #[must_use]
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Sets the output file. Standard output is used when unset.
    #[must_use]
    pub fn output(mut self, path: Option<PathBuf>) -> Self {
        self.output = path;
        self
    }

    /// Sets the program run for schema queries.
    #[must_use]
    pub fn query_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.query_program = program.into();
        self
    }

    /// Namespace identifier.
    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package
    }

    /// Output file, if any.
    #[must_use]
    pub fn output_path(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Schema query program.
    #[must_use]
    pub fn query_program_path(&self) -> &Path {
        &self.query_program
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
