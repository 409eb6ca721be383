//! Schema fetching.
//!
//! A [`SchemaSource`] turns a class name into a [`ClassSchema`]. The
//! production source runs `wmic class <name> get /format:RAWXML` once per
//! class and parses whatever the command printed.

use crate::error::Error;
use std::path::{Path, PathBuf};
use std::process::Command;
use wmigen_schema::{ClassSchema, parse_class_bytes};

/// Provider of class schemas.
pub trait SchemaSource {
    /// Fetches the schema of one class.
    ///
    /// # Errors
    /// Returns `Error::Query` if the schema cannot be obtained and
    /// `Error::Parse` if it cannot be decoded.
    fn fetch(&mut self, class_name: &str) -> Result<ClassSchema, Error>;
}

/// Schema source backed by the `wmic` command line tool.
#[derive(Debug, Clone)]
pub struct WmicSource {
    program: PathBuf,
}

impl WmicSource {
    /// Creates a source running the given program.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program run for each query.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments passed to the program for one class.
    #[must_use]
    pub fn query_args(class_name: &str) -> [&str; 4] {
        ["class", class_name, "get", "/format:RAWXML"]
    }

    /// Runs the query and returns stdout followed by stderr.
    fn run_query(&self, class_name: &str) -> Result<Vec<u8>, Error> {
        let output = Command::new(&self.program)
            .args(Self::query_args(class_name))
            .output()
            .map_err(|e| {
                Error::query(
                    class_name,
                    format!("cannot run '{}': {}", self.program.display(), e),
                )
            })?;

        let mut payload = output.stdout;
        payload.extend_from_slice(&output.stderr);

        if !output.status.success() {
            let text = String::from_utf8_lossy(&payload);
            let detail = text
                .lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .unwrap_or("no output");
            return Err(Error::query(
                class_name,
                format!(
                    "'{}' exited with {}: {}",
                    self.program.display(),
                    output.status,
                    detail
                ),
            ));
        }

        Ok(payload)
    }
}

impl Default for WmicSource {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_QUERY_PROGRAM)
    }
}

impl SchemaSource for WmicSource {
    fn fetch(&mut self, class_name: &str) -> Result<ClassSchema, Error> {
        tracing::debug!(
            class = class_name,
            program = %self.program.display(),
            "querying class schema"
        );
        let payload = self.run_query(class_name)?;
        parse_class_bytes(&payload).map_err(|source| Error::Parse {
            class: class_name.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_args() {
        assert_eq!(
            WmicSource::query_args("Win32_Process"),
            ["class", "Win32_Process", "get", "/format:RAWXML"]
        );
    }

    #[test]
    fn test_default_program() {
        assert_eq!(WmicSource::default().program(), Path::new("wmic"));
    }

    #[test]
    fn test_missing_program_is_query_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut source = WmicSource::new(dir.path().join("no-such-wmic"));

        let err = source.fetch("Win32_Example").unwrap_err();
        match err {
            Error::Query { class, reason } => {
                assert_eq!(class, "Win32_Example");
                assert!(reason.contains("cannot run"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_query_error() {
        let mut source = WmicSource::new("false");
        let err = source.fetch("Win32_Example").unwrap_err();
        assert!(matches!(err, Error::Query { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_xml_output_is_parse_error() {
        // echo exits zero and prints its arguments, which is not a class document
        let mut source = WmicSource::new("echo");
        let err = source.fetch("Win32_Example").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
