//! Generation run.
//!
//! Classes are fetched and rendered one at a time in argument order. The
//! formatted result is only written once every class has succeeded, so a
//! failed run leaves no output behind.

use crate::config::GeneratorConfig;
use crate::error::Error;
use crate::fetch::SchemaSource;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use wmigen_codegen::Generator;

/// Fetches every class and returns the formatted declarations.
///
/// # Errors
/// Returns the first fetch, parse or formatting error.
pub fn generate<S: SchemaSource + ?Sized>(
    source: &mut S,
    classes: &[String],
    package: &str,
) -> Result<String, Error> {
    let mut generator = Generator::new(package);

    for class in classes {
        let schema = source.fetch(class)?;
        generator.add_class(&schema);
    }

    let code = generator.finish()?;
    tracing::info!(classes = classes.len(), package, "generated declarations");
    Ok(code)
}

/// Writes formatted output to a file, or to standard output when `path` is
/// `None`. An existing file is truncated.
///
/// # Errors
/// Returns `Error::Output` if the destination cannot be created or written.
pub fn write_output(path: Option<&Path>, code: &str) -> Result<(), Error> {
    match path {
        Some(path) => {
            let mut file = File::create(path).map_err(|e| Error::output(path, e))?;
            file.write_all(code.as_bytes())
                .map_err(|e| Error::output(path, e))?;
            tracing::debug!(path = %path.display(), bytes = code.len(), "wrote output file");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(code.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| Error::output("-", e))?;
        }
    }
    Ok(())
}

/// Runs generation mode end to end.
///
/// # Errors
/// Returns the first error of any step; nothing is written in that case.
pub fn run<S: SchemaSource + ?Sized>(
    config: &GeneratorConfig,
    source: &mut S,
    classes: &[String],
) -> Result<(), Error> {
    let code = generate(source, classes, config.package_name())?;
    write_output(config.output_path(), &code)
}
