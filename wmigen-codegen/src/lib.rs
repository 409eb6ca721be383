//! # wmigen Codegen
//!
//! Rust declaration generation from WMI class schemas.
//!
//! This crate provides:
//! - The CIM to Rust type table ([`type_map`])
//! - One `pub struct` per class schema ([`rust::StructGenerator`])
//! - Output assembly under a single `pub mod` namespace ([`Generator`])
//! - The `syn` + `prettyplease` formatting pass ([`output`])
//! - [`generate_from_xml`] for generating straight from saved RAWXML documents

pub mod error;
pub mod generator;
pub mod output;
pub mod rust;
pub mod type_map;

pub use error::CodegenError;
pub use generator::{DEFAULT_PACKAGE, Generator, OutputBuffer};
pub use type_map::{TypeMap, UnknownTypePolicy, map_type};

use wmigen_schema::ClassSchema;

/// Generates the declaration block for one class with the default type map.
#[must_use]
pub fn generate(schema: &ClassSchema) -> String {
    rust::StructGenerator::new(&TypeMap::new()).generate(schema)
}

/// Generates formatted Rust code from RAWXML class documents.
///
/// Library entry point for callers that already hold the documents, such as
/// captured `wmic` output. The `wmigen` binary fetches one class at a time
/// and drives [`Generator`] directly.
///
/// # Arguments
/// * `package` - Namespace identifier
/// * `documents` - RAWXML documents, one per class, in output order
///
/// # Returns
/// Formatted Rust source.
///
/// # Errors
/// Returns `CodegenError` if parsing or formatting fails.
pub fn generate_from_xml<'a>(
    package: &str,
    documents: impl IntoIterator<Item = &'a str>,
) -> Result<String, CodegenError> {
    let mut generator = Generator::new(package);
    for xml in documents {
        let schema = wmigen_schema::parse_class(xml)?;
        generator.add_class(&schema);
    }
    generator.finish()
}
