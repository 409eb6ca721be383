//! Output assembly.
//!
//! A [`Generator`] accumulates one declaration block per class into an
//! [`OutputBuffer`] and, once every class has been added, runs the formatting
//! pass over the whole buffer.

use crate::error::CodegenError;
use crate::output::format_source;
use crate::rust::StructGenerator;
use crate::type_map::TypeMap;
use wmigen_schema::ClassSchema;

/// Namespace used when none is configured.
pub const DEFAULT_PACKAGE: &str = "wmi";

/// Ordered declaration blocks under a single namespace.
#[derive(Debug, Clone)]
pub struct OutputBuffer {
    package: String,
    blocks: Vec<String>,
}

impl OutputBuffer {
    /// Creates an empty buffer for the given namespace.
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            blocks: Vec::new(),
        }
    }

    /// Namespace identifier.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Appends a declaration block.
    pub fn push_block(&mut self, block: String) {
        self.blocks.push(block);
    }

    /// Number of blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if no block has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Renders the namespace line, every block in insertion order, and the
    /// namespace terminator.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = format!("pub mod {} {{\n", self.package);
        for block in &self.blocks {
            output.push_str(block);
        }
        output.push_str("}\n");
        output
    }
}

/// Main code generator.
pub struct Generator {
    type_map: TypeMap,
    buffer: OutputBuffer,
}

impl Generator {
    /// Creates a generator emitting into the given namespace.
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            type_map: TypeMap::new(),
            buffer: OutputBuffer::new(package),
        }
    }

    /// Generates the declaration block for a class and appends it.
    pub fn add_class(&mut self, schema: &ClassSchema) {
        let block = StructGenerator::new(&self.type_map).generate(schema);
        tracing::debug!(
            class = schema.class_name(),
            fields = schema.properties().len(),
            "generated declaration block"
        );
        self.buffer.push_block(block);
    }

    /// Returns the unformatted buffer.
    #[must_use]
    pub fn buffer(&self) -> &OutputBuffer {
        &self.buffer
    }

    /// Formats the assembled buffer.
    ///
    /// # Errors
    /// Returns `CodegenError::Syntax` if the assembled source is not valid Rust.
    pub fn finish(self) -> Result<String, CodegenError> {
        format_source(&self.buffer.render())
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wmigen_schema::Property;

    fn class(name: &str) -> ClassSchema {
        ClassSchema::new(name, vec![Property::new("Name", "string")])
    }

    #[test]
    fn test_single_namespace_line() {
        let mut generator = Generator::default();
        generator.add_class(&class("A"));
        generator.add_class(&class("B"));

        let rendered = generator.buffer().render();
        assert!(rendered.starts_with("pub mod wmi {\n"));
        assert_eq!(rendered.matches("pub mod ").count(), 1);
        assert_eq!(generator.buffer().len(), 2);
    }

    #[test]
    fn test_blocks_in_insertion_order() {
        let mut generator = Generator::new("bindings");
        generator.add_class(&class("A"));
        generator.add_class(&class("B"));

        let formatted = generator.finish().expect("Failed to format");
        let a = formatted.find("pub struct A").expect("A missing");
        let b = formatted.find("pub struct B").expect("B missing");
        assert!(a < b);
        assert!(formatted.contains("pub mod bindings {"));
    }

    #[test]
    fn test_empty_buffer_formats() {
        let generator = Generator::default();
        assert!(generator.buffer().is_empty());

        let formatted = generator.finish().expect("Failed to format");
        assert!(formatted.contains("pub mod wmi {}"));
    }

    #[test]
    fn test_every_mapped_type_is_valid() {
        let properties = crate::type_map::SOURCE_TYPES
            .iter()
            .enumerate()
            .flat_map(|(i, source)| {
                [
                    Property::new(format!("Scalar{i}"), *source),
                    Property::array(format!("Array{i}"), *source),
                ]
            })
            .collect();

        let mut generator = Generator::default();
        generator.add_class(&ClassSchema::new("Win32_AllTypes", properties));
        generator.add_class(&ClassSchema::new("Win32_Empty", Vec::new()));

        let formatted = generator.finish().expect("Failed to format");
        assert!(formatted.contains("pub Scalar15: u64,"));
        assert!(formatted.contains("pub Array0: Vec<bool>,"));
        assert!(formatted.contains("pub struct Win32_Empty {}"));
    }

    #[test]
    fn test_formatted_blocks_separated_by_blank_line() {
        let mut generator = Generator::default();
        generator.add_class(&ClassSchema::new(
            "Win32_Example",
            vec![
                Property::new("Name", "string"),
                Property::new("When", "datetime"),
            ],
        ));
        generator.add_class(&ClassSchema::new("B", Vec::new()));

        let formatted = generator.finish().expect("Failed to format");
        assert!(formatted.contains(
            "        pub When: chrono::DateTime<chrono::FixedOffset>,\n    }\n\n    /// B is"
        ));
        assert!(formatted.ends_with("}\n\n}\n"));
    }

    #[test]
    fn test_invalid_package_rejected() {
        let mut generator = Generator::new("not-an-ident");
        generator.add_class(&class("A"));
        assert!(matches!(generator.finish(), Err(CodegenError::Syntax { .. })));
    }

    #[test]
    fn test_invalid_property_name_rejected() {
        let mut generator = Generator::default();
        generator.add_class(&ClassSchema::new(
            "Win32_Bad",
            vec![Property::new("Has Space", "string")],
        ));
        assert!(generator.finish().is_err());
    }
}
