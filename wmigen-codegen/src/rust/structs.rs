//! Struct declaration generation.

use crate::type_map::TypeMap;
use wmigen_schema::{ClassSchema, Property};

/// Generator for one struct declaration per class schema.
pub struct StructGenerator<'a> {
    type_map: &'a TypeMap,
}

impl<'a> StructGenerator<'a> {
    /// Creates a new struct generator.
    #[must_use]
    pub fn new(type_map: &'a TypeMap) -> Self {
        Self { type_map }
    }

    /// Generates the declaration block for a class.
    ///
    /// The block is a doc line naming the class, the struct itself with one
    /// public field per property in schema order, and a trailing blank line.
    #[must_use]
    pub fn generate(&self, schema: &ClassSchema) -> String {
        let mut output = String::new();
        let name = schema.class_name();

        output.push_str(&format!(
            "/// {} is a struct for the WMI class of the same name.\n",
            name
        ));
        output.push_str("#[allow(non_camel_case_types, non_snake_case)]\n");
        output.push_str(&format!("pub struct {} {{\n", name));

        for property in schema.properties() {
            output.push_str(&format!(
                "    pub {}: {},\n",
                property.name(),
                self.field_type(property)
            ));
        }

        output.push_str("}\n\n");

        output
    }

    /// Returns the Rust type of a property's field.
    #[must_use]
    pub fn field_type(&self, property: &Property) -> String {
        let mapped = self.type_map.map(property.source_type());
        if property.is_array() {
            format!("Vec<{}>", mapped)
        } else {
            mapped.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::type_map::OPAQUE_TYPE;

    fn example_schema() -> ClassSchema {
        ClassSchema::new(
            "Win32_Example",
            vec![
                Property::new("Name", "string"),
                Property::new("Size", "uint64"),
                Property::new("Flag", "boolean"),
            ],
        )
    }

    #[test]
    fn test_generate_example_block() {
        let map = TypeMap::new();
        let block = StructGenerator::new(&map).generate(&example_schema());

        let expected = "\
/// Win32_Example is a struct for the WMI class of the same name.
#[allow(non_camel_case_types, non_snake_case)]
pub struct Win32_Example {
    pub Name: String,
    pub Size: u64,
    pub Flag: bool,
}

";
        assert_eq!(block, expected);
    }

    #[test]
    fn test_fields_follow_schema_order() {
        let schema = ClassSchema::new(
            "Win32_Order",
            vec![
                Property::new("Zeta", "uint8"),
                Property::new("Alpha", "sint32"),
                Property::new("Mid", "real64"),
            ],
        );
        let map = TypeMap::new();
        let block = StructGenerator::new(&map).generate(&schema);

        let fields: Vec<&str> = block
            .lines()
            .filter(|line| line.trim_start().starts_with("pub ") && line.ends_with(','))
            .map(str::trim)
            .collect();
        assert_eq!(fields, ["pub Zeta: u8,", "pub Alpha: i32,", "pub Mid: f64,"]);
    }

    #[test]
    fn test_empty_schema_block() {
        let map = TypeMap::new();
        let schema = ClassSchema::new("Win32_Empty", Vec::new());
        let block = StructGenerator::new(&map).generate(&schema);

        assert!(block.contains("pub struct Win32_Empty {\n}\n"));
        assert!(block.ends_with("}\n\n"));
    }

    #[test]
    fn test_array_and_opaque_fields() {
        let map = TypeMap::new();
        let generator = StructGenerator::new(&map);

        assert_eq!(
            generator.field_type(&Property::array("Capabilities", "uint16")),
            "Vec<u16>"
        );
        assert_eq!(
            generator.field_type(&Property::new("Owner", "reference")),
            OPAQUE_TYPE
        );
    }

    #[test]
    fn test_unknown_type_passes_through() {
        let map = TypeMap::new();
        let generator = StructGenerator::new(&map);
        assert_eq!(
            generator.field_type(&Property::new("Extra", "Win32_Custom")),
            "Win32_Custom"
        );
    }
}
