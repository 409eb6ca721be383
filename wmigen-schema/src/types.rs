//! Class schema model.
//!
//! A [`ClassSchema`] is built once by the parser and then only read. Property
//! order is the order in which the document lists the properties.

/// A single class property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    source_type: String,
    is_array: bool,
}

impl Property {
    /// Creates a scalar property.
    #[must_use]
    pub fn new(name: impl Into<String>, source_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_type: source_type.into(),
            is_array: false,
        }
    }

    /// Creates an array property (`PROPERTY.ARRAY`).
    #[must_use]
    pub fn array(name: impl Into<String>, source_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_type: source_type.into(),
            is_array: true,
        }
    }

    /// Property name as declared by the class.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// CIM type identifier, e.g. `uint32` or `datetime`.
    #[must_use]
    pub fn source_type(&self) -> &str {
        &self.source_type
    }

    /// Returns true if the property holds an array of `source_type`.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        self.is_array
    }
}

/// Schema of one WMI class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSchema {
    class_name: String,
    properties: Vec<Property>,
}

impl ClassSchema {
    /// Creates a class schema from its name and ordered properties.
    #[must_use]
    pub fn new(class_name: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            class_name: class_name.into(),
            properties,
        }
    }

    /// Class name, e.g. `Win32_Process`.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Properties in document order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Returns true if the class declares no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_scalar() {
        let prop = Property::new("Name", "string");
        assert_eq!(prop.name(), "Name");
        assert_eq!(prop.source_type(), "string");
        assert!(!prop.is_array());
    }

    #[test]
    fn test_property_array() {
        let prop = Property::array("Capabilities", "uint16");
        assert!(prop.is_array());
        assert_eq!(prop.source_type(), "uint16");
    }

    #[test]
    fn test_class_schema_lookup() {
        let schema = ClassSchema::new(
            "Win32_Example",
            vec![Property::new("Name", "string"), Property::new("Size", "uint64")],
        );

        assert_eq!(schema.class_name(), "Win32_Example");
        assert_eq!(schema.properties().len(), 2);
        assert_eq!(schema.property("Size").map(Property::source_type), Some("uint64"));
        assert!(schema.property("Missing").is_none());
        assert!(!schema.is_empty());
    }

    #[test]
    fn test_class_schema_empty() {
        let schema = ClassSchema::new("Win32_Empty", Vec::new());
        assert!(schema.is_empty());
    }
}
