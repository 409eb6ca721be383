//! Error types for schema document parsing.

use thiserror::Error;

/// Error type for schema parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// The document does not have the expected shape.
    #[error("invalid schema document: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// The payload could not be decoded as text.
    #[error("undecodable schema document: {message}")]
    Encoding {
        /// Error message.
        message: String,
    },

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attr_message() {
        let err = ParseError::missing_attr("PROPERTY", "TYPE");
        assert_eq!(
            err.to_string(),
            "missing required attribute 'TYPE' on element 'PROPERTY'"
        );
    }

    #[test]
    fn test_structure_message() {
        let err = ParseError::structure("no CLASS record");
        assert_eq!(err.to_string(), "invalid schema document: no CLASS record");
    }
}
