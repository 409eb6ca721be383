//! CIM type to Rust type mapping.
//!
//! The table covers the closed set of CIM intrinsic types that WMI reports
//! in the `TYPE` attribute of a property. Anything outside the table is
//! resolved through [`UnknownTypePolicy`].

/// Rust type used for `object` and `reference` properties.
pub const OPAQUE_TYPE: &str = "Box<dyn std::any::Any>";

/// Rust type used for `datetime` properties.
pub const DATETIME_TYPE: &str = "chrono::DateTime<chrono::FixedOffset>";

/// Every CIM type identifier with a table entry.
pub const SOURCE_TYPES: [&str; 16] = [
    "boolean",
    "char16",
    "datetime",
    "object",
    "real32",
    "real64",
    "reference",
    "sint8",
    "sint16",
    "sint32",
    "sint64",
    "string",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
];

/// How identifiers missing from the table are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTypePolicy {
    /// Emit the source identifier unchanged.
    #[default]
    Passthrough,
}

impl UnknownTypePolicy {
    /// Resolves an identifier that has no table entry.
    #[must_use]
    pub fn resolve<'a>(self, source: &'a str) -> &'a str {
        match self {
            Self::Passthrough => source,
        }
    }
}

/// Read-only CIM to Rust type table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeMap {
    unknown: UnknownTypePolicy,
}

impl TypeMap {
    /// Creates a type map with pass-through for unknown identifiers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            unknown: UnknownTypePolicy::Passthrough,
        }
    }

    /// Returns the policy applied to unknown identifiers.
    #[must_use]
    pub const fn unknown_policy(&self) -> UnknownTypePolicy {
        self.unknown
    }

    /// Looks up the table entry for a CIM type identifier.
    #[must_use]
    pub fn lookup(&self, source: &str) -> Option<&'static str> {
        let target = match source {
            "boolean" => "bool",
            "char16" => "u16",
            "datetime" => DATETIME_TYPE,
            "object" | "reference" => OPAQUE_TYPE,
            "real32" => "f32",
            "real64" => "f64",
            "sint8" => "i8",
            "sint16" => "i16",
            "sint32" => "i32",
            "sint64" => "i64",
            "string" => "String",
            "uint8" => "u8",
            "uint16" => "u16",
            "uint32" => "u32",
            "uint64" => "u64",
            _ => return None,
        };
        Some(target)
    }

    /// Maps a CIM type identifier to a Rust type, applying the unknown policy
    /// on a table miss.
    #[must_use]
    pub fn map<'a>(&self, source: &'a str) -> &'a str {
        match self.lookup(source) {
            Some(target) => target,
            None => {
                tracing::debug!(source, policy = ?self.unknown, "unmapped CIM type");
                self.unknown.resolve(source)
            }
        }
    }
}

/// Maps a CIM type identifier with the default table.
#[must_use]
pub fn map_type(source: &str) -> &str {
    TypeMap::new().map(source)
}
