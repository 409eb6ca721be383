//! Formatting pass for assembled output.
//!
//! The assembled buffer is parsed as a complete Rust file with `syn`, which
//! is the only correctness check applied to generated text, and printed back
//! with `prettyplease`.

use crate::error::CodegenError;

/// Banner placed above formatted output.
pub const GENERATED_BANNER: &str =
    "// Code generated by wmigen from WMI class schemas. Do not edit manually.\n\n";

/// Validates generated source using syn.
///
/// # Errors
/// Returns `CodegenError::Syntax` if the source fails to parse.
pub fn validate_source(source: &str) -> Result<syn::File, CodegenError> {
    syn::parse_file(source).map_err(|e| CodegenError::syntax(&e))
}

/// Validates and formats generated source.
///
/// Items inside a module are printed one at a time so that each keeps the
/// blank separator line that follows it in the assembled buffer.
///
/// # Returns
/// The pretty-printed source, prefixed with [`GENERATED_BANNER`].
///
/// # Errors
/// Returns `CodegenError::Syntax` if the source is not valid Rust.
pub fn format_source(source: &str) -> Result<String, CodegenError> {
    let file = validate_source(source)?;
    let mut output = String::from(GENERATED_BANNER);
    if file.shebang.is_some() || !file.attrs.is_empty() {
        output.push_str(&prettyplease::unparse(&syn::File {
            shebang: file.shebang,
            attrs: file.attrs,
            items: Vec::new(),
        }));
    }
    for item in file.items {
        match item {
            syn::Item::Mod(module) if module.content.is_some() => {
                output.push_str(&format_module(module));
            }
            other => output.push_str(&unparse_items(vec![other])),
        }
    }
    Ok(output)
}

fn unparse_items(items: Vec<syn::Item>) -> String {
    prettyplease::unparse(&syn::File {
        shebang: None,
        attrs: Vec::new(),
        items,
    })
}

fn format_module(mut module: syn::ItemMod) -> String {
    let Some((brace, items)) = module.content.take() else {
        return unparse_items(vec![syn::Item::Mod(module)]);
    };

    module.content = Some((brace, Vec::new()));
    let shell = unparse_items(vec![syn::Item::Mod(module.clone())]);
    let header = match shell.trim_end().strip_suffix("{}") {
        Some(header) if !items.is_empty() => header.to_string(),
        // empty module, or inner attributes between the braces
        _ => {
            module.content = Some((brace, items));
            return unparse_items(vec![syn::Item::Mod(module)]);
        }
    };

    let mut output = format!("{}{{\n", header);
    for item in items {
        for line in unparse_items(vec![item]).lines() {
            if !line.is_empty() {
                output.push_str("    ");
                output.push_str(line);
            }
            output.push('\n');
        }
        output.push('\n');
    }
    output.push_str("}\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_reindents() {
        let source = "pub mod wmi {\npub struct A {\npub Name: String,\n}\n}\n";
        let formatted = format_source(source).expect("Failed to format");

        assert!(formatted.starts_with(GENERATED_BANNER));
        assert!(formatted.contains("    pub struct A {\n        pub Name: String,\n    }"));
    }

    #[test]
    fn test_doc_comments_survive() {
        let source = "/// A is documented.\npub struct A {}\n";
        let formatted = format_source(source).expect("Failed to format");
        assert!(formatted.contains("/// A is documented."));
    }

    #[test]
    fn test_invalid_source_reports_position() {
        let source = "pub mod wmi {\npub struct A {\n    pub Name String,\n}\n}\n";
        let err = format_source(source).unwrap_err();

        match err {
            CodegenError::Syntax { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_line_after_each_module_item() {
        let source = "pub mod wmi {\n/// A doc.\npub struct A {\npub Name: String,\n}\n\n\
                      /// B doc.\npub struct B {}\n\n}\n";
        let formatted = format_source(source).expect("Failed to format");

        let expected = "\
pub mod wmi {
    /// A doc.
    pub struct A {
        pub Name: String,
    }

    /// B doc.
    pub struct B {}

}
";
        assert_eq!(formatted, format!("{}{}", GENERATED_BANNER, expected));
    }

    #[test]
    fn test_empty_module_stays_on_one_line() {
        let formatted = format_source("pub mod wmi {\n}\n").expect("Failed to format");
        assert_eq!(formatted, format!("{}pub mod wmi {{}}\n", GENERATED_BANNER));
    }

    #[test]
    fn test_unbalanced_braces_rejected() {
        assert!(validate_source("pub mod wmi {\npub struct A {\n}\n").is_err());
    }
}
