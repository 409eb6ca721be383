//! # wmigen Schema
//!
//! WMI class schema model and RAWXML parser.
//!
//! This crate provides:
//! - The class schema model ([`ClassSchema`], [`Property`])
//! - A parser for the `wmic ... /format:RAWXML` document shape
//! - Payload decoding for UTF-8 and UTF-16 command output

pub mod error;
pub mod parser;
pub mod types;

pub use error::ParseError;
pub use parser::{decode_document, parse_class, parse_class_bytes};
pub use types::{ClassSchema, Property};
