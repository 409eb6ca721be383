//! # wmigen
//!
//! Generates Rust struct declarations from WMI class schemas.
//!
//! For every requested class, the schema is fetched with
//! `wmic class <name> get /format:RAWXML`, turned into a `pub struct` with one
//! field per property, and the collected structs are written under a single
//! `pub mod` after a `syn` validity check and `prettyplease` formatting.
//!
//! ## Quick Start
//!
//! ```ignore
//! use wmigen::{GeneratorConfig, WmicSource, pipeline};
//!
//! let config = GeneratorConfig::new().package("wmi");
//! let mut source = WmicSource::new(config.query_program_path());
//! pipeline::run(&config, &mut source, &["Win32_Process".to_string()])?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Class schema model and RAWXML parsing
//! - [`codegen`] - Type table, struct generation and formatting
//! - [`fetch`] - Schema sources
//! - [`enumerate`] - Class listing through WMI
//! - [`pipeline`] - Generation run

pub mod config;
pub mod enumerate;
pub mod error;
pub mod fetch;
pub mod pipeline;

/// Class schema model and parsing.
pub mod schema {
    pub use wmigen_schema::*;
}

/// Declaration generation.
pub mod codegen {
    pub use wmigen_codegen::*;
}

pub use config::GeneratorConfig;
pub use error::{Error, PlatformError};
pub use fetch::{SchemaSource, WmicSource};
