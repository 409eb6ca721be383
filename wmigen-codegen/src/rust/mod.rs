//! Rust code generation modules.

pub mod structs;

pub use structs::StructGenerator;
