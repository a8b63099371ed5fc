//! # typeforge schema
//!
//! Input side of the translation: the validation-schema tree.
//!
//! This crate provides:
//! - [`Schema`] nodes with a fluent builder API
//! - [`OverrideHook`], the per-node escape hatch for custom translation
//! - A JSON schema-description loader

pub mod error;
pub mod hook;
pub mod parser;
pub mod types;

pub use error::ParseError;
pub use hook::OverrideHook;
pub use parser::{SchemaDocument, parse_document, parse_document_file, parse_schema};
pub use types::{
    FunctionDef, LazyDef, NativeEnumDef, ObjectDef, ObjectField, PrimitiveKind, Schema,
    SchemaKind, TupleDef,
};
