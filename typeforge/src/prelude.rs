//! Prelude module for convenient imports.
//!
//! ```
//! use typeforge::prelude::*;
//! ```

// Target types
pub use typeforge_core::{
    Accessor, Declaration, EnumDeclaration, IdentifierContext, Keyword, LiteralType, Printer,
    TypeExpr, TypeFactory, print_declaration, print_type,
};

// Schema model
pub use typeforge_schema::{OverrideHook, ParseError, Schema, SchemaKind, parse_document, parse_schema};

// Translation
pub use typeforge_codegen::{
    CodegenError, Generator, NativeEnumStrategy, ResolutionStore, TranslateConfig, Translation,
    generate, generate_from_file, generate_from_json, translate,
};
