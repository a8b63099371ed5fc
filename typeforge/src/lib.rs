//! # typeforge
//!
//! Translate runtime schema descriptions into TypeScript type declarations.
//!
//! A schema is a tree of validator nodes (objects, arrays, unions, enums, lazy
//! self-references, ...). typeforge walks that tree and produces the equivalent
//! static type, plus any enum declarations the type refers to.
//!
//! ## Quick Start
//!
//! ```
//! use typeforge::prelude::*;
//!
//! let schema = Schema::object([
//!     ("username", Schema::string()),
//!     ("friends", Schema::lazy_ref("User").array()),
//! ]);
//! let config = TranslateConfig::new().with_root_identifier("User");
//! let source = generate(&schema, &config)?;
//! assert!(source.contains("friends: User[];"));
//! # Ok::<(), CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Type-expression AST, factory, identifier context, printer
//! - [`schema`] - Schema node model and JSON loader
//! - [`codegen`] - Translator, resolution store, generator

pub mod prelude;

/// Type-expression AST and printer.
pub mod core {
    pub use typeforge_core::*;
}

/// Schema node model and JSON loader.
pub mod schema {
    pub use typeforge_schema::*;
}

/// Translation and source generation.
pub mod codegen {
    pub use typeforge_codegen::*;
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
