//! # typeforge core
//!
//! Target vocabulary for schema translation.
//!
//! This crate provides:
//! - The type-expression AST (keywords, literals, objects, unions, references, ...)
//! - [`TypeFactory`] construction helpers handed to override hooks
//! - [`IdentifierContext`], the root-relative path of the node being translated
//! - A TypeScript [`Printer`] for type expressions and declarations

pub mod ast;
pub mod context;
pub mod factory;
pub mod naming;
pub mod printer;

pub use ast::{
    Declaration, EnumDeclaration, EnumMember, FunctionParam, FunctionType, IndexSignature,
    Keyword, LiteralType, ObjectType, PropertySignature, TupleMember, TypeAlias, TypeExpr,
};
pub use context::{Accessor, IdentifierContext};
pub use factory::TypeFactory;
pub use printer::{Printer, print_declaration, print_type};
