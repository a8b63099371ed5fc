//! Type-expression tree.
//!
//! These nodes describe a static type in TypeScript terms. They are produced by the
//! translator and consumed by the [`printer`](crate::printer); nothing in this module
//! knows about schemas.

use std::fmt;

/// Built-in keyword types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `bigint`
    BigInt,
    /// `symbol`
    Symbol,
    /// `object`
    Object,
    /// `null`
    Null,
    /// `undefined`
    Undefined,
    /// `any`
    Any,
    /// `unknown`
    Unknown,
    /// `never`
    Never,
    /// `void`
    Void,
}

impl Keyword {
    /// Returns the source spelling of the keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::BigInt => "bigint",
            Self::Symbol => "symbol",
            Self::Object => "object",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Any => "any",
            Self::Unknown => "unknown",
            Self::Never => "never",
            Self::Void => "void",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value carried by a literal type or an enum member.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralType {
    /// String literal, e.g. `"admin"`.
    String(String),
    /// Numeric literal, e.g. `42`.
    Number(f64),
    /// Boolean literal.
    Boolean(bool),
    /// Bigint literal, e.g. `10n`.
    BigInt(i128),
}

impl From<&str> for LiteralType {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for LiteralType {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for LiteralType {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for LiteralType {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for LiteralType {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// A static type expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    /// Keyword type such as `string` or `unknown`.
    Keyword(Keyword),
    /// Literal type.
    Literal(LiteralType),
    /// Object type literal `{ a: T; b?: U }`.
    Object(ObjectType),
    /// Array type `T[]`.
    Array(Box<TypeExpr>),
    /// Tuple type `[A, B, ...C[]]`.
    Tuple(Vec<TupleMember>),
    /// Union type `A | B`.
    Union(Vec<TypeExpr>),
    /// Intersection type `A & B`.
    Intersection(Vec<TypeExpr>),
    /// Function type `(a: A) => R`.
    Function(FunctionType),
    /// Reference to a named type, optionally generic: `Map<K, V>`.
    Reference {
        /// Referenced identifier.
        name: String,
        /// Type arguments, empty for a plain reference.
        type_args: Vec<TypeExpr>,
    },
    /// Indexed access `T["key"]`.
    IndexedAccess {
        /// Object being indexed.
        object: Box<TypeExpr>,
        /// Index type.
        index: Box<TypeExpr>,
    },
}

impl TypeExpr {
    /// Returns true if this is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Self::Keyword(k) if *k == keyword)
    }

    /// Returns true if this is a plain reference to `name`.
    #[must_use]
    pub fn is_reference_to(&self, name: &str) -> bool {
        matches!(self, Self::Reference { name: n, type_args } if n == name && type_args.is_empty())
    }

    /// Returns the union members, or `None` if this is not a union.
    #[must_use]
    pub fn as_union(&self) -> Option<&[TypeExpr]> {
        match self {
            Self::Union(members) => Some(members),
            _ => None,
        }
    }

    /// Returns the object type, or `None` if this is not an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the array element type, or `None` if this is not an array.
    #[must_use]
    pub fn as_array_element(&self) -> Option<&TypeExpr> {
        match self {
            Self::Array(element) => Some(element),
            _ => None,
        }
    }
}

/// Object type literal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectType {
    /// Properties in declaration order.
    pub properties: Vec<PropertySignature>,
    /// Index signature for extra keys, if any.
    pub index: Option<IndexSignature>,
}

impl ObjectType {
    /// Looks up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertySignature> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Returns property names in declaration order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.name.as_str())
    }
}

/// A single property of an object type.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySignature {
    /// Property name (quoted on output when it is not a valid identifier).
    pub name: String,
    /// Whether the property is marked `?`.
    pub optional: bool,
    /// Property type.
    pub ty: TypeExpr,
    /// Documentation comment.
    pub doc: Option<String>,
}

/// `[key: string]: T` index signature.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSignature {
    /// Name of the key parameter.
    pub key_name: String,
    /// Key type.
    pub key: Box<TypeExpr>,
    /// Value type.
    pub value: Box<TypeExpr>,
}

/// One positional member of a tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct TupleMember {
    /// Member type. For a rest member this is the element type.
    pub ty: TypeExpr,
    /// Whether this is a trailing `...T[]` member.
    pub rest: bool,
}

/// Function type.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionType {
    /// Parameters in order.
    pub params: Vec<FunctionParam>,
    /// Return type.
    pub returns: Box<TypeExpr>,
}

/// Function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionParam {
    /// Parameter name.
    pub name: String,
    /// Parameter type. For a rest parameter this is the element type.
    pub ty: TypeExpr,
    /// Whether this is a `...rest` parameter.
    pub rest: bool,
}

/// Named type alias `type Name = T;`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAlias {
    /// Alias name.
    pub name: String,
    /// Aliased type.
    pub ty: TypeExpr,
    /// Documentation comment.
    pub doc: Option<String>,
}

/// Enum declaration `enum Name { A = "a" }`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDeclaration {
    /// Enum name.
    pub name: String,
    /// Members in declaration order.
    pub members: Vec<EnumMember>,
}

/// Enum member.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    /// Member name.
    pub name: String,
    /// Member initializer.
    pub value: LiteralType,
}

/// Top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// `type` alias.
    Alias(TypeAlias),
    /// `enum` declaration.
    Enum(EnumDeclaration),
}

impl Declaration {
    /// Returns the declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Alias(a) => &a.name,
            Self::Enum(e) => &e.name,
        }
    }
}

impl From<TypeAlias> for Declaration {
    fn from(alias: TypeAlias) -> Self {
        Self::Alias(alias)
    }
}

impl From<EnumDeclaration> for Declaration {
    fn from(decl: EnumDeclaration) -> Self {
        Self::Enum(decl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_spelling() {
        assert_eq!(Keyword::BigInt.as_str(), "bigint");
        assert_eq!(Keyword::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_literal_conversions() {
        assert_eq!(LiteralType::from("a"), LiteralType::String("a".to_string()));
        assert_eq!(LiteralType::from(3), LiteralType::Number(3.0));
        assert_eq!(LiteralType::from(true), LiteralType::Boolean(true));
    }

    #[test]
    fn test_is_reference_to() {
        let plain = TypeExpr::Reference {
            name: "User".to_string(),
            type_args: Vec::new(),
        };
        let generic = TypeExpr::Reference {
            name: "User".to_string(),
            type_args: vec![TypeExpr::Keyword(Keyword::String)],
        };
        assert!(plain.is_reference_to("User"));
        assert!(!generic.is_reference_to("User"));
        assert!(!plain.is_reference_to("Item"));
    }

    #[test]
    fn test_object_property_lookup() {
        let object = ObjectType {
            properties: vec![PropertySignature {
                name: "id".to_string(),
                optional: false,
                ty: TypeExpr::Keyword(Keyword::Number),
                doc: None,
            }],
            index: None,
        };
        assert!(object.property("id").is_some());
        assert!(object.property("name").is_none());
        assert_eq!(object.property_names().collect::<Vec<_>>(), vec!["id"]);
    }

    #[test]
    fn test_declaration_name() {
        let decl: Declaration = EnumDeclaration {
            name: "Color".to_string(),
            members: Vec::new(),
        }
        .into();
        assert_eq!(decl.name(), "Color");
    }
}
