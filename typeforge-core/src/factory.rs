//! Construction helpers for type expressions.
//!
//! Override hooks receive a [`TypeFactory`] so they can build their result without
//! spelling out the AST by hand.

use crate::ast::{
    EnumDeclaration, EnumMember, FunctionParam, FunctionType, IndexSignature, Keyword,
    LiteralType, ObjectType, PropertySignature, TupleMember, TypeAlias, TypeExpr,
};

/// Stateless factory for [`TypeExpr`] nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeFactory;

impl TypeFactory {
    /// Creates a new factory.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Keyword type.
    #[must_use]
    pub fn keyword(&self, keyword: Keyword) -> TypeExpr {
        TypeExpr::Keyword(keyword)
    }

    /// `string`
    #[must_use]
    pub fn string(&self) -> TypeExpr {
        self.keyword(Keyword::String)
    }

    /// `number`
    #[must_use]
    pub fn number(&self) -> TypeExpr {
        self.keyword(Keyword::Number)
    }

    /// `boolean`
    #[must_use]
    pub fn boolean(&self) -> TypeExpr {
        self.keyword(Keyword::Boolean)
    }

    /// `unknown`
    #[must_use]
    pub fn unknown(&self) -> TypeExpr {
        self.keyword(Keyword::Unknown)
    }

    /// Literal type.
    #[must_use]
    pub fn literal(&self, value: impl Into<LiteralType>) -> TypeExpr {
        TypeExpr::Literal(value.into())
    }

    /// String literal type.
    #[must_use]
    pub fn string_literal(&self, value: impl Into<String>) -> TypeExpr {
        TypeExpr::Literal(LiteralType::String(value.into()))
    }

    /// Plain reference to a named type.
    #[must_use]
    pub fn reference(&self, name: impl Into<String>) -> TypeExpr {
        TypeExpr::Reference {
            name: name.into(),
            type_args: Vec::new(),
        }
    }

    /// Generic reference, e.g. `Map<K, V>`.
    #[must_use]
    pub fn generic(&self, name: impl Into<String>, type_args: Vec<TypeExpr>) -> TypeExpr {
        TypeExpr::Reference {
            name: name.into(),
            type_args,
        }
    }

    /// `T[]`
    #[must_use]
    pub fn array(&self, element: TypeExpr) -> TypeExpr {
        TypeExpr::Array(Box::new(element))
    }

    /// Tuple with optional rest element type.
    #[must_use]
    pub fn tuple(&self, items: Vec<TypeExpr>, rest: Option<TypeExpr>) -> TypeExpr {
        let mut members: Vec<TupleMember> = items
            .into_iter()
            .map(|ty| TupleMember { ty, rest: false })
            .collect();
        if let Some(ty) = rest {
            members.push(TupleMember { ty, rest: true });
        }
        TypeExpr::Tuple(members)
    }

    /// Union of the given members.
    ///
    /// Nested unions are flattened. A single member is returned unwrapped.
    #[must_use]
    pub fn union(&self, members: Vec<TypeExpr>) -> TypeExpr {
        let mut flat = Vec::with_capacity(members.len());
        for member in members {
            match member {
                TypeExpr::Union(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        if flat.len() == 1 {
            return flat.remove(0);
        }
        TypeExpr::Union(flat)
    }

    /// Intersection of the given members, flattening nested intersections.
    #[must_use]
    pub fn intersection(&self, members: Vec<TypeExpr>) -> TypeExpr {
        let mut flat = Vec::with_capacity(members.len());
        for member in members {
            match member {
                TypeExpr::Intersection(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        if flat.len() == 1 {
            return flat.remove(0);
        }
        TypeExpr::Intersection(flat)
    }

    /// Property signature.
    #[must_use]
    pub fn property(&self, name: impl Into<String>, optional: bool, ty: TypeExpr) -> PropertySignature {
        PropertySignature {
            name: name.into(),
            optional,
            ty,
            doc: None,
        }
    }

    /// Object type literal.
    #[must_use]
    pub fn object(&self, properties: Vec<PropertySignature>) -> TypeExpr {
        TypeExpr::Object(ObjectType {
            properties,
            index: None,
        })
    }

    /// Object type literal with a `[key: string]: value` index signature.
    #[must_use]
    pub fn object_with_index(&self, properties: Vec<PropertySignature>, value: TypeExpr) -> TypeExpr {
        TypeExpr::Object(ObjectType {
            properties,
            index: Some(IndexSignature {
                key_name: "key".to_string(),
                key: Box::new(self.string()),
                value: Box::new(value),
            }),
        })
    }

    /// Indexed access `object[index]`.
    #[must_use]
    pub fn indexed_access(&self, object: TypeExpr, index: TypeExpr) -> TypeExpr {
        TypeExpr::IndexedAccess {
            object: Box::new(object),
            index: Box::new(index),
        }
    }

    /// Function parameter.
    #[must_use]
    pub fn param(&self, name: impl Into<String>, ty: TypeExpr) -> FunctionParam {
        FunctionParam {
            name: name.into(),
            ty,
            rest: false,
        }
    }

    /// Function type.
    #[must_use]
    pub fn function(&self, params: Vec<FunctionParam>, returns: TypeExpr) -> TypeExpr {
        TypeExpr::Function(FunctionType {
            params,
            returns: Box::new(returns),
        })
    }

    /// Type alias declaration.
    #[must_use]
    pub fn type_alias(&self, name: impl Into<String>, ty: TypeExpr) -> TypeAlias {
        TypeAlias {
            name: name.into(),
            ty,
            doc: None,
        }
    }

    /// Enum declaration from `(name, value)` pairs.
    #[must_use]
    pub fn enum_declaration<I, N>(&self, name: impl Into<String>, members: I) -> EnumDeclaration
    where
        I: IntoIterator<Item = (N, LiteralType)>,
        N: Into<String>,
    {
        EnumDeclaration {
            name: name.into(),
            members: members
                .into_iter()
                .map(|(name, value)| EnumMember {
                    name: name.into(),
                    value,
                })
                .collect(),
        }
    }
}
