//! Schema node definitions.
//!
//! A [`Schema`] is one node of a validation-schema tree: a [`SchemaKind`] with its
//! kind-specific payload, an optional description and an optional
//! [`OverrideHook`]. Nodes are built with the constructor functions and chaining
//! modifiers on [`Schema`], in the style of a runtime schema library:
//!
//! ```
//! use typeforge_schema::Schema;
//!
//! let user = Schema::object([
//!     ("username", Schema::string()),
//!     ("tags", Schema::string().array().optional()),
//! ]);
//! assert_eq!(user.kind_name(), "object");
//! ```

use crate::hook::OverrideHook;
use std::fmt;
use std::sync::Arc;
use typeforge_core::{IdentifierContext, LiteralType, TypeExpr, TypeFactory};

/// Primitive schema kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Any string.
    String,
    /// Any number.
    Number,
    /// `true` or `false`.
    Boolean,
    /// Arbitrary-precision integer.
    BigInt,
    /// Date instance.
    Date,
    /// Symbol.
    Symbol,
    /// `null` only.
    Null,
    /// `undefined` only.
    Undefined,
    /// Anything, unchecked.
    Any,
    /// Anything, checked.
    Unknown,
    /// Nothing.
    Never,
    /// No value.
    Void,
}

impl PrimitiveKind {
    /// Returns the schema-description name of this primitive.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::BigInt => "bigint",
            Self::Date => "date",
            Self::Symbol => "symbol",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Any => "any",
            Self::Unknown => "unknown",
            Self::Never => "never",
            Self::Void => "void",
        }
    }

    /// Parses a primitive from its schema-description name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "bigint" => Some(Self::BigInt),
            "date" => Some(Self::Date),
            "symbol" => Some(Self::Symbol),
            "null" => Some(Self::Null),
            "undefined" => Some(Self::Undefined),
            "any" => Some(Self::Any),
            "unknown" => Some(Self::Unknown),
            "never" => Some(Self::Never),
            "void" => Some(Self::Void),
            _ => None,
        }
    }
}

/// Object field.
#[derive(Debug, Clone)]
pub struct ObjectField {
    /// Field name.
    pub name: String,
    /// Field schema. Optional and nullable fields wrap their schema accordingly.
    pub schema: Schema,
}

/// Object schema payload.
#[derive(Debug, Clone, Default)]
pub struct ObjectDef {
    /// Fields in declaration order.
    pub fields: Vec<ObjectField>,
    /// Schema for keys not listed in `fields`.
    pub catchall: Option<Box<Schema>>,
}

/// Tuple schema payload.
#[derive(Debug, Clone, Default)]
pub struct TupleDef {
    /// Positional items.
    pub items: Vec<Schema>,
    /// Trailing rest element.
    pub rest: Option<Box<Schema>>,
}

/// Native enum payload.
///
/// The enum's own identifier is not part of the value; `name_hint` is whatever a
/// caller or loader could recover.
#[derive(Debug, Clone, Default)]
pub struct NativeEnumDef {
    /// Name to use when the enum is declared, if known.
    pub name_hint: Option<String>,
    /// `(member name, value)` pairs in declaration order.
    pub members: Vec<(String, LiteralType)>,
}

type LazyGetter = dyn Fn() -> Schema + Send + Sync;

/// Deferred schema.
#[derive(Clone, Default)]
pub struct LazyDef {
    getter: Option<Arc<LazyGetter>>,
    target: Option<String>,
}

impl LazyDef {
    /// Symbolic name of the deferred target, if known.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

impl fmt::Debug for LazyDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyDef")
            .field("target", &self.target)
            .field("has_getter", &self.getter.is_some())
            .finish()
    }
}

/// Function schema payload.
#[derive(Debug, Clone)]
pub struct FunctionDef {
    /// Parameter list; the rest element becomes a rest parameter.
    pub params: TupleDef,
    /// Return schema.
    pub returns: Box<Schema>,
}

/// Schema node kinds.
#[derive(Debug, Clone)]
pub enum SchemaKind {
    /// Primitive.
    Primitive(PrimitiveKind),
    /// Exact value.
    Literal(LiteralType),
    /// Object with named fields.
    Object(ObjectDef),
    /// Homogeneous array.
    Array(Box<Schema>),
    /// Fixed-position tuple.
    Tuple(TupleDef),
    /// Ordered union.
    Union(Vec<Schema>),
    /// Union of objects tagged by a discriminator field.
    DiscriminatedUnion {
        /// Discriminator field name.
        discriminator: String,
        /// Member schemas.
        options: Vec<Schema>,
    },
    /// Ordered intersection.
    Intersection(Vec<Schema>),
    /// Record with typed keys.
    Record {
        /// Key schema.
        key: Box<Schema>,
        /// Value schema.
        value: Box<Schema>,
    },
    /// Map.
    Map {
        /// Key schema.
        key: Box<Schema>,
        /// Value schema.
        value: Box<Schema>,
    },
    /// Set.
    Set(Box<Schema>),
    /// String-literal enum.
    Enum(Vec<String>),
    /// Enum object defined outside the schema.
    NativeEnum(NativeEnumDef),
    /// Deferred (usually recursive) schema.
    Lazy(LazyDef),
    /// Function.
    Function(FunctionDef),
    /// Promise of a value.
    Promise(Box<Schema>),
    /// Value or `undefined`.
    Optional(Box<Schema>),
    /// Value or `null`.
    Nullable(Box<Schema>),
    /// Nominally branded value.
    Branded {
        /// Wrapped schema.
        inner: Box<Schema>,
        /// Brand name.
        brand: String,
    },
    /// Refinement or transform.
    Effects(Box<Schema>),
    /// Value with a default.
    Default {
        /// Wrapped schema.
        inner: Box<Schema>,
        /// Default value.
        value: serde_json::Value,
    },
    /// Value with a fallback on failure.
    Catch(Box<Schema>),
    /// Read-only value.
    Readonly(Box<Schema>),
    /// Validate with `input`, then with `output`.
    Pipeline {
        /// Input schema.
        input: Box<Schema>,
        /// Output schema.
        output: Box<Schema>,
    },
    /// Extension kind this crate does not know how to translate.
    Custom(String),
}

impl SchemaKind {
    /// Returns the kind name used in schema descriptions and errors.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Primitive(p) => p.name(),
            Self::Literal(_) => "literal",
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::Tuple(_) => "tuple",
            Self::Union(_) => "union",
            Self::DiscriminatedUnion { .. } => "discriminatedUnion",
            Self::Intersection(_) => "intersection",
            Self::Record { .. } => "record",
            Self::Map { .. } => "map",
            Self::Set(_) => "set",
            Self::Enum(_) => "enum",
            Self::NativeEnum(_) => "nativeEnum",
            Self::Lazy(_) => "lazy",
            Self::Function(_) => "function",
            Self::Promise(_) => "promise",
            Self::Optional(_) => "optional",
            Self::Nullable(_) => "nullable",
            Self::Branded { .. } => "branded",
            Self::Effects(_) => "effects",
            Self::Default { .. } => "default",
            Self::Catch(_) => "catch",
            Self::Readonly(_) => "readonly",
            Self::Pipeline { .. } => "pipeline",
            Self::Custom(name) => name,
        }
    }
}

/// One node of a validation-schema tree.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Kind and payload.
    pub kind: SchemaKind,
    /// Human-readable description.
    pub description: Option<String>,
    /// Override hook.
    pub hook: Option<OverrideHook>,
}

impl From<SchemaKind> for Schema {
    fn from(kind: SchemaKind) -> Self {
        Self::new(kind)
    }
}

impl Schema {
    /// Creates a node of the given kind.
    #[must_use]
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            description: None,
            hook: None,
        }
    }

    /// Primitive node.
    #[must_use]
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::new(SchemaKind::Primitive(kind))
    }

    /// `string`
    #[must_use]
    pub fn string() -> Self {
        Self::primitive(PrimitiveKind::String)
    }

    /// `number`
    #[must_use]
    pub fn number() -> Self {
        Self::primitive(PrimitiveKind::Number)
    }

    /// `boolean`
    #[must_use]
    pub fn boolean() -> Self {
        Self::primitive(PrimitiveKind::Boolean)
    }

    /// `bigint`
    #[must_use]
    pub fn bigint() -> Self {
        Self::primitive(PrimitiveKind::BigInt)
    }

    /// `date`
    #[must_use]
    pub fn date() -> Self {
        Self::primitive(PrimitiveKind::Date)
    }

    /// `null`
    #[must_use]
    pub fn null() -> Self {
        Self::primitive(PrimitiveKind::Null)
    }

    /// `undefined`
    #[must_use]
    pub fn undefined() -> Self {
        Self::primitive(PrimitiveKind::Undefined)
    }

    /// `any`
    #[must_use]
    pub fn any() -> Self {
        Self::primitive(PrimitiveKind::Any)
    }

    /// `unknown`
    #[must_use]
    pub fn unknown() -> Self {
        Self::primitive(PrimitiveKind::Unknown)
    }

    /// `never`
    #[must_use]
    pub fn never() -> Self {
        Self::primitive(PrimitiveKind::Never)
    }

    /// `void`
    #[must_use]
    pub fn void() -> Self {
        Self::primitive(PrimitiveKind::Void)
    }

    /// Literal node.
    #[must_use]
    pub fn literal(value: impl Into<LiteralType>) -> Self {
        Self::new(SchemaKind::Literal(value.into()))
    }

    /// Object node from `(name, schema)` pairs, in order.
    #[must_use]
    pub fn object<I, N>(fields: I) -> Self
    where
        I: IntoIterator<Item = (N, Schema)>,
        N: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(name, schema)| ObjectField {
                name: name.into(),
                schema,
            })
            .collect();
        Self::new(SchemaKind::Object(ObjectDef {
            fields,
            catchall: None,
        }))
    }

    /// Array of `element`.
    #[must_use]
    pub fn array_of(element: Schema) -> Self {
        Self::new(SchemaKind::Array(Box::new(element)))
    }

    /// Tuple of `items`.
    #[must_use]
    pub fn tuple(items: Vec<Schema>) -> Self {
        Self::new(SchemaKind::Tuple(TupleDef { items, rest: None }))
    }

    /// Tuple of `items` followed by any number of `rest`.
    #[must_use]
    pub fn tuple_with_rest(items: Vec<Schema>, rest: Schema) -> Self {
        Self::new(SchemaKind::Tuple(TupleDef {
            items,
            rest: Some(Box::new(rest)),
        }))
    }

    /// Union of `members`.
    #[must_use]
    pub fn union(members: Vec<Schema>) -> Self {
        Self::new(SchemaKind::Union(members))
    }

    /// Discriminated union of object `options`.
    #[must_use]
    pub fn discriminated_union(discriminator: impl Into<String>, options: Vec<Schema>) -> Self {
        Self::new(SchemaKind::DiscriminatedUnion {
            discriminator: discriminator.into(),
            options,
        })
    }

    /// Intersection of `members`.
    #[must_use]
    pub fn intersection(members: Vec<Schema>) -> Self {
        Self::new(SchemaKind::Intersection(members))
    }

    /// Record from `key` to `value`.
    #[must_use]
    pub fn record(key: Schema, value: Schema) -> Self {
        Self::new(SchemaKind::Record {
            key: Box::new(key),
            value: Box::new(value),
        })
    }

    /// Map from `key` to `value`.
    #[must_use]
    pub fn map(key: Schema, value: Schema) -> Self {
        Self::new(SchemaKind::Map {
            key: Box::new(key),
            value: Box::new(value),
        })
    }

    /// Set of `element`.
    #[must_use]
    pub fn set(element: Schema) -> Self {
        Self::new(SchemaKind::Set(Box::new(element)))
    }

    /// String-literal enum.
    #[must_use]
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(SchemaKind::Enum(values.into_iter().map(Into::into).collect()))
    }

    /// Native enum from `(member name, value)` pairs.
    #[must_use]
    pub fn native_enum<I, N>(members: I) -> Self
    where
        I: IntoIterator<Item = (N, LiteralType)>,
        N: Into<String>,
    {
        Self::new(SchemaKind::NativeEnum(NativeEnumDef {
            name_hint: None,
            members: members
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }))
    }

    /// Lazy node backed by a supplier.
    #[must_use]
    pub fn lazy<F>(getter: F) -> Self
    where
        F: Fn() -> Schema + Send + Sync + 'static,
    {
        Self::new(SchemaKind::Lazy(LazyDef {
            getter: Some(Arc::new(getter)),
            target: None,
        }))
    }

    /// Lazy node that only names its target.
    #[must_use]
    pub fn lazy_ref(target: impl Into<String>) -> Self {
        Self::new(SchemaKind::Lazy(LazyDef {
            getter: None,
            target: Some(target.into()),
        }))
    }

    /// Function from `params` to `returns`.
    #[must_use]
    pub fn function(params: Vec<Schema>, returns: Schema) -> Self {
        Self::new(SchemaKind::Function(FunctionDef {
            params: TupleDef {
                items: params,
                rest: None,
            },
            returns: Box::new(returns),
        }))
    }

    /// Function with a trailing rest parameter.
    #[must_use]
    pub fn function_with_rest(params: Vec<Schema>, rest: Schema, returns: Schema) -> Self {
        Self::new(SchemaKind::Function(FunctionDef {
            params: TupleDef {
                items: params,
                rest: Some(Box::new(rest)),
            },
            returns: Box::new(returns),
        }))
    }

    /// Extension node.
    #[must_use]
    pub fn custom(kind: impl Into<String>) -> Self {
        Self::new(SchemaKind::Custom(kind.into()))
    }

    /// Wraps this node in an array.
    #[must_use]
    pub fn array(self) -> Self {
        Self::array_of(self)
    }

    /// Wraps this node in a promise.
    #[must_use]
    pub fn promise(self) -> Self {
        Self::new(SchemaKind::Promise(Box::new(self)))
    }

    /// Marks this node optional.
    #[must_use]
    pub fn optional(self) -> Self {
        Self::new(SchemaKind::Optional(Box::new(self)))
    }

    /// Marks this node nullable.
    #[must_use]
    pub fn nullable(self) -> Self {
        Self::new(SchemaKind::Nullable(Box::new(self)))
    }

    /// Adds a nominal brand.
    #[must_use]
    pub fn brand(self, brand: impl Into<String>) -> Self {
        Self::new(SchemaKind::Branded {
            inner: Box::new(self),
            brand: brand.into(),
        })
    }

    /// Wraps this node in a refinement/transform.
    #[must_use]
    pub fn effects(self) -> Self {
        Self::new(SchemaKind::Effects(Box::new(self)))
    }

    /// Adds a default value.
    #[must_use]
    pub fn with_default(self, value: serde_json::Value) -> Self {
        Self::new(SchemaKind::Default {
            inner: Box::new(self),
            value,
        })
    }

    /// Adds a catch fallback.
    #[must_use]
    pub fn catch(self) -> Self {
        Self::new(SchemaKind::Catch(Box::new(self)))
    }

    /// Marks this node read-only.
    #[must_use]
    pub fn readonly(self) -> Self {
        Self::new(SchemaKind::Readonly(Box::new(self)))
    }

    /// Pipes this node into `output`.
    #[must_use]
    pub fn pipe(self, output: Schema) -> Self {
        Self::new(SchemaKind::Pipeline {
            input: Box::new(self),
            output: Box::new(output),
        })
    }

    /// Sets the catchall schema. No effect on non-object nodes.
    #[must_use]
    pub fn catchall(mut self, schema: Schema) -> Self {
        if let SchemaKind::Object(object) = &mut self.kind {
            object.catchall = Some(Box::new(schema));
        }
        self
    }

    /// Sets the name hint. No effect on non-native-enum nodes.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        if let SchemaKind::NativeEnum(native) = &mut self.kind {
            native.name_hint = Some(name.into());
        }
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches an override hook.
    #[must_use]
    pub fn with_override<F>(mut self, hook: F) -> Self
    where
        F: Fn(&TypeFactory, &IdentifierContext) -> TypeExpr + Send + Sync + 'static,
    {
        self.hook = Some(OverrideHook::new(hook));
        self
    }

    /// Attaches an existing override hook.
    #[must_use]
    pub fn with_hook(mut self, hook: OverrideHook) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Returns the kind name.
    #[must_use]
    pub fn kind_name(&self) -> &str {
        self.kind.name()
    }

    /// Returns true if an override hook is attached.
    #[must_use]
    pub fn has_override(&self) -> bool {
        self.hook.is_some()
    }

    /// Returns true if the node accepts `undefined` as a missing value.
    ///
    /// Looks through transparent wrappers; a default value makes the node required.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        match &self.kind {
            SchemaKind::Optional(_) => true,
            SchemaKind::Nullable(inner)
            | SchemaKind::Branded { inner, .. }
            | SchemaKind::Effects(inner)
            | SchemaKind::Catch(inner)
            | SchemaKind::Readonly(inner) => inner.is_optional(),
            SchemaKind::Primitive(PrimitiveKind::Undefined | PrimitiveKind::Any | PrimitiveKind::Unknown) => true,
            _ => false,
        }
    }
}
