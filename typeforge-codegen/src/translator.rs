//! Schema to type-expression translation.
//!
//! [`translate`] walks a [`Schema`] tree depth-first and produces the matching
//! [`TypeExpr`]. An override hook on a node always wins over the default rule for
//! its kind. Two kinds cannot be translated from local structure alone:
//!
//! - `lazy` nodes become a reference to the configured root identifier, whatever
//!   their deferred target is. Non-root recursion needs an override hook.
//! - `nativeEnum` nodes become `unknown`, an inline literal union, or a reference
//!   to an enum declaration registered in the [`ResolutionStore`], depending on
//!   [`TranslateConfig`].

use crate::config::{NativeEnumStrategy, TranslateConfig};
use crate::error::CodegenError;
use crate::store::ResolutionStore;
use tracing::{debug, trace};
use typeforge_core::naming::{to_identifier, to_pascal_case};
use typeforge_core::{
    Accessor, EnumDeclaration, FunctionParam, Keyword, ObjectType, TypeExpr, TypeFactory,
};
use typeforge_schema::{
    FunctionDef, NativeEnumDef, ObjectDef, PrimitiveKind, Schema, SchemaKind, TupleDef,
};

/// Result of a successful translation.
#[derive(Debug, Clone)]
pub struct Translation {
    /// Translated root type.
    pub node: TypeExpr,
    store: ResolutionStore,
}

impl Translation {
    /// Resolution state accumulated during the pass.
    #[must_use]
    pub fn store(&self) -> &ResolutionStore {
        &self.store
    }

    /// Auxiliary declarations that must be emitted before the main type.
    pub fn auxiliary_declarations(&self) -> impl ExactSizeIterator<Item = &EnumDeclaration> {
        self.store.declarations()
    }

    /// Root identifier the translation was performed against.
    #[must_use]
    pub fn root_identifier(&self) -> &str {
        self.store.current_identifier_path().root()
    }

    /// Splits into the root type and the store.
    #[must_use]
    pub fn into_parts(self) -> (TypeExpr, ResolutionStore) {
        (self.node, self.store)
    }
}

/// Translates `schema` with a fresh resolution store.
///
/// # Errors
/// Returns `CodegenError::UnsupportedKind` for a node kind with no translation rule
/// and no override hook, and `CodegenError::EmptyComposite` for a union,
/// intersection or enum with no members. No partial result is returned.
pub fn translate(schema: &Schema, config: &TranslateConfig) -> Result<Translation, CodegenError> {
    let mut translator = Translator::new(config);
    let node = translator.translate(schema)?;
    Ok(Translation {
        node,
        store: translator.finish(),
    })
}

/// Recursive translator bound to one configuration and one store.
#[derive(Debug)]
pub struct Translator<'a> {
    config: &'a TranslateConfig,
    factory: TypeFactory,
    store: ResolutionStore,
}

impl<'a> Translator<'a> {
    /// Creates a translator with an empty store rooted at the configured identifier.
    #[must_use]
    pub fn new(config: &'a TranslateConfig) -> Self {
        Self {
            config,
            factory: TypeFactory::new(),
            store: ResolutionStore::new(config.root_identifier.clone()),
        }
    }

    /// Translates one schema tree.
    ///
    /// Declarations accumulate across calls on the same translator.
    ///
    /// # Errors
    /// See [`translate`].
    pub fn translate(&mut self, schema: &Schema) -> Result<TypeExpr, CodegenError> {
        self.store.reset_path();
        debug!(root = %self.config.root_identifier, kind = schema.kind_name(), "translating schema");
        let result = self.visit(schema);
        match &result {
            Ok(_) => debug!(declarations = self.store.len(), "translation finished"),
            Err(err) => {
                debug!(error = %err, "translation failed");
                self.store.reset_path();
            }
        }
        result
    }

    /// Resolution state so far.
    #[must_use]
    pub fn store(&self) -> &ResolutionStore {
        &self.store
    }

    /// Consumes the translator, returning its store.
    #[must_use]
    pub fn finish(self) -> ResolutionStore {
        self.store
    }

    fn visit(&mut self, schema: &Schema) -> Result<TypeExpr, CodegenError> {
        if let Some(hook) = &schema.hook {
            trace!(path = %self.path(), kind = schema.kind_name(), "override hook");
            return Ok(hook.call(&self.factory, self.store.current_identifier_path()));
        }

        let f = self.factory;
        match &schema.kind {
            SchemaKind::Primitive(kind) => Ok(primitive(*kind)),
            SchemaKind::Literal(value) => Ok(f.literal(value.clone())),
            SchemaKind::Object(def) => self.object(def),
            SchemaKind::Array(element) => {
                let element = self.child(Accessor::Element, element)?;
                Ok(f.array(element))
            }
            SchemaKind::Tuple(def) => {
                let (items, rest) = self.tuple_parts(def, Accessor::Index, Accessor::Rest)?;
                Ok(f.tuple(items, rest))
            }
            SchemaKind::Union(members) | SchemaKind::DiscriminatedUnion { options: members, .. } => {
                let members = self.members("union", members)?;
                Ok(f.union(members))
            }
            SchemaKind::Intersection(members) => {
                let members = self.members("intersection", members)?;
                Ok(f.intersection(members))
            }
            SchemaKind::Record { key, value } => self.container("Record", key, value),
            SchemaKind::Map { key, value } => self.container("Map", key, value),
            SchemaKind::Set(element) => {
                let element = self.child(Accessor::Value, element)?;
                Ok(f.generic("Set", vec![element]))
            }
            SchemaKind::Enum(values) => {
                if values.is_empty() {
                    return Err(CodegenError::empty_composite("enum", self.path()));
                }
                Ok(f.union(values.iter().map(|v| f.string_literal(v.clone())).collect()))
            }
            SchemaKind::NativeEnum(def) => Ok(self.native_enum(def)),
            SchemaKind::Lazy(def) => {
                let root = self.store.current_identifier_path().root();
                trace!(
                    path = %self.path(),
                    root,
                    target = def.target().unwrap_or("<supplier>"),
                    "lazy node resolved to root identifier"
                );
                Ok(f.reference(root))
            }
            SchemaKind::Function(def) => self.function(def),
            SchemaKind::Promise(inner) => {
                let inner = self.child(Accessor::Awaited, inner)?;
                Ok(f.generic("Promise", vec![inner]))
            }
            SchemaKind::Optional(inner) => {
                let inner = self.visit(inner)?;
                Ok(f.union(vec![inner, f.keyword(Keyword::Undefined)]))
            }
            SchemaKind::Nullable(inner) => {
                let inner = self.visit(inner)?;
                Ok(f.union(vec![inner, f.keyword(Keyword::Null)]))
            }
            SchemaKind::Branded { inner, .. }
            | SchemaKind::Effects(inner)
            | SchemaKind::Default { inner, .. }
            | SchemaKind::Catch(inner)
            | SchemaKind::Readonly(inner)
            | SchemaKind::Pipeline { output: inner, .. } => self.visit(inner),
            SchemaKind::Custom(kind) => Err(CodegenError::unsupported(kind.clone(), self.path())),
        }
    }

    fn child(&mut self, accessor: Accessor, schema: &Schema) -> Result<TypeExpr, CodegenError> {
        self.store.enter(accessor);
        let result = self.visit(schema);
        self.store.leave();
        result
    }

    fn path(&self) -> String {
        self.store.current_identifier_path().to_string()
    }

    fn object(&mut self, def: &ObjectDef) -> Result<TypeExpr, CodegenError> {
        let mut properties = Vec::with_capacity(def.fields.len());
        for field in &def.fields {
            let ty = self.child(Accessor::Property(field.name.clone()), &field.schema)?;
            let mut property = self
                .factory
                .property(field.name.clone(), field.schema.is_optional(), ty);
            property.doc = field.schema.description.clone();
            properties.push(property);
        }

        let index = match &def.catchall {
            Some(catchall) => Some(self.child(Accessor::Catchall, catchall)?),
            None => None,
        };

        Ok(match index {
            Some(value) => self.factory.object_with_index(properties, value),
            None => TypeExpr::Object(ObjectType {
                properties,
                index: None,
            }),
        })
    }

    fn tuple_parts(
        &mut self,
        def: &TupleDef,
        item: impl Fn(usize) -> Accessor,
        rest: Accessor,
    ) -> Result<(Vec<TypeExpr>, Option<TypeExpr>), CodegenError> {
        let mut items = Vec::with_capacity(def.items.len());
        for (i, schema) in def.items.iter().enumerate() {
            items.push(self.child(item(i), schema)?);
        }
        let rest = match &def.rest {
            Some(schema) => Some(self.child(rest, schema)?),
            None => None,
        };
        Ok((items, rest))
    }

    fn members(&mut self, kind: &str, members: &[Schema]) -> Result<Vec<TypeExpr>, CodegenError> {
        if members.is_empty() {
            return Err(CodegenError::empty_composite(kind, self.path()));
        }
        members
            .iter()
            .enumerate()
            .map(|(i, member)| self.child(Accessor::Member(i), member))
            .collect()
    }

    fn container(
        &mut self,
        name: &str,
        key: &Schema,
        value: &Schema,
    ) -> Result<TypeExpr, CodegenError> {
        let key = self.child(Accessor::Key, key)?;
        let value = self.child(Accessor::Value, value)?;
        Ok(self.factory.generic(name, vec![key, value]))
    }

    fn function(&mut self, def: &FunctionDef) -> Result<TypeExpr, CodegenError> {
        let rest_index = def.params.items.len();
        let (items, rest) =
            self.tuple_parts(&def.params, Accessor::Parameter, Accessor::Parameter(rest_index))?;

        let mut params: Vec<FunctionParam> = items
            .into_iter()
            .enumerate()
            .map(|(i, ty)| self.factory.param(format!("args_{i}"), ty))
            .collect();
        if let Some(ty) = rest {
            params.push(FunctionParam {
                name: format!("args_{rest_index}"),
                ty,
                rest: true,
            });
        }

        let returns = self.child(Accessor::Return, &def.returns)?;
        Ok(self.factory.function(params, returns))
    }

    fn native_enum(&mut self, def: &NativeEnumDef) -> TypeExpr {
        let f = self.factory;
        match self.config.native_enum_strategy() {
            NativeEnumStrategy::Declare => {
                let name = self.native_enum_name(def);
                let members = def
                    .members
                    .iter()
                    .map(|(member, value)| (to_identifier(member), value.clone()));
                let decl = f.enum_declaration(name.clone(), members);
                self.store.register_declaration(decl);
                f.reference(name)
            }
            NativeEnumStrategy::Inline => {
                if def.members.is_empty() {
                    return f.keyword(Keyword::Never);
                }
                f.union(
                    def.members
                        .iter()
                        .map(|(_, value)| f.literal(value.clone()))
                        .collect(),
                )
            }
            NativeEnumStrategy::Unknown => {
                trace!(path = %self.path(), "native enum left unresolved");
                f.unknown()
            }
        }
    }

    /// Declaration name for a native enum: the name hint, or the root identifier
    /// followed by every property name on the path, in PascalCase.
    ///
    /// The root identifier itself is reserved for the root alias, so a name equal
    /// to it gets an `Enum` suffix.
    fn native_enum_name(&self, def: &NativeEnumDef) -> String {
        let ctx = self.store.current_identifier_path();
        let mut name = match &def.name_hint {
            Some(hint) => to_identifier(hint),
            None => {
                let mut name = ctx.root().to_string();
                for property in ctx.property_names() {
                    name.push_str(&to_pascal_case(property));
                }
                to_identifier(&name)
            }
        };
        if name == ctx.root() {
            name.push_str("Enum");
        }
        name
    }
}

fn primitive(kind: PrimitiveKind) -> TypeExpr {
    let f = TypeFactory::new();
    let keyword = match kind {
        PrimitiveKind::String => Keyword::String,
        PrimitiveKind::Number => Keyword::Number,
        PrimitiveKind::Boolean => Keyword::Boolean,
        PrimitiveKind::BigInt => Keyword::BigInt,
        PrimitiveKind::Date => return f.reference("Date"),
        PrimitiveKind::Symbol => Keyword::Symbol,
        PrimitiveKind::Null => Keyword::Null,
        PrimitiveKind::Undefined => Keyword::Undefined,
        PrimitiveKind::Any => Keyword::Any,
        PrimitiveKind::Unknown => Keyword::Unknown,
        PrimitiveKind::Never => Keyword::Never,
        PrimitiveKind::Void => Keyword::Void,
    };
    f.keyword(keyword)
}
