//! JSON schema-description loader.
//!
//! A description is a JSON tree of nodes, each an object with a `kind` tag and
//! kind-specific payload fields, plus an optional `description`:
//!
//! ```json
//! {
//!   "kind": "object",
//!   "shape": {
//!     "username": { "kind": "string" },
//!     "friends": { "kind": "array", "element": { "kind": "lazy", "ref": "User" } }
//!   }
//! }
//! ```
//!
//! A document may wrap the root node as `{ "name": "User", "schema": { ... } }`.
//! Object shapes and native enum values keep their declaration order.
//!
//! Nodes are decoded one at a time so that errors carry the full path from the
//! document root, e.g. `$.shape.friends.element.ref`. A `kind` tag with no
//! loader rule becomes [`SchemaKind::Custom`] and is left to the translator.

use crate::error::ParseError;
use crate::types::{
    FunctionDef, LazyDef, NativeEnumDef, ObjectDef, ObjectField, PrimitiveKind, Schema,
    SchemaKind, TupleDef,
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use typeforge_core::LiteralType;

/// Path of the document root in error messages.
const ROOT_PATH: &str = "$";

/// A parsed schema description with its optional declared name.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    /// Declared name of the root type.
    pub name: Option<String>,
    /// Root schema node.
    pub schema: Schema,
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    name: Option<String>,
    schema: Value,
}

#[derive(Debug, Deserialize)]
struct NodeHeader {
    kind: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLiteral {
    BigInt { bigint: String },
    Boolean(bool),
    Number(f64),
    String(String),
}

#[derive(Debug, Deserialize)]
struct LiteralPayload {
    value: RawLiteral,
}

#[derive(Debug, Deserialize)]
struct ObjectPayload {
    shape: IndexMap<String, Value>,
    #[serde(default)]
    catchall: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ElementPayload {
    element: Value,
}

#[derive(Debug, Deserialize)]
struct TuplePayload {
    items: Vec<Value>,
    #[serde(default)]
    rest: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct OptionsPayload {
    options: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct DiscriminatedPayload {
    discriminator: String,
    options: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct MembersPayload {
    members: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct KeyValuePayload {
    key: Value,
    value: Value,
}

#[derive(Debug, Deserialize)]
struct EnumPayload {
    values: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct NativeEnumPayload {
    #[serde(default)]
    name: Option<String>,
    values: IndexMap<String, RawLiteral>,
}

#[derive(Debug, Deserialize)]
struct LazyPayload {
    #[serde(default, rename = "ref")]
    target: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FunctionPayload {
    #[serde(default)]
    args: Vec<Value>,
    #[serde(default)]
    rest: Option<Value>,
    returns: Value,
}

#[derive(Debug, Deserialize)]
struct InnerPayload {
    inner: Value,
}

#[derive(Debug, Deserialize)]
struct BrandedPayload {
    inner: Value,
    brand: String,
}

#[derive(Debug, Deserialize)]
struct DefaultPayload {
    inner: Value,
    value: Value,
}

#[derive(Debug, Deserialize)]
struct PipelinePayload {
    #[serde(rename = "in")]
    input: Value,
    #[serde(rename = "out")]
    output: Value,
}

#[derive(Debug, Deserialize)]
struct CustomPayload {
    name: String,
}

/// Parses a single schema node from a JSON string.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or a node is not a valid description.
pub fn parse_schema(json: &str) -> Result<Schema, ParseError> {
    schema_from_value(parse_value(json)?)
}

/// Parses a schema node from an already-decoded JSON value.
///
/// # Errors
/// Returns `ParseError` if a node is not a valid description.
pub fn schema_from_value(value: Value) -> Result<Schema, ParseError> {
    lower(value, ROOT_PATH)
}

/// Parses a document, either `{ "name": ..., "schema": ... }` or a bare node.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or a node is not a valid description.
pub fn parse_document(json: &str) -> Result<SchemaDocument, ParseError> {
    let value = parse_value(json)?;
    let is_wrapped = value
        .as_object()
        .is_some_and(|obj| obj.contains_key("schema") && !obj.contains_key("kind"));

    if is_wrapped {
        let raw: RawDocument = decode(value, ROOT_PATH)?;
        Ok(SchemaDocument {
            name: raw.name,
            schema: lower(raw.schema, &format!("{ROOT_PATH}.schema"))?,
        })
    } else {
        Ok(SchemaDocument {
            name: None,
            schema: schema_from_value(value)?,
        })
    }
}

/// Reads and parses a document file.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn parse_document_file(path: &Path) -> Result<SchemaDocument, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_document(&json)
}

fn parse_value(json: &str) -> Result<Value, ParseError> {
    let mut de = serde_json::Deserializer::from_str(json);
    let value: Value =
        serde_path_to_error::deserialize(&mut de).map_err(|err| located(err, ROOT_PATH))?;
    de.end().map_err(|source| ParseError::Json {
        path: ROOT_PATH.to_string(),
        source,
    })?;
    Ok(value)
}

/// Deserializes `value`, reporting errors relative to the node at `path`.
fn decode<T: DeserializeOwned>(value: Value, path: &str) -> Result<T, ParseError> {
    serde_path_to_error::deserialize(value).map_err(|err| located(err, path))
}

fn located(err: serde_path_to_error::Error<serde_json::Error>, path: &str) -> ParseError {
    let inner = err.path().to_string();
    let path = if inner == "." {
        path.to_string()
    } else {
        format!("{path}.{inner}")
    };
    ParseError::Json {
        path,
        source: err.into_inner(),
    }
}

fn lower(value: Value, path: &str) -> Result<Schema, ParseError> {
    let header: NodeHeader =
        serde_path_to_error::deserialize(&value).map_err(|err| located(err, path))?;
    let kind = lower_kind(&header.kind, value, path)?;
    let mut schema = Schema::new(kind);
    schema.description = header.description;
    Ok(schema)
}

fn lower_boxed(value: Value, path: &str) -> Result<Box<Schema>, ParseError> {
    lower(value, path).map(Box::new)
}

fn lower_all(values: Vec<Value>, path: &str) -> Result<Vec<Schema>, ParseError> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| lower(value, &format!("{path}[{i}]")))
        .collect()
}

fn lower_literal(raw: RawLiteral, path: &str) -> Result<LiteralType, ParseError> {
    match raw {
        RawLiteral::BigInt { bigint } => match bigint.trim_end_matches('n').parse::<i128>() {
            Ok(n) => Ok(LiteralType::BigInt(n)),
            Err(_) => Err(ParseError::invalid_field(path, "bigint", bigint)),
        },
        RawLiteral::Boolean(b) => Ok(LiteralType::Boolean(b)),
        RawLiteral::Number(n) => Ok(LiteralType::Number(n)),
        RawLiteral::String(s) => Ok(LiteralType::String(s)),
    }
}

fn lower_inner(value: Value, path: &str) -> Result<Box<Schema>, ParseError> {
    let payload: InnerPayload = decode(value, path)?;
    lower_boxed(payload.inner, &format!("{path}.inner"))
}

fn lower_tuple(
    items: Vec<Value>,
    rest: Option<Value>,
    items_path: &str,
    rest_path: &str,
) -> Result<TupleDef, ParseError> {
    Ok(TupleDef {
        items: lower_all(items, items_path)?,
        rest: rest.map(|value| lower_boxed(value, rest_path)).transpose()?,
    })
}

fn lower_kind(kind: &str, value: Value, path: &str) -> Result<SchemaKind, ParseError> {
    if let Some(primitive) = PrimitiveKind::from_name(kind) {
        return Ok(SchemaKind::Primitive(primitive));
    }

    let kind = match kind {
        "literal" => {
            let payload: LiteralPayload = decode(value, path)?;
            SchemaKind::Literal(lower_literal(payload.value, &format!("{path}.value"))?)
        }
        "object" => {
            let payload: ObjectPayload = decode(value, path)?;
            let fields = payload
                .shape
                .into_iter()
                .map(|(name, value)| {
                    let schema = lower(value, &format!("{path}.shape.{name}"))?;
                    Ok(ObjectField { name, schema })
                })
                .collect::<Result<Vec<_>, ParseError>>()?;
            let catchall = payload
                .catchall
                .map(|value| lower_boxed(value, &format!("{path}.catchall")))
                .transpose()?;
            SchemaKind::Object(ObjectDef { fields, catchall })
        }
        "array" => {
            let payload: ElementPayload = decode(value, path)?;
            SchemaKind::Array(lower_boxed(payload.element, &format!("{path}.element"))?)
        }
        "set" => {
            let payload: ElementPayload = decode(value, path)?;
            SchemaKind::Set(lower_boxed(payload.element, &format!("{path}.element"))?)
        }
        "tuple" => {
            let payload: TuplePayload = decode(value, path)?;
            SchemaKind::Tuple(lower_tuple(
                payload.items,
                payload.rest,
                &format!("{path}.items"),
                &format!("{path}.rest"),
            )?)
        }
        "union" => {
            let payload: OptionsPayload = decode(value, path)?;
            SchemaKind::Union(lower_all(payload.options, &format!("{path}.options"))?)
        }
        "discriminatedUnion" => {
            let payload: DiscriminatedPayload = decode(value, path)?;
            SchemaKind::DiscriminatedUnion {
                discriminator: payload.discriminator,
                options: lower_all(payload.options, &format!("{path}.options"))?,
            }
        }
        "intersection" => {
            let payload: MembersPayload = decode(value, path)?;
            SchemaKind::Intersection(lower_all(payload.members, &format!("{path}.members"))?)
        }
        "record" | "map" => {
            let payload: KeyValuePayload = decode(value, path)?;
            let key = lower_boxed(payload.key, &format!("{path}.key"))?;
            let value = lower_boxed(payload.value, &format!("{path}.value"))?;
            if kind == "record" {
                SchemaKind::Record { key, value }
            } else {
                SchemaKind::Map { key, value }
            }
        }
        "enum" => {
            let payload: EnumPayload = decode(value, path)?;
            SchemaKind::Enum(payload.values)
        }
        "nativeEnum" => {
            let payload: NativeEnumPayload = decode(value, path)?;
            let members = payload
                .values
                .into_iter()
                .map(|(member, raw)| {
                    let value = lower_literal(raw, &format!("{path}.values.{member}"))?;
                    Ok((member, value))
                })
                .collect::<Result<Vec<_>, ParseError>>()?;
            SchemaKind::NativeEnum(NativeEnumDef {
                name_hint: payload.name,
                members,
            })
        }
        "lazy" => {
            let payload: LazyPayload = decode(value, path)?;
            match payload.target {
                Some(target) => Schema::lazy_ref(target).kind,
                None => SchemaKind::Lazy(LazyDef::default()),
            }
        }
        "function" => {
            let payload: FunctionPayload = decode(value, path)?;
            SchemaKind::Function(FunctionDef {
                params: lower_tuple(
                    payload.args,
                    payload.rest,
                    &format!("{path}.args"),
                    &format!("{path}.rest"),
                )?,
                returns: lower_boxed(payload.returns, &format!("{path}.returns"))?,
            })
        }
        "promise" => SchemaKind::Promise(lower_inner(value, path)?),
        "optional" => SchemaKind::Optional(lower_inner(value, path)?),
        "nullable" => SchemaKind::Nullable(lower_inner(value, path)?),
        "effects" => SchemaKind::Effects(lower_inner(value, path)?),
        "catch" => SchemaKind::Catch(lower_inner(value, path)?),
        "readonly" => SchemaKind::Readonly(lower_inner(value, path)?),
        "branded" => {
            let payload: BrandedPayload = decode(value, path)?;
            SchemaKind::Branded {
                inner: lower_boxed(payload.inner, &format!("{path}.inner"))?,
                brand: payload.brand,
            }
        }
        "default" => {
            let payload: DefaultPayload = decode(value, path)?;
            SchemaKind::Default {
                inner: lower_boxed(payload.inner, &format!("{path}.inner"))?,
                value: payload.value,
            }
        }
        "pipeline" => {
            let payload: PipelinePayload = decode(value, path)?;
            SchemaKind::Pipeline {
                input: lower_boxed(payload.input, &format!("{path}.in"))?,
                output: lower_boxed(payload.output, &format!("{path}.out"))?,
            }
        }
        "custom" => {
            let payload: CustomPayload = decode(value, path)?;
            SchemaKind::Custom(payload.name)
        }
        other => SchemaKind::Custom(other.to_string()),
    };
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_primitive() {
        let schema = parse_schema(r#"{"kind": "string"}"#).expect("Failed to parse");
        assert!(matches!(
            schema.kind,
            SchemaKind::Primitive(PrimitiveKind::String)
        ));

        let schema = parse_schema(r#"{"kind": "bigint"}"#).expect("Failed to parse");
        assert!(matches!(
            schema.kind,
            SchemaKind::Primitive(PrimitiveKind::BigInt)
        ));
    }

    #[test]
    fn test_parse_object_keeps_order_and_descriptions() {
        let json = r#"{
            "kind": "object",
            "shape": {
                "zeta": { "kind": "string", "description": "last letter" },
                "alpha": { "kind": "optional", "inner": { "kind": "number" } }
            }
        }"#;
        let schema = parse_schema(json).expect("Failed to parse");
        let SchemaKind::Object(object) = &schema.kind else {
            panic!("expected object");
        };
        let names: Vec<_> = object.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(
            object.fields[0].schema.description.as_deref(),
            Some("last letter")
        );
        assert!(object.fields[1].schema.is_optional());
    }

    #[test]
    fn test_parse_literals() {
        let schema = parse_schema(r#"{"kind": "literal", "value": "admin"}"#).expect("Failed to parse");
        assert!(matches!(schema.kind, SchemaKind::Literal(LiteralType::String(ref s)) if s == "admin"));

        let schema = parse_schema(r#"{"kind": "literal", "value": 7}"#).expect("Failed to parse");
        assert!(matches!(schema.kind, SchemaKind::Literal(LiteralType::Number(n)) if n == 7.0));

        let schema = parse_schema(r#"{"kind": "literal", "value": false}"#).expect("Failed to parse");
        assert!(matches!(schema.kind, SchemaKind::Literal(LiteralType::Boolean(false))));

        let schema = parse_schema(r#"{"kind": "literal", "value": {"bigint": "12n"}}"#)
            .expect("Failed to parse");
        assert!(matches!(schema.kind, SchemaKind::Literal(LiteralType::BigInt(12))));
    }

    #[test]
    fn test_parse_invalid_bigint() {
        let result = parse_schema(r#"{"kind": "literal", "value": {"bigint": "twelve"}}"#);
        assert!(matches!(result, Err(ParseError::InvalidField { .. })));
    }

    #[test]
    fn test_parse_native_enum() {
        let json = r#"{"kind": "nativeEnum", "name": "Color", "values": {"Red": "red", "Blue": 2}}"#;
        let schema = parse_schema(json).expect("Failed to parse");
        let SchemaKind::NativeEnum(def) = &schema.kind else {
            panic!("expected native enum");
        };
        assert_eq!(def.name_hint.as_deref(), Some("Color"));
        assert_eq!(def.members[0], ("Red".to_string(), LiteralType::from("red")));
        assert_eq!(def.members[1], ("Blue".to_string(), LiteralType::Number(2.0)));
    }

    #[test]
    fn test_parse_lazy_and_function() {
        let json = r#"{
            "kind": "function",
            "args": [{ "kind": "string" }],
            "rest": { "kind": "number" },
            "returns": { "kind": "lazy", "ref": "Node" }
        }"#;
        let schema = parse_schema(json).expect("Failed to parse");
        let SchemaKind::Function(def) = &schema.kind else {
            panic!("expected function");
        };
        assert_eq!(def.params.items.len(), 1);
        assert!(def.params.rest.is_some());
        let SchemaKind::Lazy(lazy) = &def.returns.kind else {
            panic!("expected lazy");
        };
        assert_eq!(lazy.target(), Some("Node"));
    }

    #[test]
    fn test_parse_unknown_kind_is_custom() {
        let schema = parse_schema(
            r#"{"kind": "object", "shape": {"a": {"kind": "array", "element": {"kind": "templateLiteral"}}}}"#,
        )
        .expect("Failed to parse");
        let SchemaKind::Object(object) = &schema.kind else {
            panic!("expected object");
        };
        let SchemaKind::Array(element) = &object.fields[0].schema.kind else {
            panic!("expected array");
        };
        assert!(matches!(&element.kind, SchemaKind::Custom(name) if name == "templateLiteral"));
    }

    fn error_path(json: &str) -> String {
        match parse_schema(json).expect_err("description should be rejected") {
            ParseError::Json { path, .. } | ParseError::InvalidField { path, .. } => path,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_path_names_nested_literal() {
        let path = error_path(
            r#"{"kind": "object", "shape": {"a": {"kind": "literal", "value": [1]}}}"#,
        );
        assert_eq!(path, "$.shape.a.value");
    }

    #[test]
    fn test_error_path_names_nested_node() {
        let path = error_path(
            r#"{"kind": "object", "shape": {"a": {"kind": "array", "element": 3}}}"#,
        );
        assert_eq!(path, "$.shape.a.element");

        let path = error_path(r#"{"kind": "tuple", "items": [{"kind": "string"}, {}]}"#);
        assert_eq!(path, "$.items[1]");

        let path = error_path(
            r#"{"kind": "optional", "inner": {"kind": "branded", "inner": {"kind": "string"}}}"#,
        );
        assert_eq!(path, "$.inner");
    }

    #[test]
    fn test_error_path_names_missing_payload() {
        let path = error_path(r#"{"kind": "record", "key": {"kind": "string"}}"#);
        assert_eq!(path, "$");

        let path = error_path(r#"{"kind": "object", "shape": 3}"#);
        assert_eq!(path, "$.shape");
    }

    #[test]
    fn test_error_path_in_wrapped_document() {
        let err = parse_document(
            r#"{"name": "User", "schema": {"kind": "set", "element": {"kind": 5}}}"#,
        )
        .expect_err("bad kind tag should fail");
        let ParseError::Json { path, .. } = err else {
            panic!("expected JSON error");
        };
        assert_eq!(path, "$.schema.element.kind");
    }

    #[test]
    fn test_parse_custom_kind() {
        let schema = parse_schema(r#"{"kind": "custom", "name": "templateLiteral"}"#)
            .expect("Failed to parse");
        assert_eq!(schema.kind_name(), "templateLiteral");
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(parse_schema("{ not json").is_err());
    }

    #[test]
    fn test_parse_document_wrapped_and_bare() {
        let wrapped = parse_document(r#"{"name": "User", "schema": {"kind": "string"}}"#)
            .expect("Failed to parse");
        assert_eq!(wrapped.name.as_deref(), Some("User"));
        assert_eq!(wrapped.schema.kind_name(), "string");

        let bare = parse_document(r#"{"kind": "number"}"#).expect("Failed to parse");
        assert!(bare.name.is_none());
        assert_eq!(bare.schema.kind_name(), "number");
    }

    #[test]
    fn test_parse_document_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        write!(
            file,
            r#"{{"name": "Tags", "schema": {{"kind": "set", "element": {{"kind": "string"}}}}}}"#
        )
        .expect("Failed to write");
        let doc = parse_document_file(file.path()).expect("Failed to parse");
        assert_eq!(doc.name.as_deref(), Some("Tags"));
        assert_eq!(doc.schema.kind_name(), "set");
    }

    #[test]
    fn test_parse_wrappers() {
        let json = r#"{
            "kind": "pipeline",
            "in": { "kind": "string" },
            "out": { "kind": "default", "value": 3, "inner": { "kind": "branded", "brand": "Port", "inner": { "kind": "number" } } }
        }"#;
        let schema = parse_schema(json).expect("Failed to parse");
        let SchemaKind::Pipeline { output, .. } = &schema.kind else {
            panic!("expected pipeline");
        };
        let SchemaKind::Default { inner, value } = &output.kind else {
            panic!("expected default");
        };
        assert_eq!(value, &serde_json::json!(3));
        assert_eq!(inner.kind_name(), "branded");
    }
}
