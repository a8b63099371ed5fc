//! # typeforge codegen
//!
//! Translation of schema descriptions into TypeScript type declarations.
//!
//! This crate provides:
//! - The recursive schema translator with per-node override hooks
//! - The resolution store for auxiliary enum declarations
//! - Source generation for the root alias and its declarations
//! - Translation configuration, loadable from JSON

pub mod config;
pub mod error;
pub mod generator;
pub mod store;
pub mod translator;

pub use config::{DEFAULT_ROOT_IDENTIFIER, NativeEnumStrategy, TranslateConfig};
pub use error::CodegenError;
pub use generator::Generator;
pub use store::ResolutionStore;
pub use translator::{Translation, Translator, translate};

use typeforge_schema::Schema;

/// Generates TypeScript source for a schema.
///
/// # Arguments
/// * `schema` - Root schema node
/// * `config` - Translation settings
///
/// # Returns
/// Auxiliary declarations followed by the root type alias.
///
/// # Errors
/// Returns `CodegenError` if translation fails.
pub fn generate(schema: &Schema, config: &TranslateConfig) -> Result<String, CodegenError> {
    Generator::new(config).generate(schema)
}

/// Generates TypeScript source from a JSON schema document.
///
/// A document name replaces the root identifier only when `config` still uses
/// the default one.
///
/// # Arguments
/// * `json` - Schema description, bare or wrapped as `{ "name", "schema" }`
/// * `config` - Translation settings
///
/// # Returns
/// Generated TypeScript source as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing or translation fails.
pub fn generate_from_json(json: &str, config: &TranslateConfig) -> Result<String, CodegenError> {
    let document = typeforge_schema::parse_document(json)?;
    match document.name {
        Some(name) if config.has_default_root() => {
            tracing::debug!(root = %name, "using document name as root identifier");
            let config = config.clone().with_root_identifier(name);
            config.validate()?;
            generate(&document.schema, &config)
        }
        _ => generate(&document.schema, config),
    }
}

/// Generates TypeScript source from a JSON schema document file.
///
/// # Arguments
/// * `path` - Path to the schema description file
/// * `config` - Translation settings
///
/// # Returns
/// Generated TypeScript source as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or translation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: &TranslateConfig,
) -> Result<String, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ORDER_DOCUMENT: &str = r#"{
        "name": "Order",
        "schema": {
            "kind": "object",
            "shape": {
                "id": { "kind": "string" },
                "items": { "kind": "array", "element": { "kind": "lazy", "ref": "Order" } }
            }
        }
    }"#;

    #[test]
    fn test_generate_from_json_uses_document_name() {
        let output = generate_from_json(ORDER_DOCUMENT, &TranslateConfig::default())
            .expect("Failed to generate");
        assert_eq!(
            output,
            "export type Order = {\n    id: string;\n    items: Order[];\n};\n"
        );
    }

    #[test]
    fn test_explicit_root_beats_document_name() {
        let config = TranslateConfig::new().with_root_identifier("Purchase");
        let output = generate_from_json(ORDER_DOCUMENT, &config).expect("Failed to generate");
        assert!(output.starts_with("export type Purchase = {"));
        assert!(output.contains("items: Purchase[];"));
    }

    #[test]
    fn test_bare_schema_uses_default_root() {
        let output = generate_from_json(r#"{"kind": "boolean"}"#, &TranslateConfig::default())
            .expect("Failed to generate");
        assert_eq!(output, "export type Identifier = boolean;\n");
    }

    #[test]
    fn test_parse_error_is_wrapped() {
        let result = generate_from_json(r#"{"kind": "object", "shape": 3}"#, &TranslateConfig::default());
        assert!(matches!(result, Err(CodegenError::Parse(_))));
    }

    #[test]
    fn test_unknown_kind_reports_translation_path() {
        let json = r#"{
            "name": "User",
            "schema": {
                "kind": "object",
                "shape": {
                    "tags": { "kind": "array", "element": { "kind": "templateLiteral" } }
                }
            }
        }"#;
        match generate_from_json(json, &TranslateConfig::default()) {
            Err(CodegenError::UnsupportedKind { kind, path }) => {
                assert_eq!(kind, "templateLiteral");
                assert_eq!(path, "User.tags[]");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_generate_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(ORDER_DOCUMENT.as_bytes()).expect("Failed to write");
        let output = generate_from_file(file.path(), &TranslateConfig::default())
            .expect("Failed to generate");
        assert!(output.contains("export type Order"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = generate_from_file(
            std::path::Path::new("/nonexistent/schema.json"),
            &TranslateConfig::default(),
        );
        assert!(matches!(result, Err(CodegenError::Io(_))));
    }
}
