//! Source generation from translated schemas.

use crate::config::TranslateConfig;
use crate::error::CodegenError;
use crate::translator::{Translation, translate};
use typeforge_core::{Declaration, Printer, TypeFactory};
use typeforge_schema::Schema;

/// Generates TypeScript declarations for a schema.
///
/// Output is every auxiliary declaration in registration order, followed by the
/// root type alias. Declarations never reuse the root identifier, so the alias is
/// always emitted.
pub struct Generator<'a> {
    config: &'a TranslateConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(config: &'a TranslateConfig) -> Self {
        Self { config }
    }

    /// Translates `schema` and collects the declarations to emit.
    ///
    /// # Errors
    /// Returns `CodegenError` if translation fails.
    pub fn declarations(&self, schema: &Schema) -> Result<Vec<Declaration>, CodegenError> {
        let translation = translate(schema, self.config)?;
        Ok(self.collect(translation, schema.description.clone()))
    }

    /// Generates source text for `schema`.
    ///
    /// # Errors
    /// Returns `CodegenError` if translation fails.
    pub fn generate(&self, schema: &Schema) -> Result<String, CodegenError> {
        let declarations = self.declarations(schema)?;
        let mut printer = Printer::new().export(self.config.export);

        let mut output = String::new();
        for (i, decl) in declarations.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&printer.print_declaration(decl));
        }
        Ok(output)
    }

    fn collect(&self, translation: Translation, doc: Option<String>) -> Vec<Declaration> {
        let (node, store) = translation.into_parts();
        let mut declarations: Vec<Declaration> = store
            .into_declarations()
            .into_iter()
            .map(Declaration::from)
            .collect();

        let mut alias = TypeFactory::new().type_alias(self.config.root_identifier.clone(), node);
        alias.doc = doc;
        declarations.push(Declaration::from(alias));
        declarations
    }
}
