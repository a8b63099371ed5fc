//! Translation configuration.

use crate::error::CodegenError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use typeforge_core::naming::is_identifier;

/// Root identifier used when the caller does not pick one.
pub const DEFAULT_ROOT_IDENTIFIER: &str = "Identifier";

/// How native enums without an override hook are translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeEnumStrategy {
    /// Declare the enum in the resolution store and reference it by name.
    Declare,
    /// Inline the enum values as a literal union.
    Inline,
    /// Give up and emit `unknown`.
    Unknown,
}

/// Options recognized by the translator and generator.
///
/// Deserializes from camelCase JSON with every field optional:
///
/// ```json
/// { "rootIdentifier": "User", "resolveNativeEnums": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslateConfig {
    /// Name of the top-level type; target of every unresolved self-reference.
    pub root_identifier: String,
    /// Declare native enums as auxiliary declarations instead of emitting `unknown`.
    pub resolve_native_enums: bool,
    /// Inline native enum values as a literal union. Ignored when
    /// `resolve_native_enums` is set.
    pub inline_native_enums: bool,
    /// Prefix generated declarations with `export`.
    pub export: bool,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            root_identifier: DEFAULT_ROOT_IDENTIFIER.to_string(),
            resolve_native_enums: false,
            inline_native_enums: false,
            export: true,
        }
    }
}

impl TranslateConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root identifier.
    #[must_use]
    pub fn with_root_identifier(mut self, root: impl Into<String>) -> Self {
        self.root_identifier = root.into();
        self
    }

    /// Enables or disables native enum declarations.
    #[must_use]
    pub fn with_resolve_native_enums(mut self, enabled: bool) -> Self {
        self.resolve_native_enums = enabled;
        self
    }

    /// Enables or disables inlining native enums as literal unions.
    #[must_use]
    pub fn with_inline_native_enums(mut self, enabled: bool) -> Self {
        self.inline_native_enums = enabled;
        self
    }

    /// Enables or disables `export` on generated declarations.
    #[must_use]
    pub fn with_export(mut self, export: bool) -> Self {
        self.export = export;
        self
    }

    /// Returns true if the root identifier was left at its default.
    #[must_use]
    pub fn has_default_root(&self) -> bool {
        self.root_identifier == DEFAULT_ROOT_IDENTIFIER
    }

    /// Native enum handling selected by the flags.
    #[must_use]
    pub fn native_enum_strategy(&self) -> NativeEnumStrategy {
        if self.resolve_native_enums {
            NativeEnumStrategy::Declare
        } else if self.inline_native_enums {
            NativeEnumStrategy::Inline
        } else {
            NativeEnumStrategy::Unknown
        }
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` if the JSON is invalid or the root identifier is unusable.
    pub fn from_json(json: &str) -> Result<Self, CodegenError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CodegenError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    /// Returns `CodegenError` if reading or parsing fails.
    pub fn from_file(path: &Path) -> Result<Self, CodegenError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks the configuration for unusable values.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` if the root identifier is blank or is not a
    /// valid identifier.
    pub fn validate(&self) -> Result<(), CodegenError> {
        if self.root_identifier.trim().is_empty() {
            return Err(CodegenError::config("rootIdentifier must not be empty"));
        }
        if !is_identifier(&self.root_identifier) {
            return Err(CodegenError::config(format!(
                "rootIdentifier '{}' is not a valid identifier",
                self.root_identifier
            )));
        }
        Ok(())
    }
}
