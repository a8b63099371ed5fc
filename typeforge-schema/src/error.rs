//! Error types for schema description loading.

use thiserror::Error;

/// Error type for schema description parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Malformed JSON, or a node whose payload has the wrong shape.
    #[error("invalid schema description at '{path}': {source}")]
    Json {
        /// Path from the document root (`$`) to the offending value.
        path: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Field value with the right JSON type but an unusable value.
    #[error("invalid value '{value}' for field '{field}' at '{path}'")]
    InvalidField {
        /// Path to the node.
        path: String,
        /// Field name.
        field: String,
        /// Offending value.
        value: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Creates an invalid field error.
    pub fn invalid_field(
        path: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            path: path.into(),
            field: field.into(),
            value: value.into(),
        }
    }
}
