//! Error types for translation and code generation.

use thiserror::Error;

/// Error type for translation and code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema description could not be loaded.
    #[error("schema parse error: {0}")]
    Parse(#[from] typeforge_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Schema node kind with no translation rule and no override hook.
    #[error("unsupported schema kind '{kind}' at '{path}'")]
    UnsupportedKind {
        /// Kind name of the offending node.
        kind: String,
        /// Identifier path of the offending node.
        path: String,
    },

    /// Union, intersection or enum with no members.
    #[error("empty {kind} at '{path}'")]
    EmptyComposite {
        /// Composite kind (`union`, `intersection`, `enum`).
        kind: String,
        /// Identifier path of the offending node.
        path: String,
    },

    /// Invalid translation configuration.
    #[error("invalid configuration: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates an unsupported kind error.
    pub fn unsupported(kind: impl Into<String>, path: impl Into<String>) -> Self {
        Self::UnsupportedKind {
            kind: kind.into(),
            path: path.into(),
        }
    }

    /// Creates an empty composite error.
    pub fn empty_composite(kind: impl Into<String>, path: impl Into<String>) -> Self {
        Self::EmptyComposite {
            kind: kind.into(),
            path: path.into(),
        }
    }

    /// Creates a configuration error with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_node() {
        let err = CodegenError::unsupported("templateLiteral", "User.slug");
        assert_eq!(
            err.to_string(),
            "unsupported schema kind 'templateLiteral' at 'User.slug'"
        );

        let err = CodegenError::empty_composite("union", "User.role");
        assert_eq!(err.to_string(), "empty union at 'User.role'");
    }
}
