//! Error types for relgen.

use thiserror::Error;

/// The main error type for statement construction and rendering.
#[derive(Debug, Error)]
pub enum SqlError {
    /// A builder (or `validate`) found a required part missing or malformed.
    #[error("Invalid statement: {statement} requires {field}")]
    InvalidStatement {
        statement: &'static str,
        field: String,
    },

    /// The generator has no rendering rule for this node in this dialect.
    #[error("Unsupported construct: {construct} is not supported by the {dialect} dialect")]
    UnsupportedConstruct {
        construct: String,
        dialect: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Statement JSON could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be decoded.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl SqlError {
    /// Create an invalid statement error for a missing or malformed field.
    pub fn invalid(statement: &'static str, field: impl Into<String>) -> Self {
        Self::InvalidStatement {
            statement,
            field: field.into(),
        }
    }

    /// Create an unsupported construct error.
    pub fn unsupported(construct: impl Into<String>, dialect: impl std::fmt::Display) -> Self {
        Self::UnsupportedConstruct {
            construct: construct.into(),
            dialect: dialect.to_string(),
        }
    }
}

/// Result type alias for relgen operations.
pub type SqlResult<T> = Result<T, SqlError>;
