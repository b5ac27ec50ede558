//! Error types for coolsql.

use thiserror::Error;

/// The main error type for building and compiling expressions.
#[derive(Debug, Error)]
pub enum CoolSqlError {
    /// Field name contains a quote character.
    #[error("Invalid identifier: {0:?} (field names cannot contain quotes)")]
    InvalidIdentifier(String),

    /// AND/OR attempted with an operand that is not an expression.
    #[error("Invalid combination: cannot combine {left} with {right}, both sides must be expressions")]
    InvalidCombination {
        left: &'static str,
        right: &'static str,
    },

    /// Unknown operator spelling, or an operator given arguments it cannot render.
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoolSqlError {
    /// Create an invalid identifier error.
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::InvalidIdentifier(name.into())
    }

    /// Create an unsupported operator error.
    pub fn operator(message: impl Into<String>) -> Self {
        Self::UnsupportedOperator(message.into())
    }
}

/// Result type alias for coolsql operations.
pub type CoolSqlResult<T> = Result<T, CoolSqlError>;
