//! Error types for parsing, evaluating and tabulating formulas

use std::io;

use thiserror::Error;

/// Result type alias for engine operations
pub type LogicResult<T> = std::result::Result<T, LogicError>;

/// Errors that can occur anywhere in the engine.
///
/// Every variant is a defect in the caller's input; nothing is retried.
#[derive(Debug, Error)]
pub enum LogicError {
    /// The tokenizer met a character that starts no token
    #[error("unrecognized character {character:?} at position {position}")]
    Lex { character: char, position: usize },

    /// Malformed token stream
    #[error("parse error at position {position}: {message}")]
    Parse { message: String, position: usize },

    /// An assignment did not bind a variable of the evaluated expression
    #[error("unbound variable: {0}")]
    UnboundVariable(String),

    /// Validity was requested for an argument without premises
    #[error("argument has no premises")]
    EmptyArgument,

    /// The expression exceeds the configured variable ceiling
    #[error("expression has {count} free variables, the limit is {limit}")]
    TooManyVariables { count: usize, limit: usize },

    /// A configuration value could not be interpreted
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: String, value: String },

    /// Reading formula input failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Writing a truth table as CSV failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl LogicError {
    pub fn parse(message: impl Into<String>, position: usize) -> Self {
        Self::Parse {
            message: message.into(),
            position,
        }
    }

    pub fn expected(expected: impl std::fmt::Display, found: impl std::fmt::Display, position: usize) -> Self {
        Self::parse(format!("expected {expected}, found {found}"), position)
    }

    pub fn empty_expression() -> Self {
        Self::parse("empty expression", 0)
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    pub fn is_lex_error(&self) -> bool {
        matches!(self, Self::Lex { .. })
    }
}
