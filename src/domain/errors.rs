//! Domain layer error types
//!
//! The relayout engine itself is total and has no errors. These cover
//! building forms from descriptions and driving the window stack.

use thiserror::Error;

/// Main domain error type
#[derive(Error, Debug)]
pub enum DomainError {
    /// A description or operation violates a structural rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// A textual value could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// IO error (wrapped)
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::Io(err.to_string())
    }
}
