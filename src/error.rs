//! Error types for the calculator core

use thiserror::Error;

/// Display marker shown in place of the entry after a division by zero.
pub const DIV_ZERO_MARKER: &str = "Error (div by 0)";

/// Display marker shown for every other failed calculation.
pub const ERROR_MARKER: &str = "Error";

/// Evaluation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Malformed expression: {0}")]
    MalformedExpression(String),

    #[error("Result is not a finite number: {0}")]
    NonFiniteResult(f64),
}

impl CalcError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedExpression(msg.into())
    }

    /// The entry text a session shows after failing with this error.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::DivisionByZero => DIV_ZERO_MARKER,
            Self::MalformedExpression(_) | Self::NonFiniteResult(_) => ERROR_MARKER,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
