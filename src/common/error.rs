use thiserror::Error;

/// Invalid calculator input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("At least two operands are required.")]
    InsufficientOperands,

    #[error("Division by zero is not allowed.")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
