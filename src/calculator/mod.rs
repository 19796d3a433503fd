use crate::common::{CalculatorError, Result};
use std::fmt;
use std::str::FromStr;

/// A binary arithmetic operation that can be folded across operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
        Operation::Pow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
            Operation::Pow => "pow",
        }
    }

    /// Operation names in alphabetical order, as shown in usage text.
    pub fn names() -> Vec<&'static str> {
        let mut names: Vec<_> = Self::ALL.iter().map(|op| op.name()).collect();
        names.sort_unstable();
        names
    }

    /// Apply a single step: `left <op> right`.
    pub fn apply(self, left: f64, right: f64) -> Result<f64> {
        match self {
            Operation::Add => Ok(left + right),
            Operation::Sub => Ok(left - right),
            Operation::Mul => Ok(left * right),
            Operation::Div => {
                if right == 0.0 {
                    return Err(CalculatorError::DivisionByZero);
                }
                Ok(left / right)
            }
            Operation::Pow => Ok(left.powf(right)),
        }
    }

    /// Fold the operation left-to-right across `operands`.
    ///
    /// `[a, b, c]` evaluates as `(a <op> b) <op> c`. At least two operands are
    /// required.
    pub fn fold(self, operands: &[f64]) -> Result<f64> {
        let (first, rest) = match operands {
            [first, rest @ ..] if !rest.is_empty() => (*first, rest),
            _ => return Err(CalculatorError::InsufficientOperands),
        };

        rest.iter()
            .try_fold(first, |acc, &value| self.apply(acc, value))
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| CalculatorError::UnsupportedOperation(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluate `operation` across `operands`, folding from left to right.
///
/// The operation name is checked first, then the operand count.
pub fn evaluate(operation: &str, operands: &[f64]) -> Result<f64> {
    let op: Operation = operation.parse()?;
    op.fold(operands)
}
