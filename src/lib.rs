// Library exports for the binary and integration tests

pub mod calculator;
pub mod cli;
pub mod common;

pub use calculator::{evaluate, Operation};
pub use common::{CalculatorError, Result};
