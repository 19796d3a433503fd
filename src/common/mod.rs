pub mod error;

pub use error::{CalculatorError, Result};
