use crate::calculator::{evaluate, Operation};
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "foldcalc")]
#[command(about = "Run a simple calculator.", long_about = None)]
pub struct Cli {
    /// Operation to apply.
    #[arg(value_parser = PossibleValuesParser::new(Operation::names()))]
    pub operation: String,

    /// Operands to use (at least two).
    #[arg(value_name = "N", required = true, num_args = 1.., allow_negative_numbers = true)]
    pub operands: Vec<f64>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

/// Evaluate the parsed command line and print the result to stdout.
pub fn run_cli(cli: &Cli) -> Result<f64> {
    let result = evaluate(&cli.operation, &cli.operands)?;
    println!("{}", result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_operation_and_operands() {
        let cli = Cli::try_parse_from(["foldcalc", "sub", "10", "5", "2"]).unwrap();
        assert_eq!(cli.operation, "sub");
        assert_eq!(cli.operands, vec![10.0, 5.0, 2.0]);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_accepts_negative_operands() {
        let cli = Cli::try_parse_from(["foldcalc", "add", "-1.5", "-2"]).unwrap();
        assert_eq!(cli.operands, vec![-1.5, -2.0]);
    }

    #[test]
    fn test_rejects_unknown_operation() {
        assert!(Cli::try_parse_from(["foldcalc", "mod", "1", "2"]).is_err());
    }

    #[test]
    fn test_rejects_non_numeric_operand() {
        assert!(Cli::try_parse_from(["foldcalc", "add", "1", "two"]).is_err());
    }

    #[test]
    fn test_requires_an_operand() {
        assert!(Cli::try_parse_from(["foldcalc", "add"]).is_err());
    }

    #[test]
    fn test_run_cli_reports_domain_error() {
        let cli = Cli::try_parse_from(["foldcalc", "add", "1"]).unwrap();
        let err = run_cli(&cli).unwrap_err();
        assert_eq!(err.to_string(), "At least two operands are required.");
    }

    #[test]
    fn test_run_cli_returns_result() {
        let cli = Cli::try_parse_from(["foldcalc", "mul", "2", "3", "4"]).unwrap();
        assert_eq!(run_cli(&cli).unwrap(), 24.0);
    }
}
