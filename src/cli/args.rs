use thiserror::Error;
use tracing::warn;

use crate::model::perceptron::Perceptron;
use crate::operation::operation::Operation;
use crate::train::train_config::TrainConfig;

/// Errors produced while turning positional arguments into a run.
#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    /// Fewer than 5 or more than 6 positional arguments.
    #[error("expected 5 or 6 arguments, got {0}")]
    Usage(usize),

    /// A positional value that should be numeric did not parse.
    #[error("invalid value for <{name}>: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Parsed command line: `<t> <alpha> <w1> <w2> <et> [<op>]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// Perceptron firing threshold.
    pub t: f64,
    /// Learning rate.
    pub alpha: f64,
    pub w1: f64,
    pub w2: f64,
    /// Epoch threshold: maximum number of epochs to attempt.
    pub max_epochs: i64,
    pub operation: Operation,
}

impl Args {
    /// Parses positional arguments, excluding the program name.
    ///
    /// A missing or unrecognised operation token yields `Operation::Nand`.
    pub fn parse(args: &[String]) -> Result<Args, CliError> {
        if args.len() < 5 || args.len() > 6 {
            return Err(CliError::Usage(args.len()));
        }

        let operation = match args.get(5) {
            Some(token) => {
                let op = Operation::resolve(token);
                if Operation::lookup(token).is_none() {
                    warn!(token = %token, "unrecognised operation, using {op}");
                }
                op
            }
            None => Operation::default(),
        };

        Ok(Args {
            t: parse_float("t", &args[0])?,
            alpha: parse_float("alpha", &args[1])?,
            w1: parse_float("w1", &args[2])?,
            w2: parse_float("w2", &args[3])?,
            max_epochs: parse_number("et", &args[4])?,
            operation,
        })
    }

    pub fn perceptron(&self) -> Perceptron {
        Perceptron::new(self.w1, self.w2, self.t)
    }

    pub fn train_config(&self) -> TrainConfig {
        TrainConfig::new(self.alpha, self.max_epochs, self.operation)
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::InvalidNumber {
        name,
        value: value.to_owned(),
    })
}

/// Real-valued arguments tolerate surrounding whitespace and a single
/// trailing `d`/`D`/`f`/`F` type suffix (`0.5d`, `2f`). Hexadecimal
/// floating-point literals are not accepted.
fn parse_float(name: &'static str, value: &str) -> Result<f64, CliError> {
    let trimmed = value.trim();
    let literal = trimmed
        .strip_suffix(&['d', 'D', 'f', 'F'][..])
        .filter(|rest| rest.ends_with(|c: char| c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed);
    literal.parse().map_err(|_| CliError::InvalidNumber {
        name,
        value: value.to_owned(),
    })
}
