use serde::{Serialize, Deserialize};
use std::fmt;

/// A two-input Boolean function the perceptron is asked to learn.
///
/// `expected()` works on plain `i32` bits rather than `bool` because the NAND
/// target is the unmasked complement `!(x1 & x2)`, i.e. `-1` for a false
/// conjunction and `-2` for a true one. The trainer's error column is computed
/// from that raw value, so it must not be normalized to {0, 1}.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    And,
    Or,
    Xor,
    #[default]
    Nand,
}

impl Operation {
    /// Every operation, in the order the usage text lists them.
    pub const ALL: [Operation; 4] = [
        Operation::And,
        Operation::Or,
        Operation::Xor,
        Operation::Nand,
    ];

    /// Maps a case-sensitive name token to an operation.
    /// Anything that is not `AND`, `OR` or `XOR` resolves to `Nand`.
    pub fn resolve(token: &str) -> Operation {
        match token {
            "AND" => Operation::And,
            "OR" => Operation::Or,
            "XOR" => Operation::Xor,
            _ => Operation::Nand,
        }
    }

    /// Like `resolve`, but reports whether the token was recognised.
    pub fn lookup(token: &str) -> Option<Operation> {
        Operation::ALL.into_iter().find(|op| op.name() == token)
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::And => "AND",
            Operation::Or => "OR",
            Operation::Xor => "XOR",
            Operation::Nand => "NAND",
        }
    }

    /// Target output for the input pair `(x1, x2)`.
    #[inline]
    pub fn expected(self, x1: i32, x2: i32) -> i32 {
        match self {
            Operation::And => x1 & x2,
            Operation::Or => x1 | x2,
            Operation::Xor => x1 ^ x2,
            Operation::Nand => !(x1 & x2),
        }
    }

    /// Whether a single threshold unit can represent this function.
    pub fn is_linearly_separable(self) -> bool {
        !matches!(self, Operation::Xor)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
