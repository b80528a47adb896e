use serde::{Serialize, Deserialize};
use std::fmt;

/// Column header printed once before the first row.
pub const TRACE_HEADER: &str = "Epoch x1 x2 expected actual error   w1   w2";

/// One evaluated sample, with the weights as they stand after any update it caused.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceRow {
    pub epoch: i64,
    pub x1: i32,
    pub x2: i32,
    pub expected: i32,
    pub actual: i32,
    pub error: i32,
    pub w1: f64,
    pub w2: f64,
}

impl fmt::Display for TraceRow {
    /// Fixed-width columns: 5, 2, 2, 8, 6, 5 for the integers, then both
    /// weights at width 4 with one decimal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:5} {:2} {:2} {:8} {:6} {:5} {:>4} {:>4}",
            self.epoch,
            self.x1,
            self.x2,
            self.expected,
            self.actual,
            self.error,
            fixed_half_up(self.w1, 1),
            fixed_half_up(self.w2, 1),
        )
    }
}

/// Fixed-point rendering of `value` with `precision` decimals, rounding the
/// shortest decimal representation half away from zero (`0.25` -> `0.3`,
/// `0.15` -> `0.2`). The sign of negative zero is kept.
pub fn fixed_half_up(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }

    // `Display` for f64 never uses an exponent and prints the shortest round-trip digits.
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(precision))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes().get(precision).is_some_and(|&d| d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - precision;
    let mut out = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|&d| char::from(b'0' + d)));
    if precision > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|&d| char::from(b'0' + d)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(expected: i32, actual: i32, w1: f64, w2: f64) -> TraceRow {
        TraceRow { epoch: 3, x1: 1, x2: 0, expected, actual, error: expected - actual, w1, w2 }
    }

    #[test]
    fn test_row_layout() {
        assert_eq!(
            row(1, 0, 0.5, 0.0).to_string(),
            "    3  1  0        1      0     1  0.5  0.0"
        );
    }

    #[test]
    fn test_row_layout_negative_values() {
        assert_eq!(
            row(-2, 1, -1.5, 10.0).to_string(),
            "    3  1  0       -2      1    -3 -1.5 10.0"
        );
    }

    #[test]
    fn test_weights_round_half_up() {
        assert_eq!(row(1, 0, 0.25, 0.15).to_string(), "    3  1  0        1      0     1  0.3  0.2");
        assert_eq!(row(1, 0, -0.25, 0.75).to_string(), "    3  1  0        1      0     1 -0.3  0.8");
    }

    #[test]
    fn test_fixed_half_up() {
        assert_eq!(fixed_half_up(0.25, 1), "0.3");
        assert_eq!(fixed_half_up(-0.25, 1), "-0.3");
        assert_eq!(fixed_half_up(0.15, 1), "0.2");
        assert_eq!(fixed_half_up(0.35, 1), "0.4");
        assert_eq!(fixed_half_up(0.24, 1), "0.2");
        assert_eq!(fixed_half_up(9.95, 1), "10.0");
        assert_eq!(fixed_half_up(-9.96, 1), "-10.0");
        assert_eq!(fixed_half_up(2.0, 1), "2.0");
        assert_eq!(fixed_half_up(-0.0, 1), "-0.0");
        assert_eq!(fixed_half_up(-0.04, 1), "-0.0");
        assert_eq!(fixed_half_up(1.0e-7, 1), "0.0");
        assert_eq!(fixed_half_up(0.5, 0), "1");
    }

    #[test]
    fn test_quarter_learning_rate_trace_rounds_up() {
        // AND with alpha = 0.25: the first update lands both weights on 0.25.
        let line = TraceRow { epoch: 1, x1: 1, x2: 1, expected: 1, actual: 0, error: 1, w1: 0.25, w2: 0.25 }
            .to_string();
        assert_eq!(line, "    1  1  1        1      0     1  0.3  0.3");
    }

    #[test]
    fn test_header_lines_up_with_row() {
        let line = row(0, 0, 0.0, 0.0).to_string();
        assert_eq!(TRACE_HEADER.len(), line.len());
    }
}
