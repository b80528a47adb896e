use serde::{Serialize, Deserialize};

/// A single threshold unit with two inputs.
///
/// Fires (outputs `1`) when `w1*x1 + w2*x2` is strictly greater than
/// `threshold`; a weighted sum landing exactly on the threshold classifies as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Perceptron {
    pub w1: f64,
    pub w2: f64,
    pub threshold: f64,
}

impl Perceptron {
    pub fn new(w1: f64, w2: f64, threshold: f64) -> Perceptron {
        Perceptron { w1, w2, threshold }
    }

    /// Weighted input sum, before the threshold is applied.
    pub fn weighted_sum(&self, x1: i32, x2: i32) -> f64 {
        self.w1 * x1 as f64 + self.w2 * x2 as f64
    }

    /// Hard classification of `(x1, x2)`: `1` or `0`.
    pub fn activate(&self, x1: i32, x2: i32) -> i32 {
        if self.weighted_sum(x1, x2) > self.threshold { 1 } else { 0 }
    }

    /// Delta rule: `w_k += learning_rate * x_k * error`, applied immediately.
    /// The firing threshold itself is never trained.
    pub fn apply_delta(&mut self, x1: i32, x2: i32, error: i32, learning_rate: f64) {
        self.w1 += learning_rate * x1 as f64 * error as f64;
        self.w2 += learning_rate * x2 as f64 * error as f64;
    }
}
