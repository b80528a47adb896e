use serde::{Serialize, Deserialize};
use crate::train::trace_row::TraceRow;

/// Everything one pass over the four samples produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: i64,
    /// Rows in evaluation order: (0,0), (0,1), (1,0), (1,1).
    pub rows: [TraceRow; 4],
    /// Number of samples with a nonzero error in this epoch.
    pub errors: usize,
    pub w1: f64,
    pub w2: f64,
}

impl EpochStats {
    pub fn converged(&self) -> bool {
        self.errors == 0
    }
}
