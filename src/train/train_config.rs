use serde::{Serialize, Deserialize};
use crate::operation::operation::Operation;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `learning_rate` — `alpha` in the delta rule
/// - `max_epochs`    — epoch limit; training stops after this many epochs even
///                     if the last one still had errors. Values below `1`
///                     mean no epoch runs at all.
/// - `operation`     — the Boolean function providing the expected outputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub max_epochs: i64,
    pub operation: Operation,
}

impl TrainConfig {
    pub fn new(learning_rate: f64, max_epochs: i64, operation: Operation) -> Self {
        TrainConfig {
            learning_rate,
            max_epochs,
            operation,
        }
    }
}
