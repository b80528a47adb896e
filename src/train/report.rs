use serde::{Serialize, Deserialize};
use crate::model::perceptron::Perceptron;
use crate::train::epoch_stats::EpochStats;

/// Outcome of a `train_loop` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Number of epochs actually executed.
    pub epochs_run: i64,
    /// True when the last executed epoch had no errors.
    pub converged: bool,
    /// Model state after the final epoch.
    pub perceptron: Perceptron,
    /// Summary of the final epoch, if any epoch ran.
    pub last_epoch: Option<EpochStats>,
}
