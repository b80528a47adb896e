//! Error types for perceptron-sim

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Writing the trace table failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
