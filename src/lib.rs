pub mod error;
pub mod operation;
pub mod model;
pub mod train;
pub mod cli;

// Convenience re-exports
pub use error::{Result, SimError};
pub use operation::operation::Operation;
pub use model::perceptron::Perceptron;
pub use train::loop_fn::train_loop;
pub use train::train_config::TrainConfig;
pub use train::report::TrainingReport;
pub use cli::args::{Args, CliError};
