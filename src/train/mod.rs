pub mod trainer;
pub mod trace_row;
pub mod epoch_stats;
pub mod train_config;
pub mod report;
pub mod loop_fn;

pub use trainer::train_epoch;
pub use trace_row::{TraceRow, TRACE_HEADER};
pub use epoch_stats::EpochStats;
pub use train_config::TrainConfig;
pub use report::TrainingReport;
pub use loop_fn::train_loop;
