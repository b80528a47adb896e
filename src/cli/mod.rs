pub mod args;
pub mod usage;

pub use args::{Args, CliError};
pub use usage::usage_text;
