use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use perceptron_sim::cli::usage_text;
use perceptron_sim::{train_loop, Args, CliError};

const PROGRAM: &str = "perceptron-sim";

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the trace table.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let argv: Vec<String> = std::env::args().skip(1).collect();

    let args = match Args::parse(&argv) {
        Ok(args) => args,
        Err(CliError::Usage(_)) => {
            eprintln!("{}", usage_text(PROGRAM));
            return ExitCode::from(1);
        }
        Err(e) => {
            eprintln!("{PROGRAM}: {e}");
            return ExitCode::from(1);
        }
    };

    let mut perceptron = args.perceptron();
    let config = args.train_config();

    let mut out = std::io::stdout().lock();
    match train_loop(&mut perceptron, &config, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{PROGRAM}: {e}");
            ExitCode::from(1)
        }
    }
}
