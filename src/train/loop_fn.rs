use std::io::Write;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::model::perceptron::Perceptron;
use crate::train::report::TrainingReport;
use crate::train::trace_row::TRACE_HEADER;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_epoch;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `perceptron` until an epoch finishes without errors or
/// `config.max_epochs` epochs have run, writing the trace table to `out`.
///
/// # Arguments
/// - `perceptron` — initial weights and firing threshold; modified in place
/// - `config`     — learning rate, epoch limit and target operation
/// - `out`        — sink for the header and one row per sample per epoch
///
/// # Termination
/// There is no limit other than `config.max_epochs`. For an operation that is
/// not linearly separable (XOR) the loop always runs the full limit.
///
/// # Errors
/// Returns `SimError::Io` if writing to `out` fails.
pub fn train_loop<W: Write>(
    perceptron: &mut Perceptron,
    config: &TrainConfig,
    out: &mut W,
) -> Result<TrainingReport> {
    if !config.operation.is_linearly_separable() {
        warn!(
            operation = %config.operation,
            max_epochs = config.max_epochs,
            "operation is not linearly separable; training will run until the epoch limit"
        );
    }

    writeln!(out, "{TRACE_HEADER}")?;

    let mut epoch: i64 = 1;
    let mut error = true;
    let mut last_epoch = None;

    while error && epoch <= config.max_epochs {
        let stats = train_epoch(perceptron, config, epoch);

        // ── Emit rows ─────────────────────────────────────────────────────
        for row in &stats.rows {
            writeln!(out, "{row}")?;
        }

        debug!(
            epoch,
            errors = stats.errors,
            w1 = stats.w1,
            w2 = stats.w2,
            "epoch complete"
        );

        error = !stats.converged();
        last_epoch = Some(stats);
        epoch += 1;
    }

    out.flush()?;

    let epochs_run = epoch - 1;
    let converged = !error;
    if converged {
        info!(epochs_run, w1 = perceptron.w1, w2 = perceptron.w2, "converged");
    } else {
        info!(epochs_run, w1 = perceptron.w1, w2 = perceptron.w2, "epoch limit reached without convergence");
    }

    Ok(TrainingReport {
        epochs_run,
        converged,
        perceptron: *perceptron,
        last_epoch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::operation::Operation;

    fn run(p: Perceptron, config: TrainConfig) -> (TrainingReport, Vec<String>) {
        let mut p = p;
        let mut out = Vec::new();
        let report = train_loop(&mut p, &config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        (report, text.lines().map(str::to_owned).collect())
    }

    #[test]
    fn test_and_converges_with_trace() {
        let (report, lines) = run(
            Perceptron::new(0.0, 0.0, 0.5),
            TrainConfig::new(0.5, 10, Operation::And),
        );

        assert!(report.converged);
        assert_eq!(report.epochs_run, 2);
        assert_eq!(report.perceptron.w1, 0.5);
        assert_eq!(report.perceptron.w2, 0.5);

        let expected = vec![
            "Epoch x1 x2 expected actual error   w1   w2",
            "    1  0  0        0      0     0  0.0  0.0",
            "    1  0  1        0      0     0  0.0  0.0",
            "    1  1  0        0      0     0  0.0  0.0",
            "    1  1  1        1      0     1  0.5  0.5",
            "    2  0  0        0      0     0  0.5  0.5",
            "    2  0  1        0      0     0  0.5  0.5",
            "    2  1  0        0      0     0  0.5  0.5",
            "    2  1  1        1      1     0  0.5  0.5",
        ];
        assert_eq!(lines[..9], expected[..]);
        assert_eq!(lines.len(), 1 + 4 * 2);
    }

    #[test]
    fn test_xor_runs_full_limit() {
        let (report, lines) = run(
            Perceptron::new(0.0, 0.0, 0.5),
            TrainConfig::new(0.5, 10, Operation::Xor),
        );

        assert!(!report.converged);
        assert_eq!(report.epochs_run, 10);
        assert_eq!(lines.len(), 1 + 4 * 10);
        assert!(report.last_epoch.unwrap().errors > 0);
    }

    #[test]
    fn test_limit_below_one_prints_only_header() {
        let (report, lines) = run(
            Perceptron::new(0.0, 0.0, 0.5),
            TrainConfig::new(0.5, 0, Operation::And),
        );

        assert_eq!(lines, vec![TRACE_HEADER.to_owned()]);
        assert_eq!(report.epochs_run, 0);
        assert!(!report.converged);
        assert!(report.last_epoch.is_none());
    }

    #[test]
    fn test_already_trained_stops_after_one_epoch() {
        let (report, lines) = run(
            Perceptron::new(1.0, 1.0, 0.5),
            TrainConfig::new(0.5, 10, Operation::Or),
        );

        assert!(report.converged);
        assert_eq!(report.epochs_run, 1);
        assert_eq!(lines.len(), 5);
    }
}
