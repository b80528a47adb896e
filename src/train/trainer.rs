use crate::{
    model::perceptron::Perceptron,
    train::epoch_stats::EpochStats,
    train::trace_row::TraceRow,
    train::train_config::TrainConfig,
};

/// Runs one epoch over the fixed input universe and returns what it saw.
///
/// Samples are visited as `i = 0..4` with `x1 = i >> 1` and `x2 = i & 1`.
/// Updates are applied to `perceptron` as soon as a sample is misclassified,
/// so later samples of the same epoch are evaluated with the new weights.
pub fn train_epoch(perceptron: &mut Perceptron, config: &TrainConfig, epoch: i64) -> EpochStats {
    // `from_fn` builds the rows in index order, so each sample sees the
    // updates made by the ones before it.
    let rows: [TraceRow; 4] = std::array::from_fn(|i| {
        let x1 = (i >> 1) as i32;
        let x2 = (i & 1) as i32;

        let expected = config.operation.expected(x1, x2);
        let actual = perceptron.activate(x1, x2);
        let error = expected - actual;
        if error != 0 {
            perceptron.apply_delta(x1, x2, error, config.learning_rate);
        }

        TraceRow {
            epoch,
            x1,
            x2,
            expected,
            actual,
            error,
            w1: perceptron.w1,
            w2: perceptron.w2,
        }
    });
    let errors = rows.iter().filter(|row| row.error != 0).count();

    EpochStats {
        epoch,
        rows,
        errors,
        w1: perceptron.w1,
        w2: perceptron.w2,
    }
}
