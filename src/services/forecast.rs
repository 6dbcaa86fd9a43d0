//! Forecast model: lag-1 least-squares regression of the next close.

use crate::error::{AppError, Result};
use crate::services::indicators::WARMUP_BARS;
use crate::types::Forecast;

/// Training fraction of the pair set; the trailing remainder evaluates.
const TRAIN_FRACTION: f64 = 0.8;

/// Fit a lag-1 regressor on the closes and predict the next value.
///
/// Pairs `(x = close[i], y = close[i+1])` are built after the indicator
/// warm-up region (the leading `WARMUP_BARS` closes are dropped, matching
/// the bars where the full indicator set is defined), then split by index:
/// the leading 80% fits, the trailing 20% evaluates. No shuffling, so no
/// future data leaks into training.
///
/// The prediction extrapolates from the most recent close, strictly
/// outside the training range; the reported MSE is a backward-looking
/// fit-quality signal only.
pub fn forecast(closes: &[f64]) -> Result<Forecast> {
    let usable = closes.get(WARMUP_BARS..).unwrap_or_default();

    let pairs: Vec<(f64, f64)> = usable.windows(2).map(|w| (w[0], w[1])).collect();
    if pairs.len() < 2 {
        return Err(AppError::InsufficientTrainingData { pairs: pairs.len() });
    }

    let split = ((pairs.len() as f64 * TRAIN_FRACTION).floor() as usize)
        .max(1)
        .min(pairs.len() - 1);
    let (train, eval) = pairs.split_at(split);

    let (slope, intercept) = fit_ols(train);

    let mse = eval
        .iter()
        .map(|(x, y)| {
            let err = (slope * x + intercept) - y;
            err * err
        })
        .sum::<f64>()
        / eval.len() as f64;

    // The most recent close is the last element of the full series, not of
    // the pair set.
    let last_close = *closes.last().expect("non-empty by pairs check");

    Ok(Forecast {
        predicted_close: slope * last_close + intercept,
        mse,
        train_size: train.len(),
        eval_size: eval.len(),
    })
}

/// Closed-form single-feature ordinary least squares.
///
/// A zero-variance feature (constant closes) degenerates to slope 0 with
/// the mean of the targets as intercept.
fn fit_ols(pairs: &[(f64, f64)]) -> (f64, f64) {
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let sxx: f64 = pairs.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();
    let sxy: f64 = pairs
        .iter()
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();

    if sxx.abs() < f64::EPSILON {
        return (0.0, mean_y);
    }

    let slope = sxy / sxx;
    (slope, mean_y - slope * mean_x)
}
