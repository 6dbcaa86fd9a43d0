//! Exponential Moving Average (EMA) indicator.

/// Calculate the per-bar exponential moving average.
///
/// Recurrence: `EMA_t = alpha * x_t + (1 - alpha) * EMA_{t-1}` with
/// `alpha = 2 / (period + 1)`, seeded with the simple mean of the first
/// `period` values. Defined from index `period - 1`.
pub fn ema(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 || values.len() < period {
        return vec![None; values.len()];
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let mut out = vec![None; values.len()];

    // Seed with the SMA of the first `period` values.
    let seed: f64 = values.iter().take(period).sum::<f64>() / period as f64;
    out[period - 1] = Some(seed);

    let mut prev = seed;
    for (i, value) in values.iter().enumerate().skip(period) {
        let next = alpha * value + (1.0 - alpha) * prev;
        out[i] = Some(next);
        prev = next;
    }

    out
}
