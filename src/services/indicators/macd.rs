//! MACD (Moving Average Convergence Divergence) indicator.

use super::ema::ema;

/// Calculate the per-bar MACD line and signal line.
///
/// MACD line = EMA(fast) - EMA(slow) of the closes, defined once both EMAs
/// are (index `slow - 1`). Signal line = EMA(`signal`) of the defined MACD
/// values, re-aligned to the series, so it is defined from index
/// `slow + signal - 2`.
pub fn macd(
    closes: &[f64],
    fast: usize,
    slow: usize,
    signal: usize,
) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
    let n = closes.len();
    let fast_ema = ema(closes, fast);
    let slow_ema = ema(closes, slow);

    let mut line = vec![None; n];
    for i in 0..n {
        if let (Some(f), Some(s)) = (fast_ema[i], slow_ema[i]) {
            line[i] = Some(f - s);
        }
    }

    let mut signal_line = vec![None; n];
    if let Some(offset) = line.iter().position(Option::is_some) {
        let dense: Vec<f64> = line[offset..].iter().map(|v| v.unwrap_or(0.0)).collect();
        for (i, v) in ema(&dense, signal).into_iter().enumerate() {
            signal_line[offset + i] = v;
        }
    }

    (line, signal_line)
}
