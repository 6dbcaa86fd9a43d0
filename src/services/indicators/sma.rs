//! Simple Moving Average (SMA) indicator.

/// Calculate the per-bar simple moving average.
///
/// Element `i` is the arithmetic mean of `closes[i - period + 1..=i]` once
/// `i >= period - 1`, and `None` during the warm-up. A series shorter than
/// the window yields an all-`None` sequence, not an error.
pub fn sma(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; closes.len()];
    }

    let mut out = Vec::with_capacity(closes.len());
    let mut window_sum = 0.0;

    for (i, close) in closes.iter().enumerate() {
        window_sum += close;
        if i >= period {
            window_sum -= closes[i - period];
        }

        if i + 1 >= period {
            out.push(Some(window_sum / period as f64));
        } else {
            out.push(None);
        }
    }

    out
}
