//! Indicator engine: per-bar derived sequences from a close-price series.
//!
//! Every function returns sequences index-aligned with its input, with
//! `None` for warm-up bars. A series shorter than a window yields an
//! all-`None` sequence for that indicator rather than an error; callers
//! treat `None` as a first-class value.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use ema::ema;
pub use macd::macd;
pub use rsi::rsi;
pub use sma::sma;

use crate::types::{IndicatorSet, Series};

/// Short moving-average window.
pub const MA_SHORT: usize = 20;
/// Long moving-average window, the largest warm-up in the set.
pub const MA_LONG: usize = 50;
/// RSI lookback window.
pub const RSI_PERIOD: usize = 14;
/// MACD fast EMA period.
pub const MACD_FAST: usize = 12;
/// MACD slow EMA period.
pub const MACD_SLOW: usize = 26;
/// MACD signal-line EMA period.
pub const MACD_SIGNAL: usize = 9;

/// Bars consumed by the longest warm-up; the fully-defined region of an
/// indicator set starts at this index.
pub const WARMUP_BARS: usize = MA_LONG - 1;

/// Compute the full indicator set for a series.
///
/// Recomputed from scratch on every call; the set owns no state beyond
/// the series snapshot it derives from.
pub fn compute(series: &Series) -> IndicatorSet {
    let closes = series.closes();
    let (macd_line, macd_signal) = macd(&closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL);

    IndicatorSet {
        ma20: sma(&closes, MA_SHORT),
        ma50: sma(&closes, MA_LONG),
        rsi14: rsi(&closes, RSI_PERIOD),
        macd_line,
        macd_signal,
    }
}
