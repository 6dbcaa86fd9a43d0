use serde::{Deserialize, Serialize};

/// Per-bar derived indicator values for one series.
///
/// Every sequence is index-aligned with the series it derives from, and
/// `None` during that indicator's own warm-up. `None` is a first-class
/// value all the way to the wire (serialized as JSON null) — it is never
/// coerced to zero, which would fabricate Buy/Sell signals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSet {
    /// Simple moving average over the trailing 20 closes.
    pub ma20: Vec<Option<f64>>,
    /// Simple moving average over the trailing 50 closes.
    pub ma50: Vec<Option<f64>>,
    /// Relative Strength Index over a 14-bar window.
    pub rsi14: Vec<Option<f64>>,
    /// MACD line: EMA(12) - EMA(26) of closes.
    pub macd_line: Vec<Option<f64>>,
    /// Signal line: EMA(9) of the MACD line.
    pub macd_signal: Vec<Option<f64>>,
}
