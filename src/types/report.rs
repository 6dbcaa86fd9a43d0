use serde::{Deserialize, Serialize};

use super::{Bar, Forecast, ForecastStatus, IndicatorSet, Signal, SignalEvent, SignalPolicy};

/// Full analysis bundle for one ticker, consumed by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub ticker: String,
    /// The bars the rest of the report was computed from.
    pub bars: Vec<Bar>,
    pub indicators: IndicatorSet,
    /// Policy the per-bar `signals` sequence was computed under.
    pub policy: SignalPolicy,
    /// Per-bar signals, index-aligned with `bars`.
    pub signals: Vec<Signal>,
    /// Most recent non-Hold crossover event, regardless of `policy`.
    /// Frequently more useful than the final bar's signal, which is
    /// usually Hold under the crossover policy.
    pub latest_cross: Option<SignalEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast: Option<Forecast>,
    pub forecast_status: ForecastStatus,
    /// Unix timestamp (milliseconds) when the report was generated.
    pub generated_at: i64,
}

/// One ticker's failure inside a best-effort scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanFailure {
    pub ticker: String,
    /// Machine-readable cause (`AppError::code`).
    pub code: String,
    pub reason: String,
}

/// Result of a golden-cross scan over a ticker list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    /// Tickers whose most recent bar is an upward cross, in input order.
    pub matches: Vec<String>,
    /// Tickers that could not be evaluated, with the cause retained so
    /// callers can tell "not a cross" from "failed to fetch".
    pub failures: Vec<ScanFailure>,
    /// Total tickers requested.
    pub scanned: usize,
    /// Unix timestamp (milliseconds) when the scan finished.
    pub generated_at: i64,
}
