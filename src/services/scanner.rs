//! Golden-cross scanner: best-effort batch over a ticker list.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::services::{detector, indicators};
use crate::sources::YahooFinanceClient;
use crate::types::{ScanFailure, ScanReport, Series, Signal, SignalPolicy};

/// Whether the most recent bar of the series is an upward cross (Buy under
/// the crossover policy at the final index).
///
/// A series shorter than the long window cannot host a cross and is
/// reported as `InsufficientHistory` so callers can tell it apart from a
/// genuine "no cross".
pub fn is_golden_cross(series: &Series) -> Result<bool> {
    if series.len() < indicators::MA_LONG {
        return Err(AppError::InsufficientHistory {
            required: indicators::MA_LONG,
            actual: series.len(),
        });
    }

    let closes = series.closes();
    let ma20 = indicators::sma(&closes, indicators::MA_SHORT);
    let ma50 = indicators::sma(&closes, indicators::MA_LONG);
    let signals = detector::detect(&ma20, &ma50, SignalPolicy::Crossover);

    Ok(signals.last() == Some(&Signal::Buy))
}

/// Classify already-loaded per-ticker results into a scan report.
///
/// Output order follows input order. Per-ticker failures land in the
/// failure map with their cause; they never abort the batch.
pub fn scan_loaded(entries: Vec<(String, Result<Series>)>) -> ScanReport {
    let scanned = entries.len();
    let mut matches = Vec::new();
    let mut failures = Vec::new();

    for (ticker, loaded) in entries {
        match loaded.and_then(|series| is_golden_cross(&series)) {
            Ok(true) => {
                debug!("{}: golden cross at latest bar", ticker);
                matches.push(ticker);
            }
            Ok(false) => {}
            Err(e) => {
                warn!("{}: excluded from scan: {}", ticker, e);
                failures.push(ScanFailure {
                    ticker,
                    code: e.code().to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    ScanReport {
        matches,
        failures,
        scanned,
        generated_at: chrono::Utc::now().timestamp_millis(),
    }
}

/// Batch scanner over the price loader.
pub struct Scanner {
    client: Arc<YahooFinanceClient>,
}

impl Scanner {
    pub fn new(client: Arc<YahooFinanceClient>) -> Self {
        Self { client }
    }

    /// Scan a ticker list sequentially; per-ticker work is independent and
    /// the report order is the input order by construction.
    pub async fn scan(&self, tickers: &[String], range: &str) -> ScanReport {
        let mut entries = Vec::with_capacity(tickers.len());
        for ticker in tickers {
            let loaded = self.client.daily_history(ticker, range).await;
            entries.push((ticker.to_uppercase(), loaded));
        }

        scan_loaded(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Bar;
    use chrono::NaiveDate;

    fn series(ticker: &str, closes: &[f64]) -> Series {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Bar {
                date: start + chrono::Days::new(i as u64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1000.0,
            })
            .collect();
        Series::new(ticker, bars).unwrap()
    }

    /// 60 closes whose final bar crosses MA20 above MA50: a long decline
    /// keeps MA20 below, then a sharp rally at the end flips the order on
    /// the last bar.
    fn crossing_closes() -> Vec<f64> {
        let mut closes: Vec<f64> = (0..55).map(|i| 200.0 - i as f64).collect();
        closes.extend((0..5).map(|i| 146.0 + 40.0 * (i + 1) as f64));
        closes
    }

    fn flat_closes() -> Vec<f64> {
        vec![100.0; 60]
    }

    #[test]
    fn test_crossing_fixture_actually_crosses() {
        assert!(is_golden_cross(&series("X", &crossing_closes())).unwrap());
    }

    #[test]
    fn test_flat_series_is_not_a_cross() {
        assert!(!is_golden_cross(&series("X", &flat_closes())).unwrap());
    }

    #[test]
    fn test_sustained_uptrend_is_not_a_fresh_cross() {
        // MA20 has been above MA50 for a while; the final bar holds.
        let closes: Vec<f64> = (0..90).map(|i| 100.0 + i as f64).collect();
        assert!(!is_golden_cross(&series("X", &closes)).unwrap());
    }

    #[test]
    fn test_short_series_is_insufficient_history() {
        let err = is_golden_cross(&series("X", &[100.0; 30])).unwrap_err();
        assert!(matches!(
            err,
            AppError::InsufficientHistory {
                required: 50,
                actual: 30
            }
        ));
    }

    #[test]
    fn test_scan_returns_only_crossing_ticker_in_input_order() {
        let entries = vec![
            ("AAPL".to_string(), Ok(series("AAPL", &flat_closes()))),
            ("TSLA".to_string(), Ok(series("TSLA", &crossing_closes()))),
            ("GOOG".to_string(), Ok(series("GOOG", &flat_closes()))),
        ];

        let report = scan_loaded(entries);
        assert_eq!(report.matches, vec!["TSLA".to_string()]);
        assert_eq!(report.scanned, 3);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_scan_retains_failure_reasons() {
        let entries = vec![
            ("FAKE".to_string(), Err(AppError::NoData("FAKE".into()))),
            ("TSLA".to_string(), Ok(series("TSLA", &crossing_closes()))),
            ("NEWCO".to_string(), Ok(series("NEWCO", &[100.0; 10]))),
        ];

        let report = scan_loaded(entries);
        assert_eq!(report.matches, vec!["TSLA".to_string()]);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[0].ticker, "FAKE");
        assert_eq!(report.failures[0].code, "no_data");
        assert_eq!(report.failures[1].ticker, "NEWCO");
        assert_eq!(report.failures[1].code, "insufficient_history");
    }

    #[test]
    fn test_scan_empty_input() {
        let report = scan_loaded(vec![]);
        assert!(report.matches.is_empty());
        assert!(report.failures.is_empty());
        assert_eq!(report.scanned, 0);
    }
}
