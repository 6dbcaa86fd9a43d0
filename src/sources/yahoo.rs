//! Yahoo Finance API client for historical daily bars.
//!
//! Uses the unofficial Yahoo Finance v8 chart API. The only network
//! suspend point in the service; every request is bounded by the
//! configured client timeout, so a dead upstream surfaces as a typed
//! error rather than a hang.

use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::types::{Bar, Series};

/// Lookback ranges the chart API accepts for daily bars.
pub const VALID_RANGES: &[&str] = &[
    "1mo", "3mo", "6mo", "1y", "2y", "5y", "10y", "ytd", "max",
];

/// Yahoo Finance chart response.
#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooResult>>,
    error: Option<YahooError>,
}

#[derive(Debug, Deserialize)]
struct YahooError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct YahooResult {
    timestamp: Option<Vec<i64>>,
    indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooIndicators {
    quote: Vec<YahooQuote>,
}

#[derive(Debug, Deserialize)]
struct YahooQuote {
    open: Option<Vec<Option<f64>>>,
    high: Option<Vec<Option<f64>>>,
    low: Option<Vec<Option<f64>>>,
    close: Option<Vec<Option<f64>>>,
    volume: Option<Vec<Option<u64>>>,
}

/// Normalize symbol for Yahoo Finance API.
/// Yahoo uses hyphens instead of dots for share classes (e.g., BRK-B not BRK.B)
fn normalize_yahoo_symbol(symbol: &str) -> String {
    symbol.to_uppercase().replace('.', "-")
}

/// Yahoo Finance API client.
pub struct YahooFinanceClient {
    client: Client,
}

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client with the given request timeout.
    pub fn new(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch daily bars for a ticker over a lookback range.
    ///
    /// An unknown ticker or a response with no usable rows yields
    /// `NoData`; a malformed bar ordering yields `InvalidSeries`.
    pub async fn daily_history(&self, ticker: &str, range: &str) -> Result<Series> {
        let symbol = normalize_yahoo_symbol(ticker);
        let url = format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{}?range={}&interval=1d&includePrePost=false",
            symbol, range
        );

        debug!("Fetching Yahoo Finance data: {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NoData(symbol));
        }
        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "Yahoo API status: {}",
                response.status()
            )));
        }

        let data: YahooChartResponse = response.json().await?;

        if let Some(error) = data.chart.error {
            return Err(AppError::ExternalApi(format!(
                "Yahoo API error: {} - {}",
                error.code, error.description
            )));
        }

        let result = data
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| AppError::NoData(symbol.clone()))?;

        let timestamps = result.timestamp.unwrap_or_default();
        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NoData(symbol.clone()))?;

        let opens = quote.open.unwrap_or_default();
        let highs = quote.high.unwrap_or_default();
        let lows = quote.low.unwrap_or_default();
        let closes = quote.close.unwrap_or_default();
        let volumes = quote.volume.unwrap_or_default();

        let mut bars = Vec::with_capacity(timestamps.len());
        for (i, &timestamp) in timestamps.iter().enumerate() {
            // Rows with a missing or non-positive close are half-filled
            // placeholder rows; skip them rather than zero-fill.
            let close = match closes.get(i).and_then(|v| *v) {
                Some(c) if c > 0.0 => c,
                _ => continue,
            };

            let Some(date) = DateTime::from_timestamp(timestamp, 0).map(|dt| dt.date_naive())
            else {
                continue;
            };

            bars.push(Bar {
                date,
                open: opens.get(i).and_then(|v| *v).unwrap_or(close),
                high: highs.get(i).and_then(|v| *v).unwrap_or(close),
                low: lows.get(i).and_then(|v| *v).unwrap_or(close),
                close,
                volume: volumes.get(i).and_then(|v| *v).unwrap_or(0) as f64,
            });
        }

        if bars.is_empty() {
            return Err(AppError::NoData(symbol));
        }

        debug!("{}: {} daily bars over {}", symbol, bars.len(), range);
        Series::new(symbol, bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_yahoo_symbol() {
        assert_eq!(normalize_yahoo_symbol("aapl"), "AAPL");
        assert_eq!(normalize_yahoo_symbol("BRK.B"), "BRK-B");
        assert_eq!(normalize_yahoo_symbol("brk.a"), "BRK-A");
    }

    #[test]
    fn test_valid_ranges_cover_defaults() {
        assert!(VALID_RANGES.contains(&"1y"));
        assert!(VALID_RANGES.contains(&"6mo"));
    }

    #[test]
    fn test_chart_response_parsing() {
        let json = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1704153600, 1704240000],
                    "indicators": {
                        "quote": [{
                            "open": [184.2, 185.0],
                            "high": [186.0, 186.4],
                            "low": [183.9, 184.1],
                            "close": [185.6, null],
                            "volume": [52000000, 48000000]
                        }]
                    }
                }],
                "error": null
            }
        }"#;

        let parsed: YahooChartResponse = serde_json::from_str(json).unwrap();
        let result = &parsed.chart.result.as_ref().unwrap()[0];
        assert_eq!(result.timestamp.as_ref().unwrap().len(), 2);

        let quote = &result.indicators.quote[0];
        assert_eq!(quote.close.as_ref().unwrap()[0], Some(185.6));
        assert_eq!(quote.close.as_ref().unwrap()[1], None);
    }

    #[test]
    fn test_chart_error_parsing() {
        let json = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found"}
            }
        }"#;

        let parsed: YahooChartResponse = serde_json::from_str(json).unwrap();
        let error = parsed.chart.error.unwrap();
        assert_eq!(error.code, "Not Found");
    }
}
