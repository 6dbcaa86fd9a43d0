use crate::error::{AppError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day's OHLC data. Immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bar {
    /// Calendar date of the bar.
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    /// Close is the only field consumed by the indicator pipeline.
    pub close: f64,
    pub volume: f64,
}

/// An ordered sequence of daily bars for one ticker.
///
/// Invariant: dates are strictly increasing. Gaps (weekends, holidays) are
/// fine; duplicates and reordering are not, and are rejected at
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    ticker: String,
    bars: Vec<Bar>,
}

impl Series {
    /// Build a series, validating the date invariant.
    pub fn new(ticker: impl Into<String>, bars: Vec<Bar>) -> Result<Self> {
        let ticker = ticker.into().to_uppercase();

        for pair in bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(AppError::InvalidSeries(format!(
                    "{}: bar dates not strictly increasing ({} then {})",
                    ticker, pair[0].date, pair[1].date
                )));
            }
        }

        Ok(Self { ticker, bars })
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Closing prices, index-aligned with `bars()`.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Bar dates, index-aligned with `bars()`.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }
}
