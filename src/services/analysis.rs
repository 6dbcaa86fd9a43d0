//! Analysis orchestrator: load -> indicators -> signals -> forecast.

use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::services::{detector, forecast, indicators};
use crate::sources::YahooFinanceClient;
use crate::types::{AnalysisReport, ForecastStatus, Series, SignalPolicy};

/// Assemble the full analysis bundle for an already-loaded series.
///
/// Pure function of the series snapshot: recomputes everything, shares no
/// state across calls. The forecast is best-effort — too little history
/// downgrades it to a reported status instead of failing the analysis.
pub fn analyze_series(series: &Series, policy: SignalPolicy) -> AnalysisReport {
    let indicator_set = indicators::compute(series);
    let signals = detector::detect(&indicator_set.ma20, &indicator_set.ma50, policy);

    // The latest-event summary always uses the crossover policy: "when did
    // the trend last turn" is only meaningful for fire-once signals.
    let cross_signals = match policy {
        SignalPolicy::Crossover => signals.clone(),
        SignalPolicy::Level => {
            detector::detect(&indicator_set.ma20, &indicator_set.ma50, SignalPolicy::Crossover)
        }
    };
    let latest_cross = detector::latest_event(series, &cross_signals);

    let (forecast, forecast_status) = match forecast::forecast(&series.closes()) {
        Ok(f) => (Some(f), ForecastStatus::Ok),
        Err(e) => {
            debug!("{}: forecast skipped: {}", series.ticker(), e);
            (None, ForecastStatus::InsufficientTrainingData)
        }
    };

    AnalysisReport {
        ticker: series.ticker().to_string(),
        bars: series.bars().to_vec(),
        indicators: indicator_set,
        policy,
        signals,
        latest_cross,
        forecast,
        forecast_status,
        generated_at: chrono::Utc::now().timestamp_millis(),
    }
}

/// Single-ticker analysis over the price loader.
pub struct AnalysisService {
    client: Arc<YahooFinanceClient>,
}

impl AnalysisService {
    pub fn new(client: Arc<YahooFinanceClient>) -> Self {
        Self { client }
    }

    pub async fn analyze(
        &self,
        ticker: &str,
        range: &str,
        policy: SignalPolicy,
    ) -> Result<AnalysisReport> {
        let series = self.client.daily_history(ticker, range).await?;
        Ok(analyze_series(&series, policy))
    }
}
