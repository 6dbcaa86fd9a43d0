//! Golden-cross scan endpoint.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::api::validate_range;
use crate::error::{AppError, Result};
use crate::types::ScanReport;
use crate::AppState;

/// Query parameters for the scan endpoint.
#[derive(Debug, Deserialize)]
pub struct ScanQuery {
    /// Comma-separated ticker list; falls back to the configured
    /// watchlist when omitted.
    pub tickers: Option<String>,
    /// Yahoo lookback range, e.g. "6mo".
    pub range: Option<String>,
}

/// Create the scan router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(run_scan))
}

/// Best-effort golden-cross scan over a ticker list.
async fn run_scan(
    State(state): State<AppState>,
    Query(query): Query<ScanQuery>,
) -> Result<Json<ScanReport>> {
    let tickers: Vec<String> = match query.tickers.as_deref() {
        Some(list) => list
            .split(',')
            .map(|t| t.trim().to_uppercase())
            .filter(|t| !t.is_empty())
            .collect(),
        None => state.config.scan_tickers.clone(),
    };

    if tickers.is_empty() {
        return Err(AppError::BadRequest("Empty ticker list".to_string()));
    }

    let range = validate_range(query.range.as_deref().unwrap_or(&state.config.scan_range))?;

    let report = state.scanner.scan(&tickers, &range).await;
    Ok(Json(report))
}
