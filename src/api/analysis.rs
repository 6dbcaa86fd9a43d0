//! Single-ticker analysis endpoint.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::api::validate_range;
use crate::error::{AppError, Result};
use crate::types::{AnalysisReport, SignalPolicy};
use crate::AppState;

/// Query parameters for the analysis endpoint.
#[derive(Debug, Deserialize)]
pub struct AnalysisQuery {
    /// Signal policy: "level" or "crossover". Defaults to crossover.
    pub policy: Option<String>,
    /// Yahoo lookback range, e.g. "6mo", "1y".
    pub range: Option<String>,
}

/// Create the analysis router.
pub fn router() -> Router<AppState> {
    Router::new().route("/:ticker", get(get_analysis))
}

/// Full analysis bundle for one ticker.
async fn get_analysis(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
    Query(query): Query<AnalysisQuery>,
) -> Result<Json<AnalysisReport>> {
    let policy = match query.policy.as_deref() {
        Some(p) => SignalPolicy::from_str(p)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown signal policy: {}", p)))?,
        None => SignalPolicy::default(),
    };

    let range = validate_range(query.range.as_deref().unwrap_or(&state.config.default_range))?;

    let report = state.analysis.analyze(&ticker, &range, policy).await?;
    Ok(Json(report))
}
