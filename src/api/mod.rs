pub mod analysis;
pub mod health;
pub mod scan;

use crate::error::{AppError, Result};
use crate::sources::yahoo::VALID_RANGES;
use crate::AppState;
use axum::Router;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/api/analysis", analysis::router())
        .nest("/api/scan", scan::router())
}

/// Reject lookback ranges the chart API does not accept for daily bars.
pub(crate) fn validate_range(range: &str) -> Result<String> {
    let range = range.to_lowercase();
    if VALID_RANGES.contains(&range.as_str()) {
        Ok(range)
    } else {
        Err(AppError::BadRequest(format!(
            "Unknown range: {} (expected one of {})",
            range,
            VALID_RANGES.join(", ")
        )))
    }
}
