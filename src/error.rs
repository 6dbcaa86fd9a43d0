use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error types.
///
/// The first three variants are the recoverable domain errors: a single
/// ticker failing with any of them never aborts a batch scan.
#[derive(Error, Debug)]
pub enum AppError {
    /// Loader returned no bars, or the ticker is unknown upstream.
    #[error("No data for ticker: {0}")]
    NoData(String),

    /// Series is shorter than the window the operation requires.
    #[error("Insufficient history: need {required} bars, have {actual}")]
    InsufficientHistory { required: usize, actual: usize },

    /// Fewer than 2 usable training pairs for the forecast model.
    #[error("Insufficient training data: {pairs} usable pairs")]
    InsufficientTrainingData { pairs: usize },

    /// Loaded bars violate the series invariants (ordering, duplicates).
    #[error("Invalid series: {0}")]
    InvalidSeries(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl AppError {
    /// Short machine-readable code, used by the scan failure map.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NoData(_) => "no_data",
            AppError::InsufficientHistory { .. } => "insufficient_history",
            AppError::InsufficientTrainingData { .. } => "insufficient_training_data",
            AppError::InvalidSeries(_) => "invalid_series",
            AppError::BadRequest(_) => "bad_request",
            AppError::ExternalApi(_) => "external_api",
            AppError::Reqwest(_) => "http",
            AppError::SerdeJson(_) => "serde",
            AppError::Anyhow(_) => "internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NoData(t) => (StatusCode::NOT_FOUND, format!("No data for ticker: {}", t)),
            AppError::InsufficientHistory { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            AppError::InsufficientTrainingData { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            AppError::InvalidSeries(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::ExternalApi(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::Reqwest(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            AppError::SerdeJson(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Anyhow(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        let body = Json(json!({
            "error": message,
            "code": self.code(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
