use serde::{Deserialize, Serialize};

/// One-step-ahead close forecast plus its backward-looking fit quality.
///
/// `mse` is measured on the held-out trailing fraction of the training
/// pairs; the predicted close extrapolates past the end of the series, so
/// the MSE is a fit-quality signal, not an error bound on the prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    /// Predicted next-day closing price.
    pub predicted_close: f64,
    /// Mean squared error over the held-out evaluation pairs.
    pub mse: f64,
    /// Number of pairs used to fit the regressor.
    pub train_size: usize,
    /// Number of held-out pairs behind `mse`.
    pub eval_size: usize,
}

/// Whether the forecast could be computed for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastStatus {
    Ok,
    InsufficientTrainingData,
}
