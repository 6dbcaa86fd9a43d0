use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-bar trading signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

/// How buy/sell signals are derived from the MA20/MA50 pair.
///
/// The two policies answer different questions and must never be
/// conflated:
/// - `Level` is state-free "currently bullish": Buy on every bar where
///   MA20 sits above MA50.
/// - `Crossover` is "just turned bullish": Buy only on the bar where MA20
///   crosses above MA50, Hold for the rest of the trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SignalPolicy {
    Level,
    #[default]
    Crossover,
}

impl SignalPolicy {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "level" => Some(Self::Level),
            "crossover" | "cross" => Some(Self::Crossover),
            _ => None,
        }
    }

    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::Crossover => "crossover",
        }
    }
}

/// A non-Hold signal paired with the date it fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalEvent {
    pub signal: Signal,
    pub date: NaiveDate,
}
