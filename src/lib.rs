//! Augur - equity technical-analysis, signal, and forecast server.
//!
//! The pipeline is strictly one-way: the Yahoo loader produces a
//! validated [`types::Series`], the indicator engine derives per-bar
//! sequences from it, the detector and forecast model consume those, and
//! the API layer serializes the bundle for an external presentation
//! layer. Every stage past the loader is a pure function of its series.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

use std::sync::Arc;

use config::Config;
use services::{AnalysisService, Scanner};
use sources::YahooFinanceClient;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub analysis: Arc<AnalysisService>,
    pub scanner: Arc<Scanner>,
}

impl AppState {
    /// Wire the services onto one shared HTTP client pool.
    pub fn new(config: Arc<Config>) -> Self {
        let client = Arc::new(YahooFinanceClient::new(config.http_timeout_secs));
        Self {
            analysis: Arc::new(AnalysisService::new(client.clone())),
            scanner: Arc::new(Scanner::new(client)),
            config,
        }
    }
}
