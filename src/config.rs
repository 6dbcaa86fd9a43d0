use std::env;

/// Default watchlist for the golden-cross scanner.
const DEFAULT_SCAN_TICKERS: &[&str] = &[
    "AAPL", "TSLA", "GOOG", "META", "MSFT", "NVDA", "AMZN", "AMD", "NFLX", "INTC",
];

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Default lookback range for single-ticker analysis (Yahoo range string).
    pub default_range: String,
    /// Default lookback range for the batch scanner.
    pub scan_range: String,
    /// Timeout for loader HTTP requests, in seconds.
    pub http_timeout_secs: u64,
    /// Default watchlist for the scanner when no tickers are given.
    pub scan_tickers: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let scan_tickers = env::var("SCAN_TICKERS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|t| t.trim().to_uppercase())
                    .filter(|t| !t.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SCAN_TICKERS.iter().map(|s| s.to_string()).collect());

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            default_range: env::var("DEFAULT_RANGE").unwrap_or_else(|_| "1y".to_string()),
            scan_range: env::var("SCAN_RANGE").unwrap_or_else(|_| "6mo".to_string()),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            scan_tickers,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_manual_values() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            default_range: "1y".to_string(),
            scan_range: "6mo".to_string(),
            http_timeout_secs: 10,
            scan_tickers: vec!["AAPL".to_string(), "TSLA".to_string()],
        };

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.scan_tickers.len(), 2);
    }

    #[test]
    fn test_default_watchlist_is_uppercase() {
        for ticker in DEFAULT_SCAN_TICKERS {
            assert_eq!(&ticker.to_uppercase(), ticker);
        }
    }

    #[test]
    fn test_config_clone() {
        let config = Config {
            host: "test".to_string(),
            port: 1234,
            default_range: "2y".to_string(),
            scan_range: "3mo".to_string(),
            http_timeout_secs: 5,
            scan_tickers: vec![],
        };

        let cloned = config.clone();
        assert_eq!(cloned.host, config.host);
        assert_eq!(cloned.default_range, config.default_range);
    }
}
