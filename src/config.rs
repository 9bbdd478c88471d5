//! Dashboard configuration
//!
//! Provider endpoints and keys come from the environment (via `.env` in
//! development); windows and lookback bounds have fixed defaults matching
//! the dashboard's display behavior. Loaded once at startup into the
//! context object and never mutated.

use std::env;

#[derive(Clone, Debug)]
pub struct DashboardConfig {
    /// Primary statistical provider base URL.
    pub world_bank_base: String,

    /// Central-bank series provider base URL.
    pub fred_base: String,

    /// API key for the central-bank provider; without it that source is
    /// skipped and the fallback chain continues.
    pub fred_api_key: Option<String>,

    /// Year range requested for chart/table series.
    pub series_window: (i32, i32),

    /// Year range shown in the comparison chart.
    pub chart_window: (i32, i32),

    /// How many prior years the map view retries when the latest year has
    /// no coverage.
    pub lookback_years: i32,

    /// Page size for the full country-list fetch.
    pub per_page_full: u32,

    /// Page size for single-year map snapshots.
    pub per_page_map: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            world_bank_base: "https://api.worldbank.org/v2".to_string(),
            fred_base: "https://api.stlouisfed.org/fred".to_string(),
            fred_api_key: None,
            series_window: (2015, 2024),
            chart_window: (2020, 2024),
            lookback_years: 5,
            per_page_full: 20000,
            per_page_map: 500,
        }
    }
}

impl DashboardConfig {
    /// Defaults overlaid with environment variables. `.env` is honored when
    /// present; a missing file is not an error.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let mut config = Self::default();
        if let Ok(base) = env::var("WORLD_BANK_API_BASE") {
            config.world_bank_base = base;
        }
        if let Ok(base) = env::var("FRED_API_BASE") {
            config.fred_base = base;
        }
        if let Ok(key) = env::var("FRED_API_KEY") {
            if !key.is_empty() {
                config.fred_api_key = Some(key);
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let config = DashboardConfig::default();
        assert!(config.series_window.0 <= config.chart_window.0);
        assert_eq!(config.lookback_years, 5);
        assert!(config.fred_api_key.is_none());
    }
}
