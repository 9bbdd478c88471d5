//! Central-bank series provider client
//!
//! Envelope: `{observations: [{date: "YYYY-MM-DD", value: "12.3"}]}`.
//! Values arrive as strings and `"."` means missing; both quirks are
//! absorbed here so callers only ever see normalized `{period, value}`
//! observations with real nulls.

use crate::config::DashboardConfig;
use crate::error::{MacroError, Result};
use crate::providers::RawObservation;
use serde::Deserialize;

/// Government debt/GDP series IDs per country. Quarterly for the US,
/// annual elsewhere.
pub const DEBT_TO_GDP_SERIES: &[(&str, &str)] = &[
    ("USA", "GFDEGDQ188S"),
    ("GBR", "GGGDTAGBR188N"),
    ("JPN", "GGGDTAJPN188N"),
    ("DEU", "GGGDTADEU188N"),
    ("FRA", "GGGDTAFRA188N"),
    ("ITA", "GGGDTAITA188N"),
    ("CAN", "GGGDTACAN188N"),
];

pub fn debt_series_id(iso3: &str) -> Option<&'static str> {
    DEBT_TO_GDP_SERIES
        .iter()
        .find(|(code, _)| *code == iso3)
        .map(|(_, id)| *id)
}

#[derive(Debug, Deserialize)]
struct FredEnvelope {
    #[serde(default)]
    observations: Vec<FredObservation>,
}

#[derive(Debug, Deserialize)]
struct FredObservation {
    #[serde(default)]
    date: String,
    #[serde(default)]
    value: String,
}

pub struct FredClient {
    http: reqwest::Client,
    base: String,
    api_key: Option<String>,
}

impl FredClient {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: config.fred_base.clone(),
            api_key: config.fred_api_key.clone(),
        }
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Observations from `observation_start` (`YYYY-MM-DD`) onwards.
    /// Dates are truncated to year-month; `"."` and unparseable values are
    /// dropped rather than surfaced as nulls, matching the provider's own
    /// "no reading" semantics.
    pub async fn observations(
        &self,
        series_id: &str,
        observation_start: &str,
    ) -> Result<Vec<RawObservation>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| MacroError::Config("FRED_API_KEY is not set".to_string()))?;

        let url = format!(
            "{}/series/observations?series_id={}&api_key={}&file_type=json&observation_start={}",
            self.base, series_id, api_key, observation_start
        );

        let envelope: FredEnvelope = self.http.get(&url).send().await?.json().await?;
        Ok(envelope
            .observations
            .into_iter()
            .filter_map(|obs| {
                let value: f64 = obs.value.parse().ok()?;
                let period = obs.date.get(0..7)?.to_string();
                Some(RawObservation {
                    period,
                    value: Some(value),
                })
            })
            .collect())
    }
}
