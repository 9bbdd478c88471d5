//! Primary statistical provider client
//!
//! The envelope is a two-element JSON array: `[metadata, rows]`, each row
//! `{country: {id, value}, countryiso3code, date, value}` with a nullable
//! value. Aggregate pseudo-codes (e.g. `WLD`) are valid entity codes for a
//! single direct fetch. The provider also returns supranational aggregate
//! rows mixed in with real countries; a fixed denylist of those labels keeps
//! them out of the selectable country list and the map.

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::indicators::{definition, IndicatorKey};
use crate::providers::{CountryValue, IndicatorProvider, RawObservation};
use async_trait::async_trait;
use lazy_static::lazy_static;
use serde::Deserialize;
use std::collections::HashSet;

/// Aggregate entity code for a direct world-level fetch.
pub const WORLD_CODE: &str = "WLD";

/// Provider-side aggregate-region labels. These arrive shaped like
/// countries but are not countries.
pub const AGGREGATE_LABELS: &[&str] = &[
    "East Asia & Pacific",
    "Europe & Central Asia",
    "Latin America & Caribbean",
    "Middle East & North Africa",
    "South Asia",
    "Sub-Saharan Africa",
    "European Union",
    "OECD members",
    "Euro area",
    "Arab World",
    "Central Europe and the Baltics",
    "Caribbean small states",
    "East Asia & Pacific (excluding high income)",
    "East Asia & Pacific (IDA & IBRD countries)",
    "Europe & Central Asia (excluding high income)",
    "Europe & Central Asia (IDA & IBRD countries)",
    "Fragile and conflict affected situations",
    "Heavily indebted poor countries (HIPC)",
    "High income",
    "IBRD only",
    "IDA & IBRD total",
    "IDA blend",
    "IDA only",
    "IDA total",
    "Latin America & Caribbean (excluding high income)",
    "Latin America & the Caribbean (IDA & IBRD countries)",
    "Least developed countries: UN classification",
    "Low & middle income",
    "Low income",
    "Lower middle income",
    "Middle East & North Africa (excluding high income)",
    "Middle East & North Africa (IDA & IBRD countries)",
    "Middle income",
    "Not classified",
    "Other small states",
    "Pacific island small states",
    "Post-demographic dividend",
    "Pre-demographic dividend",
    "Small states",
    "South Asia (IDA & IBRD)",
    "Sub-Saharan Africa (excluding high income)",
    "Sub-Saharan Africa (IDA & IBRD countries)",
    "Upper middle income",
    "World",
];

lazy_static! {
    static ref AGGREGATE_SET: HashSet<&'static str> = AGGREGATE_LABELS.iter().copied().collect();
}

pub fn is_aggregate_label(name: &str) -> bool {
    AGGREGATE_SET.contains(name)
}

#[derive(Clone, Debug, Deserialize)]
pub struct WbCountryRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WbRow {
    pub country: WbCountryRef,
    #[serde(default)]
    pub countryiso3code: String,
    #[serde(default)]
    pub date: String,
    pub value: Option<f64>,
}

pub struct WorldBankClient {
    http: reqwest::Client,
    base: String,
    per_page_full: u32,
    per_page_map: u32,
}

impl WorldBankClient {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: config.world_bank_base.clone(),
            per_page_full: config.per_page_full,
            per_page_map: config.per_page_map,
        }
    }

    /// Raw row fetch. `date` accepts `"2023"` or `"2015:2024"`. A malformed
    /// envelope (no second element, wrong row shape) decodes to an empty row
    /// set rather than an error.
    pub async fn fetch_rows(
        &self,
        entity_code: &str,
        indicator_code: &str,
        per_page: u32,
        date: Option<&str>,
    ) -> Result<Vec<WbRow>> {
        let mut url = format!(
            "{}/country/{}/indicator/{}?format=json&per_page={}",
            self.base, entity_code, indicator_code, per_page
        );
        if let Some(date) = date {
            url.push_str("&date=");
            url.push_str(date);
        }

        let envelope: serde_json::Value = self.http.get(&url).send().await?.json().await?;
        let rows = envelope
            .get(1)
            .cloned()
            .unwrap_or(serde_json::Value::Null);
        Ok(serde_json::from_value(rows).unwrap_or_default())
    }

    /// Names of all selectable countries according to the provider,
    /// aggregates excluded, sorted.
    pub async fn selectable_countries(&self, indicator_code: &str) -> Result<Vec<String>> {
        let rows = self
            .fetch_rows("all", indicator_code, self.per_page_full, None)
            .await?;
        let mut names: Vec<String> = rows
            .into_iter()
            .map(|r| r.country.value)
            .filter(|name| !name.is_empty() && !is_aggregate_label(name))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        names.sort();
        Ok(names)
    }
}

#[async_trait]
impl IndicatorProvider for WorldBankClient {
    async fn fetch_series(
        &self,
        entity_code: &str,
        indicator: IndicatorKey,
        window: Option<(i32, i32)>,
    ) -> Result<Vec<RawObservation>> {
        let date = window.map(|(from, to)| format!("{}:{}", from, to));
        let rows = self
            .fetch_rows(
                entity_code,
                definition(indicator).code,
                self.per_page_full,
                date.as_deref(),
            )
            .await?;
        Ok(rows
            .into_iter()
            .map(|r| RawObservation {
                period: r.date,
                value: r.value,
            })
            .collect())
    }

    async fn year_snapshot(
        &self,
        indicator: IndicatorKey,
        year: i32,
    ) -> Result<Vec<CountryValue>> {
        let rows = self
            .fetch_rows(
                "all",
                definition(indicator).code,
                self.per_page_map,
                Some(&year.to_string()),
            )
            .await?;
        Ok(rows
            .into_iter()
            .filter(|r| !is_aggregate_label(&r.country.value))
            .map(|r| CountryValue {
                iso3: r.countryiso3code,
                name: r.country.value,
                value: r.value,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_denylist() {
        assert!(is_aggregate_label("Euro area"));
        assert!(is_aggregate_label("World"));
        assert!(!is_aggregate_label("France"));
    }

    #[test]
    fn test_row_decoding_tolerates_missing_fields() {
        let json = serde_json::json!([
            {"page": 1},
            [
                {"country": {"id": "FR", "value": "France"}, "countryiso3code": "FRA",
                 "date": "2023", "value": 0.9},
                {"country": {"id": "DE", "value": "Germany"}, "date": "2023", "value": null}
            ]
        ]);
        let rows: Vec<WbRow> =
            serde_json::from_value(json.get(1).cloned().unwrap()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].value, Some(0.9));
        assert_eq!(rows[1].countryiso3code, "");
        assert_eq!(rows[1].value, None);
    }

    #[test]
    fn test_schema_violation_decodes_empty() {
        let envelope = serde_json::json!({"message": "Invalid format"});
        let rows: Vec<WbRow> = serde_json::from_value(
            envelope.get(1).cloned().unwrap_or(serde_json::Value::Null),
        )
        .unwrap_or_default();
        assert!(rows.is_empty());
    }
}
