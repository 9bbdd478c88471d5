//! Statistical data providers
//!
//! Each provider returns JSON in its own envelope shape; everything is
//! normalized into `RawObservation` (`{period, value}`) at the provider
//! boundary so the core never sees provider-specific schemas. Schema
//! violations become empty results, never fatal errors.

pub mod boundary;
pub mod fallback;
pub mod fred;
pub mod world_bank;

use crate::error::Result;
use crate::indicators::IndicatorKey;
use crate::series::{ObservationPoint, Period, TimeSeries};
use async_trait::async_trait;

/// The common normalized observation shape all envelopes reduce to.
#[derive(Clone, Debug, PartialEq)]
pub struct RawObservation {
    pub period: String,
    pub value: Option<f64>,
}

/// One country's value in a single-year snapshot (map coverage).
#[derive(Clone, Debug, PartialEq)]
pub struct CountryValue {
    pub iso3: String,
    pub name: String,
    pub value: Option<f64>,
}

/// Seam between the orchestrator and the primary statistical provider.
/// Mock implementations drive the orchestrator tests.
#[async_trait]
pub trait IndicatorProvider: Send + Sync {
    /// Full series for one entity code (country ISO3 or aggregate
    /// pseudo-code) and one indicator, optionally bounded to a year range.
    async fn fetch_series(
        &self,
        entity_code: &str,
        indicator: IndicatorKey,
        window: Option<(i32, i32)>,
    ) -> Result<Vec<RawObservation>>;

    /// All-country values for one indicator in one year, aggregate rows
    /// already excluded.
    async fn year_snapshot(&self, indicator: IndicatorKey, year: i32)
        -> Result<Vec<CountryValue>>;

    /// Most recent usable value for one entity code.
    async fn latest_value(
        &self,
        entity_code: &str,
        indicator: IndicatorKey,
    ) -> Result<Option<f64>> {
        let raw = self.fetch_series(entity_code, indicator, None).await?;
        Ok(to_time_series(entity_code, raw).latest_value())
    }
}

/// Normalize raw observations into an ordered series. Unparseable period
/// strings are dropped; null values are kept as null points.
pub fn to_time_series(entity: &str, raw: Vec<RawObservation>) -> TimeSeries {
    let points = raw
        .into_iter()
        .filter_map(|obs| Period::parse(&obs.period).map(|p| ObservationPoint::new(p, obs.value)))
        .collect();
    TimeSeries::with_points(entity, points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_time_series_drops_garbage_keeps_nulls() {
        let raw = vec![
            RawObservation {
                period: "2022".to_string(),
                value: Some(1.0),
            },
            RawObservation {
                period: "unknown".to_string(),
                value: Some(9.0),
            },
            RawObservation {
                period: "2023".to_string(),
                value: None,
            },
        ];
        let series = to_time_series("X", raw);
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[1].value, None);
    }
}
