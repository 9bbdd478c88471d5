//! Uniform time-series model
//!
//! Every provider response is normalized into `TimeSeries` before anything
//! downstream touches it. Values stay `Option<f64>`: a missing observation
//! propagates as `None` and is never coerced to zero.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A calendar period key: a plain year or a year-month.
///
/// Equality is defined on the identifier, so `Year(2022)` and
/// `YearMonth(2022, 1)` are distinct periods even though they overlap
/// in calendar time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    Year(i32),
    YearMonth(i32, u32),
}

impl Period {
    /// Parse a provider period string: `"2022"`, `"2022-03"`, or a full
    /// date (`"2022-03-01"`) which is truncated to year-month.
    pub fn parse(raw: &str) -> Option<Period> {
        let raw = raw.trim();
        let mut parts = raw.splitn(3, '-');
        let year: i32 = parts.next()?.parse().ok()?;
        match parts.next() {
            Some(month) => {
                let month: u32 = month.parse().ok()?;
                if (1..=12).contains(&month) {
                    Some(Period::YearMonth(year, month))
                } else {
                    None
                }
            }
            None => Some(Period::Year(year)),
        }
    }

    pub fn year(&self) -> i32 {
        match *self {
            Period::Year(y) => y,
            Period::YearMonth(y, _) => y,
        }
    }

    pub fn month(&self) -> Option<u32> {
        match *self {
            Period::Year(_) => None,
            Period::YearMonth(_, m) => Some(m),
        }
    }

    /// The comparable period one year earlier: same month, year minus one.
    pub fn prior_year(&self) -> Period {
        match *self {
            Period::Year(y) => Period::Year(y - 1),
            Period::YearMonth(y, m) => Period::YearMonth(y - 1, m),
        }
    }

    /// Sort key. Months are 1-based, so a bare year never collides with
    /// a year-month of the same year.
    fn sort_key(&self) -> (i32, u32) {
        match *self {
            Period::Year(y) => (y, 0),
            Period::YearMonth(y, m) => (y, m),
        }
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Period::Year(y) => write!(f, "{}", y),
            Period::YearMonth(y, m) => write!(f, "{}-{:02}", y, m),
        }
    }
}

/// One observation for one entity at one period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObservationPoint {
    pub period: Period,

    /// Absent means the provider reported no value. Never zero-filled.
    pub value: Option<f64>,

    /// Year-over-year percent change, set by the derived-metric calculator.
    pub yoy: Option<f64>,

    /// Month-over-month percent change, set by the derived-metric calculator.
    pub mom: Option<f64>,
}

impl ObservationPoint {
    pub fn new(period: Period, value: Option<f64>) -> Self {
        Self {
            period,
            value,
            yoy: None,
            mom: None,
        }
    }
}

/// An ordered-by-period series for a single entity (country or region).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub entity: String,
    pub points: Vec<ObservationPoint>,
}

impl TimeSeries {
    pub fn empty(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            points: Vec::new(),
        }
    }

    pub fn with_points(entity: impl Into<String>, mut points: Vec<ObservationPoint>) -> Self {
        points.sort_by_key(|p| p.period);
        Self {
            entity: entity.into(),
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the series carries any usable (non-null) value at all.
    pub fn has_values(&self) -> bool {
        self.points.iter().any(|p| p.value.is_some())
    }

    /// Most recent non-null value, scanning from the newest period backwards.
    pub fn latest_value(&self) -> Option<f64> {
        self.points.iter().rev().find_map(|p| p.value)
    }

    /// First observation at exactly this period, if any.
    pub fn at(&self, period: Period) -> Option<&ObservationPoint> {
        self.points.iter().find(|p| p.period == period)
    }

    /// Drop points outside `[from, to]` (inclusive, by period ordering).
    pub fn restrict(&mut self, from: Period, to: Period) {
        self.points.retain(|p| p.period >= from && p.period <= to);
    }
}

/// Data provenance for a fetched series.
///
/// A synthetic fallback must never travel the same code path as real
/// provider data without this marker.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    /// Returned by a real statistical provider.
    Real(TimeSeries),
    /// Synthesized locally because no real source had data.
    Estimated(TimeSeries),
    /// Nothing usable from any source.
    Unavailable,
}

impl FetchOutcome {
    pub fn series(&self) -> Option<&TimeSeries> {
        match self {
            FetchOutcome::Real(s) | FetchOutcome::Estimated(s) => Some(s),
            FetchOutcome::Unavailable => None,
        }
    }

    pub fn into_series(self) -> Option<TimeSeries> {
        match self {
            FetchOutcome::Real(s) | FetchOutcome::Estimated(s) => Some(s),
            FetchOutcome::Unavailable => None,
        }
    }

    pub fn is_estimated(&self) -> bool {
        matches!(self, FetchOutcome::Estimated(_))
    }

    /// Apply a transform to the carried series, preserving provenance.
    pub fn map_series(self, f: impl FnOnce(TimeSeries) -> TimeSeries) -> FetchOutcome {
        match self {
            FetchOutcome::Real(s) => FetchOutcome::Real(f(s)),
            FetchOutcome::Estimated(s) => FetchOutcome::Estimated(f(s)),
            FetchOutcome::Unavailable => FetchOutcome::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_period_variants() {
        assert_eq!(Period::parse("2022"), Some(Period::Year(2022)));
        assert_eq!(Period::parse("2022-03"), Some(Period::YearMonth(2022, 3)));
        assert_eq!(
            Period::parse("2022-03-15"),
            Some(Period::YearMonth(2022, 3))
        );
        assert_eq!(Period::parse("n/a"), None);
        assert_eq!(Period::parse("2022-13"), None);
    }

    #[test]
    fn test_period_ordering() {
        assert!(Period::Year(2021) < Period::Year(2022));
        assert!(Period::Year(2022) < Period::YearMonth(2022, 1));
        assert!(Period::YearMonth(2022, 1) < Period::YearMonth(2022, 2));
    }

    #[test]
    fn test_latest_value_skips_trailing_null() {
        let series = TimeSeries::with_points(
            "Japan",
            vec![
                ObservationPoint::new(Period::Year(2022), Some(1.0)),
                ObservationPoint::new(Period::Year(2023), None),
            ],
        );
        assert_eq!(series.latest_value(), Some(1.0));
    }
}
