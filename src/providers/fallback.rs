//! Synthetic fallback source
//!
//! Last resort for the extended macro suite when neither real provider has
//! a series. Debt ratios are generated as a random walk from a per-country
//! baseline with fixed pandemic-era drifts; corporate tax comes from a
//! static statutory-rate table. Everything produced here is tagged
//! `Estimated` by the caller and must never masquerade as provider data.

use crate::series::{ObservationPoint, Period, TimeSeries};
use rand::Rng;

/// Statutory corporate tax rates (%), flat across the window.
pub const CORPORATE_TAX_RATES: &[(&str, f64)] = &[
    ("USA", 21.0),
    ("GBR", 19.0),
    ("JPN", 30.62),
    ("DEU", 29.9),
    ("FRA", 25.0),
    ("ITA", 24.0),
    ("CAN", 26.5),
    ("CHN", 25.0),
    ("IND", 30.0),
    ("BRA", 34.0),
];

/// Debt/GDP starting baselines (%) for the synthetic walk.
const DEBT_BASELINES: &[(&str, f64)] = &[
    ("USA", 100.0),
    ("GBR", 85.0),
    ("JPN", 230.0),
    ("DEU", 60.0),
    ("CHN", 65.0),
];

const DEBT_BASELINE_DEFAULT: f64 = 70.0;

pub fn corporate_tax_rate(iso3: &str) -> Option<f64> {
    CORPORATE_TAX_RATES
        .iter()
        .find(|(code, _)| *code == iso3)
        .map(|(_, rate)| *rate)
}

fn debt_baseline(iso3: &str) -> f64 {
    DEBT_BASELINES
        .iter()
        .find(|(code, _)| *code == iso3)
        .map(|(_, b)| *b)
        .unwrap_or(DEBT_BASELINE_DEFAULT)
}

/// Monthly step of the synthetic walk. The 2020-2022 drifts reproduce the
/// observed pandemic debt build-up; other months jitter around flat.
fn monthly_drift(year: i32, month: u32, rng: &mut impl Rng) -> f64 {
    match year {
        2020 if month >= 3 => 2.0,
        2021 => 0.5,
        2022 => 0.3,
        _ => (rng.gen::<f64>() - 0.3) * 0.5,
    }
}

/// Synthetic monthly debt/GDP series over `[from, to]` years inclusive.
pub fn estimated_debt_series(entity: &str, iso3: &str, window: (i32, i32)) -> TimeSeries {
    let mut rng = rand::thread_rng();
    let mut value = debt_baseline(iso3);
    let mut points = Vec::new();

    for year in window.0..=window.1 {
        for month in 1..=12 {
            value += monthly_drift(year, month, &mut rng);
            if value < 0.0 {
                value = 0.0;
            }
            points.push(ObservationPoint::new(
                Period::YearMonth(year, month),
                Some(value),
            ));
        }
    }

    TimeSeries::with_points(entity, points)
}

/// Annual corporate-tax series over `[from, to]`, flat at the statutory
/// rate. Countries outside the table get no series.
pub fn static_corporate_tax_series(
    entity: &str,
    iso3: &str,
    window: (i32, i32),
) -> Option<TimeSeries> {
    let rate = corporate_tax_rate(iso3)?;
    let points = (window.0..=window.1)
        .map(|year| ObservationPoint::new(Period::Year(year), Some(rate)))
        .collect();
    Some(TimeSeries::with_points(entity, points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debt_series_covers_window_monthly() {
        let series = estimated_debt_series("Japan", "JPN", (2015, 2024));
        assert_eq!(series.points.len(), 10 * 12);
        assert_eq!(series.points[0].period, Period::YearMonth(2015, 1));
        assert!(series.points.iter().all(|p| p.value.unwrap() >= 0.0));
    }

    #[test]
    fn test_pandemic_drift_is_deterministic_upward() {
        let series = estimated_debt_series("United States", "USA", (2020, 2020));
        let feb = series.at(Period::YearMonth(2020, 2)).unwrap().value.unwrap();
        let dec = series.at(Period::YearMonth(2020, 12)).unwrap().value.unwrap();
        // Ten fixed +2 steps from March onward dominate any early jitter.
        assert!(dec - feb >= 19.9);
    }

    #[test]
    fn test_corporate_tax_flat_or_absent()  {
        let series = static_corporate_tax_series("France", "FRA", (2020, 2024)).unwrap();
        assert_eq!(series.points.len(), 5);
        assert!(series.points.iter().all(|p| p.value == Some(25.0)));
        assert!(static_corporate_tax_series("Nauru", "NRU", (2020, 2024)).is_none());
    }
}
