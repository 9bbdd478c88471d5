//! Derived-Metric Calculator
//!
//! Year-over-year and month-over-month percentage change, attached to each
//! observation as an extra field. A derived value is left unset whenever the
//! comparable prior point is missing, either value is null, or the
//! denominator is zero - it is never inferred.

use crate::series::TimeSeries;

fn percent_change(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}

/// Attach `yoy` to every point that has a comparable observation exactly one
/// year earlier (same month, year minus one).
pub fn year_over_year(series: &TimeSeries) -> TimeSeries {
    let mut out = series.clone();
    for idx in 0..out.points.len() {
        let current = &out.points[idx];
        let Some(current_value) = current.value else {
            continue;
        };
        let prior = current.period.prior_year();
        let yoy = series
            .at(prior)
            .and_then(|p| p.value)
            .and_then(|prev| percent_change(current_value, prev));
        out.points[idx].yoy = yoy;
    }
    out
}

/// Attach `mom` to every point after the first, computed against the
/// immediate predecessor once the series is sorted ascending by period.
pub fn month_over_month(series: &TimeSeries) -> TimeSeries {
    let mut out = series.clone();
    out.points.sort_by_key(|p| p.period);
    for idx in 1..out.points.len() {
        let previous = out.points[idx - 1].value;
        let current = out.points[idx].value;
        out.points[idx].mom = match (current, previous) {
            (Some(c), Some(p)) => percent_change(c, p),
            _ => None,
        };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{ObservationPoint, Period};

    fn monthly(entity: &str, points: &[((i32, u32), Option<f64>)]) -> TimeSeries {
        TimeSeries::with_points(
            entity,
            points
                .iter()
                .map(|&((y, m), v)| ObservationPoint::new(Period::YearMonth(y, m), v))
                .collect(),
        )
    }

    #[test]
    fn test_yoy_matches_same_month_prior_year() {
        let series = monthly(
            "USA",
            &[((2020, 12), Some(90.0)), ((2021, 12), Some(100.0))],
        );
        let derived = year_over_year(&series);
        let point = derived.at(Period::YearMonth(2021, 12)).unwrap();
        let yoy = point.yoy.unwrap();
        assert!((yoy - 11.111111).abs() < 1e-4, "got {}", yoy);
        // The first point has no prior-year match.
        assert!(derived.at(Period::YearMonth(2020, 12)).unwrap().yoy.is_none());
    }

    #[test]
    fn test_yoy_unset_on_null_or_zero_denominator() {
        let series = monthly(
            "X",
            &[
                ((2020, 6), Some(0.0)),
                ((2021, 6), Some(5.0)),
                ((2020, 7), None),
                ((2021, 7), Some(5.0)),
            ],
        );
        let derived = year_over_year(&series);
        assert!(derived.at(Period::YearMonth(2021, 6)).unwrap().yoy.is_none());
        assert!(derived.at(Period::YearMonth(2021, 7)).unwrap().yoy.is_none());
    }

    #[test]
    fn test_mom_sorts_then_chains() {
        // Deliberately unsorted input.
        let series = TimeSeries {
            entity: "X".to_string(),
            points: vec![
                ObservationPoint::new(Period::YearMonth(2023, 2), Some(110.0)),
                ObservationPoint::new(Period::YearMonth(2023, 1), Some(100.0)),
            ],
        };
        let derived = month_over_month(&series);
        assert_eq!(derived.points[0].period, Period::YearMonth(2023, 1));
        assert!(derived.points[0].mom.is_none());
        let mom = derived.points[1].mom.unwrap();
        assert!((mom - 10.0).abs() < 1e-9);
    }
}
