//! Series Aggregator
//!
//! Combines member-country series into one region-level series by
//! per-period arithmetic mean. Each period is computed independently:
//! countries with gaps contribute to the periods where they have data and
//! are silently excluded elsewhere. A period with zero non-null contributors
//! is omitted outright - not emitted as zero, not null-filled.

use crate::series::{ObservationPoint, Period, TimeSeries};
use std::collections::BTreeMap;

/// Mean-aggregate member series under the given entity label.
///
/// Zero members, or members with no usable values, yield an empty series;
/// that is a normal outcome, not an error.
pub fn mean_across(entity: &str, members: &[TimeSeries]) -> TimeSeries {
    let mut buckets: BTreeMap<Period, Vec<f64>> = BTreeMap::new();

    for series in members {
        for point in &series.points {
            if let Some(value) = point.value {
                buckets.entry(point.period).or_default().push(value);
            }
        }
    }

    let points = buckets
        .into_iter()
        .map(|(period, values)| {
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            ObservationPoint::new(period, Some(mean))
        })
        .collect();

    TimeSeries::with_points(entity, points)
}
