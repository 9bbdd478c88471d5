//! Time-Series Aligner
//!
//! Merges per-entity series of possibly differing periods into a single
//! sparse table: one row per distinct period, one column per entity. Period
//! keys are deduplicated on their identifier (guarding against upstream
//! double-insertion) and per cell the FIRST matching observation wins - a
//! repeated entity/period pair is a data-quality anomaly resolved by
//! defined tie-break, never by averaging.

use crate::series::{Period, TimeSeries};
use itertools::Itertools;

/// Inclusive period window for display filtering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayWindow {
    pub from: Period,
    pub to: Period,
}

impl DisplayWindow {
    pub fn years(from: i32, to: i32) -> Self {
        Self {
            from: Period::Year(from),
            // A bare year sorts before any month of that year, so close the
            // window at December to include monthly points of the last year.
            to: Period::YearMonth(to, 12),
        }
    }

    pub fn contains(&self, period: Period) -> bool {
        period >= self.from && period <= self.to
    }
}

/// One period-aligned row: a period plus one cell per entity, in entity
/// order. Missing cells are `None`, never interpolated.
#[derive(Clone, Debug, PartialEq)]
pub struct MatrixRow {
    pub period: Period,
    pub cells: Vec<Option<f64>>,
}

/// A period-aligned table for one indicator across the selected entities.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesMatrix {
    pub entities: Vec<String>,
    pub rows: Vec<MatrixRow>,
}

impl SeriesMatrix {
    /// Build the aligned table: union all periods across inputs, restrict to
    /// the window, sort ascending, deduplicate equal period keys.
    pub fn build(series: &[TimeSeries], window: Option<DisplayWindow>) -> Self {
        let entities = series.iter().map(|s| s.entity.clone()).collect();

        let periods: Vec<Period> = series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.period))
            .filter(|p| window.map_or(true, |w| w.contains(*p)))
            .sorted()
            .dedup()
            .collect();

        let rows = periods
            .into_iter()
            .map(|period| MatrixRow {
                period,
                cells: series
                    .iter()
                    .map(|s| s.at(period).and_then(|p| p.value))
                    .collect(),
            })
            .collect();

        Self { entities, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell lookup by entity name, mainly for tests and table rendering.
    pub fn value_at(&self, period: Period, entity: &str) -> Option<f64> {
        let col = self.entities.iter().position(|e| e == entity)?;
        self.rows
            .iter()
            .find(|r| r.period == period)
            .and_then(|r| r.cells[col])
    }
}
