//! Display state and the stale-response guard
//!
//! All fetched display data is owned by one coordinating `DisplayState`.
//! There is no true parallelism - only interleaved async completion - so no
//! locking is needed; instead every selection or metric change bumps an
//! epoch, and a completed fetch is committed only if it still carries the
//! current epoch. A slow fetch started under an old selection can therefore
//! never overwrite the result of a faster, newer one.

use crate::align::SeriesMatrix;
use crate::indicators::IndicatorKey;
use crate::selection::Selection;
use std::collections::HashMap;

/// One KPI banner tile: latest value plus its heat band.
#[derive(Clone, Debug, PartialEq)]
pub struct KpiTile {
    pub value: Option<f64>,
    pub band: Option<u8>,
    /// Set when the value is a regional average rather than a direct reading.
    pub regional_average: bool,
}

/// Choropleth coverage for one indicator and one resolved year:
/// ISO3 code -> value.
#[derive(Clone, Debug, PartialEq)]
pub struct MapLayer {
    pub indicator: IndicatorKey,
    pub year: i32,
    pub values: HashMap<String, f64>,
}

pub struct DisplayState {
    epoch: u64,
    selection: Selection,
    map_metric: IndicatorKey,
    pub kpis: HashMap<IndicatorKey, KpiTile>,
    pub matrix: Option<SeriesMatrix>,
    pub map_layer: Option<MapLayer>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self {
            epoch: 0,
            selection: Selection::world(),
            map_metric: IndicatorKey::Gdp,
            kpis: HashMap::new(),
            matrix: None,
            map_layer: None,
        }
    }

    /// The epoch to stamp on fetches triggered by the current state.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn map_metric(&self) -> IndicatorKey {
        self.map_metric
    }

    fn invalidate(&mut self) {
        self.epoch += 1;
        self.kpis.clear();
        self.matrix = None;
    }

    /// Single-mode selection change. Returns the new epoch.
    pub fn select(&mut self, entity: &str) -> u64 {
        self.selection.select(entity);
        self.invalidate();
        self.epoch
    }

    /// Compare-mode toggle of one entity. Only bumps the epoch if the
    /// selection actually changed (a rejected 5th entity changes nothing).
    pub fn toggle_entity(&mut self, entity: &str) -> u64 {
        if self.selection.toggle(entity) {
            self.invalidate();
        }
        self.epoch
    }

    pub fn set_compare_mode(&mut self, on: bool) -> u64 {
        self.selection.set_compare_mode(on);
        self.invalidate();
        self.epoch
    }

    pub fn set_map_metric(&mut self, metric: IndicatorKey) -> u64 {
        if self.map_metric != metric {
            self.map_metric = metric;
            self.epoch += 1;
            self.map_layer = None;
        }
        self.epoch
    }

    /// Commit fetched KPI tiles if they are still current. A stale commit is
    /// silently discarded - it is expected turnover, not an error.
    pub fn commit_kpis(&mut self, epoch: u64, kpis: HashMap<IndicatorKey, KpiTile>) -> bool {
        if epoch != self.epoch {
            tracing::debug!(stale = epoch, current = self.epoch, "discarding stale KPI response");
            return false;
        }
        self.kpis = kpis;
        true
    }

    pub fn commit_matrix(&mut self, epoch: u64, matrix: SeriesMatrix) -> bool {
        if epoch != self.epoch {
            tracing::debug!(stale = epoch, current = self.epoch, "discarding stale matrix response");
            return false;
        }
        self.matrix = Some(matrix);
        true
    }

    pub fn commit_map_layer(&mut self, epoch: u64, layer: MapLayer) -> bool {
        if epoch != self.epoch {
            tracing::debug!(stale = epoch, current = self.epoch, "discarding stale map response");
            return false;
        }
        self.map_layer = Some(layer);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_commit_discarded() {
        let mut state = DisplayState::new();
        let epoch = state.epoch();
        // A newer selection lands while the first fetch is in flight.
        state.select("Japan");
        assert!(!state.commit_kpis(epoch, HashMap::new()));
        assert!(state.commit_kpis(state.epoch(), HashMap::new()));
    }

    #[test]
    fn test_rejected_toggle_keeps_epoch() {
        let mut state = DisplayState::new();
        state.set_compare_mode(true);
        for name in ["France", "Germany", "Italy", "Spain"] {
            state.toggle_entity(name);
        }
        let epoch = state.epoch();
        assert_eq!(state.toggle_entity("Poland"), epoch);
    }

    #[test]
    fn test_map_metric_change_invalidates_layer() {
        let mut state = DisplayState::new();
        let epoch = state.epoch();
        state.commit_map_layer(
            epoch,
            MapLayer {
                indicator: IndicatorKey::Gdp,
                year: 2023,
                values: HashMap::new(),
            },
        );
        assert!(state.map_layer.is_some());
        state.set_map_metric(IndicatorKey::Cpi);
        assert!(state.map_layer.is_none());
    }
}
