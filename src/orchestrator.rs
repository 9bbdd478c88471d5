//! Indicator Fetch Orchestrator
//!
//! Decides, per selected entity, between a direct provider fetch (`World`
//! and plain countries) and a region fan-out (expand members, fetch each,
//! mean-aggregate). All fan-out uses join-all semantics: a failing branch
//! is logged and becomes an empty series, and its siblings are unaffected,
//! so every orchestrator call resolves with a possibly-partial result.
//!
//! The extended macro suite walks a source chain per country: the
//! central-bank provider, then the primary provider, then the synthetic
//! fallback tagged `Estimated`.

use crate::aggregate::mean_across;
use crate::align::{DisplayWindow, SeriesMatrix};
use crate::banding::band_opt;
use crate::config::DashboardConfig;
use crate::derive::{month_over_month, year_over_year};
use crate::identity::CountryCatalog;
use crate::indicators::{IndicatorKey, PRIMARY_INDICATORS};
use crate::providers::fred::{debt_series_id, FredClient};
use crate::providers::world_bank::WORLD_CODE;
use crate::providers::{fallback, to_time_series, IndicatorProvider};
use crate::regions::{RegionRegistry, WORLD};
use crate::selection::Selection;
use crate::series::{FetchOutcome, TimeSeries};
use crate::state::{KpiTile, MapLayer};
use chrono::{Datelike, Utc};
use futures::future::join_all;
use std::collections::HashMap;

/// Immutable lookup context built once at startup and shared by reference
/// across all fetch paths.
pub struct DashboardContext {
    pub catalog: CountryCatalog,
    pub regions: RegionRegistry,
    pub config: DashboardConfig,
}

impl DashboardContext {
    pub fn new(config: DashboardConfig) -> Self {
        let catalog = CountryCatalog::new();
        let regions = RegionRegistry::new(&catalog);
        Self {
            catalog,
            regions,
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(DashboardConfig::from_env())
    }
}

pub struct FetchOrchestrator<P> {
    context: DashboardContext,
    provider: P,
    fred: Option<FredClient>,
}

impl<P: IndicatorProvider> FetchOrchestrator<P> {
    pub fn new(context: DashboardContext, provider: P) -> Self {
        Self {
            context,
            provider,
            fred: None,
        }
    }

    /// Attach the central-bank client for the extended macro suite. Without
    /// it (or without its API key) the debt chain starts at the primary
    /// provider.
    pub fn with_fred(mut self, fred: FredClient) -> Self {
        self.fred = Some(fred);
        self
    }

    pub fn context(&self) -> &DashboardContext {
        &self.context
    }

    /// Full series for one selected entity. `World` and plain countries are
    /// single direct fetches; a region expands to its members, fetches each
    /// concurrently, and mean-aggregates.
    pub async fn entity_series(&self, entity: &str, indicator: IndicatorKey) -> TimeSeries {
        if entity == WORLD {
            return self.code_series(entity, WORLD_CODE, indicator).await;
        }
        if let Some(members) = self.context.regions.members_of(entity) {
            let members =
                join_all(members.iter().map(|m| self.member_series(m, indicator))).await;
            return mean_across(entity, &members);
        }
        self.member_series(entity, indicator).await
    }

    /// `entity_series` with year-over-year and month-over-month attached.
    pub async fn derived_series(&self, entity: &str, indicator: IndicatorKey) -> TimeSeries {
        let series = self.entity_series(entity, indicator).await;
        month_over_month(&year_over_year(&series))
    }

    /// Period-aligned chart/table rows for the whole selection, restricted
    /// to the chart window.
    pub async fn series_matrix(
        &self,
        selection: &Selection,
        indicator: IndicatorKey,
    ) -> SeriesMatrix {
        let series = join_all(
            selection
                .entities()
                .iter()
                .map(|e| self.entity_series(e, indicator)),
        )
        .await;
        let (from, to) = self.context.config.chart_window;
        SeriesMatrix::build(&series, Some(DisplayWindow::years(from, to)))
    }

    /// Latest value plus band for every primary indicator, honoring the
    /// selection's aggregate semantics.
    pub async fn kpi_snapshot(&self, selection: &Selection) -> HashMap<IndicatorKey, KpiTile> {
        join_all(
            PRIMARY_INDICATORS
                .iter()
                .map(|&key| async move { (key, self.kpi_tile(selection, key).await) }),
        )
        .await
        .into_iter()
        .collect()
    }

    async fn kpi_tile(&self, selection: &Selection, key: IndicatorKey) -> KpiTile {
        if selection.is_world() {
            let value = self.latest_for_code(WORLD_CODE, key).await;
            return KpiTile {
                value,
                band: band_opt(key, value),
                regional_average: false,
            };
        }

        let entities = selection.entities();
        let direct_country = !selection.compare_mode()
            && entities.len() == 1
            && !self.context.regions.is_region(&entities[0]);
        if direct_country {
            let value = match self.context.catalog.resolve(&entities[0]) {
                Some(identity) => self.latest_for_code(identity.iso3, key).await,
                None => {
                    tracing::warn!(entity = %entities[0], "unresolved selection entity");
                    None
                }
            };
            return KpiTile {
                value,
                band: band_opt(key, value),
                regional_average: false,
            };
        }

        // Region or compare mode: pool member countries and average their
        // latest readings.
        let pooled = self.context.regions.expand_selection(entities);
        let latest = join_all(pooled.iter().map(|member| async move {
            match self.context.catalog.resolve(member) {
                Some(identity) => self.latest_for_code(identity.iso3, key).await,
                None => None,
            }
        }))
        .await;

        let usable: Vec<f64> = latest.into_iter().flatten().collect();
        let value = if usable.is_empty() {
            None
        } else {
            Some(usable.iter().sum::<f64>() / usable.len() as f64)
        };
        KpiTile {
            value,
            band: band_opt(key, value),
            regional_average: true,
        }
    }

    /// Choropleth values for the most recent year with coverage, walking
    /// back from last year through the bounded lookback. All years empty
    /// means no coverage, which is a `None`, not an error.
    pub async fn map_layer(&self, indicator: IndicatorKey) -> Option<MapLayer> {
        let latest = Utc::now().year() - 1;
        let floor = latest - self.context.config.lookback_years + 1;

        for year in (floor..=latest).rev() {
            match self.provider.year_snapshot(indicator, year).await {
                Ok(rows) => {
                    let values: HashMap<String, f64> = rows
                        .into_iter()
                        .filter(|row| !row.iso3.is_empty())
                        .filter_map(|row| row.value.map(|v| (row.iso3, v)))
                        .collect();
                    if !values.is_empty() {
                        return Some(MapLayer {
                            indicator,
                            year,
                            values,
                        });
                    }
                    tracing::debug!(year, "no map coverage, trying prior year");
                }
                Err(err) => tracing::warn!(year, %err, "map snapshot fetch failed"),
            }
        }
        None
    }

    /// Extended macro suite for one country: debt/GDP through the fallback
    /// chain and corporate tax from the static table, both with derived
    /// metrics attached and provenance preserved.
    pub async fn macro_suite(&self, entity: &str) -> HashMap<IndicatorKey, FetchOutcome> {
        let (debt, tax) = futures::join!(
            self.debt_series(entity),
            self.corporate_tax_series(entity)
        );
        HashMap::from([
            (
                IndicatorKey::DebtToGdp,
                debt.map_series(|s| month_over_month(&year_over_year(&s))),
            ),
            (IndicatorKey::CorporateTax, tax),
        ])
    }

    /// Debt/GDP source chain: central-bank series, then the primary
    /// provider, then the synthetic walk tagged `Estimated`.
    pub async fn debt_series(&self, entity: &str) -> FetchOutcome {
        let Some(identity) = self.context.catalog.resolve(entity) else {
            return FetchOutcome::Unavailable;
        };
        let window = self.context.config.series_window;

        if let Some(fred) = self.fred.as_ref().filter(|f| f.has_key()) {
            if let Some(series_id) = debt_series_id(identity.iso3) {
                match fred
                    .observations(series_id, &format!("{}-01-01", window.0))
                    .await
                {
                    Ok(raw) if !raw.is_empty() => {
                        return FetchOutcome::Real(to_time_series(entity, raw));
                    }
                    Ok(_) => {}
                    Err(err) => tracing::warn!(entity, %err, "central-bank debt fetch failed"),
                }
            }
        }

        match self
            .provider
            .fetch_series(identity.iso3, IndicatorKey::DebtToGdp, Some(window))
            .await
        {
            Ok(raw) => {
                let series = to_time_series(entity, raw);
                if series.has_values() {
                    return FetchOutcome::Real(series);
                }
            }
            Err(err) => tracing::warn!(entity, %err, "primary debt fetch failed"),
        }

        FetchOutcome::Estimated(fallback::estimated_debt_series(
            entity,
            identity.iso3,
            window,
        ))
    }

    /// Corporate tax has no series provider; the static statutory table is
    /// the only source and is always `Estimated`.
    pub async fn corporate_tax_series(&self, entity: &str) -> FetchOutcome {
        let Some(identity) = self.context.catalog.resolve(entity) else {
            return FetchOutcome::Unavailable;
        };
        match fallback::static_corporate_tax_series(
            entity,
            identity.iso3,
            self.context.config.series_window,
        ) {
            Some(series) => FetchOutcome::Estimated(series),
            None => FetchOutcome::Unavailable,
        }
    }

    async fn member_series(&self, entity: &str, indicator: IndicatorKey) -> TimeSeries {
        match self.context.catalog.resolve(entity) {
            Some(identity) => self.code_series(entity, identity.iso3, indicator).await,
            None => {
                tracing::warn!(entity, "unresolved entity, returning empty series");
                TimeSeries::empty(entity)
            }
        }
    }

    async fn code_series(&self, entity: &str, code: &str, indicator: IndicatorKey) -> TimeSeries {
        match self
            .provider
            .fetch_series(code, indicator, Some(self.context.config.series_window))
            .await
        {
            Ok(raw) => to_time_series(entity, raw),
            Err(err) => {
                tracing::warn!(entity, %err, "series fetch failed, returning empty series");
                TimeSeries::empty(entity)
            }
        }
    }

    async fn latest_for_code(&self, code: &str, key: IndicatorKey) -> Option<f64> {
        match self.provider.latest_value(code, key).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(code, %err, "latest-value fetch failed");
                None
            }
        }
    }
}
