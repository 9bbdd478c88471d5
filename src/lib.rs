//! macrokpi - macroeconomic dashboard data core
//!
//! Fetches country/region indicators from public statistical APIs,
//! normalizes the heterogeneous envelopes into one time-series model, and
//! exposes the structures a view layer needs: KPI tiles with heat bands,
//! period-aligned comparison tables, choropleth value layers.
//!
//! Rendering, projection, and charting are external collaborators; this
//! crate ends at clean data structures.

pub mod aggregate;
pub mod align;
pub mod banding;
pub mod config;
pub mod derive;
pub mod error;
pub mod identity;
pub mod indicators;
pub mod logging;
pub mod orchestrator;
pub mod providers;
pub mod regions;
pub mod selection;
pub mod series;
pub mod state;

pub use align::{DisplayWindow, SeriesMatrix};
pub use config::DashboardConfig;
pub use error::{MacroError, Result};
pub use identity::{CountryCatalog, CountryIdentity};
pub use indicators::{IndicatorDefinition, IndicatorKey};
pub use orchestrator::{DashboardContext, FetchOrchestrator};
pub use regions::{RegionRegistry, WORLD};
pub use selection::Selection;
pub use series::{FetchOutcome, ObservationPoint, Period, TimeSeries};
pub use state::{DisplayState, KpiTile, MapLayer};
