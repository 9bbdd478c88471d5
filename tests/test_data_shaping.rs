use anyhow::Result;
use macrokpi::aggregate::mean_across;
use macrokpi::align::{DisplayWindow, SeriesMatrix};
use macrokpi::banding::{band, band_opt};
use macrokpi::derive::{month_over_month, year_over_year};
use macrokpi::series::{ObservationPoint, Period, TimeSeries};
use macrokpi::{CountryCatalog, IndicatorKey, RegionRegistry, WORLD};

fn annual(entity: &str, points: &[(i32, Option<f64>)]) -> TimeSeries {
    TimeSeries::with_points(
        entity,
        points
            .iter()
            .map(|&(y, v)| ObservationPoint::new(Period::Year(y), v))
            .collect(),
    )
}

#[test]
fn test_code_resolution_wins_over_name() {
    let catalog = CountryCatalog::new();
    // "NA" is Namibia's ISO2; it must never be read as a name fragment.
    assert_eq!(catalog.resolve("NA").unwrap().name, "Namibia");
    assert_eq!(catalog.resolve("de").unwrap().name, "Germany");
    assert_eq!(catalog.resolve("vietnam").unwrap().name, "Viet Nam");
    assert!(catalog.resolve("Atlantis").is_none());
}

#[test]
fn test_region_expansion_dedups_and_skips_world() {
    let catalog = CountryCatalog::new();
    let regions = RegionRegistry::new(&catalog);

    let expanded = regions.expand_selection(&[
        WORLD.to_string(),
        "North America".to_string(),
        "Mexico".to_string(),
        "Japan".to_string(),
    ]);
    assert_eq!(expanded, vec!["United States", "Canada", "Mexico", "Japan"]);
}

#[test]
fn test_aggregate_then_align_round_trip() {
    // Member gaps show up as periods with fewer contributors, not as nulls
    // dragging the mean down.
    let france = annual("France", &[(2021, Some(2.0)), (2022, Some(1.0))]);
    let germany = annual("Germany", &[(2021, Some(4.0)), (2022, None)]);
    let europe = mean_across("Europe", &[france, germany]);

    assert_eq!(europe.at(Period::Year(2021)).unwrap().value, Some(3.0));
    assert_eq!(europe.at(Period::Year(2022)).unwrap().value, Some(1.0));

    let japan = annual("Japan", &[(2020, Some(0.5)), (2022, Some(1.5))]);
    let matrix = SeriesMatrix::build(&[europe, japan], Some(DisplayWindow::years(2021, 2024)));

    assert_eq!(matrix.rows.len(), 2);
    assert_eq!(matrix.value_at(Period::Year(2021), "Japan"), None);
    assert_eq!(matrix.value_at(Period::Year(2022), "Europe"), Some(1.0));
    // 2020 is outside the display window entirely.
    assert_eq!(matrix.value_at(Period::Year(2020), "Japan"), None);
}

#[test]
fn test_derived_metrics_on_monthly_series() {
    let series = TimeSeries::with_points(
        "United States",
        vec![
            ObservationPoint::new(Period::YearMonth(2022, 11), Some(98.0)),
            ObservationPoint::new(Period::YearMonth(2022, 12), Some(100.0)),
            ObservationPoint::new(Period::YearMonth(2023, 12), Some(105.0)),
        ],
    );
    let derived = month_over_month(&year_over_year(&series));

    let dec23 = derived.at(Period::YearMonth(2023, 12)).unwrap();
    assert!((dec23.yoy.unwrap() - 5.0).abs() < 1e-9);

    let dec22 = derived.at(Period::YearMonth(2022, 12)).unwrap();
    // No December 2021 observation: YoY stays unset. MoM chains from the
    // immediate predecessor regardless of gaps.
    assert!(dec22.yoy.is_none());
    assert!((dec22.mom.unwrap() - 2.0408163).abs() < 1e-4);
}

#[test]
fn test_boundary_features_resolve_against_catalog() -> Result<()> {
    use macrokpi::providers::boundary::{parse_feature_collection, resolve_feature};

    let catalog = CountryCatalog::new();
    let raw = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"ISO_A3": "-99", "NAME": "France"}},
            {"type": "Feature", "properties": {"ISO_A2": "NA", "NAME": "Norway"}},
            {"type": "Feature", "properties": {"ADMIN": "Somewhere Else"}}
        ]
    }"#;
    let features = parse_feature_collection(raw)?;
    assert_eq!(features.len(), 3);

    assert_eq!(resolve_feature(&catalog, &features[0]).unwrap().iso3, "FRA");
    // A code hit on any key outranks a name hit on any other.
    assert_eq!(resolve_feature(&catalog, &features[1]).unwrap().iso3, "NAM");
    assert!(resolve_feature(&catalog, &features[2]).is_none());
    Ok(())
}

#[test]
fn test_band_thresholds_across_indicators() {
    // Higher-is-better: the boundary value lands in the better band.
    assert_eq!(band(IndicatorKey::Gdp, 5.0), 0);
    assert_eq!(band(IndicatorKey::Gdp, 3.0), 1);
    assert_eq!(band(IndicatorKey::Gdp, 0.0), 3);
    assert_eq!(band(IndicatorKey::Gdp, -2.0), 4);

    // Lower-is-better: ascending thresholds, inclusive.
    assert_eq!(band(IndicatorKey::Cpi, 2.0), 0);
    assert_eq!(band(IndicatorKey::Cpi, 16.0), 4);
    assert_eq!(band(IndicatorKey::Unemployment, 7.0), 1);
    assert_eq!(band(IndicatorKey::PolicyRate, 8.5), 4);

    // Extended suite thresholds.
    assert_eq!(band(IndicatorKey::DebtToGdp, 60.0), 0);
    assert_eq!(band(IndicatorKey::DebtToGdp, 200.0), 4);
    assert_eq!(band(IndicatorKey::CorporateTax, 21.0), 1);

    assert_eq!(band_opt(IndicatorKey::Gdp, None), None);
}
