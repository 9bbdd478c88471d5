//! Classification/Banding
//!
//! Maps a scalar indicator value to a discrete severity band (0..=4) for
//! color-coding, band 0 being best. Indicators where higher readings are
//! good (growth) use descending thresholds with a closed lower edge
//! (`value >= break`); indicators where lower readings are good (inflation,
//! unemployment, rates, debt, tax) use ascending thresholds with a closed
//! upper edge (`value <= break`). Either way, a value exactly on a boundary
//! falls into the better band.

use crate::indicators::{definition, IndicatorKey};

/// Number of discrete bands on the heat scale.
pub const BAND_COUNT: u8 = 5;

/// Which end of the scale is "good" for an indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BandDirection {
    HigherIsBetter,
    LowerIsBetter,
}

/// Band a raw value for the given indicator. Always in `0..BAND_COUNT`.
pub fn band(key: IndicatorKey, value: f64) -> u8 {
    let def = definition(key);
    let position = match def.direction {
        BandDirection::HigherIsBetter => def.breaks.iter().position(|b| value >= *b),
        BandDirection::LowerIsBetter => def.breaks.iter().position(|b| value <= *b),
    };
    position.unwrap_or(def.breaks.len()) as u8
}

/// Null-aware banding: an absent value has no band and must render as a
/// neutral "no data" state, distinct from every band color.
pub fn band_opt(key: IndicatorKey, value: Option<f64>) -> Option<u8> {
    value.map(|v| band(key, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gdp_higher_is_better_boundaries() {
        // Thresholds [5, 3, 1, 0]: a value exactly on a break takes the
        // better band.
        assert_eq!(band(IndicatorKey::Gdp, 5.0), 0);
        assert_eq!(band(IndicatorKey::Gdp, 4.999), 1);
        assert_eq!(band(IndicatorKey::Gdp, 3.0), 1);
        assert_eq!(band(IndicatorKey::Gdp, 0.0), 3);
        assert_eq!(band(IndicatorKey::Gdp, -1.0), 4);
    }

    #[test]
    fn test_cpi_lower_is_better_boundaries() {
        // Thresholds [2, 5, 10, 15].
        assert_eq!(band(IndicatorKey::Cpi, 1.5), 0);
        assert_eq!(band(IndicatorKey::Cpi, 2.0), 0);
        assert_eq!(band(IndicatorKey::Cpi, 2.1), 1);
        assert_eq!(band(IndicatorKey::Cpi, 15.0), 3);
        assert_eq!(band(IndicatorKey::Cpi, 22.0), 4);
    }

    #[test]
    fn test_null_has_no_band() {
        assert_eq!(band_opt(IndicatorKey::Unemployment, None), None);
        assert_eq!(band_opt(IndicatorKey::Unemployment, Some(3.0)), Some(0));
    }
}
