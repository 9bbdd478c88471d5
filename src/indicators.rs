//! Indicator definitions
//!
//! The fixed set of indicators the dashboard knows about: four primary KPIs
//! plus the extended macro suite (government debt/GDP, corporate tax). Each
//! definition carries the primary provider's series code, display metadata,
//! and the banding thresholds for the heat scale.

use crate::banding::BandDirection;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKey {
    Gdp,
    Cpi,
    Unemployment,
    PolicyRate,
    DebtToGdp,
    CorporateTax,
}

impl IndicatorKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorKey::Gdp => "gdp",
            IndicatorKey::Cpi => "cpi",
            IndicatorKey::Unemployment => "unemp",
            IndicatorKey::PolicyRate => "rate",
            IndicatorKey::DebtToGdp => "debt_to_gdp",
            IndicatorKey::CorporateTax => "corporate_tax",
        }
    }

    pub fn from_key(key: &str) -> Option<IndicatorKey> {
        match key {
            "gdp" => Some(IndicatorKey::Gdp),
            "cpi" => Some(IndicatorKey::Cpi),
            "unemp" => Some(IndicatorKey::Unemployment),
            "rate" => Some(IndicatorKey::PolicyRate),
            "debt_to_gdp" => Some(IndicatorKey::DebtToGdp),
            "corporate_tax" => Some(IndicatorKey::CorporateTax),
            _ => None,
        }
    }
}

pub struct IndicatorDefinition {
    pub key: IndicatorKey,
    /// Primary statistical provider series code.
    pub code: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub direction: BandDirection,
    /// Band boundaries: descending for higher-is-better, ascending otherwise.
    pub breaks: [f64; 4],
}

/// KPI tiles and the map selector cycle through these four.
pub const PRIMARY_INDICATORS: [IndicatorKey; 4] = [
    IndicatorKey::Gdp,
    IndicatorKey::Cpi,
    IndicatorKey::Unemployment,
    IndicatorKey::PolicyRate,
];

/// The macro suite view adds these on top of the primary set.
pub const EXTENDED_INDICATORS: [IndicatorKey; 2] =
    [IndicatorKey::DebtToGdp, IndicatorKey::CorporateTax];

static DEFINITIONS: [IndicatorDefinition; 6] = [
    IndicatorDefinition {
        key: IndicatorKey::Gdp,
        code: "NY.GDP.MKTP.KD.ZG",
        label: "GDP Growth (YoY %)",
        unit: "%",
        direction: BandDirection::HigherIsBetter,
        breaks: [5.0, 3.0, 1.0, 0.0],
    },
    IndicatorDefinition {
        key: IndicatorKey::Cpi,
        code: "FP.CPI.TOTL.ZG",
        label: "Headline CPI (YoY %)",
        unit: "%",
        direction: BandDirection::LowerIsBetter,
        breaks: [2.0, 5.0, 10.0, 15.0],
    },
    IndicatorDefinition {
        key: IndicatorKey::Unemployment,
        code: "SL.UEM.TOTL.ZS",
        label: "Unemployment (%)",
        unit: "%",
        direction: BandDirection::LowerIsBetter,
        breaks: [4.0, 7.0, 10.0, 15.0],
    },
    IndicatorDefinition {
        key: IndicatorKey::PolicyRate,
        code: "FR.INR.RINR",
        label: "Policy Rate (%)",
        unit: "%",
        direction: BandDirection::LowerIsBetter,
        breaks: [1.0, 3.0, 5.0, 8.0],
    },
    IndicatorDefinition {
        key: IndicatorKey::DebtToGdp,
        code: "GC.DOD.TOTL.GD.ZS",
        label: "Government Debt/GDP",
        unit: "%",
        direction: BandDirection::LowerIsBetter,
        breaks: [60.0, 90.0, 120.0, 180.0],
    },
    IndicatorDefinition {
        key: IndicatorKey::CorporateTax,
        // No primary-provider series exists; served from the secondary
        // chain and the static rate table.
        code: "",
        label: "Corporate Tax Rate",
        unit: "%",
        direction: BandDirection::LowerIsBetter,
        breaks: [20.0, 25.0, 30.0, 35.0],
    },
];

pub fn definition(key: IndicatorKey) -> &'static IndicatorDefinition {
    DEFINITIONS
        .iter()
        .find(|d| d.key == key)
        .expect("every IndicatorKey has a definition")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for def in &DEFINITIONS {
            assert_eq!(IndicatorKey::from_key(def.key.as_str()), Some(def.key));
        }
    }

    #[test]
    fn test_primary_indicators_have_provider_codes() {
        for key in PRIMARY_INDICATORS {
            assert!(!definition(key).code.is_empty());
        }
    }
}
