//! Map boundary dataset
//!
//! Boundary features carry country identity in a grab-bag of property keys
//! that vary by dataset vintage (`ISO_A3`, `ADM0_A3`, `NAME`, ...). Features
//! are matched to the catalog in two passes: every candidate key is tried as
//! an ISO code first, and only if no code matches anywhere is any key tried
//! as a name. Code matches are strictly stronger evidence than name matches,
//! so a name hit on one key must never preempt a code hit on a later key.

use crate::error::Result;
use crate::identity::{CountryCatalog, CountryIdentity};
use serde_json::Value;

/// Property keys checked on each feature, in priority order within a pass.
pub const FEATURE_PROPERTY_KEYS: &[&str] = &[
    "ISO_A3", "iso_a3", "ADM0_A3", "GU_A3", "ISO_A2", "iso_a2", "NAME", "name", "ADMIN", "admin",
    "NAME_EN", "name_en",
];

/// One boundary feature's properties. Geometry is irrelevant here and is
/// not retained.
#[derive(Clone, Debug)]
pub struct BoundaryFeature {
    pub properties: serde_json::Map<String, Value>,
}

impl BoundaryFeature {
    fn candidate_tokens(&self) -> impl Iterator<Item = &str> {
        FEATURE_PROPERTY_KEYS
            .iter()
            .filter_map(|key| self.properties.get(*key))
            .filter_map(|v| v.as_str())
            .filter(|s| !s.is_empty() && *s != "-99")
    }
}

/// Resolve a feature to a canonical country: a code pass over all candidate
/// property values, then a name pass.
pub fn resolve_feature<'a>(
    catalog: &'a CountryCatalog,
    feature: &BoundaryFeature,
) -> Option<&'a CountryIdentity> {
    for token in feature.candidate_tokens() {
        if let Some(identity) = catalog.resolve_code(token) {
            return Some(identity);
        }
    }
    for token in feature.candidate_tokens() {
        if let Some(identity) = catalog.resolve(token) {
            return Some(identity);
        }
    }
    None
}

/// Decode a GeoJSON FeatureCollection into property bags. Features without
/// a properties object are skipped, not fatal.
pub fn parse_feature_collection(raw: &str) -> Result<Vec<BoundaryFeature>> {
    let value: Value = serde_json::from_str(raw)?;
    let features = value
        .get("features")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    Ok(features
        .into_iter()
        .filter_map(|feature| {
            feature
                .get("properties")
                .and_then(Value::as_object)
                .cloned()
                .map(|properties| BoundaryFeature { properties })
        })
        .collect())
}
