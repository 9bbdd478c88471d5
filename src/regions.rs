//! Region Registry
//!
//! Static mapping from named regions (continents, economic blocs) to their
//! canonical member countries. Regions may overlap - "Europe" is a subset of
//! "EMEA" - and there is no invariant that regions partition the country set.
//!
//! `World` is a pseudo-region: it means "all countries, unaggregated" and
//! triggers a direct global-aggregate fetch rather than per-country fan-out,
//! so it is deliberately excluded from expansion.

use crate::identity::CountryCatalog;
use std::collections::{HashMap, HashSet};

/// The pseudo-region sentinel. Not present in the registry.
pub const WORLD: &str = "World";

const EUROPE: &[&str] = &[
    "Austria",
    "Belgium",
    "Bulgaria",
    "Croatia",
    "Cyprus",
    "Czechia",
    "Denmark",
    "Estonia",
    "Finland",
    "France",
    "Germany",
    "Greece",
    "Hungary",
    "Ireland",
    "Italy",
    "Latvia",
    "Lithuania",
    "Luxembourg",
    "Malta",
    "Netherlands",
    "Poland",
    "Portugal",
    "Romania",
    "Slovak Republic",
    "Slovenia",
    "Spain",
    "Sweden",
    "United Kingdom",
    "Switzerland",
    "Norway",
    "Iceland",
    "Albania",
    "Serbia",
    "Montenegro",
    "North Macedonia",
    "Bosnia and Herzegovina",
    "Ukraine",
    "Belarus",
    "Moldova",
];

const MIDDLE_EAST: &[&str] = &[
    "Saudi Arabia",
    "United Arab Emirates",
    "Israel",
    "Turkiye",
    "Iran, Islamic Rep.",
    "Iraq",
    "Jordan",
    "Lebanon",
    "Kuwait",
    "Qatar",
    "Bahrain",
    "Oman",
    "Yemen, Rep.",
    "Syrian Arab Republic",
];

const NORTH_AFRICA: &[&str] = &["Egypt, Arab Rep.", "Morocco", "Algeria", "Tunisia", "Libya"];

const SUB_SAHARAN_AFRICA: &[&str] = &[
    "Nigeria",
    "South Africa",
    "Kenya",
    "Ethiopia",
    "Ghana",
    "Tanzania",
    "Uganda",
    "Mozambique",
    "Madagascar",
    "Cameroon",
    "Cote d'Ivoire",
    "Niger",
    "Burkina Faso",
    "Mali",
    "Malawi",
    "Zambia",
    "Zimbabwe",
    "Rwanda",
    "Guinea",
    "Benin",
    "Burundi",
    "South Sudan",
    "Togo",
    "Sierra Leone",
    "Liberia",
    "Mauritania",
    "Eritrea",
    "Gambia, The",
    "Botswana",
    "Namibia",
    "Gabon",
    "Lesotho",
    "Guinea-Bissau",
    "Equatorial Guinea",
    "Mauritius",
    "Eswatini",
    "Djibouti",
    "Comoros",
    "Cabo Verde",
    "Sao Tome and Principe",
    "Seychelles",
    "Angola",
    "Chad",
    "Central African Republic",
    "Congo, Rep.",
    "Congo, Dem. Rep.",
    "Senegal",
];

/// EMEA-only African members: the Sub-Saharan majors plus North Africa.
const EMEA_AFRICA: &[&str] = &[
    "Nigeria",
    "South Africa",
    "Kenya",
    "Ethiopia",
    "Ghana",
    "Tanzania",
    "Uganda",
    "Mozambique",
    "Madagascar",
    "Cameroon",
    "Cote d'Ivoire",
    "Niger",
    "Burkina Faso",
    "Mali",
    "Malawi",
    "Zambia",
    "Zimbabwe",
    "Rwanda",
    "Guinea",
    "Benin",
    "Burundi",
    "Egypt, Arab Rep.",
    "Morocco",
    "Algeria",
    "Tunisia",
    "Libya",
];

/// Ordered region table. Member lists use canonical names and preserve
/// their defined order.
fn region_table() -> Vec<(&'static str, Vec<&'static str>)> {
    let mut emea: Vec<&'static str> = Vec::new();
    emea.extend_from_slice(EUROPE);
    emea.extend_from_slice(MIDDLE_EAST);
    emea.extend_from_slice(EMEA_AFRICA);

    vec![
        ("North America", vec!["United States", "Canada", "Mexico"]),
        ("Europe", EUROPE.to_vec()),
        ("EMEA", emea),
        (
            "East Asia",
            vec!["China", "Japan", "Korea, Rep.", "Mongolia"],
        ),
        (
            "South Asia",
            vec![
                "India",
                "Pakistan",
                "Bangladesh",
                "Sri Lanka",
                "Nepal",
                "Bhutan",
                "Afghanistan",
            ],
        ),
        (
            "Southeast Asia",
            vec![
                "Indonesia",
                "Thailand",
                "Philippines",
                "Viet Nam",
                "Malaysia",
                "Singapore",
                "Myanmar",
                "Cambodia",
                "Lao PDR",
            ],
        ),
        ("Middle East", MIDDLE_EAST.to_vec()),
        (
            "South America",
            vec![
                "Brazil",
                "Argentina",
                "Chile",
                "Peru",
                "Colombia",
                "Venezuela, RB",
                "Ecuador",
                "Bolivia",
                "Paraguay",
                "Uruguay",
                "Guyana",
                "Suriname",
            ],
        ),
        (
            "Central America",
            vec![
                "Guatemala",
                "Honduras",
                "El Salvador",
                "Nicaragua",
                "Costa Rica",
                "Panama",
                "Belize",
            ],
        ),
        (
            "Caribbean",
            vec![
                "Cuba",
                "Dominican Republic",
                "Haiti",
                "Jamaica",
                "Trinidad and Tobago",
                "Bahamas, The",
                "Barbados",
                "St. Lucia",
                "Grenada",
                "St. Vincent and the Grenadines",
                "Antigua and Barbuda",
                "Dominica",
                "St. Kitts and Nevis",
            ],
        ),
        ("Sub-Saharan Africa", SUB_SAHARAN_AFRICA.to_vec()),
        ("North Africa", NORTH_AFRICA.to_vec()),
        (
            "Oceania",
            vec![
                "Australia",
                "New Zealand",
                "Papua New Guinea",
                "Fiji",
                "Solomon Islands",
                "Vanuatu",
            ],
        ),
    ]
}

/// Immutable region registry. Built once against the country catalog so every
/// stored member name is guaranteed canonical; unknown members are dropped
/// with a warning rather than poisoning downstream fetches.
pub struct RegionRegistry {
    regions: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl RegionRegistry {
    pub fn new(catalog: &CountryCatalog) -> Self {
        let mut regions = Vec::new();
        let mut index = HashMap::new();

        for (name, members) in region_table() {
            let mut resolved = Vec::with_capacity(members.len());
            for member in members {
                match catalog.get(member) {
                    Some(id) => resolved.push(id.name.to_string()),
                    None => tracing::warn!(region = name, member, "unknown region member dropped"),
                }
            }
            index.insert(name.to_string(), regions.len());
            regions.push((name.to_string(), resolved));
        }

        Self { regions, index }
    }

    pub fn is_region(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Canonical member names of a region, in defined order.
    pub fn members_of(&self, name: &str) -> Option<&[String]> {
        self.index
            .get(name)
            .map(|&idx| self.regions[idx].1.as_slice())
    }

    /// Region names in registry order.
    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|(name, _)| name.as_str())
    }

    /// Union the member countries of all selected regions plus any directly
    /// selected countries, deduplicated, preserving first-seen order.
    /// `World` never expands: it is handled as a distinct aggregate case.
    pub fn expand_selection(&self, entities: &[String]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();

        for entity in entities {
            if entity == WORLD {
                continue;
            }
            match self.members_of(entity) {
                Some(members) => {
                    for member in members {
                        if seen.insert(member.clone()) {
                            out.push(member.clone());
                        }
                    }
                }
                None => {
                    if seen.insert(entity.clone()) {
                        out.push(entity.clone());
                    }
                }
            }
        }

        out
    }
}
