//! Country Identity Resolver
//!
//! Maps arbitrary country tokens - ISO2, ISO3, free-text names, boundary
//! dataset property values - to one canonical identity. The catalog is built
//! once at startup and passed by reference; it is never mutated afterwards,
//! so it is safe to share across concurrent fetch callbacks.
//!
//! Resolution order is fixed: ISO codes before names. Boundary datasets often
//! carry abbreviated or ambiguous name fields but stable ISO codes, so a code
//! match must win before any free-text comparison. There is no fuzzy matching:
//! an unresolved token is a value (`None`), not an error, and downstream
//! renders it as "no data".

use std::collections::HashMap;

/// One canonical country. The display name follows the primary statistical
/// provider's naming (e.g. "Korea, Rep."), since that is the key series
/// data arrives under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountryIdentity {
    pub name: &'static str,
    pub iso2: &'static str,
    pub iso3: &'static str,
}

/// (canonical name, ISO2, ISO3) for every selectable country.
const COUNTRY_TABLE: &[(&str, &str, &str)] = &[
    // Americas
    ("United States", "US", "USA"),
    ("Canada", "CA", "CAN"),
    ("Mexico", "MX", "MEX"),
    ("Brazil", "BR", "BRA"),
    ("Argentina", "AR", "ARG"),
    ("Chile", "CL", "CHL"),
    ("Peru", "PE", "PER"),
    ("Colombia", "CO", "COL"),
    ("Venezuela, RB", "VE", "VEN"),
    ("Ecuador", "EC", "ECU"),
    ("Bolivia", "BO", "BOL"),
    ("Paraguay", "PY", "PRY"),
    ("Uruguay", "UY", "URY"),
    ("Guyana", "GY", "GUY"),
    ("Suriname", "SR", "SUR"),
    ("Guatemala", "GT", "GTM"),
    ("Honduras", "HN", "HND"),
    ("El Salvador", "SV", "SLV"),
    ("Nicaragua", "NI", "NIC"),
    ("Costa Rica", "CR", "CRI"),
    ("Panama", "PA", "PAN"),
    ("Belize", "BZ", "BLZ"),
    ("Cuba", "CU", "CUB"),
    ("Dominican Republic", "DO", "DOM"),
    ("Haiti", "HT", "HTI"),
    ("Jamaica", "JM", "JAM"),
    ("Trinidad and Tobago", "TT", "TTO"),
    ("Bahamas, The", "BS", "BHS"),
    ("Barbados", "BB", "BRB"),
    ("St. Lucia", "LC", "LCA"),
    ("Grenada", "GD", "GRD"),
    ("St. Vincent and the Grenadines", "VC", "VCT"),
    ("Antigua and Barbuda", "AG", "ATG"),
    ("Dominica", "DM", "DMA"),
    ("St. Kitts and Nevis", "KN", "KNA"),
    // Europe
    ("Austria", "AT", "AUT"),
    ("Belgium", "BE", "BEL"),
    ("Bulgaria", "BG", "BGR"),
    ("Croatia", "HR", "HRV"),
    ("Cyprus", "CY", "CYP"),
    ("Czechia", "CZ", "CZE"),
    ("Denmark", "DK", "DNK"),
    ("Estonia", "EE", "EST"),
    ("Finland", "FI", "FIN"),
    ("France", "FR", "FRA"),
    ("Germany", "DE", "DEU"),
    ("Greece", "GR", "GRC"),
    ("Hungary", "HU", "HUN"),
    ("Ireland", "IE", "IRL"),
    ("Italy", "IT", "ITA"),
    ("Latvia", "LV", "LVA"),
    ("Lithuania", "LT", "LTU"),
    ("Luxembourg", "LU", "LUX"),
    ("Malta", "MT", "MLT"),
    ("Netherlands", "NL", "NLD"),
    ("Poland", "PL", "POL"),
    ("Portugal", "PT", "PRT"),
    ("Romania", "RO", "ROU"),
    ("Slovak Republic", "SK", "SVK"),
    ("Slovenia", "SI", "SVN"),
    ("Spain", "ES", "ESP"),
    ("Sweden", "SE", "SWE"),
    ("United Kingdom", "GB", "GBR"),
    ("Switzerland", "CH", "CHE"),
    ("Norway", "NO", "NOR"),
    ("Iceland", "IS", "ISL"),
    ("Albania", "AL", "ALB"),
    ("Serbia", "RS", "SRB"),
    ("Montenegro", "ME", "MNE"),
    ("North Macedonia", "MK", "MKD"),
    ("Bosnia and Herzegovina", "BA", "BIH"),
    ("Ukraine", "UA", "UKR"),
    ("Belarus", "BY", "BLR"),
    ("Moldova", "MD", "MDA"),
    ("Russian Federation", "RU", "RUS"),
    // Middle East
    ("Saudi Arabia", "SA", "SAU"),
    ("United Arab Emirates", "AE", "ARE"),
    ("Israel", "IL", "ISR"),
    ("Turkiye", "TR", "TUR"),
    ("Iran, Islamic Rep.", "IR", "IRN"),
    ("Iraq", "IQ", "IRQ"),
    ("Jordan", "JO", "JOR"),
    ("Lebanon", "LB", "LBN"),
    ("Kuwait", "KW", "KWT"),
    ("Qatar", "QA", "QAT"),
    ("Bahrain", "BH", "BHR"),
    ("Oman", "OM", "OMN"),
    ("Yemen, Rep.", "YE", "YEM"),
    ("Syrian Arab Republic", "SY", "SYR"),
    // Africa
    ("Nigeria", "NG", "NGA"),
    ("South Africa", "ZA", "ZAF"),
    ("Kenya", "KE", "KEN"),
    ("Ethiopia", "ET", "ETH"),
    ("Ghana", "GH", "GHA"),
    ("Tanzania", "TZ", "TZA"),
    ("Uganda", "UG", "UGA"),
    ("Mozambique", "MZ", "MOZ"),
    ("Madagascar", "MG", "MDG"),
    ("Cameroon", "CM", "CMR"),
    ("Cote d'Ivoire", "CI", "CIV"),
    ("Niger", "NE", "NER"),
    ("Burkina Faso", "BF", "BFA"),
    ("Mali", "ML", "MLI"),
    ("Malawi", "MW", "MWI"),
    ("Zambia", "ZM", "ZMB"),
    ("Zimbabwe", "ZW", "ZWE"),
    ("Rwanda", "RW", "RWA"),
    ("Guinea", "GN", "GIN"),
    ("Benin", "BJ", "BEN"),
    ("Burundi", "BI", "BDI"),
    ("Egypt, Arab Rep.", "EG", "EGY"),
    ("Morocco", "MA", "MAR"),
    ("Algeria", "DZ", "DZA"),
    ("Tunisia", "TN", "TUN"),
    ("Libya", "LY", "LBY"),
    ("South Sudan", "SS", "SSD"),
    ("Togo", "TG", "TGO"),
    ("Sierra Leone", "SL", "SLE"),
    ("Liberia", "LR", "LBR"),
    ("Mauritania", "MR", "MRT"),
    ("Eritrea", "ER", "ERI"),
    ("Gambia, The", "GM", "GMB"),
    ("Botswana", "BW", "BWA"),
    ("Namibia", "NA", "NAM"),
    ("Gabon", "GA", "GAB"),
    ("Lesotho", "LS", "LSO"),
    ("Guinea-Bissau", "GW", "GNB"),
    ("Equatorial Guinea", "GQ", "GNQ"),
    ("Mauritius", "MU", "MUS"),
    ("Eswatini", "SZ", "SWZ"),
    ("Djibouti", "DJ", "DJI"),
    ("Comoros", "KM", "COM"),
    ("Cabo Verde", "CV", "CPV"),
    ("Sao Tome and Principe", "ST", "STP"),
    ("Seychelles", "SC", "SYC"),
    ("Angola", "AO", "AGO"),
    ("Chad", "TD", "TCD"),
    ("Central African Republic", "CF", "CAF"),
    ("Congo, Rep.", "CG", "COG"),
    ("Congo, Dem. Rep.", "CD", "COD"),
    ("Senegal", "SN", "SEN"),
    // Asia
    ("China", "CN", "CHN"),
    ("Japan", "JP", "JPN"),
    ("Korea, Rep.", "KR", "KOR"),
    ("Mongolia", "MN", "MNG"),
    ("India", "IN", "IND"),
    ("Pakistan", "PK", "PAK"),
    ("Bangladesh", "BD", "BGD"),
    ("Sri Lanka", "LK", "LKA"),
    ("Nepal", "NP", "NPL"),
    ("Bhutan", "BT", "BTN"),
    ("Afghanistan", "AF", "AFG"),
    ("Indonesia", "ID", "IDN"),
    ("Thailand", "TH", "THA"),
    ("Philippines", "PH", "PHL"),
    ("Viet Nam", "VN", "VNM"),
    ("Malaysia", "MY", "MYS"),
    ("Singapore", "SG", "SGP"),
    ("Myanmar", "MM", "MMR"),
    ("Cambodia", "KH", "KHM"),
    ("Lao PDR", "LA", "LAO"),
    ("Kyrgyz Republic", "KG", "KGZ"),
    // Oceania
    ("Australia", "AU", "AUS"),
    ("New Zealand", "NZ", "NZL"),
    ("Papua New Guinea", "PG", "PNG"),
    ("Fiji", "FJ", "FJI"),
    ("Solomon Islands", "SB", "SLB"),
    ("Vanuatu", "VU", "VUT"),
];

/// Common-name and boundary-dataset spellings that differ from the canonical
/// provider naming. Every alias maps to exactly one canonical name.
const ALIAS_TABLE: &[(&str, &str)] = &[
    ("USA", "United States"),
    ("United States of America", "United States"),
    ("UK", "United Kingdom"),
    ("Great Britain", "United Kingdom"),
    ("Russia", "Russian Federation"),
    ("South Korea", "Korea, Rep."),
    ("Korea", "Korea, Rep."),
    ("Egypt", "Egypt, Arab Rep."),
    ("Turkey", "Turkiye"),
    ("Czech Republic", "Czechia"),
    ("Slovakia", "Slovak Republic"),
    ("Ivory Coast", "Cote d'Ivoire"),
    ("Congo", "Congo, Rep."),
    ("Democratic Republic of the Congo", "Congo, Dem. Rep."),
    ("DRC", "Congo, Dem. Rep."),
    ("Iran", "Iran, Islamic Rep."),
    ("Syria", "Syrian Arab Republic"),
    ("Venezuela", "Venezuela, RB"),
    ("Yemen", "Yemen, Rep."),
    ("Gambia", "Gambia, The"),
    ("Bahamas", "Bahamas, The"),
    ("Kyrgyzstan", "Kyrgyz Republic"),
    ("Laos", "Lao PDR"),
    ("Vietnam", "Viet Nam"),
    ("Macedonia", "North Macedonia"),
    ("Cape Verde", "Cabo Verde"),
    ("Swaziland", "Eswatini"),
];

/// Immutable catalog of canonical country identities with code and alias
/// lookup maps. Built once, shared by reference.
pub struct CountryCatalog {
    identities: Vec<CountryIdentity>,
    by_iso3: HashMap<String, usize>,
    by_iso2: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    by_alias: HashMap<String, usize>,
}

impl CountryCatalog {
    pub fn new() -> Self {
        let identities: Vec<CountryIdentity> = COUNTRY_TABLE
            .iter()
            .map(|&(name, iso2, iso3)| CountryIdentity { name, iso2, iso3 })
            .collect();

        let mut by_iso3 = HashMap::new();
        let mut by_iso2 = HashMap::new();
        let mut by_name = HashMap::new();
        for (idx, id) in identities.iter().enumerate() {
            by_iso3.insert(id.iso3.to_string(), idx);
            by_iso2.insert(id.iso2.to_string(), idx);
            by_name.insert(id.name.to_lowercase(), idx);
        }

        let mut by_alias = HashMap::new();
        for &(alias, canonical) in ALIAS_TABLE {
            match by_name.get(&canonical.to_lowercase()) {
                Some(&idx) => {
                    by_alias.insert(alias.to_lowercase(), idx);
                }
                None => {
                    // A broken alias row would silently drop data; surface it.
                    tracing::warn!(alias, canonical, "alias targets unknown canonical name");
                }
            }
        }

        Self {
            identities,
            by_iso3,
            by_iso2,
            by_name,
            by_alias,
        }
    }

    /// Resolve an arbitrary token. Ordered, first match wins:
    /// ISO3, ISO2 (upper-cased), canonical name, alias (lower-cased).
    pub fn resolve(&self, token: &str) -> Option<&CountryIdentity> {
        self.resolve_code(token).or_else(|| self.resolve_name(token))
    }

    /// Code-only resolution step (ISO3 then ISO2).
    pub fn resolve_code(&self, token: &str) -> Option<&CountryIdentity> {
        let upper = token.trim().to_uppercase();
        self.by_iso3
            .get(&upper)
            .or_else(|| self.by_iso2.get(&upper))
            .map(|&idx| &self.identities[idx])
    }

    /// Name-only resolution step (canonical name then alias table).
    pub fn resolve_name(&self, token: &str) -> Option<&CountryIdentity> {
        let lower = token.trim().to_lowercase();
        self.by_name
            .get(&lower)
            .or_else(|| self.by_alias.get(&lower))
            .map(|&idx| &self.identities[idx])
    }

    /// Look up by exact canonical name.
    pub fn get(&self, canonical_name: &str) -> Option<&CountryIdentity> {
        self.by_name
            .get(&canonical_name.to_lowercase())
            .map(|&idx| &self.identities[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryIdentity> {
        self.identities.iter()
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}

impl Default for CountryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_match_wins_over_name() {
        let catalog = CountryCatalog::new();
        // "NA" is Namibia's ISO2; it must resolve as a code, never fall
        // through to a name comparison.
        assert_eq!(catalog.resolve("NA").unwrap().name, "Namibia");
        assert_eq!(catalog.resolve("na").unwrap().name, "Namibia");
    }

    #[test]
    fn test_every_alias_resolves_to_its_canonical() {
        let catalog = CountryCatalog::new();
        for &(alias, canonical) in ALIAS_TABLE {
            let resolved = catalog
                .resolve(alias)
                .unwrap_or_else(|| panic!("alias {:?} did not resolve", alias));
            assert_eq!(resolved.name, canonical, "alias {:?}", alias);
            // Case-insensitive.
            let resolved_upper = catalog.resolve(&alias.to_uppercase());
            // Upper-casing can collide with an ISO code (e.g. none today, but
            // the contract is that the mixed-case form still resolves).
            let resolved_lower = catalog.resolve(&alias.to_lowercase()).unwrap();
            assert_eq!(resolved_lower.name, canonical);
            assert!(resolved_upper.is_some());
        }
    }

    #[test]
    fn test_unresolved_is_none() {
        let catalog = CountryCatalog::new();
        assert!(catalog.resolve("Atlantis").is_none());
        assert!(catalog.resolve("").is_none());
    }

    #[test]
    fn test_no_duplicate_codes_in_table() {
        let catalog = CountryCatalog::new();
        assert_eq!(catalog.len(), COUNTRY_TABLE.len());
        assert_eq!(catalog.by_iso3.len(), COUNTRY_TABLE.len());
        assert_eq!(catalog.by_iso2.len(), COUNTRY_TABLE.len());
    }
}
