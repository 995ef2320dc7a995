//! Country/continent to group key classification.

/// Countries pulled out of their continent, checked in order.
const GROUP_OVERRIDES: &[(&[&str], &str)] = &[
    (&["CN"], "CN"),
    (&["SG", "MY", "ID", "TH"], "SG"),
];

/// Group key for a row, from its normalized country and continent codes.
///
/// China gets its own group, Singapore/Malaysia/Indonesia/Thailand share the
/// `SG` group, every other country falls into its continent. An empty or
/// unknown continent is still a valid key.
pub fn classify(country: &str, continent: &str) -> String {
    GROUP_OVERRIDES
        .iter()
        .find(|(countries, _)| countries.contains(&country))
        .map(|(_, group)| group.to_string())
        .unwrap_or_else(|| continent.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cn_overrides_continent() {
        assert_eq!(classify("CN", "AS"), "CN");
        assert_eq!(classify("CN", "EU"), "CN");
        assert_eq!(classify("CN", ""), "CN");
    }

    #[test]
    fn test_sea_countries_merge_into_sg() {
        for country in ["SG", "MY", "ID", "TH"] {
            assert_eq!(classify(country, "AS"), "SG", "country {country}");
            assert_eq!(classify(country, "OC"), "SG", "country {country}");
        }
    }

    #[test]
    fn test_other_countries_use_continent() {
        assert_eq!(classify("US", "NA"), "NA");
        assert_eq!(classify("JP", "AS"), "AS");
        assert_eq!(classify("VN", "AS"), "AS");
        assert_eq!(classify("", "EU"), "EU");
    }

    #[test]
    fn test_unknown_continent_is_kept() {
        assert_eq!(classify("XX", ""), "");
        assert_eq!(classify("ZZ", "??"), "??");
    }
}
