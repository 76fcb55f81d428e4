//! Nationality to ISO country code mapping.
//!
//! GOSI rate tables are keyed by ISO 3166-1 alpha-2 code, while employee
//! records carry nationality as free text (country name, demonym, or an
//! alpha-2 code). This module provides the static lookup used to bridge
//! the two.

/// Nationality spellings mapped to ISO 3166-1 alpha-2 codes.
///
/// Country names and demonyms are matched case-insensitively. The table
/// covers the nationalities commonly present in GCC-region payrolls.
const NATIONALITY_ISO_CODES: &[(&str, &str)] = &[
    ("saudi arabia", "SA"),
    ("saudi", "SA"),
    ("united arab emirates", "AE"),
    ("emirati", "AE"),
    ("kuwait", "KW"),
    ("kuwaiti", "KW"),
    ("bahrain", "BH"),
    ("bahraini", "BH"),
    ("qatar", "QA"),
    ("qatari", "QA"),
    ("oman", "OM"),
    ("omani", "OM"),
    ("egypt", "EG"),
    ("egyptian", "EG"),
    ("jordan", "JO"),
    ("jordanian", "JO"),
    ("lebanon", "LB"),
    ("lebanese", "LB"),
    ("syria", "SY"),
    ("syrian", "SY"),
    ("yemen", "YE"),
    ("yemeni", "YE"),
    ("iraq", "IQ"),
    ("iraqi", "IQ"),
    ("palestine", "PS"),
    ("palestinian", "PS"),
    ("sudan", "SD"),
    ("sudanese", "SD"),
    ("morocco", "MA"),
    ("moroccan", "MA"),
    ("tunisia", "TN"),
    ("tunisian", "TN"),
    ("india", "IN"),
    ("indian", "IN"),
    ("pakistan", "PK"),
    ("pakistani", "PK"),
    ("bangladesh", "BD"),
    ("bangladeshi", "BD"),
    ("sri lanka", "LK"),
    ("sri lankan", "LK"),
    ("nepal", "NP"),
    ("nepalese", "NP"),
    ("nepali", "NP"),
    ("philippines", "PH"),
    ("filipino", "PH"),
    ("indonesia", "ID"),
    ("indonesian", "ID"),
    ("malaysia", "MY"),
    ("malaysian", "MY"),
    ("ethiopia", "ET"),
    ("ethiopian", "ET"),
    ("kenya", "KE"),
    ("kenyan", "KE"),
    ("nigeria", "NG"),
    ("nigerian", "NG"),
    ("united kingdom", "GB"),
    ("british", "GB"),
    ("united states", "US"),
    ("american", "US"),
    ("canada", "CA"),
    ("canadian", "CA"),
    ("france", "FR"),
    ("french", "FR"),
    ("germany", "DE"),
    ("german", "DE"),
    ("turkey", "TR"),
    ("turkish", "TR"),
];

/// Maps a nationality string to its ISO 3166-1 alpha-2 code.
///
/// Accepts country names and demonyms (case-insensitive), and passes
/// through alpha-2 codes already present in the table. Returns `None` for
/// anything unmapped; GOSI computation treats that as a degraded lookup.
///
/// # Examples
///
/// ```
/// use hrflow_engine::calculation::iso_country_code;
///
/// assert_eq!(iso_country_code("Saudi Arabia"), Some("SA"));
/// assert_eq!(iso_country_code("indian"), Some("IN"));
/// assert_eq!(iso_country_code("EG"), Some("EG"));
/// assert_eq!(iso_country_code("Atlantis"), None);
/// ```
pub fn iso_country_code(nationality: &str) -> Option<&'static str> {
    let needle = nationality.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some((_, code)) = NATIONALITY_ISO_CODES
        .iter()
        .find(|(name, _)| *name == needle)
    {
        return Some(code);
    }

    // Already an alpha-2 code the table knows about.
    let upper = nationality.trim().to_uppercase();
    NATIONALITY_ISO_CODES
        .iter()
        .map(|(_, code)| *code)
        .find(|code| *code == upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_name_lookup() {
        assert_eq!(iso_country_code("Saudi Arabia"), Some("SA"));
        assert_eq!(iso_country_code("Philippines"), Some("PH"));
    }

    #[test]
    fn test_demonym_lookup() {
        assert_eq!(iso_country_code("Egyptian"), Some("EG"));
        assert_eq!(iso_country_code("Pakistani"), Some("PK"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(iso_country_code("SAUDI ARABIA"), Some("SA"));
        assert_eq!(iso_country_code("indian"), Some("IN"));
    }

    #[test]
    fn test_lookup_trims_whitespace() {
        assert_eq!(iso_country_code("  Jordan  "), Some("JO"));
    }

    #[test]
    fn test_alpha_2_code_passes_through() {
        assert_eq!(iso_country_code("SA"), Some("SA"));
        assert_eq!(iso_country_code("in"), Some("IN"));
    }

    #[test]
    fn test_unknown_nationality_is_none() {
        assert_eq!(iso_country_code("Atlantis"), None);
        assert_eq!(iso_country_code("ZZ"), None);
    }

    #[test]
    fn test_empty_input_is_none() {
        assert_eq!(iso_country_code(""), None);
        assert_eq!(iso_country_code("   "), None);
    }
}
