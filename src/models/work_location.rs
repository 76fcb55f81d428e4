//! Work location model and GOSI rate tables.
//!
//! A work location gates GOSI entirely (`gosi_enabled`) and carries the
//! contribution rates keyed by ISO 3166-1 alpha-2 nationality code.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// GOSI contribution rates for one nationality.
///
/// The current schema carries separate employee and employer percentages.
/// Older stored data carries a single `percentage` field meaning the
/// employee rate only; resolution prefers the new schema over the legacy
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GosiNationalityRate {
    /// The employee contribution percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_rate: Option<Decimal>,
    /// The employer contribution percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer_rate: Option<Decimal>,
    /// Legacy single-field schema: the employee rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Decimal>,
}

impl GosiNationalityRate {
    /// Resolves the employee contribution percentage.
    ///
    /// Prefers `employee_rate`, falls back to the legacy `percentage`
    /// field, and defaults to zero when neither is present.
    pub fn resolved_employee_rate(&self) -> Decimal {
        self.employee_rate
            .or(self.percentage)
            .unwrap_or(Decimal::ZERO)
    }

    /// Resolves the employer contribution percentage, defaulting to zero.
    ///
    /// The legacy schema never carried an employer rate, so there is no
    /// fallback here.
    pub fn resolved_employer_rate(&self) -> Decimal {
        self.employer_rate.unwrap_or(Decimal::ZERO)
    }
}

/// A work location with its GOSI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLocation {
    /// Unique identifier for the work location.
    pub id: String,
    /// Human-readable location name.
    pub name: String,
    /// Master switch: when false, GOSI contributions are always zero for
    /// employees at this location, regardless of the employee flag.
    pub gosi_enabled: bool,
    /// Contribution rates keyed by ISO 3166-1 alpha-2 nationality code.
    #[serde(default)]
    pub gosi_nationality_rates: HashMap<String, GosiNationalityRate>,
}

impl WorkLocation {
    /// Looks up the GOSI rate entry for an ISO nationality code.
    pub fn rate_for(&self, iso_code: &str) -> Option<&GosiNationalityRate> {
        self.gosi_nationality_rates.get(iso_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_work_location() {
        let json = r#"{
            "id": "riyadh_hq",
            "name": "Riyadh Headquarters",
            "gosi_enabled": true,
            "gosi_nationality_rates": {
                "SA": {"employee_rate": "9.75", "employer_rate": "11.75"},
                "IN": {"percentage": "2.0"}
            }
        }"#;

        let location: WorkLocation = serde_json::from_str(json).unwrap();
        assert!(location.gosi_enabled);
        assert_eq!(location.gosi_nationality_rates.len(), 2);

        let sa = location.rate_for("SA").unwrap();
        assert_eq!(sa.employee_rate, Some(dec("9.75")));
        assert_eq!(sa.employer_rate, Some(dec("11.75")));
        assert_eq!(sa.percentage, None);
    }

    #[test]
    fn test_resolved_employee_rate_prefers_new_schema() {
        let rate = GosiNationalityRate {
            employee_rate: Some(dec("9.75")),
            employer_rate: None,
            percentage: Some(dec("2.0")),
        };
        assert_eq!(rate.resolved_employee_rate(), dec("9.75"));
    }

    #[test]
    fn test_resolved_employee_rate_falls_back_to_legacy_percentage() {
        let rate = GosiNationalityRate {
            employee_rate: None,
            employer_rate: None,
            percentage: Some(dec("2.0")),
        };
        assert_eq!(rate.resolved_employee_rate(), dec("2.0"));
    }

    #[test]
    fn test_resolved_rates_default_to_zero() {
        let rate = GosiNationalityRate::default();
        assert_eq!(rate.resolved_employee_rate(), Decimal::ZERO);
        assert_eq!(rate.resolved_employer_rate(), Decimal::ZERO);
    }

    #[test]
    fn test_rate_for_unknown_code_is_none() {
        let location = WorkLocation {
            id: "dubai_branch".to_string(),
            name: "Dubai Branch".to_string(),
            gosi_enabled: false,
            gosi_nationality_rates: HashMap::new(),
        };
        assert!(location.rate_for("SA").is_none());
    }

    #[test]
    fn test_missing_rates_map_defaults_empty() {
        let json = r#"{
            "id": "remote",
            "name": "Remote",
            "gosi_enabled": false
        }"#;

        let location: WorkLocation = serde_json::from_str(json).unwrap();
        assert!(location.gosi_nationality_rates.is_empty());
    }
}
