//! Notice config model: the full field set describing one approval notice.
//!
//! Every field is an opaque display string - dates and numbers are never
//! parsed. `NoticeConfig` is the always-complete form held by a form
//! session; `PartialNoticeConfig` is the all-optional mirror used for
//! external input (JSON files, overrides) and as the renderer's input,
//! where "absent" and "explicitly empty" mean different things.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, Result};

/// Applicant block of a notice. Always present as a nested record,
/// defaulting to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ApplicantDetails {
    pub name: String,
    pub passport_no: String,
    pub arrival_airport: String,
    pub date_time_of_arrival: String,
    pub flight_no: String,
}

/// The full set of fields describing one approval notice.
///
/// No identity beyond its fields, no uniqueness constraint, no parsed
/// representations. Reference fields may stay blank until finalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NoticeConfig {
    pub reference_no: String,
    pub payment_ref_no: String,
    pub applicant_details: ApplicantDetails,
    pub date_time_of_application_transfer: String,
    pub date_time_of_visa_determination: String,
}

impl NoticeConfig {
    /// Returns a new all-blank config.
    ///
    /// Every call returns a fresh, independently mutable instance; there is
    /// no shared default object anywhere.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Wrap every field in `Some`, producing a fully specified partial.
    pub fn into_partial(self) -> PartialNoticeConfig {
        PartialNoticeConfig {
            reference_no: Some(self.reference_no),
            payment_ref_no: Some(self.payment_ref_no),
            applicant_details: Some(PartialApplicantDetails {
                name: Some(self.applicant_details.name),
                passport_no: Some(self.applicant_details.passport_no),
                arrival_airport: Some(self.applicant_details.arrival_airport),
                date_time_of_arrival: Some(self.applicant_details.date_time_of_arrival),
                flight_no: Some(self.applicant_details.flight_no),
            }),
            date_time_of_application_transfer: Some(self.date_time_of_application_transfer),
            date_time_of_visa_determination: Some(self.date_time_of_visa_determination),
        }
    }
}

/// Optional mirror of [`ApplicantDetails`]: any subset of sub-fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialApplicantDetails {
    pub name: Option<String>,
    pub passport_no: Option<String>,
    pub arrival_airport: Option<String>,
    pub date_time_of_arrival: Option<String>,
    pub flight_no: Option<String>,
}

/// Optional mirror of [`NoticeConfig`]: any subset of fields, including none.
///
/// This is the JSON config-file shape. Field names follow the historical
/// camelCase wire format (`referenceNo`, `applicantDetails`, ...); unknown
/// fields are rejected so typos surface early.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialNoticeConfig {
    pub reference_no: Option<String>,
    pub payment_ref_no: Option<String>,
    pub applicant_details: Option<PartialApplicantDetails>,
    pub date_time_of_application_transfer: Option<String>,
    pub date_time_of_visa_determination: Option<String>,
}

impl PartialNoticeConfig {
    /// Read and parse a JSON config file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("Failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&data)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_returns_independent_instances() {
        let mut a = NoticeConfig::blank();
        let b = NoticeConfig::blank();
        a.reference_no = "REF00000001".to_string();
        a.applicant_details.name = "edited".to_string();
        assert_eq!(b.reference_no, "");
        assert_eq!(b.applicant_details.name, "");
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = r#"{
            "referenceNo": "REF11112222",
            "applicantDetails": { "passportNo": "X1234567X" },
            "dateTimeOfVisaDetermination": "15/12/2024 02:00 PM"
        }"#;
        let partial: PartialNoticeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(partial.reference_no.as_deref(), Some("REF11112222"));
        let applicant = partial.applicant_details.unwrap();
        assert_eq!(applicant.passport_no.as_deref(), Some("X1234567X"));
        assert_eq!(applicant.name, None);
        assert_eq!(
            partial.date_time_of_visa_determination.as_deref(),
            Some("15/12/2024 02:00 PM")
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = r#"{ "refrenceNo": "REF11112222" }"#;
        assert!(serde_json::from_str::<PartialNoticeConfig>(json).is_err());
    }

    #[test]
    fn full_config_round_trips_as_partial() {
        let mut cfg = NoticeConfig::blank();
        cfg.applicant_details.flight_no = "SQ706".to_string();
        let json = serde_json::to_string(&cfg).unwrap();
        let partial: PartialNoticeConfig = serde_json::from_str(&json).unwrap();
        let applicant = partial.applicant_details.unwrap();
        assert_eq!(applicant.flight_no.as_deref(), Some("SQ706"));
        assert_eq!(applicant.name.as_deref(), Some(""));
    }
}
