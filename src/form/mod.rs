//! Interactive configuration form.
//!
//! Fields are addressed by a closed [`FormField`] enum rather than by raw
//! path strings, so an unknown or misspelled field name is an [`Error`]
//! instead of a silent no-op. The wire names accepted by [`FromStr`] are
//! the camelCase config keys, with nested applicant fields qualified as
//! `applicantDetails.<key>`.

use std::fmt;
use std::str::FromStr;

use crate::config::{NoticeConfig, PartialApplicantDetails, PartialNoticeConfig};
use crate::error::{Error, Result};
use crate::reference::{generate_reference, RefTag};

pub mod wizard;

/// Form sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    References,
    Applicant,
    Application,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::References, Section::Applicant, Section::Application];

    /// Heading shown above the section. The reference fields sit directly
    /// under the form title and carry none.
    pub fn heading(self) -> Option<&'static str> {
        match self {
            Section::References => None,
            Section::Applicant => Some("Applicant Details"),
            Section::Application => Some("Application Details"),
        }
    }
}

/// One editable field of a [`NoticeConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ReferenceNo,
    PaymentRefNo,
    ApplicantName,
    PassportNo,
    ArrivalAirport,
    DateTimeOfArrival,
    FlightNo,
    ApplicationTransfer,
    VisaDetermination,
}

impl FormField {
    /// Every field, in display order.
    pub const ALL: [FormField; 9] = [
        FormField::ReferenceNo,
        FormField::PaymentRefNo,
        FormField::ApplicantName,
        FormField::PassportNo,
        FormField::ArrivalAirport,
        FormField::DateTimeOfArrival,
        FormField::FlightNo,
        FormField::ApplicationTransfer,
        FormField::VisaDetermination,
    ];

    /// Wire name of the field, matching the JSON config keys.
    pub fn wire_name(self) -> &'static str {
        match self {
            FormField::ReferenceNo => "referenceNo",
            FormField::PaymentRefNo => "paymentRefNo",
            FormField::ApplicantName => "applicantDetails.name",
            FormField::PassportNo => "applicantDetails.passportNo",
            FormField::ArrivalAirport => "applicantDetails.arrivalAirport",
            FormField::DateTimeOfArrival => "applicantDetails.dateTimeOfArrival",
            FormField::FlightNo => "applicantDetails.flightNo",
            FormField::ApplicationTransfer => "dateTimeOfApplicationTransfer",
            FormField::VisaDetermination => "dateTimeOfVisaDetermination",
        }
    }

    /// Human-readable label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            FormField::ReferenceNo => "Reference No. (Leave blank for random)",
            FormField::PaymentRefNo => "Payment Ref No. (Leave blank for random)",
            FormField::ApplicantName => "Name",
            FormField::PassportNo => "Passport No.",
            FormField::ArrivalAirport => "Arrival Airport",
            FormField::DateTimeOfArrival => "Date/Time of Arrival",
            FormField::FlightNo => "Flight No.",
            FormField::ApplicationTransfer => "Date/Time of Application Transfer",
            FormField::VisaDetermination => "Date/Time of Visa Determination",
        }
    }

    /// Example value shown as an input hint, if the field has one.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            FormField::ReferenceNo | FormField::PaymentRefNo => None,
            FormField::ApplicantName => Some("John Doe"),
            FormField::PassportNo => Some("X1234567X"),
            FormField::ArrivalAirport => Some("BKK - Suvarnabhumi Intl."),
            FormField::DateTimeOfArrival => Some("20/12/2024 at 10:15 AM"),
            FormField::FlightNo => Some("SQ706"),
            FormField::ApplicationTransfer => Some("12/12/2024 09:30 AM"),
            FormField::VisaDetermination => Some("15/12/2024 02:00 PM"),
        }
    }

    /// Whether the field must be non-empty before the form can be
    /// submitted. The two references are optional; blanks are filled with
    /// generated values on submit.
    pub fn is_required(self) -> bool {
        !matches!(self, FormField::ReferenceNo | FormField::PaymentRefNo)
    }

    pub fn section(self) -> Section {
        match self {
            FormField::ReferenceNo | FormField::PaymentRefNo => Section::References,
            FormField::ApplicantName
            | FormField::PassportNo
            | FormField::ArrivalAirport
            | FormField::DateTimeOfArrival
            | FormField::FlightNo => Section::Applicant,
            FormField::ApplicationTransfer | FormField::VisaDetermination => Section::Application,
        }
    }

    /// Current value of this field in `config`.
    pub fn get(self, config: &NoticeConfig) -> &str {
        match self {
            FormField::ReferenceNo => &config.reference_no,
            FormField::PaymentRefNo => &config.payment_ref_no,
            FormField::ApplicantName => &config.applicant_details.name,
            FormField::PassportNo => &config.applicant_details.passport_no,
            FormField::ArrivalAirport => &config.applicant_details.arrival_airport,
            FormField::DateTimeOfArrival => &config.applicant_details.date_time_of_arrival,
            FormField::FlightNo => &config.applicant_details.flight_no,
            FormField::ApplicationTransfer => &config.date_time_of_application_transfer,
            FormField::VisaDetermination => &config.date_time_of_visa_determination,
        }
    }

    /// Overwrite this field in `config`.
    pub fn set(self, config: &mut NoticeConfig, value: String) {
        match self {
            FormField::ReferenceNo => config.reference_no = value,
            FormField::PaymentRefNo => config.payment_ref_no = value,
            FormField::ApplicantName => config.applicant_details.name = value,
            FormField::PassportNo => config.applicant_details.passport_no = value,
            FormField::ArrivalAirport => config.applicant_details.arrival_airport = value,
            FormField::DateTimeOfArrival => config.applicant_details.date_time_of_arrival = value,
            FormField::FlightNo => config.applicant_details.flight_no = value,
            FormField::ApplicationTransfer => config.date_time_of_application_transfer = value,
            FormField::VisaDetermination => config.date_time_of_visa_determination = value,
        }
    }

    /// Overwrite this field in a partial config, marking it present. The
    /// nested applicant record is created on demand.
    pub fn set_partial(self, partial: &mut PartialNoticeConfig, value: String) {
        fn applicant(partial: &mut PartialNoticeConfig) -> &mut PartialApplicantDetails {
            partial.applicant_details.get_or_insert_with(Default::default)
        }
        match self {
            FormField::ReferenceNo => partial.reference_no = Some(value),
            FormField::PaymentRefNo => partial.payment_ref_no = Some(value),
            FormField::ApplicantName => applicant(partial).name = Some(value),
            FormField::PassportNo => applicant(partial).passport_no = Some(value),
            FormField::ArrivalAirport => applicant(partial).arrival_airport = Some(value),
            FormField::DateTimeOfArrival => applicant(partial).date_time_of_arrival = Some(value),
            FormField::FlightNo => applicant(partial).flight_no = Some(value),
            FormField::ApplicationTransfer => {
                partial.date_time_of_application_transfer = Some(value)
            }
            FormField::VisaDetermination => partial.date_time_of_visa_determination = Some(value),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for FormField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FormField::ALL
            .into_iter()
            .find(|field| field.wire_name() == s)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

/// An in-progress form edit over a [`NoticeConfig`].
///
/// The session accepts field updates until [`submit`](Self::submit) is
/// called; submitting fills any blank reference with a generated one and
/// freezes the session. Further edits or a second submit are errors.
#[derive(Debug, Clone)]
pub struct FormSession {
    config: NoticeConfig,
    submitted: bool,
}

impl FormSession {
    /// Start a session over an all-blank config.
    pub fn new() -> Self {
        Self::with_config(NoticeConfig::blank())
    }

    /// Start a session over an existing config, e.g. one loaded from disk.
    pub fn with_config(config: NoticeConfig) -> Self {
        Self {
            config,
            submitted: false,
        }
    }

    pub fn config(&self) -> &NoticeConfig {
        &self.config
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Update one field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> Result<()> {
        if self.submitted {
            return Err(Error::SessionError(format!(
                "cannot edit {field} after submit"
            )));
        }
        field.set(&mut self.config, value.into());
        Ok(())
    }

    /// Update one field addressed by its wire name.
    pub fn set_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.set(name.parse::<FormField>()?, value)
    }

    /// Required fields that are still empty, in display order.
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| field.is_required() && field.get(&self.config).is_empty())
            .collect()
    }

    pub fn can_submit(&self) -> bool {
        !self.submitted && self.missing_required().is_empty()
    }

    /// Finalize the form: blank references are replaced with generated
    /// ones, provided values are kept verbatim. Returns the finished
    /// config and freezes the session.
    pub fn submit(&mut self) -> Result<&NoticeConfig> {
        if self.submitted {
            return Err(Error::SessionError("form already submitted".to_string()));
        }
        if self.config.reference_no.is_empty() {
            self.config.reference_no = generate_reference(RefTag::Application);
        }
        if self.config.payment_ref_no.is_empty() {
            self.config.payment_ref_no = generate_reference(RefTag::Payment);
        }
        self.submitted = true;
        Ok(&self.config)
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}
