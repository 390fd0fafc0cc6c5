//! Validated semantic field types shared by person and appointment records.
//!
//! # Responsibility
//! - Turn raw user text into typed field values, or a `FieldError` naming the
//!   offending field.
//! - Give every field a stable serde shape that re-validates on decode.
//!
//! # Invariants
//! - Values are only constructed through `parse` (or serde, which routes
//!   through `parse`), so a held value is always valid.
//! - Raw input is trimmed before validation.

use chrono::{Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input/output format for dates (`dd-MM-yyyy`).
pub const DATE_FORMAT: &str = "%d-%m-%Y";
/// Input/output format for appointment times (`dd-MM-yyyy HH:mm`).
pub const DATE_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]]+( [[:alnum:]]+)*$").expect("valid name regex"));
static IDENTITY_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[STFGM]\d{7}[A-Z]$").expect("valid identity number regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]{2,})+$")
        .expect("valid email regex")
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[[:alnum:]]+$").expect("valid tag regex"));
static LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]][[:alnum:] \-]*$").expect("valid label regex"));

/// Validation failure for one semantic field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field label, e.g. `name` or `appointment time`.
    pub field: &'static str,
    /// Human-readable constraint the input violated.
    pub constraint: &'static str,
}

impl FieldError {
    fn new(field: &'static str, constraint: &'static str) -> Self {
        Self { field, constraint }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid {}: {}", self.field, self.constraint)
    }
}

impl Error for FieldError {}

/// Declares a string-backed field type validated by `$normalize`.
///
/// `$normalize` receives trimmed input and returns the canonical stored text,
/// or `None` when the input violates `$constraint`.
macro_rules! text_field {
    ($(#[$meta:meta])* $name:ident, $label:literal, $constraint:literal, $normalize:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Label used in validation messages.
            pub const FIELD: &'static str = $label;
            /// Constraint shown to users on invalid input.
            pub const CONSTRAINT: &'static str = $constraint;

            /// Parses and validates raw input.
            pub fn parse(raw: impl AsRef<str>) -> Result<Self, FieldError> {
                $normalize(raw.as_ref().trim())
                    .map(Self)
                    .ok_or(FieldError::new($label, $constraint))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = FieldError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

text_field!(
    /// Person display name.
    Name,
    "name",
    "Names should only contain alphanumeric characters and spaces, and it should not be blank",
    normalize_name
);
text_field!(
    /// National identity number; the identifying field of a person.
    IdentityNumber,
    "identity number",
    "Identity numbers should start with S, T, F, G or M, followed by 7 digits and end with a letter",
    normalize_identity_number
);
text_field!(
    Phone,
    "phone",
    "Phone numbers should only contain numbers, and it should be at least 3 digits long",
    normalize_phone
);
text_field!(
    Email,
    "email",
    "Emails should be of the format local-part@domain, where the domain has at least one dot",
    normalize_email
);
text_field!(
    Address,
    "address",
    "Addresses can take any values, and it should not be blank",
    normalize_non_blank
);
text_field!(
    /// Phone number of the person to call in an emergency.
    EmergencyContact,
    "emergency contact",
    "Emergency contacts should only contain numbers, and it should be at least 3 digits long",
    normalize_phone
);
text_field!(
    AlcoholicRecord,
    "alcoholic record",
    "Alcoholic records should be a single line of text",
    normalize_single_line
);
text_field!(
    SmokingRecord,
    "smoking record",
    "Smoking records should be a single line of text",
    normalize_single_line
);
text_field!(
    PastMedicalHistory,
    "past medical history",
    "Past medical history should be a single line of text",
    normalize_single_line
);
text_field!(
    Tag,
    "tag",
    "Tags names should be alphanumeric",
    normalize_tag
);
text_field!(
    Allergy,
    "allergy",
    "Allergies should be alphanumeric words separated by spaces or hyphens",
    normalize_label
);
text_field!(
    Medicine,
    "medicine",
    "Medicines should be alphanumeric words separated by spaces or hyphens",
    normalize_label
);
text_field!(
    /// Free-text note attached to an appointment. May be empty.
    AppointmentNotes,
    "appointment notes",
    "Appointment notes should be a single line of text",
    normalize_single_line
);

fn normalize_name(value: &str) -> Option<String> {
    NAME_RE.is_match(value).then(|| value.to_string())
}

fn normalize_identity_number(value: &str) -> Option<String> {
    let upper = value.to_ascii_uppercase();
    IDENTITY_NUMBER_RE.is_match(&upper).then_some(upper)
}

fn normalize_phone(value: &str) -> Option<String> {
    PHONE_RE.is_match(value).then(|| value.to_string())
}

fn normalize_email(value: &str) -> Option<String> {
    EMAIL_RE.is_match(value).then(|| value.to_string())
}

fn normalize_non_blank(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn normalize_single_line(value: &str) -> Option<String> {
    (!value.contains(['\n', '\r'])).then(|| value.to_string())
}

fn normalize_tag(value: &str) -> Option<String> {
    TAG_RE.is_match(value).then(|| value.to_string())
}

fn normalize_label(value: &str) -> Option<String> {
    LABEL_RE.is_match(value).then(|| value.to_string())
}

/// Date of birth, never later than today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    pub const FIELD: &'static str = "date of birth";
    pub const CONSTRAINT: &'static str =
        "Dates of birth should be in the format dd-MM-yyyy and must not be in the future";

    pub fn parse(raw: impl AsRef<str>) -> Result<Self, FieldError> {
        let error = FieldError::new(Self::FIELD, Self::CONSTRAINT);
        let date = NaiveDate::parse_from_str(raw.as_ref().trim(), DATE_FORMAT)
            .map_err(|_| error.clone())?;
        if date > Local::now().date_naive() {
            return Err(error);
        }
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl Display for DateOfBirth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl TryFrom<String> for DateOfBirth {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<DateOfBirth> for String {
    fn from(value: DateOfBirth) -> Self {
        value.to_string()
    }
}

/// Start time of an appointment, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AppointmentTime(NaiveDateTime);

impl AppointmentTime {
    pub const FIELD: &'static str = "appointment time";
    pub const CONSTRAINT: &'static str = "Appointment times should be in the format dd-MM-yyyy HH:mm";

    pub fn parse(raw: impl AsRef<str>) -> Result<Self, FieldError> {
        NaiveDateTime::parse_from_str(raw.as_ref().trim(), DATE_TIME_FORMAT)
            .map(Self)
            .map_err(|_| FieldError::new(Self::FIELD, Self::CONSTRAINT))
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.0
    }
}

impl Display for AppointmentTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_TIME_FORMAT))
    }
}

impl TryFrom<String> for AppointmentTime {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<AppointmentTime> for String {
    fn from(value: AppointmentTime) -> Self {
        value.to_string()
    }
}

/// ABO/Rh blood group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BloodType {
    APositive,
    ANegative,
    BPositive,
    BNegative,
    AbPositive,
    AbNegative,
    OPositive,
    ONegative,
}

impl BloodType {
    pub const FIELD: &'static str = "blood type";
    pub const CONSTRAINT: &'static str =
        "Blood types should be one of A+, A-, B+, B-, AB+, AB-, O+, O-";

    pub fn parse(raw: impl AsRef<str>) -> Result<Self, FieldError> {
        match raw.as_ref().trim().to_ascii_uppercase().as_str() {
            "A+" => Ok(Self::APositive),
            "A-" => Ok(Self::ANegative),
            "B+" => Ok(Self::BPositive),
            "B-" => Ok(Self::BNegative),
            "AB+" => Ok(Self::AbPositive),
            "AB-" => Ok(Self::AbNegative),
            "O+" => Ok(Self::OPositive),
            "O-" => Ok(Self::ONegative),
            _ => Err(FieldError::new(Self::FIELD, Self::CONSTRAINT)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::APositive => "A+",
            Self::ANegative => "A-",
            Self::BPositive => "B+",
            Self::BNegative => "B-",
            Self::AbPositive => "AB+",
            Self::AbNegative => "AB-",
            Self::OPositive => "O+",
            Self::ONegative => "O-",
        }
    }
}

impl Display for BloodType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for BloodType {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<BloodType> for String {
    fn from(value: BloodType) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const FIELD: &'static str = "gender";
    pub const CONSTRAINT: &'static str = "Gender should be one of M, F or O";

    pub fn parse(raw: impl AsRef<str>) -> Result<Self, FieldError> {
        match raw.as_ref().trim().to_ascii_uppercase().as_str() {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            "O" => Ok(Self::Other),
            _ => Err(FieldError::new(Self::FIELD, Self::CONSTRAINT)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Other => "O",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Gender {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        value.as_str().to_string()
    }
}
