//! Field prefixes recognised on the command line.

use std::fmt::{Display, Formatter};

/// Marker introducing one field value, e.g. `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_IDENTITY_NUMBER: Prefix = Prefix::new("i/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_EMERGENCY_CONTACT: Prefix = Prefix::new("ec/");
pub const PREFIX_DATE_OF_BIRTH: Prefix = Prefix::new("dob/");
pub const PREFIX_BLOOD_TYPE: Prefix = Prefix::new("bt/");
pub const PREFIX_GENDER: Prefix = Prefix::new("g/");
pub const PREFIX_ALCOHOLIC_RECORD: Prefix = Prefix::new("ar/");
pub const PREFIX_SMOKING_RECORD: Prefix = Prefix::new("sr/");
pub const PREFIX_PAST_MEDICAL_HISTORY: Prefix = Prefix::new("pmh/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_ALLERGY: Prefix = Prefix::new("al/");
pub const PREFIX_MEDICINE: Prefix = Prefix::new("m/");
pub const PREFIX_APPOINTMENT_TIME: Prefix = Prefix::new("at/");
pub const PREFIX_APPOINTMENT_NOTE: Prefix = Prefix::new("an/");

/// Person prefixes that may appear at most once per command.
pub const PERSON_SINGLE_VALUED: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_IDENTITY_NUMBER,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_EMERGENCY_CONTACT,
    PREFIX_DATE_OF_BIRTH,
    PREFIX_BLOOD_TYPE,
    PREFIX_GENDER,
    PREFIX_ALCOHOLIC_RECORD,
    PREFIX_SMOKING_RECORD,
    PREFIX_PAST_MEDICAL_HISTORY,
];

/// Person prefixes that may repeat to build a set.
pub const PERSON_MULTI_VALUED: &[Prefix] = &[PREFIX_TAG, PREFIX_ALLERGY, PREFIX_MEDICINE];
