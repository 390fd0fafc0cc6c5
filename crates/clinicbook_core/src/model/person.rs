//! Person (patient) record.
//!
//! # Invariants
//! - Two persons are the same entity iff their identity numbers match.
//! - Set-valued fields are ordered, so rendering is deterministic.

use crate::model::fields::{
    Address, AlcoholicRecord, Allergy, BloodType, DateOfBirth, Email, EmergencyContact, Gender,
    IdentityNumber, Medicine, Name, PastMedicalHistory, Phone, SmokingRecord, Tag,
};
use crate::model::record::{Record, RecordKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Patient record. Fields are public for read access; edits go through
/// `EditPersonDescriptor` and produce a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub identity_number: IdentityNumber,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub emergency_contact: EmergencyContact,
    pub date_of_birth: DateOfBirth,
    pub blood_type: BloodType,
    pub gender: Gender,
    pub alcoholic_record: AlcoholicRecord,
    pub smoking_record: SmokingRecord,
    pub past_medical_history: PastMedicalHistory,
    pub tags: BTreeSet<Tag>,
    pub allergies: BTreeSet<Allergy>,
    pub medicines: BTreeSet<Medicine>,
}

impl Record for Person {
    const KIND: RecordKind = RecordKind::Person;

    fn is_same_entity(&self, other: &Self) -> bool {
        self.identity_number == other.identity_number
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Identity Number: {}; Phone: {}; Email: {}; Address: {}; \
             Emergency Contact: {}; Date of Birth: {}; Blood Type: {}; Gender: {}; \
             Alcoholic Record: {}; Smoking Record: {}; Past Medical History: {}; \
             Tags: {}; Allergies: {}; Medicines: {}",
            self.name,
            self.identity_number,
            self.phone,
            self.email,
            self.address,
            self.emergency_contact,
            self.date_of_birth,
            self.blood_type,
            self.gender,
            self.alcoholic_record,
            self.smoking_record,
            self.past_medical_history,
            bracketed(&self.tags),
            bracketed(&self.allergies),
            bracketed(&self.medicines),
        )
    }
}

fn bracketed<T: Display>(items: &BTreeSet<T>) -> String {
    items.iter().map(|item| format!("[{item}]")).collect()
}
