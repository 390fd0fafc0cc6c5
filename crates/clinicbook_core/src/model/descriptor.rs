//! Edit descriptors: sparse, all-optional projections of a record.
//!
//! # Responsibility
//! - Carry "what the user wants to change" from the parser to the edit
//!   command.
//! - Merge onto an existing record without mutating it.
//!
//! # Invariants
//! - `None` means "leave unchanged"; `Some(value)` means "change to value".
//! - `merge` is field-local: each output field depends only on the same
//!   field of the descriptor and the original.
//! - A descriptor with no field set must be rejected before `merge` is used
//!   as an edit request.
//! - Derived `Debug` renders fields in declaration order; that order is the
//!   stable debug representation.

use crate::model::appointment::Appointment;
use crate::model::fields::{
    Address, AlcoholicRecord, Allergy, AppointmentNotes, AppointmentTime, BloodType, DateOfBirth,
    Email, EmergencyContact, Gender, IdentityNumber, Medicine, Name, PastMedicalHistory, Phone,
    SmokingRecord, Tag,
};
use crate::model::person::Person;
use crate::model::record::Record;
use std::collections::BTreeSet;
use std::fmt::Debug;

/// Sparse edit request for one record type.
pub trait Descriptor: Clone + Debug + Default + PartialEq {
    type Target: Record;

    /// Returns true iff at least one field is present.
    fn is_any_field_edited(&self) -> bool;

    /// Builds a new record taking each present field from `self` and every
    /// other field from `original`.
    fn merge(&self, original: &Self::Target) -> Self::Target;
}

/// The field-local merge rule shared by every descriptor.
pub fn merge_field<T: Clone>(edited: Option<&T>, current: &T) -> T {
    edited.unwrap_or(current).clone()
}

/// Stores the details to edit a person with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub identity_number: Option<IdentityNumber>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub emergency_contact: Option<EmergencyContact>,
    pub date_of_birth: Option<DateOfBirth>,
    pub blood_type: Option<BloodType>,
    pub gender: Option<Gender>,
    pub alcoholic_record: Option<AlcoholicRecord>,
    pub smoking_record: Option<SmokingRecord>,
    pub past_medical_history: Option<PastMedicalHistory>,
    /// `Some(empty)` clears all tags.
    pub tags: Option<BTreeSet<Tag>>,
    pub allergies: Option<BTreeSet<Allergy>>,
    pub medicines: Option<BTreeSet<Medicine>>,
}

impl Descriptor for EditPersonDescriptor {
    type Target = Person;

    fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.identity_number.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.emergency_contact.is_some()
            || self.date_of_birth.is_some()
            || self.blood_type.is_some()
            || self.gender.is_some()
            || self.alcoholic_record.is_some()
            || self.smoking_record.is_some()
            || self.past_medical_history.is_some()
            || self.tags.is_some()
            || self.allergies.is_some()
            || self.medicines.is_some()
    }

    fn merge(&self, original: &Person) -> Person {
        Person {
            name: merge_field(self.name.as_ref(), &original.name),
            identity_number: merge_field(self.identity_number.as_ref(), &original.identity_number),
            phone: merge_field(self.phone.as_ref(), &original.phone),
            email: merge_field(self.email.as_ref(), &original.email),
            address: merge_field(self.address.as_ref(), &original.address),
            emergency_contact: merge_field(
                self.emergency_contact.as_ref(),
                &original.emergency_contact,
            ),
            date_of_birth: merge_field(self.date_of_birth.as_ref(), &original.date_of_birth),
            blood_type: merge_field(self.blood_type.as_ref(), &original.blood_type),
            gender: merge_field(self.gender.as_ref(), &original.gender),
            alcoholic_record: merge_field(
                self.alcoholic_record.as_ref(),
                &original.alcoholic_record,
            ),
            smoking_record: merge_field(self.smoking_record.as_ref(), &original.smoking_record),
            past_medical_history: merge_field(
                self.past_medical_history.as_ref(),
                &original.past_medical_history,
            ),
            tags: merge_field(self.tags.as_ref(), &original.tags),
            allergies: merge_field(self.allergies.as_ref(), &original.allergies),
            medicines: merge_field(self.medicines.as_ref(), &original.medicines),
        }
    }
}

/// Stores the details to edit an appointment with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditAppointmentDescriptor {
    pub time: Option<AppointmentTime>,
    pub notes: Option<AppointmentNotes>,
    pub patient_id: Option<IdentityNumber>,
}

impl Descriptor for EditAppointmentDescriptor {
    type Target = Appointment;

    fn is_any_field_edited(&self) -> bool {
        self.time.is_some() || self.notes.is_some() || self.patient_id.is_some()
    }

    fn merge(&self, original: &Appointment) -> Appointment {
        Appointment {
            notes: merge_field(self.notes.as_ref(), &original.notes),
            time: merge_field(self.time.as_ref(), &original.time),
            patient_id: merge_field(self.patient_id.as_ref(), &original.patient_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{merge_field, Descriptor, EditAppointmentDescriptor, EditPersonDescriptor};
    use crate::model::appointment::Appointment;
    use crate::model::fields::{
        AppointmentNotes, AppointmentTime, BloodType, IdentityNumber, Name, Phone, Tag,
    };
    use crate::test_support::{amy, bob};
    use std::collections::BTreeSet;

    fn checkup() -> Appointment {
        Appointment::new(
            AppointmentNotes::parse("checkup").unwrap(),
            AppointmentTime::parse("01-02-2030 09:00").unwrap(),
            IdentityNumber::parse("S1234567A").unwrap(),
        )
    }

    #[test]
    fn merge_field_prefers_edited_value() {
        assert_eq!(merge_field(Some(&2), &1), 2);
        assert_eq!(merge_field(None, &1), 1);
    }

    #[test]
    fn empty_descriptors_report_no_edits() {
        assert!(!EditPersonDescriptor::default().is_any_field_edited());
        assert!(!EditAppointmentDescriptor::default().is_any_field_edited());
    }

    #[test]
    fn any_single_field_counts_as_edited() {
        let descriptor = EditPersonDescriptor {
            name: Some(Name::parse("Alice").unwrap()),
            ..EditPersonDescriptor::default()
        };
        assert!(descriptor.is_any_field_edited());

        let cleared_tags = EditPersonDescriptor {
            tags: Some(BTreeSet::new()),
            ..EditPersonDescriptor::default()
        };
        assert!(cleared_tags.is_any_field_edited());

        let appointment = EditAppointmentDescriptor {
            patient_id: Some(IdentityNumber::parse("T7654321Z").unwrap()),
            ..EditAppointmentDescriptor::default()
        };
        assert!(appointment.is_any_field_edited());
    }

    #[test]
    fn merge_replaces_only_present_fields() {
        let original = amy();
        let descriptor = EditPersonDescriptor {
            phone: Some(Phone::parse("81234567").unwrap()),
            blood_type: Some(BloodType::ONegative),
            tags: Some(BTreeSet::new()),
            ..EditPersonDescriptor::default()
        };

        let merged = descriptor.merge(&original);
        assert_eq!(merged.phone.as_str(), "81234567");
        assert_eq!(merged.blood_type, BloodType::ONegative);
        assert!(merged.tags.is_empty());
        assert_eq!(merged.name, original.name);
        assert_eq!(merged.identity_number, original.identity_number);
        assert_eq!(merged.allergies, original.allergies);
    }

    #[test]
    fn merge_leaves_inputs_untouched() {
        let original = checkup();
        let descriptor = EditAppointmentDescriptor {
            time: Some(AppointmentTime::parse("02-02-2030 10:30").unwrap()),
            ..EditAppointmentDescriptor::default()
        };
        let descriptor_before = descriptor.clone();
        let original_before = original.clone();

        let merged = descriptor.merge(&original);
        assert_eq!(merged.time.to_string(), "02-02-2030 10:30");
        assert_eq!(merged.notes, original.notes);
        assert_eq!(original, original_before);
        assert_eq!(descriptor, descriptor_before);
    }

    #[test]
    fn empty_merge_is_identity() {
        let original = amy();
        assert_eq!(EditPersonDescriptor::default().merge(&original), original);
        let appointment = checkup();
        assert_eq!(
            EditAppointmentDescriptor::default().merge(&appointment),
            appointment
        );
    }

    #[test]
    fn equality_is_field_wise() {
        let mut first = EditPersonDescriptor {
            name: Some(Name::parse("Amy Bee").unwrap()),
            ..EditPersonDescriptor::default()
        };
        let copy = first.clone();
        assert_eq!(first, copy);

        first.tags = Some(
            ["friend"]
                .into_iter()
                .map(|value| Tag::parse(value).unwrap())
                .collect(),
        );
        assert_ne!(first, copy);
        assert_ne!(
            first,
            EditPersonDescriptor {
                tags: first.tags.clone(),
                ..EditPersonDescriptor::default()
            }
        );
    }

    #[test]
    fn debug_lists_fields_in_declaration_order() {
        let rendered = format!("{:?}", EditAppointmentDescriptor::default());
        assert_eq!(
            rendered,
            "EditAppointmentDescriptor { time: None, notes: None, patient_id: None }"
        );

        let person = format!("{:?}", EditPersonDescriptor::default());
        let name_at = person.find("name:").unwrap();
        let identity_at = person.find("identity_number:").unwrap();
        let medicines_at = person.find("medicines:").unwrap();
        assert!(name_at < identity_at && identity_at < medicines_at);
    }

    /// Builds `(field, descriptor with only that field set, expected merge)`
    /// taking the edited value from `$source` and everything else from
    /// `$original`.
    macro_rules! single_field_case {
        ($descriptor:ident, $original:expr, $source:expr, $field:ident) => {{
            let (original, source) = ($original, $source);
            let descriptor = $descriptor {
                $field: Some(source.$field.clone()),
                ..$descriptor::default()
            };
            let mut expected = original.clone();
            expected.$field = source.$field.clone();
            (stringify!($field), descriptor, expected)
        }};
    }

    #[test]
    fn each_person_field_is_edited_and_merged_on_its_own() {
        let cases = vec![
            single_field_case!(EditPersonDescriptor, amy(), bob(), name),
            single_field_case!(EditPersonDescriptor, amy(), bob(), identity_number),
            single_field_case!(EditPersonDescriptor, amy(), bob(), phone),
            single_field_case!(EditPersonDescriptor, amy(), bob(), email),
            single_field_case!(EditPersonDescriptor, amy(), bob(), address),
            single_field_case!(EditPersonDescriptor, amy(), bob(), emergency_contact),
            single_field_case!(EditPersonDescriptor, amy(), bob(), date_of_birth),
            single_field_case!(EditPersonDescriptor, amy(), bob(), blood_type),
            single_field_case!(EditPersonDescriptor, amy(), bob(), gender),
            single_field_case!(EditPersonDescriptor, amy(), bob(), alcoholic_record),
            single_field_case!(EditPersonDescriptor, amy(), bob(), smoking_record),
            single_field_case!(EditPersonDescriptor, amy(), bob(), past_medical_history),
            single_field_case!(EditPersonDescriptor, amy(), bob(), tags),
            single_field_case!(EditPersonDescriptor, amy(), bob(), allergies),
            single_field_case!(EditPersonDescriptor, amy(), bob(), medicines),
        ];
        assert_eq!(cases.len(), 15);

        let original = amy();
        for (field, descriptor, expected) in cases {
            assert!(descriptor.is_any_field_edited(), "{field} should count as edited");
            assert_ne!(expected, original, "{field} fixture values must differ");
            assert_eq!(descriptor.merge(&original), expected, "{field} merge");
        }
    }

    #[test]
    fn each_appointment_field_is_edited_and_merged_on_its_own() {
        let replacement = Appointment::new(
            AppointmentNotes::parse("follow up").unwrap(),
            AppointmentTime::parse("09-09-2031 14:45").unwrap(),
            IdentityNumber::parse("T7654321Z").unwrap(),
        );
        let cases = vec![
            single_field_case!(EditAppointmentDescriptor, checkup(), replacement.clone(), time),
            single_field_case!(EditAppointmentDescriptor, checkup(), replacement.clone(), notes),
            single_field_case!(EditAppointmentDescriptor, checkup(), replacement.clone(), patient_id),
        ];

        let original = checkup();
        for (field, descriptor, expected) in cases {
            assert!(descriptor.is_any_field_edited(), "{field} should count as edited");
            assert_ne!(expected, original, "{field} fixture values must differ");
            assert_eq!(descriptor.merge(&original), expected, "{field} merge");
        }
    }
}
