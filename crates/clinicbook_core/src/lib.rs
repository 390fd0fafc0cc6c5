//! Core domain logic for Clinic Book.
//! Patient and appointment records, partial-update editing, command parsing
//! and execution over an in-memory book.

pub mod command;
pub mod config;
pub mod index;
pub mod logging;
pub mod model;
pub mod parser;
pub mod repo;
pub mod service;

pub use command::{Command, CommandError, CommandResult};
pub use config::{AppConfig, ConfigError};
pub use index::Index;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::appointment::Appointment;
pub use model::descriptor::{Descriptor, EditAppointmentDescriptor, EditPersonDescriptor};
pub use model::fields::FieldError;
pub use model::person::Person;
pub use model::record::{Record, RecordKind};
pub use parser::{parse_command, ParseError};
pub use repo::clinic_book::ClinicBook;
pub use repo::record_store::{RecordList, RecordStore, RepoError, RepoResult};
pub use service::clinic_service::{ClinicService, ServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::fields::{
        Address, AlcoholicRecord, Allergy, BloodType, DateOfBirth, Email, EmergencyContact,
        Gender, IdentityNumber, Medicine, Name, PastMedicalHistory, Phone, SmokingRecord, Tag,
    };
    use crate::model::person::Person;

    pub fn amy() -> Person {
        Person {
            name: Name::parse("Amy Bee").expect("valid name"),
            identity_number: IdentityNumber::parse("S1234567A").expect("valid id"),
            phone: Phone::parse("85355255").expect("valid phone"),
            email: Email::parse("amy@example.com").expect("valid email"),
            address: Address::parse("123, Jurong West Ave 6, #08-111").expect("valid address"),
            emergency_contact: EmergencyContact::parse("91234567").expect("valid contact"),
            date_of_birth: DateOfBirth::parse("02-03-1995").expect("valid dob"),
            blood_type: BloodType::AbPositive,
            gender: Gender::Female,
            alcoholic_record: AlcoholicRecord::parse("").expect("valid record"),
            smoking_record: SmokingRecord::parse("non-smoker").expect("valid record"),
            past_medical_history: PastMedicalHistory::parse("asthma").expect("valid history"),
            tags: [Tag::parse("friend").expect("valid tag")].into(),
            allergies: [Allergy::parse("pollen").expect("valid allergy")].into(),
            medicines: [Medicine::parse("salbutamol").expect("valid medicine")].into(),
        }
    }

    pub fn bob() -> Person {
        Person {
            name: Name::parse("Bob Choo").expect("valid name"),
            identity_number: IdentityNumber::parse("T7654321Z").expect("valid id"),
            phone: Phone::parse("22222222").expect("valid phone"),
            email: Email::parse("bob@example.com").expect("valid email"),
            address: Address::parse("Block 123, Bobby Street 3").expect("valid address"),
            emergency_contact: EmergencyContact::parse("93210283").expect("valid contact"),
            date_of_birth: DateOfBirth::parse("15-08-1980").expect("valid dob"),
            blood_type: BloodType::OPositive,
            gender: Gender::Male,
            alcoholic_record: AlcoholicRecord::parse("social drinker").expect("valid record"),
            smoking_record: SmokingRecord::parse("").expect("valid record"),
            past_medical_history: PastMedicalHistory::parse("").expect("valid history"),
            tags: Default::default(),
            allergies: Default::default(),
            medicines: Default::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
