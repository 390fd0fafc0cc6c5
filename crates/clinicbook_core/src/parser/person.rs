//! Parsers for the person commands (`add`, `edit`).

use crate::command::add::AddCommand;
use crate::command::edit::EditCommand;
use crate::command::usage::{ADD_PERSON_USAGE, EDIT_PERSON_USAGE};
use crate::model::descriptor::{Descriptor, EditPersonDescriptor};
use crate::model::fields::{
    Address, AlcoholicRecord, Allergy, BloodType, DateOfBirth, Email, EmergencyContact, Gender,
    IdentityNumber, Medicine, Name, PastMedicalHistory, Phone, SmokingRecord, Tag,
};
use crate::model::person::Person;
use crate::parser::syntax::{
    Prefix, PERSON_MULTI_VALUED, PERSON_SINGLE_VALUED, PREFIX_ADDRESS, PREFIX_ALCOHOLIC_RECORD,
    PREFIX_ALLERGY, PREFIX_BLOOD_TYPE, PREFIX_DATE_OF_BIRTH, PREFIX_EMAIL,
    PREFIX_EMERGENCY_CONTACT, PREFIX_GENDER, PREFIX_IDENTITY_NUMBER, PREFIX_MEDICINE, PREFIX_NAME,
    PREFIX_PAST_MEDICAL_HISTORY, PREFIX_PHONE, PREFIX_SMOKING_RECORD, PREFIX_TAG,
};
use crate::parser::tokenizer::{tokenize, ArgumentMultimap};
use crate::parser::{parse_index_for, parse_set, parse_set_for_edit, ParseError};

const REQUIRED_FOR_ADD: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_IDENTITY_NUMBER,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_EMERGENCY_CONTACT,
    PREFIX_DATE_OF_BIRTH,
    PREFIX_BLOOD_TYPE,
    PREFIX_GENDER,
];

fn tokenize_person(args: &str) -> ArgumentMultimap {
    let prefixes: Vec<Prefix> = PERSON_SINGLE_VALUED
        .iter()
        .chain(PERSON_MULTI_VALUED)
        .copied()
        .collect();
    tokenize(args, &prefixes)
}

/// Parses `add` arguments into a fully-populated person.
pub fn parse_add(args: &str) -> Result<AddCommand<Person>, ParseError> {
    let tokens = tokenize_person(args);
    if !tokens.are_all_present(REQUIRED_FOR_ADD) || !tokens.preamble().is_empty() {
        return Err(ParseError::InvalidCommandFormat(ADD_PERSON_USAGE));
    }
    tokens.verify_no_duplicate_prefixes_for(PERSON_SINGLE_VALUED)?;

    // Absent optional text fields are stored as empty.
    let value = |prefix: Prefix| tokens.value(prefix).unwrap_or_default();

    let person = Person {
        name: Name::parse(value(PREFIX_NAME))?,
        identity_number: IdentityNumber::parse(value(PREFIX_IDENTITY_NUMBER))?,
        phone: Phone::parse(value(PREFIX_PHONE))?,
        email: Email::parse(value(PREFIX_EMAIL))?,
        address: Address::parse(value(PREFIX_ADDRESS))?,
        emergency_contact: EmergencyContact::parse(value(PREFIX_EMERGENCY_CONTACT))?,
        date_of_birth: DateOfBirth::parse(value(PREFIX_DATE_OF_BIRTH))?,
        blood_type: BloodType::parse(value(PREFIX_BLOOD_TYPE))?,
        gender: Gender::parse(value(PREFIX_GENDER))?,
        alcoholic_record: AlcoholicRecord::parse(value(PREFIX_ALCOHOLIC_RECORD))?,
        smoking_record: SmokingRecord::parse(value(PREFIX_SMOKING_RECORD))?,
        past_medical_history: PastMedicalHistory::parse(value(PREFIX_PAST_MEDICAL_HISTORY))?,
        tags: parse_set(tokens.all_values(PREFIX_TAG), |raw| Tag::parse(raw))?,
        allergies: parse_set(tokens.all_values(PREFIX_ALLERGY), |raw| Allergy::parse(raw))?,
        medicines: parse_set(tokens.all_values(PREFIX_MEDICINE), |raw| Medicine::parse(raw))?,
    };
    Ok(AddCommand::new(person))
}

/// Parses `edit` arguments into an index plus a non-empty descriptor.
pub fn parse_edit(args: &str) -> Result<EditCommand<EditPersonDescriptor>, ParseError> {
    let tokens = tokenize_person(args);
    let index = parse_index_for(tokens.preamble(), EDIT_PERSON_USAGE)?;
    tokens.verify_no_duplicate_prefixes_for(PERSON_SINGLE_VALUED)?;

    let descriptor = EditPersonDescriptor {
        name: tokens.value(PREFIX_NAME).map(Name::parse).transpose()?,
        identity_number: tokens
            .value(PREFIX_IDENTITY_NUMBER)
            .map(IdentityNumber::parse)
            .transpose()?,
        phone: tokens.value(PREFIX_PHONE).map(Phone::parse).transpose()?,
        email: tokens.value(PREFIX_EMAIL).map(Email::parse).transpose()?,
        address: tokens.value(PREFIX_ADDRESS).map(Address::parse).transpose()?,
        emergency_contact: tokens
            .value(PREFIX_EMERGENCY_CONTACT)
            .map(EmergencyContact::parse)
            .transpose()?,
        date_of_birth: tokens
            .value(PREFIX_DATE_OF_BIRTH)
            .map(DateOfBirth::parse)
            .transpose()?,
        blood_type: tokens
            .value(PREFIX_BLOOD_TYPE)
            .map(BloodType::parse)
            .transpose()?,
        gender: tokens.value(PREFIX_GENDER).map(Gender::parse).transpose()?,
        alcoholic_record: tokens
            .value(PREFIX_ALCOHOLIC_RECORD)
            .map(AlcoholicRecord::parse)
            .transpose()?,
        smoking_record: tokens
            .value(PREFIX_SMOKING_RECORD)
            .map(SmokingRecord::parse)
            .transpose()?,
        past_medical_history: tokens
            .value(PREFIX_PAST_MEDICAL_HISTORY)
            .map(PastMedicalHistory::parse)
            .transpose()?,
        tags: parse_set_for_edit(tokens.all_values(PREFIX_TAG), |raw| Tag::parse(raw))?,
        allergies: parse_set_for_edit(tokens.all_values(PREFIX_ALLERGY), |raw| {
            Allergy::parse(raw)
        })?,
        medicines: parse_set_for_edit(tokens.all_values(PREFIX_MEDICINE), |raw| {
            Medicine::parse(raw)
        })?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NotEdited);
    }
    Ok(EditCommand::new(index, descriptor))
}
