//! Parsers for the appointment commands (`addappt`, `eappt`).

use crate::command::add::AddCommand;
use crate::command::edit::EditCommand;
use crate::command::usage::{ADD_APPOINTMENT_USAGE, EDIT_APPOINTMENT_USAGE};
use crate::model::appointment::Appointment;
use crate::model::descriptor::{Descriptor, EditAppointmentDescriptor};
use crate::model::fields::{AppointmentNotes, AppointmentTime, IdentityNumber};
use crate::parser::syntax::{PREFIX_APPOINTMENT_NOTE, PREFIX_APPOINTMENT_TIME, PREFIX_IDENTITY_NUMBER};
use crate::parser::tokenizer::tokenize;
use crate::parser::{parse_index_for, ParseError};

/// Parses `addappt` arguments. The note is optional and defaults to empty.
pub fn parse_add(args: &str) -> Result<AddCommand<Appointment>, ParseError> {
    let prefixes = [
        PREFIX_IDENTITY_NUMBER,
        PREFIX_APPOINTMENT_TIME,
        PREFIX_APPOINTMENT_NOTE,
    ];
    let tokens = tokenize(args, &prefixes);
    if !tokens.are_all_present(&[PREFIX_IDENTITY_NUMBER, PREFIX_APPOINTMENT_TIME])
        || !tokens.preamble().is_empty()
    {
        return Err(ParseError::InvalidCommandFormat(ADD_APPOINTMENT_USAGE));
    }
    tokens.verify_no_duplicate_prefixes_for(&prefixes)?;

    let appointment = Appointment::new(
        AppointmentNotes::parse(tokens.value(PREFIX_APPOINTMENT_NOTE).unwrap_or_default())?,
        AppointmentTime::parse(tokens.value(PREFIX_APPOINTMENT_TIME).unwrap_or_default())?,
        IdentityNumber::parse(tokens.value(PREFIX_IDENTITY_NUMBER).unwrap_or_default())?,
    );
    Ok(AddCommand::new(appointment))
}

/// Parses `eappt` arguments. Only time and note are editable from the
/// command line; the patient reference stays fixed.
pub fn parse_edit(args: &str) -> Result<EditCommand<EditAppointmentDescriptor>, ParseError> {
    let prefixes = [PREFIX_APPOINTMENT_TIME, PREFIX_APPOINTMENT_NOTE];
    let tokens = tokenize(args, &prefixes);
    let index = parse_index_for(tokens.preamble(), EDIT_APPOINTMENT_USAGE)?;
    tokens.verify_no_duplicate_prefixes_for(&prefixes)?;

    let descriptor = EditAppointmentDescriptor {
        time: tokens
            .value(PREFIX_APPOINTMENT_TIME)
            .map(AppointmentTime::parse)
            .transpose()?,
        notes: tokens
            .value(PREFIX_APPOINTMENT_NOTE)
            .map(AppointmentNotes::parse)
            .transpose()?,
        patient_id: None,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NotEdited);
    }
    Ok(EditCommand::new(index, descriptor))
}
