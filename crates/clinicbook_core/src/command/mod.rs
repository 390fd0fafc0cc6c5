//! Executable commands over the clinic book.
//!
//! # Responsibility
//! - Represent one parsed user request as a value (`Command`).
//! - Apply it to a `ClinicBook` and describe the outcome for the user.
//!
//! # Invariants
//! - A failed command leaves the clinic book unchanged.
//! - Every error is user-correctable and carries a display message.

pub mod add;
pub mod delete;
pub mod edit;
pub mod find;
pub mod usage;

use crate::model::appointment::Appointment;
use crate::model::descriptor::{EditAppointmentDescriptor, EditPersonDescriptor};
use crate::model::fields::IdentityNumber;
use crate::model::person::Person;
use crate::model::record::RecordKind;
use crate::repo::clinic_book::ClinicBook;
use crate::repo::record_store::RepoError;
use add::AddCommand;
use delete::DeleteCommand;
use edit::EditCommand;
use find::{list_all, FindCommand, NameContainsKeywords, PatientIdMatches};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Message shown to the user.
    pub feedback: String,
    /// Which list the caller should redisplay, if any.
    pub view: Option<RecordKind>,
    /// Whether the command loop should stop.
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            view: None,
            exit: false,
        }
    }

    pub fn with_view(feedback: impl Into<String>, view: RecordKind) -> Self {
        Self {
            view: Some(view),
            ..Self::new(feedback)
        }
    }

    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback)
        }
    }
}

/// Command execution failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Index is outside the displayed list of this kind.
    InvalidIndex(RecordKind),
    /// The result would duplicate another stored record.
    Duplicate(RecordKind),
    /// Appointment refers to a person that is not stored.
    PatientNotFound(IdentityNumber),
    /// Collection precondition failure.
    Repo(RepoError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex(kind) => {
                write!(f, "The {} index provided is invalid", kind.noun())
            }
            Self::Duplicate(kind) => {
                write!(f, "This {} already exists in the address book.", kind.noun())
            }
            Self::PatientNotFound(id) => {
                write!(f, "No patient found with identity number {id}.")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for CommandError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Duplicate(kind) => Self::Duplicate(kind),
            other => Self::Repo(other),
        }
    }
}

/// One parsed user request.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddPerson(AddCommand<Person>),
    AddAppointment(AddCommand<Appointment>),
    EditPerson(EditCommand<EditPersonDescriptor>),
    EditAppointment(EditCommand<EditAppointmentDescriptor>),
    DeletePerson(DeleteCommand<Person>),
    DeleteAppointment(DeleteCommand<Appointment>),
    FindPersons(FindCommand<NameContainsKeywords>),
    FindAppointments(FindCommand<PatientIdMatches>),
    ListPersons,
    ListAppointments,
    Help,
    Exit,
}

impl Command {
    /// Command word, used as a metadata-only logging label.
    pub fn word(&self) -> &'static str {
        match self {
            Self::AddPerson(_) => usage::ADD_PERSON_WORD,
            Self::AddAppointment(_) => usage::ADD_APPOINTMENT_WORD,
            Self::EditPerson(_) => usage::EDIT_PERSON_WORD,
            Self::EditAppointment(_) => usage::EDIT_APPOINTMENT_WORD,
            Self::DeletePerson(_) => usage::DELETE_PERSON_WORD,
            Self::DeleteAppointment(_) => usage::DELETE_APPOINTMENT_WORD,
            Self::FindPersons(_) => usage::FIND_PERSON_WORD,
            Self::FindAppointments(_) => usage::FIND_APPOINTMENT_WORD,
            Self::ListPersons => usage::LIST_PERSON_WORD,
            Self::ListAppointments => usage::LIST_APPOINTMENT_WORD,
            Self::Help => usage::HELP_WORD,
            Self::Exit => usage::EXIT_WORD,
        }
    }

    pub fn execute(&self, book: &mut ClinicBook) -> Result<CommandResult, CommandError> {
        match self {
            Self::AddPerson(command) => command.execute(book),
            Self::AddAppointment(command) => {
                let patient_id = &command.record().patient_id;
                if !book.has_patient(patient_id) {
                    return Err(CommandError::PatientNotFound(patient_id.clone()));
                }
                command.execute(book)
            }
            Self::EditPerson(command) => command.execute(book),
            Self::EditAppointment(command) => {
                if let Some(patient_id) = &command.descriptor().patient_id {
                    if !book.has_patient(patient_id) {
                        return Err(CommandError::PatientNotFound(patient_id.clone()));
                    }
                }
                command.execute(book)
            }
            Self::DeletePerson(command) => command.execute(book),
            Self::DeleteAppointment(command) => command.execute(book),
            Self::FindPersons(command) => command.execute(book),
            Self::FindAppointments(command) => command.execute(book),
            Self::ListPersons => Ok(list_all::<Person, _>(book)),
            Self::ListAppointments => Ok(list_all::<Appointment, _>(book)),
            Self::Help => Ok(CommandResult::new(usage::all_usages().join("\n\n"))),
            Self::Exit => Ok(CommandResult::exit(
                "Exiting Clinic Book as requested ...",
            )),
        }
    }
}
