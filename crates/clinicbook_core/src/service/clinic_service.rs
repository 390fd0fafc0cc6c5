//! Clinic use-case service.
//!
//! # Responsibility
//! - Own the in-memory clinic book for one session.
//! - Parse and execute one input line at a time.
//! - Render the filtered person and appointment lists for display.
//!
//! # Invariants
//! - A rejected input (parse or execution failure) leaves the book unchanged.
//! - Log events carry metadata only; record contents never reach the log.

use crate::command::{CommandError, CommandResult};
use crate::model::record::RecordKind;
use crate::parser::{parse_command, ParseError};
use crate::repo::clinic_book::ClinicBook;
use crate::repo::record_store::RecordStore;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Service error for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Input could not be parsed into a command.
    Parse(ParseError),
    /// Parsed command failed against the current book.
    Command(CommandError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Command(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Command(err) => Some(err),
        }
    }
}

impl From<ParseError> for ServiceError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<CommandError> for ServiceError {
    fn from(value: CommandError) -> Self {
        Self::Command(value)
    }
}

/// Clinic service facade over one `ClinicBook`.
#[derive(Debug, Default)]
pub struct ClinicService {
    book: ClinicBook,
}

impl ClinicService {
    /// Creates a service over an empty clinic book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service over an existing book.
    pub fn with_book(book: ClinicBook) -> Self {
        Self { book }
    }

    pub fn book(&self) -> &ClinicBook {
        &self.book
    }

    /// Parses and executes one line of user input.
    pub fn execute(&mut self, input: &str) -> Result<CommandResult, ServiceError> {
        let started_at = Instant::now();
        let command = parse_command(input).map_err(|err| {
            warn!(
                "event=command_parse module=service status=error reason={}",
                parse_error_reason(&err)
            );
            err
        })?;

        let word = command.word();
        match command.execute(&mut self.book) {
            Ok(result) => {
                info!(
                    "event=command_execute module=service status=ok command={} duration_ms={}",
                    word,
                    started_at.elapsed().as_millis()
                );
                Ok(result)
            }
            Err(err) => {
                warn!(
                    "event=command_execute module=service status=error command={} reason={}",
                    word,
                    command_error_reason(&err)
                );
                Err(err.into())
            }
        }
    }

    /// Returns the filtered list of `kind` as numbered display lines.
    pub fn render_view(&self, kind: RecordKind) -> Vec<String> {
        match kind {
            RecordKind::Person => numbered(self.book.persons().filtered_list()),
            RecordKind::Appointment => numbered(self.book.appointments().filtered_list()),
        }
    }
}

fn numbered<T: Display>(records: Vec<&T>) -> Vec<String> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| format!("{}. {record}", position + 1))
        .collect()
}

fn parse_error_reason(err: &ParseError) -> &'static str {
    match err {
        ParseError::InvalidCommandFormat(_) => "invalid_format",
        ParseError::UnknownCommand => "unknown_command",
        ParseError::InvalidIndex => "invalid_index",
        ParseError::DuplicatePrefixes(_) => "duplicate_prefixes",
        ParseError::InvalidField(_) => "invalid_field",
        ParseError::NotEdited => "not_edited",
    }
}

fn command_error_reason(err: &CommandError) -> &'static str {
    match err {
        CommandError::InvalidIndex(_) => "invalid_index",
        CommandError::Duplicate(_) => "duplicate",
        CommandError::PatientNotFound(_) => "patient_not_found",
        CommandError::Repo(_) => "repo",
    }
}
