//! Command-line parsing into executable commands.
//!
//! # Responsibility
//! - Split one input line into command word and arguments.
//! - Convert prefixed arguments into typed records and descriptors.
//!
//! # Invariants
//! - Parsing never touches the clinic book.
//! - Edit parsers never return a descriptor with no field set.

pub mod appointment;
pub mod person;
pub mod syntax;
pub mod tokenizer;

use crate::command::delete::DeleteCommand;
use crate::command::find::{FindCommand, NameContainsKeywords, PatientIdMatches};
use crate::command::{usage, Command};
use crate::index::Index;
use crate::model::fields::FieldError;
use crate::parser::syntax::Prefix;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

static COMMAND_FORMAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^(?P<word>\S+)(?P<args>.*)$").expect("valid command regex"));

/// Message used when an edit request sets no field.
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

/// Parse-time user error. Nothing has been executed when this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Arguments do not match the command shape; carries its usage text.
    InvalidCommandFormat(&'static str),
    UnknownCommand,
    /// Index is not a positive integer.
    InvalidIndex,
    /// Single-valued prefixes given more than once.
    DuplicatePrefixes(Vec<Prefix>),
    /// A field value failed validation.
    InvalidField(FieldError),
    /// Edit request with no field to change.
    NotEdited,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCommandFormat(usage) => write!(f, "Invalid command format! \n{usage}"),
            Self::UnknownCommand => write!(f, "Unknown command"),
            Self::InvalidIndex => write!(f, "Index is not a non-zero unsigned integer."),
            Self::DuplicatePrefixes(prefixes) => {
                let joined: Vec<&str> = prefixes.iter().map(|prefix| prefix.as_str()).collect();
                write!(
                    f,
                    "Multiple values specified for the following single-valued field(s): {}",
                    joined.join(" ")
                )
            }
            Self::InvalidField(err) => write!(f, "{err}"),
            Self::NotEdited => write!(f, "{MESSAGE_NOT_EDITED}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidField(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FieldError> for ParseError {
    fn from(value: FieldError) -> Self {
        Self::InvalidField(value)
    }
}

/// Parses one full input line into a command.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let captures = COMMAND_FORMAT_RE
        .captures(input.trim())
        .ok_or(ParseError::InvalidCommandFormat(usage::HELP_USAGE))?;
    let word = captures.name("word").map_or("", |m| m.as_str());
    let args = captures.name("args").map_or("", |m| m.as_str());

    match word {
        usage::ADD_PERSON_WORD => person::parse_add(args).map(Command::AddPerson),
        usage::EDIT_PERSON_WORD => person::parse_edit(args).map(Command::EditPerson),
        usage::DELETE_PERSON_WORD => parse_index_for(args, usage::DELETE_PERSON_USAGE)
            .map(|index| Command::DeletePerson(DeleteCommand::new(index))),
        usage::FIND_PERSON_WORD => parse_keywords(args, usage::FIND_PERSON_USAGE).map(|keywords| {
            Command::FindPersons(FindCommand::new(NameContainsKeywords::new(keywords)))
        }),
        usage::LIST_PERSON_WORD => Ok(Command::ListPersons),
        usage::ADD_APPOINTMENT_WORD => appointment::parse_add(args).map(Command::AddAppointment),
        usage::EDIT_APPOINTMENT_WORD => appointment::parse_edit(args).map(Command::EditAppointment),
        usage::DELETE_APPOINTMENT_WORD => parse_index_for(args, usage::DELETE_APPOINTMENT_USAGE)
            .map(|index| Command::DeleteAppointment(DeleteCommand::new(index))),
        usage::FIND_APPOINTMENT_WORD => parse_keywords(args, usage::FIND_APPOINTMENT_USAGE)
            .map(|keywords| {
                Command::FindAppointments(FindCommand::new(PatientIdMatches::new(keywords)))
            }),
        usage::LIST_APPOINTMENT_WORD => Ok(Command::ListAppointments),
        usage::HELP_WORD => Ok(Command::Help),
        usage::EXIT_WORD => Ok(Command::Exit),
        _ => Err(ParseError::UnknownCommand),
    }
}

/// Parses a one-based positive index.
pub fn parse_index(raw: &str) -> Result<Index, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

/// Parses an index, reporting failure as a format error with `usage`.
pub(crate) fn parse_index_for(raw: &str, usage: &'static str) -> Result<Index, ParseError> {
    parse_index(raw).map_err(|_| ParseError::InvalidCommandFormat(usage))
}

fn parse_keywords(args: &str, usage: &'static str) -> Result<Vec<String>, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidCommandFormat(usage));
    }
    Ok(keywords)
}

/// Parses every value of a repeatable prefix into a set.
pub(crate) fn parse_set<T, F>(values: &[String], parse: F) -> Result<BTreeSet<T>, ParseError>
where
    T: Ord,
    F: Fn(&str) -> Result<T, FieldError>,
{
    values
        .iter()
        .map(|value| parse(value.as_str()).map_err(ParseError::from))
        .collect()
}

/// Parses a repeatable prefix for an edit request.
///
/// Absent prefix leaves the set unchanged; a single empty value clears it.
pub(crate) fn parse_set_for_edit<T, F>(
    values: &[String],
    parse: F,
) -> Result<Option<BTreeSet<T>>, ParseError>
where
    T: Ord,
    F: Fn(&str) -> Result<T, FieldError>,
{
    match values {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_set(values, parse).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, parse_index, ParseError};
    use crate::command::{usage, Command};
    use crate::index::Index;

    #[test]
    fn parse_index_accepts_positive_integers_only() {
        assert_eq!(parse_index(" 1 ").unwrap(), Index::from_zero_based(0));
        assert_eq!(parse_index("10").unwrap(), Index::from_zero_based(9));
        for bad in ["0", "-1", "+1", "a", "", "1 2", "99999999999999999999999"] {
            assert_eq!(parse_index(bad), Err(ParseError::InvalidIndex), "input `{bad}`");
        }
    }

    #[test]
    fn unknown_and_empty_commands_fail() {
        assert_eq!(parse_command("frobnicate 1"), Err(ParseError::UnknownCommand));
        assert_eq!(
            parse_command("   "),
            Err(ParseError::InvalidCommandFormat(usage::HELP_USAGE))
        );
    }

    #[test]
    fn command_words_are_case_sensitive() {
        assert_eq!(parse_command("list").unwrap(), Command::ListPersons);
        assert_eq!(parse_command("listappt").unwrap(), Command::ListAppointments);
        assert_eq!(parse_command("exit").unwrap(), Command::Exit);
        assert_eq!(parse_command("LIST"), Err(ParseError::UnknownCommand));
    }

    #[test]
    fn delete_with_bad_index_shows_usage() {
        assert_eq!(
            parse_command("delete zero"),
            Err(ParseError::InvalidCommandFormat(usage::DELETE_PERSON_USAGE))
        );
        assert!(matches!(
            parse_command("deleteappt 2").unwrap(),
            Command::DeleteAppointment(command) if command.index().one_based() == 2
        ));
    }

    #[test]
    fn find_requires_keywords() {
        assert_eq!(
            parse_command("find   "),
            Err(ParseError::InvalidCommandFormat(usage::FIND_PERSON_USAGE))
        );
        assert!(matches!(parse_command("find amy bob").unwrap(), Command::FindPersons(_)));
    }
}
