//! Shared record capability used by the generic collection and commands.
//!
//! # Invariants
//! - `is_same_entity` is the only predicate used for duplicate detection.
//! - `PartialEq` stays structural equality and is used to locate a stored
//!   record, never to decide uniqueness.

use std::fmt::{Debug, Display};

/// Entity kinds managed by the clinic book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Person,
    Appointment,
}

impl RecordKind {
    /// Capitalized label for feedback messages (`Edited Person: ..`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::Appointment => "Appointment",
        }
    }

    /// Lower-case noun for error messages (`This person already exists ..`).
    pub fn noun(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Appointment => "appointment",
        }
    }
}

/// Immutable entity value stored in a record collection.
pub trait Record: Clone + Debug + PartialEq + Display + 'static {
    /// Kind used for messages and logging.
    const KIND: RecordKind;

    /// Returns whether `other` describes the same real-world entity.
    ///
    /// Narrower than `==`: records differing only in non-identifying fields
    /// are still the same entity.
    fn is_same_entity(&self, other: &Self) -> bool;
}
