//! Filtering commands and the predicates they install.
//!
//! # Invariants
//! - Matching is whole-word and case-insensitive.
//! - Finding only changes the filtered view, never the stored records.

use crate::command::{CommandError, CommandResult};
use crate::model::appointment::Appointment;
use crate::model::person::Person;
use crate::model::record::Record;
use crate::repo::record_store::{show_all, RecordPredicate, RecordStore};
use std::fmt::Debug;

/// Value-comparable predicate that can be installed as a view filter.
pub trait RecordFilter: Clone + Debug + PartialEq + 'static {
    type Target: Record;

    fn matches(&self, record: &Self::Target) -> bool;

    fn into_predicate(self) -> RecordPredicate<Self::Target> {
        Box::new(move |record: &Self::Target| self.matches(record))
    }
}

/// Matches persons whose name contains any of the keywords as a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywords {
    keywords: Vec<String>,
}

impl NameContainsKeywords {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl RecordFilter for NameContainsKeywords {
    type Target = Person;

    fn matches(&self, record: &Person) -> bool {
        record.name.as_str().split_whitespace().any(|word| {
            self.keywords
                .iter()
                .any(|keyword| word.eq_ignore_ascii_case(keyword))
        })
    }
}

/// Matches appointments whose patient identity number is any of the keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientIdMatches {
    keywords: Vec<String>,
}

impl PatientIdMatches {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl RecordFilter for PatientIdMatches {
    type Target = Appointment;

    fn matches(&self, record: &Appointment) -> bool {
        self.keywords
            .iter()
            .any(|keyword| record.patient_id.as_str().eq_ignore_ascii_case(keyword))
    }
}

/// Narrows the displayed list to records matching `filter`.
#[derive(Debug, Clone, PartialEq)]
pub struct FindCommand<F> {
    filter: F,
}

impl<F: RecordFilter> FindCommand<F> {
    pub fn new(filter: F) -> Self {
        Self { filter }
    }

    pub fn execute<S>(&self, store: &mut S) -> Result<CommandResult, CommandError>
    where
        S: RecordStore<F::Target>,
    {
        store.update_filtered_list(self.filter.clone().into_predicate());
        let kind = <F::Target as Record>::KIND;
        let listed = store.filtered_list().len();
        Ok(CommandResult::with_view(
            format!("{listed} {}s listed!", kind.noun()),
            kind,
        ))
    }
}

/// Resets the displayed list of `R` to show every record.
pub fn list_all<R, S>(store: &mut S) -> CommandResult
where
    R: Record,
    S: RecordStore<R>,
{
    store.update_filtered_list(show_all());
    CommandResult::with_view(format!("Listed all {}s", R::KIND.noun()), R::KIND)
}
