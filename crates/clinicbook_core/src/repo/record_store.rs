//! Record collection contract and in-memory implementation.
//!
//! # Responsibility
//! - Define the collection operations commands depend on.
//! - Keep stored records unique under `Record::is_same_entity`.
//! - Track the active filter that defines the displayed view.
//!
//! # Invariants
//! - No two stored records are the same entity.
//! - The filtered view preserves insertion order of the backing list.
//! - Failed writes leave the collection unchanged.

use crate::model::record::{Record, RecordKind};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Predicate selecting which records appear in the filtered view.
pub type RecordPredicate<R> = Box<dyn Fn(&R) -> bool>;

/// Returns the predicate that shows every record.
pub fn show_all<R: 'static>() -> RecordPredicate<R> {
    Box::new(|_: &R| true)
}

/// Collection write failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// The record to replace or remove is not stored.
    NotFound(RecordKind),
    /// The write would store a second copy of an existing entity.
    Duplicate(RecordKind),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(kind) => write!(f, "{} not found in the address book", kind.noun()),
            Self::Duplicate(kind) => {
                write!(f, "This {} already exists in the address book.", kind.noun())
            }
        }
    }
}

impl Error for RepoError {}

/// Collection interface consumed by commands.
pub trait RecordStore<R: Record> {
    /// Current view in display order; positional indices resolve against it.
    fn filtered_list(&self) -> Vec<&R>;
    /// Returns true iff a stored record is the same entity as `candidate`.
    fn has_record(&self, candidate: &R) -> bool;
    fn add_record(&mut self, record: R) -> RepoResult<()>;
    /// Replaces `target` (located by full equality) with `edited`.
    fn set_record(&mut self, target: &R, edited: R) -> RepoResult<()>;
    fn remove_record(&mut self, target: &R) -> RepoResult<()>;
    fn update_filtered_list(&mut self, predicate: RecordPredicate<R>);
}

/// Ordered, uniqueness-enforcing list with a filter over it.
pub struct RecordList<R> {
    items: Vec<R>,
    predicate: RecordPredicate<R>,
}

impl<R: Record> RecordList<R> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            predicate: show_all(),
        }
    }

    /// All stored records, ignoring the active filter.
    pub fn all(&self) -> &[R] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Applies `update` to every stored record in place.
    ///
    /// Callers must keep records unique under `is_same_entity`.
    pub(crate) fn update_each(&mut self, update: impl FnMut(&mut R)) {
        self.items.iter_mut().for_each(update);
    }

    /// Keeps only the records for which `keep` returns true.
    pub(crate) fn retain(&mut self, keep: impl FnMut(&R) -> bool) {
        self.items.retain(keep);
    }

    fn position_of(&self, target: &R) -> RepoResult<usize> {
        self.items
            .iter()
            .position(|item| item == target)
            .ok_or(RepoError::NotFound(R::KIND))
    }
}

impl<R: Record> Default for RecordList<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Debug for RecordList<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordList")
            .field("items", &self.items)
            .field("visible", &self.filtered_list().len())
            .finish()
    }
}

impl<R: Record> RecordStore<R> for RecordList<R> {
    fn filtered_list(&self) -> Vec<&R> {
        self.items
            .iter()
            .filter(|&item| (self.predicate)(item))
            .collect()
    }

    fn has_record(&self, candidate: &R) -> bool {
        self.items.iter().any(|item| item.is_same_entity(candidate))
    }

    fn add_record(&mut self, record: R) -> RepoResult<()> {
        if self.has_record(&record) {
            return Err(RepoError::Duplicate(R::KIND));
        }
        self.items.push(record);
        Ok(())
    }

    fn set_record(&mut self, target: &R, edited: R) -> RepoResult<()> {
        let position = self.position_of(target)?;
        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(index, item)| index != position && item.is_same_entity(&edited));
        if collides {
            return Err(RepoError::Duplicate(R::KIND));
        }
        self.items[position] = edited;
        Ok(())
    }

    fn remove_record(&mut self, target: &R) -> RepoResult<()> {
        let position = self.position_of(target)?;
        self.items.remove(position);
        Ok(())
    }

    fn update_filtered_list(&mut self, predicate: RecordPredicate<R>) {
        self.predicate = predicate;
    }
}
