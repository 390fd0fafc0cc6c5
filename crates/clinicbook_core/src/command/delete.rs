//! Generic delete-by-position command.

use crate::command::{CommandError, CommandResult};
use crate::index::Index;
use crate::model::record::Record;
use crate::repo::record_store::RecordStore;
use std::marker::PhantomData;

/// Deletes the record at `index` of the displayed list.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCommand<R> {
    index: Index,
    _kind: PhantomData<R>,
}

impl<R: Record> DeleteCommand<R> {
    pub fn new(index: Index) -> Self {
        Self {
            index,
            _kind: PhantomData,
        }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn execute<S>(&self, store: &mut S) -> Result<CommandResult, CommandError>
    where
        S: RecordStore<R>,
    {
        let target = store
            .filtered_list()
            .get(self.index.zero_based())
            .map(|record| (*record).clone())
            .ok_or(CommandError::InvalidIndex(R::KIND))?;
        store.remove_record(&target)?;
        Ok(CommandResult::with_view(
            format!("Deleted {}: {}", R::KIND.label(), target),
            R::KIND,
        ))
    }
}
