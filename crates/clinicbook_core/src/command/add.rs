//! Generic add command.

use crate::command::{CommandError, CommandResult};
use crate::model::record::Record;
use crate::repo::record_store::{show_all, RecordStore};

/// Adds one fully-populated record.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCommand<R> {
    record: R,
}

impl<R: Record> AddCommand<R> {
    pub fn new(record: R) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn execute<S>(&self, store: &mut S) -> Result<CommandResult, CommandError>
    where
        S: RecordStore<R>,
    {
        if store.has_record(&self.record) {
            return Err(CommandError::Duplicate(R::KIND));
        }
        store.add_record(self.record.clone())?;
        store.update_filtered_list(show_all());
        Ok(CommandResult::with_view(
            format!("New {} added: {}", R::KIND.noun(), self.record),
            R::KIND,
        ))
    }
}
