//! Generic partial-update command.
//!
//! # Responsibility
//! - Locate a record by position in the filtered view.
//! - Merge a descriptor onto it, reject identity collisions, and commit.
//!
//! # Invariants
//! - The view lookup and the duplicate scan read the same store borrow.
//! - Nothing is written unless every check passed; after `set_record`
//!   only the infallible filter reset runs.
//! - A record edited into the same entity is never its own duplicate.

use crate::command::{CommandError, CommandResult};
use crate::index::Index;
use crate::model::descriptor::Descriptor;
use crate::model::record::Record;
use crate::repo::record_store::{show_all, RecordStore};
use log::debug;

/// Edits the record at `index` of the displayed list using `descriptor`.
///
/// The descriptor is owned by the command, so later changes on the caller's
/// side cannot leak into an already-built command.
#[derive(Debug, Clone, PartialEq)]
pub struct EditCommand<D> {
    index: Index,
    descriptor: D,
}

impl<D: Descriptor> EditCommand<D> {
    pub fn new(index: Index, descriptor: D) -> Self {
        Self { index, descriptor }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn descriptor(&self) -> &D {
        &self.descriptor
    }

    pub fn execute<S>(&self, store: &mut S) -> Result<CommandResult, CommandError>
    where
        S: RecordStore<D::Target>,
    {
        let kind = <D::Target as Record>::KIND;
        let (target, edited) = {
            let view = store.filtered_list();
            let target = view
                .get(self.index.zero_based())
                .copied()
                .ok_or(CommandError::InvalidIndex(kind))?;
            let edited = self.descriptor.merge(target);

            if !target.is_same_entity(&edited) && store.has_record(&edited) {
                debug!(
                    "event=record_edit module=command status=rejected kind={} reason=duplicate",
                    kind.noun()
                );
                return Err(CommandError::Duplicate(kind));
            }
            (target.clone(), edited)
        };

        let feedback = format!("Edited {}: {}", kind.label(), edited);
        store.set_record(&target, edited)?;
        store.update_filtered_list(show_all());
        debug!(
            "event=record_edit module=command status=ok kind={} index={}",
            kind.noun(),
            self.index
        );

        Ok(CommandResult::with_view(feedback, kind))
    }
}
