//! String lists (notes, personal, shopping, work).
//!
//! Entries are addressed by position; removing one shifts every later
//! entry down, so indexes are only valid for the current rendering.

use super::{ListStore, Mutation, ShapeMismatch, SkipReason};
use crate::model::input::is_blank;
use crate::model::list_kind::{ListKind, RecordShape};
use crate::storage::KeyValueStorage;

pub type TextListStore<S> = ListStore<String, S>;

impl<S: KeyValueStorage> ListStore<String, S> {
    /// Opens the string list stored for `kind`.
    pub fn for_list(kind: ListKind, storage: S) -> Result<Self, ShapeMismatch> {
        Self::for_shape(kind, RecordShape::Text, storage)
    }

    /// Appends `entry` as typed; blank entries are skipped.
    pub fn add(&mut self, entry: impl Into<String>) -> Mutation {
        let entry = entry.into();
        if is_blank(&entry) {
            return Mutation::Skipped(SkipReason::BlankText);
        }
        self.commit(|items| items.push(entry))
    }

    /// Removes the entry at `index`.
    pub fn remove(&mut self, index: usize) -> Mutation {
        let len = self.len();
        if index >= len {
            return Mutation::Skipped(SkipReason::IndexOutOfRange { index, len });
        }
        self.commit(|items| {
            items.remove(index);
        })
    }
}
