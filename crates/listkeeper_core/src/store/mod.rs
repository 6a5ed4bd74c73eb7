//! Optimistic, storage-backed list stores.
//!
//! # Responsibility
//! - Own one list screen's in-memory sequence and its storage key.
//! - Mirror every mutation to the storage namespace as a full rewrite.
//! - Report persistence results to callers without reconciling them.
//!
//! # Invariants
//! - Memory is updated before the write; a failed write is never rolled back.
//! - Load and save failures are logged and never returned as `Err`.
//! - Skipped mutations leave both memory and storage untouched.
//! - Record text never reaches the log.

use crate::model::list_kind::{ListKind, RecordShape};
use crate::storage::{KeyValueStorage, StorageError};
use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod editor;
mod task_list;
mod text_list;

pub use editor::TaskEditor;
pub use task_list::TaskListStore;
pub use text_list::TextListStore;

/// Result of writing the in-memory list back to storage.
#[derive(Debug)]
pub enum PersistOutcome {
    Saved,
    /// Memory kept the change; storage still holds the previous list.
    Failed(StorageError),
}

impl PersistOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

/// Result of reading the stored list into memory.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Memory replaced with this many stored records.
    Loaded(usize),
    /// Key never written; memory left as it was.
    Missing,
    /// Read or decode failed; memory left as it was.
    Failed(StorageError),
}

/// Why a mutation was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    BlankText,
    IndexOutOfRange { index: usize, len: usize },
    UnknownId(crate::model::task::TaskId),
    NoActiveEdit,
}

/// Result of one list mutation.
#[derive(Debug)]
pub enum Mutation {
    /// Memory changed; the persist result says whether storage followed.
    Applied(PersistOutcome),
    Skipped(SkipReason),
}

impl Mutation {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// Applied and written to storage.
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Applied(outcome) if outcome.is_saved())
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::Skipped(reason) => Some(*reason),
            Self::Applied(_) => None,
        }
    }
}

/// A list screen was opened with the wrong record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMismatch {
    pub kind: ListKind,
    pub expected: RecordShape,
}

impl Display for ShapeMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "list `{}` stores {:?} records, not {:?}",
            self.kind,
            self.kind.shape(),
            self.expected
        )
    }
}

impl Error for ShapeMismatch {}

/// In-memory list mirrored to one storage key.
#[derive(Debug)]
pub struct ListStore<R, S> {
    key: String,
    items: Vec<R>,
    storage: S,
    diverged: bool,
}

impl<R, S> ListStore<R, S>
where
    R: Serialize + DeserializeOwned,
    S: KeyValueStorage,
{
    /// Creates an empty store for `key`; call `load` to read stored records.
    pub fn new(key: impl Into<String>, storage: S) -> Self {
        Self {
            key: key.into(),
            items: Vec::new(),
            storage,
            diverged: false,
        }
    }

    pub(crate) fn for_shape(
        kind: ListKind,
        expected: RecordShape,
        storage: S,
    ) -> Result<Self, ShapeMismatch> {
        if kind.shape() != expected {
            return Err(ShapeMismatch { kind, expected });
        }
        Ok(Self::new(kind.storage_key(), storage))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the last write failed and storage lags behind memory.
    pub fn is_diverged(&self) -> bool {
        self.diverged
    }

    /// Replaces memory with the stored list for this key.
    pub fn load(&mut self) -> LoadOutcome {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=list_load module=store status=missing key={}", self.key);
                return LoadOutcome::Missing;
            }
            Err(err) => {
                error!(
                    "event=list_load module=store status=error key={} error_code=read_failed error={err}",
                    self.key
                );
                return LoadOutcome::Failed(err);
            }
        };

        match serde_json::from_str::<Vec<R>>(&raw) {
            Ok(items) => {
                let count = items.len();
                self.items = items;
                self.diverged = false;
                debug!(
                    "event=list_load module=store status=ok key={} count={count}",
                    self.key
                );
                LoadOutcome::Loaded(count)
            }
            Err(err) => {
                error!(
                    "event=list_load module=store status=error key={} error_code=decode_failed error={err}",
                    self.key
                );
                LoadOutcome::Failed(StorageError::Deserialize(err))
            }
        }
    }

    /// Writes the whole in-memory list to storage.
    ///
    /// Never touches memory. Callers may use this to retry after a failure.
    pub fn persist(&mut self) -> PersistOutcome {
        let result = serde_json::to_string(&self.items)
            .map_err(StorageError::Serialize)
            .and_then(|payload| self.storage.set(&self.key, &payload));

        match result {
            Ok(()) => {
                if self.diverged {
                    warn!(
                        "event=list_save module=store status=recovered key={} count={}",
                        self.key,
                        self.items.len()
                    );
                }
                self.diverged = false;
                debug!(
                    "event=list_save module=store status=ok key={} count={}",
                    self.key,
                    self.items.len()
                );
                PersistOutcome::Saved
            }
            Err(err) => {
                self.diverged = true;
                error!(
                    "event=list_save module=store status=error key={} count={} error={err}",
                    self.key,
                    self.items.len()
                );
                PersistOutcome::Failed(err)
            }
        }
    }

    /// Applies `change` to memory, then persists.
    pub(crate) fn commit(&mut self, change: impl FnOnce(&mut Vec<R>)) -> Mutation {
        change(&mut self.items);
        Mutation::Applied(self.persist())
    }

    /// Reorders memory without persisting.
    pub(crate) fn reorder(&mut self, change: impl FnOnce(&mut Vec<R>)) {
        change(&mut self.items);
    }
}
