//! Key-value storage namespace behind every list store.
//!
//! # Responsibility
//! - Define the `get`/`set` capability list stores persist through.
//! - Provide SQLite-backed and in-memory namespaces.
//!
//! # Invariants
//! - Values are opaque strings; stores own the JSON encoding.
//! - `set` replaces the whole value for a key.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryNamespace;
pub use sqlite::SqliteNamespace;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure reading, writing, or encoding a stored list.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    Serialize(serde_json::Error),
    Deserialize(serde_json::Error),
    /// Backend cannot serve requests right now.
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to encode list payload: {err}"),
            Self::Deserialize(err) => write!(f, "failed to decode list payload: {err}"),
            Self::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) | Self::Deserialize(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Process-wide key-value persistence capability.
pub trait KeyValueStorage {
    /// Returns the stored value, or `None` when the key was never written.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    /// Replaces the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
