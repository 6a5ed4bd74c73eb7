//! SQLite-backed storage namespace over the `kv_entries` table.
//!
//! # Invariants
//! - Connection passed in must come from `db::open_db*` (migrated).
//! - Writes are upserts; there are no partial updates.

use super::{KeyValueStorage, StorageResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Durable namespace borrowing an open connection.
///
/// Cheap to copy, so each list store can hold its own handle to one
/// shared connection.
#[derive(Debug, Clone, Copy)]
pub struct SqliteNamespace<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNamespace<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Lists stored keys in ascending order.
    pub fn keys(&self) -> StorageResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM kv_entries ORDER BY key ASC;")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

impl KeyValueStorage for SqliteNamespace<'_> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}
