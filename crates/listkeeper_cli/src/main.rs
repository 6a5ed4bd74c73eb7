//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `listkeeper_core` linkage and the store round-trip without a UI.
//! - Keep output deterministic for quick local sanity checks.

use listkeeper_core::db::open_db_in_memory;
use listkeeper_core::{about, ListKind, LoadOutcome, SqliteNamespace, TaskListStore, TextListStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("listkeeper_core ping={}", listkeeper_core::ping());
    println!("listkeeper_core version={}", listkeeper_core::core_version());
    println!("home title={}", about::HOME_TITLE);
    for entry in about::list_menu() {
        println!("list key={} title={}", entry.storage_key, entry.title);
    }

    match store_roundtrip() {
        Ok(count) => {
            println!("store roundtrip=ok count={count}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("store roundtrip=error {message}");
            ExitCode::FAILURE
        }
    }
}

fn store_roundtrip() -> Result<usize, String> {
    let conn = open_db_in_memory().map_err(|err| err.to_string())?;
    let namespace = SqliteNamespace::new(&conn);

    let mut notes =
        TextListStore::for_list(ListKind::Notes, namespace).map_err(|err| err.to_string())?;
    if let Some(reason) = notes.add("smoke note").skip_reason() {
        return Err(format!("note skipped: {reason:?}"));
    }
    let mut tasks = TaskListStore::tasks(namespace);
    if !tasks.add("smoke task", "01/01/2030").is_persisted() {
        return Err("task was not persisted".to_string());
    }

    let mut reloaded = TaskListStore::tasks(namespace);
    match reloaded.load() {
        LoadOutcome::Loaded(count) => Ok(count + notes.len()),
        LoadOutcome::Missing => Err("tasks missing after save".to_string()),
        LoadOutcome::Failed(err) => Err(err.to_string()),
    }
}
