//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose one call per list-screen action to Dart via FRB.
//! - Open storage, load the list, apply the action, and return the new list.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - A list whose stored payload cannot be read is never overwritten.
//! - Sorting returns a reordered view and leaves stored order unchanged.

use listkeeper_core::db::open_db;
use listkeeper_core::{
    about, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, validate_end_date_input, CoreConfig, ListKind, LoadOutcome, Mutation,
    PersistOutcome, RecordShape, SkipReason, SqliteNamespace, TaskListStore, TaskRecord,
    TextListStore,
};
use log::warn;
use std::sync::OnceLock;

static CONFIG: OnceLock<CoreConfig> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Initializes logging from `LISTKEEPER_LOG_LEVEL` / `LISTKEEPER_LOG_DIR`.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging_from_env() -> String {
    let config = resolve_config();
    let log_dir = config.log_dir.to_string_lossy();
    init_logging(config.log_level.to_string(), log_dir.into_owned())
}

/// Home-screen greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeInfo {
    pub title: String,
    pub subtitle: String,
}

#[flutter_rust_bridge::frb(sync)]
pub fn home_info() -> HomeInfo {
    HomeInfo {
        title: about::HOME_TITLE.to_string(),
        subtitle: about::HOME_SUBTITLE.to_string(),
    }
}

/// About-screen metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutInfo {
    pub name: String,
    pub title: String,
    pub description: String,
    pub developer: String,
    /// `Developed by: ...` line as displayed.
    pub credit: String,
    pub version: String,
}

#[flutter_rust_bridge::frb(sync)]
pub fn about_info() -> AboutInfo {
    AboutInfo {
        name: about::APP_NAME.to_string(),
        title: about::ABOUT_TITLE.to_string(),
        description: about::APP_DESCRIPTION.to_string(),
        developer: about::APP_DEVELOPER.to_string(),
        credit: about::developer_credit(),
        version: core_version(),
    }
}

/// Drawer/home menu entry for one list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMenuItem {
    /// Short list name accepted by the `list_*` calls.
    pub list: String,
    pub title: String,
    /// `true` for the task list, `false` for plain string lists.
    pub is_task_list: bool,
}

#[flutter_rust_bridge::frb(sync)]
pub fn list_menu() -> Vec<ListMenuItem> {
    about::list_menu()
        .into_iter()
        .map(|entry| ListMenuItem {
            list: entry.kind.to_string(),
            title: entry.title.to_string(),
            is_task_list: entry.kind.shape() == RecordShape::Task,
        })
        .collect()
}

/// Result envelope for string-list calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListResponse {
    /// Whether the action changed the list.
    pub ok: bool,
    /// Whether the list on disk matches `items`.
    pub persisted: bool,
    /// List contents after the action.
    pub items: Vec<String>,
    pub message: String,
}

/// Task projection returned to Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: i64,
    pub text: String,
    pub end_date: String,
    pub priority: i64,
    pub completed: bool,
}

/// Result envelope for task-list calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskResponse {
    pub ok: bool,
    pub persisted: bool,
    pub items: Vec<TaskItem>,
    pub message: String,
}

impl ListResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            persisted: false,
            items: Vec::new(),
            message: message.into(),
        }
    }
}

impl TaskResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            persisted: false,
            items: Vec::new(),
            message: message.into(),
        }
    }
}

/// Loads a string list (`notes|personal|shopping|work`).
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn list_load(list: String) -> ListResponse {
    match with_text_list(&list, |store| {
        let count = store.len();
        ListResponse {
            ok: true,
            persisted: true,
            items: store.items().to_vec(),
            message: format!("Loaded {count} item(s)."),
        }
    }) {
        Ok(response) => response,
        Err(message) => ListResponse::failure(format!("list_load failed: {message}")),
    }
}

/// Appends an entry to a string list; blank entries are ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn list_add(list: String, entry: String) -> ListResponse {
    match with_text_list(&list, |store| {
        let outcome = store.add(entry);
        to_list_response(&outcome, "Item added.", store.items().to_vec())
    }) {
        Ok(response) => response,
        Err(message) => ListResponse::failure(format!("list_add failed: {message}")),
    }
}

/// Removes the entry at `index`; later entries shift down.
#[flutter_rust_bridge::frb(sync)]
pub fn list_remove(list: String, index: u32) -> ListResponse {
    match with_text_list(&list, |store| {
        let outcome = store.remove(index as usize);
        to_list_response(&outcome, "Item removed.", store.items().to_vec())
    }) {
        Ok(response) => response,
        Err(message) => ListResponse::failure(format!("list_remove failed: {message}")),
    }
}

/// Loads the task list in stored order.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_load() -> TaskResponse {
    match with_task_list(|store| {
        let count = store.len();
        TaskResponse {
            ok: true,
            persisted: true,
            items: to_task_items(store.items()),
            message: format!("Loaded {count} task(s)."),
        }
    }) {
        Ok(response) => response,
        Err(message) => TaskResponse::failure(format!("tasks_load failed: {message}")),
    }
}

/// Task list ordered by end date for display; stored order is unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_sorted_by_end_date() -> TaskResponse {
    match with_task_list(|store| TaskResponse {
        ok: true,
        persisted: true,
        items: to_task_items(store.sort_by_end_date()),
        message: "Sorted by end date.".to_string(),
    }) {
        Ok(response) => response,
        Err(message) => {
            TaskResponse::failure(format!("tasks_sorted_by_end_date failed: {message}"))
        }
    }
}

/// Task used to prefill the edit form, if `id` exists.
///
/// A storage failure is logged and reported as no task.
#[flutter_rust_bridge::frb(sync)]
pub fn task_get(id: i64) -> Option<TaskItem> {
    task_lookup(id, with_task_list(|store| store.get(id).map(TaskItem::from)))
}

fn task_lookup(id: i64, result: Result<Option<TaskItem>, String>) -> Option<TaskItem> {
    match result {
        Ok(task) => task,
        Err(message) => {
            warn!("event=task_get module=ffi status=error id={id} error={message}");
            None
        }
    }
}

/// Adds a task. `end_date` must pass the digits-and-slash filter.
#[flutter_rust_bridge::frb(sync)]
pub fn task_add(text: String, end_date: String) -> TaskResponse {
    if let Err(err) = validate_end_date_input(&end_date) {
        return TaskResponse::failure(err.to_string());
    }
    task_action("task_add", "Task added.", |store| store.add(text, end_date))
}

#[flutter_rust_bridge::frb(sync)]
pub fn task_delete(id: i64) -> TaskResponse {
    task_action("task_delete", "Task deleted.", |store| store.remove(id))
}

/// Replaces text and end date of task `id`; blank text is ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn task_update(id: i64, text: String, end_date: String) -> TaskResponse {
    if let Err(err) = validate_end_date_input(&end_date) {
        return TaskResponse::failure(err.to_string());
    }
    task_action("task_update", "Task updated.", |store| {
        store.update(id, text, end_date)
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle_completed(id: i64) -> TaskResponse {
    task_action("task_toggle_completed", "Task toggled.", |store| {
        store.toggle_completed(id)
    })
}

/// Checks one end-date keystroke result.
///
/// Returns empty string when accepted, otherwise the alert text to show.
#[flutter_rust_bridge::frb(sync)]
pub fn validate_end_date(text: String) -> String {
    match validate_end_date_input(&text) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

impl From<&TaskRecord> for TaskItem {
    fn from(task: &TaskRecord) -> Self {
        Self {
            id: task.id,
            text: task.text.clone(),
            end_date: task.end_date.clone(),
            priority: task.priority,
            completed: task.completed,
        }
    }
}

fn resolve_config() -> &'static CoreConfig {
    CONFIG.get_or_init(|| {
        CoreConfig::from_env().unwrap_or_else(|err| {
            warn!("event=config_resolve module=ffi status=fallback error={err}");
            CoreConfig::default()
        })
    })
}

fn with_text_list<T>(
    list: &str,
    f: impl FnOnce(&mut TextListStore<SqliteNamespace<'_>>) -> T,
) -> Result<T, String> {
    let kind = list.parse::<ListKind>().map_err(|err| err.to_string())?;
    let conn = open_db(&resolve_config().db_path)
        .map_err(|err| format!("list DB open failed: {err}"))?;
    let mut store = TextListStore::for_list(kind, SqliteNamespace::new(&conn))
        .map_err(|err| err.to_string())?;
    if let LoadOutcome::Failed(err) = store.load() {
        return Err(format!("stored `{kind}` list is unreadable: {err}"));
    }
    Ok(f(&mut store))
}

fn with_task_list<T>(
    f: impl FnOnce(&mut TaskListStore<SqliteNamespace<'_>>) -> T,
) -> Result<T, String> {
    let conn = open_db(&resolve_config().db_path)
        .map_err(|err| format!("list DB open failed: {err}"))?;
    let mut store = TaskListStore::tasks(SqliteNamespace::new(&conn));
    if let LoadOutcome::Failed(err) = store.load() {
        return Err(format!("stored task list is unreadable: {err}"));
    }
    Ok(f(&mut store))
}

fn task_action(
    operation: &str,
    success: &str,
    f: impl FnOnce(&mut TaskListStore<SqliteNamespace<'_>>) -> Mutation,
) -> TaskResponse {
    let result = with_task_list(|store| {
        let outcome = f(store);
        let (ok, persisted, message) = describe(&outcome, success);
        TaskResponse {
            ok,
            persisted,
            items: to_task_items(store.items()),
            message,
        }
    });
    match result {
        Ok(response) => response,
        Err(message) => TaskResponse::failure(format!("{operation} failed: {message}")),
    }
}

fn to_list_response(outcome: &Mutation, success: &str, items: Vec<String>) -> ListResponse {
    let (ok, persisted, message) = describe(outcome, success);
    ListResponse {
        ok,
        persisted,
        items,
        message,
    }
}

fn to_task_items(tasks: &[TaskRecord]) -> Vec<TaskItem> {
    tasks.iter().map(TaskItem::from).collect()
}

/// `(ok, persisted, message)` for a mutation outcome.
fn describe(outcome: &Mutation, success: &str) -> (bool, bool, String) {
    match outcome {
        Mutation::Applied(PersistOutcome::Saved) => (true, true, success.to_string()),
        Mutation::Applied(PersistOutcome::Failed(err)) => {
            (true, false, format!("{success} Saving failed: {err}"))
        }
        Mutation::Skipped(reason) => (false, true, skip_message(*reason)),
    }
}

fn skip_message(reason: SkipReason) -> String {
    match reason {
        SkipReason::BlankText => "Nothing to save: text is empty.".to_string(),
        SkipReason::IndexOutOfRange { index, len } => {
            format!("No item at position {index}; list has {len} item(s).")
        }
        SkipReason::UnknownId(id) => format!("No task with id {id}."),
        SkipReason::NoActiveEdit => "No task is being edited.".to_string(),
    }
}
