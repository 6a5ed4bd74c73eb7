//! Core list persistence for ListKeeper.
//! Every list screen goes through a store from this crate; UI layers never
//! touch the storage namespace directly.

pub mod about;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::input::{
    is_blank, validate_end_date_input, InputError, TaskDraft, END_DATE_INPUT_MESSAGE,
};
pub use model::list_kind::{ListKind, RecordShape, UnknownListKind};
pub use model::task::{TaskId, TaskRecord};
pub use storage::{
    KeyValueStorage, MemoryNamespace, SqliteNamespace, StorageError, StorageResult,
};
pub use store::{
    ListStore, LoadOutcome, Mutation, PersistOutcome, ShapeMismatch, SkipReason, TaskEditor,
    TaskListStore, TextListStore,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
