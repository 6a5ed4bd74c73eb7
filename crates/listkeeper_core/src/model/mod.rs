//! Record shapes persisted by the list stores.
//!
//! # Responsibility
//! - Define the string and task record shapes stored per list screen.
//! - Name every list screen and its fixed storage key.
//! - Hold the input-boundary checks applied before records are built.
//!
//! # Invariants
//! - Serialized field names match payloads already present on devices.
//! - Each list screen owns exactly one storage key.

pub mod input;
pub mod list_kind;
pub mod task;
