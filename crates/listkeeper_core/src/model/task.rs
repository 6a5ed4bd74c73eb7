//! Task record used by the Todo list.
//!
//! # Invariants
//! - JSON field names are `id`, `text`, `endDate`, `priority`, `completed`.
//! - `id` is meant to identify one task but is NOT guaranteed unique: it is
//!   assigned as `list length + 1`, so delete-then-add can reuse a live id.
//! - `end_date` is stored verbatim; it is only parsed for ordering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Identifier carried by a task record.
pub type TaskId = i64;

/// Calendar format expected in `end_date`.
pub const END_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub text: String,
    /// Free-form `DD/MM/YYYY` text; may be empty.
    #[serde(rename = "endDate")]
    pub end_date: String,
    /// Always `0`; kept for payload compatibility.
    pub priority: i64,
    pub completed: bool,
}

impl TaskRecord {
    /// Builds an open task with the default priority.
    pub fn new(id: TaskId, text: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            end_date: end_date.into(),
            priority: 0,
            completed: false,
        }
    }

    /// Parsed `end_date`, or `None` when empty or not a real calendar day.
    pub fn parsed_end_date(&self) -> Option<NaiveDate> {
        parse_end_date(&self.end_date)
    }
}

/// Parses `DD/MM/YYYY` text into a calendar date.
pub fn parse_end_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, END_DATE_FORMAT).ok()
}

/// Ascending end-date order; records without a parseable date go last.
pub fn cmp_by_end_date(left: &TaskRecord, right: &TaskRecord) -> Ordering {
    match (left.parsed_end_date(), right.parsed_end_date()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
