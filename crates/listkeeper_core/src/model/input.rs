//! Input-boundary checks for list and task forms.
//!
//! # Responsibility
//! - Reject blank entry text before a record is built.
//! - Filter end-date keystrokes down to digits and `/`.
//! - Hold in-progress task form state between keystrokes.
//!
//! # Invariants
//! - A rejected end-date edit leaves the previous draft value in place.
//! - A draft prefilled from a stored task keeps the stored end date as-is.
//! - Date text is filtered by character class only, never by calendar.

use crate::model::task::TaskRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static END_DATE_INPUT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9/]*$").expect("valid end date input regex"));

/// User-facing alert shown for a rejected end-date edit.
pub const END_DATE_INPUT_MESSAGE: &str =
    "Please enter numbers and '/' only for the date (DD/MM/YYYY).";

/// Input rejected at the form boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// End-date text contains something other than digits and `/`.
    InvalidDateCharacters,
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateCharacters => f.write_str(END_DATE_INPUT_MESSAGE),
        }
    }
}

impl Error for InputError {}

/// Returns whether entry text is empty after trimming.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Accepts end-date text made only of digits and `/` (empty allowed).
pub fn validate_end_date_input(text: &str) -> Result<(), InputError> {
    if END_DATE_INPUT_RE.is_match(text) {
        Ok(())
    } else {
        Err(InputError::InvalidDateCharacters)
    }
}

/// Task form contents for the add row and the edit row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub text: String,
    end_date: String,
}

impl TaskDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            end_date: String::new(),
        }
    }

    /// Prefills the edit row from a stored task.
    ///
    /// The stored end date is copied verbatim; the keystroke filter only
    /// applies to user edits.
    pub(crate) fn from_task(task: &TaskRecord) -> Self {
        Self {
            text: task.text.clone(),
            end_date: task.end_date.clone(),
        }
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    /// Replaces the end date if `text` passes the date filter.
    pub fn set_end_date(&mut self, text: impl Into<String>) -> Result<(), InputError> {
        let text = text.into();
        validate_end_date_input(&text)?;
        self.end_date = text;
        Ok(())
    }

    /// Whether the draft may be submitted.
    pub fn is_submittable(&self) -> bool {
        !is_blank(&self.text)
    }

    /// Resets both fields after a successful submit.
    pub fn clear(&mut self) {
        self.text.clear();
        self.end_date.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{is_blank, validate_end_date_input, InputError, TaskDraft};

    #[test]
    fn blank_detection_trims_whitespace() {
        assert!(is_blank(""));
        assert!(is_blank("  \t\n"));
        assert!(!is_blank(" milk "));
    }

    #[test]
    fn date_filter_allows_digits_and_slashes_only() {
        assert!(validate_end_date_input("").is_ok());
        assert!(validate_end_date_input("15/01/2024").is_ok());
        assert!(validate_end_date_input("15/0").is_ok());
        assert_eq!(
            validate_end_date_input("15-01-2024"),
            Err(InputError::InvalidDateCharacters)
        );
        assert!(validate_end_date_input("tomorrow").is_err());
    }

    #[test]
    fn rejected_date_keeps_previous_value() {
        let mut draft = TaskDraft::new("pay rent");
        draft.set_end_date("01/02").unwrap();
        let err = draft.set_end_date("01/02/x").unwrap_err();
        assert!(err.to_string().contains("DD/MM/YYYY"));
        assert_eq!(draft.end_date(), "01/02");
    }

    #[test]
    fn clear_resets_both_fields() {
        let mut draft = TaskDraft::new("call mom");
        draft.set_end_date("3/3/2025").unwrap();
        draft.clear();
        assert_eq!(draft, TaskDraft::default());
        assert!(!draft.is_submittable());
    }
}
