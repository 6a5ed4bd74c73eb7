//! Catalog of list screens and their storage keys.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Record shape stored under a list key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordShape {
    /// Bare string entries addressed by position.
    Text,
    /// `TaskRecord` entries addressed by `id`.
    Task,
}

/// One list screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Notes,
    Personal,
    Shopping,
    Work,
    Tasks,
}

impl ListKind {
    /// Every list screen, in drawer order.
    pub const ALL: [ListKind; 5] = [
        ListKind::Tasks,
        ListKind::Shopping,
        ListKind::Personal,
        ListKind::Work,
        ListKind::Notes,
    ];

    /// Storage namespace key holding this list.
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Personal => "personalItems",
            Self::Shopping => "shoppingItems",
            Self::Work => "workItems",
            Self::Tasks => "tasks",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Notes => "Notes",
            Self::Personal => "Personal List",
            Self::Shopping => "Shopping List",
            Self::Work => "Work List",
            Self::Tasks => "Your Tasks",
        }
    }

    pub fn shape(self) -> RecordShape {
        match self {
            Self::Tasks => RecordShape::Task,
            _ => RecordShape::Text,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Personal => "personal",
            Self::Shopping => "shopping",
            Self::Work => "work",
            Self::Tasks => "tasks",
        }
    }
}

impl Display for ListKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a name matches no list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownListKind(pub String);

impl Display for UnknownListKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown list `{}`; expected notes|personal|shopping|work|tasks",
            self.0
        )
    }
}

impl std::error::Error for UnknownListKind {}

impl FromStr for ListKind {
    type Err = UnknownListKind;

    /// Accepts either the short label (case-insensitive) or the storage key.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        ListKind::ALL
            .into_iter()
            .find(|kind| {
                kind.storage_key() == trimmed || kind.label().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| UnknownListKind(trimmed.to_string()))
    }
}
