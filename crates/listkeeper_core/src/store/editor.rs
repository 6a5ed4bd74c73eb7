//! Edit session for one task on the Todo screen.

use super::{Mutation, SkipReason, TaskListStore};
use crate::model::input::{InputError, TaskDraft};
use crate::model::task::TaskId;
use crate::storage::KeyValueStorage;

/// Tracks which task is being edited and the edit-form contents.
#[derive(Debug, Default)]
pub struct TaskEditor {
    editing: Option<TaskId>,
    draft: TaskDraft,
}

impl TaskEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Task id currently being edited.
    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Starts editing `id`, prefilling the form from the stored task.
    ///
    /// Returns `false` and leaves the session untouched when `id` is unknown.
    pub fn begin<S: KeyValueStorage>(&mut self, store: &TaskListStore<S>, id: TaskId) -> bool {
        let Some(task) = store.get(id) else {
            return false;
        };
        self.editing = Some(id);
        self.draft = TaskDraft::from_task(task);
        true
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.draft.text = text.into();
    }

    pub fn set_end_date(&mut self, text: impl Into<String>) -> Result<(), InputError> {
        self.draft.set_end_date(text)
    }

    /// Applies the edit; the session closes once the update is applied.
    pub fn commit<S: KeyValueStorage>(&mut self, store: &mut TaskListStore<S>) -> Mutation {
        let Some(id) = self.editing else {
            return Mutation::Skipped(SkipReason::NoActiveEdit);
        };
        let outcome = store.update(id, self.draft.text.clone(), self.draft.end_date());
        if outcome.is_applied() {
            self.cancel();
        }
        outcome
    }

    pub fn cancel(&mut self) {
        self.editing = None;
        self.draft.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::TaskEditor;
    use crate::storage::MemoryNamespace;
    use crate::store::{SkipReason, TaskListStore};

    #[test]
    fn begin_prefills_from_stored_task() {
        let namespace = MemoryNamespace::new();
        let mut tasks = TaskListStore::tasks(&namespace);
        tasks.add("renew passport", "30/06/2025");

        let mut editor = TaskEditor::new();
        assert!(editor.begin(&tasks, 1));
        assert_eq!(editor.editing(), Some(1));
        assert_eq!(editor.draft().text, "renew passport");
        assert_eq!(editor.draft().end_date(), "30/06/2025");

        assert!(!editor.begin(&tasks, 42));
        assert_eq!(editor.editing(), Some(1));
    }

    #[test]
    fn commit_applies_and_closes_session() {
        let namespace = MemoryNamespace::new();
        let mut tasks = TaskListStore::tasks(&namespace);
        tasks.add("draft", "");

        let mut editor = TaskEditor::new();
        editor.begin(&tasks, 1);
        editor.set_text("final");
        editor.set_end_date("01/07/2025").unwrap();

        assert!(editor.commit(&mut tasks).is_persisted());
        assert_eq!(tasks.items()[0].text, "final");
        assert_eq!(tasks.items()[0].end_date, "01/07/2025");
        assert_eq!(editor.editing(), None);
    }

    #[test]
    fn blank_commit_keeps_session_open() {
        let namespace = MemoryNamespace::new();
        let mut tasks = TaskListStore::tasks(&namespace);
        tasks.add("keep me", "");

        let mut editor = TaskEditor::new();
        assert_eq!(
            editor.commit(&mut tasks).skip_reason(),
            Some(SkipReason::NoActiveEdit)
        );

        editor.begin(&tasks, 1);
        editor.set_text("");
        assert_eq!(
            editor.commit(&mut tasks).skip_reason(),
            Some(SkipReason::BlankText)
        );
        assert_eq!(editor.editing(), Some(1));
        assert_eq!(tasks.items()[0].text, "keep me");
    }

    #[test]
    fn text_only_edit_keeps_stored_date_outside_input_filter() {
        let namespace = MemoryNamespace::new();
        let mut tasks = TaskListStore::tasks(&namespace);
        tasks.add("legacy", "2025-01-15");

        let mut editor = TaskEditor::new();
        assert!(editor.begin(&tasks, 1));
        assert_eq!(editor.draft().end_date(), "2025-01-15");

        editor.set_text("legacy, renamed");
        assert!(editor.commit(&mut tasks).is_persisted());
        assert_eq!(tasks.items()[0].text, "legacy, renamed");
        assert_eq!(tasks.items()[0].end_date, "2025-01-15");

        let mut reloaded = TaskListStore::tasks(&namespace);
        reloaded.load();
        assert_eq!(reloaded.items()[0].end_date, "2025-01-15");
    }
}
