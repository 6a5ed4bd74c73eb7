//! Task list backing the Todo screen.
//!
//! # Invariants
//! - New ids are `len + 1` at insertion time. After a delete this can equal
//!   a live id; every id-addressed operation then acts on all matches.
//! - `sort_by_end_date` only reorders memory; `load` restores stored order.

use super::{ListStore, Mutation, SkipReason};
use crate::model::input::{is_blank, TaskDraft};
use crate::model::list_kind::ListKind;
use crate::model::task::{cmp_by_end_date, TaskId, TaskRecord};
use crate::storage::KeyValueStorage;

pub type TaskListStore<S> = ListStore<TaskRecord, S>;

impl<S: KeyValueStorage> ListStore<TaskRecord, S> {
    /// Opens the task list under its fixed `tasks` key.
    pub fn tasks(storage: S) -> Self {
        Self::new(ListKind::Tasks.storage_key(), storage)
    }

    /// Id the next added task will receive.
    pub fn next_id(&self) -> TaskId {
        self.len() as TaskId + 1
    }

    /// First task carrying `id`, used to prefill the edit form.
    pub fn get(&self, id: TaskId) -> Option<&TaskRecord> {
        self.items().iter().find(|task| task.id == id)
    }

    /// Appends an open task; blank text is skipped.
    pub fn add(&mut self, text: impl Into<String>, end_date: impl Into<String>) -> Mutation {
        let text = text.into();
        if is_blank(&text) {
            return Mutation::Skipped(SkipReason::BlankText);
        }
        let task = TaskRecord::new(self.next_id(), text, end_date);
        self.commit(|items| items.push(task))
    }

    /// Submits the add form and clears it when the task was added.
    pub fn add_draft(&mut self, draft: &mut TaskDraft) -> Mutation {
        if !draft.is_submittable() {
            return Mutation::Skipped(SkipReason::BlankText);
        }
        let outcome = self.add(draft.text.clone(), draft.end_date());
        if outcome.is_applied() {
            draft.clear();
        }
        outcome
    }

    /// Removes every task carrying `id`.
    pub fn remove(&mut self, id: TaskId) -> Mutation {
        if self.get(id).is_none() {
            return Mutation::Skipped(SkipReason::UnknownId(id));
        }
        self.commit(|items| items.retain(|task| task.id != id))
    }

    /// Replaces text and end date of the tasks carrying `id`.
    ///
    /// Skipped when `text` is blank or no task matches.
    pub fn update(
        &mut self,
        id: TaskId,
        text: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Mutation {
        let text = text.into();
        if is_blank(&text) {
            return Mutation::Skipped(SkipReason::BlankText);
        }
        if self.get(id).is_none() {
            return Mutation::Skipped(SkipReason::UnknownId(id));
        }
        let end_date = end_date.into();
        self.commit(|items| {
            for task in items.iter_mut().filter(|task| task.id == id) {
                task.text = text.clone();
                task.end_date = end_date.clone();
            }
        })
    }

    /// Flips `completed` on the tasks carrying `id`.
    pub fn toggle_completed(&mut self, id: TaskId) -> Mutation {
        if self.get(id).is_none() {
            return Mutation::Skipped(SkipReason::UnknownId(id));
        }
        self.commit(|items| {
            for task in items.iter_mut().filter(|task| task.id == id) {
                task.completed = !task.completed;
            }
        })
    }

    /// Stable ascending sort by parsed end date, memory only.
    ///
    /// Tasks whose end date is empty or not a calendar day keep their
    /// relative order after all dated tasks.
    pub fn sort_by_end_date(&mut self) -> &[TaskRecord] {
        self.reorder(|items| items.sort_by(cmp_by_end_date));
        self.items()
    }
}

#[cfg(test)]
mod tests {
    use super::TaskListStore;
    use crate::model::input::TaskDraft;
    use crate::storage::MemoryNamespace;
    use crate::store::SkipReason;

    #[test]
    fn ids_follow_current_length() {
        let namespace = MemoryNamespace::new();
        let mut tasks = TaskListStore::tasks(&namespace);

        tasks.add("a", "");
        tasks.add("b", "");
        assert_eq!(tasks.next_id(), 3);
        assert_eq!(tasks.get(2).map(|task| task.text.as_str()), Some("b"));
    }

    #[test]
    fn blank_update_is_skipped() {
        let namespace = MemoryNamespace::new();
        let mut tasks = TaskListStore::tasks(&namespace);
        tasks.add("write report", "01/01/2025");

        let outcome = tasks.update(1, "   ", "02/02/2025");

        assert_eq!(outcome.skip_reason(), Some(SkipReason::BlankText));
        assert_eq!(tasks.items()[0].text, "write report");
        assert_eq!(tasks.items()[0].end_date, "01/01/2025");
    }

    #[test]
    fn unknown_id_is_skipped() {
        let namespace = MemoryNamespace::new();
        let mut tasks = TaskListStore::tasks(&namespace);
        tasks.add("only", "");

        assert_eq!(tasks.remove(9).skip_reason(), Some(SkipReason::UnknownId(9)));
        assert_eq!(
            tasks.toggle_completed(9).skip_reason(),
            Some(SkipReason::UnknownId(9))
        );
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn add_draft_clears_form_only_on_success() {
        let namespace = MemoryNamespace::new();
        let mut tasks = TaskListStore::tasks(&namespace);

        let mut blank = TaskDraft::new(" ");
        blank.set_end_date("1/1/2025").unwrap();
        assert_eq!(
            tasks.add_draft(&mut blank).skip_reason(),
            Some(SkipReason::BlankText)
        );
        assert!(tasks.is_empty());
        assert_eq!(blank.end_date(), "1/1/2025");

        let mut draft = TaskDraft::new("book flights");
        draft.set_end_date("10/05/2025").unwrap();
        assert!(tasks.add_draft(&mut draft).is_persisted());
        assert_eq!(draft, TaskDraft::default());
        assert_eq!(tasks.items()[0].end_date, "10/05/2025");
    }
}
