use listkeeper_core::{
    KeyValueStorage, ListKind, LoadOutcome, MemoryNamespace, Mutation, PersistOutcome,
    SkipReason, StorageError, StorageResult, TaskListStore, TextListStore,
};
use std::cell::Cell;

/// Namespace whose reads and writes can be switched to fail.
#[derive(Default)]
struct FlakyNamespace {
    inner: MemoryNamespace,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl KeyValueStorage for FlakyNamespace {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if self.fail_reads.get() {
            return Err(StorageError::Unavailable("read fault".to_string()));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes.get() {
            return Err(StorageError::Unavailable("write fault".to_string()));
        }
        self.inner.set(key, value)
    }
}

#[test]
fn add_then_reload_ends_with_added_entry() {
    let namespace = MemoryNamespace::new();
    for kind in [
        ListKind::Notes,
        ListKind::Personal,
        ListKind::Shopping,
        ListKind::Work,
    ] {
        let mut list = TextListStore::for_list(kind, &namespace).unwrap();
        list.add("first");
        list.add("second");

        let mut reloaded = TextListStore::for_list(kind, &namespace).unwrap();
        assert!(matches!(reloaded.load(), LoadOutcome::Loaded(2)), "{kind}");
        assert_eq!(reloaded.items().last().map(String::as_str), Some("second"));
    }

    let mut tasks = TaskListStore::tasks(&namespace);
    tasks.add("file taxes", "15/04/2025");
    let mut reloaded = TaskListStore::tasks(&namespace);
    reloaded.load();
    assert_eq!(reloaded.items().last(), tasks.items().last());
}

#[test]
fn blank_entries_are_rejected() {
    let namespace = MemoryNamespace::new();
    let mut notes = TextListStore::for_list(ListKind::Notes, &namespace).unwrap();
    let mut tasks = TaskListStore::tasks(&namespace);

    for blank in ["", "   ", "\t\n"] {
        assert_eq!(notes.add(blank).skip_reason(), Some(SkipReason::BlankText));
        assert_eq!(
            tasks.add(blank, "01/01/2025").skip_reason(),
            Some(SkipReason::BlankText)
        );
    }
    assert!(notes.is_empty());
    assert!(tasks.is_empty());
    assert!(namespace.is_empty());
}

#[test]
fn remove_by_index_shifts_later_entries() {
    let namespace = MemoryNamespace::new();
    let mut items = TextListStore::for_list(ListKind::Personal, &namespace).unwrap();
    for entry in ["a", "b", "c"] {
        items.add(entry);
    }

    assert!(items.remove(1).is_persisted());

    assert_eq!(items.items(), ["a", "c"]);
    assert_eq!(
        namespace.get("personalItems").unwrap().as_deref(),
        Some(r#"["a","c"]"#)
    );
}

#[test]
fn remove_by_id_drops_exactly_one_task() {
    let namespace = MemoryNamespace::new();
    let mut tasks = TaskListStore::tasks(&namespace);
    tasks.add("a", "");
    tasks.add("b", "");
    tasks.add("c", "");

    assert!(tasks.remove(2).is_persisted());

    assert_eq!(tasks.len(), 2);
    assert!(tasks.get(2).is_none());
    let ids: Vec<_> = tasks.items().iter().map(|task| task.id).collect();
    assert_eq!(ids, [1, 3]);
}

#[test]
fn delete_then_add_reuses_a_live_id() {
    let namespace = MemoryNamespace::new();
    let mut tasks = TaskListStore::tasks(&namespace);
    tasks.add("A", "");
    tasks.add("B", "");
    tasks.add("C", "");
    tasks.remove(2);

    tasks.add("D", "");

    let ids: Vec<_> = tasks.items().iter().map(|task| task.id).collect();
    assert_eq!(ids, [1, 3, 3]);

    // Both tasks sharing id 3 react to one toggle.
    tasks.toggle_completed(3);
    assert!(tasks.items()[1].completed);
    assert!(tasks.items()[2].completed);
}

#[test]
fn toggle_twice_restores_completed_flag() {
    let namespace = MemoryNamespace::new();
    let mut tasks = TaskListStore::tasks(&namespace);
    tasks.add("stretch", "");

    assert!(tasks.toggle_completed(1).is_persisted());
    assert!(tasks.items()[0].completed);
    assert!(tasks.toggle_completed(1).is_persisted());
    assert!(!tasks.items()[0].completed);
}

#[test]
fn update_replaces_text_and_end_date_only() {
    let namespace = MemoryNamespace::new();
    let mut tasks = TaskListStore::tasks(&namespace);
    tasks.add("draft", "01/01/2025");
    tasks.toggle_completed(1);

    assert!(tasks.update(1, "final", "02/02/2025").is_persisted());

    let task = tasks.get(1).unwrap();
    assert_eq!(task.text, "final");
    assert_eq!(task.end_date, "02/02/2025");
    assert!(task.completed);
    assert_eq!(task.priority, 0);
}

#[test]
fn sort_by_end_date_is_not_persisted() {
    let namespace = MemoryNamespace::new();
    let mut tasks = TaskListStore::tasks(&namespace);
    tasks.add("mid", "15/01/2024");
    tasks.add("early", "01/01/2024");
    tasks.add("late", "20/01/2024");

    let sorted: Vec<_> = tasks
        .sort_by_end_date()
        .iter()
        .map(|task| task.end_date.as_str())
        .collect();
    assert_eq!(sorted, ["01/01/2024", "15/01/2024", "20/01/2024"]);

    tasks.load();
    let restored: Vec<_> = tasks.items().iter().map(|task| task.text.as_str()).collect();
    assert_eq!(restored, ["mid", "early", "late"]);
}

#[test]
fn sort_puts_undated_tasks_last_in_insertion_order() {
    let namespace = MemoryNamespace::new();
    let mut tasks = TaskListStore::tasks(&namespace);
    tasks.add("no date", "");
    tasks.add("bad date", "99/99/2024");
    tasks.add("dated", "03/03/2024");

    let order: Vec<_> = tasks
        .sort_by_end_date()
        .iter()
        .map(|task| task.text.as_str())
        .collect();
    assert_eq!(order, ["dated", "no date", "bad date"]);
}

#[test]
fn failed_write_keeps_entry_in_memory() {
    let namespace = FlakyNamespace::default();
    let mut notes = TextListStore::for_list(ListKind::Notes, &namespace).unwrap();
    notes.add("saved");
    namespace.fail_writes.set(true);

    let outcome = notes.add("unsaved");

    assert!(matches!(
        outcome,
        Mutation::Applied(PersistOutcome::Failed(StorageError::Unavailable(_)))
    ));
    assert_eq!(notes.items(), ["saved", "unsaved"]);
    assert!(notes.is_diverged());
    assert_eq!(
        namespace.inner.get("notes").unwrap().as_deref(),
        Some(r#"["saved"]"#)
    );

    namespace.fail_writes.set(false);
    assert!(notes.persist().is_saved());
    assert!(!notes.is_diverged());
    assert_eq!(
        namespace.inner.get("notes").unwrap().as_deref(),
        Some(r#"["saved","unsaved"]"#)
    );
}

#[test]
fn failed_task_write_keeps_task_in_memory() {
    let namespace = FlakyNamespace::default();
    namespace.fail_writes.set(true);
    let mut tasks = TaskListStore::tasks(&namespace);

    let outcome = tasks.add("offline", "");

    assert!(outcome.is_applied());
    assert!(!outcome.is_persisted());
    assert_eq!(tasks.len(), 1);
    assert_eq!(namespace.inner.get("tasks").unwrap(), None);
}

#[test]
fn failed_read_keeps_previous_memory() {
    let namespace = FlakyNamespace::default();
    let mut notes = TextListStore::for_list(ListKind::Notes, &namespace).unwrap();
    notes.add("kept");

    namespace.fail_reads.set(true);
    assert!(matches!(notes.load(), LoadOutcome::Failed(_)));
    assert_eq!(notes.items(), ["kept"]);
}

#[test]
fn corrupt_payload_keeps_previous_memory() {
    let namespace = MemoryNamespace::new();
    let mut notes = TextListStore::for_list(ListKind::Notes, &namespace).unwrap();
    notes.add("kept");
    namespace.set("notes", "{not json").unwrap();

    assert!(matches!(
        notes.load(),
        LoadOutcome::Failed(StorageError::Deserialize(_))
    ));
    assert_eq!(notes.items(), ["kept"]);
}

#[test]
fn missing_key_leaves_memory_empty() {
    let namespace = MemoryNamespace::new();
    let mut work = TextListStore::for_list(ListKind::Work, &namespace).unwrap();

    assert!(matches!(work.load(), LoadOutcome::Missing));
    assert!(work.is_empty());
}

#[test]
fn stores_for_different_lists_do_not_share_entries() {
    let namespace = MemoryNamespace::new();
    let mut notes = TextListStore::for_list(ListKind::Notes, &namespace).unwrap();
    let mut personal = TextListStore::for_list(ListKind::Personal, &namespace).unwrap();

    notes.add("note");
    personal.add("item");
    notes.load();
    personal.load();

    assert_eq!(notes.items(), ["note"]);
    assert_eq!(personal.items(), ["item"]);
}
