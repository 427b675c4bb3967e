//! Integration tests for the task store
//!
//! These exercise the store through its public API the way the CLI and TUI
//! do: open a file, mutate, and reopen to check what landed on disk.

use std::fs;
use taskpad::task::{StoreError, Task, TaskStatus, TaskStore};
use tempfile::TempDir;

fn setup() -> (TempDir, TaskStore) {
    let temp = TempDir::new().unwrap();
    let store = TaskStore::open(temp.path().join("tasks.csv")).unwrap();
    (temp, store)
}

fn reopen(store: &TaskStore) -> Vec<Task> {
    TaskStore::load(store.path()).unwrap()
}

fn pairs(tasks: &[Task]) -> Vec<(String, TaskStatus)> {
    tasks.iter().map(|t| (t.text.clone(), t.status)).collect()
}

#[test]
fn test_scenario_add_complete_delete() {
    let (_temp, mut store) = setup();
    store.add("Buy milk").unwrap();
    store.add("Write report").unwrap();
    store.set_status(0, TaskStatus::Completed).unwrap();
    store.delete(1).unwrap();

    assert_eq!(
        pairs(store.list()),
        vec![("Buy milk".to_string(), TaskStatus::Completed)]
    );

    let stats = store.stats();
    assert_eq!(stats.total, 1);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.progress, 1.0);

    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "Task,Status\nBuy milk,Completed\n"
    );
}

#[test]
fn test_add_then_list_ends_with_new_pending_task() {
    let (_temp, mut store) = setup();
    for text in ["x", "a longer task", "ünïcödé ✨", "with, comma", "\"quoted\""] {
        store.add(text).unwrap();
        let last = store.list().last().unwrap();
        assert_eq!(last.text, text);
        assert_eq!(last.status, TaskStatus::Pending);
    }
}

#[test]
fn test_blank_add_is_rejected_and_store_unchanged() {
    let (_temp, mut store) = setup();
    store.add("keep me").unwrap();
    let before = fs::read_to_string(store.path()).unwrap();

    for text in ["", "   "] {
        assert!(matches!(store.add(text), Err(StoreError::Validation(_))));
    }

    assert_eq!(store.len(), 1);
    assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
}

#[test]
fn test_out_of_range_index_is_rejected() {
    let (_temp, mut store) = setup();
    store.add("only").unwrap();

    assert!(matches!(
        store.set_status(1, TaskStatus::Completed),
        Err(StoreError::IndexOutOfRange { index: 1, len: 1 })
    ));
    assert!(matches!(
        store.delete(usize::MAX),
        Err(StoreError::IndexOutOfRange { .. })
    ));
    assert_eq!(
        pairs(store.list()),
        vec![("only".to_string(), TaskStatus::Pending)]
    );
}

#[test]
fn test_empty_store_operations() {
    let (_temp, mut store) = setup();
    let stats = store.stats();
    assert_eq!((stats.total, stats.completed, stats.progress), (0, 0, 0.0));
    assert!(matches!(
        store.delete(0),
        Err(StoreError::IndexOutOfRange { index: 0, len: 0 })
    ));
}

#[test]
fn test_stats_one_of_three() {
    let (_temp, mut store) = setup();
    store.add("a").unwrap();
    store.add("b").unwrap();
    store.add("c").unwrap();
    store.set_status(2, TaskStatus::Completed).unwrap();

    let stats = store.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 1);
    assert!((stats.progress - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_persisted_state_reloads_equal() {
    let (_temp, mut store) = setup();
    store.add("Buy milk").unwrap();
    store.add("eggs, flour, \"good\" butter").unwrap();
    store.add("line one\nline two").unwrap();
    store.add("to be removed").unwrap();
    store.set_status(1, TaskStatus::Completed).unwrap();
    store.set_status(2, TaskStatus::Completed).unwrap();
    store.set_status(2, TaskStatus::Pending).unwrap();
    store.delete(3).unwrap();

    assert_eq!(pairs(&reopen(&store)), pairs(store.list()));

    let reopened = TaskStore::open(store.path()).unwrap();
    assert_eq!(pairs(reopened.list()), pairs(store.list()));
}

#[test]
fn test_delete_shifts_later_tasks() {
    let (_temp, mut store) = setup();
    for text in ["t0", "t1", "t2", "t3", "t4"] {
        store.add(text).unwrap();
    }
    let before: Vec<String> = store.list().iter().map(|t| t.text.clone()).collect();

    store.delete(2).unwrap();

    let after: Vec<String> = store.list().iter().map(|t| t.text.clone()).collect();
    assert_eq!(after.len(), before.len() - 1);
    assert_eq!(&after[..2], &before[..2]);
    assert_eq!(&after[2..], &before[3..]);
}

#[test]
fn test_malformed_file_is_reported_on_open() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tasks.csv");
    fs::write(&path, "Task,Status\nBuy milk,Someday\n").unwrap();

    let err = TaskStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Malformed { line: 2, .. }));
    assert!(err.to_string().contains("Someday"));
}

#[test]
fn test_reads_file_written_by_other_tools() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tasks.csv");
    fs::write(
        &path,
        "Task,Status\r\n\"Call Bob, then Alice\",Pending\r\nShip it,Completed\r\n",
    )
    .unwrap();

    let store = TaskStore::open(&path).unwrap();
    assert_eq!(
        pairs(store.list()),
        vec![
            ("Call Bob, then Alice".to_string(), TaskStatus::Pending),
            ("Ship it".to_string(), TaskStatus::Completed),
        ]
    );
}

#[test]
fn test_no_temp_files_left_behind() {
    let (temp, mut store) = setup();
    store.add("a").unwrap();
    store.add("b").unwrap();
    store.delete(0).unwrap();

    let mut names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["tasks.csv", "tasks.csv.bak", "tasks.csv.lock"]);
}
